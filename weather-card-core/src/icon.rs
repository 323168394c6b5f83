//! Condition-code to icon lookup.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Sun,
    Cloud,
    RainCloud,
}

impl Glyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Sun => "☀",
            Glyph::Cloud => "☁",
            Glyph::RainCloud => "🌧",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tint {
    Yellow,
    White,
    Blue,
    Purple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icon {
    pub glyph: Glyph,
    pub tint: Tint,
}

impl Icon {
    pub const fn new(glyph: Glyph, tint: Tint) -> Self {
        Self { glyph, tint }
    }
}

pub const DEFAULT_ICON: Icon = Icon::new(Glyph::Cloud, Tint::White);

const ICONS: &[(&str, Icon)] = &[
    ("Clear", Icon::new(Glyph::Sun, Tint::Yellow)),
    ("Clouds", Icon::new(Glyph::Cloud, Tint::White)),
    ("Rain", Icon::new(Glyph::RainCloud, Tint::Blue)),
    ("Drizzle", Icon::new(Glyph::RainCloud, Tint::Blue)),
    // no dedicated snow glyph
    ("Snow", Icon::new(Glyph::RainCloud, Tint::White)),
    ("Thunderstorm", Icon::new(Glyph::RainCloud, Tint::Purple)),
];

/// Icon for a provider condition code. Unknown codes get [`DEFAULT_ICON`].
pub fn icon_for(condition: &str) -> Icon {
    ICONS
        .iter()
        .find(|(code, _)| *code == condition)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entries() {
        assert_eq!(icon_for("Clear"), Icon::new(Glyph::Sun, Tint::Yellow));
        assert_eq!(icon_for("Clouds").glyph, Glyph::Cloud);
        assert_eq!(icon_for("Rain"), icon_for("Drizzle"));
        assert_eq!(icon_for("Snow"), Icon::new(Glyph::RainCloud, Tint::White));
        assert_eq!(
            icon_for("Thunderstorm"),
            Icon::new(Glyph::RainCloud, Tint::Purple)
        );
    }

    #[test]
    fn unknown_codes_fall_back_to_default() {
        for code in ["Mist", "Haze", "", "clear", "Tornado", "🌪"] {
            assert_eq!(icon_for(code), DEFAULT_ICON, "icon for {code:?}");
        }
    }
}
