use chrono::Local;
use colored::{Color, Colorize};
use weather_card_core::{CardView, Icon, Tint, ViewState, WeatherSnapshot};

const BOX_WIDTH: usize = 12;

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Yellow => Color::Yellow,
        Tint::White => Color::White,
        Tint::Blue => Color::BrightBlue,
        Tint::Purple => Color::Magenta,
    }
}

fn icon(icon: Icon) -> String {
    icon.glyph.symbol().color(tint_color(icon.tint)).to_string()
}

/// Render the current view state. Idle renders as an empty string.
pub fn render_state(state: &ViewState) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Loading { .. } => "Loading...".to_string(),
        ViewState::Success(snapshot) => render_card(snapshot),
        ViewState::Failed(message) => message.red().to_string(),
    }
}

pub fn render_card(snapshot: &WeatherSnapshot) -> String {
    let card = CardView::from(snapshot);

    let mut lines = vec![
        format!("  {}  {}", icon(card.icon), card.temperature.bold()),
        format!("     {}", card.location),
        format!("     {}", card.description),
        String::new(),
    ];

    let boxes = [
        ("Humidity", &card.humidity),
        ("Pressure", &card.pressure),
        ("Wind", &card.wind),
        ("Feels Like", &card.feels_like),
    ];

    let titles: String = boxes
        .iter()
        .map(|(title, _)| format!("{title:<BOX_WIDTH$}"))
        .collect();
    let values: String = boxes
        .iter()
        .map(|(_, value)| format!("{value:<BOX_WIDTH$}"))
        .collect();

    lines.push(format!("  {}", titles.trim_end().dimmed()));
    lines.push(format!("  {}", values.trim_end().bold()));

    if let Some(at) = snapshot.observed_at {
        lines.push(String::new());
        lines.push(format!(
            "  {}",
            format!("Updated {}", at.with_timezone(&Local).format("%H:%M")).dimmed()
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> WeatherSnapshot {
        WeatherSnapshot {
            location_name: "Paris".into(),
            country_code: "FR".into(),
            temperature_c: 18.4,
            feels_like_c: 17.9,
            humidity_pct: 60,
            pressure_hpa: 1012,
            wind_speed_mps: 3.1,
            condition: "Clouds".into(),
            description: "overcast clouds".into(),
            observed_at: None,
        }
    }

    #[test]
    fn card_contains_every_metric() {
        colored::control::set_override(false);
        let out = render_card(&paris());

        assert!(out.contains("☁"));
        assert!(out.contains("18°"));
        assert!(out.contains("Paris, FR"));
        assert!(out.contains("overcast clouds"));
        for label in ["Humidity", "Pressure", "Wind", "Feels Like"] {
            assert!(out.contains(label), "missing {label}");
        }
        for value in ["60%", "1012 hPa", "3.1 m/s", "18°C"] {
            assert!(out.contains(value), "missing {value}");
        }
        assert!(!out.contains("Updated"));
    }

    #[test]
    fn observed_time_adds_footer() {
        colored::control::set_override(false);
        let snapshot = WeatherSnapshot {
            observed_at: chrono::DateTime::from_timestamp(1_700_000_000, 0),
            ..paris()
        };
        assert!(render_card(&snapshot).contains("Updated "));
    }

    #[test]
    fn states_render() {
        colored::control::set_override(false);

        assert_eq!(render_state(&ViewState::Idle), "");
        assert_eq!(
            render_state(&ViewState::Loading {
                city: "Paris".into()
            }),
            "Loading..."
        );
        assert_eq!(
            render_state(&ViewState::Failed("City not found ❌".into())),
            "City not found ❌"
        );
    }
}
