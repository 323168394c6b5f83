use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::icon::{Icon, icon_for};

/// Weather fields captured from one successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub country_code: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    /// Provider condition code, e.g. "Clear" or "Rain".
    pub condition: String,
    pub description: String,
    pub observed_at: Option<DateTime<Utc>>,
}

impl WeatherSnapshot {
    pub fn icon(&self) -> Icon {
        icon_for(&self.condition)
    }

    pub fn card(&self) -> CardView {
        CardView::from(self)
    }
}

/// Display strings for the weather card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub icon: Icon,
    pub temperature: String,
    pub location: String,
    pub description: String,
    pub humidity: String,
    pub pressure: String,
    pub wind: String,
    pub feels_like: String,
}

impl From<&WeatherSnapshot> for CardView {
    fn from(s: &WeatherSnapshot) -> Self {
        Self {
            icon: s.icon(),
            temperature: format!("{}°", round_half_up(s.temperature_c)),
            location: location_label(&s.location_name, &s.country_code),
            description: s.description.clone(),
            humidity: format!("{}%", s.humidity_pct),
            pressure: format!("{} hPa", s.pressure_hpa),
            wind: format!("{} m/s", s.wind_speed_mps),
            feels_like: format!("{}°C", round_half_up(s.feels_like_c)),
        }
    }
}

fn location_label(name: &str, country: &str) -> String {
    if country.is_empty() {
        name.to_string()
    } else {
        format!("{name}, {country}")
    }
}

/// Round to the nearest integer, halves going toward positive infinity.
///
/// `f64::round` sends -2.5 to -3; the card shows -2 there.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}
