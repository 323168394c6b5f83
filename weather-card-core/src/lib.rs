//! Core library for the `weather` card.
//!
//! This crate defines:
//! - Configuration & API key handling
//! - The OpenWeather current-weather client
//! - The query state machine and card formatting
//!
//! It is used by `weather-card-cli`, but can also back other front ends.

pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;
pub mod view;

pub use config::Config;
pub use error::{FetchError, QUERY_FAILED_MESSAGE};
pub use icon::{Glyph, Icon, Tint, icon_for};
pub use model::{CardView, WeatherSnapshot};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use view::{QueryTicket, ViewState, WeatherApp};
