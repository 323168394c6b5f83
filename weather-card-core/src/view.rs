//! Query state for the weather card.
//!
//! A query moves `Idle -> Loading -> Success | Failed`. Each started query
//! receives a [`QueryTicket`]; only the ticket of the most recently started
//! query may complete it, so a slow earlier response cannot overwrite a newer
//! one.

use crate::{FetchError, QUERY_FAILED_MESSAGE, WeatherProvider, WeatherSnapshot};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading {
        city: String,
    },
    Success(WeatherSnapshot),
    Failed(String),
}

/// Handle for one started query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    generation: u64,
    city: String,
}

impl QueryTicket {
    /// City name as it will be sent upstream (trimmed).
    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Debug, Default)]
pub struct WeatherApp {
    state: ViewState,
    generation: u64,
}

impl WeatherApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading { .. })
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match &self.state {
            ViewState::Success(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Start a query. Blank input is ignored and leaves the state untouched.
    pub fn begin(&mut self, city: &str) -> Option<QueryTicket> {
        let city = city.trim();
        if city.is_empty() {
            return None;
        }

        self.generation += 1;
        self.state = ViewState::Loading {
            city: city.to_string(),
        };

        Some(QueryTicket {
            generation: self.generation,
            city: city.to_string(),
        })
    }

    /// Apply the outcome of a fetch. Returns `false` if the ticket is stale.
    pub fn complete(
        &mut self,
        ticket: QueryTicket,
        result: Result<WeatherSnapshot, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                city = %ticket.city,
                "dropping response for superseded query"
            );
            return false;
        }

        self.state = match result {
            Ok(snapshot) => ViewState::Success(snapshot),
            Err(err) => {
                tracing::warn!(city = %ticket.city, error = %err, "weather query failed");
                ViewState::Failed(QUERY_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    /// Run a whole query against `provider`.
    pub async fn search<P>(&mut self, provider: &P, city: &str) -> &ViewState
    where
        P: WeatherProvider + ?Sized,
    {
        if let Some(ticket) = self.begin(city) {
            let result = provider.current_weather(ticket.city()).await;
            self.complete(ticket, result);
        }
        &self.state
    }
}
