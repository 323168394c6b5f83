use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use weather_card_core::{
    Config, ViewState, WeatherApp, WeatherProvider, config::API_KEY_ENV, provider_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for any city")]
pub struct Cli {
    /// OpenWeather API key; takes precedence over the saved one.
    #[arg(long, env = API_KEY_ENV, global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Increase log output (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Save an OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Paris" or "New York".
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// Look up cities interactively until Esc or Ctrl-C.
    Search,
}

/// How a single query ended, for the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Shown,
    Failed,
    Blank,
}

impl Outcome {
    fn exit_status(self) -> u8 {
        match self {
            Outcome::Shown => 0,
            Outcome::Failed => 1,
            Outcome::Blank => 2,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.exit_status())
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure(self.api_key)?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city } => {
                let provider = load_provider(self.api_key)?;
                let mut app = WeatherApp::new();
                let outcome = query(&mut app, &provider, &city.join(" ")).await;
                Ok(outcome.into())
            }
            Command::Search => {
                let provider = load_provider(self.api_key)?;
                search_loop(&provider).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn load_provider(api_key: Option<String>) -> anyhow::Result<impl WeatherProvider> {
    let config = Config::load()?.with_api_key_override(api_key);
    provider_from_config(&config)
}

fn configure(api_key: Option<String>) -> anyhow::Result<()> {
    let key = match api_key {
        Some(key) => key,
        None => Password::new("OpenWeather API key:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?,
    };

    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    let mut config = Config::load()?;
    config.set_api_key(key.to_string());
    let path = config.save()?;
    tracing::debug!(path = %path.display(), "saved API key");

    println!("Saved API key to {}", path.display());
    Ok(())
}

async fn query<P>(app: &mut WeatherApp, provider: &P, city: &str) -> Outcome
where
    P: WeatherProvider + ?Sized,
{
    let Some(ticket) = app.begin(city) else {
        eprintln!("Please enter a city name.");
        return Outcome::Blank;
    };

    eprintln!("{}", render::render_state(app.state()));

    let result = provider.current_weather(ticket.city()).await;
    app.complete(ticket, result);

    let out = render::render_state(app.state());
    let outcome = match app.state() {
        ViewState::Failed(_) => {
            eprintln!("{out}");
            Outcome::Failed
        }
        _ => {
            println!("{out}");
            Outcome::Shown
        }
    };

    tracing::debug!(city, ?outcome, "query finished");
    outcome
}

async fn search_loop<P>(provider: &P) -> anyhow::Result<()>
where
    P: WeatherProvider + ?Sized,
{
    let mut app = WeatherApp::new();

    loop {
        let input = match Text::new("City:")
            .with_placeholder("Search any city worldwide")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read city name"),
        };

        if input.trim().is_empty() {
            continue;
        }

        query(&mut app, provider, &input).await;
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use clap::CommandFactory;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use weather_card_core::{FetchError, WeatherSnapshot};

    /// Answers every lookup with a fixed snapshot, or fails when `fail` is set.
    #[derive(Debug, Default)]
    struct StubProvider {
        fail: bool,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(FetchError::MissingCondition);
            }
            Ok(WeatherSnapshot {
                location_name: city.to_string(),
                country_code: "FR".into(),
                temperature_c: 18.4,
                feels_like_c: 17.9,
                humidity_pct: 60,
                pressure_hpa: 1012,
                wind_speed_mps: 3.1,
                condition: "Clouds".into(),
                description: "overcast clouds".into(),
                observed_at: None,
            })
        }
    }

    #[tokio::test]
    async fn query_shows_card_on_success() {
        let provider = StubProvider::default();
        let mut app = WeatherApp::new();

        let outcome = query(&mut app, &provider, "Paris").await;

        assert_eq!(outcome, Outcome::Shown);
        assert_eq!(outcome.exit_status(), 0);
        assert_eq!(provider.calls(), 1);
        assert_eq!(app.snapshot().unwrap().location_name, "Paris");
    }

    #[tokio::test]
    async fn query_reports_failure() {
        let provider = StubProvider::failing();
        let mut app = WeatherApp::new();

        let outcome = query(&mut app, &provider, "Atlantis").await;

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(outcome.exit_status(), 1);
        assert_eq!(provider.calls(), 1);
        assert_eq!(app.error(), Some("City not found ❌"));
    }

    #[tokio::test]
    async fn blank_query_never_calls_provider() {
        let provider = StubProvider::default();
        let mut app = WeatherApp::new();

        let outcome = query(&mut app, &provider, "  \t ").await;

        assert_eq!(outcome, Outcome::Blank);
        assert_eq!(outcome.exit_status(), 2);
        assert_eq!(provider.calls(), 0);
        assert_eq!(app.state(), &ViewState::Idle);
    }

    #[tokio::test]
    async fn query_matches_library_search() {
        let provider = StubProvider::default();

        let mut via_cli = WeatherApp::new();
        query(&mut via_cli, &provider, " Paris ").await;

        let mut via_lib = WeatherApp::new();
        via_lib.search(&provider, " Paris ").await;

        assert_eq!(via_cli.state(), via_lib.state());
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_joins_multi_word_city() {
        let cli = Cli::try_parse_from(["weather", "show", "New", "York"]).unwrap();
        match cli.command {
            Command::Show { city } => assert_eq!(city.join(" "), "New York"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn show_requires_a_city() {
        assert!(Cli::try_parse_from(["weather", "show"]).is_err());
    }

    #[test]
    fn api_key_flag_is_global() {
        let cli = Cli::try_parse_from(["weather", "search", "--api-key", "K", "-vv"]).unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("K"));
        assert_eq!(cli.verbose, 2);
    }
}
