use briefing_core::{ApiClient, Config, OpenWeatherEndpoint, WeatherQuery, logging};
use clap::Parser;

/// Print current weather data from OpenWeatherMap.org.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Print current weather for a postal code")]
pub struct Cli {
    /// API key.
    #[arg(short = 'k', long = "key")]
    pub key: String,

    /// Postal code.
    #[arg(short = 'z', long = "zip")]
    pub zip: u32,

    /// Country code for the postal code.
    #[arg(short = 'c', long = "country", default_value = "us")]
    pub country: String,

    /// Log request details to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        logging::init(self.verbose);

        let config = Config::load()?;
        let endpoint = OpenWeatherEndpoint::from_config(&config);
        let query = WeatherQuery::new(self.key, self.zip, self.country);

        if let Some(report) = ApiClient::new().fetch(&endpoint, &query).await? {
            println!("{report}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn country_defaults_to_us() {
        let cli = Cli::try_parse_from(["weather", "-k", "KEY", "-z", "19103"]).unwrap();
        assert_eq!(cli.country, "us");
        assert_eq!(cli.zip, 19103);
        assert!(!cli.verbose);
    }

    #[test]
    fn zip_must_be_numeric() {
        assert!(Cli::try_parse_from(["weather", "-k", "KEY", "-z", "abc"]).is_err());
    }

    #[test]
    fn key_is_required() {
        assert!(Cli::try_parse_from(["weather", "-z", "19103"]).is_err());
    }
}
