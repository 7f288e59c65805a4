use std::{
    io::{self, Write},
    path::PathBuf,
};

use briefing_core::{
    ApiClient, Config, ExclusionSet, HeadlineSet, NewsApiEndpoint, NewsQuery, logging,
    provider::newsapi::{CATEGORIES, COUNTRIES, SOURCES},
};
use clap::{Parser, builder::PossibleValuesParser};

/// Print top headlines from NewsAPI.org, one per line.
#[derive(Debug, Parser)]
#[command(name = "headlines", version, about = "Print top news headlines from NewsAPI.org")]
pub struct Cli {
    /// API key.
    #[arg(short = 'k', long = "key")]
    pub key: String,

    /// Country to fetch headlines for. Requires --category.
    #[arg(short = 'u', long, value_parser = PossibleValuesParser::new(COUNTRIES.iter().copied()))]
    pub country: Option<String>,

    /// Headline category. Requires --country.
    #[arg(short = 'c', long, value_parser = PossibleValuesParser::new(CATEGORIES.iter().copied()))]
    pub category: Option<String>,

    /// Single news source. Can't be combined with --country or --category.
    #[arg(short = 's', long, value_parser = PossibleValuesParser::new(SOURCES.iter().copied()))]
    pub source: Option<String>,

    /// A file containing headlines to exclude, one headline per line.
    #[arg(short = 'x', long)]
    pub exclude: Option<PathBuf>,

    /// Log request details to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_query(self) -> NewsQuery {
        NewsQuery {
            api_key: self.key,
            source: self.source,
            country: self.country,
            category: self.category,
            exclude: self.exclude,
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        logging::init(self.verbose);

        let query = self.into_query();
        query.validate()?;

        // Read before the request so a bad file never costs an API call.
        let excluded = match &query.exclude {
            Some(path) => ExclusionSet::load(path)?,
            None => ExclusionSet::default(),
        };
        tracing::debug!(count = excluded.len(), "loaded excluded titles");

        let config = Config::load()?;
        let endpoint = NewsApiEndpoint::from_config(&config);

        if let Some(headlines) = ApiClient::new().fetch(&endpoint, &query).await? {
            print_headlines(&mut io::stdout().lock(), &headlines.without(&excluded))?;
        }

        Ok(())
    }
}

fn print_headlines(out: &mut impl Write, headlines: &HeadlineSet) -> io::Result<()> {
    for title in headlines.iter() {
        writeln!(out, "{title}")?;
    }
    out.flush()
}
