use std::{
    collections::{BTreeSet, HashSet},
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::{compass::compass_label, error::FetchError};

/// Current-conditions request for one postal code.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub api_key: String,
    pub postal_code: u32,
    pub country_code: String,
}

impl WeatherQuery {
    pub const UNITS: &'static str = "imperial";

    pub fn new(api_key: String, postal_code: u32, country_code: String) -> Self {
        Self { api_key, postal_code, country_code }
    }

    /// Value of the `zip` query parameter, e.g. `19103,us`.
    pub fn zip(&self) -> String {
        format!("{},{}", self.postal_code, self.country_code)
    }
}

/// Current conditions, already truncated to whole units.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature_f: i64,
    pub humidity_pct: i64,
    pub pressure_hpa: i64,
    pub wind_speed_mph: i64,
    /// Kept unrounded: the compass sector is computed from the raw bearing.
    pub wind_direction_deg: f64,
    pub condition: String,
}

impl WeatherReport {
    pub fn wind_compass(&self) -> &'static str {
        compass_label(self.wind_direction_deg)
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} deg, {}% humidity, {} hPa, {} mph {}, {}",
            self.temperature_f,
            self.humidity_pct,
            self.pressure_hpa,
            self.wind_speed_mph,
            self.wind_compass(),
            self.condition,
        )
    }
}

/// Top-headlines request.
#[derive(Debug, Clone, Default)]
pub struct NewsQuery {
    pub api_key: String,
    pub source: Option<String>,
    pub country: Option<String>,
    pub category: Option<String>,
    pub exclude: Option<PathBuf>,
}

impl NewsQuery {
    pub fn new(api_key: String) -> Self {
        Self { api_key, ..Self::default() }
    }

    /// Check flag combinations. The first failing rule wins, in this order:
    /// exclusion file exists, `source` excludes `country`/`category`,
    /// `country` and `category` come as a pair.
    pub fn validate(&self) -> Result<(), FetchError> {
        if let Some(path) = self.exclude.as_deref().filter(|path| !path.exists()) {
            return Err(FetchError::configuration(format!(
                "--exclude path does not exist: {}",
                path.display()
            )));
        }

        if self.source.is_some() && (self.country.is_some() || self.category.is_some()) {
            return Err(FetchError::configuration(
                "The --source flag can't be used with the --category or --country flags.",
            ));
        }

        if self.country.is_some() != self.category.is_some() {
            return Err(FetchError::configuration(
                "--category and --country must both be used together.",
            ));
        }

        Ok(())
    }
}

/// Distinct headline titles. Iterates in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlineSet(BTreeSet<String>);

impl HeadlineSet {
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(titles.into_iter().map(Into::into).collect())
    }

    /// Drop every title that exactly matches an excluded one.
    pub fn without(mut self, excluded: &ExclusionSet) -> Self {
        if !excluded.is_empty() {
            self.0.retain(|title| !excluded.contains(title));
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.0.contains(title)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Titles to suppress, one per line in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<String>);

impl ExclusionSet {
    pub fn load(path: &Path) -> Result<Self, FetchError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            FetchError::configuration(format!(
                "Failed to read exclusion list {}: {err}",
                path.display()
            ))
        })?;
        Ok(Self::parse(&contents))
    }

    pub fn parse(contents: &str) -> Self {
        Self(
            contents
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    pub fn contains(&self, title: &str) -> bool {
        self.0.contains(title)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
