use serde::Deserialize;
use serde_json::Value;

use crate::{
    Config,
    error::FetchError,
    model::{HeadlineSet, NewsQuery},
};

use super::{Endpoint, ProviderId};

pub const DEFAULT_URL: &str = "https://newsapi.org/v2/top-headlines";

pub const CATEGORIES: &[&str] = &[
    "business",
    "entertainment",
    "general",
    "health",
    "science",
    "sports",
    "technology",
];

pub const COUNTRIES: &[&str] = &[
    "ae", "ar", "at", "au", "be", "bg", "br", "ca", "ch", "cn", "co", "cu", "cz", "de", "eg", "fr",
    "gb", "gr", "hk", "hu", "id", "ie", "il", "in", "it", "jp", "kr", "lt", "lv", "ma", "mx", "my",
    "ng", "nl", "no", "nz", "ph", "pl", "pt", "ro", "rs", "ru", "sa", "se", "sg", "si", "sk", "th",
    "tr", "tw", "ua", "us", "ve", "za",
];

pub const SOURCES: &[&str] = &[
    "abc-news",
    "abc-news-au",
    "aftenposten",
    "al-jazeera-english",
    "ansa",
    "argaam",
    "ars-technica",
    "ary-news",
    "associated-press",
    "australian-financial-review",
    "axios",
    "bbc-news",
    "bbc-sport",
    "bild",
    "blasting-news-br",
    "bleacher-report",
    "bloomberg",
    "breitbart-news",
    "business-insider",
    "business-insider-uk",
    "buzzfeed",
    "cbc-news",
    "cbs-news",
    "cnbc",
    "cnn",
    "cnn-es",
    "crypto-coins-news",
    "daily-mail",
    "der-tagesspiegel",
    "die-zeit",
    "el-mundo",
    "engadget",
    "entertainment-weekly",
    "espn",
    "espn-cric-info",
    "financial-post",
    "financial-times",
    "focus",
    "football-italia",
    "fortune",
    "four-four-two",
    "fox-news",
    "fox-sports",
    "globo",
    "google-news",
    "google-news-ar",
    "google-news-au",
    "google-news-br",
    "google-news-ca",
    "google-news-fr",
    "google-news-in",
    "google-news-is",
    "google-news-it",
    "google-news-ru",
    "google-news-sa",
    "google-news-uk",
    "goteborgs-posten",
    "gruenderszene",
    "hacker-news",
    "handelsblatt",
    "ign",
    "il-sole-24-ore",
    "independent",
    "infobae",
    "info-money",
    "la-gaceta",
    "la-nacion",
    "la-repubblica",
    "le-monde",
    "lenta",
    "lequipe",
    "les-echos",
    "liberation",
    "marca",
    "mashable",
    "medical-news-today",
    "metro",
    "mirror",
    "msnbc",
    "mtv-news",
    "mtv-news-uk",
    "national-geographic",
    "national-review",
    "nbc-news",
    "news24",
    "new-scientist",
    "news-com-au",
    "newsweek",
    "new-york-magazine",
    "next-big-future",
    "nfl-news",
    "nhl-news",
    "nrk",
    "politico",
    "polygon",
    "rbc",
    "recode",
    "reddit-r-all",
    "reuters",
    "rt",
    "rte",
    "rtl-nieuws",
    "sabq",
    "spiegel-online",
    "svenska-dagbladet",
    "t3n",
    "talksport",
    "techcrunch",
    "techcrunch-cn",
    "techradar",
    "the-american-conservative",
    "the-economist",
    "the-globe-and-mail",
    "the-guardian-au",
    "the-guardian-uk",
    "the-hill",
    "the-hindu",
    "the-huffington-post",
    "the-irish-times",
    "the-jerusalem-post",
    "the-lad-bible",
    "the-new-york-times",
    "the-next-web",
    "the-sport-bible",
    "the-telegraph",
    "the-times-of-india",
    "the-verge",
    "the-wall-street-journal",
    "the-washington-post",
    "the-washington-times",
    "time",
    "usa-today",
    "vice-news",
    "wired",
    "wired-de",
    "wirtschafts-woche",
    "xinhua-net",
    "ynet",
];

/// NewsAPI top-headlines endpoint.
#[derive(Debug, Clone)]
pub struct NewsApiEndpoint {
    url: String,
}

impl NewsApiEndpoint {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        config
            .base_url(ProviderId::NewsApi)
            .map(Self::with_url)
            .unwrap_or_default()
    }
}

impl Default for NewsApiEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct NaArticle {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NaHeadlinesResponse {
    articles: Option<Vec<NaArticle>>,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

impl Endpoint for NewsApiEndpoint {
    type Query = NewsQuery;
    type Output = HeadlineSet;

    fn provider(&self) -> ProviderId {
        ProviderId::NewsApi
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn query_params(&self, query: &NewsQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![("apiKey", query.api_key.clone())];

        if let Some(source) = non_empty(query.source.as_ref()) {
            params.push(("sources", source));
        }

        // `category` rides along with `country`; validation keeps them paired.
        if let Some(country) = non_empty(query.country.as_ref()) {
            params.push(("country", country));
            if let Some(category) = non_empty(query.category.as_ref()) {
                params.push(("category", category));
            }
        }

        params
    }

    fn extract(&self, document: Value) -> Result<HeadlineSet, FetchError> {
        let parsed: NaHeadlinesResponse = serde_json::from_value(document)
            .map_err(|err| FetchError::Extraction(err.to_string()))?;

        let articles = parsed.articles.ok_or_else(|| FetchError::missing("articles"))?;

        let titles = articles
            .into_iter()
            .enumerate()
            .map(|(idx, article)| {
                article
                    .title
                    .ok_or_else(|| FetchError::missing(&format!("articles[{idx}].title")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(HeadlineSet::from_titles(titles))
    }
}
