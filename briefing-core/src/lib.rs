//! Core library for the `weather` and `headlines` CLIs.
//!
//! This crate defines:
//! - Request models and flag validation
//! - One `Endpoint` per provider plus a shared `ApiClient` that sends the
//!   request and interprets the response
//! - The error taxonomy surfaced to users
//! - Optional on-disk configuration and logging setup
//!
//! Both binaries are thin wrappers around it.

pub mod compass;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod provider;

pub use config::{Config, ProviderConfig};
pub use error::FetchError;
pub use model::{ExclusionSet, HeadlineSet, NewsQuery, WeatherQuery, WeatherReport};
pub use provider::{
    ApiClient, Endpoint, ProviderId, newsapi::NewsApiEndpoint, openweather::OpenWeatherEndpoint,
};
