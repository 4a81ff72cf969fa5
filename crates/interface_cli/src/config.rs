//! CLI configuration
//!
//! Values come from an optional `party-details.toml` in the working
//! directory, overridden by `PARTY_*` environment variables (for example
//! `PARTY_DATASET_PATH`, `PARTY_PARTY_TYPE`, `PARTY_POSTING_DATE`). Run the
//! binary after `dotenvy` has loaded `.env` to pick up local overrides.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use core_kernel::{CoreError, PartyType};
use domain_party::PartyDetailsRequest;

use crate::error::CliError;

/// Base name of the optional configuration file
pub const CONFIG_FILE: &str = "party-details";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PARTY";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// JSON dataset to load (required)
    pub dataset_path: Option<PathBuf>,
    /// Locale for notices and errors
    pub locale: String,
    /// Log filter directive
    pub log_level: String,
    pub log_format: LogFormat,
    /// User the request is made as
    pub actor: String,

    // Request
    pub party: Option<String>,
    pub account: Option<String>,
    pub party_type: PartyType,
    pub company: Option<String>,
    pub posting_date: Option<NaiveDate>,
    pub price_list: Option<String>,
    pub currency: Option<String>,
    pub ignore_permissions: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            locale: "en-US".to_string(),
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
            actor: "Administrator".to_string(),
            party: None,
            account: None,
            party_type: PartyType::Customer,
            company: None,
            posting_date: None,
            price_list: None,
            currency: None,
            ignore_permissions: false,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the optional file and the environment
    pub fn load() -> Result<Self, CliError> {
        let config = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Parses configuration from TOML text
    pub fn from_toml(toml: &str) -> Result<Self, CliError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Returns the dataset path or a configuration error if it is unset
    pub fn dataset_path(&self) -> Result<&Path, CliError> {
        self.dataset_path.as_deref().ok_or_else(|| {
            CoreError::configuration(format!(
                "dataset_path is required (set {}_DATASET_PATH or add it to {}.toml)",
                ENV_PREFIX, CONFIG_FILE
            ))
            .into()
        })
    }

    /// Builds the resolution request; blank values count as absent
    pub fn request(&self) -> PartyDetailsRequest {
        let mut request = PartyDetailsRequest::new(self.party_type);
        if let Some(party) = &self.party {
            request = request.with_party(party.as_str());
        }
        if let Some(account) = &self.account {
            request = request.with_account(account.as_str());
        }
        if let Some(company) = &self.company {
            request = request.with_company(company.as_str());
        }
        if let Some(posting_date) = self.posting_date {
            request = request.with_posting_date(posting_date);
        }
        if let Some(price_list) = &self.price_list {
            request = request.with_price_list(price_list.as_str());
        }
        if let Some(currency) = &self.currency {
            request = request.with_currency(currency.as_str());
        }
        if self.ignore_permissions {
            request = request.ignoring_permissions();
        }
        request
    }
}
