//! Runtime configuration, read once from the environment at startup.
//!
//! | Variable                      | Required | Default                      |
//! |-------------------------------|----------|------------------------------|
//! | `EMAIL_SENDER`                | Yes      |                              |
//! | `EMAIL_PASSWORD`              | Yes      |                              |
//! | `EMAIL_RECEIVER`              | Yes      |                              |
//! | `ALERT_SEARCH_TERMS`          | No       | two entry-level data searches, `;`-separated |
//! | `ALERT_BOARD_URL`             | No       | `https://www.indeed.com`     |
//! | `SMTP_HOST`                   | No       | `smtp.gmail.com`             |
//! | `SMTP_PORT`                   | No       | `587`                        |
//! | `ALERT_REPORT_FETCH_FAILURES` | No       | `false`                      |

use std::env;

use job_scraper::DEFAULT_BASE_URL;
use notifier::{SmtpSettings, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT};
use thiserror::Error;

pub const SENDER_VAR: &str = "EMAIL_SENDER";
pub const PASSWORD_VAR: &str = "EMAIL_PASSWORD";
pub const RECEIVER_VAR: &str = "EMAIL_RECEIVER";
pub const SEARCH_TERMS_VAR: &str = "ALERT_SEARCH_TERMS";
pub const BOARD_URL_VAR: &str = "ALERT_BOARD_URL";
pub const SMTP_HOST_VAR: &str = "SMTP_HOST";
pub const SMTP_PORT_VAR: &str = "SMTP_PORT";
pub const REPORT_FAILURES_VAR: &str = "ALERT_REPORT_FETCH_FAILURES";

pub const DEFAULT_SEARCH_TERMS: [&str; 2] = [
    "Entry Level Data Analytics fresher jobs",
    "Entry Level Data Engineer fresher jobs",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variables EMAIL_SENDER or EMAIL_PASSWORD are missing.")]
    MissingCredentials,

    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub search_terms: Vec<String>,
    pub board_url: String,
    pub recipient: String,
    pub smtp: SmtpSettings,
    pub report_fetch_failures: bool,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        // Checked first: without a sending account nothing else matters.
        let (Some(sender), Some(password)) = (var(SENDER_VAR), var(PASSWORD_VAR)) else {
            return Err(ConfigError::MissingCredentials);
        };

        let recipient = var(RECEIVER_VAR).ok_or(ConfigError::MissingVar(RECEIVER_VAR))?;

        let search_terms = match var(SEARCH_TERMS_VAR) {
            Some(raw) => parse_terms(&raw)?,
            None => DEFAULT_SEARCH_TERMS.iter().map(|t| t.to_string()).collect(),
        };

        let port = match var(SMTP_PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|err| ConfigError::Invalid {
                    name: SMTP_PORT_VAR,
                    reason: err.to_string(),
                })?,
            None => DEFAULT_SMTP_PORT,
        };

        let report_fetch_failures = match var(REPORT_FAILURES_VAR) {
            Some(raw) => parse_flag(REPORT_FAILURES_VAR, &raw)?,
            None => false,
        };

        Ok(Self {
            search_terms,
            board_url: var(BOARD_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            recipient: recipient.trim().to_string(),
            smtp: SmtpSettings {
                host: var(SMTP_HOST_VAR).unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                port,
                sender: sender.trim().to_string(),
                password,
            },
            report_fetch_failures,
        })
    }
}

fn parse_terms(raw: &str) -> Result<Vec<String>, ConfigError> {
    let terms: Vec<String> = raw
        .split(';')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect();

    if terms.is_empty() {
        return Err(ConfigError::Invalid {
            name: SEARCH_TERMS_VAR,
            reason: "no search terms given".to_string(),
        });
    }
    Ok(terms)
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            name,
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}
