use std::env;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::constants::{defaults, envvars, keys};
use crate::interfaces::http_api::{ApiClient, ApiError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
    #[error("no account token: set '{}' in the analysis environment or {}", keys::ACCOUNT_TOKEN, envvars::ACCOUNT_TOKEN)]
    MissingAccountToken,
    #[error("could not parse {0} as JSON: {1}")]
    ParseJson(&'static str, #[source] serde_json::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Entry of the environment table configured for the analysis on the platform
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
}

/// Everything a run needs: one client per credential, plus the configured environment
#[derive(Clone, Debug)]
pub struct Context {
    /// Authenticated with the analysis token
    pub resources: ApiClient,
    /// Authenticated with the account-level token
    pub account: ApiClient,
    pub environment: Vec<EnvVar>,
}

impl Context {
    pub fn new(resources: ApiClient, account: ApiClient, environment: Vec<EnvVar>) -> Self {
        Self {
            resources,
            account,
            environment,
        }
    }

    /// Build the context from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            env::var(envvars::API_BASE_URL).unwrap_or_else(|_| defaults::API_BASE_URL.to_string());
        let analysis_token = non_empty_var(envvars::ANALYSIS_TOKEN)
            .ok_or(ConfigError::Missing(envvars::ANALYSIS_TOKEN))?;

        let environment: Vec<EnvVar> = json_var(envvars::ANALYSIS_ENV)?.unwrap_or_default();
        let account_token = non_empty_var(envvars::ACCOUNT_TOKEN)
            .or_else(|| env_value(&environment, keys::ACCOUNT_TOKEN).map(str::to_string))
            .ok_or(ConfigError::MissingAccountToken)?;

        log::debug!(
            "Using API at {} with {} analysis environment entries",
            base_url,
            environment.len()
        );

        Ok(Self::new(
            ApiClient::new(&base_url, analysis_token)?,
            ApiClient::new(&base_url, account_token)?,
            environment,
        ))
    }
}

/// Trigger payload of the run, if the hosting platform passed one
pub fn scope_from_env() -> Result<Vec<Value>, ConfigError> {
    Ok(json_var(envvars::ANALYSIS_DATA)?.unwrap_or_default())
}

fn env_value<'a>(environment: &'a [EnvVar], key: &str) -> Option<&'a str> {
    environment
        .iter()
        .find(|e| e.key == key)
        .map(|e| e.value.as_str())
        .filter(|v| !v.is_empty())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn json_var<T: serde::de::DeserializeOwned>(
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match non_empty_var(name) {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| ConfigError::ParseJson(name, e)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_JSON: &str = r#"[{"key": "account_token", "value": "from-env-table"}, {"key": "other", "value": "x"}]"#;

    #[test]
    fn account_token_from_analysis_environment() {
        temp_env::with_vars(
            [
                (envvars::ANALYSIS_TOKEN, Some("analysis")),
                (envvars::ANALYSIS_ENV, Some(ENV_JSON)),
                (envvars::ACCOUNT_TOKEN, None),
                (envvars::API_BASE_URL, Some("http://localhost:8080")),
            ],
            || {
                let context = Context::from_env().unwrap();
                assert_eq!(context.environment.len(), 2);
                assert_eq!(
                    env_value(&context.environment, keys::ACCOUNT_TOKEN),
                    Some("from-env-table")
                );
                assert_eq!(env_value(&context.environment, "missing"), None);
                assert_eq!(context.resources.base_url(), "http://localhost:8080/");
            },
        );
    }

    #[test]
    fn account_token_variable_and_default_api_url() {
        temp_env::with_vars(
            [
                (envvars::ANALYSIS_TOKEN, Some("analysis")),
                (envvars::ANALYSIS_ENV, Some(ENV_JSON)),
                (envvars::ACCOUNT_TOKEN, Some("from-var")),
                (envvars::API_BASE_URL, None),
            ],
            || {
                let context = Context::from_env().unwrap();
                assert_eq!(context.account.base_url(), "https://api.tago.io/");
            },
        );
    }

    #[test]
    fn missing_analysis_token() {
        temp_env::with_vars(
            [
                (envvars::ANALYSIS_TOKEN, None::<&str>),
                (envvars::ACCOUNT_TOKEN, Some("account")),
            ],
            || {
                assert!(matches!(
                    Context::from_env(),
                    Err(ConfigError::Missing(envvars::ANALYSIS_TOKEN))
                ));
            },
        );
    }

    #[test]
    fn missing_account_token() {
        temp_env::with_vars(
            [
                (envvars::ANALYSIS_TOKEN, Some("analysis")),
                (envvars::ANALYSIS_ENV, Some(r#"[{"key": "account_token", "value": ""}]"#)),
                (envvars::ACCOUNT_TOKEN, None),
            ],
            || {
                assert!(matches!(
                    Context::from_env(),
                    Err(ConfigError::MissingAccountToken)
                ));
            },
        );
    }

    #[test]
    fn malformed_environment_json() {
        temp_env::with_vars(
            [
                (envvars::ANALYSIS_TOKEN, Some("analysis")),
                (envvars::ANALYSIS_ENV, Some("{not json")),
                (envvars::ACCOUNT_TOKEN, Some("account")),
            ],
            || {
                assert!(matches!(
                    Context::from_env(),
                    Err(ConfigError::ParseJson(envvars::ANALYSIS_ENV, _))
                ));
            },
        );
    }

    #[test]
    fn scope_defaults_to_empty() {
        temp_env::with_var(envvars::ANALYSIS_DATA, None::<&str>, || {
            assert!(scope_from_env().unwrap().is_empty());
        });
        temp_env::with_var(envvars::ANALYSIS_DATA, Some(r#"[{"variable": "x"}]"#), || {
            assert_eq!(scope_from_env().unwrap().len(), 1);
        });
    }
}
