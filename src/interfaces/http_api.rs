use std::fmt;

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use thiserror::Error;
use ureq::http::Response;
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::{Agent, Body};
use url::Url;

use crate::analysis::models::{AccountInfo, DataPoint, Device, Parameter, Tag};
use crate::constants::defaults;

const AUTH_HEADER: &str = "Authorization";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request error: {0}")]
    Request(#[from] ureq::Error),
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("API URL cannot be used as a base: {0}")]
    BaseUrl(String),
    #[error("request rejected by platform: {0}")]
    Rejected(String),
}

/// Response wrapper used by every platform endpoint
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    status: bool,
    message: Option<String>,
    result: Option<T>,
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<T, ApiError> {
        match self {
            Envelope {
                status: true,
                result: Some(result),
                ..
            } => Ok(result),
            Envelope { message, .. } => Err(ApiError::Rejected(
                message.unwrap_or_else(|| "no result in response".into()),
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeviceListQuery {
    pub amount: u32,
    pub fields: Vec<String>,
    pub tags: Vec<Tag>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataQuery {
    pub variables: Vec<String>,
    pub query: String,
}

/// Blocking client for the platform API, bound to one credential
#[derive(Clone)]
pub struct ApiClient {
    agent: Agent,
    base_url: Url,
    token: String,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

fn get_ureq_agent() -> Agent {
    let config = Agent::config_builder()
        .timeout_global(Some(defaults::API_REQUEST_TIMEOUT))
        .tls_config(
            TlsConfig::builder()
                .provider(TlsProvider::NativeTls)
                .build(),
        )
        .build();
    Agent::new_with_config(config)
}

fn read_result<T: DeserializeOwned>(mut response: Response<Body>) -> Result<T, ApiError> {
    let envelope: Envelope<T> = response.body_mut().read_json()?;
    envelope.into_result()
}

impl ApiClient {
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::BaseUrl(base_url.into()));
        }
        Ok(Self {
            agent: get_ureq_agent(),
            base_url,
            token: token.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn list_devices(&self, query: &DeviceListQuery) -> Result<Vec<Device>, ApiError> {
        let url = self.endpoint(&["device"])?;
        log::debug!("Listing devices with {:?}", query);

        let mut request = self
            .agent
            .get(url.as_str())
            .header(AUTH_HEADER, self.token.as_str())
            .query("page", "1")
            .query("amount", query.amount.to_string());
        for field in &query.fields {
            request = request.query("fields[]", field);
        }
        for (i, tag) in query.tags.iter().enumerate() {
            request = request
                .query(format!("filter[tags][{i}][key]"), &tag.key)
                .query(format!("filter[tags][{i}][value]"), &tag.value);
        }
        read_result(request.call()?)
    }

    pub fn get_device_data(
        &self,
        device_id: &str,
        query: &DataQuery,
    ) -> Result<Vec<DataPoint>, ApiError> {
        let url = self.endpoint(&["device", device_id, "data"])?;

        let mut request = self
            .agent
            .get(url.as_str())
            .header(AUTH_HEADER, self.token.as_str())
            .query("query", &query.query);
        for variable in &query.variables {
            request = request.query("variables[]", variable);
        }
        read_result(request.call()?)
    }

    pub fn get_device_params(&self, device_id: &str) -> Result<Vec<Parameter>, ApiError> {
        let url = self.endpoint(&["device", device_id, "params"])?;
        let response = self
            .agent
            .get(url.as_str())
            .header(AUTH_HEADER, self.token.as_str())
            .call()?;
        read_result(response)
    }

    /// Upsert parameters by key; entries carrying an `id` overwrite that record
    pub fn set_device_params(&self, device_id: &str, params: &[Parameter]) -> Result<(), ApiError> {
        let url = self.endpoint(&["device", device_id, "params"])?;
        log::trace!("Setting params on device {}: {:?}", device_id, params);
        let response = self
            .agent
            .post(url.as_str())
            .header(AUTH_HEADER, self.token.as_str())
            .send_json(params)?;
        let message: Value = read_result(response)?;
        log::debug!("Params set on device {}: {}", device_id, message);
        Ok(())
    }

    pub fn get_account_info(&self) -> Result<AccountInfo, ApiError> {
        let url = self.endpoint(&["account"])?;
        let response = self
            .agent
            .get(url.as_str())
            .header(AUTH_HEADER, self.token.as_str())
            .call()?;
        read_result(response)
    }
}
