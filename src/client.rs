use std::future::Future;
use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, ClientBuilder};
use serde_json::{Map, Value};

use crate::api::params::QueryParams;
use crate::config::Config;
use crate::error::{AppError, Result};

pub type JsonMap = Map<String, Value>;

const USER_AGENT: &str = concat!("places-collector/", env!("CARGO_PKG_VERSION"));
const ACCEPT_LANGUAGE_VALUE: &str = "ru-RU,ru;q=0.9,en;q=0.8";

/// Source of raw search responses.
///
/// Implementations never fail: an empty map means "no data, already logged".
pub trait PlacesApi {
    fn request(&self, params: &[(String, String)]) -> impl Future<Output = JsonMap>;
}

/// HTTP client for the places search endpoint.
pub struct LocatorClient {
    client: Client,
    base_url: String,
    api_key: String,
    lang: String,
}

impl LocatorClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));

        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            lang: config.lang.clone(),
        })
    }

    /// Base parameters merged with `params`; a key present in both takes the value from `params`.
    pub fn query_params(&self, params: &[(String, String)]) -> QueryParams {
        let mut query: QueryParams = vec![
            ("apikey".to_string(), self.api_key.clone()),
            ("format".to_string(), "json".to_string()),
            ("lang".to_string(), self.lang.clone()),
        ];

        for (key, value) in params {
            match query.iter_mut().find(|(k, _)| k == key) {
                Some(slot) => slot.1 = value.clone(),
                None => query.push((key.clone(), value.clone())),
            }
        }

        query
    }

    pub async fn try_request(&self, params: &[(String, String)]) -> Result<JsonMap> {
        let query = self.query_params(params);
        debug!("GET {} with {} parameters", self.base_url, query.len());

        let response = self.client.get(&self.base_url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::StatusError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let json: JsonMap = serde_json::from_str(&body)?;
        Ok(json)
    }
}

impl PlacesApi for LocatorClient {
    async fn request(&self, params: &[(String, String)]) -> JsonMap {
        match self.try_request(params).await {
            Ok(json) => json,
            Err(err) => {
                error!("Request error: {}", err);
                if let Some(body) = err.upstream_body() {
                    error!("Server response: {}", body);
                }
                Map::new()
            }
        }
    }
}
