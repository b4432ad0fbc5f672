//! HTTP dispatch

use crate::errors::HttpError;
use crate::response::ApiResponse;
use crate::spec::{ConcreteRequest, RequestLogDetail};
use crate::types::HttpMethod;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use reqprobe_config::HttpConfig;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, info};

/// HTTP client for dispatching built requests.
///
/// Wraps a single `reqwest::Client` configured from [`HttpConfig`]. Every
/// dispatch is one attempt: a transport failure or timeout surfaces as
/// [`HttpError::Network`] with no retry. In offline mode the client answers
/// from canned responses instead of the network, which keeps client and
/// verification logic testable without a live service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    offline: bool,
    canned: HashMap<String, CannedResponse>,
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: u16,
    body: String,
}

impl ApiClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, HttpError> {
        Self::with_config(&HttpConfig::default())
    }

    /// Create a client from the suite's HTTP configuration
    pub fn with_config(config: &HttpConfig) -> Result<Self, HttpError> {
        debug!(
            "Creating ApiClient with timeout: {}s",
            config.timeout.as_secs()
        );
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .redirect(reqwest::redirect::Policy::limited(
                config.max_redirects as usize,
            ))
            .build()?;

        Ok(Self {
            client,
            offline: false,
            canned: HashMap::new(),
        })
    }

    /// Switch the client to offline mode
    pub fn set_offline(&mut self) {
        self.offline = true;
        debug!("ApiClient set to offline mode");
    }

    /// Register a canned response served in offline mode
    pub fn add_canned(
        &mut self,
        method: HttpMethod,
        url: &str,
        status: u16,
        body: impl Into<String>,
    ) {
        let key = canned_key(method, url);
        self.canned.insert(
            key,
            CannedResponse {
                status,
                body: body.into(),
            },
        );
        debug!("Added canned response for {} {}", method, url);
    }

    /// Dispatch a built request and collect the response.
    ///
    /// Blocks the calling task until the response arrives or the configured
    /// timeout elapses. Exactly one attempt is made.
    pub async fn execute(&self, request: &ConcreteRequest) -> Result<ApiResponse, HttpError> {
        log_request(request);

        if self.offline {
            let key = canned_key(request.method, request.url.as_str());
            return match self.canned.get(&key) {
                Some(canned) => Ok(ApiResponse {
                    status: canned.status,
                    headers: HashMap::new(),
                    body: canned.body.clone(),
                }),
                None => Err(HttpError::NoCannedResponse(key)),
            };
        }

        let mut header_map = HeaderMap::new();
        for (name, value) in &request.headers {
            let header_name = HeaderName::from_str(name).map_err(|e| HttpError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| HttpError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
            })?;
            header_map.insert(header_name, header_value);
        }

        let mut builder = self
            .client
            .request(request.method.into(), request.url.clone())
            .headers(header_map);

        if let Some(ref body) = request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    /// Dispatch a plain GET against an absolute URL.
    ///
    /// Used for endpoints configured as complete addresses, like the grid
    /// status document.
    pub async fn get(&self, url: &str) -> Result<ApiResponse, HttpError> {
        let url = Url::parse(url).map_err(|e| HttpError::InvalidUrl(format!("{}: {}", url, e)))?;
        self.execute(&ConcreteRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
            log: RequestLogDetail::default(),
        })
        .await
    }
}

fn canned_key(method: HttpMethod, url: &str) -> String {
    format!("{} {}", method, url)
}

fn log_request(request: &ConcreteRequest) {
    if request.log.uri {
        info!("--> {} {}", request.method, request.url);
    }
    if request.log.body {
        match request.body {
            Some(ref body) => info!("--> body: {}", body),
            None => info!("--> body: <none>"),
        }
    }
}
