//! Shared scenario support: one-time configuration, the HTTP client, and
//! the request/response specifications reused across the suite.
#![allow(dead_code)]

use once_cell::sync::Lazy;
use reqprobe_config::{ConfigLoader, ReqprobeConfig};
use reqprobe_http::{
    build_request, ApiClient, RequestOverrides, RequestSpec, ResponseSpec,
};
use std::path::PathBuf;
use std::sync::Once;

/// Process-wide configuration, loaded once before any scenario reads it
static CONFIG: Lazy<ReqprobeConfig> = Lazy::new(|| {
    ConfigLoader::new()
        .from_env()
        .expect("suite configuration must be valid")
});

/// Shared HTTP client built from the suite configuration
static CLIENT: Lazy<ApiClient> =
    Lazy::new(|| ApiClient::with_config(&CONFIG.http).expect("HTTP client must build"));

/// Request specification for JSON calls against the target API
pub static JSON_REQUEST_SPEC: Lazy<RequestSpec> = Lazy::new(|| {
    RequestSpec::new(
        CONFIG.target.base_uri.as_str(),
        CONFIG.target.base_path.as_str(),
    )
    .with_json_content()
    .log_uri()
    .log_body()
});

/// Request specification without a content type, for the degraded-format
/// scenarios
pub static PLAIN_REQUEST_SPEC: Lazy<RequestSpec> = Lazy::new(|| {
    RequestSpec::new(
        CONFIG.target.base_uri.as_str(),
        CONFIG.target.base_path.as_str(),
    )
    .log_uri()
    .log_body()
});

pub static OK_RESPONSE_SPEC: Lazy<ResponseSpec> =
    Lazy::new(|| ResponseSpec::status(200).log_status().log_body());

pub static CREATED_RESPONSE_SPEC: Lazy<ResponseSpec> =
    Lazy::new(|| ResponseSpec::status(201).log_status().log_body());

pub static NO_CONTENT_RESPONSE_SPEC: Lazy<ResponseSpec> =
    Lazy::new(|| ResponseSpec::status(204).log_status().log_body());

pub static BAD_REQUEST_RESPONSE_SPEC: Lazy<ResponseSpec> =
    Lazy::new(|| ResponseSpec::status(400).log_status().log_body());

pub static NOT_FOUND_RESPONSE_SPEC: Lazy<ResponseSpec> =
    Lazy::new(|| ResponseSpec::status(404).log_status().log_body());

static INIT: Once = Once::new();

/// Initialize logging once for the whole test binary
pub fn init() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(CONFIG.logging.level.as_filter_str())
            });
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init();
    });
}

pub fn config() -> &'static ReqprobeConfig {
    &CONFIG
}

pub fn client() -> &'static ApiClient {
    &CLIENT
}

/// Probe the target API and hand out the shared client when its fixture
/// data answers as expected. Scenarios skip cleanly otherwise, so a run
/// without network access reports no false failures.
pub async fn live_target() -> Option<&'static ApiClient> {
    let spec = RequestSpec::new(
        CONFIG.target.base_uri.as_str(),
        CONFIG.target.base_path.as_str(),
    );
    let request = build_request(&spec, RequestOverrides::get("users/2")).ok()?;

    match CLIENT.execute(&request).await {
        Ok(response) if response.status == 200 => Some(&CLIENT),
        Ok(response) => {
            println!(
                "ℹ️ Target {} answered probe with status {} - skipping live scenario",
                CONFIG.target.base_uri, response.status
            );
            None
        }
        Err(_) => {
            println!(
                "ℹ️ Target {} unreachable - skipping live scenario",
                CONFIG.target.base_uri
            );
            None
        }
    }
}

/// Probe the grid status endpoint, skipping grid scenarios when it is down
pub async fn live_grid() -> Option<&'static ApiClient> {
    match CLIENT.get(&CONFIG.grid.status_uri).await {
        Ok(response) if response.status == 200 => Some(&CLIENT),
        Ok(response) => {
            println!(
                "ℹ️ Grid {} answered probe with status {} - skipping live scenario",
                CONFIG.grid.status_uri, response.status
            );
            None
        }
        Err(_) => {
            println!(
                "ℹ️ Grid {} unreachable - skipping live scenario",
                CONFIG.grid.status_uri
            );
            None
        }
    }
}

/// Path of a schema document stored with the suite
pub fn schema_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("schemas")
        .join(name)
}

/// Month prefixes accepted by the recency checks: the current month, plus
/// the previous one so a run at a month boundary still passes
pub fn recent_month_prefixes() -> Vec<String> {
    use chrono::Datelike;

    let today = chrono::Utc::now().date_naive();
    let mut prefixes = vec![today.format("%Y-%m").to_string()];
    if let Some(first_of_month) = today.with_day(1) {
        let last_month = first_of_month - chrono::Days::new(1);
        prefixes.push(last_month.format("%Y-%m").to_string());
    }
    prefixes
}

/// Loose recency check on a service-stamped timestamp
pub fn is_recent_timestamp(value: &str) -> bool {
    recent_month_prefixes()
        .iter()
        .any(|prefix| value.starts_with(prefix))
}
