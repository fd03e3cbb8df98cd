pub mod types;

pub use types::{PrMetrics, PrUrl};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

/// The four ways a metrics lookup can fail. Every variant is terminal for
/// the current invocation and is surfaced verbatim as status text.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("This is not a Github Pull Request page!")]
    NotPullRequest,

    #[error("No response from GitHub API!")]
    NoResponse,

    #[error("Unexpected response from GitHub API!")]
    UnexpectedShape,

    #[error("Network error!")]
    Network(#[source] reqwest::Error),
}

/// Parse a GitHub PR page URL into its component parts.
///
/// Expected shape: {scheme}://github.com/{owner}/{repo}/pull/{number},
/// optionally followed by a sub-page segment such as /files or /commits.
/// The URL is parsed structurally, so scheme, host casing, and ports are
/// handled by the URL parser rather than by offset arithmetic.
pub fn parse_pr_url(url: &str) -> Result<PrUrl, FetchError> {
    let parsed = reqwest::Url::parse(url).map_err(|_| FetchError::NotPullRequest)?;

    if parsed.host_str() != Some("github.com") {
        return Err(FetchError::NotPullRequest);
    }

    let segments: Vec<_> = parsed
        .path_segments()
        .ok_or(FetchError::NotPullRequest)?
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.len() < 4 || segments[2] != "pull" {
        return Err(FetchError::NotPullRequest);
    }

    let number = segments[3]
        .parse::<u64>()
        .map_err(|_| FetchError::NotPullRequest)?;

    Ok(PrUrl {
        owner: segments[0].to_string(),
        repo: segments[1].to_string(),
        number,
    })
}

/// Derive the REST endpoint for a parsed PR URL.
pub fn api_endpoint(pr_url: &PrUrl) -> String {
    format!(
        "https://api.github.com/repos/{}/{}/pulls/{}",
        pr_url.owner, pr_url.repo, pr_url.number
    )
}

/// Interpret an API response body as PR size metrics.
///
/// Checks run in a fixed order: a null body or a "Not Found" message wins
/// over shape validation, and both counts must be non-negative integers.
pub fn metrics_from_body(body: &Value) -> Result<PrMetrics, FetchError> {
    if body.is_null() {
        return Err(FetchError::NoResponse);
    }
    if body.get("message").and_then(Value::as_str) == Some("Not Found") {
        return Err(FetchError::NoResponse);
    }

    let commits = body
        .get("commits")
        .and_then(Value::as_u64)
        .ok_or(FetchError::UnexpectedShape)?;
    let changed_files = body
        .get("changed_files")
        .and_then(Value::as_u64)
        .ok_or(FetchError::UnexpectedShape)?;

    Ok(PrMetrics { commits, changed_files })
}

/// Anything that can turn a PR page URL into size metrics.
/// The orchestrator depends on this seam so it can be exercised without
/// a live GitHub endpoint.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn metrics_for(&self, page_url: &str) -> Result<PrMetrics, FetchError>;
}

/// Production MetricsSource backed by the GitHub REST API.
pub struct GitHubFetcher {
    client: reqwest::Client,
}

impl GitHubFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl MetricsSource for GitHubFetcher {
    /// Validate the page URL, derive the endpoint, and issue one GET.
    ///
    /// The response body is interpreted regardless of HTTP status: GitHub
    /// answers a missing PR with a 404 carrying {"message": "Not Found"},
    /// and that message is what classifies the failure. A body that is
    /// empty or not JSON at all counts as no response.
    #[instrument(skip(self), fields(url = %page_url))]
    async fn metrics_for(&self, page_url: &str) -> Result<PrMetrics, FetchError> {
        let pr_url = parse_pr_url(page_url)?;
        let endpoint = api_endpoint(&pr_url);
        debug!(owner = %pr_url.owner, repo = %pr_url.repo, pr = pr_url.number, %endpoint, "derived API endpoint");

        let response = self
            .client
            .get(&endpoint)
            .header("User-Agent", "pr-size")
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        let body_text = response.text().await.map_err(FetchError::Network)?;
        debug!(%status, body_bytes = body_text.len(), "received API response");

        if body_text.trim().is_empty() {
            return Err(FetchError::NoResponse);
        }
        let body: Value = serde_json::from_str(&body_text).map_err(|_| FetchError::NoResponse)?;

        metrics_from_body(&body)
    }
}
