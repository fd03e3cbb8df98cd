use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TabError {
    #[error("No page URL available from the host environment!")]
    NoUrl,
}

/// The active tab as reported by the host environment. The URL may be
/// absent when the host did not hand one over (no argument on the command
/// line; in the browser analogue, a missing activeTab permission).
#[derive(Debug, Clone)]
pub struct TabRef {
    pub url: Option<String>,
}

/// Host capability: report the single active tab in the current window.
#[async_trait]
pub trait TabQuery: Send + Sync {
    async fn active_tab(&self) -> TabRef;
}

/// TabQuery fed from the command line: the positional argument plays the
/// role of the active tab's URL.
pub struct ArgTab {
    url: Option<String>,
}

impl ArgTab {
    pub fn new(url: Option<String>) -> Self {
        Self { url }
    }
}

#[async_trait]
impl TabQuery for ArgTab {
    async fn active_tab(&self) -> TabRef {
        TabRef {
            url: self.url.clone(),
        }
    }
}

/// Resolve the active tab to its URL, failing explicitly when the host
/// environment yields a tab without one.
pub async fn locate_active_tab(tabs: &dyn TabQuery) -> Result<String, TabError> {
    let tab = tabs.active_tab().await;
    debug!(url = tab.url.as_deref().unwrap_or("<none>"), "active tab resolved");
    tab.url.ok_or(TabError::NoUrl)
}
