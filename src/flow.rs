use tracing::{debug, info};

use crate::fetch::MetricsSource;
use crate::render::{Limits, StatusRenderer, UiSink};
use crate::tab::{locate_active_tab, TabQuery};

/// Run one popup invocation: locate the active tab, fetch the PR metrics,
/// render the verdict. Each step fully completes before the next starts.
///
/// Every failure is converted to status text here; nothing propagates out
/// of a run.
pub async fn run<S: UiSink>(
    tabs: &dyn TabQuery,
    source: &dyn MetricsSource,
    sink: &mut S,
    limits: Limits,
) {
    let mut ui = StatusRenderer::new(sink, limits);

    info!("locating active tab");
    let url = match locate_active_tab(tabs).await {
        Ok(url) => url,
        Err(err) => {
            ui.render_status(&format!("ERROR: {}", err));
            return;
        }
    };

    ui.render_status(&format!("Fetching data for {}", url));

    info!("fetching pull request metrics");
    match source.metrics_for(&url).await {
        Ok(metrics) => {
            debug!(commits = metrics.commits, changed_files = metrics.changed_files, "fetched metrics");
            ui.render_details(&metrics);
        }
        Err(err) => ui.render_status(&format!("ERROR: {}", err)),
    }
}
