mod config;
mod fetch;
mod flow;
mod render;
mod tab;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// pr-size — takes the URL of the GitHub Pull Request page open in the
/// current browser tab and reports whether the PR is small enough to
/// review in one sitting (at most 5 commits and 12 changed files).
#[derive(Parser, Debug)]
#[command(name = "pr-size", version, about)]
struct Cli {
    /// URL of the pull request page (e.g., https://github.com/org/repo/pull/42)
    ///
    /// Optional; when absent the tool reports that no page URL was handed
    /// over by the host environment.
    page_url: Option<String>,

    /// Use a built-in sample API response instead of calling GitHub
    #[arg(long)]
    r#mock: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("loading configuration");
    let config = config::Config::load()?;

    let mut ui = render::TerminalUi::new();

    if cli.r#mock {
        info!("using built-in sample response");
        return render_sample(&mut ui, config.limits);
    }

    let tabs = tab::ArgTab::new(cli.page_url);
    let source = fetch::GitHubFetcher::new();
    flow::run(&tabs, &source, &mut ui, config.limits).await;

    Ok(())
}

/// Feed the embedded sample API response through the same interpretation
/// and rendering path the live fetch uses, without touching the network.
fn render_sample(
    ui: &mut render::TerminalUi,
    limits: render::Limits,
) -> Result<(), Box<dyn std::error::Error>> {
    let body: serde_json::Value =
        serde_json::from_str(include_str!("../tests/fixtures/pull_response.json"))?;
    let metrics = fetch::metrics_from_body(&body)?;
    render::StatusRenderer::new(ui, limits).render_details(&metrics);
    Ok(())
}
