pub mod terminal;

pub use terminal::TerminalUi;

use crate::fetch::PrMetrics;
use serde::Deserialize;

const DEFAULT_MAX_COMMITS: u64 = 5;
const DEFAULT_MAX_CHANGED_FILES: u64 = 12;

/// State of a pass/fail indicator. An indicator is hidden until it is
/// first set; setting it reveals it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Pass,
    Fail,
}

/// Size limits a PR must stay within to pass. Defaults are fixed at
/// 5 commits and 12 changed files; only a config file changes them.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Limits {
    #[serde(default = "default_max_commits")]
    pub max_commits: u64,
    #[serde(default = "default_max_changed_files")]
    pub max_changed_files: u64,
}

fn default_max_commits() -> u64 {
    DEFAULT_MAX_COMMITS
}

fn default_max_changed_files() -> u64 {
    DEFAULT_MAX_CHANGED_FILES
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_commits: DEFAULT_MAX_COMMITS,
            max_changed_files: DEFAULT_MAX_CHANGED_FILES,
        }
    }
}

/// The five addressable UI regions: one status text, two metric texts,
/// two pass/fail indicators. The renderer writes only through this trait,
/// so it carries no hidden global dependency.
pub trait UiSink {
    fn set_status(&mut self, text: &str);
    fn set_commits_text(&mut self, text: &str);
    fn set_files_text(&mut self, text: &str);
    fn set_commits_icon(&mut self, icon: Icon);
    fn set_files_icon(&mut self, icon: Icon);
}

/// Writes status and verdicts into a UiSink.
pub struct StatusRenderer<'a, S: UiSink> {
    sink: &'a mut S,
    limits: Limits,
}

impl<'a, S: UiSink> StatusRenderer<'a, S> {
    pub fn new(sink: &'a mut S, limits: Limits) -> Self {
        Self { sink, limits }
    }

    /// Overwrite the status region. Prior messages are not kept.
    pub fn render_status(&mut self, message: &str) {
        self.sink.set_status(message);
    }

    /// Show both metrics, set each indicator against its limit, and close
    /// with an overall verdict in the status region.
    pub fn render_details(&mut self, metrics: &PrMetrics) {
        self.sink
            .set_commits_text(&format!("Commits: {}", metrics.commits));
        self.sink
            .set_files_text(&format!("Files changed: {}", metrics.changed_files));

        let commits_ok = metrics.commits <= self.limits.max_commits;
        let files_ok = metrics.changed_files <= self.limits.max_changed_files;

        self.sink
            .set_commits_icon(if commits_ok { Icon::Pass } else { Icon::Fail });
        self.sink
            .set_files_icon(if files_ok { Icon::Pass } else { Icon::Fail });

        if commits_ok && files_ok {
            self.render_status("No issues found with the pull request.");
        } else {
            self.render_status("Too many changes for one pull request.");
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// UiSink that records every region write, for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub statuses: Vec<String>,
        pub commits_text: Option<String>,
        pub files_text: Option<String>,
        pub commits_icon: Option<Icon>,
        pub files_icon: Option<Icon>,
    }

    impl UiSink for RecordingSink {
        fn set_status(&mut self, text: &str) {
            self.statuses.push(text.to_string());
        }

        fn set_commits_text(&mut self, text: &str) {
            self.commits_text = Some(text.to_string());
        }

        fn set_files_text(&mut self, text: &str) {
            self.files_text = Some(text.to_string());
        }

        fn set_commits_icon(&mut self, icon: Icon) {
            self.commits_icon = Some(icon);
        }

        fn set_files_icon(&mut self, icon: Icon) {
            self.files_icon = Some(icon);
        }
    }

    fn render(metrics: PrMetrics) -> RecordingSink {
        let mut sink = RecordingSink::default();
        StatusRenderer::new(&mut sink, Limits::default()).render_details(&metrics);
        sink
    }

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_commits, 5);
        assert_eq!(limits.max_changed_files, 12);
    }

    #[test]
    fn test_small_pr_passes_both_checks() {
        let sink = render(PrMetrics { commits: 3, changed_files: 10 });
        assert_eq!(sink.commits_text.as_deref(), Some("Commits: 3"));
        assert_eq!(sink.files_text.as_deref(), Some("Files changed: 10"));
        assert_eq!(sink.commits_icon, Some(Icon::Pass));
        assert_eq!(sink.files_icon, Some(Icon::Pass));
        assert_eq!(
            sink.statuses.last().map(String::as_str),
            Some("No issues found with the pull request.")
        );
    }

    #[test]
    fn test_too_many_commits_fails_commit_check() {
        let sink = render(PrMetrics { commits: 6, changed_files: 10 });
        assert_eq!(sink.commits_icon, Some(Icon::Fail));
        assert_eq!(sink.files_icon, Some(Icon::Pass));
        assert_eq!(
            sink.statuses.last().map(String::as_str),
            Some("Too many changes for one pull request.")
        );
    }

    #[test]
    fn test_too_many_files_fails_file_check() {
        let sink = render(PrMetrics { commits: 2, changed_files: 30 });
        assert_eq!(sink.commits_icon, Some(Icon::Pass));
        assert_eq!(sink.files_icon, Some(Icon::Fail));
        assert_eq!(
            sink.statuses.last().map(String::as_str),
            Some("Too many changes for one pull request.")
        );
    }

    #[test]
    fn test_commit_boundary() {
        let at = render(PrMetrics { commits: 5, changed_files: 0 });
        assert_eq!(at.commits_icon, Some(Icon::Pass));

        let over = render(PrMetrics { commits: 6, changed_files: 0 });
        assert_eq!(over.commits_icon, Some(Icon::Fail));
    }

    #[test]
    fn test_file_boundary() {
        let at = render(PrMetrics { commits: 0, changed_files: 12 });
        assert_eq!(at.files_icon, Some(Icon::Pass));

        let over = render(PrMetrics { commits: 0, changed_files: 13 });
        assert_eq!(over.files_icon, Some(Icon::Fail));
    }

    #[test]
    fn test_custom_limits_shift_the_verdict() {
        let mut sink = RecordingSink::default();
        let limits = Limits { max_commits: 10, max_changed_files: 12 };
        StatusRenderer::new(&mut sink, limits)
            .render_details(&PrMetrics { commits: 6, changed_files: 10 });
        assert_eq!(sink.commits_icon, Some(Icon::Pass));
        assert_eq!(
            sink.statuses.last().map(String::as_str),
            Some("No issues found with the pull request.")
        );
    }

    #[test]
    fn test_render_status_overwrites() {
        let mut sink = RecordingSink::default();
        let mut renderer = StatusRenderer::new(&mut sink, Limits::default());
        renderer.render_status("first");
        renderer.render_status("second");
        assert_eq!(sink.statuses.last().map(String::as_str), Some("second"));
    }
}
