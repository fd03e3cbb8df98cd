use super::{Icon, UiSink};
use colored::{ColoredString, Colorize};

/// UiSink that renders region updates as terminal lines.
///
/// Metric texts are buffered and printed alongside their indicator, so a
/// metric and its verdict land on one line the way the popup shows them
/// side by side.
#[derive(Debug, Default)]
pub struct TerminalUi {
    commits_text: String,
    files_text: String,
}

impl TerminalUi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UiSink for TerminalUi {
    fn set_status(&mut self, text: &str) {
        println!("{}", text);
    }

    fn set_commits_text(&mut self, text: &str) {
        self.commits_text = text.to_string();
    }

    fn set_files_text(&mut self, text: &str) {
        self.files_text = text.to_string();
    }

    fn set_commits_icon(&mut self, icon: Icon) {
        println!("{} {}", glyph(icon), self.commits_text);
    }

    fn set_files_icon(&mut self, icon: Icon) {
        println!("{} {}", glyph(icon), self.files_text);
    }
}

fn glyph(icon: Icon) -> ColoredString {
    match icon {
        Icon::Pass => "✓".green().bold(),
        Icon::Fail => "✗".red().bold(),
    }
}
