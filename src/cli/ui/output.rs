use console::style;
use std::path::Path;

/// Styled run report for the terminal. Progress logging goes through `tracing`.
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn heading(&self, title: &str) {
        println!("\n{}", style(title).bold());
        println!("{}", style("─".repeat(40)).dim());
    }

    /// `  12 objects cleaned`, dimmed when nothing was counted
    pub fn count(&self, n: usize, label: &str) {
        let line = format!("{:>4} {}", n, label);
        if n == 0 {
            println!("{}", style(line).dim());
        } else {
            println!("{}", line);
        }
    }

    pub fn written(&self, label: &str, path: &Path) {
        println!("{} {} {}", style("✓").green(), label, style(path.display()).cyan());
    }

    /// One failed object, on stderr
    pub fn failure(&self, file: &str, message: &str) {
        eprintln!("{} {} {}", style("✗").red(), style(file).bold(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
