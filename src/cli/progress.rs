//! Live Audit Progress
//!
//! Renders the audit engine's `(department, percent)` callbacks as a single
//! rewritten status line on stderr:
//!
//! ```text
//! [3/5] Customer Support [██████████████████░░░░░░░░░░░░]  60%
//! ```

use console::{Term, style};

const BAR_WIDTH: usize = 30;

/// Console renderer driven by the audit progress callback
pub struct ProgressRenderer {
    term: Term,
    enabled: bool,
    total: usize,
    completed: usize,
}

impl ProgressRenderer {
    /// Renderer for `total` departments; draws nothing when disabled or not a terminal
    pub fn new(total: usize, enabled: bool) -> Self {
        let term = Term::stderr();
        let enabled = enabled && term.is_term();
        Self {
            term,
            enabled,
            total,
            completed: 0,
        }
    }

    /// Record one department starting and redraw the status line.
    pub fn update(&mut self, department: &str, percent: f64) {
        self.completed += 1;
        tracing::debug!("Auditing {} ({:.0}%)", department, percent);

        if !self.enabled {
            return;
        }
        let line = render_line(self.completed, self.total, department, percent);
        // Progress is cosmetic; a failed terminal write must not abort the audit
        let _ = self.term.clear_line();
        let _ = self.term.write_str(&line);
    }

    /// Clear the status line once the audit is done.
    pub fn finish(&self) {
        if self.enabled && self.completed > 0 {
            let _ = self.term.clear_line();
        }
    }

    pub fn steps(&self) -> usize {
        self.completed
    }
}

/// One status line for the given step
pub fn render_line(step: usize, total: usize, department: &str, percent: f64) -> String {
    format!(
        "{} {} {} {:>3.0}%",
        style(format!("[{}/{}]", step, total)).dim(),
        style(department).bold(),
        render_progress_bar(percent, BAR_WIDTH),
        percent.clamp(0.0, 100.0)
    )
}

/// Render a simple progress bar
fn render_progress_bar(percent: f64, width: usize) -> String {
    let progress = (percent / 100.0).clamp(0.0, 1.0);
    let filled = (progress * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
