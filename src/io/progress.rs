//! Progress display for indexing and rendering phases

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Cells: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display across the pipeline phases
///
/// Indexing progress is message-only (pool sizes are unknown until the scan
/// finishes); rendering gets a cell-count bar sized from the grid geometry.
#[derive(Default)]
pub struct ProgressManager {
    render_bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a new progress manager
    pub const fn new() -> Self {
        Self { render_bar: None }
    }

    /// Emit a one-line phase message
    #[allow(clippy::print_stderr)]
    pub fn note(&self, message: &str) {
        if let Some(ref bar) = self.render_bar {
            bar.println(message);
        } else {
            eprintln!("{message}");
        }
    }

    /// Start the cell placement bar
    pub fn start_render(&mut self, total_cells: usize) {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(CELL_STYLE.clone());
        self.render_bar = Some(bar);
    }

    /// Advance the placement bar by one cell
    pub fn cell_done(&self) {
        if let Some(ref bar) = self.render_bar {
            bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.render_bar {
            bar.finish_and_clear();
        }
    }
}
