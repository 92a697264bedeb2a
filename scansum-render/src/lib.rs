//! Pure rendering utilities for scansum.
//!
//! Every function here maps data to ratatui text fragments with no I/O
//! and no shared state; the TUI and the one-shot printer both consume
//! these fragments.

pub mod format;
pub mod markdown;
pub mod preview;
pub mod stats;
pub mod theme;

pub use format::{format_processing_time, format_timestamp};
pub use markdown::markdown_lines;
pub use preview::{PREVIEW_LIMIT, host_count_label, host_preview, preview_lines};
pub use stats::stats_cards;
