//! File-to-file layout driver
//!
//! read all records → build layout → write all slots, nothing kept between
//! runs. Output is fully rendered in memory and moved into place atomically.
//! Every readable input is laid out; a record that serializes like the
//! placeholder is only reported, since slot 0 is identified by position.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::layout::{EytzingerLayout, Strategy};
use crate::records::{read_records, render_lines, write_atomic, Placeholder, RecordError};

/// Input read when no path is given
pub const DEFAULT_INPUT: &str = "grapheme_break_data.txt";

/// Output written when no path is given
pub const DEFAULT_OUTPUT: &str = "grapheme_break_data_lo.txt";

/// Parameters for one driver run
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Sorted records, one per line
    pub input: PathBuf,

    /// Destination for the laid-out slots
    pub output: PathBuf,

    /// Token serialized in slot 0
    pub placeholder: Placeholder,

    /// Traversal used to place records
    pub strategy: Strategy,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            placeholder: Placeholder::default(),
            strategy: Strategy::default(),
        }
    }
}

/// Errors that abort a driver run
#[derive(Error, Debug)]
pub enum DriverError {
    /// Reading or writing a record file failed
    #[error(transparent)]
    Records(#[from] RecordError),
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSummary {
    /// Records laid out (placeholder excluded)
    pub records: usize,

    /// Levels in the implicit tree
    pub height: usize,

    /// Input records serialized identically to the placeholder
    pub placeholder_collisions: usize,

    /// blake3 hex digest of the bytes written
    pub fingerprint: String,
}

/// File contents for `layout`: placeholder line first, then slots 1..=n.
pub fn render(layout: &EytzingerLayout<String>) -> String {
    render_lines(layout.slots())
}

/// Lay out `config.input` into `config.output`.
///
/// Nothing is written unless every step succeeds.
pub fn run(config: &DriverConfig) -> Result<LayoutSummary, DriverError> {
    info!(input = %config.input.display(), strategy = %config.strategy, "reading records");
    let records = read_records(&config.input)?;

    let mut placeholder_collisions = 0;
    for (idx, record) in records.iter().enumerate() {
        if config.placeholder.matches(record) {
            placeholder_collisions += 1;
            warn!(
                line = idx + 1,
                token = %config.placeholder,
                "record serializes like the slot-0 placeholder"
            );
        }
    }

    let layout = EytzingerLayout::with_strategy(
        &records,
        config.placeholder.clone().into_token(),
        config.strategy,
    );
    debug!(records = layout.len(), height = layout.height(), "layout built");

    let contents = render(&layout);
    let fingerprint = blake3::hash(contents.as_bytes()).to_hex().to_string();
    write_atomic(&config.output, contents.as_bytes())?;

    info!(
        output = %config.output.display(),
        records = layout.len(),
        %fingerprint,
        "layout written"
    );

    Ok(LayoutSummary {
        records: layout.len(),
        height: layout.height(),
        placeholder_collisions,
        fingerprint,
    })
}
