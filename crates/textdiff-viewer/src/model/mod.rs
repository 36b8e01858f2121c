//! Data models for text comparison.

mod diff;
mod sections;
mod text_pair;

pub use diff::{DiffResult, DiffSegment, DisplayRow, SegmentKind};
pub use sections::ExpandedSections;
pub use text_pair::TextPair;
