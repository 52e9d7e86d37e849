//! Transfer status state machine and step timeline.

pub mod error;
pub mod timeline;
pub mod types;

#[cfg(test)]
mod tests;

#[cfg(test)]
mod timeline_props;

pub use error::TransferError;
pub use timeline::{StatusTimeline, TimelineStep};
pub use types::{StatusTimestamps, StepState, Transfer, TransferStatus};
