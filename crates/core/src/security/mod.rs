//! Security posture scoring and checklist.

pub mod service;
pub mod types;

#[cfg(test)]
mod score_props;

pub use service::SecurityService;
pub use types::{
    ChecklistItem, MfaMethod, PostureLabel, PostureReport, SecuritySettings, VerificationLevel,
};
