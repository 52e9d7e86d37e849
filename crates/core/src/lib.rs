//! Core domain logic for Finch.
//!
//! This crate contains pure domain logic with ZERO web or I/O dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `transfer` - Transfer status state machine and step timeline
//! - `security` - Security posture scoring and checklist
//! - `limits` - Usage-against-limit calculation
//! - `geo` - ATM distance ranking and search filters
//! - `card` - Physical/virtual card variants and controls

pub mod card;
pub mod geo;
pub mod limits;
pub mod security;
pub mod transfer;
