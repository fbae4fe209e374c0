//! Care Navigator — routes diagnosed conditions to nearby care.
//!
//! * [`specialty`] — rule-based classifier from conditions + hint to a
//!   places search profile.
//! * [`diagnosis`] — diagnosis document model and observable stores.
//! * [`navigator`] — combines the stores, the classifier, caller overrides
//!   and defaults into the final map view.
//! * [`config`] — TOML settings.

pub mod config;
pub mod diagnosis;
pub mod navigator;
pub mod specialty;
