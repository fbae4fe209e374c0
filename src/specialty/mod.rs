//! Specialty classifier: maps diagnosed conditions and an optional hint to a
//! nearby-care [`SearchProfile`].
//!
//! This module provides:
//! * [`derive_specialty_search`] — the plain entry point (substring matching).
//! * [`classify`] / [`SpecialtyClassifier`] — same algorithm, with a
//!   selectable [`MatchMode`] and the winning rule reported.
//! * [`RULES`] / [`DEFAULT_PROFILE`] — the ordered rule table and fallback.
//!
//! # Quick start
//!
//! ```rust
//! use care_navigator::diagnosis::Condition;
//! use care_navigator::specialty::{derive_specialty_search, PlaceType, DEFAULT_PROFILE};
//!
//! assert_eq!(derive_specialty_search(&[], ""), DEFAULT_PROFILE);
//!
//! let profile = derive_specialty_search(&[Condition::new("Eczema")], "");
//! assert_eq!(profile.title, "Nearby dermatology clinics");
//! assert_eq!(profile.place_type, PlaceType::Doctor);
//! ```

pub mod classifier;
pub mod profile;
pub mod rules;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use classifier::{
    classify, derive_specialty_search, search_text, Classification, MatchMode,
    SpecialtyClassifier,
};
pub use profile::{PlaceType, SearchProfile};
pub use rules::{Specialty, SpecialtyRule, DEFAULT_PROFILE, RULES};

/// The ordered rule table.
pub fn rules() -> &'static [SpecialtyRule] {
    RULES
}

/// The catch-all profile.
pub fn default_profile() -> SearchProfile {
    DEFAULT_PROFILE
}
