//! Diagnosis input: the document model and the observable stores that hold
//! the most recent result.
//!
//! * [`DiagnosisResponse`] / [`DiagnosisAnalysis`] / [`Condition`] — lenient
//!   JSON model of the upstream analysis.
//! * [`Store`] / [`Subscription`] — generic publish/subscribe value holder.
//! * [`DiagnosisStores`] — one store per concern (response, latest analysis).
//! * [`DiagnosisError`] — load failures.

pub mod store;
pub mod types;

pub use store::{DiagnosisStores, Store, Subscription};
pub use types::{Condition, DiagnosisAnalysis, DiagnosisError, DiagnosisResponse};
