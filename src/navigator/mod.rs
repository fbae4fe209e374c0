//! Care navigator: turns the current diagnosis into a map view.
//!
//! # Architecture
//!
//! ```text
//! DiagnosisStores.response ──▶ analysis ──┬─▶ conditions ─┐
//!                                         └─▶ hint ───────┤
//! QueryOverrides.hint ────────────────────────────────────┤
//!                                                         ▼
//!                                       SpecialtyClassifier::classify
//!                                                         │
//! QueryOverrides (map fields) ──▶ MapConfig::resolve ◀────┘
//!                                         │
//!                                         ▼
//!                              MapView { config, description, … }
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use care_navigator::config::AppConfig;
//! use care_navigator::diagnosis::{DiagnosisResponse, DiagnosisStores};
//! use care_navigator::navigator::{Navigator, QueryOverrides};
//!
//! let stores = DiagnosisStores::new();
//! let navigator = Navigator::from_config(&AppConfig::default(), stores.clone());
//!
//! let json = r#"{ "analysis": { "conditions": [ { "name": "Psoriasis" } ] } }"#;
//! stores.publish(DiagnosisResponse::from_json(json).unwrap());
//!
//! let view = navigator.resolve(&QueryOverrides::default());
//! assert_eq!(view.config.title, "Nearby dermatology clinics");
//! assert!(view.specialty_search);
//! ```

pub mod map_config;
pub mod overrides;

pub use map_config::MapConfig;
pub use overrides::{specialty_hint, QueryOverrides};

use serde::Serialize;

use crate::config::{AppConfig, MapDefaults};
use crate::diagnosis::{Condition, DiagnosisStores};
use crate::specialty::{Classification, Specialty, SpecialtyClassifier};

// ---------------------------------------------------------------------------
// derive_specialty
// ---------------------------------------------------------------------------

/// Run the classifier, or return `None` when there is nothing to classify
/// (no conditions and no hint).
pub fn derive_specialty(
    conditions: &[Condition],
    hint: &str,
    classifier: &SpecialtyClassifier,
) -> Option<Classification> {
    if conditions.is_empty() && hint.is_empty() {
        return None;
    }
    Some(classifier.classify(conditions, hint))
}

// ---------------------------------------------------------------------------
// MapView
// ---------------------------------------------------------------------------

/// Everything the map page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub config: MapConfig,
    /// `true` when the view differs from the plain defaults.
    pub specialty_search: bool,
    pub description: String,
    /// Specialty chosen by the classifier, if it ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Specialty>,
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

pub struct Navigator {
    stores: DiagnosisStores,
    classifier: SpecialtyClassifier,
    defaults: MapDefaults,
}

impl Navigator {
    pub fn new(
        stores: DiagnosisStores,
        classifier: SpecialtyClassifier,
        defaults: MapDefaults,
    ) -> Self {
        Self {
            stores,
            classifier,
            defaults,
        }
    }

    pub fn from_config(config: &AppConfig, stores: DiagnosisStores) -> Self {
        Self::new(
            stores,
            SpecialtyClassifier::from_config(&config.classifier),
            config.map.clone(),
        )
    }

    pub fn stores(&self) -> &DiagnosisStores {
        &self.stores
    }

    pub fn classifier(&self) -> &SpecialtyClassifier {
        &self.classifier
    }

    pub fn defaults(&self) -> &MapDefaults {
        &self.defaults
    }

    /// Build the map view from the current diagnosis response and
    /// `overrides`.
    pub fn resolve(&self, overrides: &QueryOverrides) -> MapView {
        let response = self.stores.response.get_current();
        let analysis = response.as_ref().and_then(|r| r.analysis.as_ref());
        let conditions = analysis.map(|a| a.conditions.as_slice()).unwrap_or(&[]);

        let hint = specialty_hint(analysis, overrides);
        let classification = derive_specialty(conditions, &hint, &self.classifier);
        if let Some(c) = &classification {
            log::info!("derived specialty: {}", c.specialty);
        }

        let config = MapConfig::resolve(
            overrides,
            classification.as_ref().map(|c| &c.profile),
            &self.defaults,
        );

        MapView {
            specialty_search: config.is_specialty_search(&self.defaults),
            description: config.hero_description(&self.defaults),
            specialty: classification.map(|c| c.specialty),
            config,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::{DiagnosisAnalysis, DiagnosisResponse};
    use crate::specialty::MatchMode;

    fn navigator() -> Navigator {
        Navigator::from_config(&AppConfig::default(), DiagnosisStores::new())
    }

    fn publish(nav: &Navigator, names: &[&str], hint: Option<&str>) {
        nav.stores().publish(DiagnosisResponse {
            analysis: Some(DiagnosisAnalysis {
                conditions: names.iter().map(|n| Condition::new(*n)).collect(),
                specialty_hint: hint.map(str::to_owned),
            }),
        });
    }

    #[test]
    fn derive_specialty_skips_empty_input() {
        let classifier = SpecialtyClassifier::default();
        assert_eq!(derive_specialty(&[], "", &classifier), None);
        assert!(derive_specialty(&[Condition::unnamed()], "", &classifier).is_some());
    }

    #[test]
    fn no_diagnosis_gives_default_view() {
        let nav = navigator();
        let view = nav.resolve(&QueryOverrides::default());

        assert_eq!(view.config, MapConfig::from_defaults(nav.defaults()));
        assert!(!view.specialty_search);
        assert_eq!(view.specialty, None);
        assert_eq!(view.description, nav.defaults().description);
    }

    #[test]
    fn diagnosis_conditions_drive_the_view() {
        let nav = navigator();
        publish(&nav, &["Kidney stones"], None);

        let view = nav.resolve(&QueryOverrides::default());
        assert_eq!(view.specialty, Some(Specialty::Urology));
        assert_eq!(view.config.keyword, "urologist nephrologist");
        assert!(view.specialty_search);
    }

    #[test]
    fn analysis_hint_beats_override_hint() {
        let nav = navigator();
        publish(&nav, &[], Some("Cardiology"));

        let overrides = QueryOverrides {
            hint: Some("dermatology".into()),
            ..Default::default()
        };
        let view = nav.resolve(&overrides);
        assert_eq!(view.specialty, Some(Specialty::Cardiology));
    }

    #[test]
    fn override_hint_used_without_diagnosis() {
        let nav = navigator();
        let overrides = QueryOverrides {
            hint: Some("Pediatrics".into()),
            ..Default::default()
        };
        let view = nav.resolve(&overrides);
        assert_eq!(view.specialty, Some(Specialty::Pediatrics));
        assert_eq!(view.config.title, "Nearby pediatric care centers");
    }

    #[test]
    fn map_overrides_replace_derived_profile() {
        let nav = navigator();
        publish(&nav, &["Migraine"], None);

        let overrides = QueryOverrides {
            title: Some("Late-night clinics".into()),
            ..Default::default()
        };
        let view = nav.resolve(&overrides);

        // Classifier still ran, but the map uses the override.
        assert_eq!(view.specialty, Some(Specialty::Neurology));
        assert_eq!(view.config.title, "Late-night clinics");
        assert_eq!(view.config.keyword, nav.defaults().keyword);
    }

    #[test]
    fn store_reset_returns_to_defaults() {
        let nav = navigator();
        publish(&nav, &["Fever"], None);
        assert!(nav.resolve(&QueryOverrides::default()).specialty_search);

        nav.stores().reset();
        assert!(!nav.resolve(&QueryOverrides::default()).specialty_search);
    }

    #[test]
    fn word_boundary_navigator_avoids_partial_hits() {
        let mut config = AppConfig::default();
        config.classifier.match_mode = MatchMode::WordBoundary;
        let nav = Navigator::from_config(&config, DiagnosisStores::new());
        publish(&nav, &["earthquake"], None);

        let view = nav.resolve(&QueryOverrides::default());
        assert_eq!(view.specialty, Some(Specialty::General));
        assert_eq!(view.config.keyword, "hospital clinic");
    }

    #[test]
    fn view_serialises_to_json() {
        let nav = navigator();
        publish(&nav, &["Toothache"], None);

        let json = serde_json::to_value(nav.resolve(&QueryOverrides::default())).unwrap();
        assert_eq!(json["config"]["placeType"], "dentist");
        assert_eq!(json["specialtySearch"], true);
        assert_eq!(json["specialty"], "dental");
    }
}
