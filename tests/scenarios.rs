//! End-to-end routing scenarios through the public API.

use care_navigator::config::AppConfig;
use care_navigator::diagnosis::{Condition, DiagnosisResponse, DiagnosisStores};
use care_navigator::navigator::{Navigator, QueryOverrides};
use care_navigator::specialty::{
    classify, derive_specialty_search, MatchMode, PlaceType, Specialty, DEFAULT_PROFILE,
};

#[test]
fn empty_input_gives_general_hospital_profile() {
    let profile = derive_specialty_search(&[], "");
    assert_eq!(profile.keyword, "hospital clinic");
    assert_eq!(profile.place_type, PlaceType::Hospital);
    assert_eq!(profile.title, "Nearby hospitals & medical clinics");
    assert_eq!(profile.highlight, "General and specialized healthcare");
}

#[test]
fn tension_headache_goes_to_neurology() {
    let profile = derive_specialty_search(&[Condition::new("Tension headache")], "");
    assert_eq!(profile.keyword, "neurologist");
    assert_eq!(profile.place_type, PlaceType::Doctor);
    assert_eq!(profile.title, "Nearby neurology centers");
    assert_eq!(
        profile.highlight,
        "For migraines, nerve, or brain-related conditions"
    );
}

#[test]
fn dermatology_hint_alone_selects_dermatology() {
    let profile = derive_specialty_search(&[], "Dermatology");
    assert_eq!(profile, Specialty::Dermatology.profile());
}

#[test]
fn near_miss_condition_falls_through_to_default() {
    let profile = derive_specialty_search(&[Condition::new("broken ankle")], "");
    assert_eq!(profile, DEFAULT_PROFILE);
}

#[test]
fn earthquake_injury_hits_wound_care_before_ear() {
    // "injury" (wound care) sits earlier in the table than "ear".
    let c = classify(&[Condition::new("earthquake injury")], "", MatchMode::Substring);
    assert_eq!(c.specialty, Specialty::WoundCare);
    assert_eq!(c.matched_keyword, Some("injury"));
}

#[test]
fn navigator_routes_json_diagnosis() {
    let stores = DiagnosisStores::new();
    let navigator = Navigator::from_config(&AppConfig::default(), stores.clone());

    let json = r#"{
        "analysis": {
            "conditions": [ { "name": "Sprained wrist" }, { "name": null } ],
            "whichSpecialityHospitalToGo": ""
        }
    }"#;
    stores.publish(DiagnosisResponse::from_json(json).expect("valid json"));

    let view = navigator.resolve(&QueryOverrides::default());
    assert_eq!(view.specialty, Some(Specialty::Orthopedics));
    assert_eq!(view.config.place_type, "physiotherapist");
    assert_eq!(
        view.description,
        "We’re highlighting nearby care tailored to your recent results: \
         Nearby orthopedic & physiotherapy centers."
    );
}

#[test]
fn failed_diagnosis_load_degrades_to_defaults() {
    let stores = DiagnosisStores::new();
    let navigator = Navigator::from_config(&AppConfig::default(), stores.clone());

    assert!(DiagnosisResponse::from_json("not json").is_err());

    let view = navigator.resolve(&QueryOverrides::default());
    assert!(!view.specialty_search);
    assert_eq!(view.specialty, None);
    assert_eq!(view.config.title, "Hospitals & clinics near you");
}
