//! Final map view configuration.
//!
//! Precedence, highest first:
//!
//! ```text
//! QueryOverrides (any map field set)  ─▶ override value, else default
//! derived SearchProfile               ─▶ profile value, else default
//! nothing                             ─▶ MapDefaults
//! ```

use serde::Serialize;

use super::overrides::{non_empty, QueryOverrides};
use crate::config::MapDefaults;
use crate::specialty::SearchProfile;

/// Keyword, category and labels handed to the map view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub keyword: String,
    pub place_type: String,
    pub title: String,
    pub highlight: String,
}

fn or_default(value: Option<&str>, fallback: &str) -> String {
    non_empty(value).unwrap_or(fallback).to_string()
}

impl MapConfig {
    pub fn from_defaults(defaults: &MapDefaults) -> Self {
        Self {
            keyword: defaults.keyword.clone(),
            place_type: defaults.place_type.clone(),
            title: defaults.title.clone(),
            highlight: defaults.highlight.clone(),
        }
    }

    /// Combine overrides, a derived profile and defaults.
    ///
    /// Overrides are all-or-nothing: once any map field is overridden the
    /// derived profile is ignored entirely and unset fields take defaults.
    pub fn resolve(
        overrides: &QueryOverrides,
        derived: Option<&SearchProfile>,
        defaults: &MapDefaults,
    ) -> Self {
        if overrides.has_map_fields() {
            return Self {
                keyword: or_default(overrides.keyword.as_deref(), &defaults.keyword),
                place_type: or_default(overrides.place_type.as_deref(), &defaults.place_type),
                title: or_default(overrides.title.as_deref(), &defaults.title),
                highlight: or_default(overrides.highlight.as_deref(), &defaults.highlight),
            };
        }

        match derived {
            Some(profile) => Self {
                keyword: or_default(Some(profile.keyword), &defaults.keyword),
                place_type: or_default(Some(profile.place_type.as_str()), &defaults.place_type),
                title: or_default(Some(profile.title), &defaults.title),
                highlight: or_default(Some(profile.highlight), &defaults.highlight),
            },
            None => Self::from_defaults(defaults),
        }
    }

    /// `true` when any field differs from the defaults.
    pub fn is_specialty_search(&self, defaults: &MapDefaults) -> bool {
        self.keyword != defaults.keyword
            || self.place_type != defaults.place_type
            || self.title != defaults.title
            || self.highlight != defaults.highlight
    }

    /// Hero text for the map page.
    pub fn hero_description(&self, defaults: &MapDefaults) -> String {
        if self.is_specialty_search(defaults) {
            format!(
                "We’re highlighting nearby care tailored to your recent results: {}.",
                self.title
            )
        } else {
            defaults.description.clone()
        }
    }
}
