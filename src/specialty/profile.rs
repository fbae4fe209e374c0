//! Search profile values returned by the classifier.
//!
//! A [`SearchProfile`] tells the map view what to ask the places provider for
//! (`keyword` + [`PlaceType`]) and how to label the results (`title` +
//! `highlight`).  Every profile in the rule table is a `'static` constant, so
//! profiles are `Copy` and cheap to hand around.

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// PlaceType
// ---------------------------------------------------------------------------

/// Places-provider category used alongside the search keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    Hospital,
    Doctor,
    Physiotherapist,
    Dentist,
}

impl PlaceType {
    /// The category string understood by the places provider.
    ///
    /// ```
    /// use care_navigator::specialty::PlaceType;
    ///
    /// assert_eq!(PlaceType::Hospital.as_str(), "hospital");
    /// assert_eq!(PlaceType::Physiotherapist.as_str(), "physiotherapist");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Hospital => "hospital",
            PlaceType::Doctor => "doctor",
            PlaceType::Physiotherapist => "physiotherapist",
            PlaceType::Dentist => "dentist",
        }
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SearchProfile
// ---------------------------------------------------------------------------

/// How to search for nearby care and how to label the result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProfile {
    /// Free-text keyword sent to the places provider.
    pub keyword: &'static str,
    /// Category filter sent alongside the keyword.
    pub place_type: PlaceType,
    /// Heading shown above the results.
    pub title: &'static str,
    /// One-line description of what the results cover.
    pub highlight: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serialises_with_camel_case_fields() {
        let profile = SearchProfile {
            keyword: "dentist dental clinic",
            place_type: PlaceType::Dentist,
            title: "Nearby dental clinics",
            highlight: "Oral and dental care",
        };
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["keyword"], "dentist dental clinic");
        assert_eq!(json["placeType"], "dentist");
        assert_eq!(json["title"], "Nearby dental clinics");
        assert_eq!(json["highlight"], "Oral and dental care");
    }

    #[test]
    fn place_type_display_matches_as_str() {
        for place in [
            PlaceType::Hospital,
            PlaceType::Doctor,
            PlaceType::Physiotherapist,
            PlaceType::Dentist,
        ] {
            assert_eq!(place.to_string(), place.as_str());
        }
    }
}
