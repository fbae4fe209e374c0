//! Rule-based specialty classifier.
//!
//! The hint and every condition name are lowercased and joined into one
//! search text, then [`RULES`] is scanned in order.  The first rule with a
//! trigger keyword present in the text decides the profile; nothing is scored
//! or accumulated.  Empty input and "no match" both produce
//! [`DEFAULT_PROFILE`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::profile::SearchProfile;
use super::rules::{Specialty, DEFAULT_PROFILE, RULES};
use crate::config::ClassifierConfig;
use crate::diagnosis::Condition;

// ---------------------------------------------------------------------------
// MatchMode
// ---------------------------------------------------------------------------

/// How a trigger keyword is located in the search text.
///
/// | Variant        | `"ear"` in `"earthquake"` | `"ent"` in `"dental"` |
/// |----------------|---------------------------|-----------------------|
/// | `Substring`    | match                     | match                 |
/// | `WordBoundary` | no match                  | no match              |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring containment.
    #[default]
    Substring,
    /// The keyword must not be glued to a letter or digit on either side.
    WordBoundary,
}

impl MatchMode {
    /// Returns `true` when `keyword` occurs in `text` under this mode.
    ///
    /// ```
    /// use care_navigator::specialty::MatchMode;
    ///
    /// assert!(MatchMode::Substring.matches("earthquake", "ear"));
    /// assert!(!MatchMode::WordBoundary.matches("earthquake", "ear"));
    /// assert!(MatchMode::WordBoundary.matches("inner ear pain", "ear"));
    /// ```
    pub fn matches(&self, text: &str, keyword: &str) -> bool {
        match self {
            MatchMode::Substring => text.contains(keyword),
            MatchMode::WordBoundary => text.match_indices(keyword).any(|(start, found)| {
                let before = text[..start].chars().next_back();
                let after = text[start + found.len()..].chars().next();
                !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
            }),
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "substring" => Ok(MatchMode::Substring),
            "word_boundary" | "word-boundary" => Ok(MatchMode::WordBoundary),
            other => Err(format!("unknown match mode: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Outcome of one classifier run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub specialty: Specialty,
    pub profile: SearchProfile,
    /// The trigger keyword that selected the rule; `None` for the default.
    pub matched_keyword: Option<&'static str>,
}

impl Classification {
    fn fallback() -> Self {
        Self {
            specialty: Specialty::General,
            profile: DEFAULT_PROFILE,
            matched_keyword: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Lowercased hint and condition names joined into one trimmed string.
///
/// Conditions without a name, or with an empty one, contribute nothing.
///
/// ```
/// use care_navigator::diagnosis::Condition;
/// use care_navigator::specialty::search_text;
///
/// let conditions = [Condition::new("Sore Throat"), Condition::unnamed()];
/// assert_eq!(search_text(&conditions, "ENT"), "ent sore throat");
/// assert_eq!(search_text(&[], ""), "");
/// ```
pub fn search_text(conditions: &[Condition], hint: &str) -> String {
    let condition_text = conditions
        .iter()
        .filter_map(|c| c.name.as_deref())
        .map(str::to_lowercase)
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    format!("{} {}", hint.to_lowercase(), condition_text)
        .trim()
        .to_string()
}

/// Classify `conditions` and `hint` against the rule table.
pub fn classify(conditions: &[Condition], hint: &str, mode: MatchMode) -> Classification {
    let text = search_text(conditions, hint);
    if text.is_empty() {
        log::debug!("empty search text; using default profile");
        return Classification::fallback();
    }

    let found = RULES.iter().find_map(|rule| {
        rule.keywords
            .iter()
            .copied()
            .find(|kw| mode.matches(&text, kw))
            .map(|kw| Classification {
                specialty: rule.specialty,
                profile: rule.profile,
                matched_keyword: Some(kw),
            })
    });

    match found {
        Some(classification) => {
            log::debug!(
                "classified {:?} as {:?} (keyword {:?})",
                text,
                classification.specialty,
                classification.matched_keyword
            );
            classification
        }
        None => {
            log::debug!("no rule matched {:?}; using default profile", text);
            Classification::fallback()
        }
    }
}

/// Derive the search profile for `conditions` and an optional `hint`
/// (pass `""` for none) using substring matching.
///
/// # Example
/// ```rust
/// use care_navigator::diagnosis::Condition;
/// use care_navigator::specialty::derive_specialty_search;
///
/// let profile = derive_specialty_search(&[Condition::new("Tension headache")], "");
/// assert_eq!(profile.keyword, "neurologist");
/// ```
pub fn derive_specialty_search(conditions: &[Condition], hint: &str) -> SearchProfile {
    classify(conditions, hint, MatchMode::Substring).profile
}

// ---------------------------------------------------------------------------
// SpecialtyClassifier
// ---------------------------------------------------------------------------

/// Classifier bound to a [`MatchMode`], usually built from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialtyClassifier {
    mode: MatchMode,
}

impl SpecialtyClassifier {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.match_mode)
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn classify(&self, conditions: &[Condition], hint: &str) -> Classification {
        classify(conditions, hint, self.mode)
    }

    pub fn derive(&self, conditions: &[Condition], hint: &str) -> SearchProfile {
        self.classify(conditions, hint).profile
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specialty::PlaceType;

    fn named(names: &[&str]) -> Vec<Condition> {
        names.iter().map(|n| Condition::new(*n)).collect()
    }

    // ---- search_text ---

    #[test]
    fn search_text_skips_unnamed_and_empty_conditions() {
        let conditions = vec![
            Condition::new("Cough"),
            Condition::unnamed(),
            Condition::new(""),
            Condition::new("FEVER"),
        ];
        assert_eq!(search_text(&conditions, ""), "cough fever");
    }

    #[test]
    fn search_text_puts_hint_first() {
        assert_eq!(
            search_text(&named(&["Rash"]), "Dermatology"),
            "dermatology rash"
        );
    }

    // ---- empty / fallback ---

    #[test]
    fn empty_input_returns_default() {
        let c = classify(&[], "", MatchMode::Substring);
        assert_eq!(c.specialty, Specialty::General);
        assert_eq!(c.profile, DEFAULT_PROFILE);
        assert_eq!(c.matched_keyword, None);
    }

    #[test]
    fn whitespace_only_input_returns_default() {
        let profile = derive_specialty_search(&named(&["   "]), "  ");
        assert_eq!(profile, DEFAULT_PROFILE);
    }

    #[test]
    fn unmatched_text_returns_default() {
        let profile = derive_specialty_search(&named(&["broken ankle"]), "");
        assert_eq!(profile, DEFAULT_PROFILE);
    }

    // ---- per-rule ---

    #[test]
    fn first_keyword_of_each_rule_selects_that_rule() {
        for mode in [MatchMode::Substring, MatchMode::WordBoundary] {
            for rule in RULES {
                let kw = rule.keywords[0];
                let c = classify(&named(&[kw]), "", mode);
                assert_eq!(c.specialty, rule.specialty, "keyword {kw:?} in {mode:?}");
                assert_eq!(c.profile, rule.profile);
                assert_eq!(c.matched_keyword, Some(kw));
            }
        }
    }

    #[test]
    fn dental_keywords_route_to_dentist() {
        for name in ["Tooth ache", "gum bleeding", "Wisdom tooth"] {
            let profile = derive_specialty_search(&named(&[name]), "");
            assert_eq!(profile.place_type, PlaceType::Dentist, "{name}");
        }
    }

    // ---- ordering ---

    #[test]
    fn earlier_rule_wins_over_dental() {
        let profile = derive_specialty_search(&named(&["Chest pain"]), "tooth");
        assert_eq!(profile, Specialty::Cardiology.profile());
    }

    #[test]
    fn hint_has_no_priority_over_conditions() {
        // Table order over the joined text decides, not which part matched.
        let c = classify(&named(&["migraine"]), "skin", MatchMode::Substring);
        assert_eq!(c.specialty, Specialty::Neurology);
    }

    #[test]
    fn asthma_goes_to_respiratory_before_allergy() {
        let c = classify(&named(&["asthma"]), "", MatchMode::Substring);
        assert_eq!(c.specialty, Specialty::Respiratory);
    }

    // ---- case ---

    #[test]
    fn matching_ignores_case() {
        let upper = derive_specialty_search(&named(&["MIGRAINE"]), "");
        let lower = derive_specialty_search(&named(&["migraine"]), "");
        assert_eq!(upper, lower);
        assert_eq!(upper, Specialty::Neurology.profile());
    }

    // ---- substring edge cases ---

    #[test]
    fn substring_mode_matches_inside_words() {
        let c = classify(&named(&["earthquake"]), "", MatchMode::Substring);
        assert_eq!(c.specialty, Specialty::EarAndHearing);
        assert_eq!(c.matched_keyword, Some("ear"));

        let c = classify(&named(&["female"]), "", MatchMode::Substring);
        assert_eq!(c.specialty, Specialty::MensHealth);

        // "dental" contains "ent", which belongs to an earlier rule.
        let c = classify(&[], "dental", MatchMode::Substring);
        assert_eq!(c.specialty, Specialty::Respiratory);
        assert_eq!(c.matched_keyword, Some("ent"));
    }

    #[test]
    fn word_boundary_mode_rejects_partial_words() {
        let c = classify(&named(&["earthquake"]), "", MatchMode::WordBoundary);
        assert_eq!(c.specialty, Specialty::General);

        let c = classify(&named(&["female"]), "", MatchMode::WordBoundary);
        assert_eq!(c.specialty, Specialty::General);

        let c = classify(&[], "dental", MatchMode::WordBoundary);
        assert_eq!(c.specialty, Specialty::Dental);
    }

    #[test]
    fn word_boundary_accepts_punctuation_neighbours() {
        assert!(MatchMode::WordBoundary.matches("pain (ear), left", "ear"));
        assert!(MatchMode::WordBoundary.matches("ear", "ear"));
        assert!(MatchMode::WordBoundary.matches("women's health clinic", "women's health"));
        assert!(!MatchMode::WordBoundary.matches("ear2", "ear"));
    }

    #[test]
    fn word_boundary_checks_every_occurrence() {
        // First occurrence is glued, second one stands alone.
        assert!(MatchMode::WordBoundary.matches("heard ear", "ear"));
    }

    // ---- determinism ---

    #[test]
    fn repeated_calls_give_equal_results() {
        let conditions = named(&["Kidney stones", "nausea"]);
        let first = classify(&conditions, "urology", MatchMode::Substring);
        let second = classify(&conditions, "urology", MatchMode::Substring);
        assert_eq!(first, second);
    }

    // ---- SpecialtyClassifier ---

    #[test]
    fn classifier_uses_configured_mode() {
        let config = ClassifierConfig {
            match_mode: MatchMode::WordBoundary,
        };
        let classifier = SpecialtyClassifier::from_config(&config);
        assert_eq!(classifier.mode(), MatchMode::WordBoundary);
        assert_eq!(classifier.derive(&named(&["female"]), ""), DEFAULT_PROFILE);
        assert_eq!(
            SpecialtyClassifier::default().derive(&named(&["female"]), ""),
            Specialty::MensHealth.profile()
        );
    }

    #[test]
    fn match_mode_parses_from_str() {
        assert_eq!("substring".parse::<MatchMode>(), Ok(MatchMode::Substring));
        assert_eq!("word_boundary".parse::<MatchMode>(), Ok(MatchMode::WordBoundary));
        assert_eq!("word-boundary".parse::<MatchMode>(), Ok(MatchMode::WordBoundary));
        assert!("fuzzy".parse::<MatchMode>().is_err());
    }
}
