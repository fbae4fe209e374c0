//! Explicit caller overrides and specialty-hint selection.

use serde::{Deserialize, Serialize};

use crate::diagnosis::DiagnosisAnalysis;

/// Values a caller (URL query, CLI flags) can force onto the map view.
///
/// Empty strings count as "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOverrides {
    pub keyword: Option<String>,
    pub place_type: Option<String>,
    pub title: Option<String>,
    pub highlight: Option<String>,
    /// Specialty hint used when the diagnosis itself carries none.
    pub hint: Option<String>,
}

impl QueryOverrides {
    /// `true` when any of keyword, place type, title or highlight is set.
    /// The hint does not count; it only feeds the classifier.
    pub fn has_map_fields(&self) -> bool {
        [&self.keyword, &self.place_type, &self.title, &self.highlight]
            .into_iter()
            .any(|field| non_empty(field.as_deref()).is_some())
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Lowercased specialty hint: the analysis' own recommendation wins, then the
/// override hint, otherwise `""`.
///
/// ```
/// use care_navigator::diagnosis::DiagnosisAnalysis;
/// use care_navigator::navigator::{specialty_hint, QueryOverrides};
///
/// let overrides = QueryOverrides { hint: Some("Cardiology".into()), ..Default::default() };
/// assert_eq!(specialty_hint(None, &overrides), "cardiology");
///
/// let analysis = DiagnosisAnalysis { specialty_hint: Some("Dental".into()), ..Default::default() };
/// assert_eq!(specialty_hint(Some(&analysis), &overrides), "dental");
/// ```
pub fn specialty_hint(analysis: Option<&DiagnosisAnalysis>, overrides: &QueryOverrides) -> String {
    let from_analysis = analysis
        .and_then(|a| non_empty(a.specialty_hint.as_deref()))
        .map(str::to_lowercase)
        .filter(|hint| !hint.is_empty());

    from_analysis
        .or_else(|| non_empty(overrides.hint.as_deref()).map(str::to_lowercase))
        .unwrap_or_default()
}
