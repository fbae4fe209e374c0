//! Static specialty rule table.
//!
//! Rules are evaluated top to bottom and the first rule with a matching
//! trigger keyword wins, so the order of [`RULES`] is part of the behaviour.
//! Keywords are stored lowercase; the classifier lowercases its input before
//! matching.

use std::fmt;

use serde::Serialize;

use super::profile::{PlaceType, SearchProfile};

// ---------------------------------------------------------------------------
// Specialty
// ---------------------------------------------------------------------------

/// Medical specialty a rule routes to.  [`Specialty::General`] is the
/// catch-all default and has no rule of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    Orthopedics,
    Respiratory,
    Cardiology,
    Urology,
    Gastroenterology,
    Neurology,
    Endocrinology,
    Dental,
    EyeCare,
    Dermatology,
    Rheumatology,
    Infection,
    MentalHealth,
    WoundCare,
    Gynecology,
    Pediatrics,
    EarAndHearing,
    MensHealth,
    Obstetrics,
    AllergyImmunology,
    General,
}

impl Specialty {
    /// Short human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Specialty::Orthopedics => "Orthopedics & physiotherapy",
            Specialty::Respiratory => "Respiratory & ENT",
            Specialty::Cardiology => "Cardiology",
            Specialty::Urology => "Urology & nephrology",
            Specialty::Gastroenterology => "Gastroenterology",
            Specialty::Neurology => "Neurology",
            Specialty::Endocrinology => "Endocrinology & diabetes",
            Specialty::Dental => "Dental",
            Specialty::EyeCare => "Eye care",
            Specialty::Dermatology => "Dermatology",
            Specialty::Rheumatology => "Arthritis & rheumatology",
            Specialty::Infection => "Infection & fever",
            Specialty::MentalHealth => "Mental health",
            Specialty::WoundCare => "Wound care & trauma",
            Specialty::Gynecology => "Gynecology",
            Specialty::Pediatrics => "Pediatrics",
            Specialty::EarAndHearing => "Ear & hearing",
            Specialty::MensHealth => "Men's health",
            Specialty::Obstetrics => "Pregnancy & obstetrics",
            Specialty::AllergyImmunology => "Allergy & immunology",
            Specialty::General => "General hospital",
        }
    }

    /// The search profile this specialty routes to.
    ///
    /// ```
    /// use care_navigator::specialty::{Specialty, DEFAULT_PROFILE};
    ///
    /// assert_eq!(Specialty::General.profile(), DEFAULT_PROFILE);
    /// assert_eq!(Specialty::Neurology.profile().keyword, "neurologist");
    /// ```
    pub fn profile(&self) -> SearchProfile {
        RULES
            .iter()
            .find(|rule| rule.specialty == *self)
            .map(|rule| rule.profile)
            .unwrap_or(DEFAULT_PROFILE)
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// SpecialtyRule
// ---------------------------------------------------------------------------

/// One entry of the rule table: any trigger keyword routes to `profile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecialtyRule {
    pub specialty: Specialty,
    /// Lowercase trigger keywords.
    pub keywords: &'static [&'static str],
    pub profile: SearchProfile,
}

/// Returned when the input is empty or no rule matches.
pub const DEFAULT_PROFILE: SearchProfile = SearchProfile {
    keyword: "hospital clinic",
    place_type: PlaceType::Hospital,
    title: "Nearby hospitals & medical clinics",
    highlight: "General and specialized healthcare",
};

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

pub static RULES: &[SpecialtyRule] = &[
    SpecialtyRule {
        specialty: Specialty::Orthopedics,
        keywords: &[
            "tendonitis",
            "tendinitis",
            "sprain",
            "strain",
            "fracture",
            "ligament",
            "joint",
            "back pain",
            "muscle",
            "orthopedic",
            "physiotherapy",
        ],
        profile: SearchProfile {
            keyword: "orthopedic clinic physical therapy",
            place_type: PlaceType::Physiotherapist,
            title: "Nearby orthopedic & physiotherapy centers",
            highlight: "For injuries, joint pain, and musculoskeletal issues",
        },
    },
    SpecialtyRule {
        specialty: Specialty::Respiratory,
        keywords: &[
            "asthma",
            "bronchitis",
            "cough",
            "sore throat",
            "sinus",
            "cold",
            "flu",
            "respiratory",
            "ent",
            "pulmonology",
        ],
        profile: SearchProfile {
            keyword: "pulmonologist ENT clinic",
            place_type: PlaceType::Doctor,
            title: "Nearby ENT & respiratory specialists",
            highlight: "Ear, nose, throat, and breathing problems",
        },
    },
    SpecialtyRule {
        specialty: Specialty::Cardiology,
        keywords: &[
            "chest pain",
            "heart",
            "hypertension",
            "blood pressure",
            "cardiology",
            "cardiologist",
        ],
        profile: SearchProfile {
            keyword: "cardiologist",
            place_type: PlaceType::Doctor,
            title: "Nearby cardiology clinics",
            highlight: "Heart and blood pressure specialists",
        },
    },
    SpecialtyRule {
        specialty: Specialty::Urology,
        keywords: &[
            "urinary",
            "kidney",
            "bladder",
            "uti",
            "urology",
            "nephrology",
        ],
        profile: SearchProfile {
            keyword: "urologist nephrologist",
            place_type: PlaceType::Doctor,
            title: "Nearby urology & kidney specialists",
            highlight: "For urinary or kidney-related conditions",
        },
    },
    SpecialtyRule {
        specialty: Specialty::Gastroenterology,
        keywords: &[
            "stomach",
            "digestive",
            "diarrhea",
            "vomit",
            "constipation",
            "acid",
            "ulcer",
            "liver",
            "gastroenterology",
            "gi",
        ],
        profile: SearchProfile {
            keyword: "gastroenterologist",
            place_type: PlaceType::Doctor,
            title: "Nearby gastroenterology clinics",
            highlight: "For stomach, digestion, or liver problems",
        },
    },
    SpecialtyRule {
        specialty: Specialty::Neurology,
        keywords: &[
            "migraine",
            "headache",
            "neuropathy",
            "seizure",
            "numbness",
            "paralysis",
            "tremor",
            "neurology",
            "neurologist",
        ],
        profile: SearchProfile {
            keyword: "neurologist",
            place_type: PlaceType::Doctor,
            title: "Nearby neurology centers",
            highlight: "For migraines, nerve, or brain-related conditions",
        },
    },
    SpecialtyRule {
        specialty: Specialty::Endocrinology,
        keywords: &[
            "diabetes",
            "thyroid",
            "hormone",
            "endocrine",
            "endocrinology",
        ],
        profile: SearchProfile {
            keyword: "endocrinologist diabetes clinic",
            place_type: PlaceType::Doctor,
            title: "Nearby endocrinology & diabetes clinics",
            highlight: "For thyroid and metabolic health",
        },
    },
    SpecialtyRule {
        specialty: Specialty::Dental,
        keywords: &["tooth", "gum", "dental", "dentist", "dentistry"],
        profile: SearchProfile {
            keyword: "dentist dental clinic",
            place_type: PlaceType::Dentist,
            title: "Nearby dental clinics",
            highlight: "Oral and dental care",
        },
    },
    SpecialtyRule {
        specialty: Specialty::EyeCare,
        keywords: &[
            "eye",
            "vision",
            "cataract",
            "red eye",
            "ophthalmology",
            "optometry",
        ],
        profile: SearchProfile {
            keyword: "ophthalmologist optometrist eye clinic",
            place_type: PlaceType::Doctor,
            title: "Nearby eye care centers",
            highlight: "Eye specialists and vision clinics",
        },
    },
    SpecialtyRule {
        specialty: Specialty::Dermatology,
        keywords: &[
            "rash",
            "acne",
            "eczema",
            "psoriasis",
            "itch",
            "dermatitis",
            "skin",
            "dermatology",
            "dermatologist",
        ],
        profile: SearchProfile {
            keyword: "dermatologist skin clinic",
            place_type: PlaceType::Doctor,
            title: "Nearby dermatology clinics",
            highlight: "Skin, hair, and allergy specialists",
        },
    },
    SpecialtyRule {
        specialty: Specialty::Rheumatology,
        keywords: &[
            "arthritis",
            "gout",
            "osteoarthritis",
            "rheumatology",
            "rheumatologist",
        ],
        profile: SearchProfile {
            keyword: "rheumatologist",
            place_type: PlaceType::Doctor,
            title: "Nearby arthritis & rheumatology clinics",
            highlight: "For gout and chronic joint pain",
        },
    },
    SpecialtyRule {
        specialty: Specialty::Infection,
        keywords: &["infection", "fever", "infectious disease", "infectious"],
        profile: SearchProfile {
            keyword: "urgent care clinic",
            place_type: PlaceType::Hospital,
            title: "Nearby urgent care centers",
            highlight: "For general infections and fevers",
        },
    },
    SpecialtyRule {
        specialty: Specialty::MentalHealth,
        keywords: &[
            "anxiety",
            "depression",
            "stress",
            "panic",
            "mental",
            "psychiatry",
            "psychology",
            "behavioral health",
        ],
        profile: SearchProfile {
            keyword: "psychologist psychiatrist mental health clinic",
            place_type: PlaceType::Doctor,
            title: "Nearby mental health support centers",
            highlight: "Counseling, therapy, and psychiatry",
        },
    },
    SpecialtyRule {
        specialty: Specialty::WoundCare,
        keywords: &["wound", "cut", "burn", "trauma", "injury", "urgent care"],
        profile: SearchProfile {
            keyword: "urgent care wound clinic",
            place_type: PlaceType::Hospital,
            title: "Nearby urgent care or wound treatment centers",
            highlight: "Immediate treatment for minor injuries",
        },
    },
    SpecialtyRule {
        specialty: Specialty::Gynecology,
        keywords: &[
            "pregnancy",
            "menstrual",
            "fertility",
            "period",
            "gynecology",
            "obgyn",
            "women's health",
        ],
        profile: SearchProfile {
            keyword: "gynecologist obstetrician women health clinic",
            place_type: PlaceType::Doctor,
            title: "Nearby women’s health & OB-GYN clinics",
            highlight: "Reproductive and maternal care",
        },
    },
    SpecialtyRule {
        specialty: Specialty::Pediatrics,
        keywords: &[
            "child",
            "pediatric",
            "infant",
            "children's hospital",
            "pediatrics",
        ],
        profile: SearchProfile {
            keyword: "pediatric clinic",
            place_type: PlaceType::Doctor,
            title: "Nearby pediatric care centers",
            highlight: "For child and infant healthcare",
        },
    },
    SpecialtyRule {
        specialty: Specialty::EarAndHearing,
        keywords: &["ear", "hearing", "tinnitus", "audiology", "otology", "ent"],
        profile: SearchProfile {
            keyword: "ENT clinic audiologist",
            place_type: PlaceType::Doctor,
            title: "Nearby ENT & audiology centers",
            highlight: "Ear, hearing, and sinus specialists",
        },
    },
    SpecialtyRule {
        specialty: Specialty::MensHealth,
        keywords: &["prostate", "erectile", "male", "men's health", "andrology"],
        profile: SearchProfile {
            keyword: "urologist men health clinic",
            place_type: PlaceType::Doctor,
            title: "Nearby urology & men's health clinics",
            highlight: "Prostate and men's health specialists",
        },
    },
    SpecialtyRule {
        specialty: Specialty::Obstetrics,
        keywords: &["prenatal", "obstetric", "obstetrics", "maternal"],
        profile: SearchProfile {
            keyword: "obstetrician gynecologist",
            place_type: PlaceType::Doctor,
            title: "Nearby prenatal & obstetrics clinics",
            highlight: "Pregnancy and maternal care",
        },
    },
    SpecialtyRule {
        specialty: Specialty::AllergyImmunology,
        keywords: &[
            "allergy",
            "immune",
            "immunology",
            "immunologist",
            "asthma",
        ],
        profile: SearchProfile {
            keyword: "allergy specialist immunologist",
            place_type: PlaceType::Doctor,
            title: "Nearby allergy & immunology clinics",
            highlight: "Allergy and immune system treatment",
        },
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_twenty_rules_and_no_general_entry() {
        assert_eq!(RULES.len(), 20);
        assert!(RULES.iter().all(|r| r.specialty != Specialty::General));
    }

    #[test]
    fn each_specialty_appears_once() {
        let seen: HashSet<Specialty> = RULES.iter().map(|r| r.specialty).collect();
        assert_eq!(seen.len(), RULES.len());
    }

    #[test]
    fn keywords_are_lowercase_and_non_empty() {
        for rule in RULES {
            assert!(!rule.keywords.is_empty(), "{:?} has no keywords", rule.specialty);
            for kw in rule.keywords {
                assert!(!kw.is_empty());
                assert_eq!(*kw, kw.to_lowercase(), "keyword {kw:?} must be lowercase");
            }
        }
    }

    #[test]
    fn profiles_are_fully_populated() {
        for profile in RULES.iter().map(|r| r.profile).chain([DEFAULT_PROFILE]) {
            assert!(!profile.keyword.is_empty());
            assert!(!profile.title.is_empty());
            assert!(!profile.highlight.is_empty());
        }
    }

    #[test]
    fn default_profile_is_general_hospital() {
        assert_eq!(DEFAULT_PROFILE.keyword, "hospital clinic");
        assert_eq!(DEFAULT_PROFILE.place_type, PlaceType::Hospital);
        assert_eq!(DEFAULT_PROFILE.title, "Nearby hospitals & medical clinics");
        assert_eq!(DEFAULT_PROFILE.highlight, "General and specialized healthcare");
    }

    #[test]
    fn specialty_profile_looks_up_rule() {
        let dental = Specialty::Dental.profile();
        assert_eq!(dental.place_type, PlaceType::Dentist);
        assert_eq!(dental.title, "Nearby dental clinics");

        let ortho = Specialty::Orthopedics.profile();
        assert_eq!(ortho.place_type, PlaceType::Physiotherapist);
    }
}
