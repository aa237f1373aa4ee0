use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// Profile gender. Matching only pairs opposite genders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn opposite(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

/// Three-way answer used for kids, relocation and pets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Yes,
    No,
    Maybe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Divorced,
    Widowed,
}

/// Customer profile as supplied by the roster or a caller
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    pub gender: Gender,
    #[validate(range(min = 18, max = 120))]
    pub age: u8,
    #[serde(default)]
    pub country: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(range(min = 100, max = 250))]
    #[serde(rename = "height")]
    pub height_cm: u16,
    /// Annual income in whole currency units
    pub income: u64,
    #[serde(rename = "undergraduateCollege")]
    pub undergraduate_college: String,
    #[validate(length(min = 1))]
    pub degree: String,
    #[validate(length(min = 1))]
    #[serde(rename = "currentCompany")]
    pub current_company: String,
    #[validate(length(min = 1))]
    pub designation: String,
    #[serde(rename = "maritalStatus")]
    pub marital_status: MaritalStatus,
    #[serde(rename = "languagesKnown")]
    pub languages_known: BTreeSet<String>,
    pub siblings: u8,
    pub caste: String,
    #[validate(length(min = 1))]
    pub religion: String,
    #[serde(rename = "wantKids")]
    pub want_kids: Preference,
    #[serde(rename = "openToRelocate")]
    pub open_to_relocate: Preference,
    #[serde(rename = "openToPets")]
    pub open_to_pets: Preference,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "lastActive", default)]
    pub last_active: Option<chrono::DateTime<chrono::Utc>>,
}

impl Profile {
    /// "First Last", or just the first name when no last name is known
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            id: self.id.clone(),
            name: self.full_name(),
            gender: self.gender,
            age: self.age,
            city: self.city.clone(),
            designation: self.designation.clone(),
        }
    }
}

/// Compact profile view for listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub age: u8,
    pub city: String,
    pub designation: String,
}

/// Per-dimension compatibility values, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FactorSet {
    pub age: f64,
    pub income: f64,
    pub height: f64,
    pub children: f64,
    pub relocation: f64,
    pub profession: f64,
    pub values: f64,
}

/// Factor weights. Each subject gender has its own fixed vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorWeights {
    pub age: f64,
    pub income: f64,
    pub height: f64,
    pub children: f64,
    pub relocation: f64,
    pub profession: f64,
    pub values: f64,
}

impl FactorWeights {
    pub fn total(&self) -> f64 {
        self.age
            + self.income
            + self.height
            + self.children
            + self.relocation
            + self.profession
            + self.values
    }
}

/// Coarse recommendation tier derived from the aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    High,
    Medium,
    Low,
}

/// Scored pairing of a subject with one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(rename = "customerId")]
    pub subject_id: String,
    #[serde(rename = "matchId")]
    pub candidate_id: String,
    pub score: u8,
    pub explanation: String,
    pub factors: FactorSet,
    pub recommendation: Recommendation,
}

/// Narrative introduction of a candidate to a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchIntroduction {
    #[serde(rename = "customerName")]
    pub subject_name: String,
    #[serde(rename = "matchName")]
    pub candidate_name: String,
    #[serde(rename = "introduction")]
    pub narrative: String,
    pub highlights: Vec<String>,
}
