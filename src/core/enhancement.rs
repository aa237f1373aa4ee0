use crate::models::{MatchScore, Profile};

pub const PERSONALITY_BONUS_CAP: u8 = 8;
pub const LIFESTYLE_BONUS_CAP: u8 = 6;

const PERSONALITY_NOTE: &str = " Strong personality alignment detected.";
const LIFESTYLE_NOTE: &str = " Complementary lifestyle preferences.";

/// Employers treated as large organisations; everything else is medium.
const LARGE_EMPLOYERS: &[&str] = &[
    "Google",
    "Microsoft",
    "Amazon",
    "TCS",
    "Infosys",
    "Wipro",
    "Accenture",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanySize {
    Large,
    Medium,
}

pub fn company_size(company: &str) -> CompanySize {
    if LARGE_EMPLOYERS.contains(&company) {
        CompanySize::Large
    } else {
        CompanySize::Medium
    }
}

/// Education pairing and shared languages, capped at 8
pub fn personality_bonus(subject: &Profile, candidate: &Profile) -> u8 {
    let mut bonus: usize = 0;

    if subject.degree.contains("MBA") && candidate.degree.contains("B.Tech") {
        bonus += 3;
    }
    if subject.degree == candidate.degree {
        bonus += 2;
    }

    let shared_languages = subject
        .languages_known
        .intersection(&candidate.languages_known)
        .count();
    bonus += shared_languages * 2;

    bonus.min(PERSONALITY_BONUS_CAP as usize) as u8
}

/// Pets, family size and work culture, capped at 6
pub fn lifestyle_bonus(subject: &Profile, candidate: &Profile) -> u8 {
    let mut bonus: u8 = 0;

    if subject.open_to_pets == candidate.open_to_pets {
        bonus += 2;
    }
    if subject.siblings.abs_diff(candidate.siblings) <= 1 {
        bonus += 2;
    }
    if company_size(&subject.current_company) == company_size(&candidate.current_company) {
        bonus += 1;
    }

    bonus.min(LIFESTYLE_BONUS_CAP)
}

/// Apply the secondary compatibility bonuses to a base score
///
/// The result never drops below the base score and never exceeds 100. Only
/// `score` and `explanation` change; every other field is carried over.
pub fn enhance_match_score(
    base: &MatchScore,
    subject: &Profile,
    candidate: &Profile,
) -> MatchScore {
    let personality = personality_bonus(subject, candidate);
    let lifestyle = lifestyle_bonus(subject, candidate);

    let boosted = (base.score as u16 + personality as u16 + lifestyle as u16).min(100) as u8;
    let score = boosted.max(base.score);

    let mut explanation = base.explanation.clone();
    if personality > 5 {
        explanation.push_str(PERSONALITY_NOTE);
    }
    if lifestyle > 5 {
        explanation.push_str(LIFESTYLE_NOTE);
    }

    tracing::trace!(
        candidate = %candidate.id,
        base = base.score,
        personality,
        lifestyle,
        "Enhanced match score"
    );

    MatchScore {
        score,
        explanation,
        ..base.clone()
    }
}
