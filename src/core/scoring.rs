use crate::core::explanation::{female_subject_explanation, male_subject_explanation};
use crate::core::factors::{
    career_level, income_band, income_ratio, FEMALE_SUBJECT_WEIGHTS, MALE_SUBJECT_WEIGHTS,
};
use crate::models::{FactorSet, Gender, MatchScore, Preference, Profile, Recommendation};

pub const SAME_GENDER_EXPLANATION: &str = "Same gender - not compatible";

/// Score a candidate against a subject (0-100)
///
/// Same-gender pairs short-circuit to a zero score. Otherwise the formulas
/// depend on the subject's gender: each side has its own factor curves,
/// weights and recommendation thresholds.
///
/// Score formula:
/// score = round(sum(weight[f] * factor[f])) over the seven factors
pub fn calculate_match_score(subject: &Profile, candidate: &Profile) -> MatchScore {
    if subject.gender == candidate.gender {
        return MatchScore {
            subject_id: subject.id.clone(),
            candidate_id: candidate.id.clone(),
            score: 0,
            explanation: SAME_GENDER_EXPLANATION.to_string(),
            factors: FactorSet::default(),
            recommendation: Recommendation::Low,
        };
    }

    match subject.gender {
        Gender::Male => score_for_male_subject(subject, candidate),
        Gender::Female => score_for_female_subject(subject, candidate),
    }
}

fn score_for_male_subject(male: &Profile, female: &Profile) -> MatchScore {
    let factors = FactorSet {
        age: male_age_factor(male.age as i32 - female.age as i32),
        income: male_income_factor(income_ratio(female.income, male.income)),
        height: male_height_factor(male.height_cm as i32 - female.height_cm as i32),
        children: children_factor(male.want_kids, female.want_kids, 20.0),
        relocation: male_relocation_factor(male, female),
        profession: male_profession_factor(male.income, female.income),
        values: male_values_factor(&male.religion, &female.religion),
    }
    .clamped();

    let score = round_score(factors.weighted_sum(&MALE_SUBJECT_WEIGHTS));
    let recommendation = recommend(score, 80, 60);

    MatchScore {
        subject_id: male.id.clone(),
        candidate_id: female.id.clone(),
        score,
        explanation: male_subject_explanation(&factors),
        factors,
        recommendation,
    }
}

fn score_for_female_subject(female: &Profile, male: &Profile) -> MatchScore {
    let factors = FactorSet {
        age: female_age_factor(male.age as i32 - female.age as i32),
        income: female_income_factor(income_ratio(male.income, female.income)),
        height: female_height_factor(male.height_cm as i32 - female.height_cm as i32),
        children: children_factor(female.want_kids, male.want_kids, 25.0),
        relocation: female_relocation_factor(female, male),
        profession: female_profession_factor(female, male),
        values: if female.religion == male.religion { 90.0 } else { 55.0 },
    }
    .clamped();

    let score = round_score(factors.weighted_sum(&FEMALE_SUBJECT_WEIGHTS));
    let recommendation = recommend(score, 80, 65);

    MatchScore {
        subject_id: female.id.clone(),
        candidate_id: male.id.clone(),
        score,
        explanation: female_subject_explanation(&factors),
        factors,
        recommendation,
    }
}

#[inline]
fn round_score(total: f64) -> u8 {
    total.round().clamp(0.0, 100.0) as u8
}

#[inline]
fn recommend(score: u8, high: u8, medium: u8) -> Recommendation {
    if score >= high {
        Recommendation::High
    } else if score >= medium {
        Recommendation::Medium
    } else {
        Recommendation::Low
    }
}

/// `age_diff` is male age minus female age
fn male_age_factor(age_diff: i32) -> f64 {
    let diff = age_diff as f64;
    if (-2..=8).contains(&age_diff) {
        if age_diff >= 0 {
            90.0 + diff * 2.0
        } else {
            80.0
        }
    } else if age_diff < -2 {
        (80.0 + diff * 5.0).max(40.0)
    } else {
        (90.0 - (diff - 8.0) * 8.0).max(30.0)
    }
}

/// `ratio` is female income over male income
fn male_income_factor(ratio: f64) -> f64 {
    if ratio <= 0.8 {
        95.0 - ratio * 20.0
    } else if ratio <= 1.0 {
        75.0
    } else {
        (75.0 - (ratio - 1.0) * 100.0).max(30.0)
    }
}

/// `height_diff` is male height minus female height
fn male_height_factor(height_diff: i32) -> f64 {
    if (5..=20).contains(&height_diff) {
        95.0
    } else if height_diff >= 0 {
        80.0
    } else {
        (70.0 + height_diff as f64 * 2.0).max(20.0)
    }
}

fn children_factor(subject: Preference, candidate: Preference, mismatch: f64) -> f64 {
    if subject == candidate {
        100.0
    } else if subject == Preference::Maybe || candidate == Preference::Maybe {
        75.0
    } else {
        mismatch
    }
}

fn male_relocation_factor(male: &Profile, female: &Profile) -> f64 {
    let either = |answer: Preference| {
        male.open_to_relocate == answer || female.open_to_relocate == answer
    };

    if male.city == female.city {
        100.0
    } else if either(Preference::Yes) {
        85.0
    } else if either(Preference::Maybe) {
        60.0
    } else {
        25.0
    }
}

fn male_profession_factor(male_income: u64, female_income: u64) -> f64 {
    let band_gap = (income_band(male_income) as i32 - income_band(female_income) as i32).abs();
    (100.0 - band_gap as f64 * 15.0).max(50.0)
}

fn male_values_factor(male_religion: &str, female_religion: &str) -> f64 {
    if male_religion == female_religion {
        90.0
    } else if male_religion == "Hindu" && female_religion == "Hindu" {
        // Unreachable after the equality check
        80.0
    } else {
        50.0
    }
}

/// `age_diff` is male age minus female age
fn female_age_factor(age_diff: i32) -> f64 {
    let diff = age_diff as f64;
    if (-1..=7).contains(&age_diff) {
        if age_diff >= 0 {
            90.0 + (diff * 2.0).min(10.0)
        } else {
            85.0
        }
    } else {
        (85.0 - (diff - 3.0).abs() * 8.0).max(30.0)
    }
}

/// `ratio` is male income over female income
fn female_income_factor(ratio: f64) -> f64 {
    if ratio >= 1.2 {
        (70.0 + (ratio - 1.0) * 30.0).min(100.0)
    } else if ratio >= 1.0 {
        85.0
    } else {
        (85.0 - (1.0 - ratio) * 80.0).max(40.0)
    }
}

fn female_height_factor(height_diff: i32) -> f64 {
    if (5..=20).contains(&height_diff) {
        95.0
    } else if height_diff >= 0 {
        80.0
    } else {
        (70.0 + height_diff as f64 * 3.0).max(30.0)
    }
}

/// The subject's own willingness to move outranks the candidate's.
fn female_relocation_factor(female: &Profile, male: &Profile) -> f64 {
    if female.city == male.city {
        100.0
    } else if female.open_to_relocate == Preference::Yes {
        85.0
    } else if male.open_to_relocate == Preference::Yes {
        80.0
    } else if female.open_to_relocate == Preference::Maybe
        || male.open_to_relocate == Preference::Maybe
    {
        60.0
    } else {
        30.0
    }
}

fn female_profession_factor(female: &Profile, male: &Profile) -> f64 {
    let level_gap = (career_level(female) as i32 - career_level(male) as i32).abs();
    (100.0 - level_gap as f64 * 12.0).max(60.0)
}
