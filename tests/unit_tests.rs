// Unit tests for Matchmaker

use matchmaker::core::{
    enhancement::{company_size, enhance_match_score, CompanySize},
    factors::{career_level, income_band, FEMALE_SUBJECT_WEIGHTS, MALE_SUBJECT_WEIGHTS},
    introduction::{generate_introduction_with_rng, is_top_tier_education, MAX_HIGHLIGHTS},
    scoring::{calculate_match_score, SAME_GENDER_EXPLANATION},
};
use matchmaker::models::{FactorWeights, Gender, Preference, Profile, Recommendation};
use matchmaker::services::base_profile;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn reference_male() -> Profile {
    let mut male = base_profile("m", "Arjun", Gender::Male);
    male.age = 30;
    male.income = 1_000_000;
    male.height_cm = 175;
    male.city = "Mumbai".to_string();
    male.want_kids = Preference::Yes;
    male.open_to_relocate = Preference::Yes;
    male.religion = "Hindu".to_string();
    male
}

fn reference_female() -> Profile {
    let mut female = base_profile("f", "Priya", Gender::Female);
    female.age = 27;
    female.income = 700_000;
    female.height_cm = 160;
    female.city = "Mumbai".to_string();
    female.want_kids = Preference::Yes;
    female.open_to_relocate = Preference::Yes;
    female.religion = "Hindu".to_string();
    female
}

#[test]
fn test_reference_scenario_male_subject() {
    let result = calculate_match_score(&reference_male(), &reference_female());

    // ageDiff 3 -> 96, income ratio 0.7 -> 81, height diff 15 -> 95,
    // bands 3 vs 2 -> 85: round(19.2 + 12.15 + 14.25 + 20 + 15 + 8.5 + 4.5) = 94
    assert_eq!(result.factors.age, 96.0);
    assert_eq!(result.factors.profession, 85.0);
    assert_eq!(result.score, 94);
    assert_eq!(result.recommendation, Recommendation::High);
    assert!(result.explanation.starts_with("Strong match potential: Ideal age gap"));
}

#[test]
fn test_identical_genders_score_zero() {
    let a = reference_male();
    let mut b = reference_male();
    b.id = "m2".to_string();
    b.age = 29;

    let result = calculate_match_score(&a, &b);

    assert_eq!(result.score, 0);
    assert_eq!(result.recommendation, Recommendation::Low);
    assert_eq!(result.explanation, SAME_GENDER_EXPLANATION);

    let women = calculate_match_score(&reference_female(), &reference_female());
    assert_eq!(women.score, 0);
}

#[test]
fn test_score_matches_weighted_sum() {
    let mut female = reference_female();
    female.city = "Delhi".to_string();
    female.open_to_relocate = Preference::Maybe;
    female.want_kids = Preference::No;
    female.income = 1_400_000;

    for (subject, candidate) in [(reference_male(), female.clone()), (female, reference_male())] {
        let result = calculate_match_score(&subject, &candidate);
        let weights = FactorWeights::for_subject(subject.gender);
        let expected = result.factors.weighted_sum(weights).round() as u8;
        assert_eq!(result.score, expected);
    }
}

#[test]
fn test_weights_are_distinct_per_subject() {
    assert_ne!(MALE_SUBJECT_WEIGHTS, FEMALE_SUBJECT_WEIGHTS);
    assert!((MALE_SUBJECT_WEIGHTS.total() - 1.0).abs() < 1e-9);
    assert!((FEMALE_SUBJECT_WEIGHTS.total() - 1.0).abs() < 1e-9);
}

#[test]
fn test_income_band_and_career_level() {
    assert_eq!(income_band(1_000_000), 3);
    assert_eq!(income_band(700_000), 2);

    let mut profile = reference_female();
    profile.designation = "Senior Analyst".to_string();
    assert_eq!(career_level(&profile), 3);
    profile.designation = "Data Analyst".to_string();
    assert_eq!(career_level(&profile), 2);
    profile.designation = "Consultant".to_string();
    assert_eq!(career_level(&profile), 1);
}

#[test]
fn test_female_subject_medium_threshold() {
    let mut female = reference_female();
    let mut male = reference_male();
    male.age = 40;
    male.income = 650_000;
    male.city = "Delhi".to_string();
    female.open_to_relocate = Preference::No;
    male.open_to_relocate = Preference::Maybe;
    male.want_kids = Preference::Maybe;
    female.designation = "Manager".to_string();

    let result = calculate_match_score(&female, &male);

    // age 30, income ~79.29, height 95, children 75, relocation 60, profession 76, values 90
    // -> 68.67
    assert_eq!(result.factors.age, 30.0);
    assert_eq!(result.factors.relocation, 60.0);
    assert_eq!(result.factors.profession, 76.0);
    assert_eq!(result.score, 69);
    assert_eq!(result.recommendation, Recommendation::Medium);
}

#[test]
fn test_enhancement_notes_and_cap() {
    let mut male = reference_male();
    let mut female = reference_female();
    male.degree = "MBA".to_string();
    female.degree = "B.Tech".to_string();
    male.languages_known = ["Hindi", "English"].iter().map(|s| s.to_string()).collect();
    female.languages_known = male.languages_known.clone();

    let base = calculate_match_score(&male, &female);
    let enhanced = enhance_match_score(&base, &male, &female);

    assert_eq!(enhanced.score, 100);
    assert!(enhanced.explanation.ends_with(" Strong personality alignment detected."));
    assert!(!enhanced.explanation.contains("Complementary lifestyle preferences."));
}

#[test]
fn test_static_lookups() {
    assert_eq!(company_size("Accenture"), CompanySize::Large);
    assert_eq!(company_size("Startup Labs"), CompanySize::Medium);
    assert!(is_top_tier_education("IIIT Hyderabad"));
    assert!(!is_top_tier_education("Delhi University"));
}

#[test]
fn test_introduction_highlights_bounded() {
    let mut male = reference_male();
    let mut female = reference_female();
    male.undergraduate_college = "IIT Bombay".to_string();
    female.undergraduate_college = "BITS Pilani".to_string();

    let score = calculate_match_score(&male, &female);
    let mut rng = StdRng::seed_from_u64(11);
    let intro = generate_introduction_with_rng(&male, &female, &score, &mut rng);

    assert_eq!(intro.highlights.len(), MAX_HIGHLIGHTS);
    assert!(intro.narrative.contains("Key compatibility factors:"));
    assert!(intro.narrative.contains("Priya"));
}

#[test]
fn test_low_recommendation_has_no_closing() {
    let mut male = reference_male();
    let mut female = reference_female();
    female.age = 45;
    female.income = 3_000_000;
    female.height_cm = 190;
    female.city = "Chennai".to_string();
    male.open_to_relocate = Preference::No;
    female.open_to_relocate = Preference::No;
    female.want_kids = Preference::No;
    female.religion = "Jain".to_string();

    let score = calculate_match_score(&male, &female);
    assert_eq!(score.recommendation, Recommendation::Low);

    let mut rng = StdRng::seed_from_u64(5);
    let intro = generate_introduction_with_rng(&male, &female, &score, &mut rng);
    assert!(intro.highlights.is_empty());
    assert!(!intro.narrative.contains("\n\n"));
}
