// Core algorithm exports
pub mod enhancement;
pub mod explanation;
pub mod factors;
pub mod introduction;
pub mod matcher;
pub mod scoring;

pub use enhancement::enhance_match_score;
pub use factors::{Factor, FEMALE_SUBJECT_WEIGHTS, MALE_SUBJECT_WEIGHTS};
pub use introduction::{generate_introduction, generate_introduction_with_rng, NarrativeTemplate};
pub use matcher::{
    find_best_matches, validate_profile, MatchError, MatchResult, Matcher, DEFAULT_LIMIT,
};
pub use scoring::calculate_match_score;
