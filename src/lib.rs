//! Matchmaker - compatibility scoring and ranking engine
//!
//! This library ranks candidate profiles against a subject profile, explains
//! each ranking, applies secondary enhancement bonuses and drafts
//! introduction narratives. The scoring core is a pure function over
//! in-memory profiles; the HTTP layer and demo roster sit around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    calculate_match_score, enhance_match_score, find_best_matches, generate_introduction,
    generate_introduction_with_rng, MatchError, Matcher,
};
pub use crate::models::{
    FactorSet, Gender, MatchIntroduction, MatchScore, Preference, Profile, Recommendation,
};
