use crate::core::{enhancement::enhance_match_score, scoring::calculate_match_score};
use crate::models::{MatchScore, Profile};
use thiserror::Error;
use validator::Validate;

/// Default number of matches returned by a ranking
pub const DEFAULT_LIMIT: usize = 10;

/// Errors raised at the ranking boundary
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid profile {id}: {source}")]
    InvalidProfile {
        id: String,
        #[source]
        source: validator::ValidationErrors,
    },
}

/// Reject profiles with missing or out-of-range fields before they are scored
pub fn validate_profile(profile: &Profile) -> Result<(), MatchError> {
    profile.validate().map_err(|source| MatchError::InvalidProfile {
        id: profile.id.clone(),
        source,
    })
}

/// Rank the opposite-gender candidates for a subject
///
/// Candidates are scored, sorted by descending score (stable, so ties keep
/// their pool order) and truncated to `limit`. An empty eligible pool yields
/// an empty list.
pub fn find_best_matches(
    subject: &Profile,
    candidates: &[Profile],
    limit: usize,
) -> Result<Vec<MatchScore>, MatchError> {
    let ranked = rank_candidates(subject, candidates, limit)?;
    Ok(ranked.into_iter().map(|(score, _)| score).collect())
}

/// Ranked scores paired with the candidate each one was computed against
fn rank_candidates<'a>(
    subject: &Profile,
    candidates: &'a [Profile],
    limit: usize,
) -> Result<Vec<(MatchScore, &'a Profile)>, MatchError> {
    validate_profile(subject)?;

    let wanted = subject.gender.opposite();
    let eligible: Vec<&Profile> = candidates
        .iter()
        .filter(|candidate| candidate.gender == wanted)
        .collect();

    for candidate in &eligible {
        validate_profile(candidate)?;
    }

    let mut scores: Vec<(MatchScore, &Profile)> = eligible
        .into_iter()
        .map(|candidate| (calculate_match_score(subject, candidate), candidate))
        .collect();

    scores.sort_by(|a, b| b.0.score.cmp(&a.0.score));
    scores.truncate(limit);

    Ok(scores)
}

/// Result of the matching pipeline
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<MatchScore>,
    pub total_candidates: usize,
    pub eligible_candidates: usize,
}

/// Matching orchestrator
///
/// # Pipeline Stages
/// 1. Validation of the subject and eligible candidates
/// 2. Opposite-gender filtering
/// 3. Pairwise scoring and ranking
/// 4. Optional enhancement of the ranked results
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    default_limit: usize,
    enhance: bool,
}

impl Matcher {
    pub fn new(default_limit: usize, enhance: bool) -> Self {
        Self {
            default_limit,
            enhance,
        }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    pub fn enhances(&self) -> bool {
        self.enhance
    }

    /// Find matches for a subject among `candidates`
    ///
    /// # Arguments
    /// * `subject` - The profile being matched
    /// * `candidates` - The pool to rank; the subject may be part of it
    /// * `limit` - Maximum number of matches, or the configured default
    ///
    /// # Returns
    /// MatchResult containing the ranked (and possibly enhanced) matches.
    /// Enhanced matches keep the base ranking order.
    pub fn find_matches(
        &self,
        subject: &Profile,
        candidates: &[Profile],
        limit: Option<usize>,
    ) -> Result<MatchResult, MatchError> {
        self.find_matches_with(subject, candidates, limit, self.enhance)
    }

    /// Same as [`Matcher::find_matches`] with an explicit enhancement switch
    pub fn find_matches_with(
        &self,
        subject: &Profile,
        candidates: &[Profile],
        limit: Option<usize>,
        enhance: bool,
    ) -> Result<MatchResult, MatchError> {
        let limit = limit.unwrap_or(self.default_limit);
        let wanted = subject.gender.opposite();
        let eligible_candidates = candidates
            .iter()
            .filter(|candidate| candidate.gender == wanted)
            .count();

        let matches: Vec<MatchScore> = rank_candidates(subject, candidates, limit)?
            .into_iter()
            .map(|(base, candidate)| {
                if enhance {
                    enhance_match_score(&base, subject, candidate)
                } else {
                    base
                }
            })
            .collect();

        tracing::debug!(
            subject = %subject.id,
            returned = matches.len(),
            eligible = eligible_candidates,
            enhance,
            "Ranked candidates"
        );

        Ok(MatchResult {
            matches,
            total_candidates: candidates.len(),
            eligible_candidates,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Preference};
    use crate::services::mock::base_profile;

    fn candidate(id: &str, gender: Gender, age: u8) -> Profile {
        let mut profile = base_profile(id, &format!("User {}", id), gender);
        profile.age = age;
        profile
    }

    fn languages(list: &[&str]) -> std::collections::BTreeSet<String> {
        list.iter().map(|l| l.to_string()).collect()
    }

    fn subject() -> Profile {
        let mut profile = base_profile("subject", "Arjun", Gender::Male);
        profile.age = 30;
        profile.income = 1_200_000;
        profile.height_cm = 178;
        profile
    }

    #[test]
    fn test_find_best_matches_filters_gender() {
        let candidates = vec![
            candidate("1", Gender::Female, 27),
            candidate("2", Gender::Male, 28),
            candidate("3", Gender::Female, 45),
        ];

        let result = find_best_matches(&subject(), &candidates, DEFAULT_LIMIT).unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|m| m.candidate_id != "2"));
        assert_eq!(result[0].candidate_id, "1");
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let candidates: Vec<Profile> = (0..12)
            .map(|i| candidate(&i.to_string(), Gender::Female, 20 + i as u8 * 2))
            .collect();

        let result = find_best_matches(&subject(), &candidates, 20).unwrap();

        assert_eq!(result.len(), 12);
        assert!(result.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let candidates = vec![
            candidate("a", Gender::Female, 27),
            candidate("b", Gender::Female, 27),
            candidate("c", Gender::Female, 27),
        ];

        let result = find_best_matches(&subject(), &candidates, 10).unwrap();
        let ids: Vec<&str> = result.iter().map(|m| m.candidate_id.as_str()).collect();

        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_respects_limit() {
        let candidates: Vec<Profile> = (0..20)
            .map(|i| candidate(&i.to_string(), Gender::Female, 25 + (i % 10) as u8))
            .collect();

        let result = find_best_matches(&subject(), &candidates, 5).unwrap();

        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_empty_pool_is_not_an_error() {
        let candidates = vec![candidate("1", Gender::Male, 30)];

        let result = find_best_matches(&subject(), &candidates, 10).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_invalid_candidate_fails_fast() {
        let mut bad = candidate("bad", Gender::Female, 27);
        bad.height_cm = 20;
        let candidates = vec![candidate("1", Gender::Female, 27), bad];

        let err = find_best_matches(&subject(), &candidates, 10).unwrap_err();

        match err {
            MatchError::InvalidProfile { id, .. } => assert_eq!(id, "bad"),
        }
    }

    #[test]
    fn test_missing_religion_is_rejected() {
        let mut payload = serde_json::to_value(candidate("1", Gender::Female, 27)).unwrap();
        payload.as_object_mut().unwrap().remove("religion");

        assert!(serde_json::from_value::<Profile>(payload).is_err());
    }

    #[test]
    fn test_blank_religion_fails_fast() {
        let mut blank = candidate("blank", Gender::Female, 27);
        blank.religion = String::new();
        let candidates = vec![candidate("1", Gender::Female, 27), blank];

        let err = find_best_matches(&subject(), &candidates, 10).unwrap_err();

        match err {
            MatchError::InvalidProfile { id, source } => {
                assert_eq!(id, "blank");
                assert!(source.field_errors().contains_key("religion"));
            }
        }
    }

    #[test]
    fn test_invalid_same_gender_candidate_is_ignored() {
        let mut bad = candidate("bad", Gender::Male, 27);
        bad.age = 5;
        let candidates = vec![candidate("1", Gender::Female, 27), bad];

        assert!(find_best_matches(&subject(), &candidates, 10).is_ok());
    }

    #[test]
    fn test_matcher_enhances_ranked_results() {
        let matcher = Matcher::default();
        let mut partner = candidate("1", Gender::Female, 27);
        partner.open_to_pets = Preference::Yes;
        let candidates = vec![partner, candidate("2", Gender::Male, 30)];

        let base = find_best_matches(&subject(), &candidates, 10).unwrap();
        let result = matcher.find_matches(&subject(), &candidates, None).unwrap();

        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.eligible_candidates, 1);
        assert_eq!(result.matches.len(), 1);
        assert!(result.matches[0].score >= base[0].score);
    }

    #[test]
    fn test_matcher_without_enhancement_matches_ranker() {
        let matcher = Matcher::new(3, false);
        let candidates: Vec<Profile> = (0..6)
            .map(|i| candidate(&i.to_string(), Gender::Female, 24 + i as u8))
            .collect();

        let result = matcher.find_matches(&subject(), &candidates, None).unwrap();
        let ranked = find_best_matches(&subject(), &candidates, 3).unwrap();

        assert_eq!(result.matches, ranked);
    }

    #[test]
    fn test_enhancement_uses_the_ranked_profile() {
        let matcher = Matcher::new(10, true);
        let mut shares_languages = candidate("dup", Gender::Female, 27);
        shares_languages.languages_known = languages(&["English", "Hindi"]);
        let mut far_older = candidate("dup", Gender::Female, 45);
        far_older.languages_known = Default::default();

        let mut subject = subject();
        subject.languages_known = languages(&["English", "Hindi"]);
        let candidates = vec![far_older.clone(), shares_languages.clone()];

        let result = matcher.find_matches(&subject, &candidates, None).unwrap();

        let close = calculate_match_score(&subject, &shares_languages);
        let older = calculate_match_score(&subject, &far_older);
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0], enhance_match_score(&close, &subject, &shares_languages));
        assert_eq!(result.matches[1], enhance_match_score(&older, &subject, &far_older));
    }
}
