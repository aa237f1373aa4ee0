use crate::core::{validate_profile, MatchError};
use crate::models::{Profile, ProfileSummary};
use crate::services::mock::generate_mock_profiles;
use rand::Rng;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur when building or querying the roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    InvalidProfile(#[from] MatchError),

    #[error("Duplicate profile id: {0}")]
    DuplicateId(String),

    #[error("Profile not found: {0}")]
    NotFound(String),
}

/// In-memory customer roster
///
/// Profiles are validated once on insertion and then only read, so the
/// roster can be shared across workers behind an `Arc`.
#[derive(Debug, Default)]
pub struct ProfileRoster {
    profiles: Vec<Profile>,
    index: HashMap<String, usize>,
}

impl ProfileRoster {
    /// Build a roster, rejecting invalid profiles and duplicate ids
    pub fn new(profiles: Vec<Profile>) -> Result<Self, RosterError> {
        let mut index = HashMap::with_capacity(profiles.len());

        for (position, profile) in profiles.iter().enumerate() {
            validate_profile(profile)?;
            if index.insert(profile.id.clone(), position).is_some() {
                return Err(RosterError::DuplicateId(profile.id.clone()));
            }
        }

        tracing::debug!("Roster built with {} profiles", profiles.len());

        Ok(Self { profiles, index })
    }

    /// Build a roster of generated demo profiles
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, RosterError> {
        Self::new(generate_mock_profiles(size, rng))
    }

    pub fn get(&self, id: &str) -> Result<&Profile, RosterError> {
        self.index
            .get(id)
            .map(|&position| &self.profiles[position])
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    /// All profiles in insertion order
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn summaries(&self) -> Vec<ProfileSummary> {
        self.profiles.iter().map(Profile::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
