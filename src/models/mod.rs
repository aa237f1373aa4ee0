// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    FactorSet, FactorWeights, Gender, MaritalStatus, MatchIntroduction, MatchScore, Preference,
    Profile, ProfileSummary, Recommendation,
};
pub use requests::{FindMatchesRequest, IntroduceRequest, ScorePairRequest};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse};
