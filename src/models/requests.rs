use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Profile;

/// Request to rank matches for a roster customer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "customer_id", rename = "customerId")]
    pub customer_id: String,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default)]
    pub enhance: Option<bool>,
}

/// Request to score an ad-hoc pair of profiles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScorePairRequest {
    #[validate(nested)]
    pub subject: Profile,
    #[validate(nested)]
    pub candidate: Profile,
    #[serde(default)]
    pub enhance: bool,
}

/// Request to introduce one roster customer to another
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IntroduceRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "customer_id", rename = "customerId")]
    pub customer_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "match_id", rename = "matchId")]
    pub match_id: String,
}
