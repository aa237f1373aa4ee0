// Service exports
pub mod mock;
pub mod roster;

pub use mock::{base_profile, generate_mock_profiles};
pub use roster::{ProfileRoster, RosterError};
