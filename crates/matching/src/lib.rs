pub mod engine;
pub mod extract;
pub mod insights;
pub mod pairing;
pub mod profiles;
pub mod prompt;

pub use engine::PairingEngine;
pub use insights::{constellation, question_popularity, Constellation, QuestionCount};
pub use pairing::{parse_pairings, PairMatch, Pairing, PairingSet};
pub use profiles::{group_profiles, validate_current_user, Profile, QaPair};
