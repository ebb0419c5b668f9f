//! Persistent entities and their creation inputs.

pub mod campaign;
pub mod character;
pub mod monster;
pub mod session;

pub use campaign::{Campaign, NewCampaign};
pub use character::{Character, NewCharacter};
pub use monster::{Monster, NewMonster};
pub use session::{NewSession, Session};

/// Primary key type for all tables (BIGSERIAL).
pub type DbId = i64;
