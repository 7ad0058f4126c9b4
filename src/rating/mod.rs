pub mod elo;

pub use elo::{update_rating, INITIAL_RATING};
