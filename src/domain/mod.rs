pub mod answers;
pub mod models;

pub use models::{FermiQuestion, SessionEntry};
