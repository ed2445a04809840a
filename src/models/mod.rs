//! Domain models

pub mod problem;
pub mod solved;
pub mod user;

pub use problem::{Difficulty, Problem};
pub use solved::SolvedRecord;
pub use user::User;
