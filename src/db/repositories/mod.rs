//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod problem_repo;
pub mod solved_repo;
pub mod user_repo;

pub use problem_repo::ProblemRepository;
pub use solved_repo::SolvedRepository;
pub use user_repo::UserRepository;
