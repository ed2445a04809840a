//! Business logic services

pub mod auth_service;
pub mod problem_service;
pub mod progress_service;
pub mod recommendation_service;
pub mod solved_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use problem_service::ProblemService;
pub use progress_service::ProgressService;
pub use recommendation_service::RecommendationService;
pub use solved_service::SolvedService;
pub use user_service::UserService;
