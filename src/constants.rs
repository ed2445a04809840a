//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours (7 days)
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 168;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 50;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const USER: &str = "user";
    pub const ADMIN: &str = "admin";

    /// All user roles
    pub const ALL: &[&str] = &[USER, ADMIN];
}

// =============================================================================
// PROBLEM DIFFICULTIES
// =============================================================================

/// Problem difficulty identifiers
pub mod difficulties {
    pub const EASY: &str = "Easy";
    pub const MEDIUM: &str = "Medium";
    pub const HARD: &str = "Hard";

    /// All difficulty values
    pub const ALL: &[&str] = &[EASY, MEDIUM, HARD];
}

// =============================================================================
// UI THEMES
// =============================================================================

/// Profile theme identifiers
pub mod themes {
    pub const LIGHT: &str = "light";
    pub const DARK: &str = "dark";

    /// All theme values
    pub const ALL: &[&str] = &[LIGHT, DARK];
}

// =============================================================================
// PROGRESS & RECOMMENDATION LIMITS
// =============================================================================

/// Number of tag buckets returned by the progress summary
pub const SUMMARY_TAG_LIMIT: i64 = 20;

/// Number of top tags the recommender derives from solve history
pub const RECOMMEND_TAG_LIMIT: i64 = 10;

/// Maximum problems returned by a tag-based recommendation
pub const RECOMMEND_RESULT_LIMIT: i64 = 20;

/// Problems returned by the no-history fallback (newest catalog entries)
pub const RECOMMEND_FALLBACK_LIMIT: i64 = 10;

/// Default trailing window for the solve timeline, in days
pub const DEFAULT_TIMELINE_DAYS: i64 = 90;

/// Maximum trailing window for the solve timeline, in days
pub const MAX_TIMELINE_DAYS: i64 = 3650;

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum problem title length
pub const MAX_PROBLEM_TITLE_LENGTH: u64 = 256;

/// Maximum external problem identifier length
pub const MAX_PROBLEM_ID_LENGTH: u64 = 64;

/// Maximum platform name length
pub const MAX_PLATFORM_LENGTH: u64 = 64;

/// Maximum number of tags on a single problem
pub const MAX_TAGS_PER_PROBLEM: usize = 16;

/// Maximum length of a single tag
pub const MAX_TAG_LENGTH: usize = 48;
