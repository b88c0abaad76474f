//! Global Constants
//!
//! Centralized constants for the report engines.
//! All magic numbers shared across modules are defined here.

/// Lehmer (Park-Miller) generator parameters
pub mod lcg {
    /// Multiplier applied to the state on every draw
    pub const MULTIPLIER: u64 = 16_807;

    /// Modulus (2^31 - 1)
    pub const MODULUS: u64 = 2_147_483_647;
}

/// Simulated latency, in milliseconds before scaling
pub mod latency {
    /// SEO analysis: fixed part of the single up-front pause
    pub const SEO_BASE_MS: f64 = 1500.0;
    /// SEO analysis: seeded jitter added on top
    pub const SEO_JITTER_MS: f64 = 1500.0;

    /// Audit: fixed part of each per-department pause
    pub const AUDIT_BASE_MS: f64 = 600.0;
    /// Audit: seeded jitter added on top
    pub const AUDIT_JITTER_MS: f64 = 800.0;

    /// Upper bound accepted for the configured scale factor
    pub const MAX_SCALE: f64 = 10.0;
}

/// Scoring constants
pub mod scoring {
    /// Every category is scored on a 0-100 scale
    pub const MAX_SCORE: u32 = 100;

    /// Grade ladder thresholds (inclusive lower bounds)
    pub mod grade {
        pub const A_PLUS: u32 = 90;
        pub const A: u32 = 80;
        pub const B: u32 = 70;
        pub const C: u32 = 60;
        pub const D: u32 = 50;
    }
}

/// Audit aggregation constants
pub mod audit {
    /// Departments placed in the "Quick Wins" phase
    pub const QUICK_WIN_COUNT: usize = 2;

    /// Departments placed in the "Expansion" phase
    pub const EXPANSION_COUNT: usize = 3;

    /// Minimum department count for the "Expansion" phase
    pub const EXPANSION_MIN_DEPARTMENTS: usize = 5;

    /// Minimum department count for the "Advanced Deployment" phase
    pub const ADVANCED_MIN_DEPARTMENTS: usize = 6;

    /// Monthly savings per recommended agent: fixed part (USD)
    pub const SAVINGS_BASE_PER_AGENT: f64 = 1500.0;

    /// Monthly savings per recommended agent: seeded jitter (USD)
    pub const SAVINGS_JITTER_PER_AGENT: f64 = 3000.0;

    /// Hours assumed for an agent whose time-saved string has no number
    pub const DEFAULT_HOURS_SAVED: u32 = 5;
}

/// Storage constants
pub mod storage {
    /// Project data directory
    pub const DATA_DIR: &str = ".webhunt";

    /// Default SQLite file for saved reports
    pub const DEFAULT_DB_PATH: &str = ".webhunt/reports.db";

    /// Maximum rows returned by a history listing
    pub const MAX_LIST_ROWS: usize = 500;
}
