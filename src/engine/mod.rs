//! Synthetic Report Engine primitives
//!
//! The shared pipeline behind both report generators:
//!
//! ```text
//! text ─▶ seed ─▶ stream ─▶ metrics ─▶ scores ─▶ findings ─▶ report
//! ```
//!
//! - [`seed`]: deterministic string hash
//! - [`stream`]: Lehmer LCG owned by one generation call
//! - [`scoring`]: weighted-condition sheets, mean, grade ladder
//! - [`latency`]: scaled artificial pauses at suspension points

pub mod latency;
pub mod scoring;
pub mod seed;
pub mod stream;

pub use latency::SimulatedLatency;
pub use scoring::{Grade, ScoreSheet, mean_score};
pub use seed::{seed_from_parts, seed_from_text};
pub use stream::DeterministicStream;
