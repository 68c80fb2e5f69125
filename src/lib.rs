//! Automation scoring core plus the thin CLI plumbing around it.
//!
//! The engine itself is two pure operations over aggregated counts:
//! [`compute_score`] turns them into a 0–100 score with an auditable
//! per-component breakdown, and [`generate_recommendations`] turns the
//! same counts into an ordered improvement backlog. Neither performs
//! I/O; snapshot loading, config, and rendering live in their own
//! modules and are only used by the binary.

pub mod config;
pub mod error;
pub mod recommend;
pub mod report;
pub mod score;
pub mod snapshot;
pub mod types;

pub use recommend::generate_recommendations;
pub use score::{compute_score, compute_score_with, describe_score};
pub use types::metrics::{CategoryNames, CategoryToolCounts, RawMetrics, TierDistribution};
pub use types::report::{Effort, Impact, Priority, RecCategory, Recommendation};
pub use types::scoring::{ComponentScore, ScoreResult};
