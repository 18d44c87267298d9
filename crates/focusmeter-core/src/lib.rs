//! # Focusmeter Core Library
//!
//! Core business logic for Focusmeter, a rule-based attention predictor.
//! All operations are available through the standalone CLI binary; this crate
//! holds everything with a behavioral contract, while the CLI is a thin
//! presentation layer over it.
//!
//! ## Architecture
//!
//! - **Profile Table**: fixed per-category scoring parameters, resolved by
//!   exhaustive match over a closed category enum
//! - **Scoring Engine**: pure functions mapping validated session inputs to a
//!   bounded focus score plus an ordered reason list
//! - **Recommendation Mapper**: score tiers to canned advisories, with an
//!   independent quality banding
//! - **Config**: TOML-based presentation defaults
//!
//! All computation is synchronous pure arithmetic; nothing here suspends,
//! blocks on I/O (outside config load/save), or shares mutable state.

pub mod config;
pub mod error;
pub mod profile;
pub mod recommend;
pub mod scoring;

pub use config::Config;
pub use error::{ConfigError, ValidationError};
pub use profile::{Profile, UserCategory};
pub use recommend::{recommend, QualityLabel, Recommendation};
pub use scoring::{
    compute_score, Reason, ScoreResult, SessionInput, SessionKind, StudyContext, StudyType,
    SubjectDifficulty,
};
