//! Tutor matching and search engine for a university tutoring marketplace.
//!
//! [`matching`] holds the pure scoring, ranking, filtering and sorting logic.
//! [`directory`] and [`session`] describe where profiles and the current user
//! come from, and the remaining modules carry configuration, logging and
//! error plumbing for front ends.

pub mod config;
pub mod directory;
pub mod error;
pub mod matching;
pub mod session;
pub mod telemetry;
