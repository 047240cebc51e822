//! Wayfinder Harness: reference worlds and reproducible search runs.
//!
//! The harness runs a world through one of the search algorithms and
//! packages the result as a canonical JSON report with a content digest.
//!
//! The harness does NOT implement search logic; it delegates to
//! `wayfinder_search`. Worlds provide domain data only; the runner owns
//! orchestration and hashing.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod contract;
pub mod hash;
pub mod runner;
pub mod worlds;
