//! mathquiz-core — Equation generation, session tracking, and scoring.
//!
//! This crate defines the data model, the random equation generator and the
//! session state machine that the `mathquiz` CLI drives interactively.

pub mod answer;
pub mod config;
pub mod error;
pub mod generator;
pub mod level;
pub mod model;
pub mod report;
pub mod session;
pub mod statistics;
