// src/lib.rs
//! Random password generation with a four-level strength scorer.
//!
//! The generator and scorer in [`generators`] are pure. [`core::GeneratorSession`]
//! holds the mutable state of an interactive front end, and [`api`] serves
//! both over HTTP.

pub mod api;
pub mod cli;
pub mod core;
pub mod crypto;
pub mod generators;
pub mod logging;
pub mod models;
pub mod system;
pub mod utils;

pub use crate::generators::{analyze, score, PasswordGenerator, StrengthLevel};
pub use crate::models::{GenerationConfig, Password};
