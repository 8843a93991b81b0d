// src/generators/mod.rs
mod charset;
mod password;
mod strength;

pub use charset::{Charset, LOWERCASE, UPPERCASE, NUMBERS, SYMBOLS, SCORING_SYMBOLS};
pub use password::{PasswordGenerator, GeneratorError, generate_with};
pub use strength::{score, analyze, StrengthLevel, StrengthCriteria, StrengthReport, STRONG_LENGTH_THRESHOLD};
