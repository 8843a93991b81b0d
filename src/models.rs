// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Shortest length the length control allows.
pub const MIN_LENGTH: usize = 8;
/// Longest length the length control allows.
pub const MAX_LENGTH: usize = 32;
/// Length a fresh generator starts with.
pub const DEFAULT_LENGTH: usize = 12;

// Password generation options
//
// Lowercase letters are always part of the charset, so there is no flag for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GenerationConfig {
    /// Build a config, clamping `length` into `MIN_LENGTH..=MAX_LENGTH`.
    pub fn new(length: usize, include_uppercase: bool, include_numbers: bool, include_symbols: bool) -> Self {
        Self {
            length: clamp_length(length),
            include_uppercase,
            include_numbers,
            include_symbols,
        }
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = clamp_length(length);
    }

    pub fn is_within_bounds(length: usize) -> bool {
        (MIN_LENGTH..=MAX_LENGTH).contains(&length)
    }
}

fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// A generated password. Replaced, never mutated.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub(crate) fn new(value: String) -> Self {
        Password(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

// Keep passwords out of debug logs
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
