// src/generators/charset.rs
use crate::models::GenerationConfig;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?/";

/// Symbols the strength scorer recognises. Note that `/` is missing here
/// even though the generator can emit it.
pub const SCORING_SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

/// Characters eligible for selection, in class order: lowercase, uppercase,
/// numbers, symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    pub fn for_config(config: &GenerationConfig) -> Self {
        let mut chars: Vec<char> = LOWERCASE.chars().collect();

        if config.include_uppercase {
            chars.extend(UPPERCASE.chars());
        }
        if config.include_numbers {
            chars.extend(NUMBERS.chars());
        }
        if config.include_symbols {
            chars.extend(SYMBOLS.chars());
        }

        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}
