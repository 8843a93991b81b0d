// src/generators/strength.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::SCORING_SYMBOLS;

/// A password must be strictly longer than this to satisfy the length criterion.
pub const STRONG_LENGTH_THRESHOLD: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthCriteria {
    pub length_ok: bool,
    pub has_upper: bool,
    pub has_number: bool,
    pub has_symbol: bool,
}

impl StrengthCriteria {
    pub fn evaluate(password: &str) -> Self {
        Self {
            // measured in UTF-16 code units, so astral characters count twice
            length_ok: password.encode_utf16().count() > STRONG_LENGTH_THRESHOLD,
            has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
            has_number: password.chars().any(|c| c.is_ascii_digit()),
            has_symbol: password.chars().any(|c| SCORING_SYMBOLS.contains(c)),
        }
    }

    fn any_class(&self) -> bool {
        self.has_upper || self.has_number || self.has_symbol
    }

    // First matching rule wins
    pub fn level(&self) -> StrengthLevel {
        if self.length_ok && self.has_upper && self.has_number && self.has_symbol {
            StrengthLevel::VeryStrong
        } else if self.length_ok && self.any_class() {
            StrengthLevel::Strong
        } else if self.length_ok || self.any_class() {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Weak
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    pub level: StrengthLevel,
    pub criteria: StrengthCriteria,
}

impl StrengthReport {
    /// One hint per unmet criterion.
    pub fn feedback(&self) -> Vec<String> {
        let criteria = &self.criteria;
        if self.level == StrengthLevel::VeryStrong {
            return vec!["Excellent password strength!".to_string()];
        }

        let mut feedback = Vec::new();
        if !criteria.length_ok {
            feedback.push(format!("Use more than {} characters", STRONG_LENGTH_THRESHOLD));
        }
        if !criteria.has_upper {
            feedback.push("Add uppercase letters for better security".to_string());
        }
        if !criteria.has_number {
            feedback.push("Add numbers for better security".to_string());
        }
        if !criteria.has_symbol {
            feedback.push(format!("Add symbols ({}) for better security", SCORING_SYMBOLS));
        }
        feedback
    }
}

pub fn analyze(password: &str) -> StrengthReport {
    let criteria = StrengthCriteria::evaluate(password);
    StrengthReport {
        level: criteria.level(),
        criteria,
    }
}

pub fn score(password: &str) -> StrengthLevel {
    StrengthCriteria::evaluate(password).level()
}
