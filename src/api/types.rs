// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::{IntoParams, ToSchema};

use crate::generators::{StrengthCriteria, StrengthLevel};

// Generator requests and responses
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length, 8 to 32 (default: configured length, normally 12)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Strength label of the generated password
    pub strength: Option<StrengthLevel>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            password: None,
            strength: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnalysisQuery {
    /// Password to analyze; may be empty
    pub pwd: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength label
    pub strength: StrengthLevel,
    /// Which of the four criteria the password meets
    pub criteria: StrengthCriteria,
    /// Suggestions for improvement
    pub feedback: Vec<String>,
}

// System
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Random source backing the generator
    pub random_source: String,
    /// Whether that source is cryptographically secure
    pub secure: bool,
    pub time: String,
}
