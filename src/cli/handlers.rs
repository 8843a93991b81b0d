// src/cli/handlers.rs
use console::{style, Style};
use serde::Serialize;

use crate::generators::{self, GeneratorError, PasswordGenerator, StrengthLevel, StrengthReport};
use crate::models::GenerationConfig;

#[derive(Debug, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthLevel,
}

/// Colour for a strength label: green, yellow, magenta (for orange), red.
pub fn strength_style(level: StrengthLevel) -> Style {
    match level {
        StrengthLevel::VeryStrong => Style::new().green().bold(),
        StrengthLevel::Strong => Style::new().yellow().bold(),
        StrengthLevel::Medium => Style::new().magenta().bold(),
        StrengthLevel::Weak => Style::new().red().bold(),
    }
}

// Handlers for CLI commands
pub fn handle_generate(
    generator: &PasswordGenerator,
    config: &GenerationConfig,
    count: usize,
) -> Result<Vec<GeneratedPassword>, GeneratorError> {
    if !GenerationConfig::is_within_bounds(config.length) {
        log::warn!("Length {} is outside the usual 8-32 range", config.length);
    }

    (0..count)
        .map(|_| -> Result<GeneratedPassword, GeneratorError> {
            let password = generator.generate(config)?;
            let strength = generators::score(password.as_str());
            Ok(GeneratedPassword {
                password: password.into_string(),
                strength,
            })
        })
        .collect()
}

pub fn render_generated(passwords: &[GeneratedPassword], json: bool) -> serde_json::Result<String> {
    if json {
        return serde_json::to_string_pretty(passwords);
    }

    let lines: Vec<String> = passwords
        .iter()
        .map(|p| format!("{}  {}", p.password, strength_style(p.strength).apply_to(p.strength)))
        .collect();
    Ok(lines.join("\n"))
}

pub fn handle_score(password: &str) -> StrengthReport {
    generators::analyze(password)
}

pub fn render_report(report: &StrengthReport, json: bool) -> serde_json::Result<String> {
    if json {
        #[derive(Serialize)]
        struct Output<'a> {
            #[serde(flatten)]
            report: &'a StrengthReport,
            feedback: Vec<String>,
        }
        return serde_json::to_string_pretty(&Output { report, feedback: report.feedback() });
    }

    let mut out = format!(
        "Password Strength: {}",
        strength_style(report.level).apply_to(report.level)
    );
    for line in report.feedback() {
        out.push_str(&format!("\n  {} {}", style("•").dim(), line));
    }
    Ok(out)
}
