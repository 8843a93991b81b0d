// src/cli/menu.rs
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use console::style;
use inquire::validator::Validation;
use inquire::{CustomType, InquireError, Select};

use crate::cli::handlers::strength_style;
use crate::core::GeneratorSession;
use crate::models::{MAX_LENGTH, MIN_LENGTH};
use crate::system::Clipboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Regenerate,
    Copy,
    Length,
    Uppercase,
    Numbers,
    Symbols,
    Exit,
}

struct MenuItem {
    action: MenuAction,
    label: String,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn checkbox(enabled: bool) -> &'static str {
    if enabled { "[x]" } else { "[ ]" }
}

fn menu_items(session: &GeneratorSession) -> Vec<MenuItem> {
    let config = session.config();
    vec![
        MenuItem { action: MenuAction::Regenerate, label: "🔁  Regenerate".to_string() },
        MenuItem { action: MenuAction::Copy, label: "📋  Copy to clipboard".to_string() },
        MenuItem { action: MenuAction::Length, label: format!("📏  Password length ({})", config.length) },
        MenuItem { action: MenuAction::Uppercase, label: format!("{} Uppercase Letters (ABC)", checkbox(config.include_uppercase)) },
        MenuItem { action: MenuAction::Numbers, label: format!("{} Numbers (123)", checkbox(config.include_numbers)) },
        MenuItem { action: MenuAction::Symbols, label: format!("{} Symbols (@$!)", checkbox(config.include_symbols)) },
        MenuItem { action: MenuAction::Exit, label: "❌  Exit".to_string() },
    ]
}

fn render(session: &GeneratorSession) {
    let level = session.strength();
    println!();
    println!("Generated Password: {}", style(session.password()).bold());
    println!("Password Strength: {}", strength_style(level).apply_to(level));
    if session.notice_visible() {
        println!("{}", style("Copied!").green());
    }
}

fn prompt_length(current: usize) -> Result<usize, InquireError> {
    CustomType::<usize>::new(&format!("Password length ({}-{}):", MIN_LENGTH, MAX_LENGTH))
        .with_default(current)
        .with_error_message("Please type a whole number")
        .with_validator(|length: &usize| {
            if (MIN_LENGTH..=MAX_LENGTH).contains(length) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    format!("Length must be between {} and {}", MIN_LENGTH, MAX_LENGTH).into(),
                ))
            }
        })
        .prompt()
}

/// Interactive generator loop. Returns when the user exits or cancels.
pub async fn run_cli_menu(
    mut session: GeneratorSession,
    clipboard: &dyn Clipboard,
    should_exit: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🔐 PASSWORD GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    while !should_exit.load(Ordering::SeqCst) {
        render(&session);

        let choice = match Select::new("What next?", menu_items(&session)).prompt() {
            Ok(item) => item.action,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            MenuAction::Regenerate => {
                session.regenerate()?;
            }
            MenuAction::Copy => {
                if let Err(e) = session.copy(clipboard) {
                    log::warn!("Copy failed: {}", e);
                    println!("❌ Could not copy password: {}", e);
                }
            }
            MenuAction::Length => match prompt_length(session.config().length) {
                Ok(length) => {
                    session.set_length(length)?;
                }
                Err(InquireError::OperationCanceled) => {}
                Err(InquireError::OperationInterrupted) => break,
                Err(e) => return Err(e.into()),
            },
            MenuAction::Uppercase => {
                session.toggle_uppercase()?;
            }
            MenuAction::Numbers => {
                session.toggle_numbers()?;
            }
            MenuAction::Symbols => {
                session.toggle_symbols()?;
            }
            MenuAction::Exit => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::crypto::RandomSource;
    use crate::generators::PasswordGenerator;
    use crate::models::GenerationConfig;

    #[test]
    fn menu_reflects_current_options() {
        let mut session = GeneratorSession::new(
            PasswordGenerator::new(RandomSource::Seeded(8)),
            GenerationConfig::default(),
            Duration::from_secs(2),
        )
        .unwrap();
        session.toggle_numbers().unwrap();

        let labels: Vec<String> = menu_items(&session).iter().map(|i| i.to_string()).collect();
        assert!(labels.contains(&"📏  Password length (12)".to_string()));
        assert!(labels.contains(&"[x] Uppercase Letters (ABC)".to_string()));
        assert!(labels.contains(&"[ ] Numbers (123)".to_string()));
        assert_eq!(menu_items(&session).last().map(|i| i.action), Some(MenuAction::Exit));
    }
}
