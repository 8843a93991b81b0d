// src/core/session.rs
use std::time::Duration;

use crate::core::notice::CopyNotice;
use crate::generators::{self, GeneratorError, PasswordGenerator, StrengthLevel, StrengthReport};
use crate::models::{GenerationConfig, Password};
use crate::system::{Clipboard, ClipboardError};

/// Mutable state behind the generator UI.
///
/// Every change to the config replaces the password. Copying shows the
/// notice; any regeneration hides it again.
pub struct GeneratorSession {
    generator: PasswordGenerator,
    config: GenerationConfig,
    password: Password,
    notice: CopyNotice,
}

impl GeneratorSession {
    /// Create a session and generate the first password straight away.
    pub fn new(generator: PasswordGenerator, config: GenerationConfig, notice_duration: Duration) -> Result<Self, GeneratorError> {
        let password = generator.generate(&config)?;
        Ok(Self {
            generator,
            config,
            password,
            notice: CopyNotice::new(notice_duration),
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn strength(&self) -> StrengthLevel {
        generators::score(self.password.as_str())
    }

    pub fn report(&self) -> StrengthReport {
        generators::analyze(self.password.as_str())
    }

    pub fn notice_visible(&self) -> bool {
        self.notice.is_visible()
    }

    pub fn regenerate(&mut self) -> Result<&Password, GeneratorError> {
        self.notice.cancel();
        self.password = self.generator.generate(&self.config)?;
        Ok(&self.password)
    }

    /// Set the length (clamped to the slider bounds) and regenerate.
    pub fn set_length(&mut self, length: usize) -> Result<&Password, GeneratorError> {
        self.config.set_length(length);
        if self.config.length != length {
            log::debug!("Requested length {} clamped to {}", length, self.config.length);
        }
        self.regenerate()
    }

    pub fn toggle_uppercase(&mut self) -> Result<&Password, GeneratorError> {
        self.config.include_uppercase = !self.config.include_uppercase;
        self.regenerate()
    }

    pub fn toggle_numbers(&mut self) -> Result<&Password, GeneratorError> {
        self.config.include_numbers = !self.config.include_numbers;
        self.regenerate()
    }

    pub fn toggle_symbols(&mut self) -> Result<&Password, GeneratorError> {
        self.config.include_symbols = !self.config.include_symbols;
        self.regenerate()
    }

    /// Write the current password to `clipboard` and show the notice.
    ///
    /// On failure the password is untouched and the notice stays hidden.
    /// Must be called from within a tokio runtime.
    pub fn copy(&mut self, clipboard: &dyn Clipboard) -> Result<(), ClipboardError> {
        clipboard.write_text(self.password.as_str())?;
        self.notice.show();
        Ok(())
    }
}
