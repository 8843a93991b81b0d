// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::RngCore;
use thiserror::Error;

use crate::crypto::{RandomSource, RngFactory};
use crate::models::{GenerationConfig, Password};
use super::Charset;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least 1")]
    ZeroLength,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

pub struct PasswordGenerator {
    rngs: RngFactory,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(RandomSource::default())
    }
}

impl PasswordGenerator {
    pub fn new(source: RandomSource) -> Self {
        if !source.is_cryptographically_secure() {
            log::warn!("Password generator uses reproducible source '{}'; output is not suitable for real credentials", source);
        }
        PasswordGenerator {
            rngs: RngFactory::new(source),
        }
    }

    pub fn source(&self) -> RandomSource {
        self.rngs.source()
    }

    /// Generate a password of exactly `config.length` characters.
    ///
    /// Any positive length is accepted here; the `MIN_LENGTH..=MAX_LENGTH`
    /// bounds belong to whoever builds the config.
    pub fn generate(&self, config: &GenerationConfig) -> Result<Password> {
        let charset = Charset::for_config(config);
        let mut rng = self.rngs.rng();
        let password = generate_with(&mut rng, config.length, &charset)?;
        log::debug!(
            "Generated {:?} from {} candidate characters (source: {})",
            password,
            charset.len(),
            self.rngs.source()
        );
        Ok(password)
    }
}

/// Draw `length` characters independently and uniformly from `charset`.
pub fn generate_with<R: RngCore + ?Sized>(rng: &mut R, length: usize, charset: &Charset) -> Result<Password> {
    if length == 0 {
        return Err(GeneratorError::ZeroLength);
    }

    let chars = charset.as_slice();
    let dist = Uniform::from(0..chars.len());
    let password: String = (0..length)
        .map(|_| chars[dist.sample(rng)])
        .collect();

    Ok(Password::new(password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{LOWERCASE, NUMBERS, SYMBOLS, UPPERCASE};

    fn all_flag_combinations() -> Vec<(bool, bool, bool)> {
        let mut combos = Vec::new();
        for upper in [false, true] {
            for numbers in [false, true] {
                for symbols in [false, true] {
                    combos.push((upper, numbers, symbols));
                }
            }
        }
        combos
    }

    #[test]
    fn exact_length_and_charset_membership_for_every_config() {
        let generator = PasswordGenerator::new(RandomSource::Seeded(2024));

        for (upper, numbers, symbols) in all_flag_combinations() {
            for length in 1..=64 {
                let config = GenerationConfig {
                    length,
                    include_uppercase: upper,
                    include_numbers: numbers,
                    include_symbols: symbols,
                };
                let charset = Charset::for_config(&config);
                let password = generator.generate(&config).unwrap();

                assert_eq!(password.len(), length);
                assert!(password.as_str().chars().all(|c| charset.contains(c)),
                    "{:?} produced a character outside its charset", config);
            }
        }
    }

    #[test]
    fn lowercase_only_yields_only_lowercase() {
        let generator = PasswordGenerator::default();
        let config = GenerationConfig::new(32, false, false, false);

        for _ in 0..50 {
            let password = generator.generate(&config).unwrap();
            assert!(password.as_str().chars().all(|c| LOWERCASE.contains(c)));
        }
    }

    #[test]
    fn enabling_classes_only_adds_candidates() {
        let base = Charset::for_config(&GenerationConfig::new(12, false, false, false));

        for (upper, numbers, symbols) in all_flag_combinations() {
            let wider = Charset::for_config(&GenerationConfig::new(12, upper, numbers, symbols));
            assert!(base.as_slice().iter().all(|c| wider.contains(*c)));
            assert_eq!(UPPERCASE.chars().all(|c| wider.contains(c)), upper);
            assert_eq!(NUMBERS.chars().all(|c| wider.contains(c)), numbers);
            assert_eq!(SYMBOLS.chars().all(|c| wider.contains(c)), symbols);
        }
    }

    #[test]
    fn zero_length_is_rejected() {
        let generator = PasswordGenerator::default();
        let config = GenerationConfig { length: 0, ..GenerationConfig::default() };
        assert_eq!(generator.generate(&config), Err(GeneratorError::ZeroLength));
    }

    #[test]
    fn seeded_generators_are_reproducible() {
        let config = GenerationConfig::default();
        let a = PasswordGenerator::new(RandomSource::Seeded(77));
        let b = PasswordGenerator::new(RandomSource::Seeded(77));

        let first = a.generate(&config).unwrap();
        assert_eq!(first, b.generate(&config).unwrap());
        assert_ne!(first, a.generate(&config).unwrap());
    }

    #[test]
    fn wide_charset_eventually_uses_every_class() {
        let generator = PasswordGenerator::new(RandomSource::Seeded(5));
        let config = GenerationConfig::new(32, true, true, true);

        let mut seen = String::new();
        for _ in 0..100 {
            seen.push_str(generator.generate(&config).unwrap().as_str());
        }
        for class in [LOWERCASE, UPPERCASE, NUMBERS, SYMBOLS] {
            assert!(seen.chars().any(|c| class.contains(c)));
        }
    }
}
