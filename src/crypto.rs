// src/crypto.rs
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandomSourceError {
    #[error("Unknown random source: {0}")]
    Unknown(String),

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),
}

/// Where the generator draws its randomness from.
///
/// `Os` and `Thread` are cryptographically secure. `Seeded` is reproducible
/// and must not be used for real passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomSource {
    Os,
    Thread,
    Seeded(u64),
}

impl Default for RandomSource {
    fn default() -> Self {
        RandomSource::Os
    }
}

impl RandomSource {
    pub fn is_cryptographically_secure(&self) -> bool {
        !matches!(self, RandomSource::Seeded(_))
    }
}

impl fmt::Display for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomSource::Os => write!(f, "os"),
            RandomSource::Thread => write!(f, "thread"),
            RandomSource::Seeded(seed) => write!(f, "seeded:{}", seed),
        }
    }
}

impl FromStr for RandomSource {
    type Err = RandomSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        match value.as_str() {
            "os" => Ok(RandomSource::Os),
            "thread" => Ok(RandomSource::Thread),
            _ => match value.strip_prefix("seeded:") {
                Some(seed) => seed
                    .parse()
                    .map(RandomSource::Seeded)
                    .map_err(|_| RandomSourceError::InvalidSeed(seed.to_string())),
                None => Err(RandomSourceError::Unknown(s.to_string())),
            },
        }
    }
}

/// Hands out one RNG per generation call.
///
/// Seeded sources advance a ChaCha stream counter on every call, so
/// consecutive passwords differ while a whole run stays reproducible.
#[derive(Debug)]
pub struct RngFactory {
    source: RandomSource,
    stream: AtomicU64,
}

impl RngFactory {
    pub fn new(source: RandomSource) -> Self {
        Self {
            source,
            stream: AtomicU64::new(0),
        }
    }

    pub fn source(&self) -> RandomSource {
        self.source
    }

    pub fn rng(&self) -> Box<dyn RngCore> {
        match self.source {
            RandomSource::Os => Box::new(OsRng),
            RandomSource::Thread => Box::new(rand::thread_rng()),
            RandomSource::Seeded(seed) => {
                let mut rng = ChaCha20Rng::seed_from_u64(seed);
                rng.set_stream(self.stream.fetch_add(1, Ordering::Relaxed));
                Box::new(rng)
            }
        }
    }
}
