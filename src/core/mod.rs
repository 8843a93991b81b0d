// src/core/mod.rs
pub mod config;
pub mod notice;
pub mod session;

pub use config::Config;
pub use notice::CopyNotice;
pub use session::GeneratorSession;
