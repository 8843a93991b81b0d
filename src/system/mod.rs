// src/system/mod.rs
pub mod clipboard;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
