// src/system/clipboard.rs
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Mutex;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard tool found (tried {0})")]
    Unavailable(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Clipboard command failed: {0}")]
    CommandFailed(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Writes through whichever platform clipboard tool is installed.
pub struct SystemClipboard {
    candidates: Vec<(String, Vec<String>)>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::with_candidates(vec![
            ("wl-copy", vec![]),
            ("xclip", vec!["-selection", "clipboard"]),
            ("xsel", vec!["--clipboard", "--input"]),
            ("pbcopy", vec![]),
            ("clip", vec![]),
        ])
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try exactly these tools, in order.
    pub fn with_candidates(candidates: Vec<(&str, Vec<&str>)>) -> Self {
        Self {
            candidates: candidates
                .into_iter()
                .map(|(program, args)| (program.to_string(), args.iter().map(|a| a.to_string()).collect()))
                .collect(),
        }
    }

    // Clipboard tools fork a daemon that outlives them and inherits our
    // stdio, so no output pipe may be left open or waiting would block.
    fn pipe_into(program: &str, args: &[String], text: &str) -> Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let written = match child.stdin.take() {
            // dropping stdin closes the pipe
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait()?;
        written?;

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed(format!("{} exited with {}", program, status)))
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut last_failure = None;

        for (program, args) in &self.candidates {
            match Self::pipe_into(program, args, text) {
                Ok(()) => {
                    log::debug!("Copied {} characters with {}", text.chars().count(), program);
                    return Ok(());
                }
                Err(ClipboardError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    log::warn!("Clipboard tool {} failed: {}", program, e);
                    last_failure = Some(e);
                }
            }
        }

        Err(last_failure.unwrap_or_else(|| {
            let tried: Vec<&str> = self.candidates.iter().map(|(p, _)| p.as_str()).collect();
            ClipboardError::Unavailable(tried.join(", "))
        }))
    }
}

/// In-process clipboard, used when no desktop clipboard is wanted.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| ClipboardError::CommandFailed(e.to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}
