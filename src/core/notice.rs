// src/core/notice.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// The transient "Copied!" indicator.
///
/// `show` schedules a hide after `duration`; any later `show` or `cancel`
/// supersedes the pending hide.
pub struct CopyNotice {
    visible: Arc<AtomicBool>,
    duration: Duration,
    pending: Option<JoinHandle<()>>,
}

impl CopyNotice {
    pub fn new(duration: Duration) -> Self {
        Self {
            visible: Arc::new(AtomicBool::new(false)),
            duration,
            pending: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Show the notice. Must be called from within a tokio runtime.
    pub fn show(&mut self) {
        self.abort_pending();
        self.visible.store(true, Ordering::SeqCst);

        let visible = Arc::clone(&self.visible);
        let duration = self.duration;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            visible.store(false, Ordering::SeqCst);
            log::trace!("Copy notice hidden after {:?}", duration);
        }));
    }

    pub fn cancel(&mut self) {
        self.abort_pending();
        self.visible.store(false, Ordering::SeqCst);
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for CopyNotice {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
