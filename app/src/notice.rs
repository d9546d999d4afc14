use std::sync::{Arc, Mutex};

/// Transient operator notices, the desk UI's toast rail. Failures never
/// abort the process; they land here and the operator retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Default)]
pub struct NoticeSink {
    inner: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeSink {
    pub fn push(&self, level: NoticeLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            NoticeLevel::Info => tracing::info!("{message}"),
            NoticeLevel::Warning => tracing::warn!("{message}"),
            NoticeLevel::Error => tracing::error!("{message}"),
        }
        if let Ok(mut notices) = self.inner.lock() {
            notices.push(Notice { level, message });
        }
    }

    /// Takes the pending notices, leaving the rail empty.
    pub fn drain(&self) -> Vec<Notice> {
        self.inner
            .lock()
            .map(|mut notices| notices.split_off(0))
            .unwrap_or_default()
    }
}
