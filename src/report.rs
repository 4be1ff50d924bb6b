//! Deprecation warnings.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Receives advisory warnings raised while resolving route strings.
///
/// Implementations are expected to surface each distinct message at most once.
pub trait WarningReporter {
    fn warn_once(&self, message: &str);
}

impl<R: WarningReporter + ?Sized> WarningReporter for &R {
    fn warn_once(&self, message: &str) {
        (**self).warn_once(message)
    }
}

/// Logs each distinct warning once through `tracing`.
#[derive(Debug, Default)]
pub struct TracingReporter {
    seen: Mutex<HashSet<Box<str>>>,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WarningReporter for TracingReporter {
    fn warn_once(&self, message: &str) {
        let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        if seen.contains(message) {
            return;
        }
        seen.insert(message.into());
        drop(seen);

        tracing::warn!("{}", message);
    }
}

/// Discards every warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl WarningReporter for NoopReporter {
    fn warn_once(&self, _: &str) {}
}
