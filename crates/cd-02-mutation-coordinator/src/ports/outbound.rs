//! Outbound (Driven) ports for the mutation coordinator.

/// Browser-style session history.
///
/// `push` adds an entry; `replace` overwrites the current one.
pub trait NavigationHistory: Send + Sync {
    fn push(&self, href: &str);
    fn replace(&self, href: &str);
}

#[cfg(test)]
pub use recording::RecordingHistory;
