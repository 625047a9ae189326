//! Durable side-channels for the encoded fragment.
//!
//! A browser host backs this with the address bar; other hosts use a file
//! or an in-memory slot.

use std::convert::Infallible;

/// Somewhere a fragment can be read from at startup and published to after
/// every change.
pub trait FragmentStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Current persisted fragment, `None` when nothing is stored.
    fn read(&self) -> Option<String>;

    /// Replace the persisted fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying channel rejects the write.
    fn publish(&mut self, fragment: &str) -> Result<(), Self::Error>;
}

/// In-memory store that keeps every published fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFragmentStore {
    initial: Option<String>,
    published: Vec<String>,
}

impl MemoryFragmentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a fragment to be read at load time.
    #[must_use]
    pub fn with_fragment(fragment: impl Into<String>) -> Self {
        Self {
            initial: Some(fragment.into()),
            published: Vec::new(),
        }
    }

    /// Every fragment published so far, oldest first.
    #[must_use]
    pub fn published(&self) -> &[String] {
        &self.published
    }

    #[must_use]
    pub fn last_published(&self) -> Option<&str> {
        self.published.last().map(String::as_str)
    }
}

impl FragmentStore for MemoryFragmentStore {
    type Error = Infallible;

    fn read(&self) -> Option<String> {
        self.published.last().cloned().or_else(|| self.initial.clone())
    }

    fn publish(&mut self, fragment: &str) -> Result<(), Self::Error> {
        self.published.push(fragment.to_string());
        Ok(())
    }
}
