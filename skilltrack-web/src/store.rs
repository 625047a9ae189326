//! Address-bar fragment store for the browser host.

use crate::dom;
use skilltrack_core::FragmentStore;

#[derive(Debug, thiserror::Error)]
#[error("location hash update failed: {0}")]
pub struct HashStoreError(pub String);

/// Persists the encoded assessment in `window.location.hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationHashStore;

impl FragmentStore for LocationHashStore {
    type Error = HashStoreError;

    fn read(&self) -> Option<String> {
        match dom::location_hash() {
            Ok(hash) => Some(hash).filter(|h| !h.trim_start_matches('#').is_empty()),
            Err(err) => {
                log::warn!("cannot read location hash: {}", dom::js_error_message(&err));
                None
            }
        }
    }

    fn publish(&mut self, fragment: &str) -> Result<(), Self::Error> {
        dom::replace_hash(fragment).map_err(|err| HashStoreError(dom::js_error_message(&err)))
    }
}
