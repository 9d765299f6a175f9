//! Consent acknowledgement as an injected capability.
//!
//! The disclaimer must be acknowledged once before any submission. The
//! storage behind that flag is a collaborator concern, so the core only
//! declares the capability; callers inject a file-backed store (CLI) or
//! the in-memory one (tests).

use std::io;

/// One-time consent acknowledgement flag.
pub trait ConsentStore {
    fn get(&self) -> bool;
    fn set(&mut self, accepted: bool) -> io::Result<()>;
}

/// Volatile store for tests and non-persistent callers.
#[derive(Debug, Default)]
pub struct MemoryConsentStore {
    accepted: bool,
}

impl ConsentStore for MemoryConsentStore {
    fn get(&self) -> bool {
        self.accepted
    }

    fn set(&mut self, accepted: bool) -> io::Result<()> {
        self.accepted = accepted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_unaccepted() {
        let store = MemoryConsentStore::default();
        assert!(!store.get());
    }

    #[test]
    fn memory_store_remembers_acceptance() {
        let mut store = MemoryConsentStore::default();
        store.set(true).unwrap();
        assert!(store.get());
        store.set(false).unwrap();
        assert!(!store.get());
    }
}
