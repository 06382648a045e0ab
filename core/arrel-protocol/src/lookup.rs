use crate::model::VerbEntry;
use crate::morphology::VerbType;

/// Read-only access to the verb dictionary.
///
/// Keys are folded infinitives (`coneixer`, not `conèixer`); the entry
/// carries the real spelling. Implementations must be cheap to call
/// repeatedly, since reconstruction queries once per surviving candidate.
pub trait VerbLookup {
    fn lookup(&self, key: &str) -> Option<&VerbEntry>;

    /// Verb type of `key`, `Unknown` when the key is not listed.
    fn verb_type(&self, key: &str) -> VerbType {
        self.lookup(key).map(|entry| entry.verb_type).unwrap_or_default()
    }
}

impl<T: VerbLookup + ?Sized> VerbLookup for &T {
    fn lookup(&self, key: &str) -> Option<&VerbEntry> {
        (**self).lookup(key)
    }
}

#[cfg(feature = "std")]
impl<S: std::hash::BuildHasher> VerbLookup for std::collections::HashMap<alloc::string::String, VerbEntry, S> {
    fn lookup(&self, key: &str) -> Option<&VerbEntry> {
        self.get(key)
    }
}

impl VerbLookup for alloc::collections::BTreeMap<alloc::string::String, VerbEntry> {
    fn lookup(&self, key: &str) -> Option<&VerbEntry> {
        self.get(key)
    }
}
