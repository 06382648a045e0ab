use std::collections::HashMap;

use arrel_morph::normalize;
use arrel_protocol::{VerbEntry, VerbList, VerbLookup};
use rkyv::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("invalid JSON verb list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid verb archive: {0}")]
    Archive(String),
}

/// In-memory verb dictionary keyed by folded infinitive.
#[derive(Debug, Clone, Default)]
pub struct VerbDictionary {
    verbs: HashMap<String, VerbEntry>,
}

impl VerbDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_list(list: VerbList) -> Self {
        let mut dict = Self::new();
        for entry in list.verbs {
            dict.insert(entry);
        }
        debug!(version = list.version, verbs = dict.len(), "loaded verb dictionary");
        dict
    }

    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let list: VerbList = serde_json::from_str(json)?;
        Ok(Self::from_list(list))
    }

    /// Loads a dictionary produced by `arrel-cli compile`. The archive is
    /// validated before use.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, DictionaryError> {
        // rkyv needs the archive aligned; a plain file read gives no guarantee
        let mut aligned = rkyv::AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let archived = rkyv::check_archived_root::<VerbList>(&aligned)
            .map_err(|e| DictionaryError::Archive(format!("{:?}", e)))?;
        let list: VerbList = archived
            .deserialize(&mut rkyv::Infallible)
            .map_err(|e| DictionaryError::Archive(format!("{:?}", e)))?;
        Ok(Self::from_list(list))
    }

    /// Adds (or replaces) an entry under its folded name.
    pub fn insert(&mut self, entry: VerbEntry) {
        self.verbs.insert(normalize(&entry.name), entry);
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

impl FromIterator<VerbEntry> for VerbDictionary {
    fn from_iter<I: IntoIterator<Item = VerbEntry>>(iter: I) -> Self {
        let mut dict = Self::new();
        for entry in iter {
            dict.insert(entry);
        }
        dict
    }
}

impl VerbLookup for VerbDictionary {
    fn lookup(&self, key: &str) -> Option<&VerbEntry> {
        self.verbs.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrel_protocol::VerbType;
    use rkyv::to_bytes;

    fn sample() -> VerbList {
        VerbList {
            version: 1,
            verbs: vec![
                VerbEntry::new("cantar", VerbType::Pure),
                VerbEntry::new("conèixer", VerbType::Unknown),
                VerbEntry::new("servir", VerbType::Inchoative),
            ],
        }
    }

    #[test]
    fn test_keys_are_folded() {
        let dict = VerbDictionary::from_list(sample());
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.lookup("coneixer").map(|e| e.name.as_str()), Some("conèixer"));
        assert!(dict.lookup("conèixer").is_none());
        assert_eq!(dict.verb_type("servir"), VerbType::Inchoative);
        assert_eq!(dict.verb_type("dormir"), VerbType::Unknown);
    }

    #[test]
    fn test_from_json() {
        let dict = VerbDictionary::from_json(
            r#"{"version":2,"verbs":[{"name":"dormir","verb_type":"pure"},{"name":"Témer"}]}"#,
        )
        .unwrap();
        assert_eq!(dict.verb_type("dormir"), VerbType::Pure);
        assert_eq!(dict.lookup("temer").map(|e| e.name.as_str()), Some("Témer"));

        assert!(matches!(VerbDictionary::from_json("{"), Err(DictionaryError::Json(_))));
    }

    #[test]
    fn test_from_archive() {
        let bytes = to_bytes::<_, 1024>(&sample()).expect("Failed to serialize VerbList");
        let dict = VerbDictionary::from_archive(&bytes).unwrap();
        assert_eq!(dict.verb_type("cantar"), VerbType::Pure);

        assert!(matches!(
            VerbDictionary::from_archive(&[0xff, 0x00, 0x13]),
            Err(DictionaryError::Archive(_))
        ));
    }
}
