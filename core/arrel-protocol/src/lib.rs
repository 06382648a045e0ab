#![no_std] // Plain data: usable without std, which only adds the HashMap lookup

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod lookup;
pub mod morphology;

// Re-export core types for convenience
pub use lookup::VerbLookup;
pub use morphology::*;

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_enum_serialization() {
        let original = VerbType::Inchoative;

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize VerbType");

        // Deserialize (Simulate loading from disk)
        let deserialized: VerbType = from_bytes(&bytes).expect("Failed to deserialize VerbType");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_verb_list_serialization() {
        let original = VerbList {
            version: 3,
            verbs: vec![
                VerbEntry::new("cantar", VerbType::Pure),
                VerbEntry::new("conèixer", VerbType::Unknown),
            ],
        };

        let bytes = to_bytes::<_, 1024>(&original).expect("Failed to serialize VerbList");
        let deserialized: VerbList = from_bytes(&bytes).expect("Failed to deserialize VerbList");

        assert_eq!(deserialized.version, 3);
        assert_eq!(deserialized.verbs, original.verbs);
        assert_eq!(deserialized.verbs[1].name, "conèixer".to_string());
    }

    #[test]
    fn test_verb_type_layout() {
        assert_eq!(core::mem::size_of::<VerbType>(), 1);
    }
}
