pub mod catalan;
pub mod compile;
pub mod rule;

use std::sync::LazyLock;

pub use compile::{compile, CompileError, EndingTable, FlatEnding, FlatGroup};
pub use rule::{parse_rule, ReconstructionRule};

static CATALAN: LazyLock<EndingTable> = LazyLock::new(|| {
    // A broken built-in table is a programming error: abort initialisation.
    compile(&catalan::raw_table()).expect("built-in Catalan conjugation table must compile")
});

impl EndingTable {
    /// The built-in Catalan table, compiled on first use and shared by the
    /// whole process.
    pub fn catalan() -> &'static EndingTable {
        &CATALAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalan_table_compiles() {
        let table = EndingTable::catalan();
        let classes: Vec<&str> = table.iter().map(|e| e.infinitive.as_str()).collect();
        assert_eq!(classes, vec!["ar", "er", "re", "ndre", "ure", "iure", "ir", "rir"]);

        for ending in table.iter() {
            assert!(!ending.groups.is_empty());
            for group in &ending.groups {
                assert!(!group.suffixes.is_empty(), "group '{}' is empty", group.name);
            }
        }
    }

    #[test]
    fn test_catalan_aliases_expanded() {
        let re = EndingTable::catalan().ending("re").expect("re class");
        let moure = re.group("-o/-ou").expect("aliased group");
        let beure = re.group("-e/-eu").expect("aliased group");
        assert_eq!(moure.suffixes, beure.suffixes);
        assert_eq!(moure.longest_match("moc"), Some("c"));
        // future forms are built on the infinitive stem
        assert_eq!(moure.longest_match("mouran"), Some("uran"));
    }

    #[test]
    fn test_catalan_bare_endings() {
        let table = EndingTable::catalan();
        for bare in ["ar", "car", "ndre", "ure", "iure", "rir", "gir"] {
            assert!(table.is_bare_ending(bare), "{}", bare);
        }
        assert!(!table.is_bare_ending("tancar"));
    }
}
