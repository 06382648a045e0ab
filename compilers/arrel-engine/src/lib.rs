pub mod dictionary;
pub mod reconstruct;

use std::collections::BTreeSet;

use arrel_endings::EndingTable;
use arrel_morph::{add_diacritics, normalize};
use arrel_protocol::VerbLookup;
use tracing::debug;

pub use dictionary::{DictionaryError, VerbDictionary};
pub use reconstruct::base_infinitives_of;

/// Verb analysis of one word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Infinitives {
    /// Dictionary spellings of the candidates found in the dictionary.
    pub names: Vec<String>,
    /// Every candidate with its diacritics restored, listed or not.
    pub variants: Vec<String>,
}

/// Everything the engine proposes for one word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lemmas {
    pub verbs: Vec<String>,
    pub verb_variants: Vec<String>,
    pub bases: BTreeSet<String>,
}

/// Strips a trailing enclitic pronoun: `menjar-lo` -> `menjar`,
/// `porta'l` -> `porta`.
pub fn strip_enclitic(word: &str) -> &str {
    let word = word.rsplit_once('-').map_or(word, |(head, _)| head);
    word.rsplit_once(['\'', '’']).map_or(word, |(head, _)| head)
}

/// Lemmatiser façade over a compiled conjugation table and a dictionary.
///
/// Cheap to share: it only reads the table and the dictionary, so a
/// `Grammar` is `Sync` whenever the dictionary is.
pub struct Grammar<'t, D> {
    endings: &'t EndingTable,
    dict: D,
}

impl<D: VerbLookup> Grammar<'static, D> {
    /// Uses the built-in Catalan conjugation table.
    pub fn new(dict: D) -> Self {
        Self { endings: EndingTable::catalan(), dict }
    }
}

impl<'t, D: VerbLookup> Grammar<'t, D> {
    pub fn with_endings(endings: &'t EndingTable, dict: D) -> Self {
        Self { endings, dict }
    }

    pub fn dictionary(&self) -> &D {
        &self.dict
    }

    /// Raw infinitive candidates, before dictionary and diacritics.
    pub fn base_infinitives_of(&self, word: &str) -> BTreeSet<String> {
        let word = normalize(strip_enclitic(word));
        base_infinitives_of(self.endings, &self.dict, &word)
    }

    /// Verb lemmas of `word`: the dictionary-validated names, and the
    /// diacritic-restored candidates for callers without a dictionary hit.
    pub fn infinitives_of(&self, word: &str) -> Infinitives {
        let candidates = self.base_infinitives_of(word);

        let mut names: Vec<String> = Vec::new();
        for entry in candidates.iter().filter_map(|c| self.dict.lookup(c)) {
            if !names.contains(&entry.name) {
                names.push(entry.name.clone());
            }
        }
        let variants = candidates.iter().flat_map(|c| add_diacritics(c)).collect();

        debug!(word, ?names, ?variants, "infinitives");
        Infinitives { names, variants }
    }

    /// Noun and adjective base candidates, unvalidated.
    pub fn base_of(&self, word: &str) -> BTreeSet<String> {
        arrel_morph::base_of(&normalize(word))
    }

    /// Verb and noun/adjective analyses together.
    pub fn lemmas_of(&self, word: &str) -> Lemmas {
        let Infinitives { names, variants } = self.infinitives_of(word);
        Lemmas { verbs: names, verb_variants: variants, bases: self.base_of(word) }
    }
}
