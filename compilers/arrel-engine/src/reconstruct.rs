// Suffix stripping against the compiled conjugation table.
//
// Every group of every ending class gets one shot at the word: its longest
// matching suffix is stripped, the group's rule turns the stem into a base,
// the class constraint vets the base, and the infinitive ending goes back
// on with whatever respelling the vowel-class change requires.

use std::collections::BTreeSet;

use arrel_endings::{EndingTable, ReconstructionRule};
use arrel_morph::replace_ending;
use arrel_protocol::{VerbLookup, VerbType};
use tracing::{debug, trace};

/// Applies a group rule to the stem left after stripping. `ending` is the
/// infinitive ending of the class, used to key the dictionary type gates.
pub fn resolve<D: VerbLookup + ?Sized>(
    rule: &ReconstructionRule,
    stem: &str,
    ending: &str,
    dict: &D,
) -> Option<String> {
    match rule {
        ReconstructionRule::PlainStrip => {
            let verb_type = dict.verb_type(&format!("{}{}", stem, ending));
            (verb_type != VerbType::Inchoative).then(|| stem.to_string())
        }
        ReconstructionRule::InchoativeGated => {
            let verb_type = dict.verb_type(&format!("{}{}", stem, ending));
            (verb_type != VerbType::Pure).then(|| stem.to_string())
        }
        ReconstructionRule::Rewrite { from, to, tail_only: false } => (stem == from).then(|| to.clone()),
        ReconstructionRule::Rewrite { from, to, tail_only: true } => stem
            .strip_suffix(from.as_str())
            .map(|head| format!("{}{}", head, to)),
    }
}

/// Candidate infinitives of `word` (folded, enclitics already removed).
///
/// Candidates are validated against the type gates and class constraints,
/// not against dictionary membership. Classes and groups are tried in
/// table order; the result is a set, so order of discovery does not leak.
pub fn base_infinitives_of<D: VerbLookup + ?Sized>(
    table: &EndingTable,
    dict: &D,
    word: &str,
) -> BTreeSet<String> {
    let mut infinitives = BTreeSet::new();

    for ending in table.iter() {
        for group in &ending.groups {
            let Some(suffix) = group.longest_match(word) else {
                continue;
            };
            let stem = &word[..word.len() - suffix.len()];

            let Some(base) = resolve(&group.rule, stem, &ending.infinitive, dict) else {
                trace!(word, ending = %ending.infinitive, group = %group.name, stem, "rule rejected stem");
                continue;
            };
            if !ending.base.admits(&base, &ending.infinitive, dict) {
                trace!(word, ending = %ending.infinitive, group = %group.name, base, "class rejected base");
                continue;
            }

            infinitives.extend(
                replace_ending(&base, suffix, &ending.infinitive)
                    .into_iter()
                    .filter(|inf| !table.is_bare_ending(inf)),
            );
        }
    }

    debug!(word, candidates = ?infinitives, "base infinitives");
    infinitives
}
