// Raw conjugation table -> flat suffix lookup.
//
// A raw group only lists the forms where it differs from the class's
// default group. Compilation fills the gaps position by position from the
// default (prefixed with whatever the group's stem adds), expands aliases,
// and sorts each group's suffixes longest first so matching is a scan for
// the first hit.

use std::collections::BTreeSet;

use arrel_morph::normalize;
use arrel_protocol::{BaseConstraint, FormTable, FormTag, RawEnding, RawEndingTable};
use thiserror::Error;
use tracing::debug;

use crate::rule::{parse_rule, ReconstructionRule};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("ending class with an empty infinitive ending")]
    EmptyEnding,
    #[error("group name '{name}' of ending class -{ending} is not a reconstruction rule")]
    MalformedRule { ending: String, name: String },
    #[error("group '{group}' of ending class -{ending} declares {tag:?}, which its default group lacks")]
    UnalignedTag { ending: String, group: String, tag: FormTag },
    #[error("group '{group}' is declared twice in ending class -{ending}")]
    DuplicateGroup { ending: String, group: String },
}

/// One compiled group: its rule and every suffix it can strip.
#[derive(Debug, Clone)]
pub struct FlatGroup {
    pub name: String,
    pub rule: ReconstructionRule,
    /// Unique, longest first, ties in lexical order.
    pub suffixes: Vec<String>,
}

impl FlatGroup {
    /// Longest suffix of this group that `word` ends with. Two suffixes of
    /// equal length ending the same word are the same string, so the result
    /// is unambiguous.
    pub fn longest_match(&self, word: &str) -> Option<&str> {
        self.suffixes.iter().map(String::as_str).find(|suffix| word.ends_with(suffix))
    }
}

#[derive(Debug, Clone)]
pub struct FlatEnding {
    pub infinitive: String,
    pub base: BaseConstraint,
    pub groups: Vec<FlatGroup>,
}

impl FlatEnding {
    pub fn group(&self, name: &str) -> Option<&FlatGroup> {
        self.groups.iter().find(|g| g.name == name)
    }
}

/// Compiled conjugation table. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct EndingTable {
    endings: Vec<FlatEnding>,
    bare_endings: BTreeSet<String>,
}

impl EndingTable {
    pub fn iter(&self) -> impl Iterator<Item = &FlatEnding> {
        self.endings.iter()
    }

    pub fn ending(&self, infinitive: &str) -> Option<&FlatEnding> {
        self.endings.iter().find(|e| e.infinitive == infinitive)
    }

    /// Whether `s` is nothing but an infinitive ending: a class ending or
    /// one of the table's listed bare endings.
    pub fn is_bare_ending(&self, s: &str) -> bool {
        self.bare_endings.contains(s)
    }
}

pub fn compile(raw: &RawEndingTable) -> Result<EndingTable, CompileError> {
    let endings = raw.endings.iter().map(compile_ending).collect::<Result<Vec<_>, _>>()?;
    let bare_endings = raw
        .bare_endings
        .iter()
        .map(|e| normalize(e))
        .chain(endings.iter().map(|e| e.infinitive.clone()))
        .collect();
    debug!(
        classes = endings.len(),
        groups = endings.iter().map(|e| e.groups.len()).sum::<usize>(),
        "compiled ending table"
    );
    Ok(EndingTable { endings, bare_endings })
}

fn compile_ending(raw: &RawEnding) -> Result<FlatEnding, CompileError> {
    let infinitive = normalize(&raw.infinitive);
    if infinitive.is_empty() {
        return Err(CompileError::EmptyEnding);
    }

    let mut groups: Vec<FlatGroup> = Vec::new();
    for (names, forms) in &raw.groups {
        if let Some(tag) = forms.keys().find(|tag| !raw.default_group.contains_key(*tag)) {
            return Err(CompileError::UnalignedTag {
                ending: infinitive,
                group: names.clone(),
                tag: *tag,
            });
        }

        for name in names.split(',').map(str::trim) {
            if groups.iter().any(|g| g.name == name) {
                return Err(CompileError::DuplicateGroup { ending: infinitive, group: name.to_string() });
            }
            let rule = parse_rule(name).ok_or_else(|| CompileError::MalformedRule {
                ending: infinitive.clone(),
                name: name.to_string(),
            })?;
            let suffixes = merge_with_default(forms, &raw.default_group, &rule.add_for_default());
            groups.push(FlatGroup { name: name.to_string(), rule, suffixes });
        }
    }

    Ok(FlatEnding { infinitive, base: raw.base.clone(), groups })
}

/// Index-aligned union of a group's forms and the default forms, slot by
/// slot. Positions the group leaves out fall back to `prefix + default`.
fn merge_with_default(forms: &FormTable, defaults: &FormTable, prefix: &str) -> Vec<String> {
    let mut merged = BTreeSet::new();
    for (tag, default_forms) in defaults {
        let own = forms.get(tag).map(Vec::as_slice).unwrap_or_default();
        for index in 0..own.len().max(default_forms.len()) {
            let suffix = match (own.get(index), default_forms.get(index)) {
                (Some(form), _) => normalize(form),
                (None, Some(default)) => normalize(&format!("{}{}", prefix, default)),
                (None, None) => continue,
            };
            merged.insert(suffix);
        }
    }

    let mut suffixes: Vec<String> = merged.into_iter().collect();
    suffixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    suffixes
}
