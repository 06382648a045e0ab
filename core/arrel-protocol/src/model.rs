use rkyv::{Archive, Deserialize, Serialize};
use crate::lookup::VerbLookup;
use crate::morphology::{FormTag, VerbType};
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A dictionary verb: its real spelling and conjugation type.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct VerbEntry {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub verb_type: VerbType,
}

impl VerbEntry {
    pub fn new(name: impl Into<String>, verb_type: VerbType) -> Self {
        Self { name: name.into(), verb_type }
    }
}

/// Serialisable verb dictionary payload (JSON source, rkyv archive).
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct VerbList {
    pub version: u32,
    pub verbs: Vec<VerbEntry>,
}

/// Forms per inflectional slot, in positional order (1sg..3pl for
/// personal slots).
pub type FormTable = BTreeMap<FormTag, Vec<String>>;

/// Which stems an ending class accepts, checked after a group has
/// produced its candidate base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BaseConstraint {
    pub min_len: usize,
    pub forbidden_endings: Vec<String>,
    /// Reject the base when `base + ending` is listed with this type.
    pub rejected_type: Option<VerbType>,
}

impl BaseConstraint {
    pub fn min_len(min_len: usize) -> Self {
        Self { min_len, ..Self::default() }
    }

    pub fn forbidding(mut self, endings: &[&str]) -> Self {
        self.forbidden_endings.extend(endings.iter().map(|e| String::from(*e)));
        self
    }

    pub fn rejecting(mut self, verb_type: VerbType) -> Self {
        self.rejected_type = Some(verb_type);
        self
    }

    pub fn admits<D: VerbLookup + ?Sized>(&self, base: &str, ending: &str, dict: &D) -> bool {
        if base.chars().count() < self.min_len {
            return false;
        }
        if self.forbidden_endings.iter().any(|tail| base.ends_with(tail.as_str())) {
            return false;
        }
        match self.rejected_type {
            Some(rejected) => dict.verb_type(&format!("{}{}", base, ending)) != rejected,
            None => true,
        }
    }
}

/// One infinitive-ending class as written in the conjugation table.
///
/// Group names double as reconstruction rules: `""` strips, `"incoatiu"`
/// requires an inchoative (or unlisted) verb, `"X/Y"` maps the whole
/// stripped stem `X` to `Y`, `"-X/-Y"` maps only its tail. Several names can
/// share one group by joining them with commas.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct RawEnding {
    pub infinitive: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base: BaseConstraint,
    pub default_group: FormTable,
    #[cfg_attr(feature = "serde", serde(default))]
    pub groups: Vec<(String, FormTable)>,
}

/// The complete declarative conjugation table, in matching order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct RawEndingTable {
    pub endings: Vec<RawEnding>,
    /// Bare infinitive endings (`car`, `ndre`) that are never a verb on
    /// their own. Class endings are always included.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bare_endings: Vec<String>,
}
