use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Conjugation behaviour of a dictionary verb.
///
/// Third-conjugation verbs come in two flavours: *pure* ones (`dormir`,
/// `dormo`) and *inchoative* ones that insert `-eix-` in the present
/// (`servir`, `serveixo`). Only the reconstruction gates look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum VerbType {
    Pure = 0,
    Inchoative = 1,
    Unknown = 2,
}

impl Default for VerbType {
    fn default() -> Self {
        VerbType::Unknown
    }
}

bitflags! {
    /// One inflectional slot of a conjugation table, e.g.
    /// `INDICATIVE | PRESENT`. Non-finite slots use a single bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct FormTag: u16 {
        // Non-finite (Bits 0-2)
        const INFINITIVE = 1;
        const GERUND = 2;
        const PARTICIPLE = 4;

        // Mood (Bits 3-6)
        const INDICATIVE = 8;
        const SUBJUNCTIVE = 16;
        const CONDITIONAL = 32;
        const IMPERATIVE = 64;

        // Tense (Bits 7-10)
        const PRESENT = 128;
        const IMPERFECT = 256;
        const PAST = 512;
        const FUTURE = 1024;
    }
}

impl FormTag {
    pub const IND_PRESENT: FormTag = FormTag::INDICATIVE.union(FormTag::PRESENT);
    pub const IND_IMPERFECT: FormTag = FormTag::INDICATIVE.union(FormTag::IMPERFECT);
    pub const IND_PAST: FormTag = FormTag::INDICATIVE.union(FormTag::PAST);
    pub const IND_FUTURE: FormTag = FormTag::INDICATIVE.union(FormTag::FUTURE);
    pub const SUBJ_PRESENT: FormTag = FormTag::SUBJUNCTIVE.union(FormTag::PRESENT);
    pub const SUBJ_IMPERFECT: FormTag = FormTag::SUBJUNCTIVE.union(FormTag::IMPERFECT);
}
