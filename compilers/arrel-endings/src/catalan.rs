//! Built-in Catalan conjugation table.
//!
//! Forms are written with their accents for readability; compilation folds
//! them. Personal slots list 1sg, 2sg, 3sg, 1pl, 2pl, 3pl; the imperative
//! lists 2sg, 3sg, 1pl, 2pl, 3pl.

use arrel_protocol::{BaseConstraint, FormTable, FormTag, RawEnding, RawEndingTable};

fn table(entries: &[(FormTag, &[&str])]) -> FormTable {
    entries
        .iter()
        .map(|(tag, forms)| (*tag, forms.iter().map(|f| f.to_string()).collect()))
        .collect()
}

fn group(name: &str, entries: &[(FormTag, &[&str])]) -> (String, FormTable) {
    (name.to_string(), table(entries))
}

// cantar: canto, cantes, canta ...
fn first_conjugation() -> RawEnding {
    RawEnding {
        infinitive: "ar".into(),
        base: BaseConstraint::min_len(1),
        default_group: table(&[
            (FormTag::INFINITIVE, &["ar"]),
            (FormTag::GERUND, &["ant"]),
            (FormTag::PARTICIPLE, &["at", "ada", "ats", "ades"]),
            (FormTag::IND_PRESENT, &["o", "es", "a", "em", "eu", "en"]),
            (FormTag::IND_IMPERFECT, &["ava", "aves", "ava", "àvem", "àveu", "aven"]),
            (FormTag::IND_PAST, &["í", "ares", "à", "àrem", "àreu", "aren"]),
            (FormTag::IND_FUTURE, &["aré", "aràs", "arà", "arem", "areu", "aran"]),
            (FormTag::CONDITIONAL, &["aria", "aries", "aria", "aríem", "aríeu", "arien"]),
            (FormTag::SUBJ_PRESENT, &["i", "is", "i", "em", "eu", "in"]),
            (FormTag::SUBJ_IMPERFECT, &["és", "essis", "és", "éssim", "éssiu", "essin"]),
            (FormTag::IMPERATIVE, &["a", "i", "em", "eu", "in"]),
        ]),
        groups: vec![
            group("", &[]),
            // anar: vaig, vas, va ... (anem, aneu come from the plain group)
            group(
                "v/an",
                &[
                    (FormTag::IND_PRESENT, &["aig", "as", "a", "anem", "aneu", "an"]),
                    (FormTag::SUBJ_PRESENT, &["agi", "agis", "agi", "anem", "aneu", "agin"]),
                    (FormTag::IMPERATIVE, &["és", "agi", "anem", "aneu", "agin"]),
                ],
            ),
        ],
    }
}

// témer: temo, tems, tem ...
fn second_conjugation() -> RawEnding {
    RawEnding {
        infinitive: "er".into(),
        base: BaseConstraint::min_len(1).forbidding(&["a", "e", "i", "o", "u"]),
        default_group: table(&[
            (FormTag::INFINITIVE, &["er"]),
            (FormTag::GERUND, &["ent"]),
            (FormTag::PARTICIPLE, &["ut", "uda", "uts", "udes"]),
            (FormTag::IND_PRESENT, &["o", "s", "", "em", "eu", "en"]),
            (FormTag::IND_IMPERFECT, &["ia", "ies", "ia", "íem", "íeu", "ien"]),
            (FormTag::IND_PAST, &["í", "eres", "é", "érem", "éreu", "eren"]),
            (FormTag::IND_FUTURE, &["eré", "eràs", "erà", "erem", "ereu", "eran"]),
            (FormTag::CONDITIONAL, &["eria", "eries", "eria", "eríem", "eríeu", "erien"]),
            (FormTag::SUBJ_PRESENT, &["i", "is", "i", "em", "eu", "in"]),
            (FormTag::SUBJ_IMPERFECT, &["és", "essis", "és", "éssim", "éssiu", "essin"]),
            (FormTag::IMPERATIVE, &["", "i", "em", "eu", "in"]),
        ]),
        groups: vec![
            group("", &[]),
            // conèixer, créixer, aparèixer: conec, coneixes ... conegut
            group(
                "-e/-eix",
                &[
                    (FormTag::PARTICIPLE, &["gut", "guda", "guts", "gudes"]),
                    (FormTag::IND_PRESENT, &["c", "ixes", "ix", "ixem", "ixeu", "ixen"]),
                    (FormTag::IND_PAST, &["guí", "gueres", "gué", "guérem", "guéreu", "gueren"]),
                    (FormTag::SUBJ_PRESENT, &["gui", "guis", "gui", "guem", "gueu", "guin"]),
                    (FormTag::SUBJ_IMPERFECT, &["gués", "guessis", "gués", "guéssim", "guéssiu", "guessin"]),
                    (FormTag::IMPERATIVE, &["ix", "gui", "guem", "ixeu", "guin"]),
                ],
            ),
        ],
    }
}

// batre: bato, bats, bat ...
fn third_conjugation() -> RawEnding {
    RawEnding {
        infinitive: "re".into(),
        base: BaseConstraint::min_len(1),
        default_group: table(&[
            (FormTag::INFINITIVE, &["re"]),
            (FormTag::GERUND, &["ent"]),
            (FormTag::PARTICIPLE, &["ut", "uda", "uts", "udes"]),
            (FormTag::IND_PRESENT, &["o", "s", "", "em", "eu", "en"]),
            (FormTag::IND_IMPERFECT, &["ia", "ies", "ia", "íem", "íeu", "ien"]),
            (FormTag::IND_PAST, &["í", "eres", "é", "érem", "éreu", "eren"]),
            (FormTag::IND_FUTURE, &["ré", "ràs", "rà", "rem", "reu", "ran"]),
            (FormTag::CONDITIONAL, &["ria", "ries", "ria", "ríem", "ríeu", "rien"]),
            (FormTag::SUBJ_PRESENT, &["i", "is", "i", "em", "eu", "in"]),
            (FormTag::SUBJ_IMPERFECT, &["és", "essis", "és", "éssim", "éssiu", "essin"]),
            (FormTag::IMPERATIVE, &["", "i", "em", "eu", "in"]),
        ]),
        groups: vec![
            group("", &[]),
            // beure, deure, moure, ploure: bec, beus, beu, bevem ... begut
            group(
                "-e/-eu,-o/-ou",
                &[
                    (FormTag::GERUND, &["vent"]),
                    (FormTag::PARTICIPLE, &["gut", "guda", "guts", "gudes"]),
                    (FormTag::IND_PRESENT, &["c", "us", "u", "vem", "veu", "uen"]),
                    (FormTag::IND_IMPERFECT, &["via", "vies", "via", "víem", "víeu", "vien"]),
                    (FormTag::IND_PAST, &["guí", "gueres", "gué", "guérem", "guéreu", "gueren"]),
                    (FormTag::SUBJ_PRESENT, &["gui", "guis", "gui", "guem", "gueu", "guin"]),
                    (FormTag::SUBJ_IMPERFECT, &["gués", "guessis", "gués", "guéssim", "guéssiu", "guessin"]),
                    (FormTag::IMPERATIVE, &["u", "gui", "guem", "veu", "guin"]),
                ],
            ),
        ],
    }
}

// dormir: dormo, dorms, dorm ...; servir: serveixo, serveixes, serveix ...
fn fourth_conjugation() -> RawEnding {
    RawEnding {
        infinitive: "ir".into(),
        base: BaseConstraint::min_len(1),
        default_group: table(&[
            (FormTag::INFINITIVE, &["ir"]),
            (FormTag::GERUND, &["int"]),
            (FormTag::PARTICIPLE, &["it", "ida", "its", "ides"]),
            (FormTag::IND_PRESENT, &["o", "s", "", "im", "iu", "en"]),
            (FormTag::IND_IMPERFECT, &["ia", "ies", "ia", "íem", "íeu", "ien"]),
            (FormTag::IND_PAST, &["í", "ires", "í", "írem", "íreu", "iren"]),
            (FormTag::IND_FUTURE, &["iré", "iràs", "irà", "irem", "ireu", "iran"]),
            (FormTag::CONDITIONAL, &["iria", "iries", "iria", "iríem", "iríeu", "irien"]),
            (FormTag::SUBJ_PRESENT, &["i", "is", "i", "im", "iu", "in"]),
            (FormTag::SUBJ_IMPERFECT, &["ís", "issis", "ís", "íssim", "íssiu", "issin"]),
            (FormTag::IMPERATIVE, &["", "i", "im", "iu", "in"]),
        ]),
        groups: vec![
            group("", &[]),
            group(
                "incoatiu",
                &[
                    (FormTag::IND_PRESENT, &["eixo", "eixes", "eix", "im", "iu", "eixen"]),
                    (FormTag::SUBJ_PRESENT, &["eixi", "eixis", "eixi", "im", "iu", "eixin"]),
                    (FormTag::IMPERATIVE, &["eix", "eixi", "im", "iu", "eixin"]),
                ],
            ),
        ],
    }
}

// entendre, aprendre, prendre: entenc, entens, entén ... entès
fn ndre_conjugation() -> RawEnding {
    RawEnding {
        infinitive: "ndre".into(),
        base: BaseConstraint::min_len(1),
        default_group: table(&[
            (FormTag::INFINITIVE, &["ndre"]),
            (FormTag::GERUND, &["nent"]),
            (FormTag::PARTICIPLE, &["s", "sa", "sos", "ses"]),
            (FormTag::IND_PRESENT, &["nc", "ns", "n", "nem", "neu", "nen"]),
            (FormTag::IND_IMPERFECT, &["nia", "nies", "nia", "níem", "níeu", "nien"]),
            (FormTag::IND_PAST, &["nguí", "ngueres", "ngué", "nguérem", "nguéreu", "ngueren"]),
            (FormTag::IND_FUTURE, &["ndré", "ndràs", "ndrà", "ndrem", "ndreu", "ndran"]),
            (FormTag::CONDITIONAL, &["ndria", "ndries", "ndria", "ndríem", "ndríeu", "ndrien"]),
            (FormTag::SUBJ_PRESENT, &["ngui", "nguis", "ngui", "nguem", "ngueu", "nguin"]),
            (FormTag::SUBJ_IMPERFECT, &["ngués", "nguessis", "ngués", "nguéssim", "nguéssiu", "nguessin"]),
            (FormTag::IMPERATIVE, &["n", "ngui", "nguem", "neu", "nguin"]),
        ]),
        groups: vec![group("", &[])],
    }
}

// viure, reviure: visc, vius, viu, vivim ... viscut
fn ure_conjugation() -> RawEnding {
    RawEnding {
        infinitive: "ure".into(),
        base: BaseConstraint::min_len(1),
        default_group: table(&[
            (FormTag::INFINITIVE, &["ure"]),
            (FormTag::GERUND, &["vint"]),
            (FormTag::PARTICIPLE, &["scut", "scuda", "scuts", "scudes"]),
            (FormTag::IND_PRESENT, &["sc", "us", "u", "vim", "viu", "uen"]),
            (FormTag::IND_IMPERFECT, &["via", "vies", "via", "víem", "víeu", "vien"]),
            (FormTag::IND_PAST, &["squí", "squeres", "squé", "squérem", "squéreu", "squeren"]),
            (FormTag::IND_FUTURE, &["uré", "uràs", "urà", "urem", "ureu", "uran"]),
            (FormTag::CONDITIONAL, &["uria", "uries", "uria", "uríem", "uríeu", "urien"]),
            (FormTag::SUBJ_PRESENT, &["squi", "squis", "squi", "squem", "squeu", "squin"]),
            (FormTag::SUBJ_IMPERFECT, &["squés", "squessis", "squés", "squéssim", "squéssiu", "squessin"]),
            (FormTag::IMPERATIVE, &["u", "squi", "squem", "viu", "squin"]),
        ]),
        groups: vec![group("", &[])],
    }
}

// escriure, descriure, subscriure: escric, escrius, escriu, escrivim ... escrit
fn iure_conjugation() -> RawEnding {
    RawEnding {
        infinitive: "iure".into(),
        base: BaseConstraint::min_len(1),
        default_group: table(&[
            (FormTag::INFINITIVE, &["iure"]),
            (FormTag::GERUND, &["ivint"]),
            (FormTag::PARTICIPLE, &["it", "ita", "its", "ites"]),
            (FormTag::IND_PRESENT, &["ic", "ius", "iu", "ivim", "iviu", "iuen"]),
            (FormTag::IND_IMPERFECT, &["ivia", "ivies", "ivia", "ivíem", "ivíeu", "ivien"]),
            (FormTag::IND_PAST, &["iví", "ivires", "ivé", "ivírem", "ivíreu", "iviren"]),
            (FormTag::IND_FUTURE, &["iuré", "iuràs", "iurà", "iurem", "iureu", "iuran"]),
            (FormTag::CONDITIONAL, &["iuria", "iuries", "iuria", "iuríem", "iuríeu", "iurien"]),
            (FormTag::SUBJ_PRESENT, &["igui", "iguis", "igui", "iguem", "igueu", "iguin"]),
            (FormTag::SUBJ_IMPERFECT, &["igués", "iguessis", "igués", "iguéssim", "iguéssiu", "iguessin"]),
            (FormTag::IMPERATIVE, &["iu", "igui", "iguem", "iviu", "iguin"]),
        ]),
        groups: vec![group("", &[])],
    }
}

// obrir, cobrir, oferir, sofrir: obro, obres, obre ... obert
fn rir_conjugation() -> RawEnding {
    RawEnding {
        infinitive: "rir".into(),
        base: BaseConstraint::min_len(1),
        default_group: table(&[
            (FormTag::INFINITIVE, &["rir"]),
            (FormTag::GERUND, &["rint"]),
            (FormTag::PARTICIPLE, &["ert", "erta", "erts", "ertes"]),
            (FormTag::IND_PRESENT, &["ro", "res", "re", "rim", "riu", "ren"]),
            (FormTag::IND_IMPERFECT, &["ria", "ries", "ria", "ríem", "ríeu", "rien"]),
            (FormTag::IND_PAST, &["rí", "rires", "rí", "rírem", "ríreu", "riren"]),
            (FormTag::IND_FUTURE, &["riré", "riràs", "rirà", "rirem", "rireu", "riran"]),
            (FormTag::CONDITIONAL, &["riria", "riries", "riria", "riríem", "riríeu", "ririen"]),
            (FormTag::SUBJ_PRESENT, &["ri", "ris", "ri", "rim", "riu", "rin"]),
            (FormTag::SUBJ_IMPERFECT, &["rís", "rissis", "rís", "ríssim", "ríssiu", "rissin"]),
            (FormTag::IMPERATIVE, &["re", "ri", "rim", "riu", "rin"]),
        ]),
        groups: vec![group("", &[])],
    }
}

/// Infinitive endings that are never a verb by themselves. Class endings
/// are added by the compiler.
const BARE_ENDINGS: &[&str] = &[
    "car", "iar", "jar", "uar", "bre", "dre", "ndre", "ur", "ure", "gir", "rir",
];

/// The raw table, in matching order.
pub fn raw_table() -> RawEndingTable {
    RawEndingTable {
        endings: vec![
            first_conjugation(),
            second_conjugation(),
            third_conjugation(),
            ndre_conjugation(),
            ure_conjugation(),
            iure_conjugation(),
            fourth_conjugation(),
            rir_conjugation(),
        ],
        bare_endings: BARE_ENDINGS.iter().map(|e| e.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compile, EndingTable};

    #[test]
    fn test_raw_table_through_json() {
        let json = serde_json::to_string(&raw_table()).expect("serializable table");
        let raw: RawEndingTable = serde_json::from_str(&json).expect("table reads back");
        assert_eq!(raw.bare_endings, raw_table().bare_endings);
        assert_eq!(raw.endings[1].base, BaseConstraint::min_len(1).forbidding(&["a", "e", "i", "o", "u"]));

        let loaded = compile(&raw).expect("table compiles");
        let builtin = EndingTable::catalan();
        assert_eq!(loaded.iter().count(), builtin.iter().count());
        for (ours, theirs) in loaded.iter().zip(builtin.iter()) {
            assert_eq!(ours.infinitive, theirs.infinitive);
            assert_eq!(ours.base, theirs.base);
            for (group, expected) in ours.groups.iter().zip(&theirs.groups) {
                assert_eq!(group.name, expected.name);
                assert_eq!(group.rule, expected.rule);
                assert_eq!(group.suffixes, expected.suffixes);
            }
        }
        assert!(loaded.is_bare_ending("car"));
    }
}
