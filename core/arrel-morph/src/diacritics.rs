use tracing::trace;

/// Folded infinitive endings and their written form, most specific first.
const DIACRITICS: &[(&str, &str)] = &[
    ("aixer", "àixer"),
    ("anyer", "ànyer"),
    ("coneixer", "conèixer"),
    ("creixer", "créixer"),
    ("reixer", "rèixer"),
    ("neixer", "néixer"),
    ("peixer", "péixer"),
    ("enyer", "ènyer"),
    ("encer", "èncer"),
    ("emer", "émer"),
    ("aitzar", "aïtzar"),
    ("eitzar", "eïtzar"),
    ("orrer", "órrer"),
    ("orcer", "òrcer"),
    ("omer", "òmer"),
    ("umer", "úmer"),
    ("unyer", "únyer"),
];

/// Puts back the accent, diaeresis or cedilla an infinitive lost to folding.
///
/// The first table rule matching the end of `stem` wins and yields exactly
/// one candidate. Otherwise a `-car` infinitive may really be `-çar`, so both
/// are returned. Coverage of `ï` and `ç` is partial: only the listed endings
/// and the `-car` case are restored, and the two are never combined.
pub fn add_diacritics(stem: &str) -> Vec<String> {
    if let Some((plain, marked)) = DIACRITICS.iter().find(|(plain, _)| stem.ends_with(plain)) {
        let restored = format!("{}{}", &stem[..stem.len() - plain.len()], marked);
        trace!(stem, %restored, "diacritic rule applied");
        return vec![restored];
    }
    if let Some(head) = stem.strip_suffix("car") {
        return vec![stem.to_string(), format!("{}çar", head)];
    }
    vec![stem.to_string()]
}
