// Spelling alternations at morpheme boundaries.
//
// Catalan spells velar and palatal consonants differently depending on the
// vowel that follows: `c`/`qu`, `g`/`gu`, `j`/`g`. Stripping a suffix that
// starts with one vowel class and appending one of the other class therefore
// has to respell the stem. The engine works on folded strings, so `ç` and
// `c` coincide here and the cedilla is put back by `diacritics`.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// `e`, `i` and their accented forms.
pub fn is_front_vowel(ch: char) -> bool {
    matches!(ch, 'e' | 'i' | 'é' | 'è' | 'í' | 'ï')
}

/// `a`, `o`, `u` and their accented forms.
pub fn is_back_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'o' | 'u' | 'à' | 'ó' | 'ò' | 'ú' | 'ü')
}

pub fn starts_with_front(suffix: &str) -> bool {
    suffix.chars().next().map_or(false, is_front_vowel)
}

pub fn starts_with_back(suffix: &str) -> bool {
    suffix.chars().next().map_or(false, is_back_vowel)
}

/// Spellings of `stem` valid before a back vowel, given that it was spelled
/// for a front vowel (`tanqu-es` -> `tanc-ar`, `meng-es` -> `menj-ar`).
///
/// Returns every plausible variant; the dictionary decides later. A stem
/// that cannot stand before a back vowel at all yields nothing.
pub fn front_to_back(stem: &str) -> Vec<String> {
    if let Some(head) = stem.strip_suffix("qu") {
        vec![format!("{}c", head)]
    } else if let Some(head) = stem.strip_suffix("gu") {
        // `pagues` comes from `pag-`, `llengües` (folded) from `llengu-`
        vec![format!("{}g", head), stem.to_string()]
    } else if let Some(head) = stem.strip_suffix('g') {
        vec![format!("{}j", head)]
    } else if stem.ends_with('q') {
        vec![]
    } else {
        vec![stem.to_string()]
    }
}

/// Spellings of `stem` valid before a front vowel, given that it was spelled
/// for a back vowel (`fuj-o` -> `fug-ir`).
pub fn back_to_front(stem: &str) -> Vec<String> {
    if let Some(head) = stem.strip_suffix('c') {
        // folded `c` may have been `ç`, which stays `c` before e/i
        vec![stem.to_string(), format!("{}qu", head)]
    } else if let Some(head) = stem.strip_suffix('g') {
        vec![format!("{}gu", head)]
    } else if let Some(head) = stem.strip_suffix('j') {
        vec![format!("{}g", head)]
    } else {
        vec![stem.to_string()]
    }
}

/// Lowercases and folds diacritics, dropping the `-` marker used in table
/// notation. Folding is what makes `conèixer` and `coneixer` one key, in
/// precomposed or decomposed form alike.
pub fn normalize(s: &str) -> String {
    let folded: String = s
        .chars()
        .filter(|&c| c != '-')
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect();
    folded.trim().to_string()
}

/// Replaces the suffix `old` (already stripped from `stem`) by the
/// infinitive ending `new`, respelling the stem when the vowel class at the
/// boundary changes.
pub fn replace_ending(stem: &str, old: &str, new: &str) -> Vec<String> {
    let stems = match new {
        "ar" if starts_with_front(old) => front_to_back(stem),
        "er" | "ir" if starts_with_back(old) => back_to_front(stem),
        _ => vec![stem.to_string()],
    };
    stems.into_iter().map(|s| s + new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_vowel_classes() {
        assert!(is_front_vowel('e') && is_front_vowel('ï'));
        assert!(is_back_vowel('o') && is_back_vowel('à'));
        assert!(!is_front_vowel('a') && !is_back_vowel('i'));
        assert!(starts_with_front("es"));
        assert!(starts_with_back("o"));
        assert!(!starts_with_front("") && !starts_with_back(""));
        assert!(!starts_with_back("ssis"));
    }

    #[test]
    fn test_front_to_back() {
        assert_eq!(front_to_back("tanqu"), vec!["tanc"]);
        assert_eq!(front_to_back("pagu"), vec!["pag", "pagu"]);
        assert_eq!(front_to_back("meng"), vec!["menj"]);
        assert_eq!(front_to_back("cant"), vec!["cant"]);
        assert!(front_to_back("obliq").is_empty());
    }

    #[test]
    fn test_back_to_front() {
        assert_eq!(back_to_front("fuj"), vec!["fug"]);
        assert_eq!(back_to_front("venc"), vec!["venc", "venqu"]);
        assert_eq!(back_to_front("dorm"), vec!["dorm"]);
    }

    #[test]
    fn test_replace_ending() {
        assert_eq!(replace_ending("tanqu", "es", "ar"), vec!["tancar"]);
        assert_eq!(replace_ending("cant", "o", "ar"), vec!["cantar"]);
        assert_eq!(replace_ending("fuj", "o", "ir"), vec!["fugir"]);
        // no class change, no respelling
        assert_eq!(replace_ending("fuj", "im", "ir"), vec!["fujir"]);
        assert_eq!(replace_ending("mou", "c", "re"), vec!["moure"]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Conèixer"), "coneixer");
        assert_eq!(normalize("començar"), "comencar");
        assert_eq!(normalize("-eix"), "eix");
        assert_eq!(normalize(" Veïna "), "veina");
    }

    #[test]
    fn test_normalize_decomposed() {
        assert_eq!(normalize("cone\u{0300}ixer"), "coneixer");
        assert_eq!(normalize("comenc\u{0327}ar"), "comencar");
        assert_eq!(normalize("VEI\u{0308}NA"), "veina");
        // the middle dot of `l·l` is not a combining mark
        assert_eq!(normalize("col·legi"), "col·legi");
    }

    proptest! {
        #[test]
        fn test_normalize_idempotent(s in "\\PC{0,12}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn test_replace_ending_keeps_new_ending(stem in "[a-z]{0,8}", old in "[a-z]{0,4}") {
            for new in ["ar", "er", "ir", "re"] {
                for candidate in replace_ending(&stem, &old, new) {
                    prop_assert!(candidate.ends_with(new));
                }
            }
        }
    }
}
