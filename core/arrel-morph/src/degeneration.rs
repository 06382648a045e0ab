// Noun and adjective rule chains: plural -> singular, feminine -> masculine,
// comparative/superlative -> positive.
//
// A chain only fires when the word carries its marker (`s` for plural, `a`
// for feminine). Every rule of a fired chain contributes independently;
// there is no first-match-wins here, the caller gets the union and the
// dictionary (if any) sorts it out.

use std::collections::BTreeSet;

use tracing::debug;

use crate::alternation::front_to_back;

#[derive(Clone, Copy)]
enum SuffixRule {
    /// Replace the suffix with a fixed string.
    Literal(&'static str, &'static str),
    /// Strip the suffix and derive candidates from the remaining stem.
    Derived(&'static str, fn(&str) -> Vec<String>),
}

impl SuffixRule {
    fn apply(self, word: &str) -> Vec<String> {
        match self {
            SuffixRule::Literal(old, new) => word
                .strip_suffix(old)
                .map(|stem| vec![format!("{}{}", stem, new)])
                .unwrap_or_default(),
            SuffixRule::Derived(old, derive) => word.strip_suffix(old).map(derive).unwrap_or_default(),
        }
    }
}

use SuffixRule::{Derived, Literal};

const PLURAL_RULES: &[SuffixRule] = &[
    Literal("s", ""),
    Literal("sos", "s"),
    Literal("xos", "x"),
    Literal("scos", "sc"),
    Literal("stos", "st"),
    Literal("xtos", "xt"),
    Derived("ns", vowel_final),
    Literal("ssos", "s"),
    Literal("jos", "ig"),
    Literal("itjos", "ig"),
    Derived("es", feminine_singular),
];

const MASCULINE_NOUN_RULES: &[SuffixRule] = &[
    Literal("a", ""),
    Literal("da", "t"),
    Literal("ba", "p"),
    Literal("va", "f"),
    Literal("ssa", "s"),
    Literal("na", ""),
    Literal("essa", ""),
];

const MASCULINE_ADJECTIVE_RULES: &[SuffixRule] = &[
    Literal("a", ""),
    Literal("a", "e"),
    Literal("a", "o"),
    Literal("da", "t"),
    Literal("ga", "c"),
    Literal("qua", "c"),
    Derived("ja", palatal_masculine),
    Literal("ssa", "s"),
    Literal("na", ""),
    Literal("ea", "eu"),
    Literal("ava", "au"),
    Literal("eva", "eu"),
    Literal("iva", "iu"),
    Literal("ova", "ou"),
    Literal("lla", "l"),
];

/// Irregular comparatives and superlatives, folded.
const DEGREES: &[(&[&str], &[&str])] = &[
    (&["millor", "optim"], &["bo", "bon"]),
    (&["pitjor", "pessim"], &["mal", "dolent"]),
    (&["major", "maxim"], &["gran"]),
    (&["menor", "minim"], &["petit"]),
    (&["superior", "suprem"], &["alt"]),
    (&["inferior", "infim"], &["baix"]),
];

const SUPERLATIVE: &str = "issim";

// `camins` -> `cami`: the `n` only drops after a vowel
fn vowel_final(stem: &str) -> Vec<String> {
    match stem.chars().last() {
        Some(last) if "aeiou".contains(last) => vec![stem.to_string()],
        _ => vec![],
    }
}

// `vaques` -> `vaca`, `cases` -> `casa`
fn feminine_singular(stem: &str) -> Vec<String> {
    front_to_back(stem).into_iter().map(|s| s + "a").collect()
}

// `roja` -> `roig`, `mitja` -> `mig`
fn palatal_masculine(stem: &str) -> Vec<String> {
    let head = if let Some(head) = stem.strip_suffix("it") {
        head
    } else if let Some(head) = stem.strip_suffix('t') {
        head
    } else {
        stem
    };
    vec![format!("{}ig", head)]
}

fn run_chain(word: &str, marker: char, rules: &[SuffixRule], chain: &'static str) -> Vec<String> {
    if !word.ends_with(marker) {
        return vec![word.to_string()];
    }
    let candidates: Vec<String> = rules.iter().flat_map(|rule| rule.apply(word)).collect();
    debug!(word, chain, ?candidates, "degeneration chain");
    candidates
}

pub fn singular_nouns_of(word: &str) -> Vec<String> {
    run_chain(word, 's', PLURAL_RULES, "singular nouns")
}

pub fn masculine_nouns_of(word: &str) -> Vec<String> {
    run_chain(word, 'a', MASCULINE_NOUN_RULES, "masculine nouns")
}

pub fn singular_adjectives_of(word: &str) -> Vec<String> {
    run_chain(word, 's', PLURAL_RULES, "singular adjectives")
}

pub fn masculine_adjectives_of(word: &str) -> Vec<String> {
    run_chain(word, 'a', MASCULINE_ADJECTIVE_RULES, "masculine adjectives")
}

/// Positive degree of an adjective: the irregular table first, then the
/// `-íssim` superlative, otherwise the word itself.
pub fn base_degree_adjectives_of(word: &str) -> Vec<String> {
    if let Some((_, positives)) = DEGREES.iter().find(|(forms, _)| forms.contains(&word)) {
        return positives.iter().map(|p| p.to_string()).collect();
    }
    match word.strip_suffix(SUPERLATIVE) {
        Some(positive) => vec![positive.to_string()],
        None => vec![word.to_string()],
    }
}

/// Noun and adjective base candidates of `word`, unvalidated.
pub fn base_of(word: &str) -> BTreeSet<String> {
    let nouns = singular_nouns_of(word)
        .into_iter()
        .flat_map(|singular| masculine_nouns_of(&singular));
    let adjectives = singular_adjectives_of(word)
        .into_iter()
        .flat_map(|singular| masculine_adjectives_of(&singular))
        .flat_map(|masculine| base_degree_adjectives_of(&masculine));
    nouns.chain(adjectives).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_singular_nouns() {
        assert!(singular_nouns_of("cases").contains(&"casa".to_string()));
        assert_eq!(singular_nouns_of("casa"), vec!["casa"]);
        assert_eq!(singular_nouns_of("vaques"), vec!["vaque", "vaca"]);
        assert_eq!(singular_nouns_of("camins"), vec!["camin", "cami"]);
        assert!(singular_nouns_of("peixos").contains(&"peix".to_string()));
        assert!(singular_nouns_of("boscos").contains(&"bosc".to_string()));
        assert_eq!(singular_nouns_of("dons"), vec!["don", "do"]);
        assert_eq!(singular_nouns_of("ns"), vec!["n"]);
    }

    #[test]
    fn test_singular_adjectives() {
        assert!(singular_adjectives_of("rojos").contains(&"roig".to_string()));
        assert!(singular_adjectives_of("mitjos").contains(&"mig".to_string()));
        assert!(singular_adjectives_of("grosses").contains(&"grossa".to_string()));
    }

    #[test]
    fn test_masculine_nouns() {
        assert_eq!(masculine_nouns_of("gat"), vec!["gat"]);
        assert!(masculine_nouns_of("lloba").contains(&"llop".to_string()));
        assert!(masculine_nouns_of("gata").contains(&"gat".to_string()));
    }

    #[test]
    fn test_masculine_adjectives_union() {
        // two independent rules both fire
        let groga = masculine_adjectives_of("groga");
        assert!(groga.contains(&"grog".to_string()));
        assert!(groga.contains(&"groc".to_string()));

        let bona = masculine_adjectives_of("bona");
        assert!(bona.contains(&"bon".to_string()));
        assert!(bona.contains(&"bo".to_string()));

        assert!(masculine_adjectives_of("roja").contains(&"roig".to_string()));
        assert!(masculine_adjectives_of("mitja").contains(&"mig".to_string()));
        assert!(masculine_adjectives_of("nova").contains(&"nou".to_string()));
        assert!(masculine_adjectives_of("obliqua").contains(&"oblic".to_string()));
    }

    #[test]
    fn test_degrees() {
        assert_eq!(base_degree_adjectives_of("millor"), vec!["bo", "bon"]);
        assert_eq!(base_degree_adjectives_of("pessim"), vec!["mal", "dolent"]);
        assert_eq!(base_degree_adjectives_of("altissim"), vec!["alt"]);
        assert_eq!(base_degree_adjectives_of("gran"), vec!["gran"]);
    }

    #[test]
    fn test_base_of() {
        assert!(base_of("grogues").contains("groc"));
        assert!(base_of("millors").contains("bo"));
        assert!(base_of("llobes").contains("llop"));
        assert!(base_of("altissims").contains("alt"));
        assert_eq!(base_of("pa"), ["p", "pe", "po"].iter().map(|s| s.to_string()).collect());
    }

    proptest! {
        #[test]
        fn test_unmarked_words_pass_through(word in "[a-z]{0,8}[b-rt-z]") {
            prop_assert_eq!(singular_nouns_of(&word), vec![word.clone()]);
            prop_assert_eq!(singular_adjectives_of(&word), vec![word.clone()]);
        }

        #[test]
        fn test_base_of_total(word in "\\PC{0,12}") {
            let _ = base_of(&word);
        }
    }
}
