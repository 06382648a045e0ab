use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::char,
    combinator::{all_consuming, map, value},
    sequence::{preceded, separated_pair},
    IResult,
};

use arrel_morph::normalize;

/// Group name keyword for inchoative (`-eix-`) conjugations.
pub const INCHOATIVE: &str = "incoatiu";

/// How a group turns the stem left after suffix stripping into the
/// infinitive base. Decided once, when the table is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconstructionRule {
    /// The stripped stem is the base (`""`).
    PlainStrip,
    /// The stripped stem is the base of an inchoative verb (`"incoatiu"`).
    InchoativeGated,
    /// `"X/Y"`: a stem equal to `X` becomes `Y`.
    /// `"-X/-Y"` (`tail_only`): a stem ending in `X` gets that tail replaced.
    Rewrite { from: String, to: String, tail_only: bool },
}

impl ReconstructionRule {
    /// Prefix for the default-group forms a rewrite group does not
    /// override: the part of the target stem beyond the source stem.
    /// In `-e/-eix` (`conec`, `coneixem`) that is `ix`.
    pub fn add_for_default(&self) -> String {
        match self {
            ReconstructionRule::Rewrite { from, to, .. } => to.chars().skip(from.chars().count()).collect(),
            _ => String::new(),
        }
    }
}

fn is_stem_char(c: char) -> bool {
    c.is_alphabetic() || c == '·'
}

fn rewrite(tail_only: bool, from: &str, to: &str) -> ReconstructionRule {
    ReconstructionRule::Rewrite { from: normalize(from), to: normalize(to), tail_only }
}

fn tail_rewrite(input: &str) -> IResult<&str, ReconstructionRule> {
    map(
        separated_pair(
            preceded(char('-'), take_while1(is_stem_char)),
            char('/'),
            preceded(char('-'), take_while(is_stem_char)),
        ),
        |(from, to)| rewrite(true, from, to),
    )(input)
}

fn whole_rewrite(input: &str) -> IResult<&str, ReconstructionRule> {
    map(
        separated_pair(take_while1(is_stem_char), char('/'), take_while(is_stem_char)),
        |(from, to)| rewrite(false, from, to),
    )(input)
}

fn inchoative(input: &str) -> IResult<&str, ReconstructionRule> {
    value(ReconstructionRule::InchoativeGated, tag(INCHOATIVE))(input)
}

/// Parses one (already alias-split) group name. Returns `None` for names
/// that follow none of the rule forms.
pub fn parse_rule(name: &str) -> Option<ReconstructionRule> {
    if name.is_empty() {
        return Some(ReconstructionRule::PlainStrip);
    }
    all_consuming(alt((tail_rewrite, whole_rewrite, inchoative)))(name)
        .ok()
        .map(|(_, rule)| rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_inchoative() {
        assert_eq!(parse_rule(""), Some(ReconstructionRule::PlainStrip));
        assert_eq!(parse_rule("incoatiu"), Some(ReconstructionRule::InchoativeGated));
    }

    #[test]
    fn test_rewrites() {
        assert_eq!(
            parse_rule("v/an"),
            Some(ReconstructionRule::Rewrite { from: "v".into(), to: "an".into(), tail_only: false })
        );
        assert_eq!(
            parse_rule("-e/-eix"),
            Some(ReconstructionRule::Rewrite { from: "e".into(), to: "eix".into(), tail_only: true })
        );
        // an empty target deletes the tail
        assert_eq!(
            parse_rule("-x/-"),
            Some(ReconstructionRule::Rewrite { from: "x".into(), to: "".into(), tail_only: true })
        );
    }

    #[test]
    fn test_malformed() {
        assert_eq!(parse_rule("-e/eix"), None);
        assert_eq!(parse_rule("incoatiu-x"), None);
        assert_eq!(parse_rule("a/b/c"), None);
        assert_eq!(parse_rule("irregular"), None);
        assert_eq!(parse_rule("/eix"), None);
    }

    #[test]
    fn test_add_for_default() {
        assert_eq!(parse_rule("-e/-eix").map(|r| r.add_for_default()), Some("ix".to_string()));
        assert_eq!(parse_rule("-o/-ou").map(|r| r.add_for_default()), Some("u".to_string()));
        assert_eq!(parse_rule("v/an").map(|r| r.add_for_default()), Some("n".to_string()));
        assert_eq!(parse_rule("incoatiu").map(|r| r.add_for_default()), Some(String::new()));
    }
}
