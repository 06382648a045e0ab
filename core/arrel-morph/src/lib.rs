//! Pure string morphology for Catalan: spelling alternations at morpheme
//! boundaries, diacritic restoration and the noun/adjective rule chains.
//!
//! Nothing here consults a dictionary. Every function is total and returns
//! candidates, which may be empty but are never an error.

pub mod alternation;
pub mod degeneration;
pub mod diacritics;

pub use alternation::{back_to_front, front_to_back, normalize, replace_ending};
pub use degeneration::{
    base_degree_adjectives_of, base_of, masculine_adjectives_of, masculine_nouns_of,
    singular_adjectives_of, singular_nouns_of,
};
pub use diacritics::add_diacritics;
