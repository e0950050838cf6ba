//! Text scanning utilities for the condtree expression parser.
//!
//! The crate exposes the connective token lists, parenthesis helpers and the
//! reversible literal mask so the parser can split raw condition text without
//! misreading quoted values or call arguments as structure.

mod connective;
mod errors;
mod mask;
mod matcher;
mod paren;
mod scan;

pub use connective::{
    Connective, TOKENS_AND, TOKENS_OR, TOKENS_XOR, all_tokens, has_mixed_connectives,
};
pub use errors::{PatternError, TextErrorInfo};
pub use mask::{MASK_DELIMITER, MaskedText, mask_literals};
pub use matcher::ConnectiveMatcher;
pub use paren::{ParenSpan, find_top_level_parenthesis, trim_parenthesis_pairs};
pub use scan::slice_text;
