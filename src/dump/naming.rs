//! Declaration naming
//!
//! Derives the output file stem for a declaration block from its first
//! line. The kind of declaration decides the cleanup applied:
//!
//! ```text
//! @protocol My Protocol (Category) <NSObject>   ->  My+Protocol+Category
//! @interface Foo (Bar) : NSObject <Baz>         ->  Foo (Bar)
//! ```
//!
//! Protocol names are truncated at the conformance list, stripped of
//! parentheses, and space-joined with `+`; class names keep everything
//! before the superclass colon verbatim, parentheses included. The
//! asymmetry is long-observed behavior and is kept as-is.

use crate::dump::segmenting::DeclarationBlock;
use std::fmt;

/// Substring introducing a protocol conformance list.
const CONFORMANCE_INTRO: &str = " <";

/// Errors that can occur while resolving a declaration name
#[derive(Debug, Clone, PartialEq)]
pub enum NameError {
    /// The block has no first line to derive a name from
    EmptyBlock,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::EmptyBlock => {
                write!(f, "declaration block has no lines to derive a name from")
            }
        }
    }
}

impl std::error::Error for NameError {}

/// Resolve the canonical name of a declaration block.
///
/// The first line is split into whitespace tokens and the leading keyword
/// (`@protocol` / `@interface`) is dropped. A bare `:` token marks a
/// class declaration, the colon separating the class from its superclass
/// or conformance list; without one the line is treated as a protocol.
/// An empty block cannot happen through the segmenter, which only seals
/// blocks that contain their trigger line, but is guarded anyway.
pub fn resolve_name(block: &DeclarationBlock) -> Result<String, NameError> {
    let first_line = block.first_line().ok_or(NameError::EmptyBlock)?;
    let rest: Vec<&str> = first_line.split_whitespace().skip(1).collect();
    match rest.iter().position(|token| *token == ":") {
        Some(colon) => Ok(class_name(&rest[..colon])),
        None => Ok(protocol_name(&rest)),
    }
}

/// Class names keep their parentheses: tokens before the colon are
/// rejoined with single spaces, so a category suffix like `Foo (Bar)`
/// survives intact.
fn class_name(tokens: &[&str]) -> String {
    tokens.join(" ")
}

/// Protocol names are cut at the conformance list, then cleaned for use
/// as a file name. Parentheses are removed before spaces become `+`; the
/// order matters for category names, which otherwise would keep a
/// dangling `+(`.
fn protocol_name(tokens: &[&str]) -> String {
    let joined = tokens.join(" ");
    let name = match joined.find(CONFORMANCE_INTRO) {
        Some(at) => &joined[..at],
        None => joined.as_str(),
    };
    name.replace('(', "").replace(')', "").replace(' ', "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(first_line: &str) -> DeclarationBlock {
        DeclarationBlock {
            lines: vec![first_line.to_string(), "@end".to_string()],
        }
    }

    #[test]
    fn protocol_name_stops_at_the_conformance_list() {
        assert_eq!(
            resolve_name(&block("@protocol MyProtocol <NSObject>")).unwrap(),
            "MyProtocol"
        );
    }

    #[test]
    fn protocol_without_conformance_keeps_its_full_name() {
        assert_eq!(resolve_name(&block("@protocol MyProtocol")).unwrap(), "MyProtocol");
    }

    #[test]
    fn protocol_category_is_stripped_of_parens_then_space_joined() {
        // Strip parentheses first, then replace spaces with `+`.
        assert_eq!(
            resolve_name(&block("@protocol My Protocol (Category) <NSObject>")).unwrap(),
            "My+Protocol+Category"
        );
    }

    #[test]
    fn class_name_is_the_tokens_before_the_colon() {
        assert_eq!(
            resolve_name(&block("@interface Foo : NSObject")).unwrap(),
            "Foo"
        );
    }

    #[test]
    fn class_category_keeps_its_parentheses() {
        // Unlike protocols, class names are not cleaned further.
        assert_eq!(
            resolve_name(&block("@interface Foo (Bar) : NSObject <Baz>")).unwrap(),
            "Foo (Bar)"
        );
    }

    #[test]
    fn empty_block_fails_with_a_structural_error() {
        let empty = DeclarationBlock { lines: Vec::new() };
        assert_eq!(resolve_name(&empty), Err(NameError::EmptyBlock));
    }
}
