//! Declaration segmentation
//!
//! Groups the line stream into contiguous declaration blocks. A block
//! runs from a line starting with `@protocol` or `@interface` through the
//! next line starting with `@end`, inclusive.
//!
//! The segmenter is a two-state machine over the lines: outside a
//! declaration it waits for a start marker, inside one it accumulates
//! every line until the end marker seals the block. Blocks are delimited
//! purely by marker text, not structural balance: a start marker seen
//! while already inside a block is absorbed as ordinary content. A
//! declaration still open at end of stream is discarded, never yielded.

/// Line prefix opening a protocol declaration.
pub const PROTOCOL_MARKER: &str = "@protocol";

/// Line prefix opening a class declaration.
pub const INTERFACE_MARKER: &str = "@interface";

/// Line prefix closing any declaration.
pub const END_MARKER: &str = "@end";

/// True for lines that open a protocol or class declaration.
pub fn is_declaration_start(line: &str) -> bool {
    line.starts_with(PROTOCOL_MARKER) || line.starts_with(INTERFACE_MARKER)
}

/// True for lines that close a declaration.
pub fn is_declaration_end(line: &str) -> bool {
    line.starts_with(END_MARKER)
}

/// A contiguous run of lines from a start marker through its end marker.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationBlock {
    pub lines: Vec<String>,
}

impl DeclarationBlock {
    /// The line that opened the block, if any.
    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Block text as persisted: lines joined with a single trailing
    /// newline.
    pub fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// A stateful classifier that accumulates declaration lines and seals a
/// block when the end marker arrives.
pub struct DeclarationClassifier {
    buffer: Vec<String>,
    in_declaration: bool,
}

impl DeclarationClassifier {
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            in_declaration: false,
        }
    }

    /// Processes one line.
    ///
    /// Returns the sealed block when the line closes a declaration, and
    /// `None` while accumulating or while outside any declaration. Lines
    /// outside a declaration are dropped; inside one, every line is
    /// buffered, including the trigger and terminator lines.
    pub fn process_line(&mut self, line: &str) -> Option<DeclarationBlock> {
        if !self.in_declaration {
            if is_declaration_start(line) {
                self.in_declaration = true;
                self.buffer.push(line.to_string());
            }
            return None;
        }
        self.buffer.push(line.to_string());
        if is_declaration_end(line) {
            self.in_declaration = false;
            return Some(DeclarationBlock {
                lines: self.buffer.drain(..).collect(),
            });
        }
        None
    }

    /// Drains any lines buffered for a declaration that never closed.
    ///
    /// Called at end of stream. The drained fragment is not a block; it
    /// was started but never terminated.
    pub fn flush(&mut self) -> Vec<String> {
        self.in_declaration = false;
        self.buffer.drain(..).collect()
    }
}

impl Default for DeclarationClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-pass iterator yielding declaration blocks in stream order.
///
/// Drives a [`DeclarationClassifier`] over the line stream. After the
/// iterator is exhausted, [`discarded_lines`](Self::discarded_lines)
/// exposes the fragment of an unterminated trailing declaration, if any,
/// so the caller can report it.
pub struct DeclarationScanner<'a> {
    lines: std::slice::Iter<'a, &'a str>,
    classifier: DeclarationClassifier,
    discarded: Vec<String>,
}

impl<'a> DeclarationScanner<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines: lines.iter(),
            classifier: DeclarationClassifier::new(),
            discarded: Vec::new(),
        }
    }

    /// Lines buffered for a declaration that was still open at end of
    /// stream. Populated once iteration finishes.
    pub fn discarded_lines(&self) -> &[String] {
        &self.discarded
    }
}

impl Iterator for DeclarationScanner<'_> {
    type Item = DeclarationBlock;

    fn next(&mut self) -> Option<DeclarationBlock> {
        for line in self.lines.by_ref() {
            if let Some(block) = self.classifier.process_line(line) {
                return Some(block);
            }
        }
        self.discarded.extend(self.classifier.flush());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(lines: &[&str]) -> (Vec<DeclarationBlock>, Vec<String>) {
        let mut scanner = DeclarationScanner::new(lines);
        let blocks: Vec<_> = scanner.by_ref().collect();
        (blocks, scanner.discarded_lines().to_vec())
    }

    #[test]
    fn yields_one_block_per_marker_pair_in_order() {
        let (blocks, discarded) = scan(&[
            "@protocol X <NSObject>",
            "@end",
            "@interface Y : NSObject",
            "- (void)doIt;",
            "@end",
        ]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines, vec!["@protocol X <NSObject>", "@end"]);
        assert_eq!(
            blocks[1].lines,
            vec!["@interface Y : NSObject", "- (void)doIt;", "@end"]
        );
        assert!(discarded.is_empty());
    }

    #[test]
    fn lines_outside_marker_pairs_belong_to_no_block() {
        let (blocks, _) = scan(&[
            "// banner",
            "",
            "@interface Y : NSObject",
            "@end",
            "trailing junk",
        ]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines, vec!["@interface Y : NSObject", "@end"]);
    }

    #[test]
    fn trigger_and_terminator_lines_are_part_of_the_block() {
        let (blocks, _) = scan(&["@interface Y : NSObject", "@end"]);
        assert_eq!(blocks[0].first_line(), Some("@interface Y : NSObject"));
        assert_eq!(blocks[0].lines.last().map(String::as_str), Some("@end"));
    }

    #[test]
    fn start_marker_inside_a_block_is_absorbed_as_content() {
        // Blocks are delimited by marker text only; no nesting support.
        let (blocks, discarded) = scan(&[
            "@interface Outer : NSObject",
            "@protocol Inner <NSObject>",
            "@end",
        ]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].lines,
            vec![
                "@interface Outer : NSObject",
                "@protocol Inner <NSObject>",
                "@end"
            ]
        );
        assert!(discarded.is_empty());
    }

    #[test]
    fn unterminated_trailing_declaration_is_discarded() {
        let (blocks, discarded) = scan(&[
            "@protocol Done <NSObject>",
            "@end",
            "@interface Dangling : NSObject",
            "- (void)lost;",
        ]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            discarded,
            vec!["@interface Dangling : NSObject", "- (void)lost;"]
        );
    }

    #[test]
    fn end_marker_without_an_open_block_is_ignored() {
        let (blocks, discarded) = scan(&["@end", "@interface Y : NSObject", "@end"]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines, vec!["@interface Y : NSObject", "@end"]);
        assert!(discarded.is_empty());
    }

    #[test]
    fn block_text_joins_lines_with_a_single_trailing_newline() {
        let block = DeclarationBlock {
            lines: vec!["@interface Y : NSObject".to_string(), "@end".to_string()],
        };
        assert_eq!(block.text(), "@interface Y : NSObject\n@end\n");
    }

    #[test]
    fn classifier_can_be_reused_across_blocks() {
        let mut classifier = DeclarationClassifier::new();
        assert!(classifier.process_line("@protocol A <NSObject>").is_none());
        let first = classifier.process_line("@end").expect("sealed block");
        assert_eq!(first.lines, vec!["@protocol A <NSObject>", "@end"]);
        assert!(classifier.process_line("@interface B : NSObject").is_none());
        let second = classifier.process_line("@end").expect("sealed block");
        assert_eq!(second.lines, vec!["@interface B : NSObject", "@end"]);
        assert!(classifier.flush().is_empty());
    }
}
