//! Header blurb extraction
//!
//! class-dump opens its output with a comment banner:
//!
//! ```text
//! //
//! //     Generated by class-dump 3.5 (64 bit).
//! //
//! //     class-dump is Copyright (C) 1997-2015 by Steve Nygard.
//! //
//! ```
//!
//! The blurb collects every comment line in the stream, minus the
//! copyright attribution line, and is written once per run to a shared
//! artifact. Comment lines are collected wherever they appear; in
//! practice they all precede the first declaration.

/// Prefix identifying a comment line in the dump output.
pub const COMMENT_MARKER: &str = "//";

/// Comment lines ending with this suffix are left out of the blurb.
pub const EXCLUDED_COMMENT_SUFFIX: &str = "by Steve Nygard.";

/// Collect the shared comment header from the full line stream.
///
/// Keeps every line starting with [`COMMENT_MARKER`], drops any kept line
/// ending with [`EXCLUDED_COMMENT_SUFFIX`], and joins the survivors with
/// single newlines. A stream without comment lines yields an empty blurb.
pub fn extract_header(lines: &[&str]) -> String {
    lines
        .iter()
        .filter(|line| line.starts_with(COMMENT_MARKER))
        .filter(|line| !line.ends_with(EXCLUDED_COMMENT_SUFFIX))
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}
