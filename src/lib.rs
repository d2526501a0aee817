//! # dumpsplit
//!
//! Splits the output of a class-dump style introspection tool into one
//! header file per declaration.
//!
//! class-dump prints every extracted declaration into a single stream,
//! which is awkward to diff or browse. This crate segments that stream
//! into per-declaration blocks, derives a filesystem-safe name for each,
//! and writes one `.h` file per block plus one shared file holding the
//! tool's comment banner.
//!
//! The pipeline is strictly sequential: split lines, extract the shared
//! header, scan for declaration blocks, name and persist each block as it
//! closes. See [`dump::pipeline`] for the orchestration entry points.

pub mod dump;
