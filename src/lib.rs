#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # au3scope
//!
//! A cross-platform framework for locating, decrypting, decompressing and decompiling the
//! script resources embedded in compiled AutoIt3 executables and `.a3x` containers. Built in
//! pure Rust, `au3scope` recovers the packed resource records and the tokenized main script
//! without running the interpreter or touching Windows APIs.
//!
//! ## Features
//!
//! - **🔍 Signature brute-forcing** - Locates XOR-obfuscated containers under any single-byte key
//! - **🔑 All cipher variants** - EA05, EA06 and both legacy keystream generations
//! - **📦 All payload formats** - Flag-bit LZ, adaptive-Huffman LZ and the JB01 container
//! - **📜 Script reconstruction** - Linearizes the tokenized script back into readable source
//! - **⚡ Parallel sweeps** - Key trials and record expansion fan out over rayon
//! - **🛡️ Memory safe** - Bounds-checked parsing of hostile input, comprehensive error handling
//!
//! ## Quick Start
//!
//! Add `au3scope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! au3scope = "0.2"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust,no_run
//! use au3scope::prelude::*;
//!
//! let mut object = Au3Object::from_file("packed.exe".as_ref())?;
//! object.decompress_all();
//! object.decompile_main();
//!
//! if let Some(script) = object.main_script() {
//!     println!("{}", script.source());
//! }
//! # Ok::<(), au3scope::Error>(())
//! ```
//!
//! ### Saving Resources
//!
//! ```rust,no_run
//! use au3scope::Au3Object;
//! use std::path::Path;
//!
//! let mut object = Au3Object::from_file(Path::new("packed.exe"))?;
//! object.decompress_all();
//!
//! for res in object.resources() {
//!     // Raw bytes for binary resources, reconstructed text for scripts;
//!     // the destination path and extension are entirely up to the caller.
//!     std::fs::write(format!("out/{}", res.short_tag()), res.raw_data())?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! `au3scope` is organized into several key modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`scanner`] - XOR brute-force location of script containers
//! - [`keys`] - Cipher variants, key schedules and keystream generators
//! - [`compression`] - The decompressor family for packed payloads
//! - [`script`] - Resource records and the extraction pipeline
//! - [`format`] - The external source-formatter boundary
//! - [`Error`] and [`Result`] - Comprehensive error handling
//!
//! The pipeline runs scanner → record parser → per-record decompressor →
//! decompiler, with exactly one cipher variant selected per file from the
//! container's subtype marker.

#[macro_use]
pub(crate) mod error;
pub(crate) mod decompiler;
pub mod file;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust,no_run
/// use au3scope::prelude::*;
///
/// let object = Au3Object::from_file("packed.exe".as_ref())?;
/// println!("{} resources", object.resources().len());
/// # Ok::<(), au3scope::Error>(())
/// ```
pub mod prelude;

/// Decompressors for the embedded payload formats.
///
/// Covers the flag-bit LZ coder shared by EA05/EA06, the legacy
/// adaptive-Huffman coder and the JB01 fixed-width container, all reading
/// MSB-first bits from 16-bit windows.
pub mod compression;

/// Cipher variants and key schedules.
///
/// The closed set of obfuscation schemes a container can declare, each
/// bundling field masks, keystream seeds and a generator family.
pub mod keys;

/// Brute-force signature location of embedded script containers.
pub mod scanner;

/// Resource records and the extraction pipeline.
pub mod script;

/// The external source-formatter boundary.
pub mod format;

/// Crate-wide `Result` with [`crate::Error`] as the failure type.
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;
pub use file::{parser::Parser, File};
pub use script::{resource::Resource, Au3Object};
