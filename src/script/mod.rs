//! The extraction pipeline: from raw executable to decoded resources.
//!
//! [`Au3Object`] is the main entry point of the library. Construction runs the
//! signature sweep, selects the cipher variant from the container subtype and
//! decodes every `FILE` record; the remaining pipeline stages — decompression,
//! decompilation of the main script, and the optional hand-off to an external
//! source formatter — run on demand.
//!
//! # Architecture
//!
//! One [`crate::keys::CipherVariant`] governs all records of a parsed file and
//! is read-only after construction. Each [`Resource`] owns its byte buffers
//! exclusively, which is what makes [`Au3Object::decompress_all`] free to
//! expand independent records on the rayon pool.
//!
//! # Examples
//!
//! ```rust,no_run
//! use au3scope::prelude::*;
//! use std::path::Path;
//!
//! let mut object = Au3Object::from_file(Path::new("packed.exe"))?;
//! object.decompress_all();
//! object.decompile_main();
//!
//! for res in object.resources() {
//!     println!("{}: {}", res.short_tag(), res.state());
//! }
//! # Ok::<(), au3scope::Error>(())
//! ```

pub mod resource;
pub(crate) mod unpack;

use std::path::Path;

use rayon::prelude::*;

use crate::{
    compression, decompiler,
    file::File,
    format::{FormatOptions, SourceFormatter},
    keys::{decode_text, CipherVariant},
    scanner,
    script::resource::{Resource, ResourceKind, ResourceStatus, SourceState},
    Result,
};

/// Running-sum checksum over a payload, as stored in record headers.
///
/// Two 16-bit sums accumulated modulo 0xFFF1 and packed `(hi << 16) + lo`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(au3scope::script::checksum(b"AB"), 0x00C4_0083);
/// ```
#[must_use]
pub fn checksum(data: &[u8]) -> u32 {
    let mut lo = 0u32;
    let mut hi = 0u32;
    for &byte in data {
        lo = (lo + u32::from(byte)) % 0xFFF1;
        hi = (hi + lo) % 0xFFF1;
    }
    (hi << 16) + lo
}

/// A parsed AutoIt script archive: the cipher variant, the XOR key the
/// producer chose, and every resource record decoded from its containers.
///
/// The resource set is rebuilt from scratch for every input file; nothing
/// persists across files. Loading is all-or-nothing: an unsupported subtype
/// or an oversized record discards the whole file.
///
/// # Examples
///
/// ```rust,no_run
/// use au3scope::Au3Object;
/// use std::path::Path;
///
/// let object = Au3Object::from_file(Path::new("packed.exe"))?;
/// println!("variant: {}, key: 0x{:02x}", object.variant(), object.key());
/// # Ok::<(), au3scope::Error>(())
/// ```
#[derive(Debug)]
pub struct Au3Object {
    variant: CipherVariant,
    key: u8,
    resources: Vec<Resource>,
}

impl Au3Object {
    /// Load and parse a packed executable or `.a3x` container from disk.
    ///
    /// # Errors
    /// Returns [`crate::Error::ScriptNotFound`] when no container is located
    /// or none yields records, [`crate::Error::UnsupportedVariant`] or
    /// [`crate::Error::InvalidCompressedSize`] on fatal container damage, and
    /// I/O errors from the file layer.
    pub fn from_file(path: &Path) -> Result<Au3Object> {
        let file = File::from_file(path)?;
        Au3Object::from_buffer(file.data())
    }

    /// Parse a packed executable already held in memory.
    ///
    /// # Errors
    /// Same conditions as [`Au3Object::from_file`].
    pub fn from_mem(data: Vec<u8>) -> Result<Au3Object> {
        let file = File::from_mem(data)?;
        Au3Object::from_buffer(file.data())
    }

    fn from_buffer(data: &[u8]) -> Result<Au3Object> {
        let located = scanner::locate(data)?;

        let mut variant_in_charge = None;
        let mut resources = Vec::new();
        for span in &located.containers {
            if span.start >= span.end {
                continue;
            }
            let variant = CipherVariant::from_subtype(&span.subtype)?;
            let container = &located.image[span.start..span.end.min(located.image.len())];
            let records = unpack::parse_records(container, variant, span.legacy)?;
            if records.is_empty() {
                continue;
            }
            variant_in_charge = Some(variant);
            resources.extend(records);
        }

        let Some(variant) = variant_in_charge else {
            return Err(crate::Error::ScriptNotFound);
        };

        Ok(Au3Object {
            variant,
            key: located.key,
            resources,
        })
    }

    /// The cipher variant governing this file's records.
    #[must_use]
    pub fn variant(&self) -> CipherVariant {
        self.variant
    }

    /// The XOR key under which the container headers matched.
    #[must_use]
    pub fn key(&self) -> u8 {
        self.key
    }

    /// All decoded resources, in encounter order.
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Mutable access to the decoded resources.
    pub fn resources_mut(&mut self) -> &mut [Resource] {
        &mut self.resources
    }

    /// Look a resource up by its short tag.
    ///
    /// When several records share a short tag the later record wins, matching
    /// the display-table behavior of the original tooling.
    #[must_use]
    pub fn get(&self, short_tag: &str) -> Option<&Resource> {
        self.resources
            .iter()
            .rev()
            .find(|res| res.short_tag() == short_tag)
    }

    /// The main script resource, if one was decoded.
    #[must_use]
    pub fn main_script(&self) -> Option<&Resource> {
        self.resources.iter().find(|res| res.is_main_script())
    }

    /// Mutable access to the main script resource.
    pub fn main_script_mut(&mut self) -> Option<&mut Resource> {
        self.resources.iter_mut().find(|res| res.is_main_script())
    }

    /// Expand every compressed resource.
    ///
    /// Records are independent after extraction, so the expansion fans out
    /// over the rayon pool. Invalid payloads mark their own record and never
    /// fail the batch.
    pub fn decompress_all(&mut self) {
        let variant = self.variant;
        self.resources
            .par_iter_mut()
            .for_each(|res| decompress_resource(res, variant));
    }

    /// Rebuild the main script's source text from its token stream.
    ///
    /// A no-op when there is no main script, when it failed earlier stages,
    /// or when its payload already is plain text.
    pub fn decompile_main(&mut self) {
        if let Some(res) = self.main_script_mut() {
            decompiler::decompile(res);
            if !res.is_complete() && res.status() == ResourceStatus::Ok {
                res.mark_complete();
            }
        }
    }

    /// Run the full pipeline: decompress everything, decompile the main
    /// script, and hand its text to `formatter` for re-indentation.
    ///
    /// Formatter failures are swallowed; the un-indented decompiled text then
    /// stands as the final output.
    pub fn process(&mut self, formatter: &dyn SourceFormatter, options: &FormatOptions) {
        self.decompress_all();

        if let Some(res) = self.main_script_mut() {
            decompiler::decompile(res);

            if res.status() == ResourceStatus::Ok
                && res.source_state() == SourceState::Decompiled
                && !res.source().is_empty()
            {
                res.set_state("Indenting Code...");
                match formatter.format(res.source(), options) {
                    Ok(formatted) => {
                        res.set_raw_data(formatted.clone().into_bytes());
                        res.set_source(formatted);
                        res.advance_source_state(SourceState::Indented);
                        res.set_state("Code Indented.");
                    }
                    Err(_) => {
                        // fallback: the decompiled text is the final output
                        res.set_state("Decompiled");
                    }
                }
            }
            res.mark_complete();
        }
    }
}

/// Expand one record in place, applying the per-variant text conventions.
fn decompress_resource(res: &mut Resource, variant: CipherVariant) {
    res.set_state("Decompressing...");

    if res.compressed_size == res.decompressed_size {
        res.set_state("Extracted");
        if !res.is_main_script() {
            res.mark_complete();
        }
        return;
    }

    match compression::expand(variant, res.raw_data(), res.decompressed_size as usize) {
        Ok(expanded) => {
            match variant {
                CipherVariant::Ea05 => {
                    let source = if res.tag().contains("UNICODE") && expanded.len() >= 2 {
                        decode_text(&expanded[2..], true)
                    } else {
                        decode_text(&expanded, false)
                    };
                    res.set_source(source);
                    res.set_kind(ResourceKind::Text);
                }
                CipherVariant::Ea06 => {
                    res.set_kind(ResourceKind::Binary);
                }
                CipherVariant::Legacy => {
                    res.set_source(decode_text(&expanded, variant.is_unicode()));
                    res.set_kind(ResourceKind::Text);
                }
            }
            res.set_raw_data(expanded);
            res.set_status(ResourceStatus::Ok);
            res.set_state("Decompressed");
            res.advance_source_state(SourceState::Decompressed);

            if !res.is_main_script() {
                res.mark_complete();
            }
        }
        Err(_) => {
            res.set_status(ResourceStatus::InvalidCompressedHeader);
            res.set_state("Invalid Compressed File Format!");
        }
    }
}
