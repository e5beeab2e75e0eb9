//! The decoded resource record and its observable lifecycle.
//!
//! Each `FILE` entry in a container decodes into one [`Resource`]. The record
//! is mutated in place as it moves through the pipeline — decrypt, decompress,
//! decompile, indent — with [`SourceState`] advancing monotonically and the
//! per-record `state` string exposing progress to whatever shell sits on top.

use strum::Display;

use crate::script::checksum;

/// How far along the extraction pipeline a resource's payload has travelled.
///
/// The state only ever advances; a completed stage is never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum SourceState {
    /// Raw payload decrypted out of the container
    Extracted,
    /// Payload expanded to its declared size
    Decompressed,
    /// Token stream rebuilt into source text
    Decompiled,
    /// Source text rewritten by the external formatter
    Indented,
}

/// Whether a resource's payload renders as text or as a hex dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResourceKind {
    /// Printable ASCII or decoded script text
    Text,
    /// Arbitrary bytes
    Binary,
}

/// Health of one resource record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResourceStatus {
    /// The record decoded cleanly so far
    Ok,
    /// The compressed payload has no recognized magic; the record is pinned
    /// in its extracted state
    InvalidCompressedHeader,
}

/// Characters considered printable when sniffing payload types, matching the
/// classic C locale set plus common whitespace.
pub(crate) fn is_printable(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .all(|&b| b.is_ascii_graphic() || matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C))
}

/// Preview length cap, in characters of rendered output.
const PREVIEW_LIMIT: usize = 1024;

const PREVIEW_TRAILER: &str = "\r\n\r\nSave the resource to dump the entire data!\r\n";

/// One decoded `FILE` record from a script container.
///
/// Created by the record parser; the decompressor and decompiler replace the
/// payload in place as the pipeline advances. A resource whose tag contains
/// `SCRIPT<` is the main script body and alone is eligible for decompilation.
///
/// # Examples
///
/// ```rust,ignore
/// for res in object.resources() {
///     println!("{} ({} -> {} bytes): {}",
///         res.short_tag(), res.compressed_size, res.decompressed_size, res.state());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Resource {
    tag: String,
    short_tag: String,
    /// Original path recorded at compile time
    pub path: String,
    /// Compressed flag as stored in the record
    pub is_compressed: bool,
    /// Payload size inside the container
    pub compressed_size: u32,
    /// Declared size after expansion
    pub decompressed_size: u32,
    /// Stored payload checksum; legacy containers carry none
    pub checksum: Option<u32>,
    /// FILETIME-style creation stamp; absent on old-format containers
    pub creation_time: Option<u64>,
    /// FILETIME-style modification stamp; absent on old-format containers
    pub last_write_time: Option<u64>,
    raw_data: Vec<u8>,
    source: String,
    kind: ResourceKind,
    status: ResourceStatus,
    source_state: SourceState,
    state: String,
    complete: bool,
    pub(crate) unicode: bool,
}

impl Resource {
    pub(crate) fn new(tag: String) -> Resource {
        let mut resource = Resource {
            tag: String::new(),
            short_tag: String::new(),
            path: String::new(),
            is_compressed: false,
            compressed_size: 0,
            decompressed_size: 0,
            checksum: None,
            creation_time: None,
            last_write_time: None,
            raw_data: Vec::new(),
            source: String::new(),
            kind: ResourceKind::Binary,
            status: ResourceStatus::Ok,
            source_state: SourceState::Extracted,
            state: String::new(),
            complete: false,
            unicode: false,
        };
        resource.set_tag(tag);
        resource
    }

    /// The full tag string recorded in the container.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The display key: everything after the last `\` of the tag.
    ///
    /// Two records can share a short tag; table lookups then silently resolve
    /// to the later record.
    #[must_use]
    pub fn short_tag(&self) -> &str {
        &self.short_tag
    }

    pub(crate) fn set_tag(&mut self, tag: String) {
        self.short_tag = match tag.rfind('\\') {
            Some(pos) => tag[pos + 1..].to_string(),
            None => tag.clone(),
        };
        self.tag = tag;
    }

    /// Whether this record holds the tokenized main script body.
    #[must_use]
    pub fn is_main_script(&self) -> bool {
        self.tag.contains("SCRIPT<")
    }

    /// The current payload bytes: decrypted, decompressed or decompiled
    /// depending on how far the pipeline has run.
    #[must_use]
    pub fn raw_data(&self) -> &[u8] {
        &self.raw_data
    }

    pub(crate) fn set_raw_data(&mut self, data: Vec<u8>) {
        self.raw_data = data;
    }

    /// The reconstructed script text, if any stage has produced one.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn set_source(&mut self, source: String) {
        self.source = source;
    }

    /// The observable progress string for this record.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    pub(crate) fn set_state(&mut self, state: &str) {
        self.state = state.to_string();
    }

    /// The record's health; see [`ResourceStatus`].
    #[must_use]
    pub fn status(&self) -> ResourceStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: ResourceStatus) {
        self.status = status;
    }

    /// Text or binary payload classification.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub(crate) fn set_kind(&mut self, kind: ResourceKind) {
        self.kind = kind;
    }

    /// Pipeline position of the payload; see [`SourceState`].
    #[must_use]
    pub fn source_state(&self) -> SourceState {
        self.source_state
    }

    /// Advance the pipeline state. Regressions are ignored: the state is
    /// monotonic by contract.
    pub(crate) fn advance_source_state(&mut self, state: SourceState) {
        if state > self.source_state {
            self.source_state = state;
        }
    }

    /// Whether the pipeline is finished with this record.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub(crate) fn mark_complete(&mut self) {
        self.complete = true;
    }

    /// Verify the payload against the checksum stored in the record.
    ///
    /// Returns `None` for legacy records, which carry no checksum.
    #[must_use]
    pub fn verify_checksum(&self) -> Option<bool> {
        self.checksum
            .map(|stored| checksum(&self.raw_data) == stored)
    }

    /// Render a bounded preview of the payload.
    ///
    /// Script resources and printable payloads render as text, anything else
    /// as a hex dump of twelve bytes per row; both are capped at 1024 output
    /// characters with a trailer noting the truncation. Sniffing a printable
    /// payload reclassifies the resource as [`ResourceKind::Text`].
    pub fn preview(&mut self) -> String {
        if self.is_main_script() && !self.source.is_empty() {
            return limit_text(&self.source);
        }

        if self.raw_data.is_empty() {
            return String::new();
        }

        if is_printable(&self.raw_data) {
            self.kind = ResourceKind::Text;
            let text: String = self.raw_data.iter().map(|&b| b as char).collect();
            return limit_text(&text);
        }

        self.kind = ResourceKind::Binary;
        let mut buf = String::new();
        for (i, byte) in self.raw_data.iter().enumerate() {
            if buf.len() >= PREVIEW_LIMIT {
                buf.push_str(PREVIEW_TRAILER);
                break;
            }
            if i > 0 && i % 12 == 0 {
                buf.push_str("\r\n");
            }
            buf.push_str(&format!("{:02X} ", byte));
        }
        buf
    }
}

fn limit_text(text: &str) -> String {
    if text.len() < PREVIEW_LIMIT {
        text.to_string()
    } else {
        let cut: String = text.chars().take(PREVIEW_LIMIT).collect();
        cut + PREVIEW_TRAILER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_tag_is_last_path_component() {
        let res = Resource::new(">>>AUTOIT SCRIPT<<<".to_string());
        assert_eq!(res.short_tag(), ">>>AUTOIT SCRIPT<<<");

        let res = Resource::new("C:\\build\\out\\payload.bin".to_string());
        assert_eq!(res.short_tag(), "payload.bin");
    }

    #[test]
    fn main_script_detection() {
        let res = Resource::new("update.dat".to_string());
        assert!(!res.is_main_script());

        let res = Resource::new(">>>AUTOIT SCRIPT<<<".to_string());
        assert!(res.is_main_script());
    }

    #[test]
    fn source_state_never_regresses() {
        let mut res = Resource::new("X".to_string());
        res.advance_source_state(SourceState::Decompiled);
        res.advance_source_state(SourceState::Decompressed);
        assert_eq!(res.source_state(), SourceState::Decompiled);
    }

    #[test]
    fn printable_sniffing() {
        assert!(is_printable(b"Hello, world!\r\n"));
        assert!(!is_printable(&[0x00, 0x41]));
        assert!(!is_printable(&[0x80]));
    }

    #[test]
    fn preview_hex_dump() {
        let mut res = Resource::new("bin".to_string());
        res.set_raw_data(vec![0x00, 0xFF, 0x41]);
        let dump = res.preview();
        assert_eq!(res.kind(), ResourceKind::Binary);
        assert!(dump.starts_with("00 FF 41"));
    }

    #[test]
    fn preview_reclassifies_text() {
        let mut res = Resource::new("ini".to_string());
        res.set_raw_data(b"[Settings]\r\nkey=value\r\n".to_vec());
        let text = res.preview();
        assert_eq!(res.kind(), ResourceKind::Text);
        assert!(text.starts_with("[Settings]"));
    }

    #[test]
    fn checksum_verification() {
        let mut res = Resource::new("data".to_string());
        res.set_raw_data(b"AB".to_vec());
        assert_eq!(res.verify_checksum(), None);

        res.checksum = Some(0x00C4_0083);
        assert_eq!(res.verify_checksum(), Some(true));

        res.checksum = Some(0xDEAD_BEEF);
        assert_eq!(res.verify_checksum(), Some(false));
    }
}
