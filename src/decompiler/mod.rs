//! Token-stream decompilation of the main script body.
//!
//! A compiled script is stored as a flat token stream, not a tree: a 32-bit
//! line count followed by single-byte opcodes. Each opcode contributes one
//! token — a fixed operator glyph, a table-indexed keyword or built-in name,
//! a numeric literal read from fixed-width bytes, or a length-prefixed
//! self-XOR-obfuscated string (optionally sigil-prefixed for variables,
//! macros and member accesses). The end-of-line opcode joins everything
//! accumulated since the previous line break with single spaces.
//!
//! Malformed streams are never fatal: decoding stops at the buffer boundary
//! and whatever tokens are pending flush as a final line.

pub(crate) mod tables;

use crate::{
    file::parser::Parser,
    script::resource::{is_printable, Resource, ResourceKind, ResourceStatus, SourceState},
};

/// End-of-line marker opcode.
const OP_EOL: u8 = 0x7F;

/// Rebuild the source text of the main script resource in place.
///
/// Preconditions mirror the pipeline contract: the record must be the main
/// script, healthy, and not yet decompiled. A payload that already is plain
/// printable text (or a unicode-tagged script) needs no tokenized decode and
/// is left untouched.
pub(crate) fn decompile(res: &mut Resource) {
    if !res.is_main_script() {
        return;
    }
    if res.status() != ResourceStatus::Ok || res.source_state() >= SourceState::Decompiled {
        return;
    }
    if is_printable(res.raw_data()) || res.tag().contains("UNICODE") {
        return;
    }

    res.set_state("Decompiling ...");

    let text = decode_stream(res.raw_data());

    res.set_kind(ResourceKind::Text);
    res.set_status(ResourceStatus::Ok);
    res.advance_source_state(SourceState::Decompiled);
    res.set_raw_data(text.clone().into_bytes());
    res.set_source(text);
    res.set_state("Decompiled");
}

/// Linearize a tokenized script stream into CRLF-terminated source lines.
fn decode_stream(data: &[u8]) -> String {
    let mut parser = Parser::new(data);
    let mut buffer = String::new();
    let mut tokens: Vec<String> = Vec::new();

    let line_count = parser.read_le::<i32>().unwrap_or(0);

    let mut lines_done = 0;
    while lines_done < line_count && parser.has_more_data() {
        let Ok(opcode) = parser.read_le::<u8>() else {
            break;
        };

        match opcode {
            OP_EOL => {
                buffer.push_str(&tokens.join(" "));
                buffer.push_str("\r\n");
                tokens.clear();
                lines_done += 1;
            }
            0x00 => {
                let Ok(index) = parser.read_le::<i32>() else {
                    break;
                };
                if let Some(word) = tables::KEYWORDS.get(index as usize) {
                    tokens.push((*word).to_string());
                }
            }
            0x01 => {
                let Ok(index) = parser.read_le::<i32>() else {
                    break;
                };
                if let Some(name) = tables::FUNCTIONS.get(index as usize) {
                    tokens.push((*name).to_string());
                }
            }
            0x05 => {
                let Ok(value) = parser.read_le::<u32>() else {
                    break;
                };
                tokens.push(format!("0x{:x}", value));
            }
            0x10 => {
                let Ok(value) = parser.read_le::<u64>() else {
                    break;
                };
                tokens.push(format!("0x{:x}", value));
            }
            0x20 => {
                let Ok(bits) = parser.read_le::<u64>() else {
                    break;
                };
                tokens.push(format!("{}", f64::from_bits(bits)));
            }
            0x30 | 0x31 | 0x34 | 0x37 => {
                let Some(s) = read_string(&mut parser) else {
                    break;
                };
                tokens.push(s);
            }
            0x32 => {
                let Some(s) = read_string(&mut parser) else {
                    break;
                };
                tokens.push(format!("@{}", s));
            }
            0x33 => {
                let Some(s) = read_string(&mut parser) else {
                    break;
                };
                tokens.push(format!("${}", s));
            }
            0x35 => {
                let Some(s) = read_string(&mut parser) else {
                    break;
                };
                tokens.push(format!(".{}", s));
            }
            0x36 => {
                let Some(s) = read_string(&mut parser) else {
                    break;
                };
                let quote = if s.contains('"') { '\'' } else { '"' };
                tokens.push(format!("{}{}{}", quote, s, quote));
            }
            0x40 => tokens.push(",".to_string()),
            0x41 => tokens.push("=".to_string()),
            0x42 => tokens.push(">".to_string()),
            0x43 => tokens.push("<".to_string()),
            0x44 => tokens.push("<>".to_string()),
            0x45 => tokens.push(">=".to_string()),
            0x46 => tokens.push("<=".to_string()),
            0x47 => tokens.push("(".to_string()),
            0x48 => tokens.push(")".to_string()),
            0x49 => tokens.push("+".to_string()),
            0x4A => tokens.push("-".to_string()),
            0x4B => tokens.push("/".to_string()),
            0x4C => tokens.push("*".to_string()),
            0x4D => tokens.push("&".to_string()),
            0x4E => tokens.push("[".to_string()),
            0x4F => tokens.push("]".to_string()),
            0x50 => tokens.push("==".to_string()),
            0x51 => tokens.push("^".to_string()),
            0x52 => tokens.push("+=".to_string()),
            0x53 => tokens.push("-=".to_string()),
            0x54 => tokens.push("/=".to_string()),
            0x55 => tokens.push("*=".to_string()),
            0x56 => tokens.push("&=".to_string()),
            0x57 => tokens.push("?".to_string()),
            0x58 => tokens.push(":".to_string()),
            _ => {}
        }
    }

    if !tokens.is_empty() {
        buffer.push_str(&tokens.join(" "));
        buffer.push_str("\r\n");
    }

    buffer
}

/// Read a length-prefixed obfuscated string token: `len` characters taken
/// from every other byte of a `2 * len` span, each XORed with the low byte
/// of the length. Returns `None` when the span runs past the buffer, which
/// ends the decode.
fn read_string(parser: &mut Parser<'_>) -> Option<String> {
    let len = parser.read_le::<i32>().ok()?;
    if len < 0 {
        return None;
    }
    let len = len as usize;
    let span = parser.take(len * 2).ok()?;

    let key = len as u8;
    let text: String = span
        .iter()
        .step_by(2)
        .map(|&b| (b ^ key) as char)
        .collect();
    Some(text)
}
