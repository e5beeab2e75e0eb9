//! Record-structured parsing of a located script container.
//!
//! A container is a run of `FILE` records, each carrying obfuscated lengths,
//! sizes and keystream-encrypted strings and payload. The parser walks the
//! records in order with one cipher variant governing every field. Running
//! off the end of the container mid-field is the *normal* end-of-records
//! condition, not an error; only an oversized compressed payload aborts the
//! unpack.

use crate::{
    file::io::read_le_at,
    keys::{CipherVariant, SeedMode, PAYLOAD_SEED_BIAS},
    script::resource::{is_printable, Resource, SourceState},
    Result,
};

/// Mask over the legacy password length field.
const PASSWORD_LEN_MASK: i32 = 0xFAC1;

/// Keystream seed for the legacy password blob.
const PASSWORD_SEED: i32 = 0xC3D2;

/// Parse every record of `container` under `variant`.
///
/// Legacy containers open with an encrypted password blob that both selects
/// the old-format keystream (when it fails the printability heuristic) and
/// folds its signed byte sum into every payload seed.
///
/// # Errors
/// Returns [`crate::Error::InvalidCompressedSize`] when a record declares a
/// payload at least as large as the container; all other malformations end
/// the walk cleanly with the records decoded so far.
pub(crate) fn parse_records(
    container: &[u8],
    variant: CipherVariant,
    legacy: bool,
) -> Result<Vec<Resource>> {
    let schedule = variant.schedule();
    let mut resources = Vec::new();

    let mut pos = 0x28usize;
    let mut old_mode = false;
    let mut password_sum = 0i32;

    if legacy {
        let mut at = 0x11usize;
        let Ok(raw) = read_le_at::<i32>(container, &mut at) else {
            return Ok(resources);
        };
        let password_len = raw ^ PASSWORD_LEN_MASK;
        if password_len < 0 || 0x15 + password_len as usize > container.len() {
            return Ok(resources);
        }
        let password_len = password_len as usize;

        let blob = &container[0x15..0x15 + password_len];
        let mut password = blob.to_vec();
        variant.decode_bytes(&mut password, PASSWORD_SEED, SeedMode::Field, false);
        if !is_printable(&password) {
            old_mode = true;
            password.copy_from_slice(blob);
            variant.decode_bytes(&mut password, PASSWORD_SEED, SeedMode::Field, true);
        }
        password_sum = password.iter().map(|&b| i32::from(b as i8)).sum();
        pos = 0x15 + password_len;
    }

    while pos < container.len() {
        // the 4-byte FILE marker
        pos += 4;
        if pos >= container.len() {
            break;
        }

        let Ok(raw) = read_le_at::<i32>(container, &mut pos) else {
            break;
        };
        let tag_len = raw ^ schedule.tag_size;
        if tag_len < 0 {
            break;
        }
        let tag_len = if schedule.unicode {
            tag_len as usize * 2
        } else {
            tag_len as usize
        };
        if tag_len >= container.len() - pos {
            break;
        }
        let tag = variant.decode_string(&container[pos..pos + tag_len], schedule.tag, old_mode);
        pos += tag_len;
        if pos >= container.len() {
            break;
        }

        let Ok(raw) = read_le_at::<i32>(container, &mut pos) else {
            break;
        };
        let path_len = raw ^ schedule.path_size;
        if path_len < 0 {
            break;
        }
        let path_len = if schedule.unicode {
            path_len as usize * 2
        } else {
            path_len as usize
        };
        if path_len >= container.len() - pos {
            break;
        }
        let path = variant.decode_string(&container[pos..pos + path_len], schedule.path, old_mode);
        pos += path_len;
        if pos >= container.len() {
            break;
        }

        let is_compressed = container[pos] != 0;
        pos += 1;
        if pos >= container.len() {
            break;
        }

        let Ok(raw) = read_le_at::<i32>(container, &mut pos) else {
            break;
        };
        let compressed_size = (raw ^ schedule.compressed_size) as u32;
        if compressed_size as usize >= container.len() {
            return Err(crate::Error::InvalidCompressedSize);
        }

        let Ok(raw) = read_le_at::<i32>(container, &mut pos) else {
            break;
        };
        let decompressed_size = (raw ^ schedule.decompressed_size) as u32;

        let mut checksum = None;
        if !legacy {
            let Ok(raw) = read_le_at::<i32>(container, &mut pos) else {
                break;
            };
            checksum = Some((raw ^ schedule.checksum) as u32);
        }

        let mut creation_time = None;
        let mut last_write_time = None;
        if !old_mode {
            let Ok(times) = read_timestamps(container, &mut pos) else {
                break;
            };
            creation_time = Some(times.0);
            last_write_time = Some(times.1);
        }

        let mut resource = Resource::new(tag);
        resource.path = path;
        resource.is_compressed = is_compressed;
        resource.compressed_size = compressed_size;
        resource.decompressed_size = decompressed_size;
        resource.checksum = checksum;
        resource.creation_time = creation_time;
        resource.last_write_time = last_write_time;
        resource.unicode = schedule.unicode;

        if compressed_size > 0 {
            if pos + compressed_size as usize > container.len() {
                break;
            }
            let mut payload = container[pos..pos + compressed_size as usize].to_vec();
            let mut seed = schedule.data;
            if legacy {
                seed = seed.wrapping_sub(PAYLOAD_SEED_BIAS).wrapping_add(password_sum);
            }
            variant.decode_bytes(&mut payload, seed, SeedMode::Payload, old_mode);
            resource.set_raw_data(payload);
            pos += compressed_size as usize;
        }

        resource.advance_source_state(SourceState::Extracted);
        resource.set_state("Extracted");
        resources.push(resource);
    }

    Ok(resources)
}

/// Two FILETIME-style stamps, each assembled high dword first.
fn read_timestamps(container: &[u8], pos: &mut usize) -> Result<(u64, u64)> {
    let mut read_one = |pos: &mut usize| -> Result<u64> {
        let high = read_le_at::<u32>(container, pos)?;
        let low = read_le_at::<u32>(container, pos)?;
        Ok((u64::from(high) << 32) | u64::from(low))
    };
    let creation = read_one(pos)?;
    let last_write = read_one(pos)?;
    Ok((creation, last_write))
}
