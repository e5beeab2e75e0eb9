//! Brute-force signature location for embedded script containers.
//!
//! A packed executable hides its script container behind a single-byte XOR
//! chosen by the producer at build time and applied across the whole file, so
//! the container cannot be decoded in place — every one of the 256 candidate
//! keys has to be tried against the 16-byte header pattern. The pattern
//! constant is itself stored pre-XORed with 5; the true needle is recovered
//! before the sweep starts.
//!
//! The sweep is embarrassingly parallel across trial keys and runs on rayon.
//! The winner is the *lowest* key that produces at least one match, exactly
//! as a sequential short-circuiting scan would pick it; `find_map_first`
//! preserves that ordering.
//!
//! # Examples
//!
//! ```rust
//! use au3scope::scanner;
//!
//! // No header pattern anywhere: the sweep comes up empty.
//! assert!(scanner::locate(&[0u8; 256]).is_err());
//! ```

use rayon::prelude::*;

use crate::Result;

/// The 16-byte container header pattern, stored XORed with 5.
pub(crate) const HEADER_PATTERN: [u8; 16] = [
    166, 77, 78, 187, 157, 105, 79, 172, 156, 73, 86, 15, 131, 211, 77, 120,
];

/// The span of one located script container within the decoded image.
#[derive(Debug, Clone)]
pub struct ContainerSpan {
    /// Byte offset of the container header within the decoded image
    pub start: usize,
    /// Exclusive end offset of the container
    pub end: usize,
    /// The 8-byte subtype marker, e.g. `AU3!EA05` (synthesized for legacy containers)
    pub subtype: String,
    /// Whether this span was produced by the legacy fallback
    pub legacy: bool,
}

/// The result of a successful signature sweep.
#[derive(Debug)]
pub struct Located {
    /// The winning XOR key
    pub key: u8,
    /// The whole input, decoded with the winning key
    pub image: Vec<u8>,
    /// Candidate containers, in encounter order
    pub containers: Vec<ContainerSpan>,
}

/// Locate script containers inside `data`.
///
/// Tries every single-byte XOR key in increasing order against the header
/// pattern and decodes the candidates found under the first matching key.
/// Candidates whose subtype marker does not start with `AU3!` are dropped;
/// if none survives, the first match becomes a legacy container reaching to
/// four bytes short of the end of the image.
///
/// # Errors
/// Returns [`crate::Error::ScriptNotFound`] when no key produces a match.
pub fn locate(data: &[u8]) -> Result<Located> {
    let needle: [u8; 16] = HEADER_PATTERN.map(|b| b ^ 5);

    let (key, image, positions) = (0u32..256)
        .into_par_iter()
        .find_map_first(|trial| {
            let mut scratch = data.to_vec();
            for byte in &mut scratch {
                *byte ^= trial as u8;
            }
            let positions = find_all(&scratch, &needle);
            if positions.is_empty() {
                None
            } else {
                Some((trial as u8, scratch, positions))
            }
        })
        .ok_or(crate::Error::ScriptNotFound)?;

    let mut containers = Vec::new();
    for &start in &positions {
        let Some(subtype) = image.get(start + 0x10..start + 0x18) else {
            continue;
        };
        if !subtype.starts_with(b"AU3!") {
            continue;
        }

        let end = find(&image, subtype, start + 0x19).unwrap_or(image.len());
        containers.push(ContainerSpan {
            start,
            end,
            subtype: String::from_utf8_lossy(subtype).into_owned(),
            legacy: false,
        });
    }

    if containers.is_empty() {
        containers.push(ContainerSpan {
            start: positions[0],
            end: image.len().saturating_sub(4),
            subtype: "AU3!OLD".to_string(),
            legacy: true,
        });
    }

    Ok(Located {
        key,
        image,
        containers,
    })
}

/// Naive substring search starting at `from`.
pub(crate) fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&i| &haystack[i..i + needle.len()] == needle)
}

/// All match positions of `needle` inside `haystack`, in increasing order.
pub(crate) fn find_all(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut from = 0;
    while let Some(pos) = find(haystack, needle, from) {
        positions.push(pos);
        from = pos + 1;
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(key: u8, offset: usize, total: usize) -> Vec<u8> {
        let needle: [u8; 16] = HEADER_PATTERN.map(|b| b ^ 5);
        let mut data = vec![0u8; total];
        for (i, &b) in needle.iter().enumerate() {
            data[offset + i] = b ^ key;
        }
        data
    }

    #[test]
    fn recovers_planted_key_and_offset() {
        let data = plant(0x42, 7, 128);
        let located = locate(&data).unwrap();
        assert_eq!(located.key, 0x42);
        assert_eq!(located.containers.len(), 1);
        assert_eq!(located.containers[0].start, 7);
    }

    #[test]
    fn lowest_key_wins() {
        // The same pattern planted under two keys: the sweep must report the
        // lower one, since a sequential scan short-circuits in key order.
        let mut data = plant(0x10, 0, 160);
        let second = plant(0x03, 80, 160);
        data[80..96].copy_from_slice(&second[80..96]);

        // Keys differ, so under key 0x03 only the second plant matches.
        let located = locate(&data).unwrap();
        assert_eq!(located.key, 0x03);
        assert_eq!(located.containers[0].start, 80);
    }

    #[test]
    fn key_zero_plant_found_at_zero() {
        let data = plant(0x00, 32, 64);
        let located = locate(&data).unwrap();
        assert_eq!(located.key, 0x00);
    }

    #[test]
    fn missing_pattern_is_script_not_found() {
        let err = locate(&[0xAAu8; 512]).unwrap_err();
        assert!(matches!(err, crate::Error::ScriptNotFound));
    }

    #[test]
    fn legacy_fallback_when_no_subtype() {
        // A bare pattern with no AU3! marker behind it: the first candidate
        // becomes a legacy container ending four bytes short of the image.
        let data = plant(0x05, 16, 96);
        let located = locate(&data).unwrap();
        let span = &located.containers[0];
        assert!(span.legacy);
        assert_eq!(span.subtype, "AU3!OLD");
        assert_eq!(span.start, 16);
        assert_eq!(span.end, 92);
    }

    #[test]
    fn subtype_bounds_the_container() {
        let mut data = plant(0x00, 0, 128);
        data[0x10..0x18].copy_from_slice(b"AU3!EA05");
        data[0x40..0x48].copy_from_slice(b"AU3!EA05");

        let located = locate(&data).unwrap();
        let span = &located.containers[0];
        assert!(!span.legacy);
        assert_eq!(span.subtype, "AU3!EA05");
        assert_eq!(span.end, 0x40);
    }
}
