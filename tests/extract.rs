//! End-to-end extraction tests over synthetic packed images.
//!
//! Each image is a complete on-disk representation: the 16-byte container
//! header pattern, the subtype marker, and one or more `FILE` records — all
//! XORed with the producer key the scanner has to brute-force.

use au3scope::prelude::*;

// One uncompressed non-script record (tag "DATA", path "x", payload "AB"),
// EA05 container, whole image XORed with 0x42.
const E2E_IMAGE: [u8; 96] = [
    0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0xe1, 0x0a, 0x09, 0xfc, 0xda, 0x2e, 0x08,
    0xeb, 0xdb, 0x0e, 0x11, 0x48, 0xc4, 0x94, 0x0a, 0x3f, 0x03, 0x17, 0x71, 0x63, 0x07, 0x03,
    0x72, 0x77, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42,
    0x42, 0x42, 0x42, 0x04, 0x0b, 0x0e, 0x07, 0xfa, 0x6b, 0x42, 0x42, 0xf7, 0x24, 0x91, 0xd9,
    0xef, 0x6b, 0x42, 0x42, 0x62, 0x42, 0xea, 0x07, 0x42, 0x42, 0xea, 0x07, 0x42, 0x42, 0x13,
    0x81, 0x86, 0x42, 0x42, 0x42, 0x92, 0x43, 0x42, 0x42, 0x42, 0x42, 0x43, 0x42, 0x92, 0x43,
    0x40, 0x42, 0x42, 0x42, 0x28, 0x33,
];

// Two records whose tags ("A\DATA" and "DATA") collapse to the same short
// tag, XOR key 0x17.
const COLLISION_IMAGE: [u8; 157] = [
    0x17, 0x17, 0x17, 0x17, 0x17, 0x17, 0x17, 0x17, 0xb4, 0x5f, 0x5c, 0xa9, 0x8f, 0x7b, 0x5d,
    0xbe, 0x8e, 0x5b, 0x44, 0x1d, 0x91, 0xc1, 0x5f, 0x6a, 0x56, 0x42, 0x24, 0x36, 0x52, 0x56,
    0x27, 0x22, 0x17, 0x17, 0x17, 0x17, 0x17, 0x17, 0x17, 0x17, 0x17, 0x17, 0x17, 0x17, 0x17,
    0x17, 0x17, 0x17, 0x51, 0x5e, 0x5b, 0x52, 0xad, 0x3e, 0x17, 0x17, 0x46, 0x21, 0x43, 0x70,
    0x91, 0xb5, 0xb8, 0x3e, 0x17, 0x17, 0x5f, 0x9f, 0x7c, 0x17, 0xb8, 0x52, 0x17, 0x17, 0xb8,
    0x52, 0x17, 0x17, 0xed, 0xd6, 0x45, 0x11, 0x17, 0x17, 0xc7, 0x16, 0x17, 0x17, 0x17, 0x17,
    0x17, 0x17, 0xc7, 0x16, 0x16, 0x17, 0x17, 0x17, 0x5a, 0x4d, 0x12, 0x86, 0xff, 0x51, 0x5e,
    0x5b, 0x52, 0xaf, 0x3e, 0x17, 0x17, 0xa2, 0x71, 0xc4, 0x8c, 0xb8, 0x3e, 0x17, 0x17, 0x44,
    0x86, 0x76, 0x17, 0xbb, 0x52, 0x17, 0x17, 0xbb, 0x52, 0x17, 0x17, 0xb9, 0xd6, 0xd3, 0x1f,
    0x17, 0x17, 0xc7, 0x16, 0x17, 0x17, 0x17, 0x17, 0x17, 0x17, 0xc7, 0x16, 0x16, 0x17, 0x17,
    0x17, 0x4f, 0x41, 0x03, 0x9a, 0xe5, 0x66,
];

// One stored (uncompressed) tokenized main-script record decompiling to
// "$X = 1", XOR key 0xa5.
const SCRIPT_IMAGE: [u8; 129] = [
    0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0x06, 0xed, 0xee, 0x1b, 0x3d, 0xc9, 0xef,
    0x0c, 0x3c, 0xe9, 0xf6, 0xaf, 0x23, 0x73, 0xed, 0xd8, 0xe4, 0xf0, 0x96, 0x84, 0xe0, 0xe4,
    0x95, 0x90, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5,
    0xa5, 0xa5, 0xa5, 0xe3, 0xec, 0xe9, 0xe0, 0x0a, 0x8c, 0xa5, 0xa5, 0x66, 0x9d, 0xd4, 0xc9,
    0x1e, 0x46, 0x3f, 0x64, 0x71, 0xcf, 0x8e, 0xde, 0x03, 0x71, 0x79, 0x0f, 0xf8, 0x02, 0x3e,
    0x08, 0x8c, 0xa5, 0xa5, 0x8e, 0xa5, 0x1b, 0xe0, 0xa5, 0xa5, 0x1b, 0xe0, 0xa5, 0xa5, 0xc1,
    0x67, 0x98, 0xa9, 0xa5, 0xa5, 0x75, 0xa4, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0xa5, 0x75, 0xa4,
    0xa4, 0xa5, 0xa5, 0xa5, 0x8f, 0x96, 0xd2, 0x47, 0x0a, 0xb1, 0xd7, 0xdb, 0xf9, 0x65, 0x1f,
    0x41, 0xeb, 0x71, 0xf4, 0x5f, 0x46, 0xc0, 0x32, 0x40,
];

// A container whose subtype marker names a scheme that does not exist.
const UNSUPPORTED_IMAGE: [u8; 48] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xa3, 0x48, 0x4b, 0xbe, 0x98, 0x6c, 0x4a,
    0xa9, 0x99, 0x4c, 0x53, 0x0a, 0x86, 0xd6, 0x48, 0x7d, 0x41, 0x55, 0x33, 0x21, 0x45, 0x41,
    0x30, 0x37, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
];

#[test]
fn minimal_ea05_container_parses_to_one_resource() {
    let object = Au3Object::from_mem(E2E_IMAGE.to_vec()).unwrap();

    assert_eq!(object.key(), 0x42);
    assert_eq!(object.variant(), CipherVariant::Ea05);
    assert_eq!(object.resources().len(), 1);

    let res = &object.resources()[0];
    assert_eq!(res.tag(), "DATA");
    assert_eq!(res.short_tag(), "DATA");
    assert_eq!(res.path, "x");
    assert!(!res.is_compressed);
    assert_eq!(res.compressed_size, 2);
    assert_eq!(res.decompressed_size, 2);
    assert_eq!(res.raw_data(), b"AB");
    assert_eq!(res.verify_checksum(), Some(true));
    assert_eq!(res.creation_time, Some(0x01D0_0000_0000_0000));
    assert_eq!(res.last_write_time, Some(0x01D0_0001_0000_0002));
    assert_eq!(res.source_state(), SourceState::Extracted);
    assert_eq!(res.state(), "Extracted");
}

#[test]
fn stored_record_completes_without_decompression() {
    let mut object = Au3Object::from_mem(E2E_IMAGE.to_vec()).unwrap();
    object.decompress_all();

    let res = &object.resources()[0];
    assert!(res.is_complete());
    assert_eq!(res.raw_data(), b"AB");
    assert_eq!(res.source_state(), SourceState::Extracted);
    assert_eq!(res.status(), ResourceStatus::Ok);
}

#[test]
fn short_tag_collision_resolves_to_later_record() {
    let object = Au3Object::from_mem(COLLISION_IMAGE.to_vec()).unwrap();
    assert_eq!(object.resources().len(), 2);
    assert_eq!(object.resources()[0].tag(), "A\\DATA");
    assert_eq!(object.resources()[0].raw_data(), b"first");
    assert_eq!(object.resources()[1].tag(), "DATA");

    // Both records answer to "DATA"; the table lookup silently prefers the
    // later one.
    let hit = object.get("DATA").unwrap();
    assert_eq!(hit.raw_data(), b"second");
    assert_eq!(hit.path, "two");
}

#[test]
fn tokenized_script_decompiles_through_the_pipeline() {
    let mut object = Au3Object::from_mem(SCRIPT_IMAGE.to_vec()).unwrap();

    let script = object.main_script().expect("main script present");
    assert!(script.is_main_script());
    assert_eq!(script.tag(), ">>>AUTOIT SCRIPT<<<");

    object.decompress_all();
    object.decompile_main();

    let script = object.main_script().unwrap();
    assert_eq!(script.source(), "$X = 1\r\n");
    assert_eq!(script.source_state(), SourceState::Decompiled);
    assert_eq!(script.raw_data(), b"$X = 1\r\n");
    assert!(script.is_complete());
}

#[test]
fn full_pipeline_with_identity_formatter() {
    let mut object = Au3Object::from_mem(SCRIPT_IMAGE.to_vec()).unwrap();
    object.process(&IdentityFormatter, &FormatOptions::default());

    let script = object.main_script().unwrap();
    assert_eq!(script.source(), "$X = 1\r\n");
    assert_eq!(script.source_state(), SourceState::Indented);
    assert_eq!(script.state(), "Code Indented.");
    assert!(script.is_complete());
}

#[test]
fn formatter_failure_falls_back_to_decompiled_text() {
    struct FailingFormatter;
    impl SourceFormatter for FailingFormatter {
        fn format(&self, _source: &str, _options: &FormatOptions) -> au3scope::Result<String> {
            Err(au3scope::Error::Formatter("boom".into()))
        }
    }

    let mut object = Au3Object::from_mem(SCRIPT_IMAGE.to_vec()).unwrap();
    object.process(&FailingFormatter, &FormatOptions::default());

    let script = object.main_script().unwrap();
    assert_eq!(script.source(), "$X = 1\r\n");
    assert_eq!(script.source_state(), SourceState::Decompiled);
    assert!(script.is_complete());
}

#[test]
fn unsupported_subtype_is_fatal() {
    let err = Au3Object::from_mem(UNSUPPORTED_IMAGE.to_vec()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedVariant(ref s) if s == "AU3!EA07"));
}

#[test]
fn plain_data_has_no_script() {
    let err = Au3Object::from_mem(vec![0x90u8; 4096]).unwrap_err();
    assert!(matches!(err, Error::ScriptNotFound));
}
