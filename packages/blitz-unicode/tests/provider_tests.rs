mod common;

use std::sync::Arc;
use std::thread;

use blitz_unicode::provider::format::{FORMAT_VERSION, MAGIC};
use blitz_unicode::{
    BidiClass, Direction, GraphemeBreaker, LineBreakAlgorithm, Script, ScriptAnalyzer,
    UnicodeDataBuilder, UnicodeDataError, UnicodeDataProvider, MAX_CODEPOINT,
};

use common::{provider, UCD_DIR};

#[test]
fn blob_round_trip_preserves_every_table() {
    let bytes = provider().encode();
    assert_eq!(&bytes[..4], &MAGIC);

    let loaded = UnicodeDataProvider::load(&bytes).unwrap();
    assert_eq!(&loaded, provider());
    assert_eq!(loaded.format_version(), FORMAT_VERSION);
    assert_eq!(loaded.encode(), bytes);
}

#[test]
fn builder_encode_matches_provider_encode() {
    let bytes = UnicodeDataBuilder::from_ucd_dir(UCD_DIR)
        .and_then(UnicodeDataBuilder::encode)
        .unwrap();
    assert_eq!(bytes, provider().encode());
}

#[test]
fn load_file_reads_a_written_blob() {
    let path = std::env::temp_dir().join(format!("blitz-unicode-{}.utxd", std::process::id()));
    std::fs::write(&path, provider().encode()).unwrap();
    let loaded = UnicodeDataProvider::load_file(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(&loaded.unwrap(), provider());
}

#[test]
fn load_file_reports_missing_files() {
    let err = UnicodeDataProvider::load_file("/nonexistent/unicode.utxd").unwrap_err();
    assert!(matches!(err, UnicodeDataError::Io { .. }));
}

#[test]
fn rejects_foreign_and_outdated_blobs() {
    let mut bytes = provider().encode();

    bytes[4..6].copy_from_slice(&(FORMAT_VERSION - 1).to_le_bytes());
    match UnicodeDataProvider::load(&bytes) {
        Err(UnicodeDataError::UnsupportedVersion { found, supported }) => {
            assert_eq!(found, FORMAT_VERSION - 1);
            assert_eq!(supported, FORMAT_VERSION);
        }
        other => panic!("expected a version error, got {other:?}"),
    }

    bytes[..4].copy_from_slice(b"UTXE");
    assert!(matches!(
        UnicodeDataProvider::load(&bytes),
        Err(UnicodeDataError::BadMagic { .. })
    ));
}

#[test]
fn truncated_blobs_fail_to_load() {
    let bytes = provider().encode();
    for len in [0, 3, 8, bytes.len() / 2, bytes.len() - 1] {
        assert!(
            UnicodeDataProvider::load(&bytes[..len]).is_err(),
            "prefix of {len} bytes loaded"
        );
    }
}

#[test]
fn every_codepoint_has_a_value() {
    let data = provider();
    for cp in (0..=MAX_CODEPOINT).step_by(97).chain([MAX_CODEPOINT, MAX_CODEPOINT + 1]) {
        let _ = data.bidi_class(cp);
        let _ = data.script(cp);
        let _ = data.line_break_class(cp);
        let _ = data.grapheme_break_class(cp);
        let _ = data.general_category(cp);
        let _ = data.east_asian_width(cp);
        let _ = data.flags(cp);
        let _ = data.script_extensions(cp);
        let _ = data.mirror(cp);
    }
    // Unlisted codepoints fall back to the UCD defaults.
    assert_eq!(data.bidi_class(0x0590), BidiClass::R);
    assert_eq!(data.bidi_class(0xFDD0), BidiClass::BN);
    assert_eq!(data.script(0xE0080), Script::Unknown);
}

#[test]
fn one_provider_serves_many_threads() {
    let data = Arc::new(provider().clone());
    let text: Arc<Vec<u32>> = Arc::new("abc \u{05D0}\u{05D1} 123 \u{4E00}\u{4E01}".chars().map(u32::from).collect());

    let expected_levels = blitz_unicode::BidiEngine::new(&data)
        .process(&text, Direction::Auto)
        .levels;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let data = Arc::clone(&data);
            let text = Arc::clone(&text);
            thread::spawn(move || {
                let mut results = Vec::new();
                for _ in 0..50 {
                    let levels = blitz_unicode::BidiEngine::new(&data)
                        .process(&text, Direction::Auto)
                        .levels;
                    let graphemes = GraphemeBreaker::new(&data).break_opportunities(&text);
                    let lines = LineBreakAlgorithm::new(&data).break_opportunities(&text);
                    let scripts = ScriptAnalyzer::new(&data).analyze_to_vec(&text);
                    results.push((levels, graphemes.len(), lines.len(), scripts.len()));
                }
                results
            })
        })
        .collect();

    for handle in handles {
        for (levels, graphemes, lines, scripts) in handle.join().unwrap() {
            assert_eq!(levels, expected_levels);
            assert_eq!(graphemes, text.len() + 1);
            assert_eq!(lines, text.len() + 1);
            assert_eq!(scripts, text.len());
        }
    }
}
