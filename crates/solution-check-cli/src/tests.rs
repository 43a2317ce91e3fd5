// solution-check-cli/src/tests.rs
// ============================================================================
// Module: CLI Library Tests
// Description: Unit tests for the message catalog and audit sink selection.
// Purpose: Keep locales in parity and sink routing faithful to config.
// Dependencies: solution-check-cli i18n and audit modules
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only panic-based assertions are permitted."
)]

use std::collections::BTreeSet;
use std::fs;

use solution_check_config::AuditConfig;
use solution_check_config::AuditSinkKind;
use solution_check_core::CheckAuditEvent;
use solution_check_core::CheckAuditSink;

use crate::audit::FileAuditSink;
use crate::audit::build_audit_sink;
use crate::i18n::Locale;
use crate::i18n::MessageArg;
use crate::i18n::SUPPORTED_LOCALES;
use crate::i18n::catalog_entries_for;
use crate::i18n::catalog_for;
use crate::i18n::translate_for;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Collects `{name}` placeholders from a template.
fn placeholders(template: &str) -> BTreeSet<&str> {
    template
        .split('{')
        .skip(1)
        .filter_map(|rest| rest.split_once('}').map(|(name, _)| name))
        .collect()
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

#[test]
fn catalogs_have_matching_keys() {
    let en_keys: BTreeSet<&str> = catalog_for(Locale::En).keys().copied().collect();
    for locale in SUPPORTED_LOCALES {
        let keys: BTreeSet<&str> = catalog_for(*locale).keys().copied().collect();
        assert_eq!(en_keys, keys, "locale catalogs must stay in parity ({locale:?})");
    }
}

#[test]
fn catalogs_have_unique_keys() {
    for locale in SUPPORTED_LOCALES {
        let entries = catalog_entries_for(*locale);
        let keys: BTreeSet<&str> = entries.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys.len(), entries.len(), "duplicate catalog key ({locale:?})");
    }
}

#[test]
fn placeholders_match_english() {
    let en = catalog_for(Locale::En);
    for locale in SUPPORTED_LOCALES {
        for (key, template) in catalog_entries_for(*locale) {
            let english = en.get(key).copied().expect("english key exists");
            assert_eq!(
                placeholders(english),
                placeholders(template),
                "placeholder mismatch for '{key}' ({locale:?})"
            );
        }
    }
}

#[test]
fn locale_parse_accepts_region_tags_and_case() {
    assert_eq!(Locale::parse("EN"), Some(Locale::En));
    assert_eq!(Locale::parse("en-US"), Some(Locale::En));
    assert_eq!(Locale::parse("ca_ES"), Some(Locale::Ca));
    assert_eq!(Locale::parse(""), None);
    assert_eq!(Locale::parse("de"), None);
    assert_eq!(Locale::Ca.as_str(), "ca");
}

#[test]
fn translate_substitutes_placeholders() {
    let output = translate_for(
        Locale::En,
        "demo.run.entry",
        vec![MessageArg::new("input", "input2"), MessageArg::new("passed", "true")],
    );
    assert_eq!(output, "Test with input: input2 passed: true");
}

#[test]
fn translate_falls_back_to_key() {
    assert_eq!(translate_for(Locale::Ca, "missing.key", Vec::new()), "missing.key");
}

// ============================================================================
// SECTION: Audit
// ============================================================================

#[test]
fn file_sink_appends_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");
    let sink = FileAuditSink::new(&path).unwrap();
    sink.record(&CheckAuditEvent::comparison_failed("Echo task", 1, "input is 9 bytes (limit 8)"));
    sink.record(&CheckAuditEvent::suite_count_mismatch("Echo task", 3, 2));

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> =
        contents.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["event"], "comparison_failed");
    assert_eq!(lines[0]["test_index"], 1);
    assert_eq!(lines[1]["reported_count"], 3);
}

#[test]
fn file_sink_selection_requires_path() {
    let config = AuditConfig {
        sink: AuditSinkKind::File,
        path: None,
    };
    assert!(build_audit_sink(&config).is_err());
}

#[test]
fn file_sink_selection_opens_destination() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested-audit.jsonl");
    let config = AuditConfig {
        sink: AuditSinkKind::File,
        path: Some(path.clone()),
    };
    let sink = build_audit_sink(&config).unwrap();
    sink.record(&CheckAuditEvent::suite_count_mismatch("Echo task", 3, 2));
    assert!(fs::read_to_string(&path).unwrap().contains("suite_count_mismatch"));
}
