use super::*;

#[test]
fn defaults_resolve_unchanged() {
    let r = PosterOptions::default().resolve().unwrap();
    assert_eq!(
        r,
        ResolvedOptions {
            size: DEFAULT_SIZE,
            cells: None,
            margin: 0,
            motif: true,
        }
    );
}

#[test]
fn zero_values_are_rejected() {
    let err = PosterOptions::default().with_size(0).resolve().unwrap_err();
    assert!(matches!(err, PosterError::Validation(_)));

    let err = PosterOptions::default().with_cells(0).resolve().unwrap_err();
    assert!(matches!(err, PosterError::Validation(_)));
}

#[test]
fn out_of_range_values_are_clamped() {
    let r = PosterOptions::default()
        .with_size(10)
        .with_cells(1000)
        .resolve()
        .unwrap();
    assert_eq!(r.size, MIN_SIZE);
    assert_eq!(r.cells, Some(MAX_CELLS));

    let r = PosterOptions::default()
        .with_size(u32::MAX)
        .resolve()
        .unwrap();
    assert_eq!(r.size, MAX_SIZE);
}

#[test]
fn margin_must_leave_interior() {
    let err = PosterOptions::default()
        .with_size(100)
        .with_margin(50)
        .resolve()
        .unwrap_err();
    assert!(matches!(err, PosterError::Validation(_)));

    let r = PosterOptions::default()
        .with_size(100)
        .with_margin(49)
        .resolve()
        .unwrap();
    assert_eq!(r.margin, 49);
}

#[test]
fn resolved_accessors_report_clamped_values() {
    let r = PosterOptions::default()
        .with_size(20_000)
        .with_cells(7)
        .with_margin(12)
        .with_motif(false)
        .resolve()
        .unwrap();
    assert_eq!(r.size(), MAX_SIZE);
    assert_eq!(r.cells(), Some(7));
    assert_eq!(r.margin(), 12);
    assert!(!r.motif());
}

#[test]
fn margin_is_checked_against_clamped_size() {
    // size 10 clamps to 64, so a 20px margin still leaves 24px.
    let r = PosterOptions::default()
        .with_size(10)
        .with_margin(20)
        .resolve()
        .unwrap();
    assert_eq!(r.size, 64);
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let opts = PosterOptions::from_json_str(r#"{ "cells": 12, "motif": false }"#).unwrap();
    assert_eq!(opts.size, DEFAULT_SIZE);
    assert_eq!(opts.cells, Some(12));
    assert!(!opts.motif);
}

#[test]
fn json_rejects_unknown_keys() {
    let err = PosterOptions::from_json_str(r#"{ "colour": "red" }"#).unwrap_err();
    assert!(matches!(err, PosterError::Serde(_)));
}

#[test]
fn missing_config_file_is_reported() {
    let err = PosterOptions::from_path(Path::new("target/does-not-exist/options.json"))
        .unwrap_err();
    assert!(err.to_string().contains("read options"));
}
