mod helpers;

use helpers::*;
use macropanel::{PanelConfig, PanelError, Pipeline, SeriesSpec};

#[test]
fn build_requires_a_source() {
    let err = Pipeline::builder()
        .series(SeriesSpec::new("pcpi"))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, PanelError::InvalidArg(ref m) if m.contains("with_source")));
}

#[test]
fn build_requires_a_series() {
    let err = mock_builder().build().err().unwrap();
    assert!(matches!(err, PanelError::InvalidArg(ref m) if m.contains("series")));
}

#[test]
fn same_key_needs_distinct_suffixes() {
    let err = mock_builder()
        .series(SeriesSpec::new("pcpi"))
        .series(SeriesSpec::new("pcpi"))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, PanelError::InvalidArg(_)));

    let ok = mock_builder()
        .series(SeriesSpec::new("pcpi").suffix("_a"))
        .series(SeriesSpec::new("pcpi").suffix("_b"))
        .build();
    assert!(ok.is_ok());
}

#[test]
fn empty_key_and_anchor_are_rejected() {
    assert!(mock_builder().series(SeriesSpec::new(" ")).build().is_err());
    assert!(
        mock_builder()
            .series(SeriesSpec::new("pcpi"))
            .anchor("")
            .build()
            .is_err()
    );
}

#[test]
fn config_replaces_knobs() {
    let p = mock_builder()
        .series(SeriesSpec::new("pcpi"))
        .anchor("Raw")
        .config(PanelConfig {
            anchor: None,
            verify_frequency: false,
        })
        .build()
        .unwrap();
    assert_eq!(p.config().anchor, None);
    assert!(!p.config().verify_frequency);
    assert_eq!(p.series().len(), 1);
}
