use macropanel_types::{
    DataPaths, Feature, Frequency, PanelConfig, PanelError, PipelineManifest, SeriesSpec,
};

#[test]
fn series_spec_roundtrip() {
    let spec = SeriesSpec::new("inflation/pcpi")
        .name("Raw")
        .suffix("_pcpi")
        .features(Feature::inflation_set());

    let json = serde_json::to_string(&spec).expect("serialize spec");
    let de: SeriesSpec = serde_json::from_str(&json).expect("deserialize spec");

    assert_eq!(de, spec);
    assert_eq!(de.features.len(), 3);
    assert_eq!(de.frequency, Frequency::Monthly);
}

#[test]
fn series_spec_defaults_fill_missing_fields() {
    let de: SeriesSpec =
        serde_json::from_str(r#"{"key":"gdp","frequency":"quarterly"}"#).expect("deserialize");
    assert_eq!(de.key, "gdp");
    assert_eq!(de.frequency, Frequency::Quarterly);
    assert!(de.suffix.is_empty());
    assert!(de.name.is_none());
    assert!(de.features.is_empty());
}

#[test]
fn panel_config_defaults_verify_frequency() {
    let de: PanelConfig = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(de, PanelConfig::default());
    assert!(de.verify_frequency);
    assert!(de.anchor.is_none());
}

#[test]
fn manifest_roundtrip() {
    let manifest = PipelineManifest {
        paths: DataPaths::from_root("/data").with_publish_dir("/srv/web"),
        panel: PanelConfig {
            anchor: Some("GDP".into()),
            verify_frequency: true,
        },
        series: vec![
            SeriesSpec::new("gdp").quarterly(),
            SeriesSpec::new("spx").name("close").suffix("_spx"),
        ],
    };

    let json = serde_json::to_string_pretty(&manifest).expect("serialize manifest");
    let de: PipelineManifest = serde_json::from_str(&json).expect("deserialize manifest");

    assert_eq!(de, manifest);
    assert_eq!(de.paths.raw_dir, std::path::Path::new("/data/raw"));
    assert_eq!(de.paths.processed_dir, std::path::Path::new("/data/processed"));
}

#[test]
fn feature_column_names() {
    assert_eq!(Feature::PctChange { months: 1 }.column_name(), "Pct");
    assert_eq!(Feature::PctChange { months: 6 }.column_name(), "6m_pct_change");
    assert_eq!(Feature::Diff { months: 6 }.column_name(), "6m_change");
    assert_eq!(
        Feature::Annualized { months: 6 }.column_name(),
        "annualized_change"
    );
    assert_eq!(
        Feature::Annualized { months: 3 }.column_name(),
        "3m_annualized_change"
    );
}

#[test]
fn error_roundtrip_keeps_context() {
    let err = PanelError::malformed_date("2020:Q5", "quarter 5 outside 1..=4").in_series("gdp");
    let json = serde_json::to_string(&err).expect("serialize error");
    let de: PanelError = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(de, err);
    assert!(matches!(de.root_cause(), PanelError::MalformedDate { .. }));
    assert!(de.is_data_integrity());
    assert!(!PanelError::not_found("series x").is_data_integrity());
}

#[test]
fn in_series_does_not_nest() {
    let err = PanelError::empty_series("gdp").in_series("a").in_series("b");
    match err {
        PanelError::InSeries { series, .. } => assert_eq!(series, "a"),
        other => panic!("unexpected {other:?}"),
    }
}
