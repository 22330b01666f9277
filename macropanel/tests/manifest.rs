mod helpers;

use std::sync::Arc;

use helpers::*;
use macropanel::{Feature, Frequency, Pipeline, PipelineManifest, SeriesSource};
use macropanel_mock::MockSource;

const MANIFEST: &str = r#"{
    "paths": { "raw_dir": "/data/raw", "processed_dir": "/data/processed" },
    "panel": { "anchor": "GDP" },
    "series": [
        {
            "key": "pcpi",
            "suffix": "_pcpi",
            "features": [
                { "kind": "pct_change", "months": 1 },
                { "kind": "pct_change", "months": 6 },
                { "kind": "annualized", "months": 6 }
            ]
        },
        { "key": "gdp", "frequency": "quarterly" }
    ]
}"#;

#[test]
fn manifest_builds_the_same_pipeline_as_the_builder() {
    let manifest: PipelineManifest = serde_json::from_str(MANIFEST).unwrap();
    assert!(manifest.panel.verify_frequency);
    assert_eq!(manifest.series[0].features, Feature::inflation_set().to_vec());
    assert_eq!(manifest.series[1].frequency, Frequency::Quarterly);

    let sources: Vec<Arc<dyn SeriesSource>> = vec![Arc::new(MockSource::new())];
    let from_manifest = Pipeline::from_manifest(manifest, sources).unwrap();
    let from_builder = mock_builder()
        .series(macropanel::SeriesSpec::new("pcpi").suffix("_pcpi").features(Feature::inflation_set()))
        .series(macropanel::SeriesSpec::new("gdp").quarterly())
        .anchor("GDP")
        .build()
        .unwrap();

    assert_eq!(from_manifest.series(), from_builder.series());
    assert_eq!(from_manifest.run().unwrap(), from_builder.run().unwrap());
}

#[test]
fn manifest_without_sources_is_invalid() {
    let manifest: PipelineManifest = serde_json::from_str(MANIFEST).unwrap();
    let none: Vec<Arc<dyn SeriesSource>> = vec![];
    assert!(Pipeline::from_manifest(manifest, none).is_err());
}

#[test]
fn report_serializes_rows_and_coverage() {
    let report = fixture_pipeline().run().unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["anchor_start"], "2019-04-01");
    assert_eq!(json["panel"][0]["date"], "2019-04-01");
    assert_eq!(json["panel"][0]["GDP"], 19_021.9);
    assert_eq!(json["coverage"].as_array().unwrap().len(), 11);
}
