mod common;

use macropanel::{DataPaths, Feature, Pipeline, SeriesSpec};
use macropanel_csv::PanelWriter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    let root = std::env::var("MACROPANEL_DATA").unwrap_or_else(|_| "data".to_string());
    let paths = DataPaths::from_root(&root).with_publish_dir(format!("{root}/web"));

    let report = Pipeline::builder()
        .with_source(common::get_source())
        .series(SeriesSpec::new("pcpi").name("Raw").suffix("_pcpi").features(Feature::inflation_set()))
        .series(SeriesSpec::new("gdp").name("GDP").quarterly())
        .anchor("GDP")
        .build()?
        .run()?;

    for path in PanelWriter::new(paths).publish(&report.panel)? {
        println!("wrote {}", path.display());
    }
    Ok(())
}
