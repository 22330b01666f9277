mod common;

use macropanel::{Feature, Pipeline, SeriesSpec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    let report = Pipeline::builder()
        .with_source(common::get_source())
        .series(SeriesSpec::new("pcpi").name("Raw").suffix("_pcpi").features(Feature::inflation_set()))
        .series(SeriesSpec::new("pcpix").name("Raw").suffix("_pcpix").features(Feature::inflation_set()))
        .series(SeriesSpec::new("gdp").name("GDP").quarterly())
        .series(SeriesSpec::new("employment").name("PAYEMS"))
        .series(SeriesSpec::new("spx").suffix("_spx"))
        .anchor("GDP")
        .build()?
        .run()?;

    if let Some(start) = report.anchor_start {
        println!("Panel starts at {start} ({} rows)", report.panel.height());
    }
    for c in &report.coverage {
        let span = match (c.first, c.last) {
            (Some(f), Some(l)) => format!("{f} .. {l}"),
            _ => "no observations".to_string(),
        };
        println!("{:<26} {:>4} obs  {span}", c.column, c.observations);
    }
    Ok(())
}
