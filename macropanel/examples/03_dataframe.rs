#[cfg(feature = "dataframe")]
mod common;
#[cfg(feature = "dataframe")]
use macropanel::{Pipeline, SeriesSpec};

#[cfg(feature = "dataframe")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    let report = Pipeline::builder()
        .with_source(common::get_source())
        .series(SeriesSpec::new("pcpi").name("Raw").suffix("_pcpi"))
        .series(SeriesSpec::new("gdp").name("GDP").quarterly())
        .anchor("GDP")
        .build()?
        .run()?;

    let df = report.panel.to_dataframe()?;
    println!("DataFrame shape: {} rows x {} cols", df.height(), df.width());
    println!("{df}");
    Ok(())
}

#[cfg(not(feature = "dataframe"))]
fn main() {
    eprintln!("This example requires the 'dataframe' feature. Skipping.");
}
