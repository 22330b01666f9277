use std::sync::Arc;

use macropanel::SeriesSource;
use macropanel_csv::{CsvLayout, CsvSource};
use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// CSV files under `MACROPANEL_DATA/raw` when that variable is set, fixtures otherwise.
#[must_use]
pub fn get_source() -> Arc<dyn SeriesSource> {
    match std::env::var("MACROPANEL_DATA") {
        Ok(root) => {
            println!("--- (Reading CSV files under {root}/raw) ---");
            Arc::new(
                CsvSource::new(macropanel::DataPaths::from_root(root))
                    .with_file("pcpi", "pcpi.csv", CsvLayout::labelled("DATE"))
                    .with_file("pcpix", "pcpix.csv", CsvLayout::labelled("DATE"))
                    .with_file("gdp", "routput.csv", CsvLayout::labelled("DATE"))
                    .with_file("employment", "employ.csv", CsvLayout::labelled("DATE"))
                    .with_file("spx", "spx.csv", CsvLayout::TradingView),
            )
        }
        Err(_) => {
            println!("--- (Using fixture series) ---");
            Arc::new(macropanel_mock::MockSource::new())
        }
    }
}
