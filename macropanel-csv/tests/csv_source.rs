use std::fs;

use macropanel_core::{
    CanonicalDate, DataPaths, PanelError, RawDate, SeriesSource, normalize_series,
};
use macropanel_csv::{CsvLayout, CsvSource};

fn cd(y: i32, m: u32) -> CanonicalDate {
    CanonicalDate::new(y, m).unwrap()
}

fn setup(files: &[(&str, &str)]) -> (tempfile::TempDir, DataPaths) {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::from_root(dir.path());
    fs::create_dir_all(&paths.raw_dir).unwrap();
    for (name, body) in files {
        fs::write(paths.raw(name), body).unwrap();
    }
    (dir, paths)
}

#[test]
fn labelled_layout_takes_last_column() {
    let (_dir, paths) = setup(&[(
        "pcpi.csv",
        "DATE,PCPI19M12,PCPI20M01\n2019:11,257.2,257.3\n2019:12,,257.0\n2020:01,258.0,258.0\n",
    )]);
    let src = CsvSource::new(paths).with_file("pcpi", "pcpi.csv", CsvLayout::labelled("DATE"));
    assert!(src.provides("pcpi"));

    let raw = src.load("pcpi").unwrap();
    assert_eq!(raw.name, "PCPI20M01");
    assert_eq!(raw.points[0], (RawDate::from("2019:11"), Some(257.3)));

    let s = normalize_series(raw).unwrap();
    assert_eq!(s.value_at(cd(2019, 12)), Some(257.0));
    assert_eq!(s.len(), 3);
}

#[test]
fn labelled_layout_with_named_column_and_null_markers() {
    let (_dir, paths) = setup(&[(
        "gdp.csv",
        "Date,First,Most_Recent\n2019:Q4,19222.0,19254.0\n2020:Q1,.,18990.1\n2020:Q2,#N/A,17282.3\n",
    )]);
    let layout = CsvLayout::Labelled {
        date_column: "Date".into(),
        value_column: Some("First".into()),
    };
    let src = CsvSource::new(paths).with_file("gdp", "gdp.csv", layout);
    let raw = src.load("gdp").unwrap();
    assert_eq!(raw.name, "First");
    let values: Vec<_> = raw.points.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![Some(19222.0), None, None]);
}

#[test]
fn tradingview_layout_reads_unix_seconds() {
    let (_dir, paths) = setup(&[(
        "spx.csv",
        "time,open,high,low,close\n1580504400,3282.3,3337.8,3214.6,3225.5\n1582923600.0,3235.7,3393.5,2855.8,2954.2\n",
    )]);
    let src = CsvSource::new(paths).with_file("spx", "spx.csv", CsvLayout::TradingView);
    let raw = src.load("spx").unwrap();
    assert_eq!(raw.name, "close");
    assert_eq!(raw.points[0].0, RawDate::Timestamp(1_580_504_400));

    let s = normalize_series(raw).unwrap();
    assert_eq!(s.dates().collect::<Vec<_>>(), vec![cd(2020, 1), cd(2020, 2)]);
    assert_eq!(s.value_at(cd(2020, 2)), Some(2954.2));
}

#[test]
fn bad_number_names_line_and_column() {
    let (_dir, paths) = setup(&[("x.csv", "DATE,Raw\n2020:01,1.0\n2020:02,abc\n")]);
    let src = CsvSource::new(paths).with_file("x", "x.csv", CsvLayout::labelled("DATE"));
    match src.load("x").unwrap_err() {
        PanelError::Source { name, msg } => {
            assert_eq!(name, "macropanel-csv");
            assert!(msg.contains("line 3"), "{msg}");
            assert!(msg.contains("Raw"), "{msg}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_finite_cells_are_rejected() {
    for cell in ["NAN", "inf", "-Infinity"] {
        let body = format!("DATE,Raw\n2020:01,1.0\n2020:02,{cell}\n");
        let (_dir, paths) = setup(&[("x.csv", body.as_str())]);
        let src = CsvSource::new(paths).with_file("x", "x.csv", CsvLayout::labelled("DATE"));
        match src.load("x").unwrap_err() {
            PanelError::Source { msg, .. } => {
                assert!(msg.contains("line 3"), "{msg}");
                assert!(msg.contains(cell), "{msg}");
            }
            other => panic!("unexpected error for {cell}: {other:?}"),
        }
    }
}

#[test]
fn missing_column_and_missing_file() {
    let (_dir, paths) = setup(&[("x.csv", "when,Raw\n2020:01,1.0\n")]);
    let src = CsvSource::new(paths)
        .with_file("x", "x.csv", CsvLayout::labelled("DATE"))
        .with_file("gone", "gone.csv", CsvLayout::TradingView);
    assert!(matches!(src.load("x"), Err(PanelError::Source { ref msg, .. }) if msg.contains("DATE")));
    assert!(matches!(src.load("gone"), Err(PanelError::Source { .. })));
    assert!(!src.provides("other"));
    assert!(matches!(src.load("other"), Err(PanelError::NotFound { .. })));
}
