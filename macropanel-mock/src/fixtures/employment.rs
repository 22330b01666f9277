use macropanel_core::RawSeries;

use super::monthly_labels;

/// Nonfarm payrolls, millions. July 2019 was not reported in this vintage.
pub fn payrolls() -> RawSeries {
    monthly_labels(
        "Raw",
        2019,
        &[
            Some(150.3),
            Some(150.5),
            Some(150.6),
            Some(150.8),
            Some(150.9),
            Some(151.1),
            None,
            Some(151.3),
            Some(151.5),
            Some(151.7),
            Some(151.9),
            Some(152.1),
            Some(152.4),
            Some(152.6),
            Some(151.1),
            Some(130.4),
            Some(133.0),
            Some(137.8),
        ],
    )
}
