use macropanel_core::RawSeries;

use super::monthly_labels;

pub fn headline() -> RawSeries {
    monthly_labels(
        "Raw",
        2019,
        &[
            Some(251.7),
            Some(252.8),
            Some(254.2),
            Some(255.5),
            Some(256.1),
            Some(256.1),
            Some(256.6),
            Some(256.6),
            Some(256.8),
            Some(257.3),
            Some(257.2),
            Some(257.0),
            Some(258.0),
            Some(258.7),
            Some(258.1),
            Some(256.4),
            Some(256.4),
            Some(257.8),
        ],
    )
}

pub fn core() -> RawSeries {
    monthly_labels(
        "Raw",
        2019,
        &[
            Some(261.1),
            Some(261.6),
            Some(262.0),
            Some(262.3),
            Some(262.6),
            Some(263.0),
            Some(263.6),
            Some(264.1),
            Some(264.5),
            Some(264.9),
            Some(265.3),
            Some(265.6),
            Some(266.1),
            Some(266.8),
            Some(266.6),
            Some(265.5),
            Some(265.4),
            Some(266.0),
        ],
    )
}
