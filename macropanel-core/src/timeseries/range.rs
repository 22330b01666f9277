use crate::{CanonicalDate, Panel, PanelError};

/// First date at which `column` holds a non-null value.
///
/// # Errors
/// - `PanelError::AnchorColumnNotFound` if the panel has no such column.
/// - `PanelError::AnchorAllNull` if every value in the column is null.
pub fn first_valid_date(panel: &Panel, column: &str) -> Result<CanonicalDate, PanelError> {
    let col = panel
        .column(column)
        .ok_or_else(|| PanelError::AnchorColumnNotFound {
            column: column.to_string(),
        })?;
    col.values()
        .iter()
        .position(Option::is_some)
        .map(|i| panel.dates()[i])
        .ok_or_else(|| PanelError::AnchorAllNull {
            column: column.to_string(),
        })
}

/// Keep only rows dated on or after the anchor column's first non-null value.
///
/// Every column is retained. Nulls in other columns, and later gaps in the
/// anchor itself, are left as they are.
///
/// # Errors
/// Same as [`first_valid_date`].
///
/// ```
/// use macropanel_core::{filter_from_anchor, CanonicalDate, Column, Panel};
/// let d = |m| CanonicalDate::new(2020, m).unwrap();
/// let panel = Panel::new(
///     vec![d(1), d(2), d(3), d(4)],
///     vec![
///         Column::new("GDP", vec![None, None, Some(1.0), None]),
///         Column::new("Raw", vec![Some(9.0), Some(9.5), None, Some(10.0)]),
///     ],
/// )
/// .unwrap();
/// let out = filter_from_anchor(panel, "GDP").unwrap();
/// assert_eq!(out.dates(), &[d(3), d(4)]);
/// assert_eq!(out.value(d(4), "GDP"), None);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "macropanel_core::filter_from_anchor",
        skip(panel, anchor),
        fields(anchor = %anchor, rows = panel.height()),
    )
)]
pub fn filter_from_anchor(panel: Panel, anchor: &str) -> Result<Panel, PanelError> {
    let start = first_valid_date(&panel, anchor)?;

    #[cfg(feature = "tracing")]
    let before = panel.height();

    let out = panel.truncate_before(start);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        anchor = %anchor,
        start = %start,
        dropped = before - out.height(),
        "filtered panel to anchor range"
    );

    Ok(out)
}
