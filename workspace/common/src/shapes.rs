use serde::Serialize;

use crate::patterns::PatternRange;
use crate::variant::{PageVariant, ThresholdLine, ThresholdLines, WrapStyle};

const HOURS_PER_DAY: u8 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rect,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisRef {
    X,
    Y,
    Paper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeLayer {
    Above,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeLine {
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A Plotly layout shape, serialized straight into `layout.shapes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightShape {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub xref: AxisRef,
    pub yref: AxisRef,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    pub line: ShapeLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<ShapeLayer>,
}

impl HighlightShape {
    /// Full-height rectangle spanning `[x0, x1)` on the x axis.
    fn band(variant: &PageVariant, x0: f64, x1: f64) -> Self {
        Self {
            kind: ShapeKind::Rect,
            xref: AxisRef::X,
            yref: AxisRef::Paper,
            x0,
            x1,
            y0: 0.0,
            y1: 1.0,
            fillcolor: Some(variant.overlay.fill_color.clone()),
            line: ShapeLine {
                width: 0.0,
                color: None,
            },
            layer: Some(ShapeLayer::Above),
        }
    }

    /// Full-width horizontal line at a glucose value.
    fn threshold(line: &ThresholdLine, color: String) -> Self {
        Self {
            kind: ShapeKind::Line,
            xref: AxisRef::Paper,
            yref: AxisRef::Y,
            x0: 0.0,
            x1: 1.0,
            y0: line.value,
            y1: line.value,
            fillcolor: None,
            line: ShapeLine {
                width: 1.0,
                color: Some(color),
            },
            layer: None,
        }
    }
}

/// Rectangles drawn when `range` is selected on a page of `variant`.
///
/// A plain range dims the two stretches of the day outside it. A range
/// wrapping midnight is drawn according to the variant's [`WrapStyle`].
pub fn highlight_shapes(variant: &PageVariant, range: &PatternRange) -> Vec<HighlightShape> {
    let start = variant.hour_to_x(range.start_hour);
    let end = variant.hour_to_x(range.end_hour);
    let day_end = variant.hour_to_x(HOURS_PER_DAY);

    let spans: Vec<(f64, f64)> = match (range.wraps_midnight(), variant.wrap_style) {
        (false, _) => vec![(0.0, start), (end, day_end)],
        (true, WrapStyle::Split) => vec![(start, day_end), (0.0, end)],
        (true, WrapStyle::Merged) => vec![(end, start)],
    };

    tracing::trace!(
        range = range.name,
        variant = variant.name,
        count = spans.len(),
        "Building highlight shapes"
    );

    spans
        .into_iter()
        .map(|(x0, x1)| HighlightShape::band(variant, x0, x1))
        .collect()
}

/// Lower then upper target line, coloured through `lookup`.
pub(crate) fn threshold_shapes(
    lines: &ThresholdLines,
    lookup: impl Fn(&str) -> Option<String>,
) -> Vec<HighlightShape> {
    [&lines.lower, &lines.upper]
        .into_iter()
        .map(|line| HighlightShape::threshold(line, line.color(&lookup)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::resolve_pattern;
    use serde_json::json;

    fn spans(shapes: &[HighlightShape]) -> Vec<(f64, f64)> {
        shapes.iter().map(|s| (s.x0, s.x1)).collect()
    }

    #[test]
    fn test_plain_range_dims_outside() {
        let variant = PageVariant::agp_summary();
        let lunch = resolve_pattern("lunch").unwrap();

        let shapes = highlight_shapes(&variant, lunch);
        assert_eq!(spans(&shapes), vec![(0.0, 132.0), (180.0, 288.0)]);
    }

    #[test]
    fn test_plain_range_is_the_same_for_every_variant() {
        let lunch = resolve_pattern("lunch").unwrap();
        let agp = highlight_shapes(&PageVariant::agp_summary(), lunch);
        let home = highlight_shapes(&PageVariant::home(), lunch);
        assert_eq!(spans(&agp), spans(&home));
    }

    #[test]
    fn test_split_wrap_gives_two_sub_rectangles() {
        let variant = PageVariant::agp_summary();
        let night = resolve_pattern("overnight").unwrap();

        let shapes = highlight_shapes(&variant, night);
        assert_eq!(spans(&shapes), vec![(264.0, 288.0), (0.0, 84.0)]);
        assert!(shapes.iter().all(|s| s.x0 < s.x1));
    }

    #[test]
    fn test_merged_wrap_gives_daytime_gap() {
        let variant = PageVariant::home();
        let night = resolve_pattern("night").unwrap();

        let shapes = highlight_shapes(&variant, night);
        assert_eq!(spans(&shapes), vec![(84.0, 264.0)]);
    }

    #[test]
    fn test_band_serializes_as_plotly_shape() {
        let variant = PageVariant::agp_summary();
        let shape = HighlightShape::band(&variant, 0.0, 132.0);

        assert_eq!(
            serde_json::to_value(&shape).unwrap(),
            json!({
                "type": "rect",
                "xref": "x",
                "yref": "paper",
                "x0": 0.0,
                "x1": 132.0,
                "y0": 0.0,
                "y1": 1.0,
                "fillcolor": "rgba(13, 17, 23, 0.8)",
                "line": {"width": 0.0},
                "layer": "above"
            })
        );
    }

    #[test]
    fn test_threshold_shapes_use_fallback_colors() {
        let shapes = threshold_shapes(&ThresholdLines::default(), |_| None);

        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].kind, ShapeKind::Line);
        assert_eq!((shapes[0].y0, shapes[0].y1), (70.0, 70.0));
        assert_eq!((shapes[1].y0, shapes[1].y1), (180.0, 180.0));
        assert_eq!(
            shapes[1].line.color.as_deref(),
            Some("rgba(168, 130, 255, 0.7)")
        );
        assert_eq!(
            serde_json::to_value(&shapes[0]).unwrap()["xref"],
            json!("paper")
        );
    }
}
