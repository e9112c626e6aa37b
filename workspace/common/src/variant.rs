/// How a range that wraps past midnight is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapStyle {
    /// Two rectangles covering `[start, 24)` and `[0, end)`.
    Split,
    /// One rectangle covering the daytime gap `[end, start)`.
    Merged,
}

/// Fill of the highlight rectangles, drawn above the traces.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub fill_color: String,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            fill_color: "rgba(13, 17, 23, 0.8)".to_string(),
        }
    }
}

/// Aspect-ratio driven chart height applied on window resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizePolicy {
    pub aspect_ratio: f64,
    pub min_height: u32,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.7,
            min_height: 200,
        }
    }
}

impl ResizePolicy {
    /// `max(min_height, round(width / aspect_ratio))`.
    pub fn height_for(&self, width: f64) -> u32 {
        let scaled = (width / self.aspect_ratio).round();
        // `as` saturates, so negative or NaN widths fall through to 0.
        (scaled as u32).max(self.min_height)
    }
}

/// One permanent horizontal target line.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdLine {
    /// Glucose value in mg/dL.
    pub value: f64,
    /// CSS custom property holding the line colour.
    pub color_var: String,
    /// Used when the custom property is missing or empty.
    pub fallback_color: String,
}

impl ThresholdLine {
    /// Resolves the line colour through `lookup`, which reads a CSS custom
    /// property from the document.
    pub fn color(&self, lookup: impl Fn(&str) -> Option<String>) -> String {
        lookup(&self.color_var)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.fallback_color.clone())
    }
}

/// Lower and upper target bounds kept on the chart at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdLines {
    pub lower: ThresholdLine,
    pub upper: ThresholdLine,
}

impl Default for ThresholdLines {
    fn default() -> Self {
        Self {
            lower: ThresholdLine {
                value: 70.0,
                color_var: "--agp-target-lower-line".to_string(),
                fallback_color: "rgba(255, 105, 97, 0.7)".to_string(),
            },
            upper: ThresholdLine {
                value: 180.0,
                color_var: "--agp-target-upper-line".to_string(),
                fallback_color: "rgba(168, 130, 255, 0.7)".to_string(),
            },
        }
    }
}

/// Static description of one page hosting an AGP chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PageVariant {
    pub name: &'static str,
    /// Id of the element the chart is drawn into.
    pub container_id: &'static str,
    /// Carry the payload's `config` into `newPlot`.
    pub merge_config: bool,
    pub resize: Option<ResizePolicy>,
    pub wrap_style: WrapStyle,
    pub overlay: OverlayStyle,
    /// X-axis samples per hour; the server bins readings every five minutes.
    pub points_per_hour: u32,
    pub thresholds: Option<ThresholdLines>,
}

impl PageVariant {
    /// The AGP summary page (`agpChart`).
    pub fn agp_summary() -> Self {
        Self {
            name: "agp-summary",
            container_id: "agpChart",
            merge_config: false,
            resize: None,
            wrap_style: WrapStyle::Split,
            overlay: OverlayStyle::default(),
            points_per_hour: 12,
            thresholds: None,
        }
    }

    /// The dashboard home page (`homeChart`).
    pub fn home() -> Self {
        Self {
            name: "home",
            container_id: "homeChart",
            merge_config: true,
            resize: Some(ResizePolicy::default()),
            wrap_style: WrapStyle::Merged,
            overlay: OverlayStyle::default(),
            points_per_hour: 12,
            thresholds: Some(ThresholdLines::default()),
        }
    }

    /// Known variants in detection order.
    pub fn known() -> Vec<Self> {
        vec![Self::agp_summary(), Self::home()]
    }

    /// First known variant whose container is present on the page.
    pub fn detect(has_element: impl Fn(&str) -> bool) -> Option<Self> {
        Self::known()
            .into_iter()
            .find(|variant| has_element(variant.container_id))
    }

    /// X coordinate of `hour` on the chart axis.
    pub fn hour_to_x(&self, hour: u8) -> f64 {
        f64::from(hour) * f64::from(self.points_per_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_height_for_follows_aspect_ratio() {
        let policy = ResizePolicy::default();
        assert_eq!(policy.height_for(850.0), 500);
        // 1000 / 1.7 = 588.23...
        assert_eq!(policy.height_for(1000.0), 588);
        // 1001 / 1.7 = 588.82...
        assert_eq!(policy.height_for(1001.0), 589);
    }

    #[test]
    fn test_height_for_clamps_to_minimum() {
        let policy = ResizePolicy::default();
        assert_eq!(policy.height_for(300.0), 200);
        assert_eq!(policy.height_for(0.0), 200);
        assert_eq!(policy.height_for(-50.0), 200);
        assert_eq!(policy.height_for(f64::NAN), 200);
    }

    #[test]
    fn test_detect_prefers_declared_order() {
        let variant = PageVariant::detect(|id| id == "homeChart").unwrap();
        assert_eq!(variant.container_id, "homeChart");

        let variant = PageVariant::detect(|_| true).unwrap();
        assert_eq!(variant.container_id, "agpChart");

        assert!(PageVariant::detect(|_| false).is_none());
    }

    #[test]
    fn test_threshold_color_lookup_and_fallback() {
        let lines = ThresholdLines::default();
        let css: HashMap<&str, &str> = HashMap::from([
            ("--agp-target-lower-line", "  #ff0000 "),
            ("--agp-target-upper-line", "   "),
        ]);
        let lookup = |name: &str| css.get(name).map(|v| v.to_string());

        assert_eq!(lines.lower.color(lookup), "#ff0000");
        assert_eq!(lines.upper.color(lookup), "rgba(168, 130, 255, 0.7)");
    }

    #[test]
    fn test_hour_to_x_uses_points_per_hour() {
        let variant = PageVariant::agp_summary();
        assert_eq!(variant.hour_to_x(0), 0.0);
        assert_eq!(variant.hour_to_x(11), 132.0);
        assert_eq!(variant.hour_to_x(24), 288.0);
    }
}
