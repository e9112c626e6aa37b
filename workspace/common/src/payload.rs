use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ChartError;

/// Finished Plotly figure embedded by the server in the `plotly-data` node.
///
/// The shape is not validated beyond what Plotly itself needs to receive:
/// `data` must be a list and `layout`/`config` must be objects when present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartPayload {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub layout: Map<String, Value>,
    #[serde(default)]
    pub config: Option<Map<String, Value>>,
}

impl ChartPayload {
    /// Parses the text content of the data island.
    pub fn parse(text: &str) -> Result<Self, ChartError> {
        let payload: ChartPayload = serde_json::from_str(text)?;
        tracing::debug!(
            traces = payload.data.len(),
            has_config = payload.config.is_some(),
            "Parsed chart payload"
        );
        Ok(payload)
    }

    /// Config handed to `Plotly.newPlot`.
    ///
    /// `responsive` is always forced to `true`; the payload's own config is
    /// carried over only when `merge` is set.
    pub fn render_config(&self, merge: bool) -> Map<String, Value> {
        let mut config = match (&self.config, merge) {
            (Some(config), true) => config.clone(),
            _ => Map::new(),
        };
        config.insert("responsive".to_string(), Value::Bool(true));
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_payload() {
        let payload = ChartPayload::parse(
            r#"{"data":[{"x":[0,1],"y":[100,120],"type":"scatter"}],
                "layout":{"height":400},
                "config":{"displayModeBar":false}}"#,
        )
        .expect("payload should parse");

        assert_eq!(payload.data.len(), 1);
        assert_eq!(payload.layout.get("height"), Some(&json!(400)));
        assert!(payload.config.is_some());
    }

    #[test]
    fn test_parse_defaults_missing_fields() {
        let payload = ChartPayload::parse("{}").expect("empty object should parse");
        assert!(payload.data.is_empty());
        assert!(payload.layout.is_empty());
        assert!(payload.config.is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = ChartPayload::parse("{\"data\": [").unwrap_err();
        assert!(matches!(err, ChartError::Parse(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_list_data() {
        assert!(ChartPayload::parse(r#"{"data": 5}"#).is_err());
    }

    #[test]
    fn test_render_config_without_merge_is_responsive_only() {
        let payload =
            ChartPayload::parse(r#"{"data":[],"layout":{},"config":{"displayModeBar":false}}"#)
                .unwrap();

        let config = payload.render_config(false);
        assert_eq!(Value::Object(config), json!({"responsive": true}));
    }

    #[test]
    fn test_render_config_merge_overrides_responsive() {
        let payload = ChartPayload::parse(
            r#"{"data":[],"layout":{},"config":{"displayModeBar":false,"responsive":false}}"#,
        )
        .unwrap();

        let config = payload.render_config(true);
        assert_eq!(
            Value::Object(config),
            json!({"displayModeBar": false, "responsive": true})
        );
    }
}
