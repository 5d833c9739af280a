//! JSON order request parser.

use crate::error::{NestError, Result};
use crate::model::OrderLine;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An order to optimize: its lines and an optional coil width override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Coil width in inches; the standard wide coil when absent.
    #[serde(default)]
    pub coil_width: Option<f64>,
    #[serde(alias = "orderLines")]
    pub lines: Vec<OrderLine>,
}

/// Parse an order from a JSON string.
///
/// Accepts a bare array of order lines or an object with `lines`
/// (or `orderLines`) and an optional `coilWidth`.
pub fn parse_order_str(content: &str) -> Result<OrderRequest> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let request = if value.is_array() {
        OrderRequest {
            coil_width: None,
            lines: serde_json::from_value(value)?,
        }
    } else {
        serde_json::from_value(value)?
    };

    tracing::debug!("Parsed {} order line(s)", request.lines.len());
    Ok(request)
}

/// Parse an order from a JSON file.
pub fn parse_order_file(path: &Path) -> Result<OrderRequest> {
    if !path.exists() {
        return Err(NestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(NestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_order_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    // ==================== parse_order_str tests ====================

    #[test]
    fn test_parse_bare_array() {
        let request = parse_order_str(
            r#"[
                { "productId": "PBR", "color": "Ash Gray", "quantity": 45, "length": 16, "width": 43.875 },
                { "productId": "TRIM", "quantity": 15, "length": 10, "width": 14 }
            ]"#,
        )
        .expect("Should parse");
        assert_eq!(request.coil_width, None);
        assert_eq!(request.lines.len(), 2);
        assert_eq!(request.lines[0].color.as_deref(), Some("Ash Gray"));
        assert_eq!(request.lines[1].color, None);
    }

    #[test]
    fn test_parse_request_object() {
        let request = parse_order_str(
            r#"{ "coilWidth": 41.5, "lines": [
                { "productId": "PBR", "color": null, "quantity": 2, "length": 8, "width": 36 }
            ] }"#,
        )
        .expect("Should parse");
        assert_eq!(request.coil_width, Some(41.5));
        assert_eq!(request.lines[0].quantity, 2);
    }

    #[test]
    fn test_parse_order_lines_alias() {
        let request = parse_order_str(
            r#"{ "orderLines": [
                { "productId": "PBR", "quantity": 1, "length": 8, "width": 36 }
            ] }"#,
        )
        .expect("Should parse");
        assert_eq!(request.lines.len(), 1);
    }

    #[test]
    fn test_parse_malformed() {
        let result = parse_order_str(r#"{ "lines": [ { "productId": "PBR" } ] }"#);
        match result {
            Err(err @ NestError::Json(_)) => assert_eq!(err.code(), ErrorCode::ParseError),
            other => panic!("Expected Json error, got {:?}", other),
        }
        assert!(parse_order_str("not json").is_err());
    }

    #[test]
    fn test_parse_empty_array_is_not_rejected_here() {
        let request = parse_order_str("[]").expect("Should parse");
        assert!(request.lines.is_empty());
    }

    // ==================== parse_order_file tests ====================

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{ "productId": "PBR", "color": "Black", "quantity": 3, "length": 10, "width": 43.875 }}]"#
        )
        .expect("write");
        let request = parse_order_file(file.path()).expect("Should parse");
        assert_eq!(request.lines[0].color.as_deref(), Some("Black"));
    }

    #[test]
    fn test_parse_file_not_found() {
        let result = parse_order_file(Path::new("/nonexistent/orders.json"));
        assert!(matches!(result, Err(NestError::FileNotFound { .. })));
    }

    #[test]
    fn test_parse_file_empty() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let result = parse_order_file(file.path());
        assert!(matches!(result, Err(NestError::EmptyFile { .. })));
    }
}
