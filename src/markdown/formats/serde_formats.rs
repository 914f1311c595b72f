//! JSON and YAML formatters
//!
//! Both serialize the forest through serde. Nodes are tagged by `type`:
//!
//! ```json
//! [{"type": "link", "url": "u", "children": [{"type": "text", "value": "b"}]}]
//! ```

use super::registry::{FormatError, Formatter};
use crate::markdown::ast::Node;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(nodes).map_err(|e| FormatError::Serialization {
            format: self.name(),
            message: e.to_string(),
        })
    }

    fn description(&self) -> &'static str {
        "AST as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        serde_yaml::to_string(nodes).map_err(|e| FormatError::Serialization {
            format: self.name(),
            message: e.to_string(),
        })
    }

    fn description(&self) -> &'static str {
        "AST as YAML"
    }
}
