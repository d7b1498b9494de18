//! Text normalization for structured-record output

use crate::error::Result;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Normalizes a raw text blob into its published layout
pub trait TextFormatter: Send + Sync {
    /// Reformat `raw`, returning the normalized text
    fn format(&self, raw: &str) -> Result<String>;
}

/// Layout options for [`JsonLayout`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Indent with tabs instead of spaces
    pub use_tabs: bool,
    /// Columns per indent level
    pub tab_width: usize,
    /// Line width a container must fit in to stay on one line
    pub print_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            use_tabs: true,
            tab_width: 2,
            print_width: 80,
        }
    }
}

/// Width-aware JSON pretty printer
///
/// A container stays on one line when it fits in `print_width` columns,
/// counting the text already on the line and a trailing comma. Otherwise
/// each member goes on its own line, one indent level deeper. Member
/// order is kept as written.
#[derive(Debug, Clone, Default)]
pub struct JsonLayout {
    options: FormatOptions,
}

impl JsonLayout {
    /// Create a layout with the given options
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    fn indent(&self, out: &mut String, depth: usize) {
        if self.options.use_tabs {
            out.extend(std::iter::repeat('\t').take(depth));
        } else {
            out.extend(std::iter::repeat(' ').take(depth * self.options.tab_width));
        }
    }

    fn indent_width(&self, depth: usize) -> usize {
        depth * self.options.tab_width
    }

    fn write(&self, out: &mut String, node: &Node, depth: usize, column: usize, trailing: usize) {
        let flat = node.flat();
        if !node.is_breakable() || column + flat.width() + trailing <= self.options.print_width {
            out.push_str(&flat);
            return;
        }

        match node {
            Node::Object(members) => {
                out.push_str("{\n");
                for (i, (key, value)) in members.iter().enumerate() {
                    let last = i + 1 == members.len();
                    let prefix = format!("{}: ", key);
                    self.indent(out, depth + 1);
                    out.push_str(&prefix);
                    let column = self.indent_width(depth + 1) + prefix.width();
                    self.write(out, value, depth + 1, column, usize::from(!last));
                    if !last {
                        out.push(',');
                    }
                    out.push('\n');
                }
                self.indent(out, depth);
                out.push('}');
            }
            Node::Array(items) => {
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    let last = i + 1 == items.len();
                    self.indent(out, depth + 1);
                    self.write(out, item, depth + 1, self.indent_width(depth + 1), usize::from(!last));
                    if !last {
                        out.push(',');
                    }
                    out.push('\n');
                }
                self.indent(out, depth);
                out.push(']');
            }
            Node::Scalar(_) => out.push_str(&flat),
        }
    }
}

impl TextFormatter for JsonLayout {
    fn format(&self, raw: &str) -> Result<String> {
        let node: Node = serde_json::from_str(raw)?;
        let mut out = String::with_capacity(raw.len() * 2);
        self.write(&mut out, &node, 0, 0, 0);
        out.push('\n');
        Ok(out)
    }
}

/// Parsed JSON that keeps member order; keys and scalars hold their JSON text
#[derive(Debug, Clone, PartialEq)]
enum Node {
    Object(Vec<(String, Node)>),
    Array(Vec<Node>),
    Scalar(String),
}

impl Node {
    fn is_breakable(&self) -> bool {
        match self {
            Node::Object(members) => !members.is_empty(),
            Node::Array(items) => !items.is_empty(),
            Node::Scalar(_) => false,
        }
    }

    fn flat(&self) -> String {
        match self {
            Node::Object(members) if members.is_empty() => "{}".to_string(),
            Node::Object(members) => {
                let inner: Vec<String> = members
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v.flat()))
                    .collect();
                format!("{{ {} }}", inner.join(", "))
            }
            Node::Array(items) => {
                let inner: Vec<String> = items.iter().map(Node::flat).collect();
                format!("[{}]", inner.join(", "))
            }
            Node::Scalar(text) => text.clone(),
        }
    }
}

fn json_text<T: Serialize, E: serde::de::Error>(value: T) -> std::result::Result<String, E> {
    serde_json::to_string(&value).map_err(E::custom)
}

fn scalar<T: Serialize, E: serde::de::Error>(value: T) -> std::result::Result<Node, E> {
    json_text(value).map(Node::Scalar)
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = Node;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("any JSON value")
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> std::result::Result<Node, E> {
                scalar(v)
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> std::result::Result<Node, E> {
                scalar(v)
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> std::result::Result<Node, E> {
                scalar(v)
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> std::result::Result<Node, E> {
                scalar(v)
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<Node, E> {
                scalar(v)
            }

            fn visit_unit<E: serde::de::Error>(self) -> std::result::Result<Node, E> {
                Ok(Node::Scalar("null".to_string()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Node, A::Error> {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element::<Node>()? {
                    items.push(item);
                }
                Ok(Node::Array(items))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Node, A::Error> {
                let mut members = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    let value = map.next_value::<Node>()?;
                    members.push((json_text::<_, A::Error>(key.as_str())?, value));
                }
                Ok(Node::Object(members))
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout() -> JsonLayout {
        JsonLayout::default()
    }

    #[test]
    fn test_keys_keep_json_escapes() {
        let out = layout().format(r#"{"say \"hi\"":["a\\b"]}"#).unwrap();
        assert_eq!(out, "{ \"say \\\"hi\\\"\": [\"a\\\\b\"] }\n");
    }

    #[test]
    fn test_short_document_stays_flat() {
        let out = layout().format(r#"{"a":["x","y"]}"#).unwrap();
        assert_eq!(out, "{ \"a\": [\"x\", \"y\"] }\n");
    }

    #[test]
    fn test_long_document_breaks_outer_only() {
        let raw = r#"{"2024-01-01":["New Year's Day"],"2024-03-01":["Independence Movement Day"],"2024-05-05":["Children's Day"]}"#;
        let out = layout().format(raw).unwrap();
        assert_eq!(
            out,
            "{\n\
             \t\"2024-01-01\": [\"New Year's Day\"],\n\
             \t\"2024-03-01\": [\"Independence Movement Day\"],\n\
             \t\"2024-05-05\": [\"Children's Day\"]\n\
             }\n"
        );
    }

    #[test]
    fn test_nested_groups_break_when_too_wide() {
        let raw = r#"{"2024":{"2024-01-01":["New Year's Day"],"2024-03-01":["Independence Movement Day"]}}"#;
        let out = layout().format(raw).unwrap();
        assert_eq!(
            out,
            "{\n\
             \t\"2024\": {\n\
             \t\t\"2024-01-01\": [\"New Year's Day\"],\n\
             \t\t\"2024-03-01\": [\"Independence Movement Day\"]\n\
             \t}\n\
             }\n"
        );
    }

    #[test]
    fn test_long_array_breaks() {
        let label = "x".repeat(40);
        let raw = format!(r#"["{}","{}"]"#, label, label);
        let out = layout().format(&raw).unwrap();
        assert_eq!(out, format!("[\n\t\"{}\",\n\t\"{}\"\n]\n", label, label));
    }

    #[test]
    fn test_trailing_comma_counts_toward_width() {
        // tab (2) + `"k": ` (5) + value (72) + comma = 80
        let value = format!("\"{}\"", "v".repeat(68));
        let raw = format!(r#"{{"k":[{}],"z":1,"pad":"{}"}}"#, value, "p".repeat(80));
        let out = layout().format(&raw).unwrap();
        assert!(out.contains(&format!("\t\"k\": [{}],\n", value)));

        let value = format!("\"{}\"", "v".repeat(69));
        let raw = format!(r#"{{"k":[{}],"z":1,"pad":"{}"}}"#, value, "p".repeat(80));
        let out = layout().format(&raw).unwrap();
        assert!(out.contains(&format!("\t\"k\": [\n\t\t{}\n\t],\n", value)));
    }

    #[test]
    fn test_wide_characters_count_double() {
        // 30 Hangul syllables are 60 columns wide
        let label = "가".repeat(30);
        let raw = format!(r#"{{"2024-01-01":["{}"]}}"#, label);
        let out = layout().format(&raw).unwrap();
        assert_eq!(out, format!("{{\n\t\"2024-01-01\": [\"{}\"]\n}}\n", label));
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(layout().format("{}").unwrap(), "{}\n");
        assert_eq!(layout().format(r#"{"a":[]}"#).unwrap(), "{ \"a\": [] }\n");
    }

    #[test]
    fn test_preserves_member_order() {
        let out = layout().format(r#"{"b":1,"a":2}"#).unwrap();
        assert_eq!(out, "{ \"b\": 1, \"a\": 2 }\n");
    }

    #[test]
    fn test_space_indentation() {
        let layout = JsonLayout::new(FormatOptions {
            use_tabs: false,
            tab_width: 4,
            print_width: 10,
        });
        let out = layout.format(r#"{"key":"value"}"#).unwrap();
        assert_eq!(out, "{\n    \"key\": \"value\"\n}\n");
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(layout().format("{not json").is_err());
    }
}
