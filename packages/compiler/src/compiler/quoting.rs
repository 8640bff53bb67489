//! Literal rendering
//!
//! Lowered call descriptors carry their arguments as source text in the
//! target language. The renderer is swappable; [`JsLiteralRenderer`] emits
//! JavaScript.

/// Renders already-compiled expression fragments as literal syntax.
pub trait LiteralRenderer: Send + Sync {
    /// An array literal holding `items` in order.
    fn array(&self, items: &[String]) -> String;

    /// An object literal holding `pairs` in order. Repeated keys are kept.
    fn object(&self, pairs: &[(String, String)]) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsLiteralRenderer;

impl LiteralRenderer for JsLiteralRenderer {
    fn array(&self, items: &[String]) -> String {
        format!("[{}]", items.join(", "))
    }

    fn object(&self, pairs: &[(String, String)]) -> String {
        let entries: Vec<String> = pairs
            .iter()
            .map(|(key, value)| format!("{}:{}", quote_string(key), value))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }
}

/// Double-quoted, escaped string literal.
pub fn quote_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
