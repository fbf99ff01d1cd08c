//! Literal node → runtime value.

use crate::error::{AutoconfigError, Result};
use crate::syntax::{Literal, LiteralNode};
use crate::value::Value;
use tracing::trace;

/// Converts literal nodes into typed values.
pub struct LiteralResolver;

impl LiteralResolver {
    /// Resolves one literal.
    ///
    /// # Errors
    ///
    /// - [`AutoconfigError::UnsupportedLiteral`] for any array, empty or not.
    /// - [`AutoconfigError::LiteralParse`] for malformed booleans or numbers,
    ///   including integers outside the 32-bit signed range.
    pub fn resolve(node: &LiteralNode) -> Result<Value> {
        let value = match &node.literal {
            Literal::Boolean(text) => match text.as_str() {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => return Err(parse_error("boolean", text, "expected true or false")),
            },
            Literal::Character(text) => Value::Char(text.clone()),
            Literal::Integer(text) => Value::Int(
                text.parse::<i32>()
                    .map_err(|e| parse_error("integer", text, &e.to_string()))?,
            ),
            Literal::Float(text) => {
                let digits = text.trim_end_matches(&['f', 'F', 'd', 'D'][..]);
                Value::Double(
                    digits
                        .parse::<f64>()
                        .map_err(|e| parse_error("float", text, &e.to_string()))?,
                )
            }
            Literal::String(text) => Value::String(text.clone()),
            Literal::Null => Value::Null,
            Literal::Array(elements) => {
                return Err(AutoconfigError::UnsupportedLiteral {
                    elements: elements.len(),
                })
            }
        };
        trace!(kind = node.literal.kind(), value = ?value, "resolved literal");
        Ok(value)
    }
}

fn parse_error(kind: &'static str, text: &str, reason: &str) -> AutoconfigError {
    AutoconfigError::LiteralParse {
        kind,
        text: text.to_string(),
        reason: reason.to_string(),
    }
}
