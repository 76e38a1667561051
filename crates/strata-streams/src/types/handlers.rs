//! Built-in field type handlers.

use serde_json::Value;

use super::{EntryContext, FieldTypeHandler, InvalidValue};
use crate::field::Field;

fn bind(field: &Field, entry: Option<&EntryContext>) -> Option<Value> {
    entry.and_then(|entry| entry.value(&field.slug)).cloned()
}

/// Single-line text values.
///
/// Configuration: `max_length` (characters, optional).
#[derive(Debug, Clone)]
pub struct TextFieldType {
    max_length: Option<u64>,
    bound: Option<Value>,
}

impl TextFieldType {
    /// Builds a handler from a field definition and optional entry context.
    pub fn for_field(field: &Field, entry: Option<&EntryContext>) -> Self {
        Self {
            max_length: field.config.get("max_length").and_then(Value::as_u64),
            bound: bind(field, entry),
        }
    }
}

impl FieldTypeHandler for TextFieldType {
    fn field_type(&self) -> &'static str {
        "text"
    }

    fn validate(&self, value: &Value) -> Result<(), InvalidValue> {
        let Some(text) = value.as_str() else {
            return Err(InvalidValue::new(self.field_type(), "expected a string"));
        };

        if text.contains('\n') {
            return Err(InvalidValue::new(
                self.field_type(),
                "line breaks are not allowed",
            ));
        }

        if let Some(max_length) = self.max_length
            && text.chars().count() as u64 > max_length
        {
            return Err(InvalidValue::new(
                self.field_type(),
                format!("longer than {max_length} characters"),
            ));
        }

        Ok(())
    }

    fn render(&self, value: &Value) -> String {
        match value.as_str() {
            Some(text) => text.to_owned(),
            None => value.to_string(),
        }
    }

    fn bound_value(&self) -> Option<&Value> {
        self.bound.as_ref()
    }
}

/// Multi-line text values.
///
/// Configuration: `max_length` (characters, optional). Rendering turns
/// line breaks into `<br />` so paragraphs survive the view layer.
#[derive(Debug, Clone)]
pub struct TextareaFieldType {
    max_length: Option<u64>,
    bound: Option<Value>,
}

impl TextareaFieldType {
    /// Builds a handler from a field definition and optional entry context.
    pub fn for_field(field: &Field, entry: Option<&EntryContext>) -> Self {
        Self {
            max_length: field.config.get("max_length").and_then(Value::as_u64),
            bound: bind(field, entry),
        }
    }
}

impl FieldTypeHandler for TextareaFieldType {
    fn field_type(&self) -> &'static str {
        "textarea"
    }

    fn validate(&self, value: &Value) -> Result<(), InvalidValue> {
        let Some(text) = value.as_str() else {
            return Err(InvalidValue::new(self.field_type(), "expected a string"));
        };

        if let Some(max_length) = self.max_length
            && text.chars().count() as u64 > max_length
        {
            return Err(InvalidValue::new(
                self.field_type(),
                format!("longer than {max_length} characters"),
            ));
        }

        Ok(())
    }

    fn render(&self, value: &Value) -> String {
        match value.as_str() {
            Some(text) => text.replace('\n', "<br />"),
            None => value.to_string(),
        }
    }

    fn bound_value(&self) -> Option<&Value> {
        self.bound.as_ref()
    }
}

/// Whole-number values.
///
/// Configuration: `min` and `max` (inclusive, optional).
#[derive(Debug, Clone)]
pub struct IntegerFieldType {
    min: Option<i64>,
    max: Option<i64>,
    bound: Option<Value>,
}

impl IntegerFieldType {
    /// Builds a handler from a field definition and optional entry context.
    pub fn for_field(field: &Field, entry: Option<&EntryContext>) -> Self {
        Self {
            min: field.config.get("min").and_then(Value::as_i64),
            max: field.config.get("max").and_then(Value::as_i64),
            bound: bind(field, entry),
        }
    }
}

impl FieldTypeHandler for IntegerFieldType {
    fn field_type(&self) -> &'static str {
        "integer"
    }

    fn validate(&self, value: &Value) -> Result<(), InvalidValue> {
        let Some(number) = value.as_i64() else {
            return Err(InvalidValue::new(self.field_type(), "expected an integer"));
        };

        if let Some(min) = self.min
            && number < min
        {
            return Err(InvalidValue::new(
                self.field_type(),
                format!("below the minimum of {min}"),
            ));
        }

        if let Some(max) = self.max
            && number > max
        {
            return Err(InvalidValue::new(
                self.field_type(),
                format!("above the maximum of {max}"),
            ));
        }

        Ok(())
    }

    fn render(&self, value: &Value) -> String {
        value.to_string()
    }

    fn bound_value(&self) -> Option<&Value> {
        self.bound.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_text_enforces_max_length() {
        let field =
            Field::new("title", "Title", "text").with_config(json!({"max_length": 5}));
        let handler = TextFieldType::for_field(&field, None);

        assert!(handler.validate(&json!("short")).is_ok());
        assert!(handler.validate(&json!("too long")).is_err());
        assert!(handler.validate(&json!(42)).is_err());
    }

    #[test]
    fn test_text_rejects_line_breaks() {
        let field = Field::new("title", "Title", "text");
        let handler = TextFieldType::for_field(&field, None);

        assert!(handler.validate(&json!("one\ntwo")).is_err());
    }

    #[test]
    fn test_textarea_renders_line_breaks() {
        let field = Field::new("intro", "Intro", "textarea");
        let handler = TextareaFieldType::for_field(&field, None);

        assert_eq!(handler.render(&json!("one\ntwo")), "one<br />two");
    }

    #[test]
    fn test_integer_enforces_range() {
        let field = Field::new("reading_time", "Reading time", "integer")
            .with_config(json!({"min": 1, "max": 90}));
        let handler = IntegerFieldType::for_field(&field, None);

        assert!(handler.validate(&json!(15)).is_ok());
        assert!(handler.validate(&json!(0)).is_err());
        assert!(handler.validate(&json!(120)).is_err());
        assert!(handler.validate(&json!("15")).is_err());
    }

    #[test]
    fn test_integer_renders_number() {
        let field = Field::new("reading_time", "Reading time", "integer");
        let handler = IntegerFieldType::for_field(&field, None);

        assert_eq!(handler.render(&json!(7)), "7");
    }
}
