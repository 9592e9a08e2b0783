//! Declarative validation rules interpreted over a JSON draft.
//!
//! A [`Schema`] is an ordered rule table; [`validate`] is a pure function of
//! the current draft against it, recomputed from scratch on every change so
//! stale entries cannot survive.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Field name -> ordered violation messages. Empty means the draft is valid.
pub type ValidationResult = BTreeMap<String, Vec<String>>;

#[derive(Clone, PartialEq, Debug)]
pub enum Rule {
    /// Value must exist and be non-blank.
    Presence { message: String },
    /// String character count bounds. Absent or non-string values are
    /// Presence's concern and pass unchecked.
    Length {
        min: Option<usize>,
        max: Option<usize>,
        message: String,
    },
    /// Numeric bounds, inclusive. Non-numeric values pass unchecked.
    Range { min: f64, max: f64, message: String },
}

impl Rule {
    fn check(&self, value: Option<&Value>) -> Option<&str> {
        let violated = match self {
            Rule::Presence { .. } => is_blank(value),
            Rule::Length { min, max, .. } => match value.and_then(Value::as_str) {
                Some(text) => {
                    let len = text.chars().count();
                    min.is_some_and(|min| len < min) || max.is_some_and(|max| len > max)
                }
                None => false,
            },
            Rule::Range { min, max, .. } => match value.and_then(Value::as_f64) {
                Some(number) => number < *min || number > *max,
                None => false,
            },
        };

        violated.then(|| self.message())
    }

    fn message(&self) -> &str {
        match self {
            Rule::Presence { message }
            | Rule::Length { message, .. }
            | Rule::Range { message, .. } => message,
        }
    }
}

/// Missing, null, blank string, or empty array all count as blank. Booleans,
/// numbers, and objects are always present.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Schema {
    rules: Vec<(String, Rule)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, field: impl Into<String>, rule: Rule) -> Self {
        self.rules.push((field.into(), rule));
        self
    }
}

/// Run every rule over the draft. Deterministic and synchronous; messages
/// for one field keep their schema declaration order.
pub fn validate(draft: &Map<String, Value>, schema: &Schema) -> ValidationResult {
    let mut errors = ValidationResult::new();

    for (field, rule) in &schema.rules {
        if let Some(message) = rule.check(draft.get(field)) {
            errors
                .entry(field.clone())
                .or_default()
                .push(message.to_string());
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test drafts are objects"),
        }
    }

    /// Tests the presence rule against an empty string.
    ///
    /// Verifies that a schema requiring a non-empty `serverName` reports
    /// exactly one violation with the configured message.
    ///
    /// Expected: {"serverName": ["Name is required"]}
    #[test]
    fn presence_rejects_empty_string() {
        let schema = Schema::new().rule(
            "serverName",
            Rule::Presence {
                message: "Name is required".to_string(),
            },
        );

        let errors = validate(&draft(json!({ "serverName": "" })), &schema);

        assert_eq!(
            errors.get("serverName"),
            Some(&vec!["Name is required".to_string()])
        );
    }

    /// Tests the presence rule against missing, null, blank, and empty
    /// array values.
    ///
    /// Verifies that every blank shape violates, while booleans, numbers,
    /// and nested objects count as present.
    ///
    /// Expected: violations only for the blank shapes
    #[test]
    fn presence_blankness_shapes() {
        let schema = Schema::new().rule(
            "field",
            Rule::Presence {
                message: "required".to_string(),
            },
        );

        for blank in [json!({}), json!({ "field": null }), json!({ "field": "  " })] {
            assert!(!validate(&draft(blank), &schema).is_empty());
        }
        assert!(!validate(&draft(json!({ "field": [] })), &schema).is_empty());

        for present in [
            json!({ "field": false }),
            json!({ "field": 0 }),
            json!({ "field": { "uri": "x.png" } }),
        ] {
            assert!(validate(&draft(present), &schema).is_empty());
        }
    }

    /// Tests the length rule bounds.
    ///
    /// Verifies that strings outside the configured character bounds are
    /// rejected and that absent values pass (presence's concern).
    ///
    /// Expected: violation only for the over-long string
    #[test]
    fn length_applies_to_strings_only() {
        let schema = Schema::new().rule(
            "shortName",
            Rule::Length {
                min: None,
                max: Some(3),
                message: "too long".to_string(),
            },
        );

        assert!(validate(&draft(json!({ "shortName": "abc" })), &schema).is_empty());
        assert!(!validate(&draft(json!({ "shortName": "abcd" })), &schema).is_empty());
        assert!(validate(&draft(json!({})), &schema).is_empty());
    }

    /// Tests the numeric range rule.
    ///
    /// Verifies inclusive bounds and that non-numeric values pass.
    ///
    /// Expected: violations only outside [1, 10]
    #[test]
    fn range_is_inclusive() {
        let schema = Schema::new().rule(
            "priority",
            Rule::Range {
                min: 1.0,
                max: 10.0,
                message: "out of range".to_string(),
            },
        );

        assert!(validate(&draft(json!({ "priority": 1 })), &schema).is_empty());
        assert!(validate(&draft(json!({ "priority": 10 })), &schema).is_empty());
        assert!(!validate(&draft(json!({ "priority": 11 })), &schema).is_empty());
        assert!(validate(&draft(json!({ "priority": "n/a" })), &schema).is_empty());
    }

    /// Tests multiple rules on one field.
    ///
    /// Verifies that violation messages accumulate in schema declaration
    /// order.
    ///
    /// Expected: both messages, presence first
    #[test]
    fn messages_keep_declaration_order() {
        let schema = Schema::new()
            .rule(
                "name",
                Rule::Presence {
                    message: "required".to_string(),
                },
            )
            .rule(
                "name",
                Rule::Length {
                    min: Some(2),
                    max: None,
                    message: "too short".to_string(),
                },
            );

        let errors = validate(&draft(json!({ "name": "" })), &schema);

        assert_eq!(
            errors.get("name"),
            Some(&vec!["required".to_string(), "too short".to_string()])
        );
    }
}
