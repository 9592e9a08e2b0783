//! Form controller shared by the entity edit screens.
//!
//! [`FormState`] owns a draft copy of one entity as an opaque JSON object,
//! tracks which fields the user has touched, and revalidates the whole draft
//! on every write. Errors exist as soon as validation fails but are only
//! reported for touched fields; submit eligibility ignores touch state.

pub mod schema;

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use schema::{validate, Schema, ValidationResult};

#[derive(Clone, PartialEq, Debug)]
pub struct FormState {
    draft: Map<String, Value>,
    touched: BTreeSet<String>,
    errors: ValidationResult,
    schema: Schema,
}

impl FormState {
    /// Seeds the draft from an entity and validates once. Nothing is
    /// reported until a field is touched.
    pub fn new(entity: &Value, schema: Schema) -> Self {
        let draft = match entity {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        let errors = validate(&draft, &schema);

        Self {
            draft,
            touched: BTreeSet::new(),
            errors,
            schema,
        }
    }

    /// Writes one field, marks it touched, and revalidates the draft.
    /// Unknown field names are accepted; only declared rules are enforced.
    pub fn set_value(&mut self, field: &str, value: Value) {
        self.draft.insert(field.to_string(), value);
        self.touched.insert(field.to_string());
        self.errors = validate(&self.draft, &self.schema);
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.set_value(field, Value::String(value.into()));
    }

    /// Checkbox/switch path: the raw input value is coerced to a boolean.
    pub fn set_flag(&mut self, field: &str, value: bool) {
        self.set_value(field, Value::Bool(value));
    }

    pub fn text(&self, field: &str) -> &str {
        self.draft
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn flag(&self, field: &str) -> bool {
        self.draft
            .get(field)
            .and_then(Value::as_bool)
            .unwrap_or_default()
    }

    pub fn value(&self, field: &str) -> Option<&Value> {
        self.draft.get(field)
    }

    /// First violation message for a field, only once the field has been
    /// touched. Untouched invalid fields stay silently invalid.
    pub fn error(&self, field: &str) -> Option<&str> {
        if !self.touched.contains(field) {
            return None;
        }
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// Overall validity, independent of touch state.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Current draft when valid. The surface disables the submit action
    /// while invalid; an invalid call is rejected here as well.
    pub fn submit(&self) -> Option<Value> {
        self.is_valid()
            .then(|| Value::Object(self.draft.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::schema::Rule;
    use super::*;
    use serde_json::json;

    fn server_schema() -> Schema {
        Schema::new().rule(
            "serverName",
            Rule::Presence {
                message: "Name is required".to_string(),
            },
        )
    }

    fn blank_server() -> Value {
        json!({ "id": 7, "serverName": "", "active": true })
    }

    /// Tests initialization from an invalid entity.
    ///
    /// Verifies that validation runs once on seed, the form reports
    /// invalid, but no per-field error shows before the field is touched.
    ///
    /// Expected: invalid form, submit blocked, hidden error
    #[test]
    fn seeds_invalid_without_visible_errors() {
        let form = FormState::new(&blank_server(), server_schema());

        assert!(!form.is_valid());
        assert_eq!(
            form.errors().get("serverName"),
            Some(&vec!["Name is required".to_string()])
        );
        assert_eq!(form.error("serverName"), None);
        assert_eq!(form.submit(), None);
    }

    /// Tests that touching an invalid field reveals its error.
    ///
    /// Verifies that writing a still-blank value marks the field touched
    /// and surfaces the first violation message.
    ///
    /// Expected: visible "Name is required"
    #[test]
    fn touching_reveals_error() {
        let mut form = FormState::new(&blank_server(), server_schema());

        form.set_text("serverName", "");

        assert!(form.is_touched("serverName"));
        assert_eq!(form.error("serverName"), Some("Name is required"));
    }

    /// Tests that a valid edit clears the error and unlocks submit.
    ///
    /// Verifies validity flips with the recomputed result and that submit
    /// returns the draft with the edit applied.
    ///
    /// Expected: valid form, draft contains the new name
    #[test]
    fn valid_edit_unlocks_submit() {
        let mut form = FormState::new(&blank_server(), server_schema());

        form.set_text("serverName", "Mercado Central");

        assert!(form.is_valid());
        assert_eq!(form.error("serverName"), None);
        let draft = form.submit().unwrap();
        assert_eq!(draft["serverName"], json!("Mercado Central"));
        assert_eq!(draft["id"], json!(7));
    }

    /// Tests that the touch set only grows.
    ///
    /// Verifies fields stay touched across later edits to other fields.
    ///
    /// Expected: both fields touched after two edits
    #[test]
    fn touch_set_is_monotonic() {
        let mut form = FormState::new(&blank_server(), server_schema());

        form.set_text("serverName", "A");
        form.set_flag("active", false);

        assert!(form.is_touched("serverName"));
        assert!(form.is_touched("active"));
    }

    /// Tests writes to fields with no declared rules.
    ///
    /// Verifies unknown fields are accepted without creating violations.
    ///
    /// Expected: value stored, form validity unchanged
    #[test]
    fn unknown_fields_are_accepted() {
        let mut form = FormState::new(&json!({ "serverName": "ok" }), server_schema());

        form.set_text("nickname", "edge");

        assert!(form.is_valid());
        assert_eq!(form.text("nickname"), "edge");
    }

    /// Tests an upload resolving after the user kept editing.
    ///
    /// Verifies that applying the asset descriptor writes only the
    /// thumbnail field and never clobbers concurrent edits.
    ///
    /// Expected: draft holds both the new name and thumbnail.uri
    #[test]
    fn late_upload_never_clobbers_other_edits() {
        let mut form = FormState::new(&blank_server(), server_schema());

        form.set_text("serverName", "Renamed");
        form.set_value("thumbnail", json!({ "uri": "x.png" }));

        let draft = form.submit().unwrap();
        assert_eq!(draft["serverName"], json!("Renamed"));
        assert_eq!(draft["thumbnail"]["uri"], json!("x.png"));
        assert!(form.is_touched("thumbnail"));
    }

    /// Tests checkbox coercion.
    ///
    /// Verifies the flag path stores a real boolean readable through
    /// `flag`.
    ///
    /// Expected: active false after the toggle
    #[test]
    fn flag_roundtrip() {
        let mut form = FormState::new(&blank_server(), server_schema());
        assert!(form.flag("active"));

        form.set_flag("active", false);

        assert!(!form.flag("active"));
        assert_eq!(form.value("active"), Some(&json!(false)));
    }
}
