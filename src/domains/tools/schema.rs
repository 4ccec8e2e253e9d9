//! Declarative parameter schemas and validation.
//!
//! Each tool declares the shape of its parameters as a `Schema` value:
//! a set of named fields, each with a JSON type, a human-readable
//! description, and a required/optional flag. The validator interprets
//! that value against the raw `params` of an incoming call, so validation
//! logic stays data-driven and testable in isolation.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};
use thiserror::Error;

/// Parameters that passed validation, keyed by field name.
///
/// Handlers only ever see params through this type, so they can rely on
/// every declared field carrying its declared JSON type.
pub type ValidatedParams = Map<String, Value>;

/// The JSON type a parameter field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl FieldKind {
    /// JSON Schema type name for this kind.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    /// Check whether a JSON value carries this kind.
    ///
    /// No implicit coercion: a declared string field must be a JSON string,
    /// a declared number a JSON number.
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
        }
    }
}

/// Declaration of a single parameter field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Expected JSON type.
    pub kind: FieldKind,

    /// Human-readable description, surfaced through tool introspection.
    pub description: &'static str,

    /// Whether the field must be present.
    pub required: bool,
}

/// Declarative description of a tool's expected parameters.
///
/// Immutable once attached to a tool definition. Fields are kept in a
/// `BTreeMap` so the rendered JSON schema is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: BTreeMap<&'static str, FieldSpec>,
}

impl Schema {
    /// Create an empty schema (a tool taking no parameters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required field.
    pub fn field(mut self, name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        self.fields.insert(
            name,
            FieldSpec {
                kind,
                description,
                required: true,
            },
        );
        self
    }

    /// Add an optional field.
    pub fn optional_field(
        mut self,
        name: &'static str,
        kind: FieldKind,
        description: &'static str,
    ) -> Self {
        self.fields.insert(
            name,
            FieldSpec {
                kind,
                description,
                required: false,
            },
        );
        self
    }

    /// Validate a raw params value against this schema.
    ///
    /// Absent or `null` params are treated as the empty object. Every
    /// violation is collected before returning, so a single error reports
    /// all missing fields, type mismatches, and unrecognized fields at once.
    /// Unrecognized fields are rejected outright to catch client drift early.
    pub fn validate(&self, raw: Option<&Value>) -> Result<ValidatedParams, ValidationError> {
        let empty = Map::new();
        let object = match raw {
            None | Some(Value::Null) => &empty,
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(ValidationError {
                    violations: vec![Violation::NotAnObject {
                        found: json_type_name(other),
                    }],
                });
            }
        };

        let mut violations = Vec::new();

        for (name, spec) in &self.fields {
            match object.get(*name) {
                Some(value) if spec.kind.matches(value) => {}
                Some(value) => violations.push(Violation::WrongType {
                    field: (*name).to_string(),
                    expected: spec.kind.type_name(),
                    found: json_type_name(value),
                }),
                None if spec.required => {
                    violations.push(Violation::MissingField((*name).to_string()));
                }
                None => {}
            }
        }

        for name in object.keys() {
            if !self.fields.contains_key(name.as_str()) {
                violations.push(Violation::UnknownField(name.clone()));
            }
        }

        if violations.is_empty() {
            Ok(object.clone())
        } else {
            Err(ValidationError { violations })
        }
    }

    /// Render this schema in the `inputSchema` shape used by tool listing:
    /// `{"type": "object", "properties": {...}, "required": [...]}`.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for (name, spec) in &self.fields {
            properties.insert(
                (*name).to_string(),
                json!({
                    "type": spec.kind.type_name(),
                    "description": spec.description,
                }),
            );
            if spec.required {
                required.push(Value::String((*name).to_string()));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required field was absent.
    MissingField(String),

    /// A field was present with the wrong JSON type.
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A field not declared by the schema was present.
    UnknownField(String),

    /// The params value itself was not a JSON object.
    NotAnObject { found: &'static str },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field '{field}'"),
            Self::WrongType {
                field,
                expected,
                found,
            } => write!(f, "field '{field}' must be a {expected}, got {found}"),
            Self::UnknownField(field) => write!(f, "unknown field '{field}'"),
            Self::NotAnObject { found } => write!(f, "params must be an object, got {found}"),
        }
    }
}

/// A structured report of every field that failed validation.
///
/// The display form joins all violations into the single message carried
/// by the invalid-params error envelope.
#[derive(Debug, Clone, Error)]
#[error("{}", .violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ValidationError {
    /// All violations found in one pass, in schema order.
    pub violations: Vec<Violation>,
}

/// JSON type name of a value, for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_schema() -> Schema {
        Schema::new().field("city", FieldKind::String, "Name of the city")
    }

    #[test]
    fn test_validate_valid_object() {
        let params = json!({ "city": "London" });
        let validated = city_schema().validate(Some(&params)).unwrap();
        assert_eq!(validated.get("city"), Some(&json!("London")));
    }

    #[test]
    fn test_validate_missing_required_field() {
        let params = json!({});
        let err = city_schema().validate(Some(&params)).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::MissingField("city".to_string())]
        );
        assert!(err.to_string().contains("missing required field 'city'"));
    }

    #[test]
    fn test_validate_absent_params_same_as_empty() {
        let err = city_schema().validate(None).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::MissingField("city".to_string())]
        );

        let err = city_schema().validate(Some(&Value::Null)).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::MissingField("city".to_string())]
        );
    }

    #[test]
    fn test_validate_wrong_type() {
        let params = json!({ "city": 42 });
        let err = city_schema().validate(Some(&params)).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::WrongType {
                field: "city".to_string(),
                expected: "string",
                found: "number",
            }]
        );
    }

    #[test]
    fn test_validate_rejects_unknown_field() {
        let params = json!({ "city": "London", "country": "UK" });
        let err = city_schema().validate(Some(&params)).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::UnknownField("country".to_string())]
        );
    }

    #[test]
    fn test_validate_enumerates_all_violations() {
        let schema = Schema::new()
            .field("city", FieldKind::String, "Name of the city")
            .field("days", FieldKind::Number, "Forecast length");
        let params = json!({ "days": "three", "units": "metric" });

        let err = schema.validate(Some(&params)).unwrap_err();
        assert_eq!(err.violations.len(), 3);
        assert!(err.violations.contains(&Violation::MissingField("city".to_string())));
        assert!(err.violations.contains(&Violation::WrongType {
            field: "days".to_string(),
            expected: "number",
            found: "string",
        }));
        assert!(err.violations.contains(&Violation::UnknownField("units".to_string())));

        let message = err.to_string();
        assert!(message.contains("city"));
        assert!(message.contains("days"));
        assert!(message.contains("units"));
    }

    #[test]
    fn test_validate_params_not_an_object() {
        let params = json!([1, 2, 3]);
        let err = city_schema().validate(Some(&params)).unwrap_err();
        assert_eq!(err.violations, vec![Violation::NotAnObject { found: "array" }]);
    }

    #[test]
    fn test_optional_field_may_be_absent() {
        let schema = Schema::new()
            .field("city", FieldKind::String, "Name of the city")
            .optional_field("units", FieldKind::String, "Unit system");
        let params = json!({ "city": "London" });
        assert!(schema.validate(Some(&params)).is_ok());

        // Present but mistyped optional fields still fail.
        let params = json!({ "city": "London", "units": true });
        let err = schema.validate(Some(&params)).unwrap_err();
        assert_eq!(err.violations.len(), 1);
    }

    #[test]
    fn test_empty_schema_accepts_empty_params() {
        let validated = Schema::new().validate(None).unwrap();
        assert!(validated.is_empty());
    }

    #[test]
    fn test_to_json_schema_shape() {
        let schema = city_schema().to_json_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["city"]["type"], "string");
        assert_eq!(schema["properties"]["city"]["description"], "Name of the city");
        assert_eq!(schema["required"], json!(["city"]));
    }
}
