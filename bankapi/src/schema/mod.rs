use serde_json::{json, Map, Value};

pub mod entities;

/// Lookup of the published entity schemas by name.
///
pub mod registry;

/// Validation of untyped JSON against an `EntitySchema`.
///
pub mod validate;

pub mod prelude {
    pub use super::{
        entities::*,
        registry,
        validate::{decode, Issue, IssueKind, ValidationError},
        EntitySchema, FieldDef, FieldType, HasSchema, Presence,
    };
}

/// Prefix used by `$ref` pointers between schemas.
pub const REF_PREFIX: &str = "#/components/schemas/";

/// The JSON shape a field accepts.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    String,
    /// Opaque identifier handle, rendered with the `uuid` format.
    Id,
    Email,
    Date,
    DateTime,
    Number,
    Integer,
    Enum(&'static [&'static str]),
    Object(&'static EntitySchema),
    Array(&'static FieldType),
    /// Free-form string keyed mapping.
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
    /// Assigned by the server: always present in responses, ignored on input.
    ReadOnly,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub ty: FieldType,
    pub presence: Presence,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl FieldDef {
    const fn new(name: &'static str, ty: FieldType, presence: Presence) -> Self {
        Self {
            name,
            ty,
            presence,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self::new(name, ty, Presence::Required)
    }

    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self::new(name, ty, Presence::Optional)
    }

    pub const fn read_only(name: &'static str, ty: FieldType) -> Self {
        Self::new(name, ty, Presence::ReadOnly)
    }

    /// Bounds the character count of a string field.
    pub const fn length(self, min: usize, max: usize) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            ..self
        }
    }

    fn to_json(&self) -> Value {
        let mut out = self.ty.to_json();
        if let Value::Object(map) = &mut out {
            if let Some(min) = self.min_length {
                map.insert("minLength".into(), min.into());
            }
            if let Some(max) = self.max_length {
                map.insert("maxLength".into(), max.into());
            }
            match self.presence {
                Presence::ReadOnly => {
                    map.insert("readOnly".into(), true.into());
                }
                Presence::Optional => {
                    map.insert("nullable".into(), true.into());
                }
                Presence::Required => {}
            }
        }
        out
    }
}

impl FieldType {
    fn to_json(&self) -> Value {
        match self {
            FieldType::String => json!({ "type": "string" }),
            FieldType::Id => json!({ "type": "string", "format": "uuid" }),
            FieldType::Email => json!({ "type": "string", "format": "email" }),
            FieldType::Date => json!({ "type": "string", "format": "date" }),
            FieldType::DateTime => json!({ "type": "string", "format": "date-time" }),
            FieldType::Number => json!({ "type": "number" }),
            FieldType::Integer => json!({ "type": "integer" }),
            FieldType::Enum(choices) => json!({ "type": "string", "enum": choices }),
            FieldType::Object(schema) => json!({ "$ref": schema.reference() }),
            FieldType::Array(item) => json!({ "type": "array", "items": item.to_json() }),
            FieldType::Map => json!({ "type": "object", "additionalProperties": true }),
        }
    }
}

/// Named constraint table for one entity.
#[derive(Debug)]
pub struct EntitySchema {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldDef],
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the fields every serialized instance carries.
    pub fn required(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|f| f.presence != Presence::Optional)
            .map(|f| f.name)
    }

    pub fn reference(&self) -> String {
        format!("{REF_PREFIX}{}", self.name)
    }

    /// Renders the table as an OpenAPI schema object.
    pub fn to_json(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.to_json()))
            .collect();
        let required: Vec<&str> = self.required().collect();

        json!({
            "title": self.name,
            "description": self.description,
            "type": "object",
            "required": required,
            "properties": properties,
        })
    }
}

/// Links a Rust type to the constraint table it is validated against.
pub trait HasSchema {
    fn schema() -> &'static EntitySchema;
}
