//! Conversion of an inferred [`Shape`] into a JSON Schema document.
//!
//! Nested objects are hoisted into `definitions` so that every generated type gets
//! a readable name instead of one derived from its position.

use std::collections::BTreeSet;

use schemars::schema::{
    ArrayValidation, InstanceType, ObjectValidation, RootSchema, Schema, SchemaObject,
    SingleOrVec, SubschemaValidation,
};

use crate::shape::{ObjectShape, Shape};

const META_SCHEMA: &str = "http://json-schema.org/draft-07/schema#";

pub(crate) fn emit(shape: &Shape, root_name: &str, skip_conversions: bool) -> RootSchema {
    let root_name = shape.type_name.as_deref().unwrap_or(root_name);
    let mut emitter = Emitter {
        skip_conversions,
        root: RootSchema::default(),
        used_names: BTreeSet::from([root_name.to_string()]),
    };

    let mut schema = match (&shape.forced, &shape.object) {
        (None, Some(object)) if shape.is_object_only() => emitter.object_schema(object, root_name),
        _ => emitter.schema_for(shape, root_name, "").into_object(),
    };
    schema.metadata().title = Some(root_name.to_string());

    let mut root = emitter.root;
    root.meta_schema = Some(META_SCHEMA.to_string());
    root.schema = schema;
    root
}

struct Emitter {
    skip_conversions: bool,
    root: RootSchema,
    used_names: BTreeSet<String>,
}

impl Emitter {
    fn schema_for(&mut self, shape: &Shape, hint: &str, parent: &str) -> Schema {
        if let Some(forced) = &shape.forced {
            return forced.clone();
        }
        if shape.is_unknown() {
            return Schema::Bool(true);
        }

        let mut instance_types = Vec::new();
        let mut scalar = SchemaObject::default();

        if shape.boolean {
            instance_types.push(InstanceType::Boolean);
        }
        if shape.number {
            instance_types.push(InstanceType::Number);
        } else if shape.integer {
            instance_types.push(InstanceType::Integer);
        }
        if let Some(formats) = shape.string {
            instance_types.push(InstanceType::String);
            if !self.skip_conversions && shape.is_string_only() {
                scalar.format = formats.format().map(str::to_string);
            }
        }
        if let Some(element) = &shape.array {
            instance_types.push(InstanceType::Array);
            let items = (!element.is_unknown())
                .then(|| self.schema_for(element, &format!("{hint}Item"), parent));
            scalar.array = Some(Box::new(ArrayValidation {
                items: items.map(|schema| SingleOrVec::Single(Box::new(schema))),
                ..Default::default()
            }));
        }

        let object = shape.object.as_ref().map(|object| {
            let name = self.claim_name(shape.type_name.as_deref().unwrap_or(hint), parent);
            let definition = self.object_schema(object, &name);
            self.root.definitions.insert(name.clone(), definition.into());
            SchemaObject::new_ref(format!("#/definitions/{name}"))
        });

        match object {
            None => {
                if shape.null {
                    instance_types.push(InstanceType::Null);
                }
                scalar.instance_type = Some(instance_types_of(instance_types));
                scalar.into()
            }
            Some(reference) if instance_types.is_empty() && !shape.null => reference.into(),
            Some(reference) => {
                let mut variants = vec![reference.into()];
                if !instance_types.is_empty() {
                    scalar.instance_type = Some(instance_types_of(instance_types));
                    variants.push(scalar.into());
                }
                if shape.null {
                    variants.push(
                        SchemaObject {
                            instance_type: Some(InstanceType::Null.into()),
                            ..Default::default()
                        }
                        .into(),
                    );
                }
                SchemaObject {
                    subschemas: Some(Box::new(SubschemaValidation {
                        one_of: Some(variants),
                        ..Default::default()
                    })),
                    ..Default::default()
                }
                .into()
            }
        }
    }

    fn object_schema(&mut self, object: &ObjectShape, type_name: &str) -> SchemaObject {
        let mut validation = ObjectValidation::default();
        for (key, field) in &object.fields {
            let schema = self.schema_for(&field.shape, &pascal_case(key), type_name);
            validation.properties.insert(key.clone(), schema);
            if field.is_required(object.samples) {
                validation.required.insert(key.clone());
            }
        }

        SchemaObject {
            instance_type: Some(InstanceType::Object.into()),
            object: Some(Box::new(validation)),
            ..Default::default()
        }
    }

    /// Reserve a unique definition name, preferring `hint`, then `{parent}{hint}`,
    /// then a numeric suffix.
    fn claim_name(&mut self, hint: &str, parent: &str) -> String {
        let hint = pascal_case(hint);
        let mut candidates = vec![hint.clone()];
        if !parent.is_empty() {
            candidates.push(format!("{parent}{hint}"));
        }

        for candidate in candidates {
            if self.used_names.insert(candidate.clone()) {
                return candidate;
            }
        }

        let mut suffix = 2;
        loop {
            let candidate = format!("{hint}{suffix}");
            if self.used_names.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

impl Shape {
    fn is_object_only(&self) -> bool {
        self.object.is_some()
            && !self.null
            && !self.boolean
            && !self.integer
            && !self.number
            && self.string.is_none()
            && self.array.is_none()
    }

    fn is_string_only(&self) -> bool {
        self.string.is_some()
            && !self.boolean
            && !self.integer
            && !self.number
            && self.array.is_none()
            && self.object.is_none()
    }
}

fn instance_types_of(mut types: Vec<InstanceType>) -> SingleOrVec<InstanceType> {
    if types.len() == 1 {
        SingleOrVec::Single(Box::new(types.remove(0)))
    } else {
        SingleOrVec::Vec(types)
    }
}

/// `user_name`, `user-name` and `userName` all become `UserName`.
pub(crate) fn pascal_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for word in key
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }

    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "Type");
    }
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn emit_values(values: &[serde_json::Value]) -> serde_json::Value {
        let shape = Shape::from_values(values);
        serde_json::to_value(emit(&shape, "Root", false)).unwrap()
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("user_name"), "UserName");
        assert_eq!(pascal_case("user-name"), "UserName");
        assert_eq!(pascal_case("userName"), "UserName");
        assert_eq!(pascal_case("42"), "Type42");
        assert_eq!(pascal_case("__"), "Type");
    }

    #[test]
    fn test_root_object_is_inline_and_titled() {
        let schema = emit_values(&[json!({"id": 1, "name": "a"}), json!({"id": 2})]);

        assert_eq!(schema["title"], "Root");
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["id"]));
        assert_eq!(schema["properties"]["id"]["type"], "integer");
        assert_eq!(schema["properties"]["name"]["type"], "string");
    }

    #[test]
    fn test_nested_objects_are_hoisted() {
        let schema = emit_values(&[json!({"owner": {"login": "a"}, "tags": [{"name": "x"}]})]);

        assert_eq!(
            schema["properties"]["owner"]["$ref"],
            "#/definitions/Owner"
        );
        assert_eq!(
            schema["properties"]["tags"]["items"]["$ref"],
            "#/definitions/TagsItem"
        );
        assert_eq!(schema["definitions"]["Owner"]["required"], json!(["login"]));
    }

    #[test]
    fn test_colliding_names_are_prefixed_with_parent() {
        let schema = emit_values(&[json!({
            "root": {"id": 1},
            "a": {"owner": {"id": 1}},
            "b": {"owner": {"id": "x"}},
        })]);

        let definitions = schema["definitions"].as_object().unwrap();
        assert!(definitions.contains_key("RootRoot"));
        assert!(definitions.contains_key("Owner"));
        assert!(definitions.contains_key("BOwner"));
    }

    #[test]
    fn test_nullable_scalars_and_references() {
        let schema = emit_values(&[
            json!({"count": 1, "parent": {"id": 1}}),
            json!({"count": null, "parent": null}),
        ]);

        assert_eq!(
            schema["properties"]["count"]["type"],
            json!(["integer", "null"])
        );
        assert_eq!(
            schema["properties"]["parent"]["oneOf"],
            json!([{"$ref": "#/definitions/Parent"}, {"type": "null"}])
        );
    }

    #[test]
    fn test_skip_conversions_drops_formats() {
        let shape = Shape::from_values([&json!({"at": "2024-05-01T12:00:00Z"})]);

        let converted = serde_json::to_value(emit(&shape, "Root", false)).unwrap();
        assert_eq!(converted["properties"]["at"]["format"], "date-time");

        let raw = serde_json::to_value(emit(&shape, "Root", true)).unwrap();
        assert!(raw["properties"]["at"].get("format").is_none());
    }

    #[test]
    fn test_unknown_values_accept_anything() {
        let schema = emit_values(&[json!({"nothing": null, "empty": []})]);
        assert_eq!(schema["properties"]["nothing"], json!(true));
        assert_eq!(schema["properties"]["empty"], json!({"type": "array"}));
    }
}
