use schemars::schema::Schema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::GeneratorError, shape::Shape};

/// A directive that adjusts the inferred schema before it is rendered.
///
/// Paths are dotted field names; a `[]` suffix descends into array elements, so
/// `data[].owner` addresses the `owner` field of every element of `data`. The empty
/// path addresses the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Override {
    /// Name the object type at `path`
    TypeName { path: String, name: String },
    /// Replace the inferred schema at `path` with a literal JSON Schema
    Schema { path: String, schema: Value },
    /// Treat the field at `path` as optional even if every fixture carries it
    Optional { path: String },
}

impl Override {
    pub fn path(&self) -> &str {
        match self {
            Override::TypeName { path, .. }
            | Override::Schema { path, .. }
            | Override::Optional { path } => path,
        }
    }

    pub(crate) fn apply(&self, shape: &mut Shape) -> Result<(), GeneratorError> {
        let unknown = || GeneratorError::UnknownOverridePath(self.path().to_string());
        let segments = parse_path(self.path()).ok_or_else(unknown)?;

        match self {
            Override::TypeName { name, .. } => {
                resolve(shape, &segments).ok_or_else(unknown)?.type_name = Some(name.clone());
            }
            Override::Schema { path, schema } => {
                let schema = serde_json::from_value::<Schema>(schema.clone()).map_err(|source| {
                    GeneratorError::InvalidOverride {
                        path: path.clone(),
                        source,
                    }
                })?;
                resolve(shape, &segments).ok_or_else(unknown)?.forced = Some(schema);
            }
            Override::Optional { .. } => {
                let Some((Segment::Field(name), parent)) = segments.split_last() else {
                    return Err(unknown());
                };
                let field = resolve(shape, parent)
                    .and_then(|parent| parent.object.as_mut())
                    .and_then(|object| object.fields.get_mut(*name))
                    .ok_or_else(unknown)?;
                field.force_optional = true;
            }
        }

        tracing::debug!(path = self.path(), "applied schema override");

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Field(&'a str),
    Items,
}

fn parse_path(path: &str) -> Option<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    if path.is_empty() {
        return Some(segments);
    }

    for part in path.split('.') {
        let mut name = part;
        let mut depth = 0;
        while let Some(stripped) = name.strip_suffix("[]") {
            name = stripped;
            depth += 1;
        }

        if name.is_empty() && depth == 0 {
            return None;
        }
        if !name.is_empty() {
            segments.push(Segment::Field(name));
        }
        segments.extend(std::iter::repeat(Segment::Items).take(depth));
    }

    Some(segments)
}

fn resolve<'s>(shape: &'s mut Shape, segments: &[Segment<'_>]) -> Option<&'s mut Shape> {
    let mut node = shape;
    for segment in segments {
        node = match segment {
            Segment::Field(name) => &mut node.object.as_mut()?.fields.get_mut(*name)?.shape,
            Segment::Items => node.array.as_deref_mut()?,
        };
    }
    Some(node)
}
