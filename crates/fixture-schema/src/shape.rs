//! Structural summary of a set of JSON values.
//!
//! Every fixture is folded into a single [`Shape`] that remembers which JSON kinds
//! were observed at each position, how often object fields were present, and which
//! string formats every observed string satisfied.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use schemars::schema::Schema;
use serde_json::Value;
use uuid::Uuid;

/// String formats satisfied by every string observed at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringFormats {
    uuid: bool,
    date_time: bool,
    date: bool,
}

impl StringFormats {
    fn detect(value: &str) -> Self {
        Self {
            uuid: value.len() == 36 && Uuid::try_parse(value).is_ok(),
            date_time: DateTime::parse_from_rfc3339(value).is_ok(),
            date: value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            uuid: self.uuid && other.uuid,
            date_time: self.date_time && other.date_time,
            date: self.date && other.date,
        }
    }

    /// JSON Schema `format` keyword shared by all observed strings
    pub fn format(&self) -> Option<&'static str> {
        if self.uuid {
            Some("uuid")
        } else if self.date_time {
            Some("date-time")
        } else if self.date {
            Some("date")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    pub(crate) null: bool,
    pub(crate) boolean: bool,
    pub(crate) integer: bool,
    pub(crate) number: bool,
    pub(crate) string: Option<StringFormats>,
    /// Element shape; a default shape means no element was ever observed
    pub(crate) array: Option<Box<Shape>>,
    pub(crate) object: Option<ObjectShape>,

    pub(crate) type_name: Option<String>,
    pub(crate) forced: Option<Schema>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectShape {
    /// Number of objects observed at this position
    pub(crate) samples: usize,
    pub(crate) fields: BTreeMap<String, FieldShape>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldShape {
    /// Number of observed objects that carried this field
    pub(crate) seen: usize,
    pub(crate) force_optional: bool,
    pub(crate) shape: Shape,
}

impl FieldShape {
    pub fn is_required(&self, samples: usize) -> bool {
        !self.force_optional && self.seen == samples
    }
}

impl Shape {
    pub fn from_values<'v>(values: impl IntoIterator<Item = &'v Value>) -> Self {
        let mut shape = Shape::default();
        for value in values {
            shape.observe(value);
        }
        shape
    }

    /// Fold one more value into this shape
    pub fn observe(&mut self, value: &Value) {
        match value {
            Value::Null => self.null = true,
            Value::Bool(_) => self.boolean = true,
            Value::Number(number) => {
                if number.is_i64() || number.is_u64() {
                    self.integer = true;
                } else {
                    self.number = true;
                }
            }
            Value::String(s) => {
                let detected = StringFormats::detect(s);
                self.string = Some(match self.string {
                    Some(formats) => formats.merge(detected),
                    None => detected,
                });
            }
            Value::Array(items) => {
                let element = self.array.get_or_insert_with(Default::default);
                for item in items {
                    element.observe(item);
                }
            }
            Value::Object(map) => {
                let object = self.object.get_or_insert_with(Default::default);
                object.samples += 1;
                for (key, value) in map {
                    let field = object.fields.entry(key.clone()).or_default();
                    field.seen += 1;
                    field.shape.observe(value);
                }
            }
        }
    }

    /// True when no non-null value was ever observed here
    pub fn is_unknown(&self) -> bool {
        !self.boolean
            && !self.integer
            && !self.number
            && self.string.is_none()
            && self.array.is_none()
            && self.object.is_none()
    }

    pub fn object(&self) -> Option<&ObjectShape> {
        self.object.as_ref()
    }

    pub fn is_nullable(&self) -> bool {
        self.null
    }
}

impl ObjectShape {
    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn field(&self, name: &str) -> Option<&FieldShape> {
        self.fields.get(name)
    }
}
