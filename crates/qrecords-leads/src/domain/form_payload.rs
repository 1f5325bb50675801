//! Lenient reading of form payloads
//!
//! Browsers post whatever the form produced. A field holding the wrong JSON
//! type is recorded as mistyped instead of rejecting the whole body, so the
//! validator can report it next to every other failing field.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// A form field addressable by its JSON key
pub trait FormField: Copy + Ord {
    fn path(self) -> &'static str;
}

/// JSON object being read field by field
pub(crate) struct FormPayload<F> {
    values: Map<String, Value>,
    mistyped: BTreeSet<F>,
}

impl<F: FormField> FormPayload<F> {
    /// Only a non-object body is an error.
    pub(crate) fn read<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self {
            values: Map::deserialize(deserializer)?,
            mistyped: BTreeSet::new(),
        })
    }

    /// `null` counts as absent.
    pub(crate) fn text(&mut self, field: F) -> Option<String> {
        match self.values.remove(field.path()) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text),
            Some(_) => self.mark(field),
        }
    }

    pub(crate) fn flag(&mut self, field: F) -> Option<bool> {
        match self.values.remove(field.path()) {
            None | Some(Value::Null) => None,
            Some(Value::Bool(flag)) => Some(flag),
            Some(_) => self.mark(field),
        }
    }

    pub(crate) fn into_mistyped(self) -> BTreeSet<F> {
        self.mistyped
    }

    fn mark<T>(&mut self, field: F) -> Option<T> {
        self.mistyped.insert(field);
        None
    }
}
