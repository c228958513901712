//! Objects produced by generated constructors.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{Error, Result, Value};

static NIL: Value = Value::Nil;

/// An instance built by a generated constructor.
///
/// Slots hold every assigned parameter, whether or not it has a reader. A
/// slot that is absent is still unset, which is how default callbacks tell an
/// omitted argument apart from an explicit `nil`.
#[derive(Debug, Clone)]
pub struct Instance {
    class: Arc<str>,
    readers: Arc<IndexSet<String>>,
    slots: IndexMap<String, Value>,
    unknown_options: Option<IndexMap<String, Value>>,
}

impl Instance {
    /// Create an empty instance of `class` exposing the given readers.
    pub fn new(class: Arc<str>, readers: Arc<IndexSet<String>>) -> Self {
        Self {
            class,
            readers,
            slots: IndexMap::new(),
            unknown_options: None,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class
    }

    /// Call a generated reader.
    pub fn read(&self, name: &str) -> Result<&Value> {
        if !self.responds_to(name) {
            return Err(Error::NoSuchReader {
                class: self.class.to_string(),
                name: name.to_string(),
            });
        }
        Ok(self.slots.get(name).unwrap_or(&NIL))
    }

    /// Whether a public reader named `name` was generated.
    pub fn responds_to(&self, name: &str) -> bool {
        self.readers.contains(name)
    }

    /// Internal slot access, bypassing reader visibility.
    pub fn ivar(&self, name: &str) -> Option<&Value> {
        self.slots.get(name)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn set_ivar(&mut self, name: impl Into<String>, value: Value) {
        self.slots.insert(name.into(), value);
    }

    pub fn unset_ivar(&mut self, name: &str) {
        self.slots.shift_remove(name);
    }

    /// Keyword arguments captured by an absorbing constructor.
    pub fn unknown_options(&self) -> Option<&IndexMap<String, Value>> {
        self.unknown_options.as_ref()
    }

    pub fn set_unknown_options(&mut self, options: IndexMap<String, Value>) {
        self.unknown_options = Some(options);
    }
}

/// Serializes the readable slots in reader order.
impl Serialize for Instance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.readers.len()))?;
        for name in self.readers.iter() {
            map.serialize_entry(name, self.slots.get(name).unwrap_or(&NIL))?;
        }
        map.end()
    }
}
