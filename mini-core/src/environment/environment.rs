use std::collections::HashMap;

use super::prelude::Value;

/// Variable bindings of a session. Assignment updates them in place.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    pub store: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.store.get(name)
    }

    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Bindings ordered by name.
    pub fn bindings(&self) -> Vec<(&str, &Value)> {
        let mut bindings = self.store.iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect::<Vec<_>>();

        bindings.sort_by_key(|(name, _)| *name);

        bindings
    }
}
