//! The session-wide symbol table.

use crate::builtins::Builtin;
use crate::errors;
use crate::value::Value;

/// Ordered mapping from symbol name to an owned value.
///
/// There is one environment per session: created at startup, pre-populated
/// with the builtin catalogue, mutated by `def` (and the REPL) until
/// shutdown. Insertion order is preserved; names are unique.
///
/// Lookup is a linear scan. The table holds a handful of builtins plus the
/// session's `def` bindings, and `put` must preserve both order and
/// uniqueness, so a `Vec` of entries is the honest structure.
///
/// Ownership discipline: `put` takes its value by move and `get` returns a
/// clone, so a value inside the environment never aliases one outside it.
pub struct Environment {
    entries: Vec<(String, Value)>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment {
            entries: Vec::new(),
        }
    }

    /// Create an environment pre-populated with the builtin catalogue.
    pub fn with_builtins() -> Self {
        let mut env = Environment::new();
        for builtin in Builtin::CATALOGUE {
            env.put(builtin.name(), Value::function(builtin));
        }
        env
    }

    /// Look up `name`, returning a clone of its value.
    ///
    /// An absent name is not a fault: the result is an unbound-symbol error
    /// value, which flows through evaluation like any other datum.
    pub fn get(&self, name: &str) -> Value {
        self.entries
            .iter()
            .find(|(bound, _)| bound == name)
            .map_or_else(errors::unbound_symbol, |(_, value)| value.clone())
    }

    /// Bind `name` to `value`.
    ///
    /// Replaces in place if the name is already bound (keeping its position),
    /// otherwise appends. Never creates duplicates.
    pub fn put(&mut self, name: &str, value: Value) {
        if let Some(entry) = self.entries.iter_mut().find(|(bound, _)| bound == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_owned(), value));
        }
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the environment has no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate bindings in insertion order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
