//! Constructor invocation arguments.

use indexmap::IndexMap;

use crate::Value;

/// The arguments of one constructor call: positional values in order,
/// followed by keyword values.
///
/// # Example
///
/// ```
/// use declinit_core::{Args, Value};
///
/// let args = Args::new().arg(1).arg(2).opt("bar", 3);
/// assert_eq!(args.positional(), &[Value::Int(1), Value::Int(2)]);
/// assert_eq!(args.keyword("bar"), Some(&Value::Int(3)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    keywords: IndexMap<String, Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword argument. A repeated key keeps its first position and
    /// takes the last value.
    pub fn opt(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(name.into(), value.into());
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords.get(name)
    }

    pub fn keywords(&self) -> &IndexMap<String, Value> {
        &self.keywords
    }

    /// Split into owned positional and keyword parts.
    pub fn into_parts(self) -> (Vec<Value>, IndexMap<String, Value>) {
        (self.positional, self.keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_keyword_last_wins() {
        let args = Args::new().opt("a", 1).opt("b", 2).opt("a", 3);
        let keys: Vec<_> = args.keywords().keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(args.keyword("a"), Some(&Value::Int(3)));
    }
}
