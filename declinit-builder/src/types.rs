//! Type capabilities.
//!
//! A [`Type`] validates an incoming argument and may coerce it. The builder
//! never inspects values itself; it only calls the capability attached to a
//! parameter and reports a rejection as a type-constraint error.

use std::{fmt, sync::Arc};

use declinit_core::Value;

type CheckFn = dyn Fn(Value) -> Result<Value, String> + Send + Sync;

/// A named checking or coercing function.
#[derive(Clone)]
pub struct Type {
    name: Arc<str>,
    check: Arc<CheckFn>,
}

impl Type {
    /// Create a type from a name and a check. The check returns the value to
    /// assign (possibly transformed) or a rejection reason.
    pub fn new(
        name: impl Into<Arc<str>>,
        check: impl Fn(Value) -> Result<Value, String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, value: Value) -> Result<Value, String> {
        (self.check)(value)
    }

    /// Accepts anything.
    pub fn any() -> Self {
        Self::new("any", Ok)
    }

    pub fn integer() -> Self {
        Self::strict("integer")
    }

    pub fn float() -> Self {
        Self::strict("float")
    }

    pub fn string() -> Self {
        Self::strict("string")
    }

    pub fn bool() -> Self {
        Self::strict("bool")
    }

    /// Accepts integers, integral floats and strings holding an integer.
    pub fn coercible_integer() -> Self {
        Self::new("coercible_integer", |value| match value {
            Value::Int(i) => Ok(Value::Int(i)),
            Value::Float(f)
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 =>
            {
                Ok(Value::Int(f as i64))
            }
            Value::Str(ref s) => s
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| format!("cannot coerce {} to integer", value)),
            other => Err(format!("cannot coerce {} to integer", other.kind())),
        })
    }

    /// Accepts `nil` in addition to whatever `inner` accepts.
    pub fn optional(inner: Type) -> Self {
        let name = format!("{}?", inner.name());
        Self::new(name, move |value| match value {
            Value::Nil => Ok(Value::Nil),
            other => inner.call(other),
        })
    }

    /// Accepts only the listed values.
    pub fn one_of(values: Vec<Value>) -> Self {
        Self::new("one_of", move |value| {
            if values.contains(&value) {
                Ok(value)
            } else {
                Err(format!("{} is not one of the allowed values", value))
            }
        })
    }

    /// Resolve a type by the name used in manifests. A trailing `?` wraps
    /// the type in [`Type::optional`].
    pub fn lookup(name: &str) -> Option<Self> {
        if let Some(inner) = name.strip_suffix('?') {
            return Self::lookup(inner).map(Self::optional);
        }
        match name {
            "any" => Some(Self::any()),
            "integer" => Some(Self::integer()),
            "float" => Some(Self::float()),
            "string" => Some(Self::string()),
            "bool" => Some(Self::bool()),
            "coercible_integer" => Some(Self::coercible_integer()),
            _ => None,
        }
    }

    fn strict(kind: &'static str) -> Self {
        Self::new(kind, move |value| {
            if value.kind() == kind {
                Ok(value)
            } else {
                Err(format!("expected {}, got {}", kind, value.kind()))
            }
        })
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Type").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_types() {
        assert_eq!(Type::integer().call(Value::Int(1)), Ok(Value::Int(1)));
        assert_eq!(
            Type::integer().call(Value::from("1")),
            Err("expected integer, got string".to_string())
        );
        assert!(Type::string().call(Value::from("x")).is_ok());
    }

    #[test]
    fn test_coercible_integer() {
        let ty = Type::coercible_integer();
        assert_eq!(ty.call(Value::from(" 42 ")), Ok(Value::Int(42)));
        assert_eq!(ty.call(Value::Float(3.0)), Ok(Value::Int(3)));
        assert!(ty.call(Value::Float(3.5)).is_err());
        assert!(ty.call(Value::Float(1e20)).is_err());
        assert!(ty.call(Value::Float(-1e20)).is_err());
        assert!(ty.call(Value::Float(f64::INFINITY)).is_err());
        assert!(ty.call(Value::from("abc")).is_err());
    }

    #[test]
    fn test_optional_accepts_nil() {
        let ty = Type::optional(Type::integer());
        assert_eq!(ty.name(), "integer?");
        assert_eq!(ty.call(Value::Nil), Ok(Value::Nil));
        assert!(ty.call(Value::Bool(true)).is_err());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Type::lookup("string").map(|t| t.name().to_string()), Some("string".into()));
        assert_eq!(
            Type::lookup("coercible_integer?").map(|t| t.name().to_string()),
            Some("coercible_integer?".into())
        );
        assert!(Type::lookup("decimal").is_none());
    }

    #[test]
    fn test_one_of() {
        let ty = Type::one_of(vec![Value::from("a"), Value::from("b")]);
        assert!(ty.call(Value::from("a")).is_ok());
        assert!(ty.call(Value::from("c")).is_err());
    }
}
