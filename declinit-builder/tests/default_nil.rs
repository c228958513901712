//! Defaults never override explicitly passed arguments.

use declinit_builder::{Class, Settings};
use declinit_core::{Args, Value};

fn foo() -> Class {
    let mut foo = Class::new("Foo");
    foo.param("foo", Settings::new().default_value(Value::Nil))
        .unwrap()
        .param("bar", Settings::new().default_value(Value::Nil))
        .unwrap();
    foo
}

#[test]
fn is_assigned() {
    let subject = foo().instantiate(Args::new().arg(1)).unwrap();

    assert_eq!(subject.read("foo"), Ok(&Value::Int(1)));
    assert_eq!(subject.read("bar"), Ok(&Value::Nil));
}

#[test]
fn all_omitted() {
    let subject = foo().instantiate(Args::new()).unwrap();

    assert_eq!(subject.read("foo"), Ok(&Value::Nil));
    assert_eq!(subject.read("bar"), Ok(&Value::Nil));
}

#[test]
fn explicit_nil_is_kept_over_a_non_nil_default() {
    let mut class = Class::new("Foo");
    class
        .option("foo", Settings::new().default_value(5))
        .unwrap();

    let explicit = class.instantiate(Args::new().opt("foo", Value::Nil)).unwrap();
    let omitted = class.instantiate(Args::new()).unwrap();

    assert_eq!(explicit.read("foo"), Ok(&Value::Nil));
    assert_eq!(omitted.read("foo"), Ok(&Value::Int(5)));
}

#[test]
fn default_depends_on_other_parameters() {
    let mut class = Class::new("Range");
    class
        .option(
            "to",
            Settings::new().default_with(|instance| {
                let from = instance.ivar("from").and_then(Value::as_int).unwrap_or(0);
                Value::Int(from + 10)
            }),
        )
        .unwrap()
        .param("from", Settings::new())
        .unwrap();

    let range = class.instantiate(Args::new().arg(5)).unwrap();
    assert_eq!(range.read("to"), Ok(&Value::Int(15)));
}

#[test]
fn hidden_parameter_is_still_assigned() {
    let mut class = Class::new("Secret");
    class
        .param("token", Settings::new().reader(false))
        .unwrap()
        .option(
            "masked",
            Settings::new().default_with(|instance| {
                let len = instance
                    .ivar("token")
                    .and_then(Value::as_str)
                    .map_or(0, str::len);
                Value::from("*".repeat(len))
            }),
        )
        .unwrap();

    let secret = class.instantiate(Args::new().arg("abc")).unwrap();
    assert!(!secret.responds_to("token"));
    assert!(secret.read("token").is_err());
    assert_eq!(secret.ivar("token"), Some(&Value::from("abc")));
    assert_eq!(secret.read("masked"), Ok(&Value::from("***")));
}
