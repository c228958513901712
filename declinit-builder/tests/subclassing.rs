//! A subclass extends its parent's declarations without changing the parent.

use declinit_builder::{Class, Settings};
use declinit_core::{Args, Error, Value};

fn classes() -> (Class, Class) {
    let mut foo = Class::new("Foo");
    foo.param("foo", Settings::new())
        .unwrap()
        .option("bar", Settings::new())
        .unwrap();

    let mut bar = foo.subclass("Bar");
    bar.param("baz", Settings::new())
        .unwrap()
        .option("qux", Settings::new())
        .unwrap();

    (foo, bar)
}

#[test]
fn preserves_definitions_made_in_the_superclass() {
    let (_, bar) = classes();
    let instance = bar
        .instantiate(Args::new().arg(1).arg(2).opt("bar", 3).opt("qux", 4))
        .unwrap();

    assert_eq!(instance.read("foo"), Ok(&Value::Int(1)));
    assert_eq!(instance.read("baz"), Ok(&Value::Int(2)));
    assert_eq!(instance.read("bar"), Ok(&Value::Int(3)));
    assert_eq!(instance.read("qux"), Ok(&Value::Int(4)));
}

#[test]
fn does_not_pollute_superclass_with_definitions_from_subclass() {
    let (foo, _) = classes();
    let instance = foo.instantiate(Args::new().arg(1).opt("bar", 3)).unwrap();

    assert_eq!(instance.read("foo"), Ok(&Value::Int(1)));
    assert_eq!(instance.read("bar"), Ok(&Value::Int(3)));
    assert!(!instance.responds_to("baz"));
    assert!(!instance.responds_to("qux"));
    assert!(!foo.defines_reader("baz"));
}

#[test]
fn superclass_keeps_its_arity() {
    let (foo, _) = classes();
    let err = foo
        .instantiate(Args::new().arg(1).arg(2).opt("bar", 3))
        .unwrap_err();
    assert!(matches!(err, Error::TooManyArguments { given: 2, expected: 1, .. }));

    let err = foo
        .instantiate(Args::new().arg(1).opt("bar", 3).opt("qux", 4))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownOption { ref name, .. } if name == "qux"));
}

#[test]
fn subclass_without_declarations_uses_parent_constructor() {
    let (foo, _) = classes();
    let child = foo.subclass("Child");
    let instance = child.instantiate(Args::new().arg(1).opt("bar", 2)).unwrap();

    assert_eq!(instance.class_name(), "Child");
    assert_eq!(instance.read("bar"), Ok(&Value::Int(2)));
}

#[test]
fn sibling_subclasses_diverge_independently() {
    let (foo, _) = classes();
    let mut left = foo.subclass("Left");
    let mut right = foo.subclass("Right");
    left.option("side", Settings::new().default_value("left"))
        .unwrap();
    right.param("side", Settings::new()).unwrap();

    let l = left.instantiate(Args::new().arg(1).opt("bar", 2)).unwrap();
    let r = right
        .instantiate(Args::new().arg(1).arg("right").opt("bar", 2))
        .unwrap();

    assert_eq!(l.read("side"), Ok(&Value::from("left")));
    assert_eq!(r.read("side"), Ok(&Value::from("right")));
}

#[test]
fn redeclaring_an_inherited_name_is_a_duplicate() {
    let (_, mut bar) = classes();
    let err = bar.option("foo", Settings::new()).unwrap_err();
    assert_eq!(err, Error::DuplicateParameter { name: "foo".into() });
}

#[test]
fn tolerance_is_inherited_and_overridable() {
    let mut parent = Class::new("Parent");
    parent.tolerant_to_unknown_options();

    let mut child = parent.subclass("Child");
    assert!(child.instantiate(Args::new().opt("x", 1)).is_ok());

    child.intolerant_to_unknown_options();
    assert!(child.instantiate(Args::new().opt("x", 1)).is_err());
    assert!(parent.instantiate(Args::new().opt("x", 1)).is_ok());
}
