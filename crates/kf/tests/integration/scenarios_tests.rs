//! End-to-end resolution chains through the process-wide context
//!
//! None of these tests configure a strategy for `Instance`, so they can share
//! its slot under the parallel test runner.

use kf::{Resolvable, TypeRef, make};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Debug, PartialEq)]
enum Instance {
    A,
    B,
    C,
}

#[derive(Default)]
struct A;

#[derive(Default)]
struct B;

#[derive(Default)]
struct C;

impl From<A> for Instance {
    fn from(_: A) -> Self {
        Instance::A
    }
}

impl From<B> for Instance {
    fn from(_: B) -> Self {
        Instance::B
    }
}

impl From<C> for Instance {
    fn from(_: C) -> Self {
        Instance::C
    }
}

#[derive(Debug, Default, Error)]
#[error("some error")]
struct SomeError;

#[derive(Debug, Error)]
#[error("{0}")]
struct CustomError(String);

fn some_error() -> TypeRef<SomeError> {
    TypeRef::of::<SomeError>()
}

#[test]
fn test_resolves_an_instance() {
    let instance: Result<Instance, SomeError> = make("A")
        .resolve("A", TypeRef::of::<A>())
        .otherwise_throw(some_error());

    assert_eq!(instance.unwrap(), Instance::A);
}

#[test]
fn test_resolves_the_instance_for_the_first_match() {
    let instance: Result<Instance, SomeError> = make("A")
        .resolve("A", TypeRef::of::<A>())
        .resolve("A", TypeRef::of::<B>())
        .resolve_map([("A", TypeRef::of::<B>())])
        .otherwise_throw(some_error());

    assert_eq!(instance.unwrap(), Instance::A);
}

#[test]
fn test_throws_a_constructed_error_if_nothing_resolved() {
    let result: Result<Instance, SomeError> = make("A")
        .resolve("B", TypeRef::of::<B>())
        .otherwise_throw(some_error());

    match result {
        Err(err) => assert_eq!(err.to_string(), "some error"),
        Ok(instance) => panic!("Expected SomeError, got {instance:?}"),
    }
}

#[test]
fn test_throws_an_error_supplied_by_a_callback() {
    let result: Result<Instance, CustomError> = make("A")
        .resolve("B", TypeRef::of::<B>())
        .otherwise_throw(Resolvable::factory(|key: &&str| {
            CustomError(format!("Type {key} not found"))
        }));

    match result {
        Err(err) => assert_eq!(err.to_string(), "Type A not found"),
        Ok(instance) => panic!("Expected CustomError, got {instance:?}"),
    }
}

#[test]
fn test_resolves_an_instance_supplied_by_a_callback() {
    let instance = make("A")
        .resolve(
            "A",
            Resolvable::factory(|key: &&str| if *key == "A" { Instance::A } else { Instance::B }),
        )
        .otherwise_throw(some_error());

    assert_eq!(instance.unwrap(), Instance::A);
}

#[test]
fn test_resolves_an_instance_from_a_mapping() {
    let mut mapping = HashMap::new();
    mapping.insert("A", TypeRef::of::<A>());
    mapping.insert("B", TypeRef::of::<B>());

    let instance: Result<Instance, SomeError> =
        make("A").resolve_map(mapping).otherwise_throw(some_error());

    assert_eq!(instance.unwrap(), Instance::A);
}

#[test]
fn test_mapping_and_key_shapes_are_equivalent() {
    let by_key: Instance = make("C")
        .resolve("C", TypeRef::of::<C>())
        .otherwise(TypeRef::of::<A>());
    let by_mapping: Instance = make("C")
        .resolve_map(BTreeMap::from([("C", TypeRef::of::<C>())]))
        .otherwise(TypeRef::of::<A>());

    assert_eq!(by_key, by_mapping);
}

#[test]
fn test_resolves_otherwise_if_nothing_resolved() {
    let instance: Instance = make("A")
        .resolve("B", TypeRef::of::<B>())
        .otherwise(TypeRef::of::<C>());

    assert_eq!(instance, Instance::C);
}

#[test]
fn test_resolves_otherwise_callback_if_nothing_resolved() {
    let instance: Instance = make("A")
        .resolve("B", TypeRef::of::<B>())
        .otherwise(Resolvable::factory(|key: &&str| {
            if *key == "A" { Instance::C } else { Instance::B }
        }));

    assert_eq!(instance, Instance::C);
}

#[test]
fn test_does_not_resolve_otherwise_after_a_match() {
    let instance: Instance = make("A")
        .resolve("A", TypeRef::of::<A>())
        .otherwise(TypeRef::of::<B>());

    assert_eq!(instance, Instance::A);
}

#[test]
fn test_does_not_resolve_otherwise_after_a_callback_match() {
    let instance: Instance = make("A")
        .resolve(
            "A",
            Resolvable::factory(|key: &&str| if *key == "A" { Instance::A } else { Instance::B }),
        )
        .otherwise(TypeRef::of::<C>());

    assert_eq!(instance, Instance::A);
}

#[test]
fn test_mixed_shapes_continue_until_a_match() {
    let empty: HashMap<&str, TypeRef<Instance>> = HashMap::new();

    let instance: Instance = make("B")
        .resolve_map(empty)
        .resolve("A", TypeRef::of::<A>())
        .resolve_map([("C", TypeRef::of::<C>()), ("B", TypeRef::of::<B>())])
        .resolve("B", TypeRef::of::<C>())
        .otherwise(TypeRef::of::<A>());

    assert_eq!(instance, Instance::B);
}

#[test]
fn test_enum_subject_keys() {
    #[derive(Debug, PartialEq)]
    enum Kind {
        Alpha,
        Beta,
    }

    let instance: Instance = make(Kind::Beta)
        .resolve(Kind::Alpha, TypeRef::of::<A>())
        .resolve(Kind::Beta, TypeRef::of::<B>())
        .otherwise(TypeRef::of::<C>());

    assert_eq!(instance, Instance::B);
}
