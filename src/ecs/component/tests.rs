#![cfg(test)]

use std::collections::HashSet;

use super::*;

#[derive(Debug, PartialEq)]
struct Position(i32, i32);

#[derive(Debug, PartialEq)]
struct Velocity(i32, i32);

#[test]
fn test_component_type_identity() {
    assert_eq!(ComponentType::of::<Position>(), ComponentType::of::<Position>());
    assert_ne!(ComponentType::of::<Position>(), ComponentType::of::<Velocity>());

    let set: HashSet<_> = [
        ComponentType::of::<Position>(),
        ComponentType::of::<Velocity>(),
        ComponentType::of::<Position>(),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_component_type_display() {
    assert_eq!(ComponentType::of::<Position>().to_string(), "Position");
    assert_eq!(ComponentType::of::<u32>().to_string(), "u32");
    assert_eq!(ComponentType::of::<Vec<u8>>().to_string(), "Vec<u8>");
}

#[test]
fn test_boxed_downcast() {
    let boxed = BoxedComponent::new(Position(1, 2));
    assert_eq!(boxed.component_type(), ComponentType::of::<Position>());
    assert_eq!(boxed.downcast_ref::<Position>(), Some(&Position(1, 2)));
    assert!(boxed.downcast_ref::<Velocity>().is_none());

    let boxed = boxed.downcast::<Velocity>().unwrap_err();
    assert_eq!(boxed.downcast::<Position>().unwrap(), Position(1, 2));
}

#[test]
fn test_signature() {
    assert!(<()>::component_types().is_empty());

    let types = <(Position, Velocity)>::component_types();
    assert_eq!(
        &*types,
        &[ComponentType::of::<Position>(), ComponentType::of::<Velocity>()],
    );
}

#[test]
fn test_bundle() {
    let components = (Position(0, 0), Velocity(1, 1), 42_u8).into_components();
    let types: Vec<_> = components.iter().map(BoxedComponent::component_type).collect();
    assert_eq!(
        types,
        [
            ComponentType::of::<Position>(),
            ComponentType::of::<Velocity>(),
            ComponentType::of::<u8>(),
        ],
    );
    assert_eq!(components[2].downcast_ref::<u8>(), Some(&42));
}
