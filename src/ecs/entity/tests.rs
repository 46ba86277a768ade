#![cfg(test)]

use super::*;

#[derive(Debug, PartialEq)]
struct Name(&'static str);

#[derive(Debug, PartialEq)]
struct Health(u32);

#[test]
fn test_generated_ids() {
    let first = Entity::new();
    let second = Entity::new();
    assert!(!first.id().is_empty());
    assert_ne!(first.id(), second.id());
    assert_eq!(Entity::with_id("player").id(), "player");
}

#[test]
fn test_insertion() {
    let mut entity = Entity::with_id("foo");
    assert!(entity.is_empty());

    assert_eq!(entity.insert(Health(10)), None);
    assert!(entity.has::<Health>());
    assert_eq!(entity.get::<Health>(), Some(&Health(10)));

    assert_eq!(entity.insert(Health(20)), Some(Health(10)));
    assert_eq!(entity.len(), 1);

    assert_eq!(entity.remove::<Health>(), Some(Health(20)));
    assert_eq!(entity.remove::<Health>(), None);
    assert!(!entity.has::<Health>());
}

#[test]
fn test_builder() {
    let mut entity = Entity::new()
        .with(Name("goblin"))
        .with_bundle((Health(5), 1.5_f32));
    assert_eq!(entity.len(), 3);
    assert!(entity.has_type(ComponentType::of::<f32>()));

    if let Some(health) = entity.get_mut::<Health>() {
        health.0 -= 1;
    }
    assert_eq!(entity.get::<Health>(), Some(&Health(4)));

    let mut types: Vec<_> = entity.component_types().collect();
    types.sort();
    let mut expected = vec![
        ComponentType::of::<Name>(),
        ComponentType::of::<Health>(),
        ComponentType::of::<f32>(),
    ];
    expected.sort();
    assert_eq!(types, expected);
}

#[test]
fn test_age() {
    let entity = Entity::new();
    assert!(entity.age() >= Duration::zero());
    assert!(entity.created() <= Local::now());
}
