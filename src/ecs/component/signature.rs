//! Utilities for sets of component types and values.

use super::{BoxedComponent, Component, ComponentType};

/// Statically known set of component types.
///
/// Implemented for tuples of components, used to build [queries](crate::ecs::Query).
///
pub trait Signature {
    /// Array of [`ComponentType`]s which represents set of types in this signature.
    fn component_types() -> Box<[ComponentType]>;
}

/// Set of component values which can be attached to the entity at once.
pub trait Bundle {
    /// Erases types of all components in this bundle.
    fn into_components(self) -> Vec<BoxedComponent>;
}

impl Signature for () {
    fn component_types() -> Box<[ComponentType]> {
        Box::from([])
    }
}

impl Bundle for () {
    fn into_components(self) -> Vec<BoxedComponent> {
        Vec::new()
    }
}

impl Bundle for Vec<BoxedComponent> {
    fn into_components(self) -> Vec<BoxedComponent> {
        self
    }
}

// Generate implementations of Signature and Bundle for tuples up to 12 elements.

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> Signature for ($($name,)+)
        where
            $($name: Component,)+
        {
            fn component_types() -> Box<[ComponentType]> {
                Box::from([$(ComponentType::of::<$name>()),+])
            }
        }

        impl<$($name),+> Bundle for ($($name,)+)
        where
            $($name: Component,)+
        {
            #[allow(non_snake_case)]
            fn into_components(self) -> Vec<BoxedComponent> {
                let ($($name,)+) = self;
                vec![$(BoxedComponent::new($name)),+]
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);
impl_tuple!(A, B, C, D, E, F, G);
impl_tuple!(A, B, C, D, E, F, G, H);
impl_tuple!(A, B, C, D, E, F, G, H, I);
impl_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
