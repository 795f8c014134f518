//! Entity trait: identity that survives attribute changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identifier type. Must be comparable so collections can look entities up.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when this entity carries the given identifier.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
