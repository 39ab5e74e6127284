//! Things with identity: inventory items, orders, evaluation results.

/// A record identified by a stable key rather than by its attributes.
///
/// Two snapshots of the same item with different stock levels share an id.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// First entity in `entities` with the given id.
pub fn find_by_id<'a, E, I>(entities: I, id: &E::Id) -> Option<&'a E>
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    entities.into_iter().find(|e| e.id() == id)
}
