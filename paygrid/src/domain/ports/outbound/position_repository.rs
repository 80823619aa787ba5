use crate::domain::models::{Position, PositionId};

/// Outbound port for the position collection.
///
/// Removing a position never touches employees that reference it by name.
pub trait PositionRepository: Send + Sync + 'static {
    /// Reserve a fresh position id.
    fn next_id(&self) -> PositionId;

    /// All positions in insertion order.
    fn list(&self) -> Vec<Position>;

    fn get(&self, id: PositionId) -> Option<Position>;

    fn insert(&self, position: Position);

    /// Apply `edit` to the record with this id while holding exclusive
    /// access, so concurrent edits are never lost. Returns `false` if there
    /// is no such record.
    fn update<F>(&self, id: PositionId, edit: F) -> bool
    where
        F: FnOnce(&mut Position);

    /// Returns `false` if no position had this id.
    fn remove(&self, id: PositionId) -> bool;
}
