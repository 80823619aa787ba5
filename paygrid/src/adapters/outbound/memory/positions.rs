use std::sync::{PoisonError, RwLock};

use super::IdSequence;
use crate::domain::{
    models::{Position, PositionId},
    ports::outbound::PositionRepository,
};

/// Position collection backed by a `Vec`, kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryPositionRepository {
    positions: RwLock<Vec<Position>>,
    ids: IdSequence,
}

impl InMemoryPositionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the collection. New ids continue after the highest seeded id.
    pub fn with_positions(positions: Vec<Position>) -> Self {
        let last = positions
            .iter()
            .map(|position| position.id.as_i64())
            .max()
            .unwrap_or(0);
        Self {
            positions: RwLock::new(positions),
            ids: IdSequence::starting_after(last),
        }
    }
}

impl PositionRepository for InMemoryPositionRepository {
    fn next_id(&self) -> PositionId {
        PositionId::new(self.ids.next())
    }

    fn list(&self) -> Vec<Position> {
        self.positions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn get(&self, id: PositionId) -> Option<Position> {
        self.positions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|position| position.id == id)
            .cloned()
    }

    fn insert(&self, position: Position) {
        self.positions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(position);
    }

    fn update<F>(&self, id: PositionId, edit: F) -> bool
    where
        F: FnOnce(&mut Position),
    {
        let mut positions = self.positions.write().unwrap_or_else(PoisonError::into_inner);
        match positions.iter_mut().find(|position| position.id == id) {
            Some(position) => {
                edit(position);
                true
            }
            None => false,
        }
    }

    fn remove(&self, id: PositionId) -> bool {
        let mut positions = self.positions.write().unwrap_or_else(PoisonError::into_inner);
        let before = positions.len();
        positions.retain(|position| position.id != id);
        positions.len() != before
    }
}
