// Domain-level errors for the entity store and unit commands.

use crate::domain::entities::EntityId;
use std::fmt;

/// A command referenced state that does not exist. No field is written when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnitNotFound(EntityId),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnitNotFound(id) => write!(f, "unit {id} not found"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Initial world contents violated a store invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    InvalidGrid { width: usize, height: usize },
    DuplicateId(EntityId),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::InvalidGrid { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
            StateError::DuplicateId(id) => write!(f, "duplicate entity id {id}"),
        }
    }
}

impl std::error::Error for StateError {}
