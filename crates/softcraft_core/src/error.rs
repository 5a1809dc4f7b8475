use thiserror::Error;

/// Rejected mutations and queries on a [`Structure`](crate::Structure)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CraftError {
    #[error("particle index {index} out of range ({count} particles)")]
    InvalidIndex { index: usize, count: usize },

    #[error("both endpoints refer to particle {0}")]
    SameEndpoints(usize),

    #[error("particles {i1} and {i2} occupy the same position")]
    DegenerateGeometry { i1: usize, i2: usize },

    #[error("particle mass must be positive and finite, got {0}")]
    NonPositiveMass(f32),

    #[error("structure has no particles")]
    EmptyStructure,

    #[error("invalid physics config: {0}")]
    InvalidConfig(&'static str),
}
