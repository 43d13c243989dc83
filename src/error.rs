//! Error types for islet.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

use crate::mesh::CellType;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh operations.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh has no points or no cells.
    #[error("mesh has no points or no cells")]
    EmptyMesh,

    /// A cell references a point index that does not exist.
    #[error("cell {cell} references invalid point index {point}")]
    InvalidPointIndex {
        /// The cell index.
        cell: usize,
        /// The invalid point index.
        point: usize,
    },

    /// A cell has a point count its type cannot hold.
    #[error("cell {cell} of type {cell_type} cannot have {points} points")]
    InvalidCellSize {
        /// The cell index.
        cell: usize,
        /// The declared cell type.
        cell_type: CellType,
        /// The number of points supplied.
        points: usize,
    },

    /// An attribute array does not have one tuple per point or cell.
    #[error("attribute array '{name}' has {actual} tuples, expected {expected}")]
    AttributeLength {
        /// Name of the offending array.
        name: String,
        /// Number of tuples required.
        expected: usize,
        /// Number of tuples supplied.
        actual: usize,
    },

    /// The caller requested the operation to stop.
    #[error("operation aborted")]
    Aborted,

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
