//! Error types produced while editing models or assembling diagrams.

use petgraph::graph::{EdgeIndex, NodeIndex};
use thiserror::Error;

/// Error returned when a diagram build fails.
///
/// A diagram is either built completely or not at all: semantic problems
/// such as a missing named field abort the build, since a partially built
/// diagram with wrong meaning is worse than none. Geometric anomalies
/// (zero-length members) are not errors; they are skipped and logged by
/// the assembler.
#[derive(Debug, Error, PartialEq)]
pub enum DiagramError {
    /// Returned when the requested named nodal field is not present on an
    /// element of the set being drawn.
    #[error("element carries no nodal field named {name:?}")]
    UnknownProperty {
        /// Name of the field the caller asked to diagram.
        name: String,
    },
}

/// Error returned when editing a [`FrameModel`](crate::FrameModel) with
/// invalid indices.
///
/// Attempting to mutate the model with a joint or member that is not part
/// of the current graph returns a descriptive variant so callers can decide
/// how to recover.
///
/// # Examples
///
/// ```
/// use diagramx::{EndForces, FrameModel, ModelEditError};
/// use petgraph::graph::EdgeIndex;
///
/// let mut model = FrameModel::new();
/// let invalid_member = EdgeIndex::new(42);
/// let error = model
///     .set_end_forces(invalid_member, EndForces::default(), EndForces::default())
///     .expect_err("unknown member is rejected");
/// assert_eq!(error, ModelEditError::UnknownMember(invalid_member));
/// ```
#[derive(Debug, Error, PartialEq)]
pub enum ModelEditError {
    /// Returned when a joint cannot be found in the model.
    #[error("joint {0:?} does not exist in this model")]
    UnknownJoint(NodeIndex),
    /// Returned when a member cannot be found in the model.
    #[error("member {0:?} does not exist in this model")]
    UnknownMember(EdgeIndex),
}
