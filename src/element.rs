//! The data contract between a structural model and the diagram assembler.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Vector};

/// Threshold on the vertical component beyond which a member counts as
/// vertical and the frame construction switches its reference vector.
const NEAR_VERTICAL: f64 = 0.999;

/// Orthonormal local axes of a line member.
///
/// `axis_j` and `axis_k` are the two transverse directions completing the
/// member axis to a right-handed frame; `weak_axis` is the section's weak
/// bending direction used to extrude axial, torsion and named-field
/// diagrams. Which of the three a diagram extrudes along is decided by the
/// component being drawn, never by the element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalFrame {
    /// Weak section axis, the default extrusion direction.
    pub weak_axis: Vector,
    /// First transverse axis (local y).
    pub axis_j: Vector,
    /// Second transverse axis (local z).
    pub axis_k: Vector,
}

impl LocalFrame {
    /// Create a frame from explicit unit axes.
    #[must_use]
    pub const fn new(weak_axis: Vector, axis_j: Vector, axis_k: Vector) -> Self {
        Self {
            weak_axis,
            axis_j,
            axis_k,
        }
    }

    /// Derive a default frame from the member direction.
    ///
    /// Uses the common reference-vector rule: the transverse axes come from
    /// crossing the member axis with global Z, falling back to global X for
    /// near-vertical members. The weak axis defaults to `axis_j`; importers
    /// that know the section orientation should override the frame instead.
    ///
    /// A zero-length direction yields the global frame so that degenerate
    /// members never carry NaN axes.
    #[must_use]
    pub fn from_direction(direction: Vector) -> Self {
        let length = direction.norm();
        if length == 0.0 {
            let j = Vector::new(0.0, 1.0, 0.0);
            let k = Vector::new(0.0, 0.0, 1.0);
            return Self::new(j, j, k);
        }
        let axis_x = direction.to_vector() / length;
        let reference = if axis_x.z.abs() > NEAR_VERTICAL {
            Vector3::x()
        } else {
            Vector3::z()
        };
        let axis_j = reference.cross(&axis_x).normalize();
        let axis_k = axis_x.cross(&axis_j);
        Self::new(Vector::from(axis_j), Vector::from(axis_j), Vector::from(axis_k))
    }
}

/// The six internal force components at one end of a line member.
///
/// Values are raw solver output in the solver's sign convention: forces in
/// newtons, moments in newton-metres. Unit conversion for display happens
/// during diagram assembly, not here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EndForces {
    /// Axial force N.
    pub axial: f64,
    /// Shear force along the local y axis, Vy.
    pub shear_y: f64,
    /// Shear force along the local z axis, Vz.
    pub shear_z: f64,
    /// Torsional moment T.
    pub torsion: f64,
    /// Bending moment about the local y axis, My.
    pub moment_y: f64,
    /// Bending moment about the local z axis, Mz.
    pub moment_z: f64,
}

/// One line (beam or truss) element as seen by the diagram assembler.
///
/// This is the whole surface the assembler needs from a structural model:
/// two resolved end positions, the local frame, the member-end forces, and
/// optional named per-node scalar fields extrapolated to the element ends
/// by an external collaborator. Any model layer implementing these four
/// methods can feed [`DiagramBuilder`](crate::DiagramBuilder); the
/// [`FrameModel`](crate::FrameModel) container is one such supplier.
pub trait LineElement {
    /// Positions of the back and front nodes, in that order.
    ///
    /// Positions are already resolved by the caller; if a deformed shape
    /// should be drawn, the scaling happened upstream.
    fn endpoints(&self) -> (Point, Point);

    /// Local axes of the member.
    fn local_frame(&self) -> LocalFrame;

    /// Internal forces at the back and front ends, in that order.
    fn end_forces(&self) -> (EndForces, EndForces);

    /// Named scalar field values at the back and front ends.
    ///
    /// Returns `None` when the element carries no field of that name.
    fn nodal_property(&self, name: &str) -> Option<(f64, f64)>;
}

impl<E: LineElement + ?Sized> LineElement for &E {
    fn endpoints(&self) -> (Point, Point) {
        (**self).endpoints()
    }

    fn local_frame(&self) -> LocalFrame {
        (**self).local_frame()
    }

    fn end_forces(&self) -> (EndForces, EndForces) {
        (**self).end_forces()
    }

    fn nodal_property(&self, name: &str) -> Option<(f64, f64)> {
        (**self).nodal_property(name)
    }
}
