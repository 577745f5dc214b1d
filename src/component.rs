//! Selection of the physical quantity a diagram draws.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::LineElement;
use crate::errors::DiagramError;
use crate::segment::SegmentSample;

/// Physical quantity drawn along the members of a diagram.
///
/// Each resultant variant fixes both the extrusion axis and the signs
/// applied to the two end values, following the classical static sign
/// convention for frame members: end forces are reported in the member's
/// local frame with opposite positive senses at the two ends, so drawing a
/// continuous ribbon means negating one end for most components. The
/// asymmetry between the two bending axes is part of that convention, not
/// an accident.
///
/// ```
/// use diagramx::DiagramComponent;
///
/// assert_eq!(DiagramComponent::BendingY.to_string(), "My");
/// assert_eq!(
///     DiagramComponent::Property("utilisation".to_string()).to_string(),
///     "utilisation"
/// );
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum DiagramComponent {
    /// Axial force N, drawn along the weak axis with both ends as stored.
    Axial,
    /// Shear force Vy, drawn along local j with the front end negated.
    ShearY,
    /// Shear force Vz, drawn along local k with the front end negated.
    ShearZ,
    /// Torsional moment T, drawn along the weak axis with the front end
    /// negated.
    Torsion,
    /// Bending moment My, drawn along local k with the front end negated.
    BendingY,
    /// Bending moment Mz, drawn along local j with the back end negated.
    BendingZ,
    /// A named per-node field the element carries, such as a utilisation
    /// ratio; drawn along the weak axis with both ends as stored.
    Property(String),
}

impl DiagramComponent {
    /// Pull this component's pair of end values and extrusion axis out of
    /// an element, as a sample ready for segment assembly.
    ///
    /// The values come back unscaled; unit conversion and drawing scale are
    /// applied later by the diagram builder.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnknownProperty`] when a
    /// [`DiagramComponent::Property`] names a field the element does not
    /// carry. The resultant variants cannot fail.
    pub fn extract<E: LineElement>(&self, element: &E) -> Result<SegmentSample, DiagramError> {
        let (org, dest) = element.endpoints();
        let frame = element.local_frame();
        let (back, front) = element.end_forces();

        let (direction, val_org, val_dest) = match self {
            DiagramComponent::Axial => (frame.weak_axis, back.axial, front.axial),
            DiagramComponent::ShearY => (frame.axis_j, back.shear_y, -front.shear_y),
            DiagramComponent::ShearZ => (frame.axis_k, back.shear_z, -front.shear_z),
            DiagramComponent::Torsion => (frame.weak_axis, back.torsion, -front.torsion),
            DiagramComponent::BendingY => (frame.axis_k, back.moment_y, -front.moment_y),
            DiagramComponent::BendingZ => (frame.axis_j, -back.moment_z, front.moment_z),
            DiagramComponent::Property(name) => {
                let (val_org, val_dest) = element
                    .nodal_property(name)
                    .ok_or_else(|| DiagramError::UnknownProperty { name: name.clone() })?;
                (frame.weak_axis, val_org, val_dest)
            }
        };

        Ok(SegmentSample {
            org,
            dest,
            val_org,
            val_dest,
            direction,
        })
    }
}

impl fmt::Display for DiagramComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramComponent::Axial => f.write_str("N"),
            DiagramComponent::ShearY => f.write_str("Vy"),
            DiagramComponent::ShearZ => f.write_str("Vz"),
            DiagramComponent::Torsion => f.write_str("T"),
            DiagramComponent::BendingY => f.write_str("My"),
            DiagramComponent::BendingZ => f.write_str("Mz"),
            DiagramComponent::Property(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{EndForces, LocalFrame};
    use crate::geometry::{point, vector, Point, Vector};

    /// Fixed element with distinguishable axes and force values, so each
    /// extraction's axis pick and sign flips are observable.
    struct ProbeElement;

    const WEAK: Vector = vector(1.0, 0.0, 0.0);
    const AXIS_J: Vector = vector(0.0, 1.0, 0.0);
    const AXIS_K: Vector = vector(0.0, 0.0, 1.0);

    impl LineElement for ProbeElement {
        fn endpoints(&self) -> (Point, Point) {
            (point(0.0, 0.0, 0.0), point(2.0, 0.0, 0.0))
        }

        fn local_frame(&self) -> LocalFrame {
            LocalFrame::new(WEAK, AXIS_J, AXIS_K)
        }

        fn end_forces(&self) -> (EndForces, EndForces) {
            (
                EndForces {
                    axial: 1.0,
                    shear_y: 3.0,
                    shear_z: 5.0,
                    torsion: 7.0,
                    moment_y: 9.0,
                    moment_z: 11.0,
                },
                EndForces {
                    axial: 2.0,
                    shear_y: 4.0,
                    shear_z: 6.0,
                    torsion: 8.0,
                    moment_y: 10.0,
                    moment_z: 12.0,
                },
            )
        }

        fn nodal_property(&self, name: &str) -> Option<(f64, f64)> {
            (name == "utilisation").then_some((0.4, 0.9))
        }
    }

    fn extracted(component: DiagramComponent) -> SegmentSample {
        component.extract(&ProbeElement).unwrap()
    }

    #[test]
    fn axial_keeps_both_values_on_the_weak_axis() {
        let segment = extracted(DiagramComponent::Axial);
        assert_eq!(segment.direction, WEAK);
        assert_eq!((segment.val_org, segment.val_dest), (1.0, 2.0));
    }

    #[test]
    fn shear_y_negates_the_front_end_along_j() {
        let segment = extracted(DiagramComponent::ShearY);
        assert_eq!(segment.direction, AXIS_J);
        assert_eq!((segment.val_org, segment.val_dest), (3.0, -4.0));
    }

    #[test]
    fn shear_z_negates_the_front_end_along_k() {
        let segment = extracted(DiagramComponent::ShearZ);
        assert_eq!(segment.direction, AXIS_K);
        assert_eq!((segment.val_org, segment.val_dest), (5.0, -6.0));
    }

    #[test]
    fn torsion_negates_the_front_end_on_the_weak_axis() {
        let segment = extracted(DiagramComponent::Torsion);
        assert_eq!(segment.direction, WEAK);
        assert_eq!((segment.val_org, segment.val_dest), (7.0, -8.0));
    }

    #[test]
    fn bending_y_negates_the_front_end_along_k() {
        let segment = extracted(DiagramComponent::BendingY);
        assert_eq!(segment.direction, AXIS_K);
        assert_eq!((segment.val_org, segment.val_dest), (9.0, -10.0));
    }

    #[test]
    fn bending_z_negates_the_back_end_along_j() {
        let segment = extracted(DiagramComponent::BendingZ);
        assert_eq!(segment.direction, AXIS_J);
        assert_eq!((segment.val_org, segment.val_dest), (-11.0, 12.0));
    }

    #[test]
    fn named_property_passes_values_through_unchanged() {
        let segment = extracted(DiagramComponent::Property("utilisation".to_string()));
        assert_eq!(segment.direction, WEAK);
        assert_eq!((segment.val_org, segment.val_dest), (0.4, 0.9));
    }

    #[test]
    fn extraction_carries_the_element_endpoints() {
        let segment = extracted(DiagramComponent::Axial);
        assert_eq!(segment.org, point(0.0, 0.0, 0.0));
        assert_eq!(segment.dest, point(2.0, 0.0, 0.0));
    }

    #[test]
    fn missing_property_is_reported_by_name() {
        let result = DiagramComponent::Property("stress".to_string()).extract(&ProbeElement);
        assert_eq!(
            result,
            Err(DiagramError::UnknownProperty {
                name: "stress".to_string()
            })
        );
    }

    #[test]
    fn display_uses_conventional_short_labels() {
        assert_eq!(DiagramComponent::Axial.to_string(), "N");
        assert_eq!(DiagramComponent::ShearY.to_string(), "Vy");
        assert_eq!(DiagramComponent::ShearZ.to_string(), "Vz");
        assert_eq!(DiagramComponent::Torsion.to_string(), "T");
        assert_eq!(DiagramComponent::BendingY.to_string(), "My");
        assert_eq!(DiagramComponent::BendingZ.to_string(), "Mz");
    }
}
