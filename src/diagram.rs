//! Assembly of whole diagrams from element sets.

use crate::buffer::{Diagram, DiagramBuffer};
use crate::component::DiagramComponent;
use crate::element::LineElement;
use crate::errors::DiagramError;
use crate::segment::append_segment;

/// Incremental assembler turning element sets into one paint-ready diagram.
///
/// A builder owns the shared vertex buffer and the running write offset, so
/// every appended set lands in the same buffer and a whole model becomes a
/// single mesh for the caller to upload. Component, drawing scale and unit
/// factor are fixed when the builder is created, which keeps all sets of
/// one diagram visually consistent.
#[derive(Debug)]
pub struct DiagramBuilder {
    /// Quantity drawn by this diagram.
    component: DiagramComponent,
    /// Drawing scale in metres per converted value unit.
    scale: f64,
    /// Multiplier taking raw solver values into display units.
    unit_factor: f64,
    /// Shared geometry accumulator.
    buffer: DiagramBuffer,
    /// Write offset handed to the next segment append.
    offset: usize,
}

impl DiagramBuilder {
    /// Create a builder for one diagram.
    ///
    /// `scale` converts a display-unit value into metres of ribbon width;
    /// `unit_factor` converts raw solver values into display units first,
    /// so the colour range reports display units as well.
    #[must_use]
    pub fn new(component: DiagramComponent, scale: f64, unit_factor: f64) -> Self {
        Self {
            component,
            scale,
            unit_factor,
            buffer: DiagramBuffer::new(),
            offset: 0,
        }
    }

    /// Append one set of elements to the diagram.
    ///
    /// Elements are assembled in iteration order; each one appends its
    /// vertices after everything already written, so cell indices never
    /// reference forward.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnknownProperty`] as soon as one element
    /// lacks the named field this diagram draws. Elements before the
    /// failing one remain in the buffer; the builder is best discarded at
    /// that point, since a diagram of a field only some elements carry is
    /// not worth finishing.
    pub fn append_set<I>(&mut self, elements: I) -> Result<(), DiagramError>
    where
        I: IntoIterator,
        I::Item: LineElement,
    {
        for element in elements {
            let mut sample = self.component.extract(&element)?;
            sample.val_org *= self.unit_factor;
            sample.val_dest *= self.unit_factor;
            self.offset = append_segment(&mut self.buffer, self.offset, &sample, self.scale);
        }
        Ok(())
    }

    /// Finish the build and return the assembled diagram.
    #[must_use]
    pub fn finish(self) -> Diagram {
        log::debug!(
            "assembled {} diagram: {} points, {} cells",
            self.component,
            self.buffer.point_count(),
            self.buffer.cell_count()
        );
        self.buffer.finalize()
    }
}

/// Assemble one diagram from several element sets in a single call.
///
/// Convenience wrapper over [`DiagramBuilder`] for callers that already
/// hold all their sets; the sets share one buffer exactly as they would
/// through repeated [`DiagramBuilder::append_set`] calls.
///
/// # Errors
///
/// Returns [`DiagramError::UnknownProperty`] when any element lacks the
/// named field the diagram draws.
///
/// # Examples
/// ```
/// use diagramx::{build_diagram, point, DiagramComponent, EndForces, FrameModel};
///
/// let mut model = FrameModel::new();
/// let a = model.add_joint(point(0.0, 0.0, 0.0));
/// let b = model.add_joint(point(2.0, 0.0, 0.0));
/// let member = model.add_member(a, b);
/// model.set_end_forces(
///     member,
///     EndForces {
///         axial: 40.0e3,
///         ..EndForces::default()
///     },
///     EndForces {
///         axial: 40.0e3,
///         ..EndForces::default()
///     },
/// )?;
///
/// let diagram = build_diagram([model.members()], DiagramComponent::Axial, 5.0e-5, 1.0e-3)?;
/// assert_eq!(diagram.point_count(), 4);
/// assert_eq!(diagram.range.max(), 40.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn build_diagram<S>(
    element_sets: S,
    component: DiagramComponent,
    scale: f64,
    unit_factor: f64,
) -> Result<Diagram, DiagramError>
where
    S: IntoIterator,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::Item: LineElement,
{
    let mut builder = DiagramBuilder::new(component, scale, unit_factor);
    for set in element_sets {
        builder.append_set(set)?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Cell;
    use crate::element::{EndForces, LocalFrame};
    use crate::geometry::{point, vector, Point};

    /// Horizontal element with a prescribed axial value pair, extruded
    /// along global Z.
    struct Strut {
        org: Point,
        dest: Point,
        values: (f64, f64),
    }

    impl Strut {
        fn new(org: Point, dest: Point, values: (f64, f64)) -> Self {
            Self { org, dest, values }
        }
    }

    impl LineElement for Strut {
        fn endpoints(&self) -> (Point, Point) {
            (self.org, self.dest)
        }

        fn local_frame(&self) -> LocalFrame {
            LocalFrame::new(
                vector(0.0, 0.0, 1.0),
                vector(0.0, 1.0, 0.0),
                vector(0.0, 0.0, 1.0),
            )
        }

        fn end_forces(&self) -> (EndForces, EndForces) {
            (
                EndForces {
                    axial: self.values.0,
                    ..EndForces::default()
                },
                EndForces {
                    axial: self.values.1,
                    ..EndForces::default()
                },
            )
        }

        fn nodal_property(&self, _name: &str) -> Option<(f64, f64)> {
            None
        }
    }

    #[test]
    fn empty_build_yields_a_valid_empty_diagram() {
        let diagram = DiagramBuilder::new(DiagramComponent::Axial, 1.0, 1.0).finish();

        assert!(diagram.is_empty());
        assert_eq!(diagram.cell_count(), 0);
        assert!(diagram.range.is_empty());
    }

    #[test]
    fn elements_of_one_set_share_the_buffer() {
        let set = vec![
            Strut::new(point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), (5.0, 3.0)),
            Strut::new(point(1.0, 0.0, 0.0), point(2.0, 0.0, 0.0), (3.0, 1.0)),
        ];

        // Borrowed iteration works through the blanket element impl.
        let mut builder = DiagramBuilder::new(DiagramComponent::Axial, 1.0, 1.0);
        builder.append_set(&set).expect("assembly succeeds");
        let diagram = builder.finish();

        assert_eq!(diagram.point_count(), 8);
        assert_eq!(
            diagram.cells,
            vec![Cell::Quad([0, 1, 2, 3]), Cell::Quad([4, 5, 6, 7])]
        );
    }

    #[test]
    fn later_sets_continue_where_earlier_sets_stopped() {
        let mut builder = DiagramBuilder::new(DiagramComponent::Axial, 1.0, 1.0);
        builder
            .append_set(vec![Strut::new(
                point(0.0, 0.0, 0.0),
                point(1.0, 0.0, 0.0),
                (2.0, 2.0),
            )])
            .expect("assembly succeeds");
        builder
            .append_set(vec![Strut::new(
                point(0.0, 1.0, 0.0),
                point(1.0, 1.0, 0.0),
                (4.0, -4.0),
            )])
            .expect("assembly succeeds");
        let diagram = builder.finish();

        assert_eq!(diagram.point_count(), 9);
        assert_eq!(
            diagram.cells,
            vec![
                Cell::Quad([0, 1, 2, 3]),
                Cell::Triangle([4, 5, 6]),
                Cell::Triangle([5, 7, 8]),
            ]
        );
        assert_eq!(diagram.range.min(), -4.0);
        assert_eq!(diagram.range.max(), 4.0);
    }

    #[test]
    fn unit_factor_converts_values_before_assembly() {
        let set = vec![Strut::new(
            point(0.0, 0.0, 0.0),
            point(1.0, 0.0, 0.0),
            (2.0e6, 2.0e6),
        )];

        let mut builder = DiagramBuilder::new(DiagramComponent::Axial, 1.0e-3, 1.0e-3);
        builder.append_set(set).expect("assembly succeeds");
        let diagram = builder.finish();

        // Range and scalars carry display units; geometry scales off them.
        assert_eq!(diagram.range.max(), 2.0e3);
        assert_eq!(diagram.scalars[1], 2.0e3);
        assert_eq!(diagram.points[1], point(0.0, 0.0, 2.0));
    }

    #[test]
    fn missing_property_aborts_the_set() {
        let set = vec![Strut::new(
            point(0.0, 0.0, 0.0),
            point(1.0, 0.0, 0.0),
            (1.0, 1.0),
        )];

        let mut builder =
            DiagramBuilder::new(DiagramComponent::Property("stress".to_string()), 1.0, 1.0);
        let error = builder.append_set(set).expect_err("missing field rejected");
        assert_eq!(
            error,
            DiagramError::UnknownProperty {
                name: "stress".to_string()
            }
        );
    }

    #[test]
    fn build_diagram_assembles_all_sets_at_once() {
        let first = vec![Strut::new(
            point(0.0, 0.0, 0.0),
            point(1.0, 0.0, 0.0),
            (5.0, 3.0),
        )];
        let second = vec![Strut::new(
            point(1.0, 0.0, 0.0),
            point(2.0, 0.0, 0.0),
            (3.0, 1.0),
        )];

        let diagram = build_diagram([first, second], DiagramComponent::Axial, 1.0, 1.0)
            .expect("assembly succeeds");

        assert_eq!(diagram.point_count(), 8);
        assert_eq!(diagram.cells[1], Cell::Quad([4, 5, 6, 7]));
        assert_eq!(diagram.range.min(), 1.0);
        assert_eq!(diagram.range.max(), 5.0);
    }

    #[test]
    fn empty_set_list_builds_an_empty_diagram() {
        let sets: Vec<Vec<Strut>> = Vec::new();
        let diagram =
            build_diagram(sets, DiagramComponent::Axial, 1.0, 1.0).expect("assembly succeeds");
        assert!(diagram.is_empty());
    }
}
