//! Sign-aware assembly of single diagram segments.

use crate::buffer::{Cell, DiagramBuffer};
use crate::geometry::{zero_crossing, Point, Vector};

/// One member's contribution to a diagram, ready for assembly.
///
/// The values have already been through unit conversion; the direction is
/// the unit vector the ribbon is extruded along.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentSample {
    /// Position of the back node.
    pub org: Point,
    /// Position of the front node.
    pub dest: Point,
    /// Converted scalar value at the back node.
    pub val_org: f64,
    /// Converted scalar value at the front node.
    pub val_dest: f64,
    /// Unit extrusion direction for the ribbon.
    pub direction: Vector,
}

/// Append one segment's ribbon geometry to the buffer.
///
/// A segment whose value keeps its sign contributes a single quad spanning
/// baseline and offset edges; a sign change is split at the interpolated
/// zero crossing into two triangles so the fill never self-intersects. The
/// offset edge sits at `value * scale` along `direction`, so the sign of
/// `scale` flips the ribbon to the other side of the member.
///
/// Zero-length segments contribute no geometry: the anomaly is logged, the
/// back-node value still feeds the colour range, and the offset comes back
/// unchanged.
///
/// Returns the write offset for the next segment (`offset + 4` for a quad,
/// `offset + 5` for a split, `offset` for a degenerate segment). Every cell
/// emitted references only vertices written by this call or earlier ones,
/// which keeps the buffer consistent across a whole element-set sweep.
///
/// # Panics
///
/// Panics when `offset` disagrees with the buffer's write offset; that
/// means two writers interleaved on one buffer, which is a programming
/// error rather than a recoverable condition.
pub fn append_segment(
    buffer: &mut DiagramBuffer,
    offset: usize,
    sample: &SegmentSample,
    scale: f64,
) -> usize {
    assert_eq!(
        offset,
        buffer.write_offset(),
        "segment write offset out of step with the buffer"
    );

    let span = sample.dest.to_vector() - sample.org.to_vector();
    if span.norm() == 0.0 {
        log::warn!("skipping zero-length segment at {:?}", sample.org);
        buffer.record_value(sample.val_org);
        return offset;
    }

    let product = sample.val_org * sample.val_dest;
    if product > 0.0 || (sample.val_org == 0.0 && sample.val_dest == 0.0) {
        append_constant_sign(buffer, offset, sample, scale)
    } else {
        append_sign_change(buffer, offset, sample, scale)
    }
}

/// Emit the quad for a stretch whose value does not change sign.
///
/// Vertex order is baseline-org, offset-org, offset-dest, baseline-dest so
/// the quad traverses its perimeter; each end's value is recorded on both
/// of its vertices to support a gradient fill. When both values are zero
/// the quad collapses onto the baseline.
fn append_constant_sign(
    buffer: &mut DiagramBuffer,
    offset: usize,
    sample: &SegmentSample,
    scale: f64,
) -> usize {
    let base = offset as u32;
    let offset_org = sample.org.translated(sample.direction, sample.val_org * scale);
    let offset_dest = sample.dest.translated(sample.direction, sample.val_dest * scale);

    buffer.push_vertex(sample.org, sample.val_org);
    buffer.push_vertex(offset_org, sample.val_org);
    buffer.push_vertex(offset_dest, sample.val_dest);
    buffer.push_vertex(sample.dest, sample.val_dest);
    buffer.push_cell(Cell::Quad([base, base + 1, base + 2, base + 3]));

    offset + 4
}

/// Emit the two triangles for a stretch whose value changes sign.
///
/// Both triangles share the interpolated zero crossing, which lies on the
/// baseline between the two nodes and carries a scalar of exactly zero.
fn append_sign_change(
    buffer: &mut DiagramBuffer,
    offset: usize,
    sample: &SegmentSample,
    scale: f64,
) -> usize {
    let base = offset as u32;
    let crossing = zero_crossing(sample.org, sample.val_org, sample.dest, sample.val_dest);
    let offset_org = sample.org.translated(sample.direction, sample.val_org * scale);
    let offset_dest = sample.dest.translated(sample.direction, sample.val_dest * scale);

    buffer.push_vertex(sample.org, sample.val_org);
    buffer.push_vertex(crossing, 0.0);
    buffer.push_vertex(offset_org, sample.val_org);
    buffer.push_vertex(sample.dest, sample.val_dest);
    buffer.push_vertex(offset_dest, sample.val_dest);
    buffer.push_cell(Cell::Triangle([base, base + 1, base + 2]));
    buffer.push_cell(Cell::Triangle([base + 1, base + 3, base + 4]));

    offset + 5
}
