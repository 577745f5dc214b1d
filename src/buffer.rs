//! Growing point/scalar/cell storage for diagram assembly.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Running minimum and maximum of every scalar observed during assembly.
///
/// The range starts at an infinite sentinel and tightens monotonically as
/// values arrive; once a diagram is finished it becomes the read-only input
/// for colour lookup table calibration. On the wire the sentinel travels as
/// null bounds, since JSON cannot carry the infinities.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RangeWire", into = "RangeWire")]
pub struct ValueRange {
    /// Smallest value observed so far, `+INFINITY` before any observation.
    min: f64,
    /// Largest value observed so far, `-INFINITY` before any observation.
    max: f64,
}

impl ValueRange {
    /// Create an empty range at the infinite sentinel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Widen the range to include `value`.
    pub fn observe(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Smallest observed value, `+INFINITY` when nothing has been observed.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest observed value, `-INFINITY` when nothing has been observed.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether the range is still at the sentinel state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form of [`ValueRange`]: absent bounds stand in for the
/// infinite sentinel.
#[derive(Serialize, Deserialize)]
struct RangeWire {
    /// Smallest observed value, `None` for an empty range.
    min: Option<f64>,
    /// Largest observed value, `None` for an empty range.
    max: Option<f64>,
}

impl From<ValueRange> for RangeWire {
    fn from(range: ValueRange) -> Self {
        if range.is_empty() {
            Self {
                min: None,
                max: None,
            }
        } else {
            Self {
                min: Some(range.min),
                max: Some(range.max),
            }
        }
    }
}

impl From<RangeWire> for ValueRange {
    fn from(wire: RangeWire) -> Self {
        match (wire.min, wire.max) {
            (Some(min), Some(max)) => Self { min, max },
            _ => Self::new(),
        }
    }
}

/// One drawable polygon referencing previously written vertices.
///
/// Indices always point at vertices appended earlier in the same buffer;
/// the assembler never emits forward references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Three-vertex cell produced on either side of a sign change.
    Triangle([u32; 3]),
    /// Four-vertex cell produced for a constant-sign stretch.
    Quad([u32; 4]),
}

impl Cell {
    /// Vertex indices of this cell in winding order.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        match self {
            Cell::Triangle(indices) => indices,
            Cell::Quad(indices) => indices,
        }
    }

    /// Number of vertices referenced by this cell.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.indices().len()
    }
}

/// Finalized diagram geometry ready for a rendering backend.
///
/// The buffers keep the parity and index invariants of the
/// [`DiagramBuffer`] they were copied from: one scalar per point, and every
/// cell index below `points.len()`. All fields serialize with serde so the
/// diagram can cross a process boundary untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    /// Vertex positions in the order they were written.
    pub points: Vec<Point>,
    /// Unit-converted scalar value carried by each vertex.
    pub scalars: Vec<f64>,
    /// Drawable cells referencing `points` by index.
    pub cells: Vec<Cell>,
    /// Calibrated value range for the colour scale.
    pub range: ValueRange,
}

impl Diagram {
    /// Number of vertices in the diagram.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of drawable cells in the diagram.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the diagram contains no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Owner of the growing point, scalar and cell arrays for one diagram.
///
/// A buffer lives for a single display request: it is filled by repeated
/// segment appends, finalized into a [`Diagram`], and then dropped or
/// [`reset`](DiagramBuffer::reset) for the next request. It is not meant to
/// be shared between concurrent builds; each build owns its own buffer.
#[derive(Clone, Debug, Default)]
pub struct DiagramBuffer {
    /// Vertex positions written so far.
    points: Vec<Point>,
    /// Scalar value per vertex, always the same length as `points`.
    scalars: Vec<f64>,
    /// Cells referencing already written vertices.
    cells: Vec<Cell>,
    /// Running range over every value recorded so far.
    range: ValueRange,
}

impl DiagramBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all geometry and restore the range sentinel.
    ///
    /// Calling this twice in a row leaves the same empty state as calling
    /// it once.
    pub fn reset(&mut self) {
        self.points.clear();
        self.scalars.clear();
        self.cells.clear();
        self.range = ValueRange::new();
    }

    /// Index the next appended vertex will receive.
    #[must_use]
    pub fn write_offset(&self) -> usize {
        self.points.len()
    }

    /// Number of vertices written so far.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of cells written so far.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the buffer holds no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append one vertex with its scalar value and feed the running range.
    pub fn push_vertex(&mut self, position: Point, value: f64) {
        self.points.push(position);
        self.scalars.push(value);
        self.range.observe(value);
    }

    /// Feed the running range without writing geometry.
    ///
    /// Used when a degenerate element contributes a value to the colour
    /// scale but no drawable polygon.
    pub fn record_value(&mut self, value: f64) {
        self.range.observe(value);
    }

    /// Append one cell referencing already written vertices.
    pub fn push_cell(&mut self, cell: Cell) {
        debug_assert!(
            cell.indices()
                .iter()
                .all(|&index| (index as usize) < self.points.len()),
            "cell references vertices that have not been written yet"
        );
        self.cells.push(cell);
    }

    /// Vertex positions written so far.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Scalar values written so far.
    #[must_use]
    pub fn scalars(&self) -> &[f64] {
        &self.scalars
    }

    /// Cells written so far.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Current running value range.
    #[must_use]
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Copy the buffers out into an immutable [`Diagram`].
    ///
    /// The buffer itself is left untouched, so a caller may keep appending
    /// and finalize again later.
    #[must_use]
    pub fn finalize(&self) -> Diagram {
        Diagram {
            points: self.points.clone(),
            scalars: self.scalars.clone(),
            cells: self.cells.clone(),
            range: self.range,
        }
    }
}
