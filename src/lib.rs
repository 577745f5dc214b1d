#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod buffer;
mod component;
mod diagram;
mod element;
mod errors;
mod geometry;
mod model;
mod segment;

pub use buffer::{Cell, Diagram, DiagramBuffer, ValueRange};
pub use component::DiagramComponent;
pub use diagram::{build_diagram, DiagramBuilder};
pub use element::{EndForces, LineElement, LocalFrame};
pub use errors::{DiagramError, ModelEditError};
pub use geometry::{point, vector, zero_crossing, Point, Vector};
pub use model::{FrameModel, MemberView};
pub use segment::{append_segment, SegmentSample};
