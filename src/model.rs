//! Frame model storage shared by all diagram builds.

use std::collections::HashMap;

use petgraph::graph::{EdgeIndex, Graph, NodeIndex};

use crate::element::{EndForces, LineElement, LocalFrame};
use crate::errors::ModelEditError;
use crate::geometry::{Point, Vector};

/// Internal representation of a frame joint.
#[derive(Clone, Debug)]
struct Joint {
    /// Position of the joint in metres.
    position: Point,
}

impl Joint {
    /// Create a joint at the supplied position.
    fn new(position: Point) -> Self {
        Self { position }
    }
}

/// Internal representation of a frame member.
#[derive(Clone, Debug, Default)]
struct Member {
    /// Optional local-frame override; derived from the member axis when
    /// absent.
    frame: Option<LocalFrame>,
    /// Solved end forces at the back and front nodes.
    forces: (EndForces, EndForces),
    /// Named per-node result fields keyed by property name.
    properties: HashMap<String, (f64, f64)>,
}

/// Container for a line-element frame model.
///
/// Joints and members live in a graph; each member carries its solved end
/// forces and any named per-node result fields, which is everything a
/// diagram build reads.
#[derive(Debug, Default)]
pub struct FrameModel {
    /// Underlying graph storage for joints and members.
    graph: Graph<Joint, Member>,
}

impl FrameModel {
    /// Create an empty model.
    ///
    /// # Examples
    /// ```
    /// use diagramx::FrameModel;
    ///
    /// let model = FrameModel::new();
    /// assert_eq!(model.joint_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Return the number of joints in the model.
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of members in the model.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Add a new joint to the model.
    ///
    /// # Examples
    /// ```
    /// use diagramx::{point, FrameModel};
    ///
    /// let mut model = FrameModel::new();
    /// let joint = model.add_joint(point(0.0, 0.0, 0.0));
    /// assert_eq!(model.joint_count(), 1);
    /// assert_eq!(joint.index(), 0);
    /// ```
    pub fn add_joint(&mut self, position: Point) -> NodeIndex {
        self.graph.add_node(Joint::new(position))
    }

    /// Update the position of an existing joint.
    ///
    /// Members whose local frame is derived from their axis pick up the new
    /// geometry on the next diagram build.
    ///
    /// # Errors
    ///
    /// Returns [`ModelEditError::UnknownJoint`] when `joint` is not part of
    /// this model.
    pub fn move_joint(&mut self, joint: NodeIndex, position: Point) -> Result<(), ModelEditError> {
        if self.graph.node_weight(joint).is_none() {
            return Err(ModelEditError::UnknownJoint(joint));
        }
        if let Some(node) = self.graph.node_weight_mut(joint) {
            node.position = position;
            Ok(())
        } else {
            Err(ModelEditError::UnknownJoint(joint))
        }
    }

    /// Remove a joint and all connected members from the model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelEditError::UnknownJoint`] when `joint` is not part of
    /// this model.
    pub fn remove_joint(&mut self, joint: NodeIndex) -> Result<(), ModelEditError> {
        if self.graph.node_weight(joint).is_none() {
            return Err(ModelEditError::UnknownJoint(joint));
        }
        if self.graph.remove_node(joint).is_some() {
            Ok(())
        } else {
            Err(ModelEditError::UnknownJoint(joint))
        }
    }

    /// Connect two joints with a new member.
    ///
    /// The member starts with zero end forces, no named fields and a local
    /// frame derived from its axis.
    pub fn add_member(&mut self, back: NodeIndex, front: NodeIndex) -> EdgeIndex {
        self.graph.add_edge(back, front, Member::default())
    }

    /// Remove a member from the model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelEditError::UnknownMember`] when `member` is not part
    /// of this model.
    pub fn remove_member(&mut self, member: EdgeIndex) -> Result<(), ModelEditError> {
        if self.graph.edge_weight(member).is_none() {
            return Err(ModelEditError::UnknownMember(member));
        }
        if self.graph.remove_edge(member).is_some() {
            Ok(())
        } else {
            Err(ModelEditError::UnknownMember(member))
        }
    }

    /// Store the solved end forces for a member.
    ///
    /// `back` belongs to the node the member was added from, `front` to the
    /// node it was added to.
    ///
    /// # Errors
    ///
    /// Returns [`ModelEditError::UnknownMember`] when `member` is not part
    /// of this model.
    pub fn set_end_forces(
        &mut self,
        member: EdgeIndex,
        back: EndForces,
        front: EndForces,
    ) -> Result<(), ModelEditError> {
        if self.graph.edge_weight(member).is_none() {
            return Err(ModelEditError::UnknownMember(member));
        }
        if let Some(edge) = self.graph.edge_weight_mut(member) {
            edge.forces = (back, front);
        }
        Ok(())
    }

    /// Override the local frame of a member.
    ///
    /// Orientation normally follows the member axis; an override covers
    /// rotated sections and principal axes that do not line up with the
    /// default reference vector.
    ///
    /// # Errors
    ///
    /// Returns [`ModelEditError::UnknownMember`] when `member` is not part
    /// of this model.
    pub fn set_member_frame(
        &mut self,
        member: EdgeIndex,
        frame: LocalFrame,
    ) -> Result<(), ModelEditError> {
        if self.graph.edge_weight(member).is_none() {
            return Err(ModelEditError::UnknownMember(member));
        }
        if let Some(edge) = self.graph.edge_weight_mut(member) {
            edge.frame = Some(frame);
        }
        Ok(())
    }

    /// Store a named per-node result field on a member.
    ///
    /// Setting the same name again replaces the previous pair of values.
    ///
    /// # Errors
    ///
    /// Returns [`ModelEditError::UnknownMember`] when `member` is not part
    /// of this model.
    ///
    /// # Examples
    /// ```
    /// use diagramx::{point, FrameModel};
    ///
    /// let mut model = FrameModel::new();
    /// let a = model.add_joint(point(0.0, 0.0, 0.0));
    /// let b = model.add_joint(point(1.0, 0.0, 0.0));
    /// let member = model.add_member(a, b);
    ///
    /// model.set_member_property(member, "utilisation", 0.35, 0.62)?;
    /// # Ok::<(), diagramx::ModelEditError>(())
    /// ```
    pub fn set_member_property(
        &mut self,
        member: EdgeIndex,
        name: impl Into<String>,
        back: f64,
        front: f64,
    ) -> Result<(), ModelEditError> {
        if self.graph.edge_weight(member).is_none() {
            return Err(ModelEditError::UnknownMember(member));
        }
        if let Some(edge) = self.graph.edge_weight_mut(member) {
            edge.properties.insert(name.into(), (back, front));
        }
        Ok(())
    }

    /// Retrieve the position of a joint.
    #[must_use]
    pub fn joint_position(&self, joint: NodeIndex) -> Option<Point> {
        self.graph.node_weight(joint).map(|joint| joint.position)
    }

    /// Retrieve the stored end forces of a member.
    #[must_use]
    pub fn member_end_forces(&self, member: EdgeIndex) -> Option<(EndForces, EndForces)> {
        self.graph.edge_weight(member).map(|member| member.forces)
    }

    /// Iterate over the members as elements ready for diagram assembly.
    pub fn members(&self) -> impl Iterator<Item = MemberView<'_>> {
        self.graph.edge_indices().filter_map(move |edge| {
            let (back, front) = self.graph.edge_endpoints(edge)?;
            Some(MemberView {
                index: edge,
                back: &self.graph[back],
                front: &self.graph[front],
                member: &self.graph[edge],
            })
        })
    }
}

/// Read-only view of one member, exposing the element interface that
/// diagram builds consume.
#[derive(Clone, Copy, Debug)]
pub struct MemberView<'a> {
    /// Identifier of the member in the model.
    index: EdgeIndex,
    /// Joint at the back end.
    back: &'a Joint,
    /// Joint at the front end.
    front: &'a Joint,
    /// Member payload.
    member: &'a Member,
}

impl MemberView<'_> {
    /// Identifier of the viewed member.
    #[must_use]
    pub fn index(&self) -> EdgeIndex {
        self.index
    }
}

impl LineElement for MemberView<'_> {
    fn endpoints(&self) -> (Point, Point) {
        (self.back.position, self.front.position)
    }

    fn local_frame(&self) -> LocalFrame {
        self.member.frame.unwrap_or_else(|| {
            let delta = self.front.position.to_vector() - self.back.position.to_vector();
            LocalFrame::from_direction(Vector::from(delta))
        })
    }

    fn end_forces(&self) -> (EndForces, EndForces) {
        self.member.forces
    }

    fn nodal_property(&self, name: &str) -> Option<(f64, f64)> {
        self.member.properties.get(name).copied()
    }
}
