use serde::{Deserialize, Serialize};

use crate::geom::{Point3, Transform, Vec3};

use super::error::{SplineError, SplineResult};
use super::evaluator::SplineEvaluator;
use super::segment::SegmentResolver;
use super::space::SplineSpace;
use super::vertex::{HandleSide, LockMode, Vertex};

/// How [`SplineEvaluator::normal`] builds the frame normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalMode {
    /// Direction rotated a quarter turn in the XY plane.
    Planar,
    /// Frenet-style normal from the acceleration.
    Acceleration,
    /// Normal from the up vectors of the bracketing vertices.
    InterpolatedUp,
}

/// An ordered list of control vertices plus the flags that shape evaluation.
///
/// Segment `i` runs from vertex `i` to vertex `i + 1`; a loop adds a closing
/// segment from the last vertex back to the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spline {
    vertices: Vec<Vertex>,
    #[serde(default)]
    is_loop: bool,
    #[serde(default)]
    is_2d: bool,
    #[serde(default)]
    auto_normal_3d: bool,
}

impl Spline {
    #[must_use]
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_loop(mut self, is_loop: bool) -> Self {
        self.is_loop = is_loop;
        self
    }

    #[must_use]
    pub fn with_2d(mut self, is_2d: bool) -> Self {
        self.is_2d = is_2d;
        self
    }

    #[must_use]
    pub fn with_auto_normal_3d(mut self, auto_normal_3d: bool) -> Self {
        self.auto_normal_3d = auto_normal_3d;
        self
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// # Errors
    /// Returns [`SplineError::VertexIndexOutOfRange`] for a bad index.
    pub fn vertex_mut(&mut self, index: usize) -> SplineResult<&mut Vertex> {
        let len = self.vertices.len();
        self.vertices
            .get_mut(index)
            .ok_or(SplineError::VertexIndexOutOfRange { index, len })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub const fn is_loop(&self) -> bool {
        self.is_loop
    }

    pub const fn set_loop(&mut self, is_loop: bool) {
        self.is_loop = is_loop;
    }

    #[must_use]
    pub const fn is_2d(&self) -> bool {
        self.is_2d
    }

    pub const fn set_2d(&mut self, is_2d: bool) {
        self.is_2d = is_2d;
    }

    #[must_use]
    pub const fn auto_normal_3d(&self) -> bool {
        self.auto_normal_3d
    }

    pub const fn set_auto_normal_3d(&mut self, auto_normal_3d: bool) {
        self.auto_normal_3d = auto_normal_3d;
    }

    /// `is_2d` wins over `auto_normal_3d`.
    #[must_use]
    pub const fn normal_mode(&self) -> NormalMode {
        if self.is_2d {
            NormalMode::Planar
        } else if self.auto_normal_3d {
            NormalMode::Acceleration
        } else {
            NormalMode::InterpolatedUp
        }
    }

    /// Number of cubic segments; zero for fewer than two vertices.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        let n = self.vertices.len();
        if n < 2 {
            0
        } else if self.is_loop {
            n
        } else {
            n - 1
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────

    pub fn push_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    /// # Errors
    /// Returns [`SplineError::VertexIndexOutOfRange`] if `index > len`.
    pub fn insert_vertex(&mut self, index: usize, vertex: Vertex) -> SplineResult<()> {
        let len = self.vertices.len();
        if index > len {
            return Err(SplineError::VertexIndexOutOfRange { index, len });
        }
        self.vertices.insert(index, vertex);
        Ok(())
    }

    /// # Errors
    /// Returns [`SplineError::VertexIndexOutOfRange`] for a bad index.
    pub fn remove_vertex(&mut self, index: usize) -> SplineResult<Vertex> {
        let len = self.vertices.len();
        if index >= len {
            return Err(SplineError::VertexIndexOutOfRange { index, len });
        }
        Ok(self.vertices.remove(index))
    }

    /// Replaces a vertex, returning the previous one.
    ///
    /// # Errors
    /// Returns [`SplineError::VertexIndexOutOfRange`] for a bad index.
    pub fn replace_vertex(&mut self, index: usize, vertex: Vertex) -> SplineResult<Vertex> {
        Ok(std::mem::replace(self.vertex_mut(index)?, vertex))
    }

    /// # Errors
    /// Returns [`SplineError::VertexIndexOutOfRange`] for a bad index.
    pub fn set_handle(&mut self, index: usize, side: HandleSide, value: Vec3) -> SplineResult<()> {
        self.vertex_mut(index)?.set_handle(side, value);
        Ok(())
    }

    /// # Errors
    /// Returns [`SplineError::VertexIndexOutOfRange`] for a bad index.
    pub fn set_lock_mode(&mut self, index: usize, mode: LockMode) -> SplineResult<()> {
        self.vertex_mut(index)?.set_lock_mode(mode);
        Ok(())
    }

    /// Returns whether the up vector was applied; zero vectors are ignored.
    ///
    /// # Errors
    /// Returns [`SplineError::VertexIndexOutOfRange`] for a bad index.
    pub fn set_up(&mut self, index: usize, up: Vec3) -> SplineResult<bool> {
        Ok(self.vertex_mut(index)?.set_up(up))
    }

    /// Moves a vertex so that it lands on `world` once placed by `space`.
    ///
    /// # Errors
    /// Fails on a bad index or a singular placement.
    pub fn move_vertex_to_world<S: SplineSpace>(
        &mut self,
        index: usize,
        world: Point3,
        space: &S,
    ) -> SplineResult<()> {
        let local = space
            .point_to_local(world)
            .ok_or(SplineError::SingularTransform)?;
        self.vertex_mut(index)?.set_position(local);
        Ok(())
    }

    /// Moves a handle tip so that it lands on `world` once placed by `space`.
    /// The opposite handle follows when the vertex is locked.
    ///
    /// # Errors
    /// Fails on a bad index or a singular placement.
    pub fn move_handle_to_world<S: SplineSpace>(
        &mut self,
        index: usize,
        side: HandleSide,
        world: Point3,
        space: &S,
    ) -> SplineResult<()> {
        let local = space
            .point_to_local(world)
            .ok_or(SplineError::SingularTransform)?;
        self.vertex_mut(index)?.set_handle_absolute(side, local);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Evaluation
    // ─────────────────────────────────────────────────────────────────────

    /// Evaluator in the spline's own coordinate space.
    ///
    /// # Errors
    /// Returns [`SplineError::MalformedSpline`] for fewer than two vertices.
    pub fn evaluator(&self) -> SplineResult<SplineEvaluator<'_, Transform>> {
        self.evaluator_in(Transform::identity())
    }

    /// Evaluator whose outputs are placed into the host scene by `space`.
    ///
    /// # Errors
    /// Returns [`SplineError::MalformedSpline`] for fewer than two vertices.
    pub fn evaluator_in<S: SplineSpace>(&self, space: S) -> SplineResult<SplineEvaluator<'_, S>> {
        let resolver = SegmentResolver::new(self.vertices.len(), self.is_loop)?;
        Ok(SplineEvaluator::new(self, resolver, space))
    }
}

impl FromIterator<Vertex> for Spline {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
