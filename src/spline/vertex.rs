use serde::{Deserialize, Serialize};

use crate::geom::{Point3, Quaternion, Vec3};

/// Which handle of a vertex is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockMode {
    /// Both handles are independent.
    #[default]
    None,
    /// `handle_before` is stored; `handle_after` is always its negation.
    BeforeIsMirror,
    /// `handle_after` is stored; `handle_before` is always its negation.
    AfterIsMirror,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleSide {
    Before,
    After,
}

/// Handle storage keyed by lock mode, so a mirrored handle is never stored
/// and cannot drift out of sync.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "lock", rename_all = "snake_case")]
enum Handles {
    None { before: Vec3, after: Vec3 },
    BeforeIsMirror { before: Vec3 },
    AfterIsMirror { after: Vec3 },
}

/// A control vertex: a position, two relative handles and an orientation
/// whose `+Y` axis is the vertex up vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    position: Point3,
    handles: Handles,
    rotation: Quaternion,
}

impl Default for Vertex {
    fn default() -> Self {
        Self::from_position(Point3::ORIGIN)
    }
}

impl Vertex {
    /// Vertex with free handles and identity rotation.
    #[must_use]
    pub const fn new(position: Point3, handle_before: Vec3, handle_after: Vec3) -> Self {
        Self {
            position,
            handles: Handles::None {
                before: handle_before,
                after: handle_after,
            },
            rotation: Quaternion::IDENTITY,
        }
    }

    /// Vertex with zero-length handles.
    #[must_use]
    pub const fn from_position(position: Point3) -> Self {
        Self::new(position, Vec3::ZERO, Vec3::ZERO)
    }

    /// Vertex whose handles mirror each other, with `handle_after` stored.
    #[must_use]
    pub const fn smooth(position: Point3, handle_after: Vec3) -> Self {
        Self {
            position,
            handles: Handles::AfterIsMirror {
                after: handle_after,
            },
            rotation: Quaternion::IDENTITY,
        }
    }

    #[must_use]
    pub const fn with_rotation(mut self, rotation: Quaternion) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn position(&self) -> Point3 {
        self.position
    }

    pub const fn set_position(&mut self, position: Point3) {
        self.position = position;
    }

    #[must_use]
    pub fn handle_before(&self) -> Vec3 {
        match self.handles {
            Handles::None { before, .. } | Handles::BeforeIsMirror { before } => before,
            Handles::AfterIsMirror { after } => -after,
        }
    }

    #[must_use]
    pub fn handle_after(&self) -> Vec3 {
        match self.handles {
            Handles::None { after, .. } | Handles::AfterIsMirror { after } => after,
            Handles::BeforeIsMirror { before } => -before,
        }
    }

    /// Writes through the stored side; a mirrored handle stores `-value`.
    pub fn set_handle_before(&mut self, value: Vec3) {
        match &mut self.handles {
            Handles::None { before, .. } | Handles::BeforeIsMirror { before } => *before = value,
            Handles::AfterIsMirror { after } => *after = -value,
        }
    }

    pub fn set_handle_after(&mut self, value: Vec3) {
        match &mut self.handles {
            Handles::None { after, .. } | Handles::AfterIsMirror { after } => *after = value,
            Handles::BeforeIsMirror { before } => *before = -value,
        }
    }

    #[must_use]
    pub fn handle(&self, side: HandleSide) -> Vec3 {
        match side {
            HandleSide::Before => self.handle_before(),
            HandleSide::After => self.handle_after(),
        }
    }

    pub fn set_handle(&mut self, side: HandleSide, value: Vec3) {
        match side {
            HandleSide::Before => self.set_handle_before(value),
            HandleSide::After => self.set_handle_after(value),
        }
    }

    /// `position + handle_before`.
    #[must_use]
    pub fn handle_before_absolute(&self) -> Point3 {
        self.position + self.handle_before()
    }

    /// `position + handle_after`.
    #[must_use]
    pub fn handle_after_absolute(&self) -> Point3 {
        self.position + self.handle_after()
    }

    #[must_use]
    pub fn handle_absolute(&self, side: HandleSide) -> Point3 {
        self.position + self.handle(side)
    }

    /// Moves a handle tip to an absolute position in spline space.
    pub fn set_handle_absolute(&mut self, side: HandleSide, target: Point3) {
        self.set_handle(side, target - self.position);
    }

    pub fn set_handle_before_absolute(&mut self, target: Point3) {
        self.set_handle_absolute(HandleSide::Before, target);
    }

    pub fn set_handle_after_absolute(&mut self, target: Point3) {
        self.set_handle_absolute(HandleSide::After, target);
    }

    #[must_use]
    pub const fn lock_mode(&self) -> LockMode {
        match self.handles {
            Handles::None { .. } => LockMode::None,
            Handles::BeforeIsMirror { .. } => LockMode::BeforeIsMirror,
            Handles::AfterIsMirror { .. } => LockMode::AfterIsMirror,
        }
    }

    /// Switches the lock mode.
    ///
    /// Locking keeps the newly authoritative handle as it currently reads.
    /// Unlocking stores both handles at their current values.
    pub fn set_lock_mode(&mut self, mode: LockMode) {
        let before = self.handle_before();
        let after = self.handle_after();
        self.handles = match mode {
            LockMode::None => Handles::None { before, after },
            LockMode::BeforeIsMirror => Handles::BeforeIsMirror { before },
            LockMode::AfterIsMirror => Handles::AfterIsMirror { after },
        };
    }

    #[must_use]
    pub const fn rotation(&self) -> Quaternion {
        self.rotation
    }

    pub const fn set_rotation(&mut self, rotation: Quaternion) {
        self.rotation = rotation;
    }

    /// The rotation applied to the canonical up axis `+Y`.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation.mul_vec(Vec3::Y)
    }

    /// Sets the rotation to the shortest arc from `+Y` onto `up`.
    ///
    /// A zero or non-finite `up` leaves the rotation untouched and returns
    /// `false`.
    pub fn set_up(&mut self, up: Vec3) -> bool {
        match Quaternion::from_to(Vec3::Y, up) {
            Some(rotation) => {
                self.rotation = rotation;
                true
            }
            None => {
                log::debug!("ignoring degenerate vertex up vector {up:?}");
                false
            }
        }
    }
}
