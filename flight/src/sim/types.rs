use serde::{Deserialize, Serialize};

use super::boost::BoostOutput;
use crate::math::{yaw_of, Quatf, Vec3f, SHIP_FORWARD};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipState {
    pub position: Vec3f,
    /// Hull orientation (ship→world). Only ever rotated about world up.
    pub orientation: Quatf,
    /// World-space linear velocity.
    pub velocity: Vec3f,
    /// Turn rate about world up (rad/s). Positive turns left.
    pub yaw_velocity: f32,
    /// Independent climb rate. Stays zero unless the vertical channel is enabled.
    pub vertical_velocity: f32,
}

impl ShipState {
    /// Ship at rest at `position`, nose rotated `heading` radians from −Z.
    pub fn at_rest(position: Vec3f, heading: f32) -> Self {
        Self {
            position,
            orientation: Quatf::from_rotation_y(heading),
            velocity: Vec3f::ZERO,
            yaw_velocity: 0.0,
            vertical_velocity: 0.0,
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn forward(&self) -> Vec3f {
        self.orientation * SHIP_FORWARD
    }

    pub fn yaw(&self) -> f32 {
        yaw_of(self.orientation)
    }
}

/// Player intent for one frame, already reduced from raw device events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub boost: bool,
    /// Climb. Ignored when altitude is pinned.
    pub up: bool,
    pub down: bool,
}

impl Intent {
    pub const IDLE: Self = Self {
        forward: false,
        back: false,
        left: false,
        right: false,
        boost: false,
        up: false,
        down: false,
    };

    /// +1 left, −1 right, 0 for neither or both.
    pub fn turn_axis(&self) -> f32 {
        axis(self.left, self.right)
    }

    /// +1 up, −1 down, 0 for neither or both.
    pub fn climb_axis(&self) -> f32 {
        axis(self.up, self.down)
    }
}

#[inline]
fn axis(pos: bool, neg: bool) -> f32 {
    f32::from(u8::from(pos)) - f32::from(u8::from(neg))
}

/// Third-person camera placement. Only ever written by camera follow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3f,
    pub look_at: Vec3f,
}

/// What a single `advance` did, for diagnostics and logging by the driver.
#[derive(Debug, Clone, Default)]
pub struct FrameDebug {
    pub frame: u64,
    /// dt as passed in and after the stall clamp.
    pub raw_dt: f32,
    pub dt: f32,
    pub intent: Intent,
    pub boost: BoostOutput,
    pub boost_amount: f32,
    /// Signed scalar thrust after the boost multiplier.
    pub thrust: f32,
    pub forward: Vec3f,
    pub speed: f32,
    pub speed_limit: f32,
    /// `None` while the sun's geometry is unresolved.
    pub sun_overlap: Option<bool>,
    /// Indices of bodies knocked out of orbit this frame.
    pub released: Vec<usize>,
    /// Indices of already-free bodies hit again this frame.
    pub juggled: Vec<usize>,
}
