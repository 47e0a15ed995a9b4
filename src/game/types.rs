//! Flight model types and tuning constants.
//!
//! Coordinates are screen-like: `x` grows rightward, `y` grows downward,
//! so positive `y_speed` means the craft is falling. Rotation is degrees
//! clockwise from upright and accumulates without wrapping; wrap to a
//! displayable heading with [`Lander::heading`].

use std::error::Error;
use std::fmt;

/// Default play field width in game units.
pub const PLAY_WIDTH: f64 = 800.0;
/// Default play field height in game units.
pub const PLAY_HEIGHT: f64 = 400.0;

/// Lunar surface gravity scaled for playable descent times (units/s^2).
pub const GRAVITY: f64 = 1.62 * 3.2;
/// Engine acceleration along the craft axis while the thruster fires.
pub const THRUST_ACCEL: f64 = GRAVITY * 3.0;
/// Degrees of rotation applied per step a rotate control is held.
pub const ROTATION_STEP_DEG: f64 = 1.0;

/// Touchdown survives only below this horizontal and vertical speed.
pub const MAX_LANDING_SPEED: f64 = 5.0;
/// Touchdown survives only within this many degrees of upright.
pub const MAX_LANDING_TILT_DEG: f64 = 5.0;

/// Spawn position, near the top-left corner.
pub const START_X: f64 = 50.0;
pub const START_Y: f64 = 50.0;
/// Spawn velocity: already drifting right and falling.
pub const START_X_SPEED: f64 = 35.0;
pub const START_Y_SPEED: f64 = 35.0;
/// Spawn tilt. The first task of every flight is righting the craft.
pub const START_ROTATION_DEG: f64 = -45.0;

/// Validated play field dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Playfield {
    /// Create a play field, rejecting dimensions a flight cannot happen in.
    /// Infinite dimensions are rejected too; terrain generation walks the
    /// field left to right and must reach the far edge.
    pub fn new(width: f64, height: f64) -> Result<Self, InvalidPlayfield> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(InvalidPlayfield { width, height })
        }
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAY_WIDTH,
            height: PLAY_HEIGHT,
        }
    }
}

/// Rejected play field dimensions. Both must be finite and strictly
/// positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidPlayfield {
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for InvalidPlayfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "play field dimensions must be finite and positive, got {}x{}",
            self.width, self.height
        )
    }
}

impl Error for InvalidPlayfield {}

/// Controls held during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
}

/// Full state of the craft. A terminal flight keeps its last values
/// frozen so the wreck (or the parked craft) stays where it ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct Lander {
    // Position and velocity
    pub x: f64,
    pub y: f64,
    pub x_speed: f64,
    pub y_speed: f64,

    // Attitude and engine
    pub rotation: f64,
    pub thruster_on: bool,

    // Measured against the terrain at the start of the latest step
    pub altitude: f64,

    // Terminal flags, mutually exclusive, sticky once set
    pub landed: bool,
    pub crashed: bool,
}

impl Lander {
    /// Spawn a craft at the top of a fresh descent.
    pub fn new(field: Playfield) -> Self {
        Self {
            x: START_X,
            y: START_Y,
            x_speed: START_X_SPEED,
            y_speed: START_Y_SPEED,
            rotation: START_ROTATION_DEG,
            thruster_on: false,
            altitude: field.height,
            landed: false,
            crashed: false,
        }
    }

    /// Whether the flight has ended, one way or the other.
    pub fn is_down(&self) -> bool {
        self.landed || self.crashed
    }

    /// Rotation wrapped for display and for the touchdown tilt check.
    /// Keeps the sign of the accumulated rotation, like `%` does.
    pub fn heading(&self) -> f64 {
        self.rotation % 360.0
    }

    /// Coarse attitude bucket for sprite selection.
    pub fn sprite_angle(&self) -> LanderAngle {
        LanderAngle::from_degrees(self.rotation)
    }
}

/// Attitude buckets for rendering. The flight model itself works in
/// fractional degrees; only the sprite quantizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanderAngle {
    HardLeft,
    Left,
    Straight,
    Right,
    HardRight,
    Inverted,
}

impl LanderAngle {
    pub fn from_degrees(degrees: f64) -> Self {
        // Fold the accumulated rotation into [-180, 180].
        let mut heading = degrees % 360.0;
        if heading > 180.0 {
            heading -= 360.0;
        } else if heading < -180.0 {
            heading += 360.0;
        }

        if heading.abs() > 120.0 {
            LanderAngle::Inverted
        } else if heading < -60.0 {
            LanderAngle::HardLeft
        } else if heading < -20.0 {
            LanderAngle::Left
        } else if heading <= 20.0 {
            LanderAngle::Straight
        } else if heading <= 60.0 {
            LanderAngle::Right
        } else {
            LanderAngle::HardRight
        }
    }
}
