//! Flight model, terrain, and session state, independent of any
//! presentation.

pub mod logic;
pub mod session;
pub mod terrain;
pub mod types;

pub use logic::{step, GroundProbe};
pub use session::Session;
pub use terrain::{Terrain, TerrainPoint, MAX_TERRAIN_HEIGHT, MIN_TERRAIN_HEIGHT};
pub use types::{
    InputState, InvalidPlayfield, Lander, LanderAngle, Playfield, GRAVITY, MAX_LANDING_SPEED,
    MAX_LANDING_TILT_DEG, PLAY_HEIGHT, PLAY_WIDTH, ROTATION_STEP_DEG, START_ROTATION_DEG,
    START_X, START_X_SPEED, START_Y, START_Y_SPEED, THRUST_ACCEL,
};
