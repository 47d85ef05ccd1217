/// Tuning constants for the particle field and the avatar rig.
///
/// These are the defaults carried by `FieldConfig` and `RigConfig`; the
/// frontend never overrides them at runtime.
// Particle field
pub const PARTICLE_COUNT: usize = 100;
pub const PROXIMITY_THRESHOLD: f32 = 150.0; // pointer link distance in px
pub const PARTICLE_MAX_SPEED: f32 = 0.25; // per-axis velocity drawn from [-max, max)
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0; // exclusive

// Rig scale factors (degrees for rotations, viewBox units otherwise)
pub const HEAD_YAW_SCALE: f32 = 8.0;
pub const HEAD_PITCH_SCALE: f32 = 5.0;
pub const PUPIL_X_SCALE: f32 = 6.0;
pub const PUPIL_Y_SCALE: f32 = 4.0;
pub const MOUTH_CURVE_BASE: f32 = 145.0;
pub const MOUTH_CURVE_SCALE: f32 = 10.0;
pub const MOUTH_SCALE_FACTOR: f32 = 0.2;
pub const BROW_Y_SCALE: f32 = 2.0;
