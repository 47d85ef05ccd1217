use crate::constants::*;

/// Particle field parameters. Fixed for the lifetime of a field.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub count: usize,
    pub proximity_threshold: f32,
    pub max_speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            proximity_threshold: PROXIMITY_THRESHOLD,
            max_speed: PARTICLE_MAX_SPEED,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_max: PARTICLE_RADIUS_MAX,
        }
    }
}

/// Scale factors mapping the normalized offset onto avatar parameters.
#[derive(Clone, Debug)]
pub struct RigConfig {
    pub head_yaw_scale: f32,
    pub head_pitch_scale: f32,
    pub pupil_x_scale: f32,
    pub pupil_y_scale: f32,
    pub mouth_curve_base: f32,
    pub mouth_curve_scale: f32,
    pub mouth_scale_factor: f32,
    pub brow_y_scale: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            head_yaw_scale: HEAD_YAW_SCALE,
            head_pitch_scale: HEAD_PITCH_SCALE,
            pupil_x_scale: PUPIL_X_SCALE,
            pupil_y_scale: PUPIL_Y_SCALE,
            mouth_curve_base: MOUTH_CURVE_BASE,
            mouth_curve_scale: MOUTH_CURVE_SCALE,
            mouth_scale_factor: MOUTH_SCALE_FACTOR,
            brow_y_scale: BROW_Y_SCALE,
        }
    }
}
