use crate::config::RigConfig;
use glam::Vec2;

/// Avatar parameters derived from a normalized pointer offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    /// Rotation about the horizontal axis, degrees.
    pub head_rotate_x: f32,
    /// Rotation about the vertical axis, degrees.
    pub head_rotate_y: f32,
    pub pupil_x: f32,
    pub pupil_y: f32,
    /// Y of the mouth's quadratic control point.
    pub mouth_curve: f32,
    pub mouth_scale: f32,
    pub brow_y: f32,
}

impl Pose {
    pub fn from_offset(offset: Vec2, cfg: &RigConfig) -> Self {
        Self {
            head_rotate_x: -offset.y * cfg.head_pitch_scale,
            head_rotate_y: offset.x * cfg.head_yaw_scale,
            pupil_x: offset.x * cfg.pupil_x_scale,
            pupil_y: offset.y * cfg.pupil_y_scale,
            mouth_curve: cfg.mouth_curve_base + offset.x.abs() * cfg.mouth_curve_scale,
            mouth_scale: 1.0 + offset.x.abs() * cfg.mouth_scale_factor,
            brow_y: offset.y * cfg.brow_y_scale,
        }
    }

    /// Pose for a centered pointer.
    pub fn neutral(cfg: &RigConfig) -> Self {
        Self::from_offset(Vec2::ZERO, cfg)
    }
}
