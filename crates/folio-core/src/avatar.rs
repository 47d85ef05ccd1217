//! SVG markup for the avatar, rendered from a [`Pose`].
//!
//! The static parts of the face never change; only the pupils, mouth, brows
//! and the head transform depend on the pose.

use crate::pose::Pose;
use std::fmt::Write;

pub const VIEWBOX_SIZE: f32 = 200.0;

const STROKE: &str = "#7e57c2";
const SKIN: &str = "#E0F2FE";
const HAIR: &str = "#bae6fd";

const LEFT_EYE: (f32, f32) = (80.0, 95.0);
const RIGHT_EYE: (f32, f32) = (120.0, 95.0);
const PUPIL_RADIUS: f32 = 4.0;

// Brow control points before the vertical offset is applied.
const BROW_BASE_Y: f32 = 80.0;
const BROW_PEAK_Y: f32 = 75.0;

fn static_back() -> String {
    format!(
        concat!(
            "<ellipse cx='100' cy='180' rx='60' ry='10' fill='rgba(0,0,0,0.05)'/>",
            "<path d='M85 150 Q100 165 115 150 L110 175 Q100 185 90 175 Z' fill='{skin}' stroke='{s}' stroke-width='2'/>",
            "<path d='M60 70 Q60 40 100 40 Q140 40 140 70 L140 120 Q140 160 100 160 Q60 160 60 120 Z' fill='{skin}' stroke='{s}' stroke-width='3'/>",
            "<path d='M60 75 Q55 45 75 35 Q85 20 105 25 Q120 20 135 35 Q145 45 140 75 Q130 65 120 70 Q110 60 100 70 Q90 60 80 70 Q70 65 60 75' fill='{hair}' stroke='{s}' stroke-width='2'/>",
            "<circle cx='58' cy='100' r='10' fill='{skin}' stroke='{s}' stroke-width='2'/>",
            "<circle cx='142' cy='100' r='10' fill='{skin}' stroke='{s}' stroke-width='2'/>",
            "<ellipse cx='80' cy='95' rx='15' ry='12' fill='white' stroke='{s}' stroke-width='2'/>",
            "<ellipse cx='120' cy='95' rx='15' ry='12' fill='white' stroke='{s}' stroke-width='2'/>",
        ),
        skin = SKIN,
        hair = HAIR,
        s = STROKE,
    )
}

fn static_front() -> String {
    format!(
        concat!(
            "<rect x='62' y='85' width='37' height='25' rx='8' fill='none' stroke='{s}' stroke-width='4' opacity='0.8'/>",
            "<rect x='101' y='85' width='37' height='25' rx='8' fill='none' stroke='{s}' stroke-width='4' opacity='0.8'/>",
            "<line x1='99' y1='95' x2='101' y2='95' stroke='{s}' stroke-width='4'/>",
            "<line x1='55' y1='95' x2='62' y2='95' stroke='{s}' stroke-width='2'/>",
            "<line x1='138' y1='95' x2='145' y2='95' stroke='{s}' stroke-width='2'/>",
            "<path d='M100 105 Q108 125 100 130 Q92 125 100 105' fill='{hair}' stroke='{s}' stroke-width='2'/>",
        ),
        hair = HAIR,
        s = STROKE,
    )
}

/// CSS transform applied to the root `<svg>` for the head tilt.
pub fn head_transform(pose: &Pose) -> String {
    format!(
        "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)",
        pose.head_rotate_x, pose.head_rotate_y
    )
}

pub fn mouth_path(pose: &Pose) -> String {
    format!("M85 145 Q100 {:.2} 115 145", pose.mouth_curve)
}

/// Path of one brow whose left end starts at `x0`.
pub fn brow_path(x0: f32, pose: &Pose) -> String {
    let base = BROW_BASE_Y + pose.brow_y;
    let peak = BROW_PEAK_Y + pose.brow_y;
    format!(
        "M{:.0} {:.2} Q{:.0} {:.2} {:.0} {:.2}",
        x0,
        base,
        x0 + 10.0,
        peak,
        x0 + 20.0,
        base
    )
}

/// Centers of the left and right pupils.
pub fn pupil_centers(pose: &Pose) -> [(f32, f32); 2] {
    [
        (LEFT_EYE.0 + pose.pupil_x, LEFT_EYE.1 + pose.pupil_y),
        (RIGHT_EYE.0 + pose.pupil_x, RIGHT_EYE.1 + pose.pupil_y),
    ]
}

/// Full avatar markup for `pose`.
pub fn render_svg(pose: &Pose) -> String {
    let mut out = String::with_capacity(3072);
    _ = write!(
        out,
        "<svg viewBox='0 0 {v:.0} {v:.0}' xmlns='http://www.w3.org/2000/svg' style='width:100%;height:100%;max-width:400px;transform:{t}'>",
        v = VIEWBOX_SIZE,
        t = head_transform(pose),
    );
    out.push_str(&static_back());
    for (cx, cy) in pupil_centers(pose) {
        _ = write!(
            out,
            "<circle cx='{:.2}' cy='{:.2}' r='{:.0}' fill='{}'/>",
            cx, cy, PUPIL_RADIUS, STROKE
        );
    }
    out.push_str(&static_front());
    _ = write!(
        out,
        "<path d='{}' fill='none' stroke='{s}' stroke-width='3' stroke-linecap='round' transform='translate(100 145) scale({:.3} 1) translate(-100 -145)'/>",
        mouth_path(pose),
        pose.mouth_scale,
        s = STROKE,
    );
    for x0 in [70.0, 110.0] {
        _ = write!(
            out,
            "<path d='{}' fill='none' stroke='{}' stroke-width='3'/>",
            brow_path(x0, pose),
            STROKE
        );
    }
    out.push_str("</svg>");
    out
}
