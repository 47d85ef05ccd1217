// Element ids and colours used by the web frontend.

// Default mount points looked up on start
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const AVATAR_CONTAINER_ID: &str = "avatar";

// Particle palette (tailwind blue-500)
pub const PARTICLE_RGB: [u8; 3] = [59, 130, 246];
pub const PARTICLE_FILL_ALPHA: f32 = 0.1;

#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}
