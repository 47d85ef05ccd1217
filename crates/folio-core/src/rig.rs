//! Pointer-reactive rig for the avatar.
//!
//! The rig keeps a single normalized offset of the pointer relative to an
//! anchor element. Everything the avatar shows is a pure function of that
//! offset (see [`Pose`]); subscribers are told about every change before
//! [`PointerRig::on_pointer_move`] returns.

use crate::config::RigConfig;
use crate::pose::Pose;
use glam::Vec2;
use smallvec::SmallVec;

/// Axis-aligned client rectangle, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Pointer displacement from `anchor_center`, divided by half the viewport on
/// each axis and clamped to \[-1, 1\]. A degenerate viewport axis yields 0.
#[inline]
pub fn normalized_offset(pointer: Vec2, anchor_center: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        normalize_axis(pointer.x - anchor_center.x, viewport.x),
        normalize_axis(pointer.y - anchor_center.y, viewport.y),
    )
}

#[inline]
fn normalize_axis(delta: f32, extent: f32) -> f32 {
    let half = extent * 0.5;
    let rel = delta / half;
    if half.is_finite() && half > 0.0 && !rel.is_nan() {
        rel.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type PoseObserver = Box<dyn FnMut(&Pose)>;

pub struct PointerRig {
    config: RigConfig,
    offset: Vec2,
    observers: SmallVec<[(SubscriptionId, PoseObserver); 2]>,
    next_id: u64,
}

impl PointerRig {
    pub fn new(config: RigConfig) -> Self {
        Self {
            config,
            offset: Vec2::ZERO,
            observers: SmallVec::new(),
            next_id: 0,
        }
    }

    /// Recompute the offset against the anchor rect measured for this event
    /// and notify every subscriber once.
    pub fn on_pointer_move(&mut self, pointer: Vec2, anchor: Rect, viewport: Vec2) {
        self.offset = normalized_offset(pointer, anchor.center(), viewport);
        let pose = self.pose();
        for (_, observer) in self.observers.iter_mut() {
            observer(&pose);
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn pose(&self) -> Pose {
        Pose::from_offset(self.offset, &self.config)
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Pose) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for PointerRig {
    fn default() -> Self {
        Self::new(RigConfig::default())
    }
}
