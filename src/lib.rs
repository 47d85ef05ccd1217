#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod avatar;
mod constants;
mod dom;
mod events;
mod frame;
mod render;

use avatar::AvatarMount;
use constants::{AVATAR_CONTAINER_ID, HERO_CANVAS_ID};
use frame::FieldMount;

fn js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// Particle field on a canvas. Call `unmount` (or let it be garbage
/// collected) to stop the animation and release its listeners.
#[wasm_bindgen]
pub struct ParticleFieldHandle {
    inner: Option<FieldMount>,
}

#[wasm_bindgen]
impl ParticleFieldHandle {
    pub fn unmount(&mut self) {
        self.inner.take();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.is_some()
    }

    /// Frames drawn so far; 0 once unmounted.
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.inner.as_ref().map_or(0.0, |m| m.frames() as f64)
    }
}

/// Pointer-reactive avatar rendered into a container element.
#[wasm_bindgen]
pub struct AvatarHandle {
    inner: Option<AvatarMount>,
}

#[wasm_bindgen]
impl AvatarHandle {
    pub fn unmount(&mut self) {
        self.inner.take();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.is_some()
    }
}

fn mount_field(canvas_id: &str) -> anyhow::Result<FieldMount> {
    let canvas = dom::element_by_id::<web::HtmlCanvasElement>(canvas_id, "canvas")?;
    FieldMount::mount(canvas)
}

fn mount_rig(container_id: &str) -> anyhow::Result<AvatarMount> {
    let container = dom::element_by_id::<web::Element>(container_id, "element")?;
    AvatarMount::mount(container)
}

#[wasm_bindgen]
pub fn mount_particle_field(canvas_id: &str) -> Result<ParticleFieldHandle, JsValue> {
    let inner = mount_field(canvas_id).map_err(js_err)?;
    Ok(ParticleFieldHandle { inner: Some(inner) })
}

#[wasm_bindgen]
pub fn mount_avatar(container_id: &str) -> Result<AvatarHandle, JsValue> {
    let inner = mount_rig(container_id).map_err(js_err)?;
    Ok(AvatarHandle { inner: Some(inner) })
}

// Held only for their Drop.
#[allow(dead_code)]
#[derive(Default)]
struct PageMounts {
    field: Option<FieldMount>,
    avatar: Option<AvatarMount>,
}

thread_local! {
    // Mounts made by `start`; they live as long as the page.
    static PAGE: RefCell<Option<PageMounts>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    PAGE.with(|page| {
        let mut page = page.borrow_mut();
        if page.is_some() {
            return;
        }
        *page = Some(mount_defaults());
    });
    Ok(())
}

/// Tear down whatever `start` mounted.
#[wasm_bindgen]
pub fn unmount_page() {
    if let Some(mounts) = PAGE.with(|page| page.borrow_mut().take()) {
        drop(mounts);
        log::info!("page mounts released");
    }
}

// A missing or unusable element only disables that component.
fn mount_defaults() -> PageMounts {
    let mut mounts = PageMounts::default();
    let document = match dom::window_document() {
        Some(d) => d,
        None => {
            log::error!("no document; nothing mounted");
            return mounts;
        }
    };

    if document.get_element_by_id(HERO_CANVAS_ID).is_some() {
        match mount_field(HERO_CANVAS_ID) {
            Ok(m) => mounts.field = Some(m),
            Err(e) => log::error!("particle field disabled: {:#}", e),
        }
    }
    if document.get_element_by_id(AVATAR_CONTAINER_ID).is_some() {
        match mount_rig(AVATAR_CONTAINER_ID) {
            Ok(m) => mounts.avatar = Some(m),
            Err(e) => log::error!("avatar disabled: {:#}", e),
        }
    }
    mounts
}
