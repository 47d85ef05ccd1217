use crate::dom::{self, Listener};
use crate::events::pointer;
use crate::render::CanvasSurface;
use folio_core::{FieldConfig, FrameHost, FrameLoop, FrameRequest, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` as a frame host.
pub struct RafHost {
    window: web::Window,
}

impl RafHost {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl FrameHost for RafHost {
    fn request(&self, frame: Box<dyn FnOnce()>) -> Option<FrameRequest> {
        // The JS function owns the closure and frees it after its one call.
        let cb = Closure::once_into_js(move || frame());
        match self
            .window
            .request_animation_frame(cb.unchecked_ref::<js_sys::Function>())
        {
            Ok(id) => Some(FrameRequest(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&self, request: FrameRequest) {
        _ = self.window.cancel_animation_frame(request.0);
    }
}

/// Particle field mounted on a full-viewport canvas.
///
/// Owns the pointer and resize listeners and the frame loop; dropping it
/// releases all three.
pub struct FieldMount {
    frame_loop: FrameLoop<RafHost>,
    _pointer: Listener<web::MouseEvent>,
    _resize: Listener<web::Event>,
}

impl FieldMount {
    pub fn mount(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let window = dom::window()?;
        let mut surface = CanvasSurface::new(&canvas)?;

        let size = dom::viewport_size(&window);
        dom::sync_canvas_size(&canvas, size);

        let field = Rc::new(RefCell::new(ParticleField::new(
            FieldConfig::default(),
            size,
            &mut StdRng::from_entropy(),
        )));

        let pointer_listener = {
            let field = field.clone();
            Listener::new(window.as_ref(), "mousemove", move |ev: web::MouseEvent| {
                field.borrow_mut().on_pointer_move(pointer::client_point(&ev));
            })?
        };

        let resize_listener = {
            let field = field.clone();
            let window_for_resize = window.clone();
            Listener::new(window.as_ref(), "resize", move |_ev: web::Event| {
                let size = dom::viewport_size(&window_for_resize);
                dom::sync_canvas_size(&canvas, size);
                field.borrow_mut().on_resize(size);
            })?
        };

        let frame_loop = FrameLoop::start(RafHost::new(window), move || {
            field.borrow_mut().tick(&mut surface);
        });

        log::info!("[field] mounted {:.0}x{:.0}", size.x, size.y);
        Ok(Self {
            frame_loop,
            _pointer: pointer_listener,
            _resize: resize_listener,
        })
    }

    pub fn frames(&self) -> u64 {
        self.frame_loop.frames()
    }
}

impl Drop for FieldMount {
    fn drop(&mut self) {
        self.frame_loop.stop();
        log::info!("[field] unmounted after {} frames", self.frames());
    }
}
