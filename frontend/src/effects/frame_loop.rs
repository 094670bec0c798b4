use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop that runs until dropped.
///
/// The callback re-arms itself each frame, so it owns an `Rc` to its own slot.
/// `Drop` cancels the queued frame and empties the slot to break that cycle.
pub struct FrameLoop {
    window: web_sys::Window,
    handle: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let handle = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        {
            let slot = callback.clone();
            let handle = handle.clone();
            let window = window.clone();
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
                tick(timestamp);
                if let Some(cb) = slot.borrow().as_ref() {
                    handle.set(request_frame(&window, cb));
                }
            }) as Box<dyn FnMut(f64)>));
        }

        let first = callback.borrow().as_ref().and_then(|cb| request_frame(&window, cb));
        handle.set(first);

        Some(Self { window, handle, callback })
    }
}

fn request_frame(window: &web_sys::Window, cb: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}
