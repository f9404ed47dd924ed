use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::config;
use crate::motion::frame_delta;

type Step = Box<dyn FnMut(f64) -> bool>;

// requestAnimationFrame loop that sleeps once the step returns false.
// Dropping it cancels the pending frame.
pub struct FrameLoop {
    inner: Rc<FrameInner>,
}

struct FrameInner {
    window: Window,
    step: RefCell<Step>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pending: Cell<Option<i32>>,
    last_timestamp: Cell<Option<f64>>,
}

impl FrameLoop {
    pub fn new(window: Window, step: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(FrameInner {
            window,
            step: RefCell::new(Box::new(step)),
            callback: RefCell::new(None),
            pending: Cell::new(None),
            last_timestamp: Cell::new(None),
        });

        let weak: Weak<FrameInner> = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.tick(timestamp);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(callback);

        Self { inner }
    }

    pub fn wake(&self) {
        self.inner.request();
    }
}

impl FrameInner {
    fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        if let Some(callback) = self.callback.borrow().as_ref() {
            match self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())
            {
                Ok(id) => self.pending.set(Some(id)),
                Err(err) => log::warn!("requestAnimationFrame failed: {:?}", err),
            }
        }
    }

    fn tick(&self, timestamp: f64) {
        self.pending.set(None);
        let dt = frame_delta(
            self.last_timestamp.replace(Some(timestamp)),
            timestamp,
            config::DEFAULT_FRAME_STEP,
            config::MAX_FRAME_STEP,
        );
        let again = {
            let mut step = self.step.borrow_mut();
            (*step)(dt)
        };
        if again {
            self.request();
        } else {
            self.last_timestamp.set(None);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.inner.pending.take() {
            let _ = self.inner.window.cancel_animation_frame(id);
        }
        self.inner.callback.borrow_mut().take();
    }
}
