use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MouseEvent, Window};

use super::listener::WindowListener;
use crate::motion::pointer::{PointerHandler, PointerSource};

// `mousemove` on the window, in viewport coordinates
pub struct WindowPointerSource {
    window: Window,
}

impl WindowPointerSource {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl PointerSource for WindowPointerSource {
    type Subscription = WindowListener;
    type Error = JsValue;

    fn subscribe(&self, mut handler: PointerHandler) -> Result<WindowListener, JsValue> {
        WindowListener::new(&self.window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                handler(f64::from(event.client_x()), f64::from(event.client_y()));
            }
        })
    }

    fn unsubscribe(&self, subscription: WindowListener) {
        drop(subscription);
    }
}
