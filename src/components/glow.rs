use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};
use yew::prelude::*;

use crate::config;
use crate::motion::pointer::SharedPointer;
use crate::motion::{GlowFollower, PointerTracker};
use crate::web::{FrameLoop, WindowPointerSource};

// Everything the glow holds on to while the page is up. Dropping it
// unhooks the pointer listener and, with it, the frame loop.
struct GlowScope {
    _tracker: PointerTracker<WindowPointerSource>,
}

impl GlowScope {
    fn mount(window: Window, glow_ref: NodeRef) -> Result<Self, JsValue> {
        let pointer = SharedPointer::default();
        let mut follower = GlowFollower::new(config::GLOW_SIZE, config::GLOW_SPRING);

        // Moves only wake the loop; each frame chases the latest position
        let frames = {
            let pointer = pointer.clone();
            FrameLoop::new(window.clone(), move |dt| {
                follower.retarget(pointer.get());
                follower.advance(dt);
                if let Some(glow) = glow_ref.cast::<HtmlElement>() {
                    let _ = glow
                        .style()
                        .set_property("transform", &follower.to_css_transform());
                }
                !follower.is_at_rest()
            })
        };

        let tracker = PointerTracker::mount(
            WindowPointerSource::new(window),
            pointer,
            move |_| frames.wake(),
        )?;

        Ok(Self { _tracker: tracker })
    }
}

#[function_component(GlowBackground)]
pub fn glow_background() -> Html {
    let glow_ref = use_node_ref();

    {
        let glow_ref = glow_ref.clone();
        use_effect_with_deps(
            move |_| {
                let scope = web_sys::window().and_then(|window| {
                    GlowScope::mount(window, glow_ref)
                        .map_err(|err| log::error!("pointer glow disabled: {:?}", err))
                        .ok()
                });
                move || drop(scope)
            },
            (),
        );
    }

    let half = config::GLOW_SIZE / 2.0;
    let glow_style = format!(
        "width: {size}px; height: {size}px; transform: translate3d(-{half}px, -{half}px, 0);",
        size = config::GLOW_SIZE,
        half = half,
    );

    html! {
        <div class="backdrop">
            <div ref={glow_ref} class="backdrop-glow" style={glow_style}></div>
            <div class="backdrop-wash"></div>
            <div class="backdrop-orb backdrop-orb--top"></div>
            <div class="backdrop-orb backdrop-orb--bottom"></div>
        </div>
    }
}
