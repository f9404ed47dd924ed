use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::motion::{AnimationDescriptor, ElementMotion, Signal, Trigger};
use crate::web::ViewportObserver;

impl Reducible for ElementMotion {
    type Action = Signal;

    fn reduce(self: Rc<Self>, signal: Signal) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.signal(signal) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    #[prop_or("div")]
    pub tag: &'static str,
    /// Read once on mount; later changes are ignored.
    pub animations: Vec<AnimationDescriptor>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let node = use_node_ref();
    let motion = {
        let animations = props.animations.clone();
        use_reducer_eq(move || ElementMotion::new(animations.into()))
    };

    {
        let node = node.clone();
        let dispatcher = motion.dispatcher();
        let wants_mount = motion.has_trigger(|t| t == Trigger::OnMount);
        let wants_viewport = motion.has_trigger(|t| matches!(t, Trigger::OnEnterViewport { .. }));
        use_effect_with_deps(
            move |_| {
                let mount_timer = wants_mount.then(|| {
                    let dispatcher = dispatcher.clone();
                    Timeout::new(config::MOUNT_FRAME_DELAY_MS, move || {
                        dispatcher.dispatch(Signal::Mounted)
                    })
                });

                let observer = if wants_viewport {
                    node.cast::<Element>().and_then(|element| {
                        let on_change = {
                            let dispatcher = dispatcher.clone();
                            move |visible: bool| {
                                dispatcher.dispatch(if visible {
                                    Signal::EnteredViewport
                                } else {
                                    Signal::LeftViewport
                                })
                            }
                        };
                        match ViewportObserver::observe(&element, config::VIEWPORT_THRESHOLD, on_change) {
                            Ok(observer) => Some(observer),
                            Err(err) => {
                                // Without an observer the reveal would never run
                                log::warn!("viewport observer unavailable: {:?}", err);
                                dispatcher.dispatch(Signal::EnteredViewport);
                                None
                            }
                        }
                    })
                } else {
                    None
                };

                move || {
                    drop(mount_timer);
                    drop(observer);
                }
            },
            (),
        );
    }

    // Elements without hover or press descriptors skip the mouse listeners
    let gestures = motion.has_trigger(Trigger::is_gesture);
    let on = |signal: Signal| {
        let dispatcher = motion.dispatcher();
        gestures.then(|| Callback::from(move |_: MouseEvent| dispatcher.dispatch(signal)))
    };

    let resolved = motion.resolve().to_css();
    let style = match &props.style {
        Some(extra) => format!("{} {}", extra, resolved),
        None => resolved,
    };

    html! {
        <@{props.tag}
            ref={node}
            id={props.id.clone()}
            href={props.href.clone()}
            class={props.class.clone()}
            style={style}
            onmouseenter={on(Signal::HoverStart)}
            onmouseleave={on(Signal::HoverEnd)}
            onmousedown={on(Signal::PressStart)}
            onmouseup={on(Signal::PressEnd)}
        >
            { for props.children.iter() }
        </@>
    }
}
