use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animations;
use crate::components::motion::Motion;
use crate::config;
use crate::content::NAV_LINKS;
use crate::web::WindowListener;

fn is_condensed(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    let scroll_window = window.clone();
                    WindowListener::new(&window, "scroll", move |_| {
                        // use_state_eq: only threshold crossings re-render
                        is_scrolled.set(is_condensed(scroll_window.scroll_y().unwrap_or(0.0)));
                    })
                    .map_err(|err| log::warn!("scroll listener not attached: {:?}", err))
                    .ok()
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <Motion
            tag="nav"
            class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}
            animations={animations::nav_bar()}
        >
            <Motion tag="a" href="#" class="nav-logo text-gradient" animations={animations::logo()}>
                {config::BRAND_NAME}
            </Motion>

            <button class="burger-menu" onclick={toggle_menu}>
                <span></span>
                <span></span>
                <span></span>
            </button>

            <div class={menu_class}>
                {
                    for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href} class="nav-link" onclick={close_menu.clone()}>
                            {link.label}
                        </a>
                    })
                }
            </div>

            <Motion tag="button" class="nav-cta glow-effect" animations={animations::button()}>
                {"Get Started"}
            </Motion>
        </Motion>
    }
}
