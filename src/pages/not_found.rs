use yew::prelude::*;
use yew_router::components::Link;

use crate::animations;
use crate::components::motion::Motion;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <Motion class="not-found-content" animations={animations::hero()}>
                <h1 class="text-gradient">{"404"}</h1>
                <p>{"This page drifted out of view."}</p>
                <Link<Route> to={Route::Home} classes="not-found-link">
                    {"Back to home"}
                </Link<Route>>
            </Motion>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #0a0612;
                        color: #fff;
                        text-align: center;
                    }

                    .not-found h1 {
                        font-size: 6rem;
                        margin: 0;
                        background: linear-gradient(135deg, #fff, #6F2FEE);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .not-found p {
                        color: #9ca3af;
                        margin-bottom: 2rem;
                    }

                    .not-found-link {
                        color: #fff;
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        background: #5E17EB;
                        text-decoration: none;
                    }
                "#}
            </style>
        </div>
    }
}
