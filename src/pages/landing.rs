use yew::prelude::*;

use crate::animations;
use crate::components::glow::GlowBackground;
use crate::components::motion::Motion;
use crate::components::nav::Nav;
use crate::config;
use crate::content::{Service, Stat, FOOTER_LINKS, PROCESS_STEPS, SERVICES, STATS};

fn theme_tokens() -> String {
    format!(
        ":root {{ --primary: {}; --secondary: {}; --dark: {}; --darker: {}; }}",
        config::PRIMARY_COLOR,
        config::SECONDARY_COLOR,
        config::DARK_COLOR,
        config::DARKER_COLOR,
    )
}

fn render_stat(stat: &Stat) -> Html {
    html! {
        <Motion class="stat-card card-glow" animations={animations::stat_card()}>
            <div class="stat-number text-gradient">{stat.number}</div>
            <div class="stat-label">{stat.label}</div>
        </Motion>
    }
}

fn render_service(index: usize, service: &Service) -> Html {
    html! {
        <Motion class="service-card" animations={animations::service_card(index)}>
            <div class="service-icon">{service.icon}</div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
        </Motion>
    }
}

fn section_heading(title: &'static str, subtitle: &'static str) -> Html {
    html! {
        <Motion class="section-heading" animations={animations::section_heading()}>
            <h2><span class="text-gradient">{title}</span></h2>
            <p>{subtitle}</p>
        </Motion>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="landing-page">
            <GlowBackground />
            <Nav />

            <section class="hero">
                <Motion class="hero-content" animations={animations::hero()}>
                    <Motion class="hero-badge" animations={animations::hero_badge()}>
                        {"Digital Excellence Redefined"}
                    </Motion>

                    <Motion tag="h1" class="hero-title" animations={animations::hero_title()}>
                        <span class="hero-title-plain">{"Transform Your"}</span>
                        <br />
                        <span class="text-gradient">{"Digital Presence"}</span>
                    </Motion>

                    <Motion tag="p" class="hero-tagline" animations={animations::hero_tagline()}>
                        {"Analyse. Act. Achieve."}
                    </Motion>

                    <Motion tag="p" class="hero-lead" animations={animations::hero_lead()}>
                        {"We craft data-driven digital experiences that propel forward-thinking businesses into the future"}
                    </Motion>

                    <Motion class="hero-cta-group" animations={animations::hero_actions()}>
                        <Motion tag="button" class="hero-cta glow-effect" animations={animations::primary_button()}>
                            {"Start Your Project"}
                        </Motion>
                        <Motion tag="button" class="hero-cta hero-cta--outline" animations={animations::button()}>
                            {"View Our Work"}
                        </Motion>
                    </Motion>
                </Motion>

                <Motion class="stats-grid" animations={animations::stats_grid()}>
                    { for STATS.iter().map(render_stat) }
                </Motion>
            </section>

            <section id="services" class="page-section">
                { section_heading("Our Services", "Comprehensive digital solutions tailored to your business needs") }
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| render_service(i, service)) }
                </div>
            </section>

            <section id="work" class="page-section">
                { section_heading("Our Process", "A proven methodology that delivers exceptional results") }
                <div class="process-track">
                    <div class="process-line"></div>
                    {
                        for PROCESS_STEPS.iter().enumerate().map(|(i, item)| {
                            let side = if i % 2 == 0 { "process-step" } else { "process-step process-step--reverse" };
                            html! {
                                <Motion class={side} animations={animations::process_step(i)}>
                                    <div class="process-body">
                                        <Motion class="process-card card-glow" animations={animations::process_card()}>
                                            <div class="process-number text-gradient">{item.step}</div>
                                            <h3>{item.title}</h3>
                                            <p>{item.description}</p>
                                        </Motion>
                                    </div>
                                    <div class="process-dot glow-effect"></div>
                                </Motion>
                            }
                        })
                    }
                </div>
            </section>

            <section id="about" class="page-section">
                <Motion class="cta-panel" animations={animations::cta_panel()}>
                    <div class="cta-wash"></div>
                    <Motion class="cta-content" animations={animations::cta_content()}>
                        <h2>{"Ready to Transform?"}</h2>
                        <p>{format!("Let's build something extraordinary together. Start your journey with {} today.", config::BRAND_NAME)}</p>
                        <Motion tag="button" class="cta-button" animations={animations::button()}>
                            {"Start Your Project"}
                        </Motion>
                    </Motion>
                </Motion>
            </section>

            <footer class="site-footer">
                <div class="footer-brand text-gradient">{config::BRAND_NAME}</div>
                <div class="footer-links">
                    { for FOOTER_LINKS.iter().map(|link| html! { <a href={link.href}>{link.label}</a> }) }
                </div>
                <div class="footer-copy">
                    {format!("© 2024 {}. All rights reserved.", config::BRAND_NAME)}
                </div>
            </footer>

            <style>{theme_tokens()}</style>
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: var(--darker);
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }

                    .landing-page {
                        position: relative;
                        min-height: 100vh;
                        background: var(--darker);
                        overflow-x: hidden;
                    }

                    .text-gradient {
                        background: linear-gradient(135deg, #fff 0%, var(--secondary) 60%, var(--primary) 100%);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .glow-effect {
                        box-shadow: 0 0 30px rgba(94, 23, 235, 0.3);
                    }

                    .card-glow {
                        box-shadow: 0 0 0 1px rgba(94, 23, 235, 0.1), 0 8px 30px rgba(94, 23, 235, 0.08);
                    }

                    /* Background */
                    .backdrop {
                        position: fixed;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }

                    .backdrop-glow {
                        position: absolute;
                        top: 0;
                        left: 0;
                        border-radius: 50%;
                        opacity: 0.2;
                        background: radial-gradient(circle, var(--primary) 0%, transparent 70%);
                        will-change: transform;
                    }

                    .backdrop-wash {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 50% 50%, rgba(94, 23, 235, 0.1), transparent 50%);
                    }

                    .backdrop-orb {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(64px);
                    }

                    .backdrop-orb--top {
                        top: 5rem;
                        left: 5rem;
                        width: 16rem;
                        height: 16rem;
                        background: rgba(94, 23, 235, 0.1);
                    }

                    .backdrop-orb--bottom {
                        bottom: 5rem;
                        right: 5rem;
                        width: 24rem;
                        height: 24rem;
                        background: rgba(111, 47, 238, 0.1);
                    }

                    /* Nav */
                    .top-nav {
                        position: relative;
                        z-index: 50;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1.5rem 2rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .top-nav.scrolled {
                        position: sticky;
                        top: 0;
                        background: rgba(10, 6, 18, 0.8);
                        backdrop-filter: blur(8px);
                    }

                    .nav-logo {
                        font-size: 1.875rem;
                        font-weight: 700;
                        text-decoration: none;
                        cursor: pointer;
                    }

                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }

                    .nav-link {
                        color: #d1d5db;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #fff;
                    }

                    .nav-cta,
                    .hero-cta {
                        border: none;
                        border-radius: 9999px;
                        background: var(--primary);
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }

                    .nav-cta {
                        padding: 0.75rem 1.5rem;
                    }

                    .nav-cta:hover,
                    .hero-cta:hover {
                        background: var(--secondary);
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }

                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }

                    /* Hero */
                    .hero {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 5rem 2rem 8rem;
                    }

                    .hero-content {
                        text-align: center;
                    }

                    .hero-badge {
                        display: inline-block;
                        margin-bottom: 1.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(94, 23, 235, 0.2);
                        border: 1px solid rgba(94, 23, 235, 0.3);
                        font-size: 0.875rem;
                        font-weight: 500;
                    }

                    .hero-title {
                        font-size: 6rem;
                        font-weight: 700;
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }

                    .hero-tagline {
                        font-size: 1.5rem;
                        color: #9ca3af;
                        margin: 0 auto 1rem;
                    }

                    .hero-lead {
                        font-size: 1.125rem;
                        color: #6b7280;
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                    }

                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        align-items: center;
                    }

                    .hero-cta {
                        padding: 1rem 2rem;
                        font-size: 1.125rem;
                    }

                    .hero-cta--outline {
                        background: transparent;
                        border: 2px solid rgba(94, 23, 235, 0.5);
                    }

                    .hero-cta--outline:hover {
                        background: transparent;
                        border-color: var(--primary);
                    }

                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        margin-top: 8rem;
                    }

                    .stat-card {
                        text-align: center;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: rgba(18, 9, 31, 0.5);
                        border: 1px solid rgba(94, 23, 235, 0.2);
                    }

                    .stat-number {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }

                    .stat-label {
                        color: #9ca3af;
                    }

                    /* Sections */
                    .page-section {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 8rem 2rem;
                    }

                    .section-heading {
                        text-align: center;
                        margin-bottom: 5rem;
                    }

                    .section-heading h2 {
                        font-size: 3.75rem;
                        font-weight: 700;
                        margin: 0 0 1.5rem;
                    }

                    .section-heading p {
                        font-size: 1.25rem;
                        color: #9ca3af;
                        max-width: 42rem;
                        margin: 0 auto;
                    }

                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .service-card,
                    .process-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        background: rgba(18, 9, 31, 0.7);
                        border: 1px solid rgba(94, 23, 235, 0.2);
                        backdrop-filter: blur(4px);
                    }

                    .service-card {
                        cursor: pointer;
                    }

                    .service-icon {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }

                    .service-card h3 {
                        font-size: 1.5rem;
                        margin: 0 0 0.75rem;
                    }

                    .service-card p,
                    .process-card p {
                        color: #9ca3af;
                        line-height: 1.6;
                    }

                    .process-track {
                        position: relative;
                    }

                    .process-line {
                        position: absolute;
                        left: 50%;
                        top: 0;
                        bottom: 0;
                        width: 2px;
                        background: linear-gradient(to bottom, var(--primary), var(--secondary), rgba(94, 23, 235, 0.2));
                    }

                    .process-step {
                        position: relative;
                        display: flex;
                        align-items: center;
                        margin-bottom: 6rem;
                    }

                    .process-step--reverse {
                        flex-direction: row-reverse;
                    }

                    .process-body {
                        flex: 0 0 50%;
                        box-sizing: border-box;
                        padding-right: 4rem;
                    }

                    .process-step--reverse .process-body {
                        padding-right: 0;
                        padding-left: 4rem;
                    }

                    .process-number {
                        font-size: 3.75rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }

                    .process-card h3 {
                        font-size: 1.875rem;
                        margin: 0 0 1rem;
                    }

                    .process-dot {
                        position: absolute;
                        left: 50%;
                        width: 3rem;
                        height: 3rem;
                        margin-left: -1.5rem;
                        border-radius: 50%;
                        background: var(--primary);
                        z-index: 10;
                    }

                    /* Call to action */
                    .cta-panel {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1.5rem;
                        padding: 4rem;
                        text-align: center;
                        background: linear-gradient(135deg, var(--primary) 0%, var(--secondary) 100%);
                    }

                    .cta-wash {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 50% 50%, rgba(255, 255, 255, 0.1), transparent 70%);
                    }

                    .cta-content {
                        position: relative;
                        z-index: 10;
                    }

                    .cta-content h2 {
                        font-size: 3.75rem;
                        margin: 0 0 1.5rem;
                    }

                    .cta-content p {
                        font-size: 1.25rem;
                        color: rgba(255, 255, 255, 0.9);
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                    }

                    .cta-button {
                        padding: 1.25rem 3rem;
                        border: none;
                        border-radius: 9999px;
                        background: #fff;
                        color: var(--primary);
                        font-weight: 700;
                        font-size: 1.125rem;
                        cursor: pointer;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }

                    .cta-button:hover {
                        background: #f3f4f6;
                    }

                    /* Footer */
                    .site-footer {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                        border-top: 1px solid rgba(94, 23, 235, 0.2);
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 2rem;
                    }

                    .footer-brand {
                        font-size: 1.875rem;
                        font-weight: 700;
                    }

                    .footer-links {
                        display: flex;
                        gap: 2rem;
                    }

                    .footer-links a {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .footer-links a:hover {
                        color: #fff;
                    }

                    .footer-copy {
                        color: #6b7280;
                    }

                    @media (max-width: 1024px) {
                        .services-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }

                        .process-line,
                        .process-dot {
                            display: none;
                        }

                        .process-step,
                        .process-step--reverse {
                            flex-direction: column;
                            margin-bottom: 4rem;
                        }

                        .process-body,
                        .process-step--reverse .process-body {
                            flex-basis: auto;
                            width: 100%;
                            padding: 0;
                        }
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }

                        .nav-links {
                            display: none;
                        }

                        .nav-links.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem 2rem;
                            background: rgba(10, 6, 18, 0.95);
                        }

                        .hero-title {
                            font-size: 3.75rem;
                        }

                        .hero-tagline {
                            font-size: 1.25rem;
                        }

                        .hero-cta-group {
                            flex-direction: column;
                        }

                        .stats-grid,
                        .services-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }

                        .services-grid {
                            grid-template-columns: 1fr;
                        }

                        .section-heading h2,
                        .cta-content h2 {
                            font-size: 3rem;
                        }

                        .cta-panel {
                            padding: 3rem 1.5rem;
                        }

                        .site-footer {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </main>
    }
}
