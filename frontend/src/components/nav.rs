use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::effects::listener::Listener;
use crate::theme::use_theme;

#[function_component(Nav)]
pub fn nav() -> Html {
    let theme = use_theme();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    let win = window.clone();
                    Listener::new(&window, "scroll", move |_| {
                        let scroll_y = win.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > config::NAV_SCROLL_THRESHOLD_PX);
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    // Lock page scroll behind the open drawer.
    use_effect_with_deps(
        |open| {
            let body = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body());
            if let Some(body) = &body {
                let _ = body
                    .style()
                    .set_property("overflow", if *open { "hidden" } else { "" });
            }
            move || {
                if let Some(body) = body {
                    let _ = body.style().set_property("overflow", "");
                }
            }
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let toggle_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <>
            <nav class={classes!("nav", (*is_scrolled).then(|| "nav--scrolled"))}>
                <a href="/" class="nav__logo" onclick={close_menu.clone()}>
                    <img src={theme.theme.logo_src()} alt={config::SITE_NAME} width="130" height="32" />
                </a>

                <div class="nav__right">
                    <a href="#work" class="nav__link nav__link--desktop" data-hover="true">{"Work"}</a>
                    <a href="#about" class="nav__link nav__link--desktop" data-hover="true">{"About"}</a>

                    <button onclick={toggle_theme} class="nav__toggle" aria-label="Toggle theme" data-hover="true">
                        {theme.theme.toggle_icon()}
                    </button>

                    <button
                        class={classes!("nav__burger", (*menu_open).then(|| "open"))}
                        onclick={toggle_menu}
                        aria-label="Toggle navigation"
                        aria-expanded={menu_open.to_string()}
                        data-hover="true"
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            <div class={classes!("nav__drawer", (*menu_open).then(|| "open"))} role="dialog" aria-modal="true">
                <a href="#work" class="nav__drawer-link" onclick={close_menu.clone()} data-hover="true">{"Work"}</a>
                <a href="#about" class="nav__drawer-link" onclick={close_menu.clone()} data-hover="true">{"About"}</a>
                <a href={config::STUDIO_URL} target="_blank" rel="noopener noreferrer"
                    class="nav__drawer-link nav__drawer-link--sm" onclick={close_menu} data-hover="true">
                    {"onemark.digital ↗"}
                </a>
            </div>

            <style>
                {r#"
                .nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 22px 60px;
                    transition: background 0.3s ease, padding 0.3s ease, border-color 0.3s ease;
                    border-bottom: 1px solid transparent;
                }
                .nav--scrolled {
                    padding: 14px 60px;
                    background: color-mix(in srgb, var(--bg) 80%, transparent);
                    backdrop-filter: blur(14px);
                    border-bottom-color: var(--border);
                }
                .nav__logo img {
                    object-fit: contain;
                    object-position: left;
                    display: block;
                }
                .nav__right {
                    display: flex;
                    align-items: center;
                    gap: 28px;
                }
                .nav__link {
                    color: var(--muted);
                    text-decoration: none;
                    font-size: 13px;
                    transition: color 0.2s;
                }
                .nav__link:hover {
                    color: var(--text);
                }
                .nav__toggle {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 50%;
                    width: 36px;
                    height: 36px;
                    cursor: pointer;
                }
                .nav__burger {
                    display: none;
                    position: relative;
                    width: 24px;
                    height: 24px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    z-index: 1002;
                }
                .nav__burger span {
                    position: absolute;
                    left: 0;
                    right: 0;
                    height: 2px;
                    background: var(--text);
                    transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
                }
                .nav__burger span:nth-child(1) { top: 5px; }
                .nav__burger span:nth-child(2) { top: 11px; }
                .nav__burger span:nth-child(3) { top: 17px; }
                .nav__burger.open span:nth-child(1) { top: 11px; transform: rotate(45deg); }
                .nav__burger.open span:nth-child(2) { opacity: 0; }
                .nav__burger.open span:nth-child(3) { top: 11px; transform: rotate(-45deg); }
                .nav__drawer {
                    position: fixed;
                    inset: 0;
                    z-index: 1001;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 28px;
                    background: var(--bg);
                    opacity: 0;
                    visibility: hidden;
                    transition: opacity 0.3s ease, visibility 0.3s;
                }
                .nav__drawer.open {
                    opacity: 1;
                    visibility: visible;
                }
                .nav__drawer-link {
                    font-family: 'Unbounded', sans-serif;
                    font-size: 2rem;
                    color: var(--text);
                    text-decoration: none;
                    transform: translateY(24px);
                    opacity: 0;
                    transition: transform 0.45s cubic-bezier(0.16, 1, 0.3, 1), opacity 0.45s;
                }
                .nav__drawer.open .nav__drawer-link {
                    transform: translateY(0);
                    opacity: 1;
                }
                .nav__drawer.open .nav__drawer-link:nth-child(2) { transition-delay: 0.07s; }
                .nav__drawer.open .nav__drawer-link:nth-child(3) { transition-delay: 0.14s; }
                .nav__drawer-link--sm {
                    font-family: 'Space Mono', monospace;
                    font-size: 0.9rem;
                    color: var(--cyan);
                }
                @media (max-width: 768px) {
                    .nav,
                    .nav--scrolled {
                        padding-left: 22px;
                        padding-right: 22px;
                    }
                    .nav__link--desktop {
                        display: none;
                    }
                    .nav__burger {
                        display: block;
                    }
                }
                "#}
            </style>
        </>
    }
}
