use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::effects::frame_loop::FrameLoop;
use crate::effects::listener::Listener;

const HOVER_TARGETS: &str = "a, button, [data-hover]";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Moves `factor` of the way toward `target`.
    pub fn lerp_toward(self, target: Point, factor: f64) -> Point {
        Point {
            x: self.x + (target.x - self.x) * factor,
            y: self.y + (target.y - self.y) * factor,
        }
    }
}

fn place(el: &HtmlElement, at: Point) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{}px", at.x));
    let _ = style.set_property("top", &format!("{}px", at.y));
}

fn is_hover_target(event: &Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(HOVER_TARGETS).ok().flatten())
        .is_some()
}

/// Dot that tracks the pointer exactly plus a ring that trails it.
#[function_component(Cursor)]
pub fn cursor() -> Html {
    let dot_ref = use_node_ref();
    let ring_ref = use_node_ref();

    {
        let dot_ref = dot_ref.clone();
        let ring_ref = ring_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut guards: Vec<Listener> = Vec::new();
                let mut frames: Option<FrameLoop> = None;

                let window = web_sys::window();
                let body = window.as_ref().and_then(|w| w.document()).and_then(|d| d.body());
                let dot = dot_ref.cast::<HtmlElement>();
                let ring = ring_ref.cast::<HtmlElement>();

                if let (Some(window), Some(body), Some(dot), Some(ring)) = (window, body, dot, ring) {
                    let mouse = Rc::new(Cell::new(Point::default()));

                    {
                        let mouse = mouse.clone();
                        guards.extend(Listener::new(&window, "mousemove", move |e: Event| {
                            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                                let at = Point { x: e.client_x() as f64, y: e.client_y() as f64 };
                                mouse.set(at);
                                place(&dot, at);
                            }
                        }));
                    }

                    let classes = body.class_list();
                    {
                        let classes = classes.clone();
                        guards.extend(Listener::new(&body, "mousedown", move |_| {
                            let _ = classes.add_1("cursor-clicking");
                        }));
                    }
                    {
                        let classes = classes.clone();
                        guards.extend(Listener::new(&body, "mouseup", move |_| {
                            let _ = classes.remove_1("cursor-clicking");
                        }));
                    }
                    {
                        let classes = classes.clone();
                        guards.extend(Listener::new(&body, "mouseover", move |e: Event| {
                            let _ = classes.toggle_with_force("cursor-hovered", is_hover_target(&e));
                        }));
                    }

                    let mut ring_pos = Point::default();
                    frames = FrameLoop::start(move |_| {
                        ring_pos = ring_pos.lerp_toward(mouse.get(), config::CURSOR_LERP_FACTOR);
                        place(&ring, ring_pos);
                    });

                    guards.extend(Listener::new(&body, "mouseleave", {
                        let classes = classes.clone();
                        move |_| {
                            let _ = classes.remove_1("cursor-hovered");
                        }
                    }));
                }

                move || {
                    drop(frames);
                    drop(guards);
                }
            },
            (),
        );
    }

    html! {
        <>
            <div ref={dot_ref} class="cursor-dot" aria-hidden="true"></div>
            <div ref={ring_ref} class="cursor-ring" aria-hidden="true"></div>
            <style>
                {r#"
                .cursor-dot,
                .cursor-ring {
                    position: fixed;
                    top: 0;
                    left: 0;
                    pointer-events: none;
                    border-radius: 50%;
                    transform: translate(-50%, -50%);
                    z-index: 10000;
                }
                .cursor-dot {
                    width: 6px;
                    height: 6px;
                    background: var(--cyan);
                    transition: width 0.2s, height 0.2s, background 0.2s;
                }
                .cursor-ring {
                    width: 34px;
                    height: 34px;
                    border: 1px solid rgba(0, 191, 255, 0.5);
                    transition: width 0.3s, height 0.3s, border-color 0.3s;
                }
                body.cursor-hovered .cursor-ring {
                    width: 56px;
                    height: 56px;
                    border-color: var(--coral);
                }
                body.cursor-hovered .cursor-dot {
                    background: var(--coral);
                }
                body.cursor-clicking .cursor-dot {
                    width: 3px;
                    height: 3px;
                }
                @media (hover: none) {
                    .cursor-dot,
                    .cursor-ring {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_moves_fraction_of_distance() {
        let ring = Point { x: 0.0, y: 100.0 };
        let next = ring.lerp_toward(Point { x: 100.0, y: 0.0 }, 0.12);
        assert!((next.x - 12.0).abs() < 1e-9);
        assert!((next.y - 88.0).abs() < 1e-9);
    }

    #[test]
    fn lerp_converges_on_target() {
        let target = Point { x: 640.0, y: 360.0 };
        let mut ring = Point::default();
        for _ in 0..200 {
            ring = ring.lerp_toward(target, config::CURSOR_LERP_FACTOR);
        }
        assert!((ring.x - target.x).abs() < 0.01);
        assert!((ring.y - target.y).abs() < 0.01);
    }

    #[test]
    fn lerp_at_target_stays_put() {
        let at = Point { x: 5.0, y: 5.0 };
        assert_eq!(at.lerp_toward(at, 0.12), at);
    }
}
