use std::cell::Cell;
use std::f64::consts::PI;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::components::cursor::Point;
use crate::config;
use crate::effects::frame_loop::FrameLoop;
use crate::effects::listener::Listener;
use crate::theme::Theme;

const DARK_PALETTE: [&str; 4] = ["#29ABE2", "#FF4D6D", "#FFB547", "#3355FF"];
const LIGHT_PALETTE: [&str; 4] = ["#0A5FA8", "#8B1A2E", "#5C3A9E", "#006D77"];

const CAMERA_Z: f64 = 5.0;
const FOV_DEG: f64 = 60.0;
const TIME_STEP: f64 = 0.003;

pub fn palette(theme: Theme) -> &'static [&'static str; 4] {
    match theme {
        Theme::Dark => &DARK_PALETTE,
        Theme::Light => &LIGHT_PALETTE,
    }
}

/// Pointer position relative to the viewport centre, in [-1, 1] with y up.
pub fn normalized_pointer(client: Point, width: f64, height: f64) -> Point {
    if width <= 0.0 || height <= 0.0 {
        return Point::default();
    }
    Point {
        x: (client.x / width - 0.5) * 2.0,
        y: -(client.y / height - 0.5) * 2.0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub origin: [f64; 3],
    pub color: usize,
}

/// Screen-space result of projecting one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    camera: Point,
}

impl ParticleField {
    /// Scatters `count` particles in an 18×12×8 box. `sample` yields uniform
    /// values in [0, 1).
    pub fn new(count: usize, mut sample: impl FnMut() -> f64) -> Self {
        let particles = (0..count)
            .map(|_| {
                let origin = [
                    (sample() - 0.5) * 18.0,
                    (sample() - 0.5) * 12.0,
                    (sample() - 0.5) * 8.0,
                ];
                let color = ((sample() * 4.0) as usize).min(3);
                Particle { origin, color }
            })
            .collect();
        Self { particles, camera: Point::default() }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// World position of particle `i` at time `t`, before field rotation.
    pub fn drifted(&self, i: usize, t: f64) -> [f64; 3] {
        let [x, y, z] = self.particles[i].origin;
        let k = i as f64;
        [
            x + (t + k * 0.007).cos() * 0.05,
            y + (t + k * 0.011).sin() * 0.07,
            z,
        ]
    }

    /// Eases the camera toward the pointer for a parallax effect.
    pub fn follow(&mut self, pointer: Point) {
        self.camera.x += (pointer.x * 0.2 - self.camera.x) * 0.04;
        self.camera.y += (pointer.y * 0.1 - self.camera.y) * 0.04;
    }

    pub fn camera(&self) -> Point {
        self.camera
    }

    /// Rotates a point about the y then x axes and projects it onto a
    /// `width`×`height` screen. Points at or behind the camera are culled.
    pub fn project(
        &self,
        p: [f64; 3],
        yaw: f64,
        pitch: f64,
        width: f64,
        height: f64,
    ) -> Option<Projected> {
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        let x1 = p[0] * cy + p[2] * sy;
        let z1 = -p[0] * sy + p[2] * cy;
        let y2 = p[1] * cp - z1 * sp;
        let z2 = p[1] * sp + z1 * cp;

        let depth = CAMERA_Z - z2;
        if depth <= 0.1 {
            return None;
        }
        let focal = (height / 2.0) / (FOV_DEG.to_radians() / 2.0).tan();
        let scale = focal / depth;
        Some(Projected {
            x: width / 2.0 + (x1 - self.camera.x) * scale,
            y: height / 2.0 - (y2 - self.camera.y) * scale,
            size: (0.02 * scale).max(0.6),
        })
    }
}

struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface {
    fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let surface = Self { canvas, ctx };
        surface.fit_parent();
        Some(surface)
    }

    fn fit_parent(&self) {
        if let Some(parent) = self.canvas.parent_element() {
            self.canvas.set_width(parent.client_width().max(0) as u32);
            self.canvas.set_height(parent.client_height().max(0) as u32);
        }
    }

    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn draw(&self, field: &ParticleField, t: f64, pointer: Point, theme: Theme) {
        let (width, height) = self.size();
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, width, height);

        let yaw = t * 0.05 + pointer.x * 0.15;
        let pitch = pointer.y * 0.06;
        let colors = palette(theme);
        ctx.set_global_alpha(match theme {
            Theme::Dark => 0.7,
            Theme::Light => 0.8,
        });

        for (slot, color) in colors.iter().enumerate() {
            ctx.set_fill_style_str(color);
            for (i, particle) in field.particles().iter().enumerate() {
                if particle.color != slot {
                    continue;
                }
                if let Some(p) = field.project(field.drifted(i, t), yaw, pitch, width, height) {
                    ctx.fill_rect(p.x, p.y, p.size, p.size);
                }
            }
        }

        let cx = width / 2.0 - field.camera().x * 40.0;
        let cy = height / 2.0 + field.camera().y * 40.0;
        let radius = height.min(width) * 0.22;
        self.ring(cx, cy, radius, (t * 0.22).sin().abs(), t * 0.09 + pointer.x * 0.18, colors[0], 0.13);
        self.ring(cx, cy, radius * 0.66, (t * 0.16 + pointer.y * 0.25).cos().abs(), 0.9 + t * 0.1, colors[1], 0.09);
    }

    #[allow(clippy::too_many_arguments)]
    fn ring(&self, cx: f64, cy: f64, r: f64, squash: f64, rotation: f64, color: &str, alpha: f64) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(alpha);
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        if ctx
            .ellipse(cx, cy, r, (r * squash).max(1.0), rotation, 0.0, 2.0 * PI)
            .is_ok()
        {
            ctx.stroke();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroCanvasProps {
    pub theme: Theme,
}

/// Drifting particle field behind the hero headline. Rebuilt on theme change.
#[function_component(HeroCanvas)]
pub fn hero_canvas(props: &HeroCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |theme| {
                let theme = *theme;
                let mut guards: Vec<Listener> = Vec::new();
                let mut frames = None;

                let window = web_sys::window();
                let surface = canvas_ref.cast::<HtmlCanvasElement>().and_then(Surface::from_canvas);

                match (window, surface) {
                    (Some(window), Some(surface)) => {
                        let surface = Rc::new(surface);
                        let pointer = Rc::new(Cell::new(Point::default()));

                        {
                            let pointer = pointer.clone();
                            let win = window.clone();
                            guards.extend(Listener::new(&window, "mousemove", move |e: Event| {
                                let Some(e) = e.dyn_ref::<MouseEvent>() else {
                                    return;
                                };
                                let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                                let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                                let client = Point { x: e.client_x() as f64, y: e.client_y() as f64 };
                                pointer.set(normalized_pointer(client, width, height));
                            }));
                        }
                        {
                            let surface = surface.clone();
                            guards.extend(Listener::new(&window, "resize", move |_| surface.fit_parent()));
                        }

                        let mut field = ParticleField::new(config::HERO_PARTICLE_COUNT, Math::random);
                        let mut t = 0.0;
                        frames = FrameLoop::start(move |_| {
                            t += TIME_STEP;
                            let pointer = pointer.get();
                            field.follow(pointer);
                            surface.draw(&field, t, pointer, theme);
                        });
                    }
                    _ => warn!("Hero canvas unavailable, skipping particle field"),
                }

                move || {
                    drop(frames);
                    drop(guards);
                }
            },
            props.theme,
        );
    }

    html! {
        <canvas ref={canvas_ref} class="hero__canvas" aria-hidden="true"></canvas>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_samples(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = values.into_iter().cycle();
        move || iter.next().unwrap_or(0.5)
    }

    #[test]
    fn field_scatters_within_box() {
        let field = ParticleField::new(50, fixed_samples(vec![0.0, 0.25, 0.5, 0.75, 0.999]));
        assert_eq!(field.particles().len(), 50);
        for p in field.particles() {
            assert!(p.origin[0].abs() <= 9.0);
            assert!(p.origin[1].abs() <= 6.0);
            assert!(p.origin[2].abs() <= 4.0);
            assert!(p.color < 4);
        }
    }

    #[test]
    fn drift_is_small() {
        let field = ParticleField::new(10, fixed_samples(vec![0.5]));
        for i in 0..10 {
            let d = field.drifted(i, 12.3);
            assert!((d[0] - field.particles()[i].origin[0]).abs() <= 0.05 + 1e-12);
            assert!((d[1] - field.particles()[i].origin[1]).abs() <= 0.07 + 1e-12);
        }
    }

    #[test]
    fn origin_projects_to_screen_centre() {
        let field = ParticleField::new(0, fixed_samples(vec![0.5]));
        let p = field.project([0.0, 0.0, 0.0], 0.0, 0.0, 800.0, 600.0).unwrap();
        assert!((p.x - 400.0).abs() < 1e-9);
        assert!((p.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let field = ParticleField::new(0, fixed_samples(vec![0.5]));
        assert!(field.project([0.0, 0.0, 6.0], 0.0, 0.0, 800.0, 600.0).is_none());
    }

    #[test]
    fn pointer_normalises_to_unit_square() {
        let centre = normalized_pointer(Point { x: 500.0, y: 250.0 }, 1000.0, 500.0);
        assert_eq!(centre, Point { x: 0.0, y: 0.0 });
        let corner = normalized_pointer(Point { x: 0.0, y: 0.0 }, 1000.0, 500.0);
        assert_eq!(corner, Point { x: -1.0, y: 1.0 });
        assert_eq!(normalized_pointer(Point { x: 3.0, y: 3.0 }, 0.0, 0.0), Point::default());
    }

    #[test]
    fn camera_eases_toward_pointer() {
        let mut field = ParticleField::new(0, fixed_samples(vec![0.5]));
        for _ in 0..500 {
            field.follow(Point { x: 1.0, y: 1.0 });
        }
        assert!((field.camera().x - 0.2).abs() < 1e-6);
        assert!((field.camera().y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn palettes_are_css_hex_colours() {
        for theme in [Theme::Dark, Theme::Light] {
            for colour in palette(theme) {
                assert_eq!(colour.len(), 7);
                assert!(colour.starts_with('#'));
                assert!(colour[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }
}
