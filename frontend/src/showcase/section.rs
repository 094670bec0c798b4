use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::data::projects::{find_project, position_label, Project, PROJECTS};

use super::device::{DeviceMode, IPhone, MacBook, DEVICE_CSS};
use super::frame::ScaledFrame;
use super::layout::LayoutMode;
use super::preview::{PreviewAction, PreviewState};
use super::project_card::{ProjectCard, PROJECT_CARD_CSS};
use super::view_toggle::ViewToggle;

/// Host-supplied timing and layout constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShowcaseConfig {
    pub breakpoint_px: f64,
    pub switch_delay_ms: u32,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: config::MOBILE_BREAKPOINT_PX,
            switch_delay_ms: config::SWITCH_DELAY_MS,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    #[prop_or_default]
    pub config: ShowcaseConfig,
}

#[derive(Properties, PartialEq)]
struct DeviceFrameProps {
    project: &'static Project,
    mode: DeviceMode,
    switching: bool,
}

#[function_component(DeviceFrame)]
fn device_frame(props: &DeviceFrameProps) -> Html {
    let native = props.mode.resolution();
    let title = format!("{} — {}", props.project.title, props.mode.label());
    let screen = html! {
        <ScaledFrame src={props.project.url} native={native} title={title} />
    };

    html! {
        <div class={classes!("device-frame", props.switching.then(|| "switching"))}>
            {
                match props.mode {
                    DeviceMode::Mobile => html! { <IPhone>{screen}</IPhone> },
                    DeviceMode::Desktop => html! { <MacBook>{screen}</MacBook> },
                }
            }
        </div>
    }
}

#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let ShowcaseConfig { breakpoint_px, switch_delay_ms } = props.config;
    let preview = use_reducer(|| PreviewState::new(PROJECTS.len()));
    let (viewport_width, _) = use_window_size();
    let layout = LayoutMode::for_viewport(viewport_width, breakpoint_px);

    // One timer per pending switch. A newer request changes the generation,
    // which drops (and so cancels) the previous timer before arming the next.
    {
        let dispatcher = preview.dispatcher();
        use_effect_with_deps(
            move |&(generation, switching)| {
                let timeout = switching.then(|| {
                    Timeout::new(switch_delay_ms, move || {
                        dispatcher.dispatch(PreviewAction::Settle(generation));
                    })
                });
                move || drop(timeout)
            },
            (preview.generation(), preview.is_switching()),
        );
    }

    let on_select = {
        let preview = preview.clone();
        Callback::from(move |id: usize| preview.dispatch(PreviewAction::Select(id)))
    };
    let on_toggle = {
        let preview = preview.clone();
        Callback::from(move |_: ()| preview.dispatch(PreviewAction::ToggleMode))
    };

    let Some(active) = find_project(preview.active_id()) else {
        return html! {};
    };
    let mode = layout.effective_mode(preview.mode());
    let switching = preview.is_switching();

    let open_link = html! {
        <a href={active.url} target="_blank" rel="noopener noreferrer"
            class="mag-btn showcase__open-link" data-hover="true">
            {"Open Live Site ↗"}
        </a>
    };

    let body = if layout.is_stacked() {
        html! {
            <div class="showcase__mobile-list">
                { for PROJECTS.iter().map(|project| {
                    let is_active = project.id == active.id;
                    html! {
                        <ProjectCard key={project.id} project={project} is_active={is_active} on_select={on_select.clone()}>
                            {
                                if is_active {
                                    html! {
                                        <>
                                            <div class="showcase__mobile-device">
                                                <DeviceFrame project={active} mode={mode} switching={switching} />
                                            </div>
                                            { open_link.clone() }
                                        </>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </ProjectCard>
                    }
                }) }
            </div>
        }
    } else {
        html! {
            <div class="showcase__desktop-layout">
                <div class="project-list-col">
                    <div class="project-list-cards">
                        { for PROJECTS.iter().map(|project| html! {
                            <ProjectCard key={project.id} project={project}
                                is_active={project.id == active.id} on_select={on_select.clone()} />
                        }) }
                    </div>
                    { open_link.clone() }
                </div>
                <div class="showcase__device-col">
                    <ViewToggle mode={mode} on_toggle={on_toggle} />
                    <DeviceFrame project={active} mode={mode} switching={switching} />
                    <div class="showcase__info-bar glass">
                        <div>
                            <div class="showcase__info-title">{active.title}</div>
                            <div class="showcase__info-desc">{active.desc}</div>
                        </div>
                        <div class="showcase__info-num">{position_label(active)}</div>
                    </div>
                </div>
            </div>
        }
    };

    html! {
        <section id="work" class="showcase">
            <div class="blob showcase__blob"></div>
            <div class="showcase__inner">
                <div class="showcase__header">
                    <div class="sec-label">{"See It Live"}</div>
                    <h2 class="showcase__heading">
                        {"Real Sites. Real People."}<br />
                        <span>{"Built by Us."}</span>
                    </h2>
                    <p class="showcase__sub">
                        {"These are actual live websites we've built for couples, families, and events. Click any project to preview it, or open it directly."}
                    </p>
                </div>
                { body }
            </div>
            <style>{DEVICE_CSS}</style>
            <style>{PROJECT_CARD_CSS}</style>
            <style>
                {r#"
                .showcase {
                    position: relative;
                    padding: 120px 60px;
                    overflow: hidden;
                }
                .showcase__blob {
                    width: 600px;
                    height: 600px;
                    top: 10%;
                    right: -200px;
                    background: radial-gradient(circle, rgba(0, 191, 255, 0.08) 0%, transparent 70%);
                }
                .showcase__inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    position: relative;
                }
                .showcase__header {
                    margin-bottom: 56px;
                    animation: fadeUp 0.8s ease both;
                }
                .showcase__heading {
                    font-family: 'Unbounded', sans-serif;
                    font-size: clamp(1.8rem, 4vw, 3rem);
                    line-height: 1.1;
                    margin: 16px 0;
                }
                .showcase__heading span {
                    color: var(--cyan);
                }
                .showcase__sub {
                    color: var(--muted);
                    max-width: 560px;
                    line-height: 1.8;
                }
                .showcase__desktop-layout {
                    display: flex;
                    gap: 48px;
                    align-items: flex-start;
                }
                .project-list-col {
                    width: 320px;
                    flex-shrink: 0;
                }
                .project-list-cards {
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                }
                .showcase__open-link {
                    margin-top: 16px;
                    display: flex;
                    justify-content: center;
                    font-size: 10px;
                }
                .showcase__device-col {
                    flex: 1;
                    min-width: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 24px;
                }
                .device-frame {
                    width: 100%;
                    transition: opacity 0.26s ease, transform 0.26s ease;
                }
                .device-frame.switching {
                    opacity: 0.25;
                    transform: scale(0.97);
                }
                .showcase__info-bar {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 16px 22px;
                    border-radius: 14px;
                }
                .showcase__info-title {
                    font-family: 'Syne', sans-serif;
                    font-weight: 700;
                    font-size: 14px;
                }
                .showcase__info-desc {
                    font-size: 11px;
                    color: var(--muted);
                }
                .showcase__info-num {
                    font-family: 'Space Mono', monospace;
                    font-size: 11px;
                    color: var(--cyan);
                }
                .showcase__mobile-list {
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                }
                .showcase__mobile-device {
                    margin: 18px 0 4px;
                }
                @media (max-width: 768px) {
                    .showcase {
                        padding: 90px 20px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
