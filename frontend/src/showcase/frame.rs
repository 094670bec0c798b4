use web_sys::Element;
use yew::prelude::*;

use crate::effects::resize::ResizeWatch;

use super::device::Resolution;
use super::scale::ScaleState;

#[derive(Properties, PartialEq)]
pub struct ScaledFrameProps {
    pub src: AttrValue,
    pub native: Resolution,
    #[prop_or_else(|| AttrValue::from("Project Preview"))]
    pub title: AttrValue,
}

/// Renders an embedded site at its native resolution and scales it down
/// uniformly to the width of the hosting container.
#[function_component(ScaledFrame)]
pub fn scaled_frame(props: &ScaledFrameProps) -> Html {
    let wrap_ref = use_node_ref();
    let measured_width = use_state_eq(|| 0.0_f64);
    let scale_state = use_mut_ref(|| ScaleState::new(props.native.width));
    let loading = use_state(|| true);

    {
        let wrap_ref = wrap_ref.clone();
        let measured_width = measured_width.clone();
        use_effect_with_deps(
            move |_| {
                let watch = wrap_ref.cast::<Element>().and_then(|wrap| {
                    ResizeWatch::new(&wrap, move |width| measured_width.set(width))
                });
                move || drop(watch)
            },
            (),
        );
    }

    // New document, new spinner.
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                loading.set(true);
                || ()
            },
            props.src.clone(),
        );
    }

    let scale = {
        let mut state = scale_state.borrow_mut();
        state.rebase(props.native.width);
        state.observe(*measured_width);
        state.scale()
    };

    let onload = {
        let loading = loading.clone();
        Callback::from(move |_: Event| loading.set(false))
    };

    let wrap_style = format!(
        "position: relative; width: 100%; height: 0; padding-bottom: {}%; overflow: hidden; background: #000;",
        props.native.aspect_percent()
    );
    let frame_style = format!(
        "position: absolute; top: 0; left: 0; width: {}px; height: {}px; border: none; transform-origin: top left; transform: scale({}); pointer-events: all;",
        props.native.width, props.native.height, scale
    );

    html! {
        <div ref={wrap_ref} style={wrap_style}>
            {
                if *loading {
                    html! {
                        <div class="iframe-loading">
                            <div class="iframe-spinner"></div>
                            <span class="iframe-loading-text">{"Loading preview…"}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <iframe
                src={props.src.clone()}
                title={props.title.clone()}
                onload={onload}
                sandbox="allow-scripts allow-same-origin allow-forms allow-popups"
                loading="lazy"
                style={frame_style}
            />
            <style>
                {r#"
                .iframe-loading {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 12px;
                    background: #0b0b0e;
                    z-index: 2;
                }
                .iframe-spinner {
                    width: 28px;
                    height: 28px;
                    border-radius: 50%;
                    border: 2px solid rgba(0, 191, 255, 0.15);
                    border-top-color: var(--cyan);
                    animation: iframeSpin 0.8s linear infinite;
                }
                .iframe-loading-text {
                    font-family: 'Space Mono', monospace;
                    font-size: 10px;
                    letter-spacing: 0.08em;
                    color: var(--muted);
                }
                @keyframes iframeSpin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </div>
    }
}
