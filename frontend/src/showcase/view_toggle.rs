use log::warn;
use stylist::Style;
use yew::prelude::*;

use super::device::DeviceMode;

const TRACK_CSS: &str = r#"
    position: relative;
    width: 130px;
    height: 38px;
    background: rgba(255, 255, 255, 0.06);
    border-radius: 100px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    display: flex;
    align-items: center;
    overflow: hidden;
    user-select: none;
    cursor: pointer;

    .toggle-thumb {
        position: absolute;
        top: 4px;
        height: 30px;
        width: 57px;
        background: linear-gradient(135deg, var(--cyan), rgba(0, 180, 255, 0.8));
        border-radius: 100px;
        box-shadow: 0 0 18px rgba(0, 245, 255, 0.5);
        transition: left 0.45s cubic-bezier(0.23, 1, 0.32, 1);
    }

    .toggle-label {
        position: relative;
        z-index: 1;
        flex: 1;
        text-align: center;
        font-family: 'DM Mono', monospace;
        font-size: 10px;
        letter-spacing: 0.04em;
        color: var(--muted);
        font-weight: 400;
        transition: color 0.3s;
    }

    .toggle-label.active {
        color: #000;
        font-weight: 700;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct ViewToggleProps {
    pub mode: DeviceMode,
    pub on_toggle: Callback<()>,
}

/// Pill switch between the desktop and mobile preview frames.
#[function_component(ViewToggle)]
pub fn view_toggle(props: &ViewToggleProps) -> Html {
    let track_class = use_memo(
        |_| match Style::new(TRACK_CSS) {
            Ok(style) => style.get_class_name().to_string(),
            Err(e) => {
                warn!("Failed to build toggle style: {:?}", e);
                String::new()
            }
        },
        (),
    );

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let is_mobile = props.mode == DeviceMode::Mobile;
    let thumb_style = format!("left: {}px;", if is_mobile { 69 } else { 4 });

    html! {
        <div style="display: flex; align-items: center; gap: 12px;">
            <span style="font-family: 'DM Mono', monospace; font-size: 10px; color: var(--muted); letter-spacing: 0.08em;">
                {"Preview mode"}
            </span>
            <div
                class={classes!((*track_class).clone())}
                onclick={onclick}
                data-hover="true"
                role="switch"
                aria-checked={is_mobile.to_string()}
            >
                <div class="toggle-thumb" style={thumb_style}></div>
                <span class={classes!("toggle-label", (!is_mobile).then(|| "active"))}>
                    {DeviceMode::Desktop.label()}
                </span>
                <span class={classes!("toggle-label", is_mobile.then(|| "active"))}>
                    {DeviceMode::Mobile.label()}
                </span>
            </div>
        </div>
    }
}
