use yew::prelude::*;

/// Fixed pixel size a preview is authored for before scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub width: f64,
    pub height: f64,
}

impl Resolution {
    /// Height as a percentage of width, for padding-bottom aspect boxes.
    pub fn aspect_percent(&self) -> f64 {
        self.height / self.width * 100.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceMode {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceMode {
    pub fn resolution(self) -> Resolution {
        match self {
            DeviceMode::Desktop => Resolution { width: 1440.0, height: 900.0 },
            DeviceMode::Mobile => Resolution { width: 390.0, height: 844.0 },
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DeviceMode::Desktop => DeviceMode::Mobile,
            DeviceMode::Mobile => DeviceMode::Desktop,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeviceMode::Desktop => "Desktop",
            DeviceMode::Mobile => "Mobile",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    pub children: Children,
}

#[function_component(MacBook)]
pub fn macbook(props: &ShellProps) -> Html {
    html! {
        <div class="macbook-wrap">
            <div class="macbook-lid">
                <div class="macbook-camera">
                    <div class="macbook-camera-dot"></div>
                </div>
                <div class="macbook-screen-shell">
                    { for props.children.iter() }
                </div>
            </div>
            <div class="macbook-base">
                <div class="macbook-notch"></div>
            </div>
        </div>
    }
}

#[function_component(IPhone)]
pub fn iphone(props: &ShellProps) -> Html {
    html! {
        <div class="iphone-wrap">
            <div class="iphone-frame">
                <div class="iphone-island"></div>
                <div class="iphone-screen-shell">
                    { for props.children.iter() }
                </div>
                <div class="iphone-home">
                    <div class="iphone-home-bar"></div>
                </div>
            </div>
        </div>
    }
}

/// Styles for both shells, mounted once by the showcase.
pub const DEVICE_CSS: &str = r#"
    .macbook-wrap {
        width: 100%;
        max-width: 760px;
        margin: 0 auto;
    }
    .macbook-lid {
        background: #1c1c22;
        border: 1px solid rgba(255, 255, 255, 0.08);
        border-radius: 18px 18px 4px 4px;
        padding: 22px 14px 14px;
        position: relative;
        box-shadow: 0 30px 80px rgba(0, 0, 0, 0.5);
    }
    .macbook-camera {
        position: absolute;
        top: 8px;
        left: 50%;
        transform: translateX(-50%);
    }
    .macbook-camera-dot {
        width: 6px;
        height: 6px;
        border-radius: 50%;
        background: #2b2b33;
        box-shadow: inset 0 0 2px rgba(0, 191, 255, 0.4);
    }
    .macbook-screen-shell {
        border-radius: 6px;
        overflow: hidden;
        background: #000;
    }
    .macbook-base {
        height: 16px;
        margin: 0 -6%;
        background: linear-gradient(to bottom, #2a2a31, #141418);
        border-radius: 0 0 14px 14px;
        position: relative;
    }
    .macbook-notch {
        width: 18%;
        height: 6px;
        margin: 0 auto;
        background: #0e0e12;
        border-radius: 0 0 8px 8px;
    }
    .iphone-wrap {
        width: 100%;
        max-width: 300px;
        margin: 0 auto;
    }
    .iphone-frame {
        background: #111116;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 46px;
        padding: 14px;
        position: relative;
        box-shadow: 0 30px 80px rgba(0, 0, 0, 0.5);
    }
    .iphone-island {
        position: absolute;
        top: 22px;
        left: 50%;
        transform: translateX(-50%);
        width: 32%;
        height: 22px;
        background: #000;
        border-radius: 20px;
        z-index: 3;
    }
    .iphone-screen-shell {
        border-radius: 34px;
        overflow: hidden;
        background: #000;
    }
    .iphone-home {
        display: flex;
        justify-content: center;
        padding-top: 10px;
    }
    .iphone-home-bar {
        width: 36%;
        height: 4px;
        border-radius: 4px;
        background: rgba(255, 255, 255, 0.25);
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_resolutions() {
        assert_eq!(DeviceMode::Desktop.resolution(), Resolution { width: 1440.0, height: 900.0 });
        assert_eq!(DeviceMode::Mobile.resolution(), Resolution { width: 390.0, height: 844.0 });
    }

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(DeviceMode::Desktop.toggled(), DeviceMode::Mobile);
        assert_eq!(DeviceMode::Mobile.toggled().toggled(), DeviceMode::Mobile);
    }

    #[test]
    fn aspect_percent_matches_ratio() {
        let desktop = DeviceMode::Desktop.resolution();
        assert!((desktop.aspect_percent() - 62.5).abs() < 1e-9);
    }
}
