use log::{info, warn};
use serde::{Deserialize, Serialize};
use stylist::GlobalStyle;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn logo_src(self) -> &'static str {
        match self {
            Theme::Dark => "/stories-logo-white-resized.png",
            Theme::Light => "/stories-logo-blue-resized.png",
        }
    }

    /// Icon for the toggle button: shows what clicking switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

/// Saved choice wins, then the OS preference, then dark.
pub fn initial_theme(saved: Option<Theme>, prefers_dark: Option<bool>) -> Theme {
    match (saved, prefers_dark) {
        (Some(theme), _) => theme,
        (None, Some(false)) => Theme::Light,
        _ => Theme::Dark,
    }
}

fn prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let query = window.match_media("(prefers-color-scheme: dark)").ok().flatten()?;
    Some(query.matches())
}

fn apply_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
        warn!("Failed to apply theme attribute: {:?}", e);
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            toggle: Callback::noop(),
        }
    }
}

/// Current theme, or dark with a no-op toggle outside a provider.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let storage = use_local_storage::<Theme>(config::THEME_STORAGE_KEY.to_string());
    let theme = {
        let saved = *storage;
        use_state(move || initial_theme(saved, prefers_dark()))
    };

    let _sheet = use_memo(
        |_| {
            if let Err(e) = GlobalStyle::new(THEME_CSS) {
                warn!("Failed to register theme stylesheet: {:?}", e);
            }
        },
        (),
    );

    use_effect_with_deps(
        |theme| {
            apply_to_document(*theme);
            || ()
        },
        *theme,
    );

    let toggle = {
        let theme = theme.clone();
        let storage = storage.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggled();
            info!("Switching theme to {}", next.as_str());
            storage.set(next);
            theme.set(next);
        })
    };

    let context = ThemeContext { theme: *theme, toggle };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

const THEME_CSS: &str = r#"
    :root {
        --cyan: #00BFFF;
        --coral: #FF4D6D;
        --amber: #FFB547;
        --bg: #080809;
        --surface: rgba(255, 255, 255, 0.03);
        --border: rgba(255, 255, 255, 0.08);
        --text: #EDEDF2;
        --muted: #5A5A6E;
    }

    html[data-theme=light] {
        --cyan: #0A5FA8;
        --coral: #8B1A2E;
        --amber: #9A6200;
        --bg: #F6F6F9;
        --surface: rgba(0, 0, 0, 0.03);
        --border: rgba(0, 0, 0, 0.08);
        --text: #121218;
        --muted: #6B6B7E;
    }

    body {
        margin: 0;
        background: var(--bg);
        color: var(--text);
        font-family: 'Plus Jakarta Sans', sans-serif;
        transition: background 0.4s ease, color 0.4s ease;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_theme_beats_system_preference() {
        assert_eq!(initial_theme(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(initial_theme(Some(Theme::Dark), Some(false)), Theme::Dark);
    }

    #[test]
    fn falls_back_to_system_then_dark() {
        assert_eq!(initial_theme(None, Some(false)), Theme::Light);
        assert_eq!(initial_theme(None, Some(true)), Theme::Dark);
        assert_eq!(initial_theme(None, None), Theme::Dark);
    }

    #[test]
    fn stored_form_is_lowercase_name() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let parsed: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, Theme::Dark);
    }

    #[test]
    fn toggle_swaps_logo() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_ne!(Theme::Dark.logo_src(), Theme::Light.logo_src());
    }
}
