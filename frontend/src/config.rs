#[cfg(debug_assertions)]
pub fn get_site_origin() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_origin() -> &'static str {
    "https://stories.onemark.co.in"
}

/// Viewports narrower than this get the stacked, mobile-only showcase.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// How long the device frame stays dimmed before a new preview is committed.
pub const SWITCH_DELAY_MS: u32 = 260;

pub const LOADER_TICK_MS: u32 = 55;

pub const CURSOR_LERP_FACTOR: f64 = 0.12;

pub const HERO_PARTICLE_COUNT: usize = 800;

pub const NAV_SCROLL_THRESHOLD_PX: f64 = 60.0;

pub const THEME_STORAGE_KEY: &str = "om-theme";

pub const WHATSAPP_NUMBER: &str = "919392704742";

pub const STUDIO_URL: &str = "https://onemark.digital";

pub const SITE_NAME: &str = "OneMark Stories";

/// Builds a wa.me deep link with a prefilled message.
pub fn whatsapp_link(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

/// Page title in the "<page> · <site>" form used across the site.
pub fn page_title(page: Option<&str>) -> String {
    match page {
        Some(page) => format!("{} · {}", page, SITE_NAME),
        None => format!("{} — Premium Digital Experiences", SITE_NAME),
    }
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_message() {
        let link = whatsapp_link("Hi OneMark! Let's talk?");
        assert_eq!(
            link,
            "https://wa.me/919392704742?text=Hi%20OneMark%21%20Let%27s%20talk%3F"
        );
    }

    #[test]
    fn page_title_formats() {
        assert_eq!(page_title(Some("Page Not Found")), "Page Not Found · OneMark Stories");
        assert!(page_title(None).starts_with("OneMark Stories"));
    }
}
