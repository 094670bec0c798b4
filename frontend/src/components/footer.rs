use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icons::{external_link, whatsapp_icon};
use crate::config;
use crate::data::socials::{IG_ACCOUNTS, MAIN_SOCIALS};
use crate::theme::use_theme;

struct NavLink {
    label: &'static str,
    href: &'static str,
    external: bool,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Our Work", href: "#work", external: false },
    NavLink { label: "About", href: "#about", external: false },
    NavLink { label: "Studio", href: config::STUDIO_URL, external: true },
];

pub fn copyright_year() -> i32 {
    Local::now().year()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let theme = use_theme().theme;
    let wa_link = config::whatsapp_link(
        "Hi OneMark Stories! 👋 I'd like to start a project. Here's what I have in mind:",
    );

    html! {
        <footer class="footer">
            <div class="footer__watermark" aria-hidden="true">{"stories"}</div>
            <div class="blob footer__blob"></div>

            <div class="footer__inner">
                <div class="footer__cta">
                    <div class="sec-label footer__cta-label">{"Ready to Begin?"}</div>
                    <h3 class="footer__cta-heading">
                        {"Let's make your moment"}<br />
                        <span>{"unforgettable."}</span>
                    </h3>
                    <p class="footer__cta-body">
                        {"Send us a WhatsApp: tell us the date, the occasion, and what you're imagining. We'll have a preview ready in days."}
                    </p>
                    <div class="footer__cta-actions">
                        <a href={wa_link} target="_blank" rel="noopener noreferrer" class="whatsapp-btn" data-hover="true">
                            { whatsapp_icon() }
                            {"Start a Project"}
                        </a>
                        <a href="https://www.instagram.com/stories.onemark" target="_blank" rel="noopener noreferrer"
                            class="mag-btn" data-hover="true">
                            {"@stories.onemark ↗"}
                        </a>
                    </div>
                </div>

                <div class="footer__grid">
                    <div class="footer__col footer__col--brand">
                        <img src={theme.logo_src()} alt={config::SITE_NAME} width="160" height="56" class="footer__logo" />
                        <p class="footer__brand-desc">
                            {"We craft bespoke digital experiences for weddings, events, and life's most special moments. Built with love, delivered in days."}
                        </p>
                        <div class="footer__address">
                            <span>{"📍"}</span>
                            <div>
                                <div class="footer__address-sublabel">{"Based in"}</div>
                                <div>{"Kakinada, Andhra Pradesh"}</div>
                                <div>{"India 🇮🇳"}</div>
                            </div>
                        </div>
                    </div>

                    <div class="footer__col footer__col--desktop-only">
                        <div class="footer__nav-heading">{"Navigate"}</div>
                        <div class="footer__nav-links">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <a key={link.href} href={link.href}
                                    target={link.external.then(|| "_blank")}
                                    rel={link.external.then(|| "noopener noreferrer")}
                                    class="footer__nav-link" data-hover="true">
                                    {link.label}
                                    { if link.external { external_link(9) } else { html! {} } }
                                </a>
                            }) }
                        </div>
                    </div>

                    <div class="footer__col">
                        <div class="footer__nav-heading">{"Follow Us"}</div>
                        { for IG_ACCOUNTS.iter().map(|account| html! {
                            <a key={account.handle} href={account.href} target="_blank" rel="noopener noreferrer"
                                class="footer__ig-card" data-hover="true">
                                <div class="footer__ig-avatar">{account.emoji}</div>
                                <div>
                                    <div class="footer__ig-name">{account.handle}</div>
                                    <div class="footer__ig-sub">{account.sub}</div>
                                </div>
                                <div class="footer__ig-cta">{"Follow →"}</div>
                            </a>
                        }) }
                    </div>
                </div>

                <div class="footer__divider"></div>

                <div class="footer__bottom">
                    <div class="footer__socials">
                        { for MAIN_SOCIALS.iter().map(|social| html! {
                            <a key={social.href} href={social.href} target="_blank" rel="noopener noreferrer"
                                title={format!("{} {}", social.label, social.handle)} class="social-pill" data-hover="true">
                                {social.icon}
                            </a>
                        }) }
                    </div>
                    <div class="footer__copyright">
                        <div>
                            {format!("© {} · ", copyright_year())}
                            <a href={config::STUDIO_URL} target="_blank" rel="noopener noreferrer" data-hover="true">
                                {"onemark.digital"}
                            </a>
                        </div>
                        <div class="footer__copyright-sub">{"stories.onemark.co.in · Kakinada, India"}</div>
                    </div>
                    <a href={config::STUDIO_URL} target="_blank" rel="noopener noreferrer"
                        class="mag-btn footer__studio-link" data-hover="true">
                        {"onemark.digital ↗"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .footer {
                    position: relative;
                    padding: 100px 60px 40px;
                    overflow: hidden;
                    border-top: 1px solid var(--border);
                }
                .footer__watermark {
                    position: absolute;
                    bottom: -40px;
                    left: 50%;
                    transform: translateX(-50%);
                    font-family: 'Syne', sans-serif;
                    font-weight: 800;
                    font-size: clamp(6rem, 20vw, 16rem);
                    color: var(--surface);
                    user-select: none;
                    pointer-events: none;
                }
                .footer__blob {
                    width: 500px;
                    height: 500px;
                    top: -200px;
                    right: -100px;
                    background: radial-gradient(circle, rgba(0, 191, 255, 0.07) 0%, transparent 70%);
                }
                .footer__inner {
                    position: relative;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .footer__cta {
                    text-align: center;
                    padding: 56px 32px;
                    border-radius: 24px;
                    border: 1px solid rgba(0, 191, 255, 0.2);
                    background: var(--surface);
                    margin-bottom: 72px;
                    animation: fadeUp 0.9s ease both;
                }
                .footer__cta-heading {
                    font-family: 'Unbounded', sans-serif;
                    font-size: clamp(1.6rem, 4vw, 2.6rem);
                    line-height: 1.15;
                    margin: 16px 0;
                }
                .footer__cta-heading span {
                    color: var(--cyan);
                }
                .footer__cta-body {
                    color: var(--muted);
                    max-width: 520px;
                    margin: 0 auto 28px;
                    line-height: 1.8;
                }
                .footer__cta-actions {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 14px;
                }
                .footer__grid {
                    display: grid;
                    grid-template-columns: 1.4fr 1fr 1fr;
                    gap: 48px;
                }
                .footer__logo {
                    object-fit: contain;
                    object-position: left;
                }
                .footer__brand-desc {
                    color: var(--muted);
                    font-size: 13px;
                    line-height: 1.8;
                    margin: 16px 0;
                }
                .footer__address {
                    display: flex;
                    gap: 10px;
                    font-size: 12px;
                }
                .footer__address-sublabel,
                .footer__ig-sub,
                .footer__copyright-sub {
                    color: var(--muted);
                    font-size: 11px;
                }
                .footer__nav-heading {
                    font-family: 'Space Mono', monospace;
                    font-size: 10px;
                    letter-spacing: 0.18em;
                    text-transform: uppercase;
                    color: var(--cyan);
                    margin-bottom: 18px;
                }
                .footer__nav-links {
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                }
                .footer__nav-link {
                    color: var(--text);
                    text-decoration: none;
                    font-size: 14px;
                    display: inline-flex;
                    align-items: center;
                    gap: 6px;
                }
                .footer__ig-card {
                    display: flex;
                    align-items: center;
                    gap: 12px;
                    padding: 12px 14px;
                    margin-bottom: 10px;
                    border-radius: 14px;
                    border: 1px solid var(--border);
                    color: var(--text);
                    text-decoration: none;
                    transition: border-color 0.3s;
                }
                .footer__ig-card:hover {
                    border-color: rgba(0, 191, 255, 0.35);
                }
                .footer__ig-avatar {
                    font-size: 20px;
                }
                .footer__ig-name {
                    font-size: 13px;
                    font-weight: 600;
                }
                .footer__ig-cta {
                    margin-left: auto;
                    font-size: 11px;
                    color: var(--cyan);
                }
                .footer__divider {
                    height: 1px;
                    background: var(--border);
                    margin: 56px 0 28px;
                }
                .footer__bottom {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 20px;
                    font-size: 12px;
                }
                .footer__copyright a {
                    color: var(--cyan);
                    text-decoration: none;
                }
                .social-pill {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 36px;
                    height: 36px;
                    border-radius: 50%;
                    border: 1px solid var(--border);
                    color: var(--text);
                    text-decoration: none;
                    font-family: 'Space Mono', monospace;
                    font-size: 10px;
                }
                @media (max-width: 768px) {
                    .footer {
                        padding: 80px 22px 32px;
                        text-align: center;
                    }
                    .footer__grid {
                        grid-template-columns: 1fr;
                    }
                    .footer__col--desktop-only {
                        display: none;
                    }
                    .footer__address {
                        justify-content: center;
                    }
                    .footer__bottom {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_year_is_current() {
        assert!(copyright_year() >= 2024);
    }
}
