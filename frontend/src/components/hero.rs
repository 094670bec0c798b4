use yew::prelude::*;

use crate::components::hero_canvas::HeroCanvas;
use crate::components::icons::{arrow_up_right, whatsapp_icon};
use crate::config;
use crate::theme::use_theme;

#[function_component(Hero)]
pub fn hero() -> Html {
    let theme = use_theme().theme;
    let wa_link = config::whatsapp_link(
        "Hi OneMark Stories! 👋 I'd love to get a custom digital experience made. Can we talk?",
    );

    html! {
        <section id="hero" class="hero grid-bg">
            <HeroCanvas theme={theme} />
            <div class="blob hero__blob-tl"></div>
            <div class="blob hero__blob-br"></div>

            <div class="hero__content">
                <div class="sec-label hero__label">{"Moments Told By OneMark"}</div>

                <h1 class="hero__headline">
                    <div class="hero__line"><span class="hero__word" style="animation-delay: 0.15s;">{"Your Story"}</span></div>
                    <div class="hero__line"><span class="hero__word" style="animation-delay: 0.29s;">{"Deserves"}</span></div>
                    <div class="hero__line">
                        <span class="hero__word hero__word--gradient" style="animation-delay: 0.43s;">{"a Page."}</span>
                    </div>
                </h1>

                <p class="hero__sub">
                    {"Getting married? Planning an event? We build a beautiful custom website just for you. Your guests open one link and feel the magic before the day even arrives."}
                </p>

                <div class="hero__ctas">
                    <a href={wa_link} target="_blank" rel="noopener noreferrer" class="whatsapp-btn" data-hover="true">
                        { whatsapp_icon() }
                        {"Start Your Story"}
                    </a>
                    <a href="#work" class="mag-btn" data-hover="true">
                        {"See Our Work"}
                        { arrow_up_right() }
                    </a>
                </div>
            </div>

            <div class="hero__scroll">
                <span class="hero__scroll-label">{"SCROLL"}</span>
                <div class="hero__scroll-line"></div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 0 60px;
                    overflow: hidden;
                }
                .grid-bg {
                    background-image:
                        linear-gradient(var(--surface) 1px, transparent 1px),
                        linear-gradient(90deg, var(--surface) 1px, transparent 1px);
                    background-size: 64px 64px;
                }
                .hero__canvas {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    z-index: 0;
                }
                .hero__blob-tl {
                    width: 500px;
                    height: 500px;
                    top: -120px;
                    left: -160px;
                    background: radial-gradient(circle, rgba(0, 191, 255, 0.1) 0%, transparent 70%);
                }
                .hero__blob-br {
                    width: 460px;
                    height: 460px;
                    bottom: -140px;
                    right: -120px;
                    background: radial-gradient(circle, rgba(255, 77, 109, 0.08) 0%, transparent 70%);
                }
                .hero__content {
                    position: relative;
                    z-index: 1;
                    max-width: 820px;
                }
                .hero__label {
                    animation: fadeUp 0.6s ease-out 0.6s both;
                }
                .hero__headline {
                    font-family: 'Unbounded', sans-serif;
                    font-weight: 800;
                    font-size: clamp(2.6rem, 7vw, 5.6rem);
                    line-height: 1.02;
                    letter-spacing: -0.03em;
                    margin: 20px 0 28px;
                }
                .hero__line {
                    overflow: hidden;
                }
                .hero__word {
                    display: inline-block;
                    animation: wordRise 1.05s cubic-bezier(0.16, 1, 0.3, 1) both;
                }
                .hero__word--gradient {
                    background: linear-gradient(90deg, var(--cyan), var(--coral));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero__sub {
                    color: var(--muted);
                    font-size: 1.05rem;
                    line-height: 1.85;
                    max-width: 560px;
                    margin-bottom: 36px;
                    animation: fadeUp 0.65s ease-out 0.9s both;
                }
                .hero__ctas {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 14px;
                    animation: fadeUp 0.5s ease-out 1.1s both;
                }
                .hero__scroll {
                    position: absolute;
                    bottom: 36px;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 10px;
                    z-index: 1;
                    animation: fadeIn 0.4s ease 1.4s both, scrollBob 1.1s ease-in-out 1.8s infinite alternate;
                }
                .hero__scroll-label {
                    font-family: 'Space Mono', monospace;
                    font-size: 9px;
                    letter-spacing: 0.3em;
                    color: var(--muted);
                }
                .hero__scroll-line {
                    width: 1px;
                    height: 40px;
                    background: linear-gradient(to bottom, var(--cyan), transparent);
                }
                @keyframes wordRise {
                    from { transform: translateY(110%); }
                    to { transform: translateY(0); }
                }
                @keyframes scrollBob {
                    from { transform: translate(-50%, 0); opacity: 1; }
                    to { transform: translate(-50%, 8px); opacity: 0.4; }
                }
                @media (max-width: 768px) {
                    .hero {
                        padding: 0 22px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
