use yew::prelude::*;

use crate::config;

#[function_component(Maintenance)]
pub fn maintenance() -> Html {
    use_effect_with_deps(
        |_| {
            config::set_document_title(&config::page_title(Some("Coming Soon")));
            || ()
        },
        (),
    );

    let wa_link =
        config::whatsapp_link("Hi OneMark! I'm interested in a creative project when you launch.");

    html! {
        <div class="maintenance">
            <div class="maintenance__glow"></div>
            <div class="maintenance__content">
                <h1>
                    {"We're Crafting"}<br />
                    {"Something "}<span>{"Unforgettable."}</span>
                </h1>
                <p>
                    {"The creative lab of OneMark is currently under construction. We're building a new digital experience for your special moments."}
                </p>
                <a href={wa_link} target="_blank" rel="noopener noreferrer" class="whatsapp-btn">
                    {"Message us on WhatsApp"}
                </a>
            </div>
            <div class="maintenance__footer">
                {"Powered by "}<strong>{"OneMark Digital"}</strong>
            </div>
            <style>
                {r#"
                .maintenance {
                    min-height: 100vh;
                    background: #0a0a0a;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                    text-align: center;
                }
                .maintenance__glow {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 600px;
                    height: 600px;
                    background: rgba(6, 182, 212, 0.1);
                    border-radius: 50%;
                    filter: blur(120px);
                    pointer-events: none;
                }
                .maintenance__content {
                    position: relative;
                    z-index: 1;
                    padding: 0 24px;
                    animation: fadeUp .8s ease both;
                }
                .maintenance h1 {
                    font-size: clamp(3rem, 8vw, 4.5rem);
                    font-weight: 900;
                    letter-spacing: -0.04em;
                    margin-bottom: 16px;
                }
                .maintenance h1 span {
                    color: #22d3ee;
                }
                .maintenance p {
                    color: #a3a3a3;
                    max-width: 28rem;
                    margin: 0 auto 40px;
                    font-size: 1.1rem;
                    line-height: 1.7;
                }
                .maintenance__footer {
                    position: absolute;
                    bottom: 40px;
                    font-size: 12px;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #525252;
                }
                .maintenance__footer strong {
                    color: #d4d4d4;
                }
                "#}
            </style>
        </div>
    }
}
