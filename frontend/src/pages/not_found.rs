use yew::prelude::*;

use crate::config;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_effect_with_deps(
        |_| {
            config::set_document_title(&config::page_title(Some("Page Not Found")));
            || ()
        },
        (),
    );

    html! {
        <div class="not-found grid-bg">
            <div class="not-found__ghost" aria-hidden="true">{"404"}</div>
            <div class="not-found__content">
                <img class="not-found__logo" src="/logo-om.png" alt="OneMark" width="60" height="60" />
                <div class="not-found__emoji">{"🔍"}</div>
                <h1>{"Page not found."}</h1>
                <p>{"The page you're looking for doesn't exist or may have moved."}</p>
                <div class="not-found__actions">
                    <a href="/" class="not-found__home">{"← Back Home"}</a>
                    <a href={config::STUDIO_URL} target="_blank" rel="noopener noreferrer" class="mag-btn">
                        {"onemark.digital"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 40px 24px;
                    position: relative;
                    overflow: hidden;
                    background-image:
                        linear-gradient(rgba(255, 255, 255, .018) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255, 255, 255, .018) 1px, transparent 1px);
                    background-size: 64px 64px;
                }
                .not-found__ghost {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    font-family: 'Syne', sans-serif;
                    font-weight: 800;
                    font-size: clamp(10rem, 30vw, 28rem);
                    color: rgba(0, 191, 255, .03);
                    user-select: none;
                    line-height: 1;
                }
                .not-found__content {
                    position: relative;
                    z-index: 1;
                    animation: fadeUp .8s ease both;
                }
                .not-found__logo {
                    display: block;
                    margin: 0 auto 24px;
                    object-fit: contain;
                    animation: float 3s ease-in-out infinite;
                    filter: drop-shadow(0 0 16px rgba(0, 191, 255, .35));
                }
                .not-found__emoji {
                    font-size: 5rem;
                    margin-bottom: 12px;
                }
                .not-found h1 {
                    font-family: 'Syne', sans-serif;
                    font-weight: 800;
                    font-size: clamp(2rem, 6vw, 4rem);
                    line-height: 1.05;
                    letter-spacing: -.025em;
                    margin-bottom: 14px;
                }
                .not-found p {
                    font-size: 14px;
                    color: var(--muted);
                    line-height: 1.8;
                    max-width: 380px;
                    margin: 0 auto 32px;
                }
                .not-found__actions {
                    display: flex;
                    gap: 12px;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .not-found__home {
                    padding: 12px 28px;
                    border-radius: 100px;
                    background: linear-gradient(135deg, #00BFFF, rgba(0, 100, 255, .85));
                    color: #000;
                    text-decoration: none;
                    font-family: 'Space Mono', monospace;
                    font-size: 11px;
                    font-weight: 700;
                }
                "#}
            </style>
        </div>
    }
}
