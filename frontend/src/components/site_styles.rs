use yew::prelude::*;

/// Shared classes and keyframes used by more than one section.
#[function_component(SiteStyles)]
pub fn site_styles() -> Html {
    html! {
        <style>
            {r#"
            @import url('https://fonts.googleapis.com/css2?family=Syne:wght@700;800&family=Unbounded:wght@700;800&family=Plus+Jakarta+Sans:wght@400;500;600&family=Space+Mono&family=DM+Mono&display=swap');

            *, *::before, *::after {
                box-sizing: border-box;
            }
            html {
                scroll-behavior: smooth;
            }
            @media (hover: hover) {
                body {
                    cursor: none;
                }
                a, button, [data-hover] {
                    cursor: none;
                }
            }
            .sec-label {
                font-family: 'Space Mono', monospace;
                font-size: 10px;
                letter-spacing: 0.22em;
                text-transform: uppercase;
                color: var(--cyan);
            }
            .blob {
                position: absolute;
                border-radius: 50%;
                pointer-events: none;
                filter: blur(20px);
                z-index: 0;
            }
            .glass {
                background: var(--surface);
                border: 1px solid var(--border);
                backdrop-filter: blur(12px);
            }
            .mag-btn {
                display: inline-flex;
                align-items: center;
                gap: 8px;
                padding: 13px 26px;
                border-radius: 100px;
                border: 1px solid rgba(0, 191, 255, 0.3);
                color: var(--cyan);
                text-decoration: none;
                font-family: 'Space Mono', monospace;
                font-size: 11px;
                letter-spacing: 0.05em;
                transition: background 0.3s, border-color 0.3s, transform 0.3s;
            }
            .mag-btn:hover {
                background: rgba(0, 191, 255, 0.08);
                border-color: var(--cyan);
                transform: translateY(-2px);
            }
            .whatsapp-btn {
                display: inline-flex;
                align-items: center;
                gap: 10px;
                padding: 13px 26px;
                border-radius: 100px;
                background: #25D366;
                color: #fff;
                text-decoration: none;
                font-weight: 600;
                font-size: 13px;
                box-shadow: 0 10px 30px rgba(37, 211, 102, 0.25);
                transition: transform 0.3s, box-shadow 0.3s;
            }
            .whatsapp-btn:hover {
                transform: translateY(-2px);
                box-shadow: 0 14px 40px rgba(37, 211, 102, 0.35);
            }
            @keyframes fadeUp {
                from { opacity: 0; transform: translateY(24px); }
                to { opacity: 1; transform: translateY(0); }
            }
            @keyframes fadeIn {
                from { opacity: 0; }
                to { opacity: 1; }
            }
            @keyframes float {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-12px); }
            }
            "#}
        </style>
    }
}
