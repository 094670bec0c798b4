use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

struct Service {
    emoji: &'static str,
    title: &'static str,
    desc: &'static str,
    border: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        emoji: "💍",
        title: "Weddings",
        desc: "Countdown pages, ceremony sites, memory keepsakes",
        border: "rgba(0,245,255,0.15)",
    },
    Service {
        emoji: "🎉",
        title: "Events",
        desc: "Live counters, RSVP portals, event dashboards",
        border: "rgba(255,77,109,0.12)",
    },
    Service {
        emoji: "🖥️",
        title: "Portfolios",
        desc: "Immersive, animated personal showcases",
        border: "rgba(255,181,71,0.12)",
    },
    Service {
        emoji: "🎁",
        title: "Surprises",
        desc: "Birthday reveals, anniversary pages, secret sites",
        border: "rgba(0,245,255,0.1)",
    },
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="blob about__blob"></div>

            <div class="about__grid">
                <div>
                    <div class="sec-label" style="margin-bottom: 20px;">{"Who We Are"}</div>
                    <h2 class="about__heading">
                        {"We don't build websites."}
                        <br />
                        <span>{"We build feelings."}</span>
                    </h2>
                    <p class="about__copy">
                        {"OneMark Creative is the bespoke arm of "}
                        <strong>{"Onemark Digital"}</strong>
                        {", dedicated to crafting one-of-a-kind digital experiences for life's most memorable moments."}
                    </p>
                    <p class="about__copy" style="margin-bottom: 32px;">
                        {"From intimate wedding countdown pages to vibrant event dashboards, every pixel is placed with intention. We build for the heart, not just the screen."}
                    </p>
                    <a href={config::STUDIO_URL} target="_blank" rel="noopener noreferrer" class="mag-btn" data-hover="true">
                        {"Learn More About Us →"}
                    </a>
                </div>

                <div class="about__services">
                    { for SERVICES.iter().map(|service| html! {
                        <div key={service.title} class="glass service-card" data-hover="true"
                            style={format!("border-color: {};", service.border)}>
                            <div class="service-card__emoji">{service.emoji}</div>
                            <div class="service-card__title">{service.title}</div>
                            <div class="service-card__desc">{service.desc}</div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="faq-section">
                <div class="sec-label" style="margin-bottom: 20px;">{"Questions"}</div>

                <FaqItem question="How long does it take to build a site?">
                    <p>{"Most pages are previewed within a few days of our first chat. Send us the date and the occasion, and we'll plan backwards from there so everything is live well before the day."}</p>
                </FaqItem>

                <FaqItem question="Will it work on my guests' phones?">
                    <p>{"Every site is built mobile-first. Most guests open the link straight from WhatsApp or Instagram, so that's the experience we design for before anything else."}</p>
                </FaqItem>

                <FaqItem question="Can I change details after it goes live?">
                    <p>{"Yes. Venue changes, new photos, an updated schedule: message us and we'll push the update. The link your guests already have keeps working."}</p>
                </FaqItem>

                <FaqItem question="What do you need from me to get started?">
                    <ul>
                        <li>{"The occasion and its date"}</li>
                        <li>{"A few photos you love"}</li>
                        <li>{"Any wording, schedule or venue details you want to share"}</li>
                    </ul>
                </FaqItem>
            </div>

            <style>
                {r#"
                .about {
                    position: relative;
                    padding: 120px 60px;
                    overflow: hidden;
                }
                .about__blob {
                    width: 550px;
                    height: 550px;
                    top: 0;
                    left: -100px;
                    background: radial-gradient(circle, rgba(255, 77, 109, 0.07) 0%, transparent 70%);
                }
                .about__grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 64px;
                    align-items: center;
                }
                .about__heading {
                    font-family: 'Unbounded', sans-serif;
                    font-weight: 700;
                    font-size: clamp(1.8rem, 4vw, 2.8rem);
                    line-height: 1.1;
                    margin-bottom: 24px;
                }
                .about__heading span {
                    color: var(--cyan);
                }
                .about__copy {
                    color: var(--muted);
                    font-size: 15px;
                    line-height: 1.85;
                    margin-bottom: 16px;
                }
                .about__copy strong {
                    color: var(--text);
                }
                .about__services {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 14px;
                }
                .service-card {
                    border-radius: 18px;
                    padding: 22px;
                    transition: transform 0.35s, box-shadow 0.35s, border-color 0.35s;
                }
                .service-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.4);
                }
                .service-card__emoji {
                    font-size: 26px;
                    margin-bottom: 12px;
                }
                .service-card__title {
                    font-family: 'Unbounded', sans-serif;
                    font-size: 12px;
                    font-weight: 700;
                    margin-bottom: 8px;
                }
                .service-card__desc {
                    font-size: 11px;
                    color: var(--muted);
                    line-height: 1.65;
                }
                .faq-section {
                    max-width: 800px;
                    margin: 96px auto 0;
                }
                .faq-item {
                    margin-bottom: 1rem;
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    overflow: hidden;
                    background: var(--surface);
                    transition: border-color 0.3s ease;
                }
                .faq-item:hover {
                    border-color: rgba(0, 191, 255, 0.3);
                }
                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: var(--text);
                    font-size: 1rem;
                    text-align: left;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    cursor: pointer;
                }
                .toggle-icon {
                    font-size: 1.4rem;
                    color: var(--cyan);
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    color: var(--muted);
                    line-height: 1.7;
                    transition: max-height 0.4s ease, padding 0.4s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.25rem;
                }
                @media (max-width: 900px) {
                    .about {
                        padding: 90px 22px;
                    }
                    .about__grid {
                        grid-template-columns: 1fr;
                        gap: 40px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
