use yew::prelude::*;

use crate::data::projects::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
    pub is_active: bool,
    pub on_select: Callback<usize>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let onclick = {
        let on_select = props.on_select.clone();
        let id = project.id;
        Callback::from(move |_: MouseEvent| on_select.emit(id))
    };

    let body_style = format!("max-height: {}px;", if props.is_active { 1400 } else { 0 });

    html! {
        <div class="project-card">
            <button
                onclick={onclick}
                class={classes!("project-card-header", props.is_active.then(|| "active"))}
                data-hover="true"
                aria-expanded={props.is_active.to_string()}
            >
                <div class="project-card__meta">
                    <span class="project-card__tag" style={format!("color: {};", project.color)}>
                        {project.tag}
                    </span>
                    <span class="project-card__num">{project.num}</span>
                </div>
                <div class="project-card__title">{project.title}</div>
                <div class="project-card__desc">{project.desc}</div>
            </button>
            <div class="project-card-body" style={body_style}>
                <div class="project-card-body-inner">
                    <p class="project-card-about">{project.about}</p>
                    <div class="project-card-importance">
                        <div class="project-card-importance__label">{"Why it matters"}</div>
                        <p class="project-card-importance__text">{project.importance}</p>
                    </div>
                    <div class="project-card-features">
                        { for project.features.iter().map(|f| html! {
                            <span key={*f} class="feature-pill">{format!("✦ {}", f)}</span>
                        }) }
                    </div>
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

pub const PROJECT_CARD_CSS: &str = r#"
    .project-card-header {
        width: 100%;
        text-align: left;
        padding: 14px 18px;
        border-radius: 12px;
        border: 1px solid transparent;
        background: transparent;
        color: inherit;
        cursor: pointer;
        transition: border-color .3s, background .3s, transform .3s, border-radius .3s;
    }
    .project-card-header:hover {
        border-color: rgba(0, 191, 255, 0.22);
        background: rgba(0, 191, 255, 0.03);
        transform: translateX(4px);
    }
    .project-card-header.active {
        border-color: rgba(0, 191, 255, 0.5);
        border-radius: 12px 12px 0 0;
        background: rgba(0, 191, 255, 0.06);
        transform: translateX(4px);
    }
    .project-card__meta {
        display: flex;
        justify-content: space-between;
        margin-bottom: 6px;
        font-family: 'Space Mono', monospace;
        font-size: 9px;
    }
    .project-card__tag {
        letter-spacing: .18em;
        text-transform: uppercase;
    }
    .project-card__num {
        color: var(--muted);
    }
    .project-card__title {
        font-family: 'Syne', sans-serif;
        font-size: 13px;
        font-weight: 700;
        line-height: 1.3;
        margin-bottom: 3px;
        color: var(--text);
    }
    .project-card__desc {
        font-size: 11px;
        color: var(--muted);
    }
    .project-card-body {
        overflow: hidden;
        transition: max-height 0.5s cubic-bezier(.16, 1, .3, 1);
    }
    .project-card-body-inner {
        background: rgba(0, 191, 255, 0.04);
        border: 1px solid rgba(0, 191, 255, 0.5);
        border-top: none;
        border-radius: 0 0 12px 12px;
        padding: 14px 18px 16px;
        transform: translateX(4px);
    }
    .project-card-about {
        font-size: 12px;
        line-height: 1.75;
        opacity: 0.75;
        margin-bottom: 10px;
    }
    .project-card-importance {
        border-left: 2px solid var(--cyan);
        padding-left: 10px;
        margin-bottom: 12px;
    }
    .project-card-importance__label {
        font-family: 'Space Mono', monospace;
        font-size: 8px;
        letter-spacing: .15em;
        color: var(--cyan);
        margin-bottom: 5px;
        text-transform: uppercase;
    }
    .project-card-importance__text {
        font-size: 11px;
        line-height: 1.7;
        opacity: 0.65;
    }
    .project-card-features {
        display: flex;
        flex-wrap: wrap;
        gap: 6px;
    }
    .feature-pill {
        display: inline-flex;
        align-items: center;
        padding: 5px 10px;
        border-radius: 100px;
        background: rgba(0, 191, 255, 0.08);
        border: 1px solid rgba(0, 191, 255, 0.18);
        font-size: 10px;
        color: var(--cyan);
        font-family: 'Space Mono', monospace;
        letter-spacing: .04em;
        white-space: nowrap;
    }
"#;
