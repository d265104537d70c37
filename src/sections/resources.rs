use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use crate::config;
use crate::content::{Resource, SiteContent};
use crate::utils::dom;

fn learn_more(resource: &Resource) -> Callback<MouseEvent> {
    let link = resource.link.clone();
    let external = resource.is_external();
    Callback::from(move |e: MouseEvent| {
        if !external {
            return;
        }
        e.prevent_default();
        if let Err(e) = dom::open_in_new_tab(&link) {
            warn!("Could not open {}: {}", link, e);
        }
    })
}

#[function_component(ResourcesSection)]
pub fn resources_section() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };

    let download_guide = Callback::from(|_: MouseEvent| {
        let url = config::diet_guide_url();
        info!("Downloading diet guide from {}", url);
        if let Err(e) = dom::trigger_download(&url, config::DIET_GUIDE_FILENAME) {
            warn!("Diet guide download failed: {}", e);
        }
    });

    html! {
        <section class="resources">
            <div class="container">
                <div class="section-header fade-in-up">
                    <div class="section-pill gradient-success">
                        <span>{"🍽️"}</span>
                        <span>{"Get Help & Resources"}</span>
                    </div>
                    <h2 class="section-title">
                        {"Free "}<span class="text-gradient-primary">{"Resources"}</span>{" & Support"}
                    </h2>
                    <p class="section-lead">
                        {"Access government programs, local health centers, and expert guidance for anaemia prevention and treatment"}
                    </p>
                </div>

                <div class="resource-grid fade-in-up" style="animation-delay: 0.2s;">
                    { for content.resources.iter().map(|resource| html! {
                        <div class="glass-card resource-card">
                            <div class="resource-head">
                                <div class={classes!("resource-icon", resource.gradient.clone())}>{&resource.icon}</div>
                                <span class="resource-kind">{&resource.kind}</span>
                            </div>
                            <h3>{&resource.title}</h3>
                            <p class="muted">{&resource.description}</p>
                            <a
                                href={resource.link.clone()}
                                class="resource-button gradient-primary"
                                onclick={learn_more(resource)}
                            >
                                {"↗ Learn More"}
                            </a>
                        </div>
                    }) }
                </div>

                <div class="guide-wrap fade-in-up" style="animation-delay: 0.4s;">
                    <div class="glass-card guide-card">
                        <div class="guide-icon gradient-secondary">{"🍽️"}</div>
                        <h3>{"Iron-Rich Diet Guide"}</h3>
                        <p class="muted guide-lead">
                            {"Download our comprehensive guide with meal plans, recipes, and tips to boost your iron levels naturally"}
                        </p>
                        <div class="guide-highlights">
                            { for content.guide_highlights.iter().map(|highlight| html! {
                                <div class="guide-highlight">
                                    <div class="guide-highlight-title">{&highlight.title}</div>
                                    <div class="muted">{&highlight.subtitle}</div>
                                </div>
                            }) }
                        </div>
                        <button class="guide-button gradient-secondary" onclick={download_guide}>
                            {"⬇ Download Free PDF Guide"}
                        </button>
                    </div>
                </div>

                <div class="helpline fade-in-up" style="animation-delay: 0.6s;">
                    <div class="glass-card helpline-card">
                        <span class="helpline-icon">{"📞"}</span>
                        <div>
                            <div class="helpline-title">{"Need Immediate Help?"}</div>
                            <div class="muted">
                                {"Call National Health Helpline: "}
                                <a class="helpline-number" href={format!("tel:{}", config::HEALTH_HELPLINE)}>
                                    {config::HEALTH_HELPLINE}
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .resources {
                    padding: 5rem 0;
                    background: linear-gradient(135deg, var(--background), var(--primary-faint), var(--background));
                }
                .resource-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .resource-card {
                    padding: 1.5rem;
                    transition: transform 0.3s ease;
                }
                .resource-card:hover {
                    transform: translateY(-4px);
                }
                .resource-head {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                }
                .resource-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                }
                .resource-kind {
                    font-size: 0.75rem;
                    background: var(--muted);
                    padding: 0.25rem 0.5rem;
                    border-radius: 9999px;
                }
                .resource-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }
                .resource-card p {
                    margin-bottom: 1rem;
                    line-height: 1.6;
                }
                .resource-button,
                .guide-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    border: none;
                    border-radius: 0.75rem;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    text-decoration: none;
                }
                .resource-button {
                    width: 100%;
                    padding: 0.75rem;
                }
                .guide-wrap {
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .guide-card {
                    padding: 2rem;
                    text-align: center;
                }
                .guide-icon {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin: 0 auto 1.5rem;
                    font-size: 2rem;
                }
                .guide-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .guide-lead {
                    font-size: 1.125rem;
                    margin-bottom: 1.5rem;
                }
                .guide-highlights {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                    font-size: 0.875rem;
                }
                .guide-highlight {
                    background: var(--muted);
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                }
                .guide-highlight-title {
                    font-weight: 600;
                }
                .guide-button {
                    padding: 0.75rem 2rem;
                    font-size: 1.125rem;
                    border-radius: 1rem;
                }
                .helpline {
                    text-align: center;
                    margin-top: 3rem;
                }
                .helpline-card {
                    display: inline-flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    text-align: left;
                    border: 2px solid var(--warning-soft);
                }
                .helpline-icon {
                    font-size: 2rem;
                }
                .helpline-title {
                    font-weight: 600;
                }
                .helpline-number {
                    font-weight: 700;
                    color: var(--warning);
                }
                "#}
            </style>
        </section>
    }
}
