use std::rc::Rc;

use yew::prelude::*;

use crate::content::{ComparisonColumn, SiteContent};

fn comparison_card(column: &ComparisonColumn) -> Html {
    html! {
        <div class={classes!("glass-card", "compare-card", format!("compare-{}", column.tone))}>
            <div class="compare-mood">{&column.mood}</div>
            <h3>{&column.title}</h3>
            <ul class="compare-points">
                { for column.points.iter().map(|point| html! {
                    <li>
                        <span class="compare-icon">{&point.icon}</span>
                        <span>{&point.text}</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(BehaviorChangeSection)]
pub fn behavior_change_section() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };

    html! {
        <section class="behavior">
            <div class="container">
                <div class="section-header fade-in-up">
                    <div class="section-pill gradient-accent">
                        <span>{"📈"}</span>
                        <span>{"Choose Your Path"}</span>
                    </div>
                    <h2 class="section-title">
                        {"Your "}<span class="text-gradient-secondary">{"Health Journey"}</span>
                    </h2>
                    <p class="section-lead">{"See the difference between taking action and ignoring the signs"}</p>
                </div>

                <div class="compare-grid fade-in-up" style="animation-delay: 0.2s;">
                    { for content.comparison.iter().map(comparison_card) }
                </div>

                <div class="section-header fade-in-up" style="animation-delay: 0.4s;">
                    <h3 class="facts-title">
                        {"Amazing "}<span class="text-gradient-accent">{"Facts"}</span>
                    </h3>
                    <p class="muted">{"Hover over the cards to reveal surprising facts!"}</p>
                </div>

                <div class="facts-grid fade-in-up" style="animation-delay: 0.6s;">
                    { for content.fact_cards.iter().map(|card| html! {
                        <div class="flip-card">
                            <div class="flip-card-inner">
                                <div class={classes!("flip-card-front", card.gradient.clone())}>
                                    <div class="flip-card-icon pulse">{&card.icon}</div>
                                    <h4>{&card.front}</h4>
                                </div>
                                <div class="flip-card-back">
                                    <p>{&card.back}</p>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .behavior {
                    padding: 5rem 0;
                    background: linear-gradient(135deg, var(--muted), var(--background), var(--muted));
                }
                .compare-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                    margin-bottom: 5rem;
                }
                .compare-card {
                    padding: 2rem;
                    text-align: center;
                }
                .compare-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .compare-warning {
                    border: 2px solid var(--warning-soft);
                    background: linear-gradient(135deg, #f3f4f6, #e5e7eb);
                    color: #4b5563;
                }
                .compare-warning .compare-mood {
                    filter: grayscale(1);
                }
                .compare-success {
                    border: 2px solid var(--success-soft);
                }
                .compare-success h3 {
                    color: var(--success);
                }
                .compare-mood {
                    font-size: 4rem;
                    margin-bottom: 1.5rem;
                }
                .compare-points {
                    list-style: none;
                    padding: 0;
                    text-align: left;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .compare-points li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .facts-title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .facts-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .flip-card {
                    perspective: 1000px;
                    height: 12rem;
                }
                .flip-card-inner {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    transition: transform 0.7s;
                    transform-style: preserve-3d;
                }
                .flip-card:hover .flip-card-inner {
                    transform: rotateY(180deg);
                }
                .flip-card-front,
                .flip-card-back {
                    position: absolute;
                    inset: 0;
                    border-radius: 1rem;
                    backface-visibility: hidden;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    cursor: pointer;
                }
                .flip-card-front {
                    color: #fff;
                }
                .flip-card-front h4 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-align: center;
                }
                .flip-card-icon {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .flip-card-back {
                    background: #fff;
                    border: 2px solid var(--primary-soft);
                    transform: rotateY(180deg);
                    text-align: center;
                    font-size: 1.125rem;
                    font-weight: 500;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
