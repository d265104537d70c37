use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use crate::config;
use crate::content::SiteContent;
use crate::utils::dom;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };

    let scroll_to_scan = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        info!("Hero CTA clicked, scrolling to scan tool");
        if let Err(e) = dom::scroll_to_anchor(config::SCAN_ANCHOR_ID) {
            warn!("Could not scroll to scan section: {}", e);
        }
    });

    html! {
        <section class="hero">
            <div class="hero-background">
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-float" style="top: 5rem; left: 2.5rem;">{"❤️"}</div>
            <div class="hero-float" style="top: 8rem; right: 5rem; animation-delay: 1s;">{"✨"}</div>
            <div class="hero-float" style="bottom: 8rem; left: 5rem; animation-delay: 2s;">{"📷"}</div>

            <div class="hero-content">
                <div class="hero-badge fade-in-up">
                    <span>{"✨"}</span>
                    <span>{"AI-Powered Health Screening"}</span>
                </div>

                <h1 class="hero-title fade-in-up" style="animation-delay: 0.2s;">
                    {"Check Your "}
                    <span class="hero-highlight">{"Anaemia Risk"}</span>
                    {" in Seconds"}
                </h1>

                <p class="hero-subtitle fade-in-up" style="animation-delay: 0.4s;">
                    {"AI-powered screening + teen-friendly awareness + behaviour change nudges"}
                </p>

                <div class="fade-in-up" style="animation-delay: 0.6s;">
                    <button class="hero-cta gradient-primary pulse-glow" onclick={scroll_to_scan}>
                        <span>{"📷"}</span>
                        {"Scan Your Eye Now"}
                        <span class="hero-cta-arrow">{"→"}</span>
                    </button>
                </div>

                <div class="hero-stats fade-in-up" style="animation-delay: 0.8s;">
                    { for content.hero_stats.iter().map(|stat| html! {
                        <div class="glass-card hero-stat">
                            <div class={classes!("hero-stat-value", format!("tone-{}", stat.tone))}>{&stat.value}</div>
                            <div class="hero-stat-label">{&stat.label}</div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="hero-bottom-fade"></div>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    position: relative;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    background: var(--gradient-hero);
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-image:
                        radial-gradient(circle at 20% 30%, rgba(255, 255, 255, 0.18), transparent 40%),
                        radial-gradient(circle at 80% 70%, rgba(127, 243, 255, 0.2), transparent 45%);
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.2);
                }
                .hero-float {
                    position: absolute;
                    padding: 1rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                    animation: float 6s ease-in-out infinite;
                    z-index: 1;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                    color: #fff;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    margin-bottom: 2rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .hero-title {
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                    text-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
                }
                .hero-highlight {
                    background: linear-gradient(to right, #fff, var(--accent-glow));
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-subtitle {
                    font-size: clamp(1.25rem, 3vw, 1.875rem);
                    margin: 0 auto 2rem;
                    max-width: 48rem;
                    color: rgba(255, 255, 255, 0.9);
                }
                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1.5rem 2rem;
                    border: none;
                    border-radius: 1rem;
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    transition: transform 0.3s ease;
                }
                .hero-cta:hover {
                    transform: translateY(-4px);
                }
                .hero-cta:hover .hero-cta-arrow {
                    transform: translateX(4px);
                }
                .hero-cta-arrow {
                    transition: transform 0.3s ease;
                }
                .hero-stats {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                    margin-top: 3rem;
                }
                .hero-stat {
                    padding: 1rem;
                    min-width: 8rem;
                }
                .hero-stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .hero-stat-label {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .hero-bottom-fade {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    height: 8rem;
                    background: linear-gradient(to top, rgba(255, 255, 255, 0.8), transparent);
                }
                "#}
            </style>
        </section>
    }
}
