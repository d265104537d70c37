use std::rc::Rc;

use yew::prelude::*;

use crate::content::{SiteContent, TeamMember};

fn member_card(member: &TeamMember) -> Html {
    html! {
        <div class="glass-card member-card">
            <div class="member-photo">
                {
                    match &member.image {
                        Some(src) => html! { <img src={src.clone()} alt={member.name.clone()} /> },
                        None => html! { <div class="member-initials gradient-primary">{member.initials()}</div> },
                    }
                }
                <div class="member-photo-shade"></div>
                <div class="member-social">
                    <a href={member.social.github.clone()} target="_blank" rel="noopener noreferrer" title="GitHub">{"GH"}</a>
                    <a href={member.social.linkedin.clone()} target="_blank" rel="noopener noreferrer" title="LinkedIn">{"in"}</a>
                    <a href={format!("mailto:{}", member.social.email)} title="Email">{"✉"}</a>
                </div>
            </div>
            <div class="member-info">
                <h3>{&member.name}</h3>
                <div class="member-role">{&member.role}</div>
                <p class="muted small">{&member.expertise}</p>
            </div>
        </div>
    }
}

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };

    html! {
        <section class="team">
            <div class="container">
                <div class="section-header fade-in-up">
                    <div class="section-pill gradient-accent">
                        <span>{"👥"}</span>
                        <span>{"Meet Our Team"}</span>
                    </div>
                    <h2 class="section-title">
                        {"Built by "}<span class="text-gradient-accent">{"Young Innovators"}</span>
                    </h2>
                    <p class="section-lead">
                        {"A passionate team of students combining technology and healthcare to make anaemia screening accessible to every teenager"}
                    </p>
                </div>

                <div class="team-stats fade-in-up" style="animation-delay: 0.2s;">
                    { for content.team_stats.iter().map(|stat| html! {
                        <div class="glass-card team-stat">
                            <div class="team-stat-icon gradient-primary">{&stat.icon}</div>
                            <div class="team-stat-value">{&stat.value}</div>
                            <div class="muted small">{&stat.label}</div>
                        </div>
                    }) }
                </div>

                <div class="member-grid fade-in-up" style="animation-delay: 0.4s;">
                    { for content.team_members.iter().map(member_card) }
                </div>

                <div class="center fade-in-up" style="animation-delay: 0.6s;">
                    <div class="glass-card badge-card">
                        <div class="badge-icon gradient-secondary">{"🏆"}</div>
                        <div>
                            <h3>{"Built for Impact"}</h3>
                            <p class="muted">{"Created during a 48-hour hackathon to address adolescent anaemia in India"}</p>
                            <div class="hashtags">
                                { for content.hashtags.iter().map(|tag| html! {
                                    <span class="hashtag">{tag}</span>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .team {
                    padding: 5rem 0;
                    background: linear-gradient(135deg, var(--muted), var(--background), var(--accent-faint));
                }
                .team-stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }
                .team-stat {
                    padding: 1.5rem;
                    text-align: center;
                }
                .team-stat-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin: 0 auto 0.75rem;
                    font-size: 1.5rem;
                }
                .team-stat-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.25rem;
                }
                .member-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .member-card {
                    overflow: hidden;
                    transition: transform 0.3s ease;
                }
                .member-card:hover {
                    transform: translateY(-4px);
                }
                .member-photo {
                    position: relative;
                    height: 12rem;
                    overflow: hidden;
                }
                .member-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }
                .member-initials {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 3rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                }
                .member-photo:hover img {
                    transform: scale(1.1);
                }
                .member-photo-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                    pointer-events: none;
                }
                .member-social {
                    position: absolute;
                    bottom: 1rem;
                    left: 1rem;
                    right: 1rem;
                    display: flex;
                    gap: 0.5rem;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .member-photo:hover .member-social {
                    opacity: 1;
                }
                .member-social a {
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                    color: #fff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .member-info {
                    padding: 1.5rem;
                }
                .member-info h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.25rem;
                }
                .member-role {
                    color: var(--primary);
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .badge-card {
                    display: inline-flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 2rem;
                    text-align: left;
                }
                .badge-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                }
                .badge-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .hashtags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .hashtag {
                    background: var(--primary-faint);
                    color: var(--primary);
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                "#}
            </style>
        </section>
    }
}
