use std::rc::Rc;

use yew::prelude::*;

use crate::components::chat_bot::ChatBot;
use crate::components::toast::{ToastContext, ToastList, ToastViewport};
use crate::content::SiteContent;
use crate::sections::{
    behavior_change::BehaviorChangeSection,
    eye_scan::EyeScanSection,
    hero::HeroSection,
    resources::ResourcesSection,
    team::TeamSection,
};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct IndexProps {
    pub content: Rc<SiteContent>,
}

/// The whole site. Sections are stacked in a fixed order and share nothing
/// but the read-only content and the toast stack.
#[function_component(Index)]
pub fn index(props: &IndexProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    html! {
        <ContextProvider<Rc<SiteContent>> context={props.content.clone()}>
            <ContextProvider<ToastContext> context={toasts}>
                <Theme />
                <main class="page">
                    <HeroSection />
                    <EyeScanSection />
                    <BehaviorChangeSection />
                    <ResourcesSection />
                    <TeamSection />
                    <ChatBot />
                </main>
                <ToastViewport />
            </ContextProvider<ToastContext>>
        </ContextProvider<Rc<SiteContent>>>
    }
}
