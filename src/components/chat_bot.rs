use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::chat::{format_time, ChatAction, ChatSession, PendingReply, Role};
use crate::content::SiteContent;

#[function_component(ChatBot)]
pub fn chat_bot() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let session = {
        let greeting = content
            .as_ref()
            .map(|c| c.chat_greeting.clone())
            .unwrap_or_default();
        use_reducer(move || ChatSession::new(&greeting))
    };
    let log_ref = use_node_ref();

    let message_count = session.messages().len();
    let awaiting = session.is_awaiting();
    let open = session.is_open();

    // Keep the newest message in view.
    {
        let log_ref = log_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(log) = log_ref.cast::<Element>() {
                    log.set_scroll_top(log.scroll_height());
                }
                || ()
            },
            (message_count, awaiting, open),
        );
    }

    let Some(content) = content else {
        return html! {};
    };

    let toggle = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Chat panel {}", if session.is_open() { "closed" } else { "opened" });
            session.dispatch(ChatAction::Toggle);
        })
    };

    let close = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(ChatAction::Close))
    };

    let ask = {
        let session = session.clone();
        let content = content.clone();
        Callback::from(move |question: String| {
            let Some(entry) = content.answer_for(&question) else {
                warn!("No canned answer for {:?}", question);
                return;
            };
            if session.is_awaiting() {
                return;
            }
            info!("Quick question asked: {}", entry.question);
            session.dispatch(ChatAction::Ask(entry.clone()));

            let pending = PendingReply::from(entry);
            let session = session.clone();
            spawn_local(async move {
                let reply = pending.wait().await;
                session.dispatch(ChatAction::Deliver(reply));
            });
        })
    };

    let log_items: Html = session.messages().iter().map(|message| {
        let is_user = message.role == Role::User;
        html! {
            <div key={message.id} class={classes!("chat-row", if is_user { "chat-row-user" } else { "chat-row-bot" })}>
                if !is_user {
                    <div class="chat-avatar-small gradient-primary">{"🤖"}</div>
                }
                <div class={classes!("chat-bubble", if is_user { "chat-bubble-user" } else { "chat-bubble-bot" })}>
                    <p>{&message.text}</p>
                    <div class="chat-time">{format_time(&message.timestamp)}</div>
                </div>
                if is_user {
                    <div class="chat-avatar-small gradient-secondary">{"🙂"}</div>
                }
            </div>
        }
    }).collect();

    html! {
        <>
            <div class="chat-fab">
                <button class="chat-fab-button gradient-primary pulse-glow" onclick={toggle}>
                    if open { {"✕"} } else { <span class="float">{"💬"}</span> }
                </button>
            </div>

            if open {
                <div class="chat-window fade-in-up">
                    <div class="chat-card glass-card">
                        <div class="chat-header gradient-primary">
                            <div class="chat-header-info">
                                <div class="chat-avatar">{"🤖"}</div>
                                <div>
                                    <h3>{"AnaemiBot"}</h3>
                                    <p>{"Ask me about anaemia!"}</p>
                                </div>
                            </div>
                            <button class="chat-close" onclick={close}>{"✕"}</button>
                        </div>

                        <div class="chat-log" ref={log_ref}>
                            { log_items }

                            if awaiting {
                                <div class="chat-row chat-row-bot">
                                    <div class="chat-avatar-small gradient-primary">{"🤖"}</div>
                                    <div class="chat-bubble chat-bubble-bot typing">
                                        <span class="dot"></span>
                                        <span class="dot" style="animation-delay: 0.2s;"></span>
                                        <span class="dot" style="animation-delay: 0.4s;"></span>
                                    </div>
                                </div>
                            }
                        </div>

                        <div class="chat-questions">
                            <p class="muted tiny">{"Quick Questions:"}</p>
                            { for content.faq.iter().map(|entry| {
                                let ask = ask.clone();
                                let question = entry.question.clone();
                                html! {
                                    <button
                                        class="chat-question"
                                        disabled={awaiting}
                                        onclick={Callback::from(move |_: MouseEvent| ask.emit(question.clone()))}
                                    >
                                        {&entry.question}
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                </div>
            }

            <style>
                {r#"
                .chat-fab {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                }
                .chat-fab-button {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    border: none;
                    color: #fff;
                    font-size: 1.75rem;
                    cursor: pointer;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .chat-window {
                    position: fixed;
                    bottom: 6rem;
                    right: 1.5rem;
                    width: 24rem;
                    max-width: calc(100vw - 3rem);
                    height: 500px;
                    z-index: 40;
                }
                .chat-card {
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                    border: 2px solid var(--primary-soft);
                }
                .chat-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem;
                    color: #fff;
                }
                .chat-header-info {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .chat-header h3 {
                    font-weight: 600;
                }
                .chat-header p {
                    font-size: 0.75rem;
                    opacity: 0.7;
                }
                .chat-avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .chat-close {
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                }
                .chat-close:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                .chat-log {
                    flex: 1;
                    overflow-y: auto;
                    padding: 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .chat-row {
                    display: flex;
                    gap: 0.75rem;
                }
                .chat-row-user {
                    justify-content: flex-end;
                }
                .chat-row-bot {
                    justify-content: flex-start;
                }
                .chat-avatar-small {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.875rem;
                }
                .chat-bubble {
                    max-width: 80%;
                    padding: 0.75rem;
                    border-radius: 1rem;
                    font-size: 0.875rem;
                }
                .chat-bubble-user {
                    background: var(--gradient-accent);
                    color: #fff;
                    border-bottom-right-radius: 0.25rem;
                }
                .chat-bubble-bot {
                    background: var(--muted);
                    color: var(--foreground);
                    border-bottom-left-radius: 0.25rem;
                }
                .chat-time {
                    font-size: 0.75rem;
                    margin-top: 0.25rem;
                    opacity: 0.7;
                }
                .typing {
                    display: flex;
                    gap: 0.25rem;
                }
                .typing .dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: var(--muted-foreground);
                    animation: pulse 1.5s ease-in-out infinite;
                }
                .chat-questions {
                    padding: 1rem;
                    border-top: 1px solid var(--border);
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .chat-question {
                    text-align: left;
                    font-size: 0.75rem;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.5rem;
                    border: 1px solid var(--primary-soft);
                    background: transparent;
                    cursor: pointer;
                }
                .chat-question:hover:not(:disabled) {
                    background: var(--primary-faint);
                }
                .chat-question:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                "#}
            </style>
        </>
    }
}
