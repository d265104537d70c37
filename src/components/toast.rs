use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

pub enum ToastAction {
    Push {
        title: String,
        description: String,
        variant: ToastVariant,
    },
    Dismiss(u64),
}

/// Newest first, capped at `MAX_VISIBLE_TOASTS`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { title, description, variant } => {
                next.next_id += 1;
                next.toasts.insert(
                    0,
                    Toast {
                        id: next.next_id,
                        title,
                        description,
                        variant,
                    },
                );
                next.toasts.truncate(config::MAX_VISIBLE_TOASTS);
            }
            ToastAction::Dismiss(id) => {
                next.toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(next)
    }
}

pub type ToastContext = UseReducerHandle<ToastList>;

/// Shows a toast if a viewport is mounted; otherwise the message is only logged.
pub fn notify(toasts: Option<&ToastContext>, title: &str, description: &str, variant: ToastVariant) {
    let Some(toasts) = toasts else {
        log::info!("Toast without viewport: {} - {}", title, description);
        return;
    };
    toasts.dispatch(ToastAction::Push {
        title: title.to_string(),
        description: description.to_string(),
        variant,
    });
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    // Dropping the timeout on unmount cancels it.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let variant_class = match props.toast.variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast-destructive",
    };

    html! {
        <div class={variant_class} role="status">
            <div class="toast-body">
                <div class="toast-title">{&props.toast.title}</div>
                <div class="toast-description">{&props.toast.description}</div>
            </div>
            <button class="toast-close" onclick={close}>{"✕"}</button>
        </div>
    }
}

#[function_component(ToastViewport)]
pub fn toast_viewport() -> Html {
    let toasts = use_context::<ToastContext>();
    let Some(toasts) = toasts else {
        return html! {};
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="toast-viewport">
            { for toasts.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
            <style>
                {r#"
                .toast-viewport {
                    position: fixed;
                    top: 1.5rem;
                    right: 1.5rem;
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    max-width: 360px;
                }
                .toast {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1rem 1.25rem;
                    border-radius: 1rem;
                    background: var(--card);
                    color: var(--foreground);
                    border: 1px solid var(--border);
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.15);
                    animation: fade-in-up 0.3s ease-out;
                }
                .toast-destructive {
                    background: var(--destructive);
                    color: #fff;
                    border-color: transparent;
                }
                .toast-body {
                    flex: 1;
                }
                .toast-title {
                    font-weight: 600;
                }
                .toast-description {
                    font-size: 0.875rem;
                    opacity: 0.9;
                }
                .toast-close {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                    opacity: 0.7;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(list: Rc<ToastList>, title: &str) -> Rc<ToastList> {
        list.reduce(ToastAction::Push {
            title: title.to_string(),
            description: String::new(),
            variant: ToastVariant::Default,
        })
    }

    #[test]
    fn newest_toast_comes_first() {
        let list = push(push(Rc::new(ToastList::default()), "first"), "second");
        let titles: Vec<&str> = list.toasts.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["second", "first"]);
    }

    #[test]
    fn list_is_capped() {
        let mut list = Rc::new(ToastList::default());
        for i in 0..5 {
            list = push(list, &format!("toast {}", i));
        }
        assert_eq!(list.toasts.len(), config::MAX_VISIBLE_TOASTS);
        assert_eq!(list.toasts[0].title, "toast 4");
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let list = push(push(Rc::new(ToastList::default()), "a"), "b");
        let target = list.toasts[1].id;
        let list = list.reduce(ToastAction::Dismiss(target));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].title, "b");

        let unchanged = list.clone().reduce(ToastAction::Dismiss(999));
        assert_eq!(unchanged.toasts.len(), 1);
    }
}
