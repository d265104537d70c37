use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::{notify, ToastContext, ToastVariant};
use crate::config;
use crate::scan::{self, Preview, Risk, ScanAction, ScanError, ScanResult, ScanSession};
use crate::utils::dom;

/// Toast for a recorded scan outcome, if the user should see one.
fn scan_toast(
    outcome: &Result<ScanResult, ScanError>,
) -> Option<(&'static str, &'static str, ToastVariant)> {
    match outcome {
        Ok(_) => Some(("Scan Complete!", "Your results are ready", ToastVariant::Default)),
        Err(ScanError::NoImageSelected) => Some((
            "No Image Selected",
            "Please select an eye image first",
            ToastVariant::Destructive,
        )),
        Err(ScanError::AnalysisFailed(_)) => Some((
            "Scan Failed",
            "Please try again or check your connection",
            ToastVariant::Destructive,
        )),
        Err(ScanError::Superseded | ScanError::AlreadyScanning) => None,
    }
}

#[function_component(EyeScanSection)]
pub fn eye_scan_section() -> Html {
    let session = use_reducer(ScanSession::new);
    let toasts = use_context::<ToastContext>();

    {
        let notice = session.notice().cloned();
        let seq = notice.as_ref().map(|notice| notice.seq);
        use_effect_with_deps(
            move |_| {
                if let Some((title, description, variant)) =
                    notice.as_ref().and_then(|notice| scan_toast(&notice.outcome))
                {
                    notify(toasts.as_ref(), title, description, variant);
                }
                || ()
            },
            seq,
        );
    }

    let on_select = {
        let session = session.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // Cancelled picker: keep whatever was there before.
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Lets the same file be picked again later.
            input.set_value("");

            let generation = session.next_generation();
            info!("Eye image selected: {}", file.name());
            session.dispatch(ScanAction::Select(file.name()));

            let reader_session = session.clone();
            let read = dom::read_as_data_url(&file, move |url| {
                reader_session.dispatch(ScanAction::Preview { generation, url: url.ok() });
            });
            if let Err(e) = read {
                warn!("Could not read eye image for preview: {}", e);
                session.dispatch(ScanAction::Preview { generation, url: None });
            }
        })
    };

    let on_scan = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let ready = session.ready_ticket();
            session.dispatch(ScanAction::Begin);
            let Ok(ticket) = ready else {
                return;
            };
            let image_name = session
                .image()
                .map(|image| image.name.clone())
                .unwrap_or_default();
            info!("Starting scan of {}", image_name);

            let session = session.clone();
            spawn_local(async move {
                let outcome = scan::analyze(&image_name).await;
                session.dispatch(ScanAction::Complete(ticket, outcome));
            });
        })
    };

    let find_centers = Callback::from(|_: MouseEvent| {
        if let Err(e) = dom::open_in_new_tab(&config::health_center_search_url()) {
            warn!("Could not open health center search: {}", e);
        }
    });

    let state = &*session;
    let phase = format!("{:?}", state.phase()).to_lowercase();

    let upload_card = match state.image() {
        None => html! {
            <div class="scan-dropzone">
                <div class="scan-icon gradient-primary">{"⬆️"}</div>
                <h4>{"Select Eye Image"}</h4>
                <p class="muted">{"Choose a clear, well-lit photo of your eye"}</p>
                <label for="eye-image" class="scan-button gradient-primary">
                    {"📷 Choose File"}
                </label>
                <input id="eye-image" type="file" accept="image/*" class="hidden" onchange={on_select.clone()} />
            </div>
        },
        Some(image) => html! {
            <div class="scan-preview-block">
                <div class="scan-preview">
                    {
                        match &image.preview {
                            Preview::Ready(url) => html! { <img src={url.clone()} alt="Selected eye" /> },
                            Preview::Loading => html! { <div class="scan-preview-loading muted">{"Loading preview..."}</div> },
                            Preview::Unavailable => html! { <div class="scan-preview-loading muted">{"Preview not available"}</div> },
                        }
                    }
                    <div class="scan-preview-shade"></div>
                </div>
                <div class="scan-actions">
                    <button class="scan-button gradient-primary scan-start" onclick={on_scan} disabled={state.is_scanning()}>
                        if state.is_scanning() {
                            <span class="spin">{"✨"}</span>{" Analyzing..."}
                        } else {
                            {"👁️ Start Scan"}
                        }
                    </button>
                    <label for="eye-image-new" class="scan-button scan-outline" title="Choose another photo">
                        {"📷"}
                    </label>
                    <input id="eye-image-new" type="file" accept="image/*" class="hidden" onchange={on_select} />
                </div>
            </div>
        },
    };

    let result_card = match state.result() {
        None => html! {
            <div class="scan-empty">
                <div class="scan-icon gradient-accent pulse">{"✨"}</div>
                <p class="muted">{"Upload an eye photo to see your anaemia screening results"}</p>
            </div>
        },
        Some(result) => {
            let (badge_class, badge_icon) = match result.risk {
                Risk::Low => ("scan-badge gradient-success", "✅"),
                Risk::High => ("scan-badge gradient-warning", "⚠️"),
            };
            html! {
                <div class="scan-result">
                    <div class="center">
                        <div class={badge_class}>
                            <span>{badge_icon}</span>
                            <span>{result.risk.label()}</span>
                        </div>
                    </div>
                    <div class="center">
                        <div class="scan-confidence">{format!("{}%", result.confidence)}</div>
                        <div class="muted small">{"Confidence Score"}</div>
                    </div>
                    <div class="scan-message">
                        <p>{&result.message}</p>
                    </div>
                    if result.risk == Risk::High {
                        <button class="scan-button gradient-secondary scan-wide" onclick={find_centers}>
                            {"Find Healthcare Centers Near You"}
                        </button>
                    }
                </div>
            }
        }
    };

    html! {
        <section id={config::SCAN_ANCHOR_ID} class="eye-scan" data-phase={phase}>
            <div class="container">
                <div class="section-header fade-in-up">
                    <div class="section-pill gradient-primary">
                        <span>{"👁️"}</span>
                        <span>{"AI-Powered Screening"}</span>
                    </div>
                    <h2 class="section-title">
                        {"Eye "}<span class="text-gradient-primary">{"Scan Tool"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Upload a close-up photo of your eye and our AI will analyze it for signs of anaemia in seconds"}
                    </p>
                </div>

                <div class="scan-grid">
                    <div class="glass-card scan-card fade-in-up" style="animation-delay: 0.2s;">
                        <h3>{"Upload Eye Photo"}</h3>
                        { upload_card }
                    </div>
                    <div class="glass-card scan-card fade-in-up" style="animation-delay: 0.4s;">
                        <h3>{"Scan Results"}</h3>
                        { result_card }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .eye-scan {
                    padding: 5rem 0;
                    background: linear-gradient(135deg, var(--background), var(--muted), var(--background));
                }
                .scan-grid {
                    max-width: 56rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2rem;
                }
                .scan-card {
                    padding: 2rem;
                }
                .scan-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 1.5rem;
                }
                .scan-dropzone {
                    border: 2px dashed var(--primary-soft);
                    border-radius: 1rem;
                    padding: 2rem;
                    text-align: center;
                    transition: border-color 0.2s ease;
                }
                .scan-dropzone:hover {
                    border-color: var(--primary);
                }
                .scan-icon {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin: 0 auto 1rem;
                    font-size: 2rem;
                }
                .scan-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.25rem;
                    border: none;
                    border-radius: 0.75rem;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .scan-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .scan-outline {
                    background: transparent;
                    color: var(--foreground);
                    border: 1px solid var(--primary-soft);
                }
                .scan-preview {
                    position: relative;
                    border-radius: 1rem;
                    overflow: hidden;
                    height: 16rem;
                    margin-bottom: 1rem;
                }
                .scan-preview img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .scan-preview-loading {
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--muted);
                }
                .scan-preview-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.5), transparent);
                    pointer-events: none;
                }
                .scan-actions {
                    display: flex;
                    gap: 0.75rem;
                }
                .scan-start {
                    flex: 1;
                    padding: 1.5rem;
                }
                .scan-wide {
                    width: 100%;
                }
                .scan-empty {
                    text-align: center;
                    padding: 3rem 0;
                }
                .scan-result {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .scan-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 1.5rem;
                    border-radius: 1rem;
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .scan-confidence {
                    font-size: 1.875rem;
                    font-weight: 700;
                }
                .scan-message {
                    background: var(--muted);
                    padding: 1rem;
                    border-radius: 0.75rem;
                    text-align: center;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_shows_validation_toast() {
        assert_eq!(
            scan_toast(&Err(ScanError::NoImageSelected)),
            Some((
                "No Image Selected",
                "Please select an eye image first",
                ToastVariant::Destructive
            ))
        );
    }

    #[test]
    fn failed_analysis_shows_destructive_toast() {
        let toast = scan_toast(&Err(ScanError::AnalysisFailed("offline".into())));
        assert_eq!(
            toast.map(|(title, _, variant)| (title, variant)),
            Some(("Scan Failed", ToastVariant::Destructive))
        );
    }

    #[test]
    fn superseded_and_duplicate_scans_are_silent() {
        assert_eq!(scan_toast(&Err(ScanError::Superseded)), None);
        assert_eq!(scan_toast(&Err(ScanError::AlreadyScanning)), None);
    }

    #[test]
    fn finished_scan_shows_success_toast() {
        let result = ScanResult {
            risk: Risk::Low,
            confidence: 88,
            message: scan::LOW_RISK_MESSAGE.to_string(),
        };
        assert_eq!(
            scan_toast(&Ok(result)),
            Some(("Scan Complete!", "Your results are ready", ToastVariant::Default))
        );
    }
}
