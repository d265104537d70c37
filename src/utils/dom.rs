//! Thin wrappers over the browser APIs the sections need.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, File, FileReader, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions, Window};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn scroll_to_anchor(id: &str) -> Result<(), DomError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn open_in_new_tab(url: &str) -> Result<(), DomError> {
    window()?.open_with_url_and_target(url, "_blank")?;
    Ok(())
}

/// Builds a throwaway `<a download>`, clicks it and removes it again.
pub fn trigger_download(href: &str, filename: &str) -> Result<(), DomError> {
    let document = document()?;
    let body = document.body().ok_or(DomError::NoDocument)?;

    let link: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| DomError::Js("created element is not an anchor".to_string()))?;
    link.set_href(href);
    link.set_download(filename);

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}

/// Reads `file` as a data URL and hands the outcome to `on_done`. The handler
/// runs on `loadend`, so it fires exactly once whether the read succeeded or
/// not, and frees itself afterwards.
pub fn read_as_data_url(
    file: &File,
    on_done: impl FnOnce(Result<String, DomError>) + 'static,
) -> Result<(), DomError> {
    let reader = FileReader::new()?;
    let reader_handle = reader.clone();

    let onloadend = Closure::once_into_js(move || {
        let url = reader_handle
            .result()
            .ok()
            .and_then(|value| value.as_string())
            .ok_or_else(|| DomError::Js("file could not be read as a data URL".to_string()));
        if let Err(e) = &url {
            gloo_console::error!(format!("FileReader failed: {}", e));
        }
        on_done(url);
    });

    reader.set_onloadend(Some(onloadend.unchecked_ref()));
    reader.read_as_data_url(file)?;
    Ok(())
}
