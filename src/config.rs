
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8000"  // Screening API when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

/// Artificial latency of the mocked eye analysis.
pub const SCAN_DELAY_MS: u32 = 2000;
/// How long AnaemiBot "types" before answering.
pub const CHAT_REPLY_DELAY_MS: u32 = 1000;
pub const TOAST_DURATION_MS: u32 = 5000;
pub const MAX_VISIBLE_TOASTS: usize = 3;

pub const SCAN_ANCHOR_ID: &str = "eye-scan-section";

// Placeholder, the mock scan never posts here.
pub const SCREENING_PATH: &str = "/screen/";
pub const DIET_GUIDE_PATH: &str = "/api/download/iron-rich-diet-guide.pdf";
pub const DIET_GUIDE_FILENAME: &str = "Iron-Rich-Diet-Tips.pdf";

pub const HEALTH_HELPLINE: &str = "104";
pub const HEALTH_CENTER_SEARCH: &str = "anaemia screening health centre near me";

pub fn diet_guide_url() -> String {
    format!("{}{}", get_backend_url(), DIET_GUIDE_PATH)
}

pub fn screening_url() -> String {
    format!("{}{}", get_backend_url(), SCREENING_PATH)
}

pub fn health_center_search_url() -> String {
    format!(
        "https://www.google.com/maps/search/{}",
        urlencoding::encode(HEALTH_CENTER_SEARCH)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diet_guide_url_ends_with_placeholder_path() {
        assert!(diet_guide_url().ends_with("/api/download/iron-rich-diet-guide.pdf"));
    }

    #[test]
    fn health_center_search_is_url_encoded() {
        let url = health_center_search_url();
        assert!(url.starts_with("https://www.google.com/maps/search/"));
        assert!(!url.contains(' '));
        assert!(url.ends_with("anaemia%20screening%20health%20centre%20near%20me"));
    }
}
