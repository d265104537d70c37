//! Mock eye-scan workflow.
//!
//! `ScanSession` owns everything the eye-scan section knows about: the chosen
//! image, whether an analysis is in flight and the latest result. Each new
//! image selection starts a new generation, and a scan can only be completed
//! with the ticket of the generation that started it, so a slow analysis never
//! lands on top of a newer image.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use rand::Rng;
use thiserror::Error;
use yew::Reducible;

use crate::config;

pub const LOW_RISK_MESSAGE: &str = "Low Risk - Your eye analysis shows healthy indicators";
pub const HIGH_RISK_MESSAGE: &str =
    "Possible Anaemia Risk - Consider getting tested by a healthcare professional";

pub const MIN_CONFIDENCE: u8 = 70;
pub const MAX_CONFIDENCE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("no eye image selected")]
    NoImageSelected,

    #[error("a scan is already running")]
    AlreadyScanning,

    #[error("scan was superseded by a newer image")]
    Superseded,

    #[error("analysis failed: {0}")]
    AnalysisFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Risk {
    Low,
    High,
}

impl Risk {
    pub fn label(self) -> &'static str {
        match self {
            Risk::Low => "Low Risk",
            Risk::High => "Possible Risk",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Risk::Low => LOW_RISK_MESSAGE,
            Risk::High => HIGH_RISK_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub risk: Risk,
    /// Whole percent, always within `MIN_CONFIDENCE..=MAX_CONFIDENCE`.
    pub confidence: u8,
    pub message: String,
}

/// Draws a random result. The message always agrees with the risk.
pub fn mock_result<R: Rng + ?Sized>(rng: &mut R) -> ScanResult {
    let risk = if rng.gen_bool(0.5) { Risk::Low } else { Risk::High };
    ScanResult {
        risk,
        confidence: rng.gen_range(MIN_CONFIDENCE..=MAX_CONFIDENCE),
        message: risk.message().to_string(),
    }
}

/// Stand-in for the screening API: waits out the configured latency and
/// returns a random result. It has no failure path today, but callers handle
/// `Err` the same way they would for a real request.
pub async fn analyze(image_name: &str) -> Result<ScanResult, ScanError> {
    debug!(
        "mock analysis of {} (screening endpoint {} not contacted)",
        image_name,
        config::screening_url()
    );
    TimeoutFuture::new(config::SCAN_DELAY_MS).await;
    Ok(mock_result(&mut rand::thread_rng()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Previewing,
    Scanning,
    Resulted,
}

/// What the preview pane can show for the selected image.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    Loading,
    Ready(String),
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub name: String,
    pub preview: Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTicket(u64);

/// The latest outcome worth reporting. `seq` grows with every record so the
/// view reacts to a repeat of the same outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanNotice {
    pub seq: u64,
    pub outcome: Result<ScanResult, ScanError>,
}

#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    image: Option<SelectedImage>,
    result: Option<ScanResult>,
    scanning: bool,
    generation: u64,
    notice: Option<ScanNotice>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ScanPhase {
        match (&self.image, self.scanning, &self.result) {
            (None, _, _) => ScanPhase::Idle,
            (Some(_), true, _) => ScanPhase::Scanning,
            (Some(_), false, Some(_)) => ScanPhase::Resulted,
            (Some(_), false, None) => ScanPhase::Previewing,
        }
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.result.as_ref()
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn notice(&self) -> Option<&ScanNotice> {
        self.notice.as_ref()
    }

    /// Generation the next `select_image` will hand out.
    pub fn next_generation(&self) -> u64 {
        self.generation + 1
    }

    /// Replaces the image, clears the result and invalidates any scan in
    /// flight. Returns the new generation for `attach_preview`.
    pub fn select_image(&mut self, name: impl Into<String>) -> u64 {
        self.generation += 1;
        self.image = Some(SelectedImage {
            name: name.into(),
            preview: Preview::Loading,
        });
        self.result = None;
        if self.scanning {
            info!("scan superseded by a new image selection");
        }
        self.scanning = false;
        self.generation
    }

    /// Returns false if the preview belongs to an image that has since been
    /// replaced.
    pub fn attach_preview(&mut self, generation: u64, url: String) -> bool {
        self.set_preview(generation, Preview::Ready(url))
    }

    pub fn preview_failed(&mut self, generation: u64) -> bool {
        self.set_preview(generation, Preview::Unavailable)
    }

    fn set_preview(&mut self, generation: u64, preview: Preview) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.image.as_mut() {
            Some(image) => {
                image.preview = preview;
                true
            }
            None => false,
        }
    }

    /// The ticket `begin_scan` would issue, without starting anything.
    pub fn ready_ticket(&self) -> Result<ScanTicket, ScanError> {
        if self.image.is_none() {
            return Err(ScanError::NoImageSelected);
        }
        if self.scanning {
            return Err(ScanError::AlreadyScanning);
        }
        Ok(ScanTicket(self.generation))
    }

    pub fn begin_scan(&mut self) -> Result<ScanTicket, ScanError> {
        let ticket = self.ready_ticket()?;
        self.scanning = true;
        Ok(ticket)
    }

    pub fn complete_scan(
        &mut self,
        ticket: ScanTicket,
        outcome: Result<ScanResult, ScanError>,
    ) -> Result<&ScanResult, ScanError> {
        if ticket.0 != self.generation || !self.scanning {
            return Err(ScanError::Superseded);
        }
        self.scanning = false;
        let result = outcome?;
        Ok(&*self.result.insert(result))
    }

    fn record(&mut self, outcome: Result<ScanResult, ScanError>) {
        let seq = self.notice.as_ref().map_or(1, |notice| notice.seq + 1);
        self.notice = Some(ScanNotice { seq, outcome });
    }
}

pub enum ScanAction {
    Select(String),
    Preview { generation: u64, url: Option<String> },
    Begin,
    Complete(ScanTicket, Result<ScanResult, ScanError>),
}

impl Reducible for ScanSession {
    type Action = ScanAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ScanAction::Select(name) => {
                next.select_image(name);
            }
            ScanAction::Preview { generation, url } => {
                let applied = match url {
                    Some(url) => next.attach_preview(generation, url),
                    None => next.preview_failed(generation),
                };
                if !applied {
                    debug!("preview for generation {} dropped", generation);
                }
            }
            ScanAction::Begin => {
                if let Err(e) = next.begin_scan() {
                    info!("scan not started: {}", e);
                    next.record(Err(e));
                }
            }
            ScanAction::Complete(ticket, outcome) => {
                let outcome = next.complete_scan(ticket, outcome).cloned();
                match &outcome {
                    Ok(result) => info!("scan complete: {:?} at {}%", result.risk, result.confidence),
                    Err(ScanError::Superseded) => info!("discarding result of a superseded scan"),
                    Err(e) => warn!("scan failed: {}", e),
                }
                next.record(outcome);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scan_once(session: &mut ScanSession, seed: u64) -> ScanResult {
        let ticket = session.begin_scan().unwrap();
        let result = mock_result(&mut StdRng::seed_from_u64(seed));
        session.complete_scan(ticket, Ok(result)).unwrap().clone()
    }

    #[test]
    fn mock_results_stay_in_range_and_match_risk() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..2000 {
            let result = mock_result(&mut rng);
            assert!((70..=100).contains(&result.confidence));
            match result.risk {
                Risk::Low => {
                    seen_low = true;
                    assert_eq!(result.message, LOW_RISK_MESSAGE);
                }
                Risk::High => {
                    seen_high = true;
                    assert_eq!(result.message, HIGH_RISK_MESSAGE);
                }
            }
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn confidence_reaches_both_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let values: Vec<u8> = (0..5000).map(|_| mock_result(&mut rng).confidence).collect();
        assert!(values.contains(&70));
        assert!(values.contains(&100));
    }

    #[test]
    fn scan_without_image_is_rejected() {
        let mut session = ScanSession::new();
        assert_eq!(session.begin_scan(), Err(ScanError::NoImageSelected));
        assert_eq!(session.phase(), ScanPhase::Idle);
        assert!(session.result().is_none());
        assert!(!session.is_scanning());
    }

    #[test]
    fn full_workflow_walks_through_every_phase() {
        let mut session = ScanSession::new();
        assert_eq!(session.phase(), ScanPhase::Idle);

        session.select_image("eye.jpg");
        assert_eq!(session.phase(), ScanPhase::Previewing);

        let ticket = session.begin_scan().unwrap();
        assert_eq!(session.phase(), ScanPhase::Scanning);
        assert_eq!(session.begin_scan(), Err(ScanError::AlreadyScanning));

        let result = mock_result(&mut StdRng::seed_from_u64(1));
        session.complete_scan(ticket, Ok(result.clone())).unwrap();
        assert_eq!(session.phase(), ScanPhase::Resulted);
        assert_eq!(session.result(), Some(&result));
    }

    #[test]
    fn new_image_clears_previous_result() {
        let mut session = ScanSession::new();
        session.select_image("first.jpg");
        scan_once(&mut session, 3);
        assert!(session.result().is_some());

        session.select_image("second.jpg");
        assert!(session.result().is_none());
        assert_eq!(session.phase(), ScanPhase::Previewing);
        assert_eq!(session.image().unwrap().name, "second.jpg");
    }

    #[test]
    fn rescan_overwrites_instead_of_appending() {
        let mut session = ScanSession::new();
        session.select_image("eye.jpg");
        scan_once(&mut session, 1);
        let second = scan_once(&mut session, 2);
        assert_eq!(session.result(), Some(&second));
        assert_eq!(session.phase(), ScanPhase::Resulted);
    }

    #[test]
    fn stale_scan_is_discarded_after_new_selection() {
        let mut session = ScanSession::new();
        session.select_image("old.jpg");
        let stale = session.begin_scan().unwrap();

        session.select_image("new.jpg");
        let result = mock_result(&mut StdRng::seed_from_u64(5));
        assert_eq!(
            session.complete_scan(stale, Ok(result)).unwrap_err(),
            ScanError::Superseded
        );
        assert!(session.result().is_none());
        assert_eq!(session.phase(), ScanPhase::Previewing);

        // The newer image can still be scanned normally.
        let fresh = session.begin_scan().unwrap();
        let result = mock_result(&mut StdRng::seed_from_u64(6));
        assert!(session.complete_scan(fresh, Ok(result)).is_ok());
    }

    #[test]
    fn failed_analysis_resets_flag_and_keeps_old_result() {
        let mut session = ScanSession::new();
        session.select_image("eye.jpg");
        let first = scan_once(&mut session, 9);

        let ticket = session.begin_scan().unwrap();
        let err = session
            .complete_scan(ticket, Err(ScanError::AnalysisFailed("offline".into())))
            .unwrap_err();
        assert_eq!(err, ScanError::AnalysisFailed("offline".into()));
        assert!(!session.is_scanning());
        assert_eq!(session.result(), Some(&first));
    }

    #[test]
    fn preview_for_replaced_image_is_ignored() {
        let mut session = ScanSession::new();
        let old = session.select_image("old.jpg");
        let new = session.select_image("new.jpg");

        assert!(!session.attach_preview(old, "data:old".into()));
        assert_eq!(session.image().unwrap().preview, Preview::Loading);

        assert!(session.attach_preview(new, "data:new".into()));
        assert_eq!(
            session.image().unwrap().preview,
            Preview::Ready("data:new".into())
        );
    }

    #[test]
    fn unreadable_file_leaves_preview_unavailable() {
        let mut session = ScanSession::new();
        let generation = session.select_image("broken.jpg");
        assert!(session.preview_failed(generation));
        assert_eq!(session.image().unwrap().preview, Preview::Unavailable);
        // Scanning does not depend on the preview.
        assert!(session.begin_scan().is_ok());
    }

    fn dispatch(session: Rc<ScanSession>, action: ScanAction) -> Rc<ScanSession> {
        session.reduce(action)
    }

    #[test]
    fn reducer_records_rejected_scan_without_image() {
        let session = dispatch(Rc::new(ScanSession::new()), ScanAction::Begin);
        assert_eq!(session.phase(), ScanPhase::Idle);
        let notice = session.notice().unwrap();
        assert_eq!(notice.outcome, Err(ScanError::NoImageSelected));

        let again = dispatch(session.clone(), ScanAction::Begin);
        assert!(again.notice().unwrap().seq > notice.seq);
    }

    #[test]
    fn reducer_runs_select_preview_scan_complete() {
        let session = Rc::new(ScanSession::new());
        let generation = session.next_generation();
        let session = dispatch(session, ScanAction::Select("eye.jpg".into()));
        let session = dispatch(
            session,
            ScanAction::Preview { generation, url: Some("data:eye".into()) },
        );
        assert_eq!(session.image().unwrap().preview, Preview::Ready("data:eye".into()));

        let ticket = session.ready_ticket().unwrap();
        let session = dispatch(session, ScanAction::Begin);
        assert_eq!(session.phase(), ScanPhase::Scanning);
        assert!(session.notice().is_none());

        let result = mock_result(&mut StdRng::seed_from_u64(4));
        let session = dispatch(session, ScanAction::Complete(ticket, Ok(result.clone())));
        assert_eq!(session.phase(), ScanPhase::Resulted);
        assert_eq!(session.notice().unwrap().outcome, Ok(result));
    }

    #[test]
    fn reducer_marks_stale_completion_as_superseded() {
        let session = dispatch(Rc::new(ScanSession::new()), ScanAction::Select("old.jpg".into()));
        let stale = session.ready_ticket().unwrap();
        let session = dispatch(session, ScanAction::Begin);
        let session = dispatch(session, ScanAction::Select("new.jpg".into()));

        let result = mock_result(&mut StdRng::seed_from_u64(8));
        let session = dispatch(session, ScanAction::Complete(stale, Ok(result)));
        assert!(session.result().is_none());
        assert_eq!(session.phase(), ScanPhase::Previewing);
        assert_eq!(session.notice().unwrap().outcome, Err(ScanError::Superseded));
    }

    #[test]
    fn risk_labels() {
        assert_eq!(Risk::Low.label(), "Low Risk");
        assert_eq!(Risk::High.label(), "Possible Risk");
    }
}
