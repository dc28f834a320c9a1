use crate::application::submission::{PredictionOutcome, SubmissionService};
use crate::domain::catalog::{Genre, Platform, Publisher};
use crate::domain::errors::PredictionError;
use crate::domain::request::PredictionRequest;
use crossbeam_channel::Receiver;
use tracing::error;

/// UI state: the current form values, the (at most one) in-flight
/// submission, the last outcome and the mirrored log feed. Form state lives
/// here between frames; each submission snapshots it into an immutable
/// record.
pub struct SalesApp {
    service: SubmissionService,
    log_rx: Receiver<String>,

    // Form fields, pre-filled with the stock defaults
    pub name: String,
    pub platform: Platform,
    pub genre: Genre,
    pub publisher: Publisher,
    pub year: u16,
    pub na_sales: f64,
    pub eu_sales: f64,
    pub jp_sales: f64,
    pub other_sales: f64,

    // Submission state
    pending: Option<Receiver<Result<PredictionOutcome, PredictionError>>>,
    pub outcome: Option<Result<PredictionOutcome, PredictionError>>,

    // Log lines mirrored from tracing
    pub log_feed: Vec<String>,
}

impl SalesApp {
    pub fn new(service: SubmissionService, log_rx: Receiver<String>) -> Self {
        Self {
            service,
            log_rx,
            name: "New Game".to_string(),
            platform: Platform::default(),
            genre: Genre::default(),
            publisher: Publisher::default(),
            year: 2022,
            na_sales: 1.0,
            eu_sales: 0.8,
            jp_sales: 1.2,
            other_sales: 0.5,
            pending: None,
            outcome: None,
            log_feed: Vec::new(),
        }
    }

    pub fn predictor_label(&self) -> String {
        self.service.predictor_label()
    }

    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit handler: snapshot the form into one record and hand it to the
    /// prediction service. Refused while a submission is already in flight.
    pub fn submit(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.outcome = None;

        let request = PredictionRequest::builder()
            .name(self.name.clone())
            .platform(self.platform)
            .genre(self.genre)
            .publisher(self.publisher)
            .year(self.year)
            .na_sales(self.na_sales)
            .eu_sales(self.eu_sales)
            .jp_sales(self.jp_sales)
            .other_sales(self.other_sales)
            .build();

        match request {
            Ok(request) => {
                self.pending = Some(self.service.submit_in_background(request));
            }
            Err(e) => {
                error!("Prediction error: {}", e);
                self.outcome = Some(Err(e));
            }
        }
    }

    /// Drains pending log lines and polls the in-flight submission, if any.
    pub fn poll(&mut self) {
        while let Ok(msg) = self.log_rx.try_recv() {
            self.log_feed.push(msg);
        }
        // Keep the feed manageable
        if self.log_feed.len() > 500 {
            self.log_feed.drain(0..100);
        }

        let finished = match &self.pending {
            Some(rx) => match rx.try_recv() {
                Ok(result) => Some(result),
                Err(crossbeam_channel::TryRecvError::Empty) => None,
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    Some(Err(PredictionError::Inference {
                        reason: "Prediction worker disconnected".to_string(),
                    }))
                }
            },
            None => None,
        };

        if let Some(result) = finished {
            self.outcome = Some(result);
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::mock::{FailingPredictor, MockPredictor};
    use std::sync::Arc;
    use std::time::Duration;

    fn app_with(service: SubmissionService) -> SalesApp {
        let (_tx, rx) = crossbeam_channel::unbounded();
        SalesApp::new(service, rx)
    }

    fn poll_until_done(app: &mut SalesApp) {
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while app.in_flight() {
            assert!(std::time::Instant::now() < deadline, "submission never finished");
            app.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_submit_is_refused_while_in_flight() {
        let mut app = app_with(SubmissionService::new(Arc::new(MockPredictor::new())));
        app.submit();
        assert!(app.in_flight());
        // A second press while pending changes nothing
        app.submit();
        poll_until_done(&mut app);
        assert!(app.outcome.as_ref().unwrap().is_ok());
    }

    #[test]
    fn test_failed_submission_leaves_form_usable() {
        let mut app = app_with(SubmissionService::new(Arc::new(FailingPredictor::new(
            "model artifact corrupted",
        ))));
        app.submit();
        poll_until_done(&mut app);

        let err = app.outcome.as_ref().unwrap().as_ref().unwrap_err();
        assert!(err.to_string().contains("model artifact corrupted"));

        // Same app, healthy backend: the next submission succeeds.
        app.service = SubmissionService::new(Arc::new(MockPredictor::new()));
        app.submit();
        poll_until_done(&mut app);
        assert!(app.outcome.as_ref().unwrap().is_ok());
    }
}
