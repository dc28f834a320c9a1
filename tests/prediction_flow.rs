use salescope::application::ml::mock::{FailingPredictor, MockPredictor};
use salescope::application::ml::predictor::SalesPredictor;
use salescope::application::submission::SubmissionService;
use salescope::domain::catalog::{Genre, Platform, Publisher};
use salescope::domain::columns;
use salescope::domain::errors::PredictionError;
use salescope::domain::request::PredictionRequest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn sample_request() -> PredictionRequest {
    PredictionRequest::builder()
        .name("New Game")
        .platform(Platform::Ps4)
        .genre(Genre::Action)
        .publisher(Publisher::Ea)
        .year(2022)
        .na_sales(1.0)
        .eu_sales(0.8)
        .jp_sales(1.2)
        .other_sales(0.5)
        .build()
        .unwrap()
}

#[test]
fn builder_yields_exactly_the_nine_supplied_values() {
    let request = sample_request();
    assert_eq!(request.name, "New Game");
    assert_eq!(request.platform, Platform::Ps4);
    assert_eq!(request.genre, Genre::Action);
    assert_eq!(request.publisher, Publisher::Ea);
    assert_eq!(request.year, 2022);
    assert_eq!(request.na_sales, 1.0);
    assert_eq!(request.eu_sales, 0.8);
    assert_eq!(request.jp_sales, 1.2);
    assert_eq!(request.other_sales, 0.5);
}

#[test]
fn record_row_follows_the_fixed_column_order() {
    let row = columns::request_to_row(&sample_request());
    assert_eq!(row.len(), columns::COLUMN_NAMES.len());
    assert_eq!(
        row,
        vec!["New Game", "PS4", "Action", "EA", "2022", "1.0", "0.8", "1.2", "0.5"]
    );
}

#[test]
fn regional_sum_is_independent_of_the_prediction() {
    // A wildly scaled predictor must not change the displayed sum
    let service = SubmissionService::new(Arc::new(MockPredictor::with_uplift(42.0)));
    let outcome = service.submit(sample_request()).unwrap();
    assert_eq!(format!("{:.2}", outcome.regional_sum), "3.50");
    assert!(outcome.prediction > 100.0);
}

#[test]
fn submission_does_not_mutate_the_input_record() {
    let request = sample_request();
    let service = SubmissionService::new(Arc::new(MockPredictor::new()));
    let outcome = service.submit(request.clone()).unwrap();
    assert_eq!(outcome.request, request);
}

#[test]
fn failure_surfaces_literal_error_text() {
    let service = SubmissionService::new(Arc::new(FailingPredictor::new(
        "expected 15 features, got 8",
    )));
    let err = service.submit(sample_request()).unwrap_err();
    assert!(err.to_string().contains("expected 15 features, got 8"));
}

#[test]
fn a_failure_does_not_poison_later_submissions() {
    // Fails exactly once, then behaves
    struct FlakyPredictor {
        failures_left: AtomicUsize,
    }

    impl SalesPredictor for FlakyPredictor {
        fn predict(&self, request: &PredictionRequest) -> Result<Vec<f64>, PredictionError> {
            if self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(PredictionError::Inference {
                    reason: "transient backend hiccup".to_string(),
                });
            }
            Ok(vec![request.regional_sum()])
        }

        fn name(&self) -> &str {
            "flaky"
        }

        fn version(&self) -> &str {
            "v0"
        }
    }

    let service = SubmissionService::new(Arc::new(FlakyPredictor {
        failures_left: AtomicUsize::new(1),
    }));

    let err = service.submit(sample_request()).unwrap_err();
    assert!(err.to_string().contains("transient backend hiccup"));

    // The same service accepts a fresh submission and succeeds
    let outcome = service.submit(sample_request()).unwrap();
    assert_eq!(format!("{:.2}", outcome.prediction), "3.50");
}

#[test]
fn year_bounds_are_both_accepted() {
    let service = SubmissionService::new(Arc::new(MockPredictor::new()));
    for year in [2000, 2023] {
        let request = PredictionRequest::builder()
            .name("Boundary Game")
            .platform(Platform::Pc)
            .genre(Genre::Strategy)
            .publisher(Publisher::Other)
            .year(year)
            .na_sales(0.0)
            .eu_sales(0.0)
            .jp_sales(0.0)
            .other_sales(0.0)
            .build()
            .unwrap();
        assert_eq!(request.year, year);
        assert!(service.submit(request).is_ok());
    }
}

#[test]
fn missing_field_is_reported_by_name() {
    let err = PredictionRequest::builder()
        .platform(Platform::Ps5)
        .genre(Genre::Shooter)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        PredictionError::MissingField { field: "Name" }
    ));
    assert!(err.to_string().contains("Name"));
}

#[test]
fn background_submission_delivers_exactly_one_result() {
    let service = SubmissionService::new(Arc::new(MockPredictor::new()));
    let rx = service.submit_in_background(sample_request());

    let outcome = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("worker never reported")
        .expect("mock submission failed");
    assert_eq!(format!("{:.2}", outcome.regional_sum), "3.50");

    // The worker sends once and hangs up
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
}
