use crate::domain::request::PredictionRequest;

/// The nine named columns, in the fixed order the external pipeline expects.
/// Any change here is a breaking change for serialized models.
pub const COLUMN_NAMES: &[&str] = &[
    "Name",
    "Platform",
    "Genre",
    "Publisher",
    "Year",
    "NA_Sales",
    "EU_Sales",
    "JP_Sales",
    "Other_Sales",
];

/// Numeric feature layout fed to the bundled model backends. Name is a
/// non-semantic pass-through and carries no feature; the categorical columns
/// are represented by their closed-set codes.
/// This order MUST match exactly the order used in the training pipeline.
pub const FEATURE_NAMES: &[&str] = &[
    "Platform",
    "Genre",
    "Publisher",
    "Year",
    "NA_Sales",
    "EU_Sales",
    "JP_Sales",
    "Other_Sales",
];

/// Encodes a request as an f32 feature row for ONNX inference.
pub fn request_to_vector(request: &PredictionRequest) -> Vec<f32> {
    vec![
        request.platform.code() as f32,
        request.genre.code() as f32,
        request.publisher.code() as f32,
        request.year as f32,
        request.na_sales as f32,
        request.eu_sales as f32,
        request.jp_sales as f32,
        request.other_sales as f32,
    ]
}

/// Same layout as `request_to_vector`, kept at f64 precision for the
/// smartcore backend.
pub fn request_to_f64_vector(request: &PredictionRequest) -> Vec<f64> {
    vec![
        request.platform.code() as f64,
        request.genre.code() as f64,
        request.publisher.code() as f64,
        request.year as f64,
        request.na_sales,
        request.eu_sales,
        request.jp_sales,
        request.other_sales,
    ]
}

/// Display values for the echoed input record, one per column in
/// `COLUMN_NAMES` order.
pub fn request_to_row(request: &PredictionRequest) -> Vec<String> {
    vec![
        request.name.clone(),
        request.platform.to_string(),
        request.genre.to_string(),
        request.publisher.to_string(),
        request.year.to_string(),
        format!("{:.1}", request.na_sales),
        format!("{:.1}", request.eu_sales),
        format!("{:.1}", request.jp_sales),
        format!("{:.1}", request.other_sales),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Genre, Platform, Publisher};

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
    fn test_feature_vector_length() {
        let request = sample_request();
        assert_eq!(request_to_vector(&request).len(), FEATURE_NAMES.len());
        assert_eq!(request_to_f64_vector(&request).len(), FEATURE_NAMES.len());
    }

    #[test]
    fn test_feature_order() {
        let request = sample_request();
        let vec = request_to_f64_vector(&request);
        // Platform/Genre/Publisher defaults are code 0
        assert_eq!(vec[0], 0.0);
        assert_eq!(vec[1], 0.0);
        assert_eq!(vec[2], 0.0);
        // Year is index 3, regional sales follow in order
        assert_eq!(vec[3], 2022.0);
        assert_eq!(vec[4], 1.0);
        assert_eq!(vec[5], 0.8);
        assert_eq!(vec[6], 1.2);
        assert_eq!(vec[7], 0.5);
    }

    #[test]
    fn test_row_matches_column_order() {
        let request = sample_request();
        let row = request_to_row(&request);
        assert_eq!(row.len(), COLUMN_NAMES.len());
        assert_eq!(
            row,
            vec!["New Game", "PS4", "Action", "EA", "2022", "1.0", "0.8", "1.2", "0.5"]
        );
    }
}
