use crate::domain::catalog::{Genre, Platform, Publisher};
use crate::domain::errors::PredictionError;
use serde::{Deserialize, Serialize};

/// One submission's worth of input: built once, consumed by the predictor
/// exactly once, discarded after render. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub name: String,
    pub platform: Platform,
    pub genre: Genre,
    pub publisher: Publisher,
    pub year: u16,
    pub na_sales: f64,
    pub eu_sales: f64,
    pub jp_sales: f64,
    pub other_sales: f64,
}

impl PredictionRequest {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// Arithmetic total of the four regional inputs. Display-only; never
    /// checked against the model's prediction.
    pub fn regional_sum(&self) -> f64 {
        self.na_sales + self.eu_sales + self.jp_sales + self.other_sales
    }
}

/// Collects the nine field values into a record. No transformation, encoding
/// or derived-feature computation happens here; that belongs to the
/// preprocessing inside the external predictor.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    name: Option<String>,
    platform: Option<Platform>,
    genre: Option<Genre>,
    publisher: Option<Publisher>,
    year: Option<u16>,
    na_sales: Option<f64>,
    eu_sales: Option<f64>,
    jp_sales: Option<f64>,
    other_sales: Option<f64>,
}

impl RequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn publisher(mut self, publisher: Publisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn na_sales(mut self, na_sales: f64) -> Self {
        self.na_sales = Some(na_sales);
        self
    }

    pub fn eu_sales(mut self, eu_sales: f64) -> Self {
        self.eu_sales = Some(eu_sales);
        self
    }

    pub fn jp_sales(mut self, jp_sales: f64) -> Self {
        self.jp_sales = Some(jp_sales);
        self
    }

    pub fn other_sales(mut self, other_sales: f64) -> Self {
        self.other_sales = Some(other_sales);
        self
    }

    /// Fails only when a field was never supplied. The form always provides
    /// defaults, so this path is not expected in normal operation.
    pub fn build(self) -> Result<PredictionRequest, PredictionError> {
        Ok(PredictionRequest {
            name: self
                .name
                .ok_or(PredictionError::MissingField { field: "Name" })?,
            platform: self
                .platform
                .ok_or(PredictionError::MissingField { field: "Platform" })?,
            genre: self
                .genre
                .ok_or(PredictionError::MissingField { field: "Genre" })?,
            publisher: self
                .publisher
                .ok_or(PredictionError::MissingField { field: "Publisher" })?,
            year: self
                .year
                .ok_or(PredictionError::MissingField { field: "Year" })?,
            na_sales: self
                .na_sales
                .ok_or(PredictionError::MissingField { field: "NA_Sales" })?,
            eu_sales: self
                .eu_sales
                .ok_or(PredictionError::MissingField { field: "EU_Sales" })?,
            jp_sales: self
                .jp_sales
                .ok_or(PredictionError::MissingField { field: "JP_Sales" })?,
            other_sales: self
                .other_sales
                .ok_or(PredictionError::MissingField { field: "Other_Sales" })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> RequestBuilder {
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
    }

    #[test]
    fn test_builder_preserves_values() {
        let request = full_builder().build().unwrap();
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
    fn test_missing_field_fails_build() {
        let err = PredictionRequest::builder()
            .platform(Platform::Pc)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            PredictionError::MissingField { field: "Name" }
        ));
    }

    #[test]
    fn test_regional_sum() {
        let request = full_builder().build().unwrap();
        assert!((request.regional_sum() - 3.5).abs() < 1e-9);
        assert_eq!(format!("{:.2}", request.regional_sum()), "3.50");
    }
}
