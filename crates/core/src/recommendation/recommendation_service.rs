//! Risk-based allocation and corpus recommendation.

use log::debug;

use crate::errors::{Result, ValidationError};
use crate::planning::lumpsum_future_value;
use crate::recommendation::recommendation_constants::{risk_profile, RECOMMENDATION_NOTE};
use crate::recommendation::{
    CorpusRange, InstrumentType, RecommendationRequest, RecommendationResult,
};

/// Trait for the recommendation service.
pub trait RecommendationServiceTrait: Send + Sync {
    /// Maps a validated request onto its risk profile: target allocation,
    /// expected-return band, projected corpus range, and suggestion lists
    /// filtered by instrument type.
    fn recommend(&self, request: &RecommendationRequest) -> Result<RecommendationResult>;
}

/// Stateless recommendation service; every call is independent.
#[derive(Debug, Default)]
pub struct RecommendationService;

impl RecommendationService {
    pub fn new() -> Self {
        RecommendationService
    }

    /// Whole-request validation. Risk and instrument type are already
    /// constrained by their enums at the deserialization boundary, so
    /// only the scalar fields can be out of range.
    fn validate(request: &RecommendationRequest) -> Result<()> {
        if !(request.horizon_years > 0.0) || !request.horizon_years.is_finite() {
            return Err(ValidationError::InvalidField {
                field: "horizonYears".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        if !(request.amount > 0.0) || !request.amount.is_finite() {
            return Err(ValidationError::InvalidField {
                field: "amount".to_string(),
                reason: "must be a positive amount".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl RecommendationServiceTrait for RecommendationService {
    fn recommend(&self, request: &RecommendationRequest) -> Result<RecommendationResult> {
        Self::validate(request)?;

        let profile = risk_profile(request.risk);
        let band = profile.return_band;
        debug!(
            "Recommending for {:?} risk over {} years",
            request.risk, request.horizon_years
        );

        let mid_rate = (band.low + band.high) / 2.0;
        let corpus_range = CorpusRange {
            low_fv: lumpsum_future_value(request.amount, band.low, request.horizon_years),
            mid_fv: lumpsum_future_value(request.amount, mid_rate, request.horizon_years),
            high_fv: lumpsum_future_value(request.amount, band.high, request.horizon_years),
        };

        let wants_stocks = matches!(
            request.instrument_type,
            InstrumentType::Stock | InstrumentType::Both
        );
        let wants_funds = matches!(
            request.instrument_type,
            InstrumentType::MutualFund | InstrumentType::Both
        );

        let stocks = if wants_stocks {
            profile.stocks.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };
        let mutual_funds = if wants_funds {
            profile.mutual_funds.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };

        Ok(RecommendationResult {
            allocation: profile.allocation,
            expected_return: format!("{}% – {}%", band.low, band.high),
            expected_return_range: band,
            corpus_range,
            stocks,
            mutual_funds,
            note: RECOMMENDATION_NOTE.to_string(),
        })
    }
}
