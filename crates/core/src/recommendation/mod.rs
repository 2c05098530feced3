//! Recommendation module - risk policies, models, and the service.

mod recommendation_constants;
mod recommendation_model;
mod recommendation_service;


pub use recommendation_constants::{
    risk_profile, RiskProfile, HIGH_RISK_PROFILE, LOW_RISK_PROFILE, MEDIUM_RISK_PROFILE,
    RECOMMENDATION_NOTE,
};
pub use recommendation_model::{
    AssetAllocation, CorpusRange, InstrumentType, RecommendationRequest, RecommendationResult,
    RiskLevel,
};
pub use recommendation_service::{RecommendationService, RecommendationServiceTrait};
