//! Performance module - growth indexing and benchmark comparison.

pub mod growth_calculator;
pub mod performance_model;
pub mod performance_service;

#[cfg(test)]
mod performance_service_tests;

pub use growth_calculator::{interpolate_two_point, normalize_to_base_100, percent_change};
pub use performance_model::*;
pub use performance_service::{compare_with_benchmarks, PerformanceService, PerformanceServiceTrait};
