/// Rates with an absolute monthly value below this are treated as zero in
/// the annuity formulas, which divide by the monthly rate.
pub const NEAR_ZERO_RATE: f64 = 1e-9;

/// Decimal precision for derived percentage values
pub const PERCENT_DECIMAL_PRECISION: u32 = 2;
