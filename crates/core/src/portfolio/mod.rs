pub mod allocation;
pub mod holdings;
pub mod performance;
pub mod valuation;

pub use allocation::*;
pub use holdings::*;
pub use performance::*;
pub use valuation::*;
