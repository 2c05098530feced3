//! Planning module - compound-growth projections, goal plans, and
//! return-range parsing.

mod planning_model;
mod planning_service;
mod return_range;
mod time_value;


pub use planning_model::{Goal, GoalPlan, SipProjection};
pub use planning_service::{plan_goal, project_sip};
pub use return_range::{parse_return_range, ReturnRange};
pub use time_value::{lumpsum_future_value, required_monthly_sip, sip_future_value};
