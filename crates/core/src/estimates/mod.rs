pub mod estimate_model;
pub mod estimate_service;
pub mod estimates_errors;


pub use estimate_model::{
    CategoryTrend, DocumentEstimate, LineItem, NewLineItem, ProjectEstimate, TrendDirection,
};
pub use estimate_service::EstimateService;
pub use estimates_errors::EstimateError;
