pub mod draft_model;
pub mod draft_normalizer;


pub use draft_model::{DraftEstimate, DraftLineItem, DraftTrend};
pub use draft_normalizer::normalize_document;
