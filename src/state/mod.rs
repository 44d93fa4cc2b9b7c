//! State module for tracking a site discovery run
//!
//! # Components
//!
//! - `RunStage`: the forward-only stage machine of one run
//! - `ExtractionState`: emails, phones, discovered pages and seen links of one run

mod extraction_state;
mod run_stage;

// Re-export main types
pub use crate::extract::FrameworkKind;
pub use extraction_state::ExtractionState;
pub use run_stage::RunStage;
