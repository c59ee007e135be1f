//! Route Handlers

pub mod assess;
pub mod factors;
pub mod wellness;
