//! Search request entities.

pub mod criteria;

pub use criteria::{Criterion, SearchCriteria};
