//! Command implementations

mod apply;
mod known_repos;
mod plan;

pub use apply::run_apply;
pub use known_repos::run_known_repos;
pub use plan::run_plan;
