#![deny(warnings)]
pub mod combin;
pub mod model;
pub mod prob;

pub use combin::{Compositions, binomial};
pub use model::bounds::{DrawBounds, ResolvedBounds};
pub use model::pool::CardPool;
pub use prob::{DrawError, at_least_draw, exact_draw, joint_count, joint_probability};

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "mulligan"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
