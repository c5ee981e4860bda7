//! Menu categorization core
//!
//! Everything in this module is pure: rows come in from `crate::queries`,
//! a categorized day menu comes out. No store access happens here, which
//! keeps the classification and merge rules testable without a database.

pub mod aggregate;
pub mod classify;
pub mod model;
pub mod week;

pub use aggregate::aggregate;
pub use classify::{classify, Category};
pub use model::{DayMenu, MainMenuRow, MenuItem, SubMenuRow};
