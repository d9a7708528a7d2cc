//! Supporting utilities used by models.
//!
//! These modules are general-purpose building blocks: numeric constraints,
//! unit extensions, and result plotting. They carry no process physics.

pub mod constraint;
pub mod plot;
pub mod units;
