//! Database patches
//!
//! Each patch is gated by one config flag and edits host-owned tables in
//! place. [`apply`] runs the enabled ones in a fixed order.

mod applier;
mod catalogue;
pub mod hideout;
pub mod items;
pub mod traders;


pub use applier::*;
pub use catalogue::*;
