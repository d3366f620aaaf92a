//! File I/O for durable star units.
//!
//! This module handles:
//! - Writing units with atomic replace
//! - Reading units with format and content validation

mod load;
mod save;

pub(crate) use load::read_unit;
pub(crate) use save::write_unit;
