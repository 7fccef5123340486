//! Command handlers for the fcpx-markers binary.

pub mod extract;
