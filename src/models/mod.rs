//! Typed records shared between the HTTP and database layers.

pub mod log;
