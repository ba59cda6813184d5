//! Typed records shared between the storage and HTTP layers.

pub mod request;
pub mod response;
pub mod tracking;
