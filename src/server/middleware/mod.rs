//! Request processing layers shared by every route.

pub mod envelope;
pub mod panic;
pub mod request_context;
