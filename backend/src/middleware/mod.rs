//! Request middleware.

pub mod cors;
pub mod trace;

pub use cors::any_origin_cors;
pub use trace::Trace;
