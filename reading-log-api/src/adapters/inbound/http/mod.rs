//! HTTP request and response shapes for the entry API.

mod requests;
mod responses;

pub use requests::*;
pub use responses::*;
