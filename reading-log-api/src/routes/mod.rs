pub(crate) mod entries;
pub(crate) mod error;

pub(crate) use error::ApiError;
