mod entry;
mod ids;
mod suggestions;

pub use entry::*;
pub use ids::*;
pub use suggestions::*;
