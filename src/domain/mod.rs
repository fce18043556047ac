pub mod comment;
pub mod fallback;
pub mod listing;
pub mod normalize;

pub use comment::Comment;
pub use fallback::fallback_places;
pub use listing::Listing;
pub use normalize::{normalize, MISSING_ADDRESS};
