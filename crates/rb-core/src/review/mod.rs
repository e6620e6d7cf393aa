pub mod category;
pub mod draft;
pub mod record;
pub mod stats;

pub use category::{Category, UnknownCategory};
pub use draft::{DraftError, ReviewDraft};
pub use record::Review;
pub use stats::{CategoryStats, OverallStats, ReviewStats};
