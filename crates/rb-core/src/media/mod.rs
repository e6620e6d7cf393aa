pub mod error;
pub mod media_type;
pub mod normalized;
pub mod raw;

pub use error::IngestionError;
pub use media_type::MediaType;
pub use normalized::NormalizedImage;
pub use raw::RawImageInput;
