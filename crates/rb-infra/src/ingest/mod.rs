pub mod normalizer;

pub use normalizer::RasterNormalizer;
