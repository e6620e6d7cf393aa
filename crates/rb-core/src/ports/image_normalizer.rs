use crate::media::{IngestionError, NormalizedImage, RawImageInput};

/// Normalizer port turning a raw selection into an inline-encoded image.
///
/// 将原始文件选择转换为内联编码图像的规范化端口。
///
/// The implementation owns the longest-edge bound and the quality
/// factor; callers hand over bytes and get back a bounded, recompressed
/// representation or a terminal [`IngestionError`].
#[async_trait::async_trait]
pub trait ImageNormalizerPort: Send + Sync {
    /// Decode, clamp the dominant axis, and re-encode.
    ///
    /// 解码、按主轴缩放并重新编码。
    async fn normalize(&self, raw: &RawImageInput) -> Result<NormalizedImage, IngestionError>;
}
