//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for [`Core`](crate::Core) construction: just
//! parameter packing, no build steps, no defaults, no hidden logic.
//! 仅用于参数打包，无构建步骤、无默认值、无隐藏逻辑。

use std::sync::Arc;

use rb_core::ports::{
    AboutStorePort, ImageNormalizerPort, PhotoStorePort, PickerPort, ReviewStorePort, ToastPort,
    UploadStorePort,
};

/// All ports the use cases need. Every field is required.
/// 所有依赖都是必需的。
pub struct AppDeps {
    // Ingestion dependencies / 图像摄取依赖
    pub normalizer: Arc<dyn ImageNormalizerPort>,

    // Remote store dependencies / 远程存储依赖
    pub reviews: Arc<dyn ReviewStorePort>,
    pub photos: Arc<dyn PhotoStorePort>,
    pub about: Arc<dyn AboutStorePort>,
    pub uploads: Arc<dyn UploadStorePort>,

    // Presentation dependencies / 界面依赖
    pub toasts: Arc<dyn ToastPort>,
    pub picker: Arc<dyn PickerPort>,
}
