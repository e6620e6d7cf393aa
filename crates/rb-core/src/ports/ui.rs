use crate::toast::Toast;

/// Notification sink for transient user-facing messages.
///
/// 面向用户的临时消息通知端口。
///
/// Fire-and-forget: a toast that fails to render must never fail the
/// flow that raised it.
#[async_trait::async_trait]
pub trait ToastPort: Send + Sync {
    async fn show(&self, toast: Toast);
}

/// The file-picker control. Clearing the selection lets the same file be
/// picked again without the control treating it as unchanged.
pub trait PickerPort: Send + Sync {
    fn clear_selection(&self);
}
