//! Tests for [`UploadCoordinator`] - one selection, start to finish.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rb_app::{SelectionOutcome, UploadCoordinator};
use rb_core::media::{IngestionError, MediaType, NormalizedImage, RawImageInput};
use rb_core::ports::{ImageNormalizerPort, PickerPort, ToastPort};
use rb_core::toast::{Toast, ToastKind};

// Mock implementations for rb-app tests

struct StubNormalizer {
    response: Result<NormalizedImage, IngestionError>,
}

#[async_trait]
impl ImageNormalizerPort for StubNormalizer {
    async fn normalize(&self, _raw: &RawImageInput) -> Result<NormalizedImage, IngestionError> {
        self.response.clone()
    }
}

#[derive(Default)]
struct RecordingToasts {
    shown: Mutex<Vec<Toast>>,
}

impl RecordingToasts {
    fn titles(&self) -> Vec<String> {
        self.shown.lock().unwrap().iter().map(|t| t.title.clone()).collect()
    }
}

#[async_trait]
impl ToastPort for RecordingToasts {
    async fn show(&self, toast: Toast) {
        self.shown.lock().unwrap().push(toast);
    }
}

#[derive(Default)]
struct RecordingPicker {
    cleared: AtomicUsize,
}

impl PickerPort for RecordingPicker {
    fn clear_selection(&self) {
        self.cleared.fetch_add(1, Ordering::SeqCst);
    }
}

fn normalized() -> NormalizedImage {
    NormalizedImage::from_encoded_bytes(MediaType::image_jpeg(), 800, 600, &[0xFF, 0xD8])
}

fn selection() -> RawImageInput {
    RawImageInput::new(vec![1, 2, 3], MediaType::image_png())
}

fn coordinator(
    response: Result<NormalizedImage, IngestionError>,
) -> (UploadCoordinator, Arc<RecordingToasts>, Arc<RecordingPicker>) {
    let toasts = Arc::new(RecordingToasts::default());
    let picker = Arc::new(RecordingPicker::default());
    let coordinator = UploadCoordinator::new(
        Arc::new(StubNormalizer { response }),
        toasts.clone(),
        picker.clone(),
    );
    (coordinator, toasts, picker)
}

#[tokio::test]
async fn test_success_delivers_image_to_consumer() {
    let (coordinator, toasts, picker) = coordinator(Ok(normalized()));
    let received = Arc::new(Mutex::new(None));

    let captured = received.clone();
    let outcome = coordinator
        .handle_selection(Some(selection()), move |image| {
            *captured.lock().unwrap() = Some(image);
        })
        .await;

    assert!(matches!(outcome, SelectionOutcome::Completed));
    let image = received.lock().unwrap().take().expect("consumer was not invoked");
    assert_eq!((image.width, image.height), (800, 600));

    let shown = toasts.shown.lock().unwrap();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, ToastKind::Info);

    assert_eq!(picker.cleared.load(Ordering::SeqCst), 1);
    assert!(!coordinator.is_uploading());
}

#[tokio::test]
async fn test_non_image_never_reaches_consumer() {
    let err = IngestionError::NotAnImage(MediaType("text/plain".into()));
    let (coordinator, toasts, picker) = coordinator(Err(err));
    let consumed = Arc::new(AtomicBool::new(false));

    let flag = consumed.clone();
    let outcome = coordinator
        .handle_selection(Some(selection()), move |_| {
            flag.store(true, Ordering::SeqCst);
        })
        .await;

    assert!(matches!(
        outcome,
        SelectionOutcome::Rejected(IngestionError::NotAnImage(_))
    ));
    assert!(!consumed.load(Ordering::SeqCst));
    // The not-an-image case gets its own message
    assert_eq!(toasts.titles(), vec!["Not an image"]);
    assert!(toasts.shown.lock().unwrap()[0].is_error());
    assert_eq!(picker.cleared.load(Ordering::SeqCst), 1);
    assert!(!coordinator.is_uploading());
}

#[tokio::test]
async fn test_decode_failure_is_terminal_for_the_selection() {
    let err = IngestionError::DecodeFailure("truncated stream".into());
    let (coordinator, toasts, picker) = coordinator(Err(err));

    let outcome = coordinator.handle_selection(Some(selection()), |_| {}).await;

    assert!(matches!(
        outcome,
        SelectionOutcome::Rejected(IngestionError::DecodeFailure(_))
    ));
    assert_eq!(toasts.titles(), vec!["Upload failed"]);
    assert_eq!(picker.cleared.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_dismissed_picker_is_a_no_op() {
    let (coordinator, toasts, picker) = coordinator(Ok(normalized()));
    let consumed = Arc::new(AtomicBool::new(false));

    let flag = consumed.clone();
    let outcome = coordinator
        .handle_selection(None, move |_| {
            flag.store(true, Ordering::SeqCst);
        })
        .await;

    assert!(matches!(outcome, SelectionOutcome::Cancelled));
    assert!(!consumed.load(Ordering::SeqCst));
    assert!(toasts.shown.lock().unwrap().is_empty());
    // Nothing was selected, so there is nothing to reset
    assert_eq!(picker.cleared.load(Ordering::SeqCst), 0);
    assert!(!coordinator.is_uploading());
}

#[tokio::test]
async fn test_same_file_can_be_reselected_after_failure() {
    let err = IngestionError::DecodeFailure("bad header".into());
    let (coordinator, _toasts, picker) = coordinator(Err(err));

    for _ in 0..2 {
        let outcome = coordinator.handle_selection(Some(selection()), |_| {}).await;
        assert!(matches!(outcome, SelectionOutcome::Rejected(_)));
        assert!(!coordinator.is_uploading());
    }
    // A reset after each attempt is what makes the second selection of
    // the same file reach the coordinator
    assert_eq!(picker.cleared.load(Ordering::SeqCst), 2);
}

struct BlockingNormalizer {
    gate: Arc<tokio::sync::Notify>,
    image: NormalizedImage,
}

#[async_trait]
impl ImageNormalizerPort for BlockingNormalizer {
    async fn normalize(&self, _raw: &RawImageInput) -> Result<NormalizedImage, IngestionError> {
        self.gate.notified().await;
        Ok(self.image.clone())
    }
}

#[tokio::test]
async fn test_busy_flag_tracks_normalization() {
    let gate = Arc::new(tokio::sync::Notify::new());
    let coordinator = Arc::new(UploadCoordinator::new(
        Arc::new(BlockingNormalizer {
            gate: gate.clone(),
            image: normalized(),
        }),
        Arc::new(RecordingToasts::default()),
        Arc::new(RecordingPicker::default()),
    ));
    assert!(!coordinator.is_uploading());

    let task = tokio::spawn({
        let coordinator = coordinator.clone();
        async move { coordinator.handle_selection(Some(selection()), |_| {}).await }
    });

    // Wait until the coordinator has entered the normalizing state
    while !coordinator.is_uploading() {
        tokio::task::yield_now().await;
    }

    gate.notify_one();
    let outcome = task.await.unwrap();
    assert!(matches!(outcome, SelectionOutcome::Completed));
    assert!(!coordinator.is_uploading());
}

#[tokio::test]
async fn test_end_to_end_with_raster_normalizer() {
    let normalizer = rb_infra::RasterNormalizer::new(rb_core::config::IngestConfig {
        max_dimension: 800,
        jpeg_quality: 0.7,
        max_input_bytes: None,
    });
    let toasts = Arc::new(RecordingToasts::default());
    let picker = Arc::new(RecordingPicker::default());
    let coordinator = UploadCoordinator::new(Arc::new(normalizer), toasts.clone(), picker.clone());

    let raster = image::RgbImage::new(1600, 1200);
    let mut png_bytes = Vec::new();
    image::DynamicImage::ImageRgb8(raster)
        .write_to(
            &mut std::io::Cursor::new(&mut png_bytes),
            image::ImageFormat::Png,
        )
        .unwrap();

    let received = Arc::new(Mutex::new(None));
    let captured = received.clone();
    let outcome = coordinator
        .handle_selection(
            Some(RawImageInput::new(png_bytes, MediaType::image_png())),
            move |image| {
                *captured.lock().unwrap() = Some(image);
            },
        )
        .await;

    assert!(matches!(outcome, SelectionOutcome::Completed));
    let image = received.lock().unwrap().take().unwrap();
    assert_eq!((image.width, image.height), (800, 600));
    assert!(image.data_url.starts_with("data:image/jpeg;base64,"));
    assert_eq!(picker.cleared.load(Ordering::SeqCst), 1);
}
