//! Tests for the slideshow photo and about-text flows.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rb_app::{EditAbout, ManagePhotos, SaveOutcome};
use rb_core::about::{AboutError, AboutText};
use rb_core::photo::{ProfilePhoto, SlideshowState};
use rb_core::ports::{AboutStorePort, PhotoStorePort, ToastPort};
use rb_core::toast::{Toast, ToastKind};

// Mock implementations for rb-app tests

struct MockPhotoStore {
    photos: Mutex<Vec<ProfilePhoto>>,
    add_calls: AtomicUsize,
}

impl MockPhotoStore {
    fn with_photos(photos: Vec<ProfilePhoto>) -> Self {
        Self {
            photos: Mutex::new(photos),
            add_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PhotoStorePort for MockPhotoStore {
    async fn list(&self) -> Result<Vec<ProfilePhoto>> {
        Ok(self.photos.lock().unwrap().clone())
    }

    async fn add(&self, photo_url: &str) -> Result<ProfilePhoto> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        let mut photos = self.photos.lock().unwrap();
        let next_order = photos.iter().map(|p| p.display_order).max().unwrap_or(0) + 1;
        let photo = ProfilePhoto {
            id: next_order as i64,
            photo_url: photo_url.to_string(),
            display_order: next_order,
            created_at: Utc::now(),
        };
        photos.push(photo.clone());
        Ok(photo)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.photos.lock().unwrap().retain(|photo| photo.id != id);
        Ok(())
    }
}

struct MockAboutStore {
    content: Mutex<String>,
    update_calls: AtomicUsize,
}

#[async_trait]
impl AboutStorePort for MockAboutStore {
    async fn get(&self) -> Result<String> {
        Ok(self.content.lock().unwrap().clone())
    }

    async fn update(&self, content: &AboutText) -> Result<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        *self.content.lock().unwrap() = content.as_str().to_string();
        Ok(())
    }
}

#[derive(Default)]
struct RecordingToasts {
    shown: Mutex<Vec<Toast>>,
}

#[async_trait]
impl ToastPort for RecordingToasts {
    async fn show(&self, toast: Toast) {
        self.shown.lock().unwrap().push(toast);
    }
}

fn photo(id: i64, display_order: i32) -> ProfilePhoto {
    ProfilePhoto {
        id,
        photo_url: format!("https://img/{id}.jpg"),
        display_order,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_add_refreshes_the_list() {
    let store = Arc::new(MockPhotoStore::with_photos(vec![photo(1, 1)]));
    let toasts = Arc::new(RecordingToasts::default());
    let photos = ManagePhotos::new(store.clone(), toasts.clone());

    let refreshed = photos.add("https://img/new.jpg").await.unwrap();

    assert_eq!(refreshed.len(), 2);
    assert_eq!(refreshed[1].photo_url, "https://img/new.jpg");
    assert_eq!(store.add_calls.load(Ordering::SeqCst), 1);
    assert_eq!(toasts.shown.lock().unwrap()[0].kind, ToastKind::Info);
}

#[tokio::test]
async fn test_blank_url_is_a_silent_no_op() {
    let store = Arc::new(MockPhotoStore::with_photos(vec![photo(1, 1)]));
    let toasts = Arc::new(RecordingToasts::default());
    let photos = ManagePhotos::new(store.clone(), toasts.clone());

    let refreshed = photos.add("   ").await.unwrap();

    assert_eq!(refreshed.len(), 1);
    assert_eq!(store.add_calls.load(Ordering::SeqCst), 0);
    assert!(toasts.shown.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_resyncs_the_slideshow() {
    let store = Arc::new(MockPhotoStore::with_photos(vec![
        photo(1, 1),
        photo(2, 2),
        photo(3, 3),
    ]));
    let toasts = Arc::new(RecordingToasts::default());
    let photos = ManagePhotos::new(store, toasts);

    let mut slideshow = SlideshowState::new(3);
    slideshow.select(2);

    let refreshed = photos.remove(3).await.unwrap();
    slideshow.resync(refreshed.len());

    assert_eq!(refreshed.len(), 2);
    // The cursor pointed past the end of the refreshed list
    assert_eq!(slideshow.current(), 0);
}

#[tokio::test]
async fn test_blank_about_text_never_reaches_the_store() {
    let store = Arc::new(MockAboutStore {
        content: Mutex::new("old text".into()),
        update_calls: AtomicUsize::new(0),
    });
    let toasts = Arc::new(RecordingToasts::default());
    let about = EditAbout::new(store.clone(), toasts.clone());

    let outcome = about.save("  \n ").await.unwrap();

    assert_eq!(outcome, SaveOutcome::Invalid(AboutError::Empty));
    assert_eq!(store.update_calls.load(Ordering::SeqCst), 0);
    assert_eq!(about.current().await.unwrap(), "old text");
    assert_eq!(toasts.shown.lock().unwrap()[0].kind, ToastKind::Error);
}

#[tokio::test]
async fn test_saved_about_text_replaces_the_old_one() {
    let store = Arc::new(MockAboutStore {
        content: Mutex::new("old text".into()),
        update_calls: AtomicUsize::new(0),
    });
    let toasts = Arc::new(RecordingToasts::default());
    let about = EditAbout::new(store.clone(), toasts.clone());

    let outcome = about.save("A fresh introduction.").await.unwrap();

    assert_eq!(outcome, SaveOutcome::Saved);
    assert_eq!(store.update_calls.load(Ordering::SeqCst), 1);
    assert_eq!(about.current().await.unwrap(), "A fresh introduction.");
    assert_eq!(toasts.shown.lock().unwrap()[0].kind, ToastKind::Info);
}
