use super::MediaType;

/// One user-selected file, as handed over by the picker.
///
/// Ephemeral: lives for the duration of a single ingestion call and is
/// owned by the coordinator invocation that received it.
#[derive(Debug, Clone)]
pub struct RawImageInput {
    pub bytes: Vec<u8>,
    pub media_type: MediaType,
}

impl RawImageInput {
    pub fn new(bytes: Vec<u8>, media_type: MediaType) -> Self {
        Self { bytes, media_type }
    }

    /// Declared byte length of the selection.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
