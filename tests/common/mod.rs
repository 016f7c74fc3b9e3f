// SPDX-License-Identifier: MPL-2.0
//! In-memory platform used by the integration tests.
//!
//! Every fake records what it was asked to do so tests can assert on the
//! channel actually used, not only on the returned result.

#![allow(dead_code)]

use async_trait::async_trait;
use lens_share::application::distribution::Distributor;
use lens_share::application::port::{
    Clipboard, DownloadTarget, FetchedBody, NativeShare, ObjectHandle, Platform, PlatformError,
    PrintSurface, SaveSource, SavedDownload, SecondarySurface, SharePayload, Transport,
};
use lens_share::domain::export::ConversionError;
use lens_share::domain::resource::BinaryObject;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 1x1 transparent PNG.
pub const PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

pub fn inline_png() -> String {
    format!("data:image/png;base64,{PNG_BASE64}")
}

pub const REMOTE: &str = "https://example.com/gallery/a.jpg";

// =============================================================================
// Transport
// =============================================================================

pub struct FakeTransport {
    pub fetches: AtomicUsize,
    response: Result<FetchedBody, ConversionError>,
}

impl FakeTransport {
    pub fn ok(bytes: &[u8], media_type: &str) -> Self {
        Self {
            fetches: AtomicUsize::new(0),
            response: Ok(FetchedBody {
                bytes: bytes.to_vec(),
                media_type: Some(media_type.to_string()),
            }),
        }
    }

    pub fn failing(error: ConversionError) -> Self {
        Self {
            fetches: AtomicUsize::new(0),
            response: Err(error),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn fetch(&self, _locator: &str) -> Result<FetchedBody, ConversionError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

// =============================================================================
// Clipboard
// =============================================================================

#[derive(Default)]
pub struct FakeClipboard {
    pub text_available: AtomicBool,
    pub binary_available: AtomicBool,
    pub fail_text: bool,
    pub fail_binary: bool,
    pub texts: Mutex<Vec<String>>,
    pub binaries: Mutex<Vec<BinaryObject>>,
}

impl FakeClipboard {
    pub fn new(text: bool, binary: bool) -> Self {
        Self {
            text_available: AtomicBool::new(text),
            binary_available: AtomicBool::new(binary),
            ..Self::default()
        }
    }

    /// Changes what the clipboard reports between two operations.
    pub fn set_available(&self, text: bool, binary: bool) {
        self.text_available.store(text, Ordering::SeqCst);
        self.binary_available.store(binary, Ordering::SeqCst);
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().expect("lock").clone()
    }

    pub fn binaries(&self) -> Vec<BinaryObject> {
        self.binaries.lock().expect("lock").clone()
    }
}

#[async_trait]
impl Clipboard for FakeClipboard {
    fn can_write_text(&self) -> bool {
        self.text_available.load(Ordering::SeqCst)
    }

    fn can_write_binary(&self) -> bool {
        self.binary_available.load(Ordering::SeqCst)
    }

    async fn write_text(&self, text: &str) -> Result<(), PlatformError> {
        if self.fail_text {
            return Err(PlatformError::Failed("text write denied".into()));
        }
        self.texts.lock().expect("lock").push(text.to_string());
        Ok(())
    }

    async fn write_binary(&self, object: &BinaryObject) -> Result<(), PlatformError> {
        if self.fail_binary {
            return Err(PlatformError::Failed("binary write denied".into()));
        }
        self.binaries.lock().expect("lock").push(object.clone());
        Ok(())
    }
}

// =============================================================================
// Native share
// =============================================================================

pub struct FakeShare {
    pub available: bool,
    pub outcome: Result<(), PlatformError>,
    pub shared: Mutex<Vec<SharePayload>>,
}

impl FakeShare {
    pub fn new(available: bool, outcome: Result<(), PlatformError>) -> Self {
        Self {
            available,
            outcome,
            shared: Mutex::new(Vec::new()),
        }
    }

    pub fn shared(&self) -> Vec<SharePayload> {
        self.shared.lock().expect("lock").clone()
    }
}

#[async_trait]
impl NativeShare for FakeShare {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn share(&self, payload: SharePayload) -> Result<(), PlatformError> {
        self.shared.lock().expect("lock").push(payload);
        self.outcome.clone()
    }
}

// =============================================================================
// Downloads
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Saved {
    Handle(u64),
    Locator(String),
}

#[derive(Default)]
pub struct FakeDownloads {
    pub fail_save: bool,
    next_id: AtomicU64,
    pub live_handles: AtomicUsize,
    pub saves: Mutex<Vec<(Saved, String)>>,
}

impl FakeDownloads {
    pub fn failing() -> Self {
        Self {
            fail_save: true,
            ..Self::default()
        }
    }

    pub fn live(&self) -> usize {
        self.live_handles.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> Vec<(Saved, String)> {
        self.saves.lock().expect("lock").clone()
    }
}

#[async_trait]
impl DownloadTarget for FakeDownloads {
    fn create_handle(&self, _object: &BinaryObject) -> Result<ObjectHandle, PlatformError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.live_handles.fetch_add(1, Ordering::SeqCst);
        Ok(ObjectHandle::new(id, format!("memory://{id}")))
    }

    async fn save(
        &self,
        source: SaveSource<'_>,
        file_name: &str,
    ) -> Result<SavedDownload, PlatformError> {
        if self.fail_save {
            return Err(PlatformError::Failed("disk full".into()));
        }
        let saved = match source {
            SaveSource::Handle(handle) => Saved::Handle(handle.id()),
            SaveSource::Locator(locator) => Saved::Locator(locator.to_string()),
        };
        self.saves
            .lock()
            .expect("lock")
            .push((saved, file_name.to_string()));
        Ok(SavedDownload {
            file_name: file_name.to_string(),
            path: None,
        })
    }

    fn release(&self, _handle: ObjectHandle) {
        self.live_handles.fetch_sub(1, Ordering::SeqCst);
    }
}

// =============================================================================
// Print
// =============================================================================

#[derive(Default)]
pub struct FakePrint {
    pub blocked: bool,
    pub documents: Arc<Mutex<Vec<String>>>,
}

impl FakePrint {
    pub fn blocked() -> Self {
        Self {
            blocked: true,
            ..Self::default()
        }
    }

    pub fn documents(&self) -> Vec<String> {
        self.documents.lock().expect("lock").clone()
    }
}

impl PrintSurface for FakePrint {
    fn open(&self) -> Option<Box<dyn SecondarySurface>> {
        if self.blocked {
            return None;
        }
        Some(Box::new(FakeSurface {
            buffer: String::new(),
            sink: Arc::clone(&self.documents),
        }))
    }
}

struct FakeSurface {
    buffer: String,
    sink: Arc<Mutex<Vec<String>>>,
}

impl SecondarySurface for FakeSurface {
    fn write_document(&mut self, markup: &str) -> Result<(), PlatformError> {
        self.buffer.push_str(markup);
        Ok(())
    }

    fn close_document(self: Box<Self>) -> Result<(), PlatformError> {
        self.sink.lock().expect("lock").push(self.buffer);
        Ok(())
    }
}

// =============================================================================
// Platform
// =============================================================================

/// Handles on every fake so tests can inspect them after an operation.
pub struct Fakes {
    pub transport: Arc<FakeTransport>,
    pub clipboard: Arc<FakeClipboard>,
    pub share: Arc<FakeShare>,
    pub downloads: Arc<FakeDownloads>,
    pub print: Arc<FakePrint>,
}

impl Default for Fakes {
    /// Text and binary clipboard available, no native share.
    fn default() -> Self {
        Self {
            transport: Arc::new(FakeTransport::ok(b"remote-bytes", "image/jpeg")),
            clipboard: Arc::new(FakeClipboard::new(true, true)),
            share: Arc::new(FakeShare::new(false, Ok(()))),
            downloads: Arc::new(FakeDownloads::default()),
            print: Arc::new(FakePrint::default()),
        }
    }
}

impl Fakes {
    pub fn platform(&self) -> Platform {
        Platform {
            transport: self.transport.clone(),
            clipboard: self.clipboard.clone(),
            share: self.share.clone(),
            downloads: self.downloads.clone(),
            print: self.print.clone(),
        }
    }

    pub fn distributor(&self) -> Distributor {
        Distributor::new(self.platform())
    }
}
