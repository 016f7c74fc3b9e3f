// SPDX-License-Identifier: MPL-2.0
//! Print surface backed by the system browser.
//!
//! The secondary surface is an HTML document written to the temp directory
//! and handed to the platform opener once complete. The document's load
//! trigger opens the browser's print dialog.

use crate::application::port::{PlatformError, PrintSurface, SecondarySurface};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Opens print documents in the default browser.
#[derive(Debug)]
pub struct BrowserPrintSurface {
    directory: PathBuf,
    next_id: AtomicU64,
}

impl BrowserPrintSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::in_directory(std::env::temp_dir().join("lens-share-print"))
    }

    /// Writes print documents into `directory`.
    #[must_use]
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for BrowserPrintSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintSurface for BrowserPrintSurface {
    fn open(&self) -> Option<Box<dyn SecondarySurface>> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let path = self
            .directory
            .join(format!("print-{}-{id}.html", std::process::id()));

        let file = std::fs::create_dir_all(&self.directory)
            .and_then(|()| File::create(&path))
            .map_err(|e| tracing::warn!(path = %path.display(), error = %e, "cannot create print document"))
            .ok()?;

        Some(Box::new(BrowserDocument {
            path,
            writer: BufWriter::new(file),
            launch: open_in_browser,
        }))
    }
}

/// A print document being written.
struct BrowserDocument {
    path: PathBuf,
    writer: BufWriter<File>,
    launch: fn(&Path) -> std::io::Result<()>,
}

impl SecondarySurface for BrowserDocument {
    fn write_document(&mut self, markup: &str) -> Result<(), PlatformError> {
        self.writer.write_all(markup.as_bytes())?;
        Ok(())
    }

    fn close_document(mut self: Box<Self>) -> Result<(), PlatformError> {
        self.writer.flush()?;
        (self.launch)(&self.path).map_err(|e| {
            PlatformError::Failed(format!("cannot open {}: {e}", self.path.display()))
        })
    }
}

#[cfg(target_os = "macos")]
fn open_in_browser(path: &Path) -> std::io::Result<()> {
    reap(std::process::Command::new("open").arg(path).spawn()?);
    Ok(())
}

#[cfg(target_os = "windows")]
fn open_in_browser(path: &Path) -> std::io::Result<()> {
    reap(
        std::process::Command::new("explorer")
            .arg(path)
            .spawn()?,
    );
    Ok(())
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_in_browser(path: &Path) -> std::io::Result<()> {
    reap(std::process::Command::new("xdg-open").arg(path).spawn()?);
    Ok(())
}

#[cfg(not(any(unix, target_os = "windows")))]
fn open_in_browser(_path: &Path) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "Printing is not supported on this platform",
    ))
}

/// Waits for the opener on a background thread so it does not linger.
#[cfg(any(unix, target_os = "windows"))]
fn reap(mut child: std::process::Child) {
    std::thread::spawn(move || {
        if let Err(err) = child.wait() {
            tracing::debug!(error = %err, "opener did not exit cleanly");
        }
    });
}
