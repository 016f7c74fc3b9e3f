// SPDX-License-Identifier: MPL-2.0
//! Viewer state machine.
//!
//! The viewer is `Closed` until a resource is opened, then moves between
//! `Open` and `MenuOpen` as the export menu is toggled. Exports run as
//! background tasks tagged with the session that started them: when a task
//! completes after the viewer was closed (or reopened on another resource),
//! its result is still surfaced as a notification but never touches the
//! current state.

use super::preview::{self, Preview, PreviewError};
use crate::application::distribution::Distributor;
use crate::domain::export::{ExportAction, ExportResult};
use crate::domain::resource::ResourceReference;
use crate::domain::ui::{RotationAngle, ViewTransform};
use iced::Task;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one opening of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Request to show a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    /// Raw reference string, inline (`data:`) or remote.
    pub raw: String,
    /// Display name, also used to derive download file names.
    pub name: String,
}

impl OpenRequest {
    pub fn new(raw: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            name: name.into(),
        }
    }
}

/// Loading state of the session preview.
#[derive(Debug, Clone)]
pub enum PreviewState {
    Loading,
    Ready {
        original: Preview,
        rotations: HashMap<RotationAngle, Preview>,
    },
    Failed(PreviewError),
}

/// One opened resource with its view transform.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    reference: ResourceReference,
    name: String,
    transform: ViewTransform,
    preview: PreviewState,
}

impl Session {
    fn new(request: OpenRequest) -> Self {
        Self {
            id: SessionId::next(),
            reference: ResourceReference::new(request.raw),
            name: request.name,
            transform: ViewTransform::new(),
            preview: PreviewState::Loading,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn reference(&self) -> &ResourceReference {
        &self.reference
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    #[must_use]
    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    /// Natural (unrotated) size and the preview for the current rotation.
    #[must_use]
    pub fn displayed(&self) -> Option<(u32, u32, &Preview)> {
        match &self.preview {
            PreviewState::Ready {
                original,
                rotations,
            } => {
                let shown = rotations
                    .get(&self.transform.rotation())
                    .unwrap_or(original);
                Some((original.width, original.height, shown))
            }
            PreviewState::Loading | PreviewState::Failed(_) => None,
        }
    }

    fn rotate(&mut self) {
        self.transform.rotate();
        let angle = self.transform.rotation();
        if let PreviewState::Ready {
            original,
            rotations,
        } = &mut self.preview
        {
            if angle.is_rotated() && !rotations.contains_key(&angle) {
                rotations.insert(angle, original.rotated(angle));
            }
        }
    }

    fn set_preview(&mut self, result: Result<Preview, PreviewError>) {
        self.preview = match result {
            Ok(original) => {
                let mut rotations = HashMap::new();
                let angle = self.transform.rotation();
                if angle.is_rotated() {
                    rotations.insert(angle, original.rotated(angle));
                }
                PreviewState::Ready {
                    original,
                    rotations,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "preview unavailable");
                PreviewState::Failed(err)
            }
        };
    }
}

/// Viewer lifecycle.
#[derive(Debug, Clone, Default)]
pub enum ViewerState {
    Open(Session),
    MenuOpen(Session),
    #[default]
    Closed,
}

/// Data-free view of [`ViewerState`], handy for assertions and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Open,
    MenuOpen,
    Closed,
}

/// Area of the viewer receiving a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Dimmed area around the content.
    Backdrop,
    /// Toolbar and export menu.
    Controls,
    /// The rendered resource.
    Content,
    /// Caption strip under the content.
    Footer,
}

impl Region {
    /// Presses on the backdrop and the footer dismiss the viewer.
    #[must_use]
    pub fn closes_viewer(self) -> bool {
        matches!(self, Region::Backdrop | Region::Footer)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    PreviewLoaded(SessionId, Result<Preview, PreviewError>),
    ZoomIn,
    ZoomOut,
    Rotate,
    ToggleMenu,
    DismissMenu,
    Export(ExportAction),
    ExportFinished(SessionId, ExportResult),
    Pressed(Region),
    Close,
}

/// Side effects the application must handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// An export completed; surface its notification.
    Notify(ExportResult),
    /// The viewer was closed.
    Closed,
}

/// Owns the viewer state and launches export tasks.
#[derive(Debug)]
pub struct Controller {
    state: ViewerState,
    distributor: Distributor,
}

impl Controller {
    #[must_use]
    pub fn new(distributor: Distributor) -> Self {
        Self {
            state: ViewerState::Closed,
            distributor,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state {
            ViewerState::Open(_) => Phase::Open,
            ViewerState::MenuOpen(_) => Phase::MenuOpen,
            ViewerState::Closed => Phase::Closed,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            ViewerState::Open(session) | ViewerState::MenuOpen(session) => Some(session),
            ViewerState::Closed => None,
        }
    }

    #[must_use]
    pub fn distributor(&self) -> &Distributor {
        &self.distributor
    }

    /// Opens `request`, replacing any current session, and starts loading
    /// its preview.
    pub fn open(&mut self, request: OpenRequest) -> Task<Message> {
        let session = Session::new(request);
        let id = session.id;
        let reference = session.reference.clone();
        tracing::info!(name = %session.name, inline = reference.is_inline(), "viewer opened");

        self.state = ViewerState::Open(session);

        let converter = self.distributor.converter().clone();
        Task::perform(preview::load(converter, reference), move |result| {
            Message::PreviewLoaded(id, result)
        })
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::PreviewLoaded(id, result) => {
                if let Some(session) = self.session_mut(id) {
                    session.set_preview(result);
                }
                (Effect::None, Task::none())
            }
            Message::ZoomIn => {
                if let Some(session) = self.current_mut() {
                    session.transform.zoom_in();
                }
                (Effect::None, Task::none())
            }
            Message::ZoomOut => {
                if let Some(session) = self.current_mut() {
                    session.transform.zoom_out();
                }
                (Effect::None, Task::none())
            }
            Message::Rotate => {
                if let Some(session) = self.current_mut() {
                    session.rotate();
                }
                (Effect::None, Task::none())
            }
            Message::ToggleMenu => {
                self.state = match std::mem::take(&mut self.state) {
                    ViewerState::Open(session) => ViewerState::MenuOpen(session),
                    ViewerState::MenuOpen(session) => ViewerState::Open(session),
                    ViewerState::Closed => ViewerState::Closed,
                };
                (Effect::None, Task::none())
            }
            Message::DismissMenu => {
                self.close_menu();
                (Effect::None, Task::none())
            }
            Message::Export(action) => (Effect::None, self.start_export(action)),
            Message::ExportFinished(id, result) => {
                if self.session().is_some_and(|session| session.id == id) {
                    self.close_menu();
                } else {
                    tracing::debug!(
                        action = ?result.action(),
                        "export finished for a session that is no longer shown"
                    );
                }
                (Effect::Notify(result), Task::none())
            }
            Message::Pressed(region) if region.closes_viewer() => self.close(),
            Message::Pressed(_) => (Effect::None, Task::none()),
            Message::Close => self.close(),
        }
    }

    fn start_export(&mut self, action: ExportAction) -> Task<Message> {
        let Some(session) = self.session() else {
            tracing::debug!(?action, "export requested while closed");
            return Task::none();
        };

        let id = session.id;
        let reference = session.reference.clone();
        let name = session.name.clone();
        let distributor = self.distributor.clone();
        self.close_menu();

        Task::perform(
            async move { distributor.run(action, &reference, &name).await },
            move |result| Message::ExportFinished(id, result),
        )
    }

    fn close(&mut self) -> (Effect, Task<Message>) {
        match std::mem::take(&mut self.state) {
            ViewerState::Closed => (Effect::None, Task::none()),
            ViewerState::Open(session) | ViewerState::MenuOpen(session) => {
                tracing::info!(name = %session.name, "viewer closed");
                (Effect::Closed, Task::none())
            }
        }
    }

    fn close_menu(&mut self) {
        self.state = match std::mem::take(&mut self.state) {
            ViewerState::MenuOpen(session) => ViewerState::Open(session),
            other => other,
        };
    }

    fn current_mut(&mut self) -> Option<&mut Session> {
        match &mut self.state {
            ViewerState::Open(session) | ViewerState::MenuOpen(session) => Some(session),
            ViewerState::Closed => None,
        }
    }

    fn session_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.current_mut().filter(|session| session.id == id)
    }
}
