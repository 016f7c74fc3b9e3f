// SPDX-License-Identifier: MPL-2.0
//! Application root.
//!
//! The `App` owns the viewer controller, the notification manager and the
//! translations. It routes messages to the viewer, turns viewer effects into
//! notifications, and exits once the viewer is closed.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::infrastructure::desktop_distributor;
use crate::ui::notifications::{self, Notification, Toast};
use crate::ui::viewer::{self, Controller, Effect, OpenRequest, Phase};
use iced::widget::Stack;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

pub struct App {
    pub i18n: I18n,
    viewer: Controller,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer", &self.viewer.phase())
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Runs the viewer until it is closed.
///
/// # Errors
///
/// Returns an error if the window or the renderer cannot be created.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            viewer: Controller::new(desktop_distributor(&config)),
            notifications: notifications::Manager::new(),
            i18n,
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let Some(resource) = flags.resource.clone() else {
            tracing::warn!("no resource to open");
            return (app, iced::exit());
        };

        let name = flags
            .display_name()
            .unwrap_or_else(|| app.i18n.tr("viewer-untitled"));
        let task = app.viewer.open(OpenRequest::new(resource, name));
        (app, task.map(Message::Viewer))
    }

    fn title(&self) -> String {
        match self.viewer.session() {
            Some(session) => self
                .i18n
                .tr_with_args("window-title", &[("name", session.name())]),
            None => self.i18n.tr("window-title-empty"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(message) => {
                let (effect, task) = self.viewer.handle_message(message);
                let task = task.map(Message::Viewer);
                match effect {
                    Effect::None => task,
                    Effect::Notify(result) => {
                        self.notifications.push(Notification::from(&result));
                        task
                    }
                    Effect::Closed => iced::exit(),
                }
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
            Message::Escape => {
                let message = if self.viewer.phase() == Phase::MenuOpen {
                    viewer::Message::DismissMenu
                } else {
                    viewer::Message::Close
                };
                self.update(Message::Viewer(message))
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let viewer = viewer::view::view(self.viewer.state(), &self.i18n).map(Message::Viewer);
        let toasts = Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification);

        Stack::new().push(viewer).push(toasts).into()
    }
}
