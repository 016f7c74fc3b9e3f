// SPDX-License-Identifier: MPL-2.0
//! Viewer overlay rendering.
//!
//! Layers, bottom to top: a dimmed backdrop that closes the viewer when
//! pressed, then the toolbar, export menu, content and footer. The toolbar
//! row and the content area span the full width (the content also the
//! remaining height) and capture every press inside them, so only the
//! backdrop and footer can close the viewer.

use super::controller::{Message, PreviewState, Region, Session, ViewerState};
use super::preview::Preview;
use crate::domain::export::ExportAction;
use crate::i18n::fluent::I18n;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, column, container, image, mouse_area, row, scrollable, text, Column, Container, Stack,
};
use iced::{alignment, Background, Color, Element, Length, Theme};

const BACKDROP_ALPHA: f32 = 0.85;
const BAR_SPACING: f32 = 8.0;
const BAR_PADDING: f32 = 10.0;

/// Renders the viewer overlay, or nothing when closed.
pub fn view<'a>(state: &'a ViewerState, i18n: &'a I18n) -> Element<'a, Message> {
    match state {
        ViewerState::Closed => Container::new(text("")).into(),
        ViewerState::Open(session) => overlay(session, false, i18n),
        ViewerState::MenuOpen(session) => overlay(session, true, i18n),
    }
}

fn overlay<'a>(session: &'a Session, menu_open: bool, i18n: &'a I18n) -> Element<'a, Message> {
    let backdrop = mouse_area(
        container(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(Color {
                    a: BACKDROP_ALPHA,
                    ..Color::BLACK
                })),
                ..Default::default()
            }),
    )
    .on_press(Message::Pressed(Region::Backdrop));

    let mut layout = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(toolbar(session, menu_open, i18n));

    if menu_open {
        layout = layout.push(export_menu(i18n));
    }

    let layout = layout
        .push(captured(content(session, i18n), Region::Content, Length::Fill))
        .push(footer(session));

    Stack::new().push(backdrop).push(layout).into()
}

fn toolbar<'a>(session: &'a Session, menu_open: bool, i18n: &'a I18n) -> Element<'a, Message> {
    let transform = session.transform();
    let zoom_label = i18n.tr_with_args(
        "viewer-zoom-label",
        &[("percent", &transform.zoom().value().to_string())],
    );

    let export_style: fn(&Theme, button::Status) -> button::Style = if menu_open {
        button::primary
    } else {
        button::secondary
    };

    let bar = row![
        button(text(i18n.tr("viewer-zoom-out")))
            .on_press_maybe((!transform.is_min_zoom()).then_some(Message::ZoomOut))
            .style(button::secondary),
        text(zoom_label).style(light_text),
        button(text(i18n.tr("viewer-zoom-in")))
            .on_press_maybe((!transform.is_max_zoom()).then_some(Message::ZoomIn))
            .style(button::secondary),
        button(text(i18n.tr("viewer-rotate")))
            .on_press(Message::Rotate)
            .style(button::secondary),
        button(text(i18n.tr("viewer-export")))
            .on_press(Message::ToggleMenu)
            .style(export_style),
        button(text(i18n.tr("viewer-close")))
            .on_press(Message::Close)
            .style(button::danger),
    ]
    .spacing(BAR_SPACING)
    .align_y(alignment::Vertical::Center);

    captured(container(bar).padding(BAR_PADDING), Region::Controls, Length::Shrink)
}

/// Wraps `content` in a full-width area that reports every press as `region`.
fn captured<'a>(
    content: impl Into<Element<'a, Message>>,
    region: Region,
    height: Length,
) -> Element<'a, Message> {
    mouse_area(
        container(content)
            .width(Length::Fill)
            .height(height)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(Message::Pressed(region))
    .into()
}

fn export_menu(i18n: &I18n) -> Element<'_, Message> {
    let entry = |key: &str, action: ExportAction| {
        button(text(i18n.tr(key)))
            .on_press(Message::Export(action))
            .width(Length::Fill)
            .style(button::text)
    };

    let menu = column![
        entry("viewer-download", ExportAction::Download),
        entry("viewer-copy", ExportAction::Copy),
        entry("viewer-share", ExportAction::Share),
        entry("viewer-print", ExportAction::Print),
    ]
    .spacing(2)
    .width(Length::Fixed(180.0));

    mouse_area(
        container(menu)
            .padding(BAR_PADDING / 2.0)
            .style(container::rounded_box),
    )
    .on_press(Message::Pressed(Region::Controls))
    .into()
}

fn content<'a>(session: &'a Session, i18n: &'a I18n) -> Element<'a, Message> {
    let Some((width, height, shown)) = session.displayed() else {
        let key = match session.preview() {
            PreviewState::Loading => "viewer-loading",
            _ => "viewer-preview-unavailable",
        };
        return container(text(i18n.tr(key)).style(light_text))
            .padding(BAR_PADDING)
            .into();
    };

    let (rendered_width, rendered_height) = session.transform().rendered_size(width, height);
    scrollable(rendered(shown, rendered_width, rendered_height))
        .direction(Direction::Both {
            vertical: Scrollbar::new(),
            horizontal: Scrollbar::new(),
        })
        .into()
}

fn rendered(preview: &Preview, width: f32, height: f32) -> Element<'_, Message> {
    image(preview.handle.clone())
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .into()
}

fn footer(session: &Session) -> Element<'_, Message> {
    mouse_area(
        container(text(session.name()).style(light_text))
            .padding(BAR_PADDING)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(Message::Pressed(Region::Footer))
    .into()
}

fn light_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color::WHITE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::Widget;
    use iced::Size;

    #[test]
    fn toolbar_capture_spans_the_full_width() {
        let element = captured(text("bar"), Region::Controls, Length::Shrink);
        assert_eq!(
            element.as_widget().size(),
            Size::new(Length::Fill, Length::Shrink)
        );
    }

    #[test]
    fn content_capture_fills_the_remaining_area() {
        let element = captured(text("picture"), Region::Content, Length::Fill);
        assert_eq!(
            element.as_widget().size(),
            Size::new(Length::Fill, Length::Fill)
        );
    }
}
