// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Severity, Toast};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, text, Column, Container, Row, Stack};
use iced::{alignment, Element, Length};

const THEME_MODES: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

/// Renders the demo view with the toast overlay stacked on top.
pub fn view(app: &App) -> Element<'_, Message> {
    let content = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(header(app))
            .push(session_summary(app))
            .push(demo_buttons())
            .push(theme_picker(app)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .padding(spacing::LG);

    let overlay = Toast::view_overlay(&app.queue).map(Message::Notification);

    Stack::new().push(content).push(overlay).into()
}

fn header(app: &App) -> Element<'_, Message> {
    let mut column = Column::new().spacing(spacing::XXS);

    match app.session.site.get() {
        Some(site) => {
            column = column.push(text(site.site_name.as_str()).size(typography::TITLE_SM));
            if site.show_site_slogan {
                column = column.push(text(site.site_slogan.as_str()).size(typography::CAPTION));
            }
        }
        None => {
            column = column.push(text("Loading site info…").size(typography::TITLE_SM));
        }
    }

    column.into()
}

fn session_summary(app: &App) -> Element<'_, Message> {
    let user_line = app.session.user.get().map_or_else(
        || "Not signed in".to_string(),
        |user| format!("Signed in as {}", user.username),
    );

    let viewport_line = match app.session.compact_viewport.get() {
        Some(true) => "Compact viewport",
        Some(false) => "Regular viewport",
        None => "Viewport not yet classified",
    };

    Column::new()
        .spacing(spacing::XXS)
        .push(text(user_line).size(typography::BODY))
        .push(text(viewport_line).size(typography::CAPTION))
        .into()
}

fn demo_buttons() -> Element<'static, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(button(text("Info")).on_press(Message::DemoToast(Severity::Info)))
        .push(button(text("Success")).on_press(Message::DemoToast(Severity::Success)))
        .push(button(text("Warning")).on_press(Message::DemoToast(Severity::Warning)))
        .push(button(text("Error")).on_press(Message::DemoToast(Severity::Error)))
        .push(button(text("Fault")).on_press(Message::DemoFault { with_detail: true }))
        .push(button(text("Bare fault")).on_press(Message::DemoFault { with_detail: false }))
        .into()
}

fn theme_picker(app: &App) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(text("Theme").size(typography::BODY))
        .push(pick_list(
            THEME_MODES,
            Some(app.theme_mode),
            Message::ThemeModeSelected,
        ))
        .into()
}
