// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for the showcase page.
//!
//! A thin presentational strip: the component title on one side and a locale
//! selector on the other. It never talks to the toast core directly.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{container, pick_list, text, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    LocaleSelected(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    LocaleChanged(LanguageIdentifier),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::LocaleSelected(locale) => Event::LocaleChanged(locale),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new("<SatelliteToast/>")
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_100),
        });

    let locales = ctx.i18n.available_locales.clone();
    let selector = pick_list(locales, Some(ctx.i18n.locale()), Message::LocaleSelected)
        .placeholder(ctx.i18n.tr("navbar-language"));

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(title)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(selector);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(palette::PAGE_BG)),
            border: Border {
                color: palette::SEPARATOR,
                width: 1.0,
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}
