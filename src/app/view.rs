// SPDX-License-Identifier: MPL-2.0
//! The showcase page: navbar, demo catalogue, and the toast overlay stacked
//! on top.

use super::demos::{Demo, DEMOS};
use super::{App, Message};
use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use crate::ui::navbar;
use crate::ui::toasts::Toast;
use iced::widget::{button, container, scrollable, text, Column, Container, Stack, Text};
use iced::{Border, Element, Length, Theme};

pub fn view(app: &App) -> Element<'_, Message> {
    let bar = navbar::view(navbar::ViewContext { i18n: &app.i18n }).map(Message::Navbar);

    let subtitle = Text::new(app.i18n.tr("page-subtitle"))
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_200),
        });

    let mut list = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(720.0)
        .push(subtitle);
    for (index, demo) in DEMOS.iter().enumerate() {
        list = list.push(demo_card(app, index, demo));
    }

    let page = Column::new()
        .push(bar)
        .push(scrollable(Container::new(list).width(Length::Fill).center_x(Length::Fill)).height(Length::Fill));

    let page = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(palette::PAGE_BG)),
            ..container::Style::default()
        });

    let overlay =
        Toast::view_overlay(&app.manager, app.last_tick, app.window_size.width).map(Message::Toasts);

    Stack::with_children(vec![page.into(), overlay])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn demo_card<'a>(app: &'a App, index: usize, demo: &'a Demo) -> Element<'a, Message> {
    let name = Text::new(app.i18n.tr(&format!("demo-{}-name", demo.key)))
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_100),
        });

    let description = Text::new(app.i18n.tr(&format!("demo-{}-description", demo.key)))
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_200),
        });

    let show = button(Text::new(app.i18n.tr("demo-show-button")).size(typography::BODY))
        .on_press(Message::ShowDemo(index))
        .padding([spacing::XS, spacing::MD])
        .style(|_theme: &Theme, status: button::Status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
                button::Status::Active | button::Status::Disabled => palette::PRIMARY_500,
            };
            button::Style {
                background: Some(iced::Background::Color(background)),
                text_color: palette::WHITE,
                border: Border {
                    radius: radius::SM.into(),
                    ..Border::default()
                },
                shadow: shadow::NONE,
                snap: true,
            }
        });

    let card = Column::new()
        .spacing(spacing::SM)
        .push(name)
        .push(description)
        .push(show);

    Container::new(card)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(palette::GRAY_900)),
            border: Border {
                color: palette::SEPARATOR,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..container::Style::default()
        })
        .into()
}
