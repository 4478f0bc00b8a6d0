// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for in-page navigation.
//!
//! Wide windows show the section links inline. Compact windows collapse them
//! into a hamburger menu that closes when a destination is picked or when the
//! user clicks anywhere outside it. A locale switch sits next to the links in
//! every layout.

use crate::content::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::BOLD;
use crate::ui::state::Layout;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length, Padding,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: Layout,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    SelectSection(Section),
    SelectLanguage(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ScrollTo(Section),
    ChangeLanguage(LanguageIdentifier),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::SelectSection(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
        Message::SelectLanguage(locale) => {
            *menu_open = false;
            Event::ChangeLanguage(locale)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.layout.is_compact() && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

/// Build the bar with the title and either inline links or the menu toggle.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand_key = if ctx.layout.is_compact() {
        "nav-brand-short"
    } else {
        "nav-brand"
    };
    let brand = Text::new(ctx.i18n.tr(brand_key))
        .size(typography::BODY)
        .font(BOLD)
        .style(styles::text::accent);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::LG])
        .height(sizing::NAVBAR_HEIGHT)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(build_language_switch(ctx.i18n));

    if ctx.layout.is_compact() {
        let glyph = if ctx.menu_open { "✕" } else { "☰" };
        row = row.push(
            button(Text::new(glyph).size(typography::TITLE_SM))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::menu_toggle(ctx.menu_open)),
        );
    } else {
        for section in Section::ALL {
            row = row.push(build_inline_link(ctx.i18n, section));
        }
    }

    row.into()
}

fn build_inline_link<'a>(i18n: &I18n, section: Section) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(section.label_key())).size(typography::BODY);
    let link = button(label)
        .on_press(Message::SelectSection(section))
        .padding([spacing::XS, spacing::SM]);

    if section == Section::Footer {
        link.style(styles::button::contact).into()
    } else {
        link.style(styles::button::nav_link).into()
    }
}

/// One button per available locale, labelled with its language subtag.
fn build_language_switch<'a>(i18n: &I18n) -> Element<'a, Message> {
    let current = i18n.current_locale();
    i18n.available_locales()
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, locale| {
            let label = locale.language.as_str().to_uppercase();
            row.push(
                button(Text::new(label).size(typography::CAPTION))
                    .on_press(Message::SelectLanguage(locale.clone()))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::language(locale == current)),
            )
        })
        .into()
}

/// Build the compact-layout dropdown with one entry per section.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = Section::ALL.into_iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, section| {
            let label = Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY_LG);
            let item = button(label)
                .on_press(Message::SelectSection(section))
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fill);
            let item = if section == Section::Footer {
                item.style(styles::button::contact)
            } else {
                item.style(styles::button::menu_item)
            };
            column.push(item)
        },
    );

    Container::new(
        Container::new(items)
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(styles::container::dropdown),
    )
    .padding(Padding {
        top: 0.0,
        right: spacing::XS,
        bottom: spacing::SM,
        left: spacing::XS,
    })
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(layout: Layout, menu_open: bool) {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            layout,
            menu_open,
        });
    }

    #[test]
    fn navbar_view_renders_in_every_layout() {
        render(Layout::Wide, false);
        render(Layout::Medium, false);
        render(Layout::Compact, false);
        render(Layout::Compact, true);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert_eq!(event, Event::None);

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn outside_click_closes_menu() {
        let mut menu_open = false;
        update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);

        let event = update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn close_menu_on_closed_menu_is_noop() {
        let mut menu_open = false;
        update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
    }

    #[test]
    fn selecting_section_closes_menu_and_scrolls() {
        for section in Section::ALL {
            let mut menu_open = true;
            let event = update(Message::SelectSection(section), &mut menu_open);
            assert!(!menu_open);
            assert_eq!(event, Event::ScrollTo(section));
        }
    }

    #[test]
    fn selecting_language_closes_menu_and_forwards_locale() {
        let french: LanguageIdentifier = "fr".parse().expect("valid language identifier");
        let mut menu_open = true;
        let event = update(Message::SelectLanguage(french.clone()), &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::ChangeLanguage(french));
    }
}
