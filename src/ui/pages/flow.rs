//! Message flow page
//! Intro note first, then one note per page with reading progress

use iced::alignment::Horizontal;
use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::content::{Note, flow, intro};
use crate::features::{FlowState, MessagePager};
use crate::ui::{theme, widgets};

const CARD_WIDTH: f32 = 620.0;

/// Build the flow page for the current state
pub fn view(state: &FlowState, opacity: f32) -> Element<'_, Message> {
    let body = if state.show_intro() {
        intro_card(opacity)
    } else {
        note_page(state.pager(), opacity)
    };

    container(body)
        .center_x(Fill)
        .center_y(Fill)
        .padding(40)
        .into()
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(CARD_WIDTH)
        .padding(Padding::new(40.0).top(36.0))
        .style(theme::glass_card)
        .into()
}

fn intro_card<'a>(opacity: f32) -> Element<'a, Message> {
    card(
        column![
            text(intro::ICON).size(56),
            text(intro::TITLE)
                .size(32)
                .color(theme::with_alpha(theme::TEXT_PRIMARY, opacity)),
            text(intro::TEXT)
                .size(18)
                .color(theme::with_alpha(theme::TEXT_SECONDARY, opacity))
                .align_x(Horizontal::Center),
            text(intro::HINT)
                .size(14)
                .color(theme::with_alpha(theme::GOLD_SOFT, opacity)),
            Space::new().height(8),
            widgets::romantic_button(intro::READY, Some(Message::ReadyPressed)),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
}

fn note_card<'a>(note: &'static Note, opacity: f32) -> Element<'a, Message> {
    card(
        column![
            text(note.icon).size(56),
            text(note.title)
                .size(30)
                .color(theme::with_alpha(theme::TEXT_PRIMARY, opacity)),
            container(Space::new().width(80).height(2)).style(theme::divider),
            text(note.text)
                .size(18)
                .color(theme::with_alpha(theme::TEXT_SECONDARY, opacity))
                .align_x(Horizontal::Center),
        ]
        .spacing(18)
        .align_x(Alignment::Center),
    )
}

/// "3 of 10"
fn counter_label(pager: &MessagePager) -> String {
    format!("{} of {}", pager.index() + 1, pager.len())
}

fn note_page(pager: &MessagePager, opacity: f32) -> Element<'_, Message> {
    let label = if pager.is_last() || pager.current().is_none() {
        flow::SURPRISE
    } else {
        flow::NEXT
    };

    let mut page = column![widgets::progress_bar(pager.progress(), CARD_WIDTH)]
        .spacing(24)
        .align_x(Alignment::Center);

    if let Some(note) = pager.current() {
        page = page.push(note_card(note, opacity)).push(widgets::heart_dots(
            (0..pager.len()).map(|i| pager.is_reached(i)),
            flow::DOT_READ,
            flow::DOT_UNREAD,
        ));
    }

    page = page.push(widgets::romantic_button(label, Some(Message::NextPressed)));
    if !pager.notes().is_empty() {
        page = page.push(
            text(counter_label(pager))
                .size(14)
                .color(theme::TEXT_MUTED),
        );
    }

    page.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NOTES;

    #[test]
    fn test_counter_is_one_based() {
        let mut pager = MessagePager::new(NOTES);
        assert_eq!(counter_label(&pager), format!("1 of {}", NOTES.len()));
        pager.advance();
        assert_eq!(counter_label(&pager), format!("2 of {}", NOTES.len()));
    }
}
