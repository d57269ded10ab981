use thiserror::Error;
use web_sys::{window, Document, ScrollBehavior, ScrollIntoViewOptions};

use crate::config;
use crate::section::Section;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id {0:?}")]
    MissingSection(&'static str),
}

fn document() -> Result<Document, DomError> {
    window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Smoothly scrolls the section's element into view.
pub fn scroll_to_section(section: Section) -> Result<(), DomError> {
    let element = document()?
        .get_element_by_id(section.id())
        .ok_or(DomError::MissingSection(section.id()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Reads the current layout and returns the section that should be highlighted.
pub fn section_in_view() -> Result<Section, DomError> {
    let window = window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    let mut tops = Vec::with_capacity(Section::ALL.len());
    for section in Section::ALL {
        let element = document
            .get_element_by_id(section.id())
            .ok_or(DomError::MissingSection(section.id()))?;
        tops.push((section, element.get_bounding_client_rect().top()));
    }

    let at_bottom = match (
        window.inner_height().ok().and_then(|h| h.as_f64()),
        window.scroll_y().ok(),
        document.document_element(),
    ) {
        (Some(height), Some(scroll_y), Some(root)) => {
            height + scroll_y >= f64::from(root.scroll_height()) - 2.0
        }
        _ => false,
    };

    Ok(pick_section(&tops, config::HEADER_OFFSET_PX, at_bottom))
}

/// `tops` are viewport-relative top edges in document order. The highlighted
/// section is the last one that has reached the header line, or the last one
/// outright once the page cannot scroll any further.
pub fn pick_section(tops: &[(Section, f64)], offset: f64, at_bottom: bool) -> Section {
    if at_bottom {
        if let Some((section, _)) = tops.last() {
            return *section;
        }
    }
    tops.iter()
        .take_while(|(_, top)| *top <= offset + 1.0)
        .last()
        .or_else(|| tops.first())
        .map(|(section, _)| *section)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(scroll: f64) -> Vec<(Section, f64)> {
        // Sections start at 0, 900, 1700 and 2400 in the document.
        [0.0, 900.0, 1700.0, 2400.0]
            .iter()
            .zip(Section::ALL)
            .map(|(y, s)| (s, y - scroll))
            .collect()
    }

    #[test]
    fn top_of_page_is_home() {
        assert_eq!(pick_section(&layout(0.0), 96.0, false), Section::Home);
    }

    #[test]
    fn section_under_header_wins() {
        assert_eq!(pick_section(&layout(900.0 - 96.0), 96.0, false), Section::Call);
        assert_eq!(pick_section(&layout(1200.0), 96.0, false), Section::Call);
        assert_eq!(pick_section(&layout(1700.0), 96.0, false), Section::About);
    }

    #[test]
    fn bottom_of_page_selects_last_section() {
        assert_eq!(pick_section(&layout(2000.0), 96.0, true), Section::Faq);
    }

    #[test]
    fn nothing_reached_falls_back_to_first() {
        let tops = vec![(Section::Home, 300.0), (Section::Call, 1200.0)];
        assert_eq!(pick_section(&tops, 96.0, false), Section::Home);
    }

    #[test]
    fn bottom_override_does_not_steal_clicked_section() {
        use crate::state::{PageAction, PageState};
        use std::rc::Rc;
        use yew::Reducible;

        // Tall viewport: the page bottoms out before About reaches the header line.
        let tops = [
            (Section::Home, -1500.0),
            (Section::Call, -700.0),
            (Section::About, 400.0),
            (Section::Faq, 900.0),
        ];
        let spied = pick_section(&tops, 96.0, true);
        assert_eq!(spied, Section::Faq);

        let state = Rc::new(PageState::default())
            .reduce(PageAction::Navigate(Section::About))
            .reduce(PageAction::Scrolled(spied));
        assert_eq!(state.active_section, Section::About);
    }

    #[test]
    fn empty_layout_is_home() {
        assert_eq!(pick_section(&[], 96.0, false), Section::Home);
    }
}
