use std::rc::Rc;

use log::{debug, info, warn};
use serde::Serialize;
use yew::Reducible;

use crate::section::Section;
use crate::urgency::UrgencyLevel;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Address,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Phone,
        FormField::Address,
        FormField::Description,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Address => "address",
            FormField::Description => "description",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "ФИО *",
            FormField::Phone => "ID сервера *",
            FormField::Address => "Место проишествия *",
            FormField::Description => "Описание ситуации *",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Иванов Иван Иванович",
            FormField::Phone => "f33b-4c18",
            FormField::Address => "Улица, дом, квартира",
            FormField::Description => "Подробно опишите причину вызова",
        }
    }
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
            FormField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Phone => self.phone = value,
            FormField::Address => self.address = value,
            FormField::Description => self.description = value,
        }
    }

    /// Fields the browser's `required` check would refuse. Whitespace counts
    /// as present, same as the native check.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// What gets written to the console when a call is accepted.
#[derive(Serialize)]
struct CallSummary<'a> {
    urgency: UrgencyLevel,
    response_time: &'static str,
    #[serde(flatten)]
    form: &'a FormData,
}

pub fn confirmation_message(level: UrgencyLevel) -> String {
    format!(
        "Вызов принят! Уровень срочности: {}. Ожидаемое время прибытия: {}",
        level.label(),
        level.time()
    )
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub form: FormData,
    pub urgency: UrgencyLevel,
    pub active_section: Section,
    pub toasts: Vec<Toast>,
    /// Section the user clicked while the smooth scroll is still running.
    pending_section: Option<Section>,
    next_toast_id: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    UpdateField(FormField, String),
    SelectUrgency(UrgencyLevel),
    Submit,
    Navigate(Section),
    Scrolled(Section),
    SettleNavigation(Section),
    DismissToast(u32),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PageAction::UpdateField(field, value) => {
                let mut next = (*self).clone();
                next.form.set(field, value);
                next.into()
            }
            PageAction::SelectUrgency(level) => {
                if self.urgency == level {
                    return self;
                }
                debug!("Urgency changed from {} to {}", self.urgency, level);
                let mut next = (*self).clone();
                next.urgency = level;
                next.into()
            }
            PageAction::Submit => {
                let missing = self.form.missing_fields();
                if !missing.is_empty() {
                    warn!("Call not submitted, missing fields: {:?}", missing);
                    return self;
                }

                let summary = CallSummary {
                    urgency: self.urgency,
                    response_time: self.urgency.time(),
                    form: &self.form,
                };
                match serde_json::to_string(&summary) {
                    Ok(json) => debug!("Call accepted: {}", json),
                    Err(e) => warn!("Failed to serialize call summary: {}", e),
                }
                info!("Call accepted with urgency {}", self.urgency);

                // Form contents stay as entered after a submit.
                let mut next = (*self).clone();
                next.toasts.push(Toast {
                    id: next.next_toast_id,
                    kind: ToastKind::Success,
                    message: confirmation_message(self.urgency),
                });
                next.next_toast_id = next.next_toast_id.wrapping_add(1);
                next.into()
            }
            PageAction::Navigate(section) => {
                info!("Navigating to section {}", section.id());
                let mut next = (*self).clone();
                next.active_section = section;
                next.pending_section = Some(section);
                next.into()
            }
            PageAction::Scrolled(section) => match self.pending_section {
                // Sections passed on the way to a clicked target don't count.
                Some(target) if target != section => self,
                Some(_) => {
                    let mut next = (*self).clone();
                    next.pending_section = None;
                    next.into()
                }
                None if self.active_section == section => self,
                None => {
                    let mut next = (*self).clone();
                    next.active_section = section;
                    next.into()
                }
            },
            PageAction::SettleNavigation(section) => {
                if self.pending_section != Some(section) {
                    return self;
                }
                let mut next = (*self).clone();
                next.pending_section = None;
                next.into()
            }
            PageAction::DismissToast(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                let mut next = (*self).clone();
                next.toasts.retain(|t| t.id != id);
                next.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<PageState>, actions: Vec<PageAction>) -> Rc<PageState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn filled() -> Rc<PageState> {
        apply(
            Rc::new(PageState::default()),
            vec![
                PageAction::UpdateField(FormField::Name, "Петров Пётр".into()),
                PageAction::UpdateField(FormField::Phone, "f33b-4c18".into()),
                PageAction::UpdateField(FormField::Address, "ул. Ленина, 1".into()),
                PageAction::UpdateField(FormField::Description, "Шум во дворе".into()),
            ],
        )
    }

    #[test]
    fn initial_state() {
        let state = PageState::default();
        assert_eq!(state.urgency, UrgencyLevel::Medium);
        assert_eq!(state.active_section, Section::Home);
        assert_eq!(state.form, FormData::default());
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn submit_reports_label_and_time_for_every_level() {
        for level in UrgencyLevel::ALL {
            let state = apply(filled(), vec![PageAction::SelectUrgency(level), PageAction::Submit]);
            assert_eq!(state.toasts.len(), 1);
            let message = &state.toasts[0].message;
            assert!(message.contains(level.label()), "{message}");
            assert!(message.contains(level.time()), "{message}");
            assert_eq!(state.toasts[0].kind, ToastKind::Success);
        }
    }

    #[test]
    fn critical_submit_message_is_exact() {
        let state = apply(
            filled(),
            vec![PageAction::SelectUrgency(UrgencyLevel::Critical), PageAction::Submit],
        );
        assert_eq!(
            state.toasts[0].message,
            "Вызов принят! Уровень срочности: Критический. Ожидаемое время прибытия: до 5 минут"
        );
    }

    #[test]
    fn submit_with_any_empty_field_shows_nothing() {
        for field in FormField::ALL {
            let state = apply(
                filled(),
                vec![PageAction::UpdateField(field, String::new()), PageAction::Submit],
            );
            assert!(state.toasts.is_empty(), "submitted without {:?}", field);
        }
    }

    #[test]
    fn whitespace_satisfies_required() {
        let state = apply(
            filled(),
            vec![PageAction::UpdateField(FormField::Description, " ".into()), PageAction::Submit],
        );
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn submit_keeps_form_contents() {
        let before = filled();
        let after = before.clone().reduce(PageAction::Submit);
        assert_eq!(after.form, before.form);
        assert_eq!(after.urgency, before.urgency);
    }

    #[test]
    fn editing_one_field_leaves_the_others() {
        let base = filled();
        for field in FormField::ALL {
            let next = base.clone().reduce(PageAction::UpdateField(field, "новое".into()));
            for other in FormField::ALL {
                if other == field {
                    assert_eq!(next.form.get(other), "новое");
                } else {
                    assert_eq!(next.form.get(other), base.form.get(other));
                }
            }
        }
    }

    #[test]
    fn any_urgency_reachable_from_any_other() {
        for from in UrgencyLevel::ALL {
            for to in UrgencyLevel::ALL {
                let state = apply(
                    Rc::new(PageState::default()),
                    vec![PageAction::SelectUrgency(from), PageAction::SelectUrgency(to)],
                );
                assert_eq!(state.urgency, to);
            }
        }
    }

    #[test]
    fn navigate_highlights_clicked_section() {
        for section in Section::ALL {
            let state = Rc::new(PageState::default()).reduce(PageAction::Navigate(section));
            assert_eq!(state.active_section, section);
        }
    }

    #[test]
    fn sections_passed_during_nav_scroll_keep_click_highlight() {
        let state = apply(
            Rc::new(PageState::default()),
            vec![
                PageAction::Navigate(Section::About),
                PageAction::Scrolled(Section::Call),
                PageAction::Scrolled(Section::Faq),
            ],
        );
        assert_eq!(state.active_section, Section::About);
    }

    #[test]
    fn reaching_clicked_section_hands_back_to_scroll_spy() {
        let state = apply(
            Rc::new(PageState::default()),
            vec![
                PageAction::Navigate(Section::Call),
                PageAction::Scrolled(Section::Call),
                PageAction::Scrolled(Section::About),
            ],
        );
        assert_eq!(state.active_section, Section::About);
    }

    #[test]
    fn settle_timer_releases_the_click_highlight() {
        let state = apply(
            Rc::new(PageState::default()),
            vec![
                PageAction::Navigate(Section::About),
                PageAction::Scrolled(Section::Faq),
                PageAction::SettleNavigation(Section::About),
            ],
        );
        assert_eq!(state.active_section, Section::About);

        let state = state.reduce(PageAction::Scrolled(Section::Faq));
        assert_eq!(state.active_section, Section::Faq);
    }

    #[test]
    fn stale_settle_timer_keeps_newer_click() {
        let state = apply(
            Rc::new(PageState::default()),
            vec![
                PageAction::Navigate(Section::Call),
                PageAction::Navigate(Section::Faq),
                PageAction::SettleNavigation(Section::Call),
                PageAction::Scrolled(Section::About),
            ],
        );
        assert_eq!(state.active_section, Section::Faq);
    }

    #[test]
    fn scrolled_to_same_section_keeps_state() {
        let state = Rc::new(PageState::default());
        let next = state.clone().reduce(PageAction::Scrolled(Section::Home));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn toast_ids_are_unique_and_dismiss_is_targeted() {
        let state = apply(filled(), vec![PageAction::Submit, PageAction::Submit, PageAction::Submit]);
        let ids: Vec<u32> = state.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);

        let state = state.reduce(PageAction::DismissToast(1));
        let ids: Vec<u32> = state.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 2]);

        let state = state.reduce(PageAction::Submit);
        assert_eq!(state.toasts.last().map(|t| t.id), Some(3));
    }

    #[test]
    fn dismissing_unknown_toast_is_noop() {
        let state = filled().reduce(PageAction::Submit);
        let next = state.clone().reduce(PageAction::DismissToast(42));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
