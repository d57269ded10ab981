use yew::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::content::FaqEntry;

/// Single-open accordion: clicking the open item closes it, clicking
/// another one moves the open slot there.
pub fn toggled(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };
    let answer_id = format!("faq-answer-{}", props.index);

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={props.is_open.to_string()}
                aria-controls={answer_id.clone()}
            >
                <Icon name={IconName::HelpCircle} size={20} class="faq-icon" />
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <div class="faq-answer" id={answer_id}>
                    {props.entry.answer}
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open = use_state(|| None::<usize>);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |index: usize| open.set(toggled(*open, index)))
    };

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                <FaqItem
                    key={index}
                    {index}
                    entry={*entry}
                    is_open={*open == Some(index)}
                    on_toggle={on_toggle.clone()}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_from_closed() {
        assert_eq!(toggled(None, 2), Some(2));
    }

    #[test]
    fn clicking_open_item_collapses_it() {
        assert_eq!(toggled(Some(2), 2), None);
    }

    #[test]
    fn only_one_item_open_at_a_time() {
        assert_eq!(toggled(Some(0), 3), Some(3));
    }
}
