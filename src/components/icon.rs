use yew::prelude::*;

/// Icons used across the page, rendered as glyphs so no icon font is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    Home,
    Phone,
    Info,
    HelpCircle,
    AlertTriangle,
    AlertCircle,
    Clock,
    Send,
    Shield,
    Users,
}

impl IconName {
    pub fn glyph(self) -> &'static str {
        match self {
            IconName::Home => "⌂",
            IconName::Phone => "☎",
            IconName::Info => "ℹ",
            IconName::HelpCircle => "?",
            IconName::AlertTriangle => "⚠",
            IconName::AlertCircle => "!",
            IconName::Clock => "◷",
            IconName::Send => "➤",
            IconName::Shield => "⛨",
            IconName::Users => "👥",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let style = format!(
        "font-size: {0}px; width: {0}px; height: {0}px; line-height: {0}px;",
        props.size
    );
    html! {
        <span class={classes!("icon", props.class.clone())} style={style} aria-hidden="true">
            {props.name.glyph()}
        </span>
    }
}
