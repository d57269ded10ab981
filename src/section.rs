use crate::components::icon::IconName;

/// Page sections reachable from the header and footer navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Call,
    About,
    Faq,
}

impl Section {
    /// Document order. Scroll-spy relies on this being top to bottom.
    pub const ALL: [Section; 4] = [Section::Home, Section::Call, Section::About, Section::Faq];

    /// Element id of the `<section>` on the page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Call => "call",
            Section::About => "about",
            Section::Faq => "faq",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Call => "Вызов",
            Section::About => "О службе",
            Section::Faq => "Вопросы",
        }
    }

    pub fn footer_label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Call => "Вызов сотрудника",
            Section::About => "О службе",
            Section::Faq => "Вопросы и ответы",
        }
    }

    pub fn icon(self) -> IconName {
        match self {
            Section::Home => IconName::Home,
            Section::Call => IconName::Phone,
            Section::About => IconName::Info,
            Section::Faq => IconName::HelpCircle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn home_is_the_initial_section() {
        assert_eq!(Section::default(), Section::Home);
        assert_eq!(Section::ALL[0], Section::Home);
    }
}
