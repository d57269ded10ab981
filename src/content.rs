use crate::components::icon::IconName;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AboutCard {
    pub icon: IconName,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmergencyNumber {
    pub service: &'static str,
    pub number: &'static str,
}

pub const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        icon: IconName::Shield,
        title: "Обеспечение безопасности",
        description: "Охрана общественного порядка и обеспечение общественной безопасности граждан",
    },
    AboutCard {
        icon: IconName::Users,
        title: "Профессионализм",
        description: "Высококвалифицированные сотрудники с многолетним опытом службы",
    },
    AboutCard {
        icon: IconName::Clock,
        title: "Быстрое реагирование",
        description: "Оперативное реагирование на обращения в зависимости от уровня срочности",
    },
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "В каких случаях следует вызывать сотрудника Росгвардии?",
        answer: "Вызов сотрудника необходим при нарушениях общественного порядка, угрозе безопасности граждан, массовых беспорядках, а также при необходимости охраны важных объектов.",
    },
    FaqEntry {
        question: "Как определяется уровень срочности вызова?",
        answer: "Критический уровень — угроза жизни и здоровью; Высокий — активные правонарушения; Средний — нарушения порядка без прямой угрозы; Низкий — консультационные вопросы и плановые обращения.",
    },
    FaqEntry {
        question: "Какое время реагирования на вызов?",
        answer: "Время зависит от уровня срочности: критический — до 5 минут, высокий — до 15 минут, средний — до 30 минут, низкий — до 60 минут.",
    },
    FaqEntry {
        question: "Нужно ли оплачивать вызов сотрудника?",
        answer: "Нет, услуга вызова сотрудника Росгвардии предоставляется гражданам бесплатно. Это государственная служба, финансируемая из федерального бюджета.",
    },
    FaqEntry {
        question: "Что делать после подачи вызова?",
        answer: "После отправки вызова оставайтесь на связи по указанному номеру телефона. При критической ситуации примите меры для обеспечения личной безопасности. Ожидайте прибытия наряда.",
    },
];

pub const EMERGENCY_NUMBERS: &[EmergencyNumber] = &[
    EmergencyNumber { service: "МЧС", number: "112" },
    EmergencyNumber { service: "Полиция", number: "102" },
    EmergencyNumber { service: "Скорая помощь", number: "103" },
];

pub const COPYRIGHT: &str =
    "© 2024 Федеральная служба войск национальной гвардии РФ. Все права защищены.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::urgency::UrgencyLevel;

    #[test]
    fn response_time_answer_agrees_with_urgency_table() {
        let answer = FAQ_ENTRIES
            .iter()
            .find(|e| e.question.contains("время реагирования"))
            .map(|e| e.answer)
            .expect("response time question");
        for level in UrgencyLevel::ALL {
            let phrase = format!("{} — {}", level.label().to_lowercase(), level.time());
            assert!(answer.contains(&phrase), "missing {phrase:?}");
        }
    }

    #[test]
    fn urgency_answer_names_every_level() {
        let answer = FAQ_ENTRIES[1].answer;
        for level in UrgencyLevel::ALL {
            assert!(answer.contains(level.label()), "missing {}", level.label());
        }
    }
}
