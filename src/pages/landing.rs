use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::use_window_scroll;

use crate::components::faq::FaqAccordion;
use crate::components::icon::{Icon, IconName};
use crate::components::nav::Nav;
use crate::components::toast::Toaster;
use crate::config;
use crate::content::{ABOUT_CARDS, COPYRIGHT, EMERGENCY_NUMBERS, FAQ_ENTRIES};
use crate::scroll;
use crate::section::Section;
use crate::state::{FormField, PageAction, PageState};
use crate::urgency::UrgencyLevel;

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(PageState::default);
    let (_, scroll_y) = use_window_scroll();

    // Keep the nav highlight in step with whatever section is on screen.
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                match scroll::section_in_view() {
                    Ok(section) => state.dispatch(PageAction::Scrolled(section)),
                    Err(e) => debug!("Scroll-spy skipped: {}", e),
                }
                || ()
            },
            scroll_y,
        );
    }

    let navigate = {
        let state = state.clone();
        Callback::from(move |section: Section| {
            state.dispatch(PageAction::Navigate(section));
            if let Err(e) = scroll::scroll_to_section(section) {
                warn!("Could not scroll to section {}: {}", section.id(), e);
            }
            let state = state.clone();
            Timeout::new(config::NAV_SETTLE_MS, move || {
                state.dispatch(PageAction::SettleNavigation(section));
            })
            .forget();
        })
    };

    let navigate_to = |section: Section| {
        let navigate = navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(section);
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(PageAction::Submit);
        })
    };

    let on_urgency_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.value().parse::<UrgencyLevel>() {
                Ok(level) => state.dispatch(PageAction::SelectUrgency(level)),
                Err(e) => warn!("Ignoring urgency change: {}", e),
            }
        })
    };

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |id: u32| state.dispatch(PageAction::DismissToast(id)))
    };

    let render_field = |field: FormField| {
        let value = state.form.get(field).to_string();
        let input = if field == FormField::Description {
            let oninput = {
                let state = state.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    state.dispatch(PageAction::UpdateField(field, input.value()));
                })
            };
            html! {
                <textarea
                    id={field.id()}
                    placeholder={field.placeholder()}
                    rows="4"
                    {value}
                    {oninput}
                    required={true}
                />
            }
        } else {
            let oninput = {
                let state = state.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    state.dispatch(PageAction::UpdateField(field, input.value()));
                })
            };
            html! {
                <input
                    id={field.id()}
                    type="text"
                    placeholder={field.placeholder()}
                    {value}
                    {oninput}
                    required={true}
                />
            }
        };
        html! {
            <div class="form-field" key={field.id()}>
                <label for={field.id()}>{field.label()}</label>
                {input}
            </div>
        }
    };

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Toaster toasts={state.toasts.clone()} {on_dismiss} />
            <Nav active={state.active_section} on_navigate={navigate.clone()} />

            <main class="container">
                // Hero
                <section id={Section::Home.id()} class="hero">
                    <div class="hero-content">
                        <span class="badge">{"🇷🇺 Федеральная служба войск национальной гвардии"}</span>
                        <h2 class="hero-title">
                            <span class="accent">{"Специальная служба"}</span>
                            <br />
                            <span class="outlined">{"Росгвардии"}</span>
                        </h2>
                        <p class="hero-subtitle">
                            {"Система быстрого реагирования на обращения граждан. Квалифицированная помощь с учетом уровня срочности ситуации."}
                        </p>
                        <div class="hero-actions">
                            <button class="btn btn-primary btn-lg" onclick={navigate_to(Section::Call)}>
                                {"Вызвать экипаж"}
                            </button>
                            <button class="btn btn-outline btn-lg" onclick={navigate_to(Section::About)}>
                                <Icon name={IconName::Info} size={24} />
                                {"Подробнее"}
                            </button>
                        </div>
                    </div>
                </section>

                // Call form
                <section id={Section::Call.id()} class="page-section">
                    <div class="narrow">
                        <div class="card call-card">
                            <div class="card-header call-card-header">
                                <h3 class="card-title">{"Форма вызова сотрудника(ов)"}</h3>
                                <p class="card-description">{"Укажите детали ситуации и выберите уровень срочности"}</p>
                            </div>
                            <div class="card-content">
                                <form {onsubmit} class="call-form">
                                    <div class="form-fields">
                                        { for FormField::ALL.into_iter().map(render_field) }
                                    </div>

                                    <div class="urgency-group" role="radiogroup">
                                        <span class="urgency-title">{"Уровень срочности *"}</span>
                                        { for UrgencyLevel::ALL.into_iter().map(|level| {
                                            let info = level.info();
                                            let badge_style = format!("--badge: {}; --badge-hover: {};", info.color, info.hover_color);
                                            html! {
                                                <label class="urgency-option" for={level.as_str()} key={level.as_str()}>
                                                    <input
                                                        type="radio"
                                                        id={level.as_str()}
                                                        name="urgency"
                                                        value={level.as_str()}
                                                        checked={state.urgency == level}
                                                        onchange={on_urgency_change.clone()}
                                                    />
                                                    <span class="urgency-badge" style={badge_style}>
                                                        <Icon name={info.icon} size={20} />
                                                    </span>
                                                    <span class="urgency-text">
                                                        <span class="urgency-label">{level.label()}</span>
                                                        <span class="urgency-time">{format!("Время прибытия: {}", level.time())}</span>
                                                    </span>
                                                </label>
                                            }
                                        }) }
                                    </div>

                                    <button type="submit" class="btn btn-primary btn-lg btn-block">
                                        <Icon name={IconName::Send} size={20} />
                                        {"Отправить вызов"}
                                    </button>
                                </form>
                            </div>
                        </div>
                    </div>
                </section>

                // About
                <section id={Section::About.id()} class="page-section">
                    <div class="section-heading">
                        <h2>{"О службе Росгвардии"}</h2>
                        <p>{"Защита прав и безопасности граждан Российской Федерации"}</p>
                    </div>
                    <div class="about-grid">
                        { for ABOUT_CARDS.iter().map(|card| html! {
                            <div class="card about-card" key={card.title}>
                                <div class="card-header">
                                    <div class="about-icon">
                                        <Icon name={card.icon} size={32} />
                                    </div>
                                    <h3 class="card-title">{card.title}</h3>
                                </div>
                                <div class="card-content">
                                    <p>{card.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                // FAQ
                <section id={Section::Faq.id()} class="page-section">
                    <div class="narrow">
                        <div class="section-heading">
                            <h2>{"Вопросы и ответы"}</h2>
                            <p>{"Ответы на часто задаваемые вопросы"}</p>
                        </div>
                        <FaqAccordion entries={FAQ_ENTRIES} />
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <div class="container">
                    <div class="footer-grid">
                        <div>
                            <div class="footer-brand">
                                <img src={config::EMBLEM_URL} alt="Герб Росгвардии" />
                                <div>
                                    <h3>{"Росгвардия"}</h3>
                                    <p class="muted">{"Служба вызова"}</p>
                                </div>
                            </div>
                            <p class="muted">{"Федеральная служба войск национальной гвардии Российской Федерации"}</p>
                        </div>
                        <div>
                            <h4>{"Быстрые ссылки"}</h4>
                            <ul class="footer-list">
                                { for Section::ALL.into_iter().map(|section| html! {
                                    <li key={section.id()}>
                                        <button class="footer-link" onclick={navigate_to(section)}>
                                            {section.footer_label()}
                                        </button>
                                    </li>
                                }) }
                            </ul>
                        </div>
                        <div>
                            <h4>{"Экстренные службы"}</h4>
                            <ul class="footer-list">
                                { for EMERGENCY_NUMBERS.iter().map(|entry| html! {
                                    <li class="footer-phone" key={entry.number}>
                                        <Icon name={IconName::Phone} size={16} />
                                        <span>{format!("{}: {}", entry.service, entry.number)}</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </div>
                    <div class="footer-bottom">
                        <p>{COPYRIGHT}</p>
                    </div>
                </div>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    min-height: 100vh;
    background: linear-gradient(135deg, #ffffff 0%, #fef2f2 50%, #ffffff 100%);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #111827;
}
.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 3rem 1rem;
}
.narrow {
    max-width: 768px;
    margin: 0 auto;
}
.page-section {
    margin-bottom: 6rem;
    scroll-margin-top: 6rem;
}
.hero {
    min-height: 80vh;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 6rem;
    scroll-margin-top: 6rem;
    text-align: center;
}
.hero-content {
    max-width: 56rem;
    animation: fadeIn 0.6s ease-out;
}
@keyframes fadeIn {
    from { opacity: 0; transform: translateY(10px); }
    to { opacity: 1; transform: translateY(0); }
}
.badge {
    display: inline-block;
    margin-bottom: 2rem;
    padding: 0.5rem 1.5rem;
    border-radius: 9999px;
    background: #dc2626;
    color: #ffffff;
    font-weight: 600;
}
.hero-title {
    font-size: 3rem;
    font-weight: 700;
    margin-bottom: 1.5rem;
}
.hero-title .accent {
    color: #dc2626;
}
.hero-title .outlined {
    color: #ffffff;
    -webkit-text-stroke: 2px red;
}
.hero-subtitle {
    font-size: 1.25rem;
    color: #4b5563;
    max-width: 42rem;
    margin: 0 auto 2rem;
}
.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    justify-content: center;
}
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border-radius: 8px;
    font-weight: 600;
    cursor: pointer;
    transition: all 0.2s;
}
.btn-lg {
    font-size: 1.125rem;
    padding: 1.25rem 2rem;
}
.btn-block {
    width: 100%;
}
.btn-primary {
    background: #dc2626;
    color: #ffffff;
    border: none;
}
.btn-primary:hover {
    background: #b91c1c;
}
.btn-outline {
    background: transparent;
    color: #dc2626;
    border: 2px solid #dc2626;
}
.btn-outline:hover {
    background: #fef2f2;
}
.card {
    background: #ffffff;
    border: 1px solid #fecaca;
    border-radius: 12px;
    overflow: hidden;
}
.call-card {
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
}
.card-header {
    padding: 1.5rem;
}
.call-card-header {
    background: #dc2626;
    color: #ffffff;
}
.card-title {
    font-size: 1.25rem;
    font-weight: 700;
    margin: 0;
}
.call-card-header .card-title {
    font-size: 1.875rem;
}
.card-description {
    color: #fef2f2;
    margin: 0.5rem 0 0;
}
.card-content {
    padding: 1.5rem;
}
.call-form, .form-fields {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}
.form-fields {
    gap: 1rem;
}
.form-field label {
    display: block;
    font-weight: 500;
    margin-bottom: 0.5rem;
}
.form-field input, .form-field textarea {
    width: 100%;
    box-sizing: border-box;
    padding: 0.6rem 0.75rem;
    border: 1px solid #e5e7eb;
    border-radius: 6px;
    font: inherit;
}
.form-field input:focus, .form-field textarea:focus {
    outline: 2px solid #fca5a5;
    border-color: #dc2626;
}
.urgency-group {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    padding: 1.5rem;
    background: #fef2f2;
    border: 1px solid #fecaca;
    border-radius: 8px;
}
.urgency-title {
    font-size: 1.125rem;
    font-weight: 600;
}
.urgency-option {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem;
    background: #ffffff;
    border: 2px solid #e5e7eb;
    border-radius: 8px;
    cursor: pointer;
    transition: border-color 0.2s;
}
.urgency-option:hover {
    border-color: #fca5a5;
}
.urgency-badge {
    width: 40px;
    height: 40px;
    border-radius: 8px;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #ffffff;
    background: var(--badge);
    transition: background 0.2s;
}
.urgency-option:hover .urgency-badge {
    background: var(--badge-hover);
}
.urgency-text {
    display: flex;
    flex-direction: column;
}
.urgency-label {
    font-weight: 600;
}
.urgency-time {
    font-size: 0.875rem;
    color: #4b5563;
}
.section-heading {
    text-align: center;
    margin-bottom: 3rem;
}
.section-heading h2 {
    font-size: 2.25rem;
    font-weight: 700;
    margin-bottom: 1rem;
}
.section-heading p {
    font-size: 1.25rem;
    color: #4b5563;
}
.about-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 2rem;
}
.about-card {
    transition: transform 0.2s, box-shadow 0.2s;
}
.about-card:hover {
    transform: scale(1.05);
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
}
.about-icon {
    width: 64px;
    height: 64px;
    margin-bottom: 1rem;
    border-radius: 8px;
    background: #dc2626;
    color: #ffffff;
    display: flex;
    align-items: center;
    justify-content: center;
}
.about-card p {
    color: #4b5563;
}
.faq-list {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.faq-item {
    border: 1px solid #fecaca;
    border-radius: 8px;
    background: #ffffff;
    padding: 0 1.5rem;
}
.faq-question {
    width: 100%;
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    padding: 1rem 0;
    background: none;
    border: none;
    text-align: left;
    font: inherit;
    cursor: pointer;
}
.faq-icon {
    color: #dc2626;
    margin-top: 0.25rem;
}
.question-text {
    flex: 1;
    font-weight: 600;
}
.toggle-icon {
    color: #dc2626;
    font-size: 1.25rem;
}
.faq-answer {
    color: #4b5563;
    padding: 0 0 1rem 2.25rem;
}
.site-footer {
    background: #dc2626;
    color: #ffffff;
}
.footer-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 2rem;
    margin-bottom: 2rem;
}
.footer-brand {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    margin-bottom: 1rem;
}
.footer-brand img {
    width: 64px;
    height: 64px;
    object-fit: contain;
}
.footer-brand h3 {
    font-size: 1.25rem;
    margin: 0;
}
.muted, .footer-list, .footer-bottom {
    color: #fee2e2;
}
.footer-list {
    list-style: none;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}
.footer-link {
    background: none;
    border: none;
    padding: 0;
    color: inherit;
    font: inherit;
    cursor: pointer;
}
.footer-link:hover {
    color: #ffffff;
}
.footer-phone {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.footer-bottom {
    border-top: 1px solid #ef4444;
    padding-top: 2rem;
    text-align: center;
}
@media (max-width: 768px) {
    .hero-title {
        font-size: 2.25rem;
    }
}
"#;
