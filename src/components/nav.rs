use yew::prelude::*;

use crate::components::icon::Icon;
use crate::config;
use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Section,
    pub on_navigate: Callback<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, on_navigate } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class="top-nav">
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(4px);
                    border-bottom: 1px solid #fee2e2;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .nav-logo img {
                    width: 56px;
                    height: 56px;
                    object-fit: contain;
                }
                .nav-logo h1 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #111827;
                    margin: 0;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 0.75rem;
                    border: none;
                    border-radius: 8px;
                    background: transparent;
                    color: #4b5563;
                    font-weight: 500;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.2s;
                }
                .nav-link:hover {
                    background: #fef2f2;
                    color: #dc2626;
                }
                .nav-link.active {
                    background: #dc2626;
                    color: #ffffff;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #dc2626;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        gap: 0.25rem;
                        padding: 1rem;
                        background: #ffffff;
                        border-bottom: 1px solid #fee2e2;
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">
                    <img src={config::EMBLEM_URL} alt="Герб Росгвардии" />
                    <div>
                        <h1>{"РОСГVАРДИЯ"}</h1>
                    </div>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Меню">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    { for Section::ALL.into_iter().map(|section| {
                        let onclick = {
                            let on_navigate = on_navigate.clone();
                            let menu_open = menu_open.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                menu_open.set(false);
                                on_navigate.emit(section);
                            })
                        };
                        html! {
                            <button
                                key={section.id()}
                                class={classes!("nav-link", (*active == section).then(|| "active"))}
                                {onclick}
                            >
                                <Icon name={section.icon()} size={18} />
                                <span>{section.nav_label()}</span>
                            </button>
                        }
                    }) }
                </nav>
            </div>
        </header>
    }
}
