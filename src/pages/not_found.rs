use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .not-found h1 {
                    font-size: 3rem;
                    color: #dc2626;
                    margin: 0;
                }
                .not-found .home-link {
                    color: #dc2626;
                    font-weight: 600;
                }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"Страница не найдена"}</p>
            <Link<Route> to={Route::Home} classes="home-link">
                {"На главную"}
            </Link<Route>>
        </div>
    }
}
