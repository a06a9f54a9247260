use chrono::NaiveDate;
use shared::dates_from_year_start;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{DayScreen, Header, SummaryTable};
use services::{api::ApiClient, date_utils, logging::Logger};

/// Which screen the app is currently showing
#[derive(Clone, Copy, PartialEq)]
enum Screen {
    Summary,
    Day(NaiveDate),
}

#[function_component(App)]
fn app() -> Html {
    // Captured once per session so the summary grid stays stable while the
    // app is open, and threaded through to every consumer from here
    let today = *use_memo((), |_| date_utils::current_date());
    let dates = use_memo(today, |today| dates_from_year_start(*today));
    let api_client = use_memo((), |_| ApiClient::new());
    let screen = use_state(|| Screen::Summary);

    use_effect_with((), move |_| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document.set_title("Habit Tracker");
        }
        Logger::info_with_component("app", "habit tracker started");
        || ()
    });

    let on_select_day = {
        let screen = screen.clone();
        Callback::from(move |date: NaiveDate| screen.set(Screen::Day(date)))
    };

    let on_back = {
        let screen = screen.clone();
        Callback::from(move |_| screen.set(Screen::Summary))
    };

    html! {
        <>
            <Header />

            <main class="main">
                <div class="container">
                    { match *screen {
                        Screen::Summary => html! {
                            <SummaryTable
                                api_client={(*api_client).clone()}
                                dates={(*dates).clone()}
                                {on_select_day}
                            />
                        },
                        Screen::Day(date) => html! {
                            <DayScreen
                                api_client={(*api_client).clone()}
                                {date}
                                {today}
                                {on_back}
                            />
                        },
                    } }
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
