use chrono::NaiveDate;
use yew::prelude::*;

use crate::components::{BackButton, Checkbox, HabitsEmpty, Loading, ProgressBar};
use crate::hooks::use_day::{use_day, UseDayResult};
use crate::services::{api::ApiClient, date_utils};

#[derive(Properties, PartialEq)]
pub struct DayScreenProps {
    pub api_client: ApiClient,
    pub date: NaiveDate,
    pub today: NaiveDate,
    pub on_back: Callback<()>,
}

#[function_component(DayScreen)]
pub fn day_screen(props: &DayScreenProps) -> Html {
    let UseDayResult { state, actions } = use_day(&props.api_client, props.date, props.today);

    if state.loading {
        return html! { <Loading /> };
    }

    let habit_list = if state.possible_habits.is_empty() {
        html! { <HabitsEmpty /> }
    } else {
        html! {
            <div class={classes!("habit-list", state.read_only.then_some("read-only"))}>
                { for state.possible_habits.iter().map(|habit| {
                    let on_toggle = {
                        let toggle_habit = actions.toggle_habit.clone();
                        let id = habit.id.clone();
                        Callback::from(move |_| toggle_habit.emit(id.clone()))
                    };
                    html! {
                        <Checkbox
                            key={habit.id.clone()}
                            title={habit.title.clone()}
                            checked={state.completed.contains(&habit.id)}
                            disabled={state.read_only}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="day-screen">
            <BackButton on_back={props.on_back.clone()} />

            <span class="day-weekday">{ date_utils::weekday_name(props.date) }</span>
            <h2 class="day-title">{ date_utils::format_month_day(props.date) }</h2>

            <ProgressBar progress={state.progress} />

            { if let Some(error) = state.error.as_ref() {
                html! { <div class="form-message error">{ error }</div> }
            } else {
                html! {}
            } }

            { habit_list }

            { if state.read_only {
                html! { <p class="day-read-only-note">{"You can't edit habits of a past date."}</p> }
            } else {
                html! {}
            } }
        </div>
    }
}
