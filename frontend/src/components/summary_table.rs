use chrono::NaiveDate;
use shared::grid_padding;
use yew::prelude::*;

use crate::components::HabitDay;
use crate::hooks::use_summary::{use_summary, UseSummaryResult};
use crate::services::api::ApiClient;

const WEEK_DAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

#[derive(Properties, PartialEq)]
pub struct SummaryTableProps {
    pub api_client: ApiClient,
    /// Year-to-date sequence captured once at app start
    pub dates: Vec<NaiveDate>,
    pub on_select_day: Callback<NaiveDate>,
}

#[function_component(SummaryTable)]
pub fn summary_table(props: &SummaryTableProps) -> Html {
    let UseSummaryResult { state, .. } = use_summary(&props.api_client);

    let padding = grid_padding(props.dates.len());

    let grid = if state.loading {
        html! { <div class="loading">{"Loading summary..."}</div> }
    } else {
        html! {
            <div class="summary-grid">
                { for props.dates.iter().map(|date| {
                    // Join summary entries at day granularity; days the
                    // server never reported render as empty cells
                    let entry = state.summary.iter().find(|day| day.day() == Some(*date));
                    html! {
                        <HabitDay
                            key={date.to_string()}
                            date={*date}
                            amount={entry.map(|day| day.amount)}
                            completed={entry.map(|day| day.completed)}
                            on_select={props.on_select_day.clone()}
                        />
                    }
                }) }
                { for (0..padding).map(|i| html! {
                    <div key={format!("pad-{}", i)} class="habit-day placeholder" />
                }) }
            </div>
        }
    };

    html! {
        <div class="summary">
            { if let Some(error) = state.error.as_ref() {
                html! { <div class="form-message error">{ error }</div> }
            } else {
                html! {}
            } }

            <div class="summary-table">
                <div class="summary-weekdays">
                    { for WEEK_DAY_LABELS.iter().enumerate().map(|(i, label)| html! {
                        <div key={format!("{}-{}", label, i)} class="weekday">{ *label }</div>
                    }) }
                </div>
                { grid }
            </div>
        </div>
    }
}
