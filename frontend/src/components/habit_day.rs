use chrono::NaiveDate;
use shared::progress_percentage;
use yew::prelude::*;

use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct HabitDayProps {
    pub date: NaiveDate,
    /// Habits possible on this day, if the summary has an entry for it
    #[prop_or_default]
    pub amount: Option<u32>,
    #[prop_or_default]
    pub completed: Option<u32>,
    pub on_select: Callback<NaiveDate>,
}

/// Fill bucket for the heat-map cell, from empty (0) to full (5)
fn fill_level(progress: u8) -> u8 {
    match progress {
        0 => 0,
        1..=20 => 1,
        21..=40 => 2,
        41..=60 => 3,
        61..=80 => 4,
        _ => 5,
    }
}

#[function_component(HabitDay)]
pub fn habit_day(props: &HabitDayProps) -> Html {
    let amount = props.amount.unwrap_or(0);
    let completed = props.completed.unwrap_or(0);
    let progress = progress_percentage(amount, completed);

    let onclick = {
        let date = props.date;
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(date))
    };

    let tooltip = format!(
        "{}: {} of {} habits completed",
        date_utils::format_date_for_display(props.date),
        completed,
        amount,
    );

    html! {
        <button
            type="button"
            class={classes!("habit-day", format!("habit-day-level-{}", fill_level(progress)))}
            title={tooltip}
            {onclick}
        />
    }
}
