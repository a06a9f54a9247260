use yew::prelude::*;

#[function_component(HabitsEmpty)]
pub fn habits_empty() -> Html {
    html! {
        <p class="habits-empty">{"There are no habits to display for this day."}</p>
    }
}
