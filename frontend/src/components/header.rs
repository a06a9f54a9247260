use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Habit Tracker"}</h1>
            </div>
        </header>
    }
}
