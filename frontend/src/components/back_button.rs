use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackButtonProps {
    pub on_back: Callback<()>,
}

#[function_component(BackButton)]
pub fn back_button(props: &BackButtonProps) -> Html {
    let onclick = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <button type="button" class="back-button" {onclick}>{"‹ Back"}</button>
    }
}
