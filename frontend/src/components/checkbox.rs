use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    pub title: String,
    pub checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                on_toggle.emit(());
            }
        })
    };

    let class = classes!(
        "habit-checkbox",
        props.checked.then_some("checked"),
        props.disabled.then_some("disabled"),
    );

    html! {
        <button type="button" {class} disabled={props.disabled} {onclick}>
            <span class="habit-checkbox-box">{ if props.checked { "✓" } else { "" } }</span>
            <span class="habit-checkbox-title">{ &props.title }</span>
        </button>
    }
}
