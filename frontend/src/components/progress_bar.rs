use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Completion percentage in 0..=100, rendered directly as a width
    pub progress: u8,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let progress = props.progress.min(100);

    html! {
        <div class="progress-track">
            <div
                class="progress-fill"
                role="progressbar"
                aria-valuenow={progress.to_string()}
                style={format!("width: {}%", progress)}
            />
        </div>
    }
}
