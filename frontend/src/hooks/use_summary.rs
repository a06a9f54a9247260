use shared::SummaryDay;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{api::ApiClient, logging::Logger};

const FETCH_ERROR_MESSAGE: &str = "Something went wrong while loading the summary.";

#[derive(Clone, PartialEq)]
pub struct SummaryState {
    pub summary: Vec<SummaryDay>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseSummaryResult {
    pub state: SummaryState,
    pub actions: UseSummaryActions,
}

#[derive(Clone)]
pub struct UseSummaryActions {
    pub refresh_summary: Callback<()>,
}

#[hook]
pub fn use_summary(api_client: &ApiClient) -> UseSummaryResult {
    let summary = use_state(Vec::<SummaryDay>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let fetch_generation = use_mut_ref(|| 0u32);

    let refresh_summary = {
        let api_client = api_client.clone();
        let summary = summary.clone();
        let loading = loading.clone();
        let error = error.clone();
        let fetch_generation = fetch_generation.clone();

        use_callback((), move |_, _| {
            *fetch_generation.borrow_mut() += 1;
            let generation = *fetch_generation.borrow();

            let api_client = api_client.clone();
            let summary = summary.clone();
            let loading = loading.clone();
            let error = error.clone();
            let guard = fetch_generation.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_summary().await {
                    Ok(data) => {
                        if *guard.borrow() != generation {
                            return;
                        }
                        summary.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "use-summary",
                            &format!("Failed to fetch summary data: {}", e),
                        );
                        if *guard.borrow() != generation {
                            return;
                        }
                        error.set(Some(FETCH_ERROR_MESSAGE.to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Load once on mount; invalidate in-flight fetches on unmount
    use_effect_with((), {
        let refresh_summary = refresh_summary.clone();
        let fetch_generation = fetch_generation.clone();
        move |_| {
            refresh_summary.emit(());
            move || {
                *fetch_generation.borrow_mut() += 1;
            }
        }
    });

    let state = SummaryState {
        summary: (*summary).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = UseSummaryActions { refresh_summary };

    UseSummaryResult { state, actions }
}
