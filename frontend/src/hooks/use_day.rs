use std::rc::Rc;

use chrono::NaiveDate;
use gloo::timers::future::TimeoutFuture;
use shared::{is_past_day, progress_percentage, CompletionSet, HabitDefinition};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{api::ApiClient, date_utils, logging::Logger};

/// How long a transient toggle error stays on screen
const ERROR_BANNER_MS: u32 = 3000;

const FETCH_ERROR_MESSAGE: &str = "Something went wrong while loading the habits for this day.";
const TOGGLE_ERROR_MESSAGE: &str = "Couldn't update the status of this habit.";

/// Reducer wrapper around [`CompletionSet`] so asynchronous acknowledgments
/// always apply to the latest set instead of a stale render's copy
#[derive(Clone, Default, PartialEq)]
struct CompletionStore(CompletionSet);

enum CompletionAction {
    Reset(Vec<String>),
    BeginToggle(String),
    Confirm(String),
    Fail(String),
}

impl Reducible for CompletionStore {
    type Action = CompletionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut set = self.0.clone();
        match action {
            CompletionAction::Reset(ids) => set.reset(ids),
            CompletionAction::BeginToggle(id) => set.begin_toggle(&id),
            CompletionAction::Confirm(id) => set.confirm(&id),
            CompletionAction::Fail(id) => set.fail(&id),
        }
        Rc::new(Self(set))
    }
}

#[derive(Clone, PartialEq)]
pub struct DayState {
    pub loading: bool,
    pub possible_habits: Vec<HabitDefinition>,
    pub completed: CompletionSet,
    pub error: Option<String>,
    /// Completion percentage derived from the current optimistic set
    pub progress: u8,
    /// Past days render read-only regardless of server-side enforcement
    pub read_only: bool,
}

pub struct UseDayResult {
    pub state: DayState,
    pub actions: UseDayActions,
}

#[derive(Clone)]
pub struct UseDayActions {
    pub toggle_habit: Callback<String>,
}

#[hook]
pub fn use_day(api_client: &ApiClient, date: NaiveDate, today: NaiveDate) -> UseDayResult {
    let loading = use_state(|| true);
    let possible_habits = use_state(Vec::<HabitDefinition>::new);
    let completed = use_reducer(CompletionStore::default);
    let error = use_state(|| None::<String>);

    // Each fetch captures the generation it was started under; a response
    // whose generation no longer matches is dropped instead of applied.
    let fetch_generation = use_mut_ref(|| 0u32);

    let read_only = is_past_day(date, today);

    // Fetch day data on mount and whenever the viewed date changes
    {
        let api_client = api_client.clone();
        let loading = loading.clone();
        let possible_habits = possible_habits.clone();
        let completed = completed.clone();
        let error = error.clone();
        let fetch_generation = fetch_generation.clone();

        use_effect_with(date, move |date| {
            *fetch_generation.borrow_mut() += 1;
            let generation = *fetch_generation.borrow();
            let date = *date;
            let guard = fetch_generation.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_day(&date_utils::to_query_date(date)).await {
                    Ok(day) => {
                        if *guard.borrow() != generation {
                            return;
                        }
                        completed.dispatch(CompletionAction::Reset(day.completed_habits));
                        possible_habits.set(day.possible_habits);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "use-day",
                            &format!("Failed to fetch day data: {}", e),
                        );
                        if *guard.borrow() != generation {
                            return;
                        }
                        completed.dispatch(CompletionAction::Reset(Vec::new()));
                        possible_habits.set(Vec::new());
                        error.set(Some(FETCH_ERROR_MESSAGE.to_string()));
                    }
                }

                loading.set(false);
            });

            // Invalidate in-flight fetches when the view goes away
            move || {
                *fetch_generation.borrow_mut() += 1;
            }
        });
    }

    // Optimistic toggle: flip the local set first, then confirm or revert
    // once the server answers
    let toggle_habit = {
        let api_client = api_client.clone();
        let completed = completed.clone();
        let error = error.clone();

        use_callback(read_only, move |habit_id: String, read_only| {
            if *read_only {
                return;
            }

            completed.dispatch(CompletionAction::BeginToggle(habit_id.clone()));

            let api_client = api_client.clone();
            let completed = completed.clone();
            let error = error.clone();

            spawn_local(async move {
                match api_client.toggle_habit(&habit_id).await {
                    Ok(()) => {
                        completed.dispatch(CompletionAction::Confirm(habit_id));
                    }
                    Err(e) => {
                        Logger::warn_with_component(
                            "use-day",
                            &format!("Failed to toggle habit {}: {}", habit_id, e),
                        );
                        completed.dispatch(CompletionAction::Fail(habit_id));
                        error.set(Some(TOGGLE_ERROR_MESSAGE.to_string()));

                        let error = error.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(ERROR_BANNER_MS).await;
                            error.set(None);
                        });
                    }
                }
            });
        })
    };

    let progress = progress_percentage(possible_habits.len() as u32, completed.0.len() as u32);

    let state = DayState {
        loading: *loading,
        possible_habits: (*possible_habits).clone(),
        completed: completed.0.clone(),
        error: (*error).clone(),
        progress,
        read_only,
    };

    let actions = UseDayActions { toggle_habit };

    UseDayResult { state, actions }
}
