pub mod back_button;
pub mod checkbox;
pub mod day_screen;
pub mod habit_day;
pub mod habits_empty;
pub mod header;
pub mod loading;
pub mod progress_bar;
pub mod summary_table;

pub use back_button::BackButton;
pub use checkbox::Checkbox;
pub use day_screen::DayScreen;
pub use habit_day::HabitDay;
pub use habits_empty::HabitsEmpty;
pub use header::Header;
pub use loading::Loading;
pub use progress_bar::ProgressBar;
pub use summary_table::SummaryTable;
