//! Фильтрация списков заявок: схема фасетов, контроллер с дебаунсом поиска,
//! логика мультиселекта и её привязка к Leptos.

pub mod controller;
pub mod handle;
pub mod multi_select;
pub mod outside_click;
pub mod schema;

pub use controller::{FilterController, Phase};
pub use handle::{use_filter_controller, FilterControllerHandle, TaskSource};
pub use schema::{FacetSource, FacetSpec, FilterSchema};
