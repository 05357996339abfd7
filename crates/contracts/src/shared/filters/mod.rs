//! Модель фильтров списков заявок.
//!
//! Общая для всех ролевых страниц: значения, выборки по фасетам, полное
//! состояние фильтра и нормализация входящих изменений.

pub mod input;
pub mod selection;
pub mod state;
pub mod value;

pub use input::FacetInput;
pub use selection::FilterSelection;
pub use state::FilterState;
pub use value::FilterValue;
