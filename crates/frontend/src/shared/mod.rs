pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod filters;
pub mod icons;
pub mod list_utils;
pub mod number_format;
pub mod page_frame;
