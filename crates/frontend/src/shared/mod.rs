pub mod api_utils;
pub mod components;
pub mod form;
pub mod format;
pub mod icons;
pub mod media;
pub mod paged_select;
