pub mod components;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod settings;
