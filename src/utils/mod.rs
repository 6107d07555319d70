pub mod i18n;
pub mod message;
pub mod text;
