pub mod badge;
pub mod overlay;
