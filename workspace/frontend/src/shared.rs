pub mod empty_state;
pub mod not_found;
pub mod toast;
