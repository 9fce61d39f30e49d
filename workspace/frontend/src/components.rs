pub mod acting_as;
pub mod cards;
pub mod filters;
pub mod form;
pub mod layout;
pub mod modals;
pub mod stats;
