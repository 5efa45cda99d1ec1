//! Veil components

pub mod element;
pub mod floating_label;
pub mod form_group;
pub mod offcanvas;
pub mod toolbar;
