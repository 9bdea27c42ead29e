//! User interface module - GTK-based

pub mod gtk;
