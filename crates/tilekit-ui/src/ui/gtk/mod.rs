pub mod controls;
pub mod file_dialog;
pub mod file_ops;
pub mod layout_canvas;
pub mod layout_view;
pub mod summary_list;
