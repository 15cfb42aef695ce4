pub mod app;
pub mod counter_view;
