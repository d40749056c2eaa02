pub mod api;
pub mod controller;
pub mod ui;
pub mod view_state;
