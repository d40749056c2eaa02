//! Types and calendar logic shared by the backend and the dashboard frontend.

pub mod dashboards;
pub mod domain;
pub mod shared;
