pub mod dashboard;
pub mod status_table;
pub mod week_selector;

pub use dashboard::PagelaControlDashboard;
