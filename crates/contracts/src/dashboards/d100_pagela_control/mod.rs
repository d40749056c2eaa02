pub mod dto;

pub use dto::{
    ClubWeeklyStatus, CurrentWeek, PagelaStatus, PeriodStatus, WeeklyControlRequest,
    WeeklyControlResponse,
};
