pub mod aggregate;

pub use aggregate::{AcademicPeriod, AcademicPeriodDto, PeriodError, WeekException};
