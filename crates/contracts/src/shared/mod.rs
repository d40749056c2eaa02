pub mod academic_week;
