pub mod aggregate;

pub use aggregate::{Club, ClubDto, ClubId, PagelaSubmission};
