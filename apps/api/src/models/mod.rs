pub mod company;
pub mod content;
pub mod job;
pub mod recruiter;
