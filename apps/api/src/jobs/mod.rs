pub mod compat;
pub mod filters;
pub mod handlers;
pub mod payload;
pub mod posted_date;
pub mod serializers;
