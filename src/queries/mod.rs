pub mod birthday_queries;
pub mod contact_queries;
