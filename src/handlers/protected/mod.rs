pub mod auth;
pub mod companies;
pub mod contracts;
pub mod users;
