pub mod auth;
pub mod books;
pub mod borrow;
pub mod notifications;
pub mod users;
