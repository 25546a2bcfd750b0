pub mod controller;
pub mod feed;
pub mod model;
pub mod router;
pub mod service;
