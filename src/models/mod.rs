pub mod api;
pub mod formation;
pub mod message;
pub mod registration;
