pub mod ask;
pub mod chat;
pub mod config;
pub mod dashboard;
pub mod datasets;
pub mod explorer;
pub mod helpers;
