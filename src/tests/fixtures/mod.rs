pub mod activities;
pub mod app;
