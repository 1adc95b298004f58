//! Eventing - Messages Flowing Back to the Application Loop

pub mod app_event;
