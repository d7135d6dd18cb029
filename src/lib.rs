// ABOUTME: Library crate for project-wizard exposing the wizard core, app state and UI for testing

#![allow(missing_docs)]

pub mod app;
pub mod components;
pub mod config;
pub mod wizard;
