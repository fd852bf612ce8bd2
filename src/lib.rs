//! Terminal counter and shopping list.
//!
//! Each screen is a [`mvi::Store`] driven by intents; [`app::handler`] turns key
//! presses into intents and [`ui::render`] draws the current snapshots.

pub mod app;
pub mod config;
pub mod counter;
pub mod logging;
pub mod mvi;
pub mod shopping;
pub mod ui;
