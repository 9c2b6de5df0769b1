//! Rail currency lookup CLI: command definitions, rendering, logging, and
//! selection persistence.

pub mod cli;
pub mod commands;
pub mod display;
pub mod logging;
pub mod state;
