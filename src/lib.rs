//! Bondcheck - prize bond draw checking service.
//!
//! Parses bond lists and draw results from text, spreadsheet and PDF files,
//! normalizes them into six digit bond numbers and reports which of the
//! user's bonds won. Exposed through a small axum web server and a CLI.

pub mod cli;
pub mod config;
pub mod matcher;
pub mod models;
pub mod parser;
pub mod server;
