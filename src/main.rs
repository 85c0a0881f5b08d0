//! Staff Directory - Dioxus Fullstack Web Application
//!
//! Web frontend for the hospital staff directory. All business logic
//! (document analysis, persistence, search indexing, statistics) lives in
//! the remote directory service REST API; this application registers
//! professionals by uploading documents, browses and searches the directory,
//! and renders per-record and aggregate views.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod format;
mod pages;
mod routes;
mod search;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
