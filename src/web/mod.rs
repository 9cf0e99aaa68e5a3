//! HTML front end: askama pages and htmx fragments.

pub mod handlers;
