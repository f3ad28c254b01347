//! Homebrew web server
//!
//! A small HTTP/1.x server on raw TCP sockets: static files plus the
//! `/now` and `/show_request` pages, one task per connection.

pub mod config;
pub mod http;
pub mod server;
pub mod site;
