//! Request routing.
//!
//! Two paths are served dynamically, `/now` and `/show_request`; every other
//! path is looked up as a file under the static root.

pub mod pages;
pub mod static_files;

pub use static_files::{NotFound, StaticFiles};

use crate::config::Config;
use crate::http::mime;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Which handler serves a request, decided by exact match on the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    Now,
    ShowRequest,
    /// Request path with one leading `/` removed
    Static(&'a str),
}

impl<'a> Route<'a> {
    pub fn from_path(path: &'a str) -> Self {
        match path {
            "/now" => Route::Now,
            "/show_request" => Route::ShowRequest,
            other => Route::Static(static_files::relative_path(other)),
        }
    }
}

/// Everything a connection needs to answer a request. Built once at startup
/// and shared read-only between connections.
#[derive(Debug, Clone)]
pub struct Site {
    static_files: StaticFiles,
}

impl Site {
    pub fn new(static_files: StaticFiles) -> Self {
        Self { static_files }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(StaticFiles::from_config(&cfg.static_files))
    }

    pub fn static_files(&self) -> &StaticFiles {
        &self.static_files
    }

    pub async fn dispatch(&self, req: &Request) -> Response {
        match Route::from_path(&req.path) {
            Route::Now => html(pages::now_page(pages::local_now())),
            Route::ShowRequest => html(pages::show_request_page(req)),
            Route::Static(relative) => match self.static_files.load(relative).await {
                Ok(bytes) => ResponseBuilder::new(StatusCode::Ok)
                    .path(req.path.as_str())
                    .body(bytes)
                    .build(),
                Err(NotFound) => Response::not_found(),
            },
        }
    }
}

fn html(page: String) -> Response {
    ResponseBuilder::new(StatusCode::Ok)
        .content_type(mime::TEXT_HTML)
        .body(page.into_bytes())
        .build()
}
