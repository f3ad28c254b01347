use crate::http::mime;
use time::OffsetDateTime;
use time::macros::format_description;

/// Value of the `Host` header on every response.
pub const SERVER_NAME: &str = "HomebrewWebServer/0.1";

pub const NOT_FOUND_BODY: &[u8] = b"<html><body><h1>404 Not Found</h1></body></html>";

/// HTTP status codes the server produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use homebrew_web::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Always carries exactly five headers, in this order: `Date`, `Host`,
/// `Content-Length`, `Connection`, `Content-Type`.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(&'static str, String)>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }

    /// The fixed 404 page.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .content_type(mime::TEXT_HTML)
            .body(NOT_FOUND_BODY.to_vec())
            .build()
    }
}

/// Assembles a [`Response`] with the fixed header set.
///
/// When no explicit content type is given, it is derived from the request
/// path's extension through the MIME table.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .path("/style.css")
///     .body(bytes)
///     .build();
/// assert_eq!(response.content_type(), Some("text/css"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: Option<String>,
    path: String,
    date: Option<OffsetDateTime>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            path: String::new(),
            date: None,
            body: Vec::new(),
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Request path used to derive `Content-Type` when none is set.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Overrides the `Date` header timestamp; defaults to now.
    pub fn date(mut self, date: OffsetDateTime) -> Self {
        self.date = Some(date);
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Response {
        let date = self.date.unwrap_or_else(OffsetDateTime::now_utc);
        let content_type = self
            .content_type
            .unwrap_or_else(|| mime::from_path(&self.path).to_string());

        let headers = vec![
            ("Date", http_date(date)),
            ("Host", SERVER_NAME.to_string()),
            ("Content-Length", self.body.len().to_string()),
            ("Connection", "close".to_string()),
            ("Content-Type", content_type),
        ];

        Response {
            status: self.status,
            headers,
            body: self.body,
        }
    }
}

/// Formats `date` in UTC as `Sun, 06 Nov 1994 08:49:37 GMT`.
pub fn http_date(date: OffsetDateTime) -> String {
    let format = format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
    );

    date.to_offset(time::UtcOffset::UTC)
        .format(format)
        .unwrap_or_default()
}
