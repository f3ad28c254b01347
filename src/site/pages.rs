//! HTML for the two dynamic routes.

use time::OffsetDateTime;
use time::macros::format_description;

use crate::http::request::Request;

/// Current wall-clock time in the local zone, or UTC when the local offset
/// cannot be determined.
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Formats as `2024-05-01 13:45:09.123456`.
pub fn timestamp(now: OffsetDateTime) -> String {
    let format = format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]"
    );
    now.format(format).unwrap_or_default()
}

pub fn now_page(now: OffsetDateTime) -> String {
    format!(
        "<html>\n<body>\n<h1>Now: {}</h1>\n</body>\n</html>\n",
        timestamp(now)
    )
}

pub fn show_request_page(req: &Request) -> String {
    let headers: String = req
        .headers
        .iter()
        .map(|(name, value)| format!("{}: {}\n", escape(name), escape(value)))
        .collect();

    format!(
        "<html>\n<body>\n\
         <h1>Request Line:</h1>\n<p>{} {} {}</p>\n\
         <h1>Headers:</h1>\n<pre>{}</pre>\n\
         <h1>Body:</h1>\n<pre>{}</pre>\n\
         </body>\n</html>\n",
        escape(&req.method),
        escape(&req.path),
        escape(&req.version),
        headers,
        escape(&req.body_text()),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
