use crate::http::request::{Headers, Request};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No CRLF terminating the request line
    MissingRequestLine,
    /// No CRLF-CRLF between the headers and the body
    MissingHeaderTerminator,
    /// Request line is not exactly `method SP path SP version`
    InvalidRequestLine,
    /// Header line without a colon
    InvalidHeader,
    /// Request line or header block is not UTF-8
    InvalidEncoding,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::MissingRequestLine => "missing request line terminator",
            ParseError::MissingHeaderTerminator => "missing blank line after headers",
            ParseError::InvalidRequestLine => "malformed request line",
            ParseError::InvalidHeader => "malformed header line",
            ParseError::InvalidEncoding => "request head is not valid UTF-8",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// Parses one complete request out of `buf`.
///
/// The whole buffer is consumed: everything after the blank line is the body,
/// whatever its length and whatever `Content-Length` says.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let line_end = find(buf, b"\r\n").ok_or(ParseError::MissingRequestLine)?;

    // The blank line may start at the request line's own CRLF when there
    // are no header lines at all.
    let headers_end = find(&buf[line_end..], b"\r\n\r\n")
        .map(|pos| line_end + pos)
        .ok_or(ParseError::MissingHeaderTerminator)?;

    let request_line = to_str(&buf[..line_end])?;
    let header_block = if headers_end > line_end {
        to_str(&buf[line_end + 2..headers_end])?
    } else {
        ""
    };
    let body = buf[headers_end + 4..].to_vec();

    let (method, path, version) = parse_request_line(request_line)?;
    let headers = parse_headers(header_block)?;

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    })
}

fn parse_request_line(line: &str) -> Result<(&str, &str, &str), ParseError> {
    let mut parts = line.split(' ');

    let method = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let path = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let version = parts.next().ok_or(ParseError::InvalidRequestLine)?;

    if parts.next().is_some() || method.is_empty() || path.is_empty() || version.is_empty() {
        return Err(ParseError::InvalidRequestLine);
    }

    Ok((method, path, version))
}

fn parse_headers(block: &str) -> Result<Headers, ParseError> {
    let mut headers = Headers::new();

    if block.is_empty() {
        return Ok(headers);
    }

    for line in block.split("\r\n") {
        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;
        headers.insert(key, value.trim_start_matches(' '));
    }

    Ok(headers)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|w| w == needle)
}

fn to_str(bytes: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|_| ParseError::InvalidEncoding)
}
