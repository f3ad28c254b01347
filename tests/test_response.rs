use homebrew_web::http::response::{
    NOT_FOUND_BODY, Response, ResponseBuilder, SERVER_NAME, StatusCode, http_date,
};
use homebrew_web::http::writer::{ResponseWriter, serialize_response};
use time::macros::datetime;

fn header_names(response: &Response) -> Vec<&str> {
    response.headers.iter().map(|(k, _)| *k).collect()
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_response_has_fixed_headers_in_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .content_type("text/html")
        .body(b"<p>hi</p>".to_vec())
        .build();

    assert_eq!(
        header_names(&response),
        vec!["Date", "Host", "Content-Length", "Connection", "Content-Type"]
    );
    assert_eq!(response.header("Host"), Some(SERVER_NAME));
    assert_eq!(response.header("Connection"), Some("close"));
    assert_eq!(response.header("Content-Length"), Some("9"));
}

#[test]
fn test_response_content_type_from_path() {
    let cases = [
        ("/index.html", "text/html"),
        ("/style.css", "text/css"),
        ("/logo.png", "image/png"),
        ("/photo.jpg", "image/jpg"),
        ("/anim.gif", "image/gif"),
        ("/img.bmp", "application/octet-stream"),
        ("/README", "application/octet-stream"),
    ];

    for (path, expected) in cases {
        let response = ResponseBuilder::new(StatusCode::Ok).path(path).build();
        assert_eq!(response.content_type(), Some(expected), "path {path}");
    }
}

#[test]
fn test_explicit_content_type_wins_over_path() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .path("/logo.png")
        .content_type("text/html")
        .build();

    assert_eq!(response.content_type(), Some("text/html"));
}

#[test]
fn test_response_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert!(response.body.is_empty());
    assert_eq!(response.header("Content-Length"), Some("0"));
}

#[test]
fn test_http_date_format() {
    assert_eq!(
        http_date(datetime!(1994-11-06 08:49:37 UTC)),
        "Sun, 06 Nov 1994 08:49:37 GMT"
    );
    // Non-UTC offsets are converted before formatting.
    assert_eq!(
        http_date(datetime!(1994-11-06 17:49:37 +09:00)),
        "Sun, 06 Nov 1994 08:49:37 GMT"
    );
}

#[test]
fn test_response_uses_given_date() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .date(datetime!(2024-02-29 23:59:59 UTC))
        .build();

    assert_eq!(response.header("Date"), Some("Thu, 29 Feb 2024 23:59:59 GMT"));
}

#[test]
fn test_response_not_found_helper() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, NOT_FOUND_BODY.to_vec());
    assert_eq!(
        response.body,
        b"<html><body><h1>404 Not Found</h1></body></html>".to_vec()
    );
    assert_eq!(response.content_type(), Some("text/html"));
}

#[test]
fn test_serialize_response_framing() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .date(datetime!(1994-11-06 08:49:37 UTC))
        .content_type("text/plain")
        .body(b"hello".to_vec())
        .build();

    let bytes = serialize_response(&response);
    let expected = "HTTP/1.1 200 OK\r\n\
                    Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n\
                    Host: HomebrewWebServer/0.1\r\n\
                    Content-Length: 5\r\n\
                    Connection: close\r\n\
                    Content-Type: text/plain\r\n\
                    \r\n\
                    hello";
    assert_eq!(&bytes[..], expected.as_bytes());
}

#[test]
fn test_content_length_matches_binary_body() {
    let body: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let response = ResponseBuilder::new(StatusCode::Ok)
        .path("/blob")
        .body(body.clone())
        .build();

    let bytes = serialize_response(&response);
    let split = bytes.windows(4).position(|w| w == b"\r\n\r\n").unwrap() + 4;
    let head = std::str::from_utf8(&bytes[..split]).unwrap();
    let length: usize = head
        .lines()
        .find_map(|l| l.strip_prefix("Content-Length: "))
        .unwrap()
        .parse()
        .unwrap();

    assert_eq!(length, body.len());
    assert_eq!(&bytes[split..split + length], &body[..]);
    assert_eq!(bytes.len(), split + length);
}

#[tokio::test]
async fn test_response_writer_sends_everything() {
    let response = ResponseBuilder::new(StatusCode::NotFound)
        .content_type("text/html")
        .body(vec![b'x'; 20_000])
        .build();
    let expected = serialize_response(&response);

    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&response);
    assert_eq!(writer.len(), expected.len());
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(out, expected.to_vec());
    assert!(out.starts_with(b"HTTP/1.1 404 Not Found\r\n"));
}
