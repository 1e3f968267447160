use tinyhttp::http::response::{Response, ResponseBuilder, SERVER_IDENT, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::ImATeapot.as_u16(), 418);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(StatusCode::ImATeapot.reason_phrase(), "I'm a teapot");
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"Hello, World!".to_vec());
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(body.clone())
        .build();

    let content_length = response.headers.get("Content-Length").unwrap();
    assert_eq!(content_length, &body.len().to_string());
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    // File responses declare the on-disk size while the body is streamed
    // separately; the builder must not clobber it.
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .build();

    assert_eq!(response.headers.get("Content-Length").unwrap(), "999");
}

#[test]
fn test_every_response_identifies_server_and_closes() {
    let responses = [
        ResponseBuilder::new(StatusCode::Ok).build(),
        Response::not_found(),
        Response::teapot(),
        Response::html("<html></html>"),
    ];

    for response in responses {
        assert_eq!(response.headers.get("Server").unwrap(), SERVER_IDENT);
        assert_eq!(response.headers.get("Connection").unwrap(), "close");
    }
}

#[test]
fn test_not_found_helper() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, b"404 Not Found\n".to_vec());
    assert_eq!(response.headers.get("Content-Type").unwrap(), "text/plain");
    // Declared length matches the body exactly.
    assert_eq!(
        response.headers.get("Content-Length").unwrap(),
        &response.body.len().to_string()
    );
}

#[test]
fn test_teapot_helper() {
    let response = Response::teapot();

    assert_eq!(response.status, StatusCode::ImATeapot);
    assert!(response.body.starts_with(b"418 I'm a teapot\n"));
}

#[test]
fn test_html_helper() {
    let response = Response::html("<html><body>hi</body></html>");

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(
        response.headers.get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );
}
