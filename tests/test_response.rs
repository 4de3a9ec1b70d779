use lantern::http::mime::ContentType;
use lantern::http::resolver::Resource;
use lantern::http::response::{NOT_FOUND_PAGE, ResponseHead, StatusCode, root_page};
use std::path::PathBuf;

const DATE: &str = "Sun, 06 Nov 1994 08:49:37 GMT";

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
fn test_status_follows_resource() {
    let found = Resource::Found {
        path: PathBuf::from("a.html"),
        extension: "html".to_string(),
    };

    assert_eq!(StatusCode::for_resource(&Resource::Root), StatusCode::Ok);
    assert_eq!(StatusCode::for_resource(&found), StatusCode::Ok);
    assert_eq!(
        StatusCode::for_resource(&Resource::Missing { path: None }),
        StatusCode::NotFound
    );
}

#[test]
fn test_head_for_found_image() {
    let resource = Resource::Found {
        path: PathBuf::from("logo.png"),
        extension: "png".to_string(),
    };
    let head = ResponseHead::new(&resource, DATE, "Lantern");

    assert_eq!(head.status, StatusCode::Ok);
    assert_eq!(head.content_type, ContentType::Png);
    assert_eq!(
        String::from_utf8(head.to_bytes()).unwrap(),
        "HTTP/1.1 200 OK\r\n\
         Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n\
         Server: Lantern\r\n\
         Connection: close\r\n\
         Content-Type: image/png\r\n\
         \r\n"
    );
}

#[test]
fn test_head_for_missing_is_html_404() {
    let resource = Resource::Missing {
        path: Some(PathBuf::from("missing.png")),
    };
    let head = String::from_utf8(ResponseHead::new(&resource, DATE, "Lantern").to_bytes()).unwrap();

    assert!(head.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(head.contains("Content-Type: text/html\r\n"));
}

#[test]
fn test_head_field_order() {
    let head = String::from_utf8(ResponseHead::new(&Resource::Root, DATE, "Lantern").to_bytes()).unwrap();

    let date = head.find("Date:").unwrap();
    let server = head.find("Server:").unwrap();
    let connection = head.find("Connection:").unwrap();
    let content_type = head.find("Content-Type:").unwrap();
    assert!(date < server && server < connection && connection < content_type);
    assert!(head.ends_with("\r\n\r\n"));
    assert!(!head.contains("Content-Length"));
}

#[test]
fn test_root_page_shows_server_name() {
    let page = root_page("Charles' very own server");
    assert!(page.contains("<h3>Charles' very own server</h3>"));
    assert!(page.contains("This is the root of the server."));
}

#[test]
fn test_not_found_page() {
    assert!(NOT_FOUND_PAGE.contains("<h3>404 File Not Found</h3>"));
    assert!(NOT_FOUND_PAGE.ends_with("</body></html>\n"));
}
