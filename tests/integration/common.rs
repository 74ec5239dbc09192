//! Shared helpers for the mocked shop.

use prestashop_ws::PrestaShopClient;
use wiremock::{MockServer, ResponseTemplate};

pub const WS_KEY: &str = "TESTKEY0123456789ABCDEFGHIJKLMNO";

/// Client pointed at `<mock>/api`, the way shops expose the web service.
pub fn client_for(server: &MockServer) -> PrestaShopClient {
    PrestaShopClient::new(format!("{}/api", server.uri()), WS_KEY)
        .expect("mock server URI should be a valid base URL")
}

/// XML answer with the headers PrestaShop sends.
pub fn xml(status: u16, body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .set_body_raw(body.into(), "text/xml;charset=utf-8")
        .insert_header("psws-version", "8.1.2")
}

/// Wrap elements in the response document envelope.
pub fn document(inner: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <prestashop xmlns:xlink=\"http://www.w3.org/1999/xlink\">\n{}\n</prestashop>",
        inner
    )
}

/// A full `<category>` element as returned by `GET categories/<id>`.
pub fn category_xml(id: u64, name: &str) -> String {
    format!(
        "<category>\
         <id><![CDATA[{id}]]></id>\
         <id_parent><![CDATA[2]]></id_parent>\
         <active><![CDATA[1]]></active>\
         <position><![CDATA[0]]></position>\
         <name><language id=\"1\"><![CDATA[{name}]]></language></name>\
         <link_rewrite><language id=\"1\"><![CDATA[{slug}]]></language></link_rewrite>\
         </category>",
        id = id,
        name = name,
        slug = name.to_lowercase()
    )
}

/// PrestaShop error document.
pub fn error_document(code: u32, message: &str) -> String {
    document(&format!(
        "<errors><error><code><![CDATA[{}]]></code><message><![CDATA[{}]]></message></error></errors>",
        code, message
    ))
}
