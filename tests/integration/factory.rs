//! Factory operations end to end against the mocked shop.

use super::common::{category_xml, client_for, document, error_document, xml, WS_KEY};
use prestashop_ws::{Category, Entity, ErrorKind, Factory, Filter, Resource, SortOrder, Translated};
use serde::{Deserialize, Serialize};
use wiremock::matchers::{any, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer};

fn apple() -> Category {
    Category {
        id_parent: Some(2),
        active: Some(1),
        name: Some(Translated::single(1, "Apple")),
        link_rewrite: Some(Translated::single(1, "apple")),
        ..Default::default()
    }
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_add_echoes_server_state() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/categories"))
        .and(query_param("ws_key", WS_KEY))
        .and(body_string_contains("<prestashop>"))
        .and(body_string_contains("<category>"))
        .respond_with(xml(201, document(&category_xml(12, "Apple"))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories/12"))
        .respond_with(xml(200, document(&category_xml(12, "Apple"))))
        .expect(2)
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));

    // A stale id on the draft must not reach the server.
    let mut draft = apple();
    draft.set_id(Some(99));

    let created = categories.add(&draft).await.expect("add should succeed");
    assert_eq!(created.id, Some(12));
    assert_eq!(draft.id, Some(99));

    let fetched = categories.get(12).await.expect("get should succeed");
    assert_eq!(created, fetched);

    let requests = server.received_requests().await.expect("recording enabled");
    let post = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .expect("POST was sent");
    let body = String::from_utf8_lossy(&post.body);
    assert!(!body.contains("<id>"), "create payload carried an id: {body}");
}

#[tokio::test]
async fn test_add_without_created_id_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/categories"))
        .respond_with(xml(201, document("<category><active>1</active></category>")))
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));
    let err = categories.add(&apple()).await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedResponse(_)));
}

#[tokio::test]
async fn test_add_list_keeps_inputs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/categories"))
        .and(body_string_contains("Apple"))
        .and(body_string_contains("Pear"))
        .respond_with(xml(
            201,
            document(&format!(
                "<categories>{}{}</categories>",
                category_xml(20, "Apple"),
                category_xml(21, "Pear")
            )),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));
    let mut pear = apple();
    pear.name = Some(Translated::single(1, "Pear"));
    let inputs = vec![apple(), pear];

    let created = categories.add_list(&inputs).await.unwrap();

    assert_eq!(created.iter().map(|c| c.id).collect::<Vec<_>>(), vec![Some(20), Some(21)]);
    assert!(inputs.iter().all(|c| c.id.is_none()));
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct OrderHistory {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    id_order: u64,
    id_order_state: u64,
}

impl Entity for OrderHistory {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn set_id(&mut self, id: Option<u64>) {
        self.id = id;
    }
}

#[tokio::test]
async fn test_add_sending_email_on_custom_resource() {
    let server = MockServer::start().await;
    let created = "<order_history><id>77</id><id_order>5</id_order><id_order_state>4</id_order_state></order_history>";

    Mock::given(method("POST"))
        .and(path("/api/order_histories"))
        .and(query_param("sendemail", "1"))
        .and(body_string_contains("<id_order_state>4</id_order_state>"))
        .respond_with(xml(201, document(created)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/order_histories/77"))
        .respond_with(xml(200, document(created)))
        .expect(1)
        .mount(&server)
        .await;

    let histories: Factory<OrderHistory> =
        Factory::new(client_for(&server), Resource::ORDER_HISTORIES);
    let history = histories
        .add_sending_email(&OrderHistory {
            id: None,
            id_order: 5,
            id_order_state: 4,
        })
        .await
        .unwrap();

    assert_eq!(history.id, Some(77));
    assert_eq!(history.id_order_state, 4);
}

// ============================================================================
// Read
// ============================================================================

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories/404"))
        .respond_with(xml(404, error_document(90, "Id(s) not exists: 404")))
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));
    let err = categories.get(404).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
    match err.kind {
        ErrorKind::RemoteService {
            message,
            request_dump,
            body,
            ..
        } => {
            assert_eq!(message, "Id(s) not exists: 404");
            assert!(request_dump.contains("categories/404"));
            assert!(!request_dump.contains(WS_KEY));
            assert!(!body.contains(WS_KEY));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(xml(
            200,
            document(
                r#"<categories>
<category id="1" xlink:href="http://shop.example/api/categories/1"/>
<category id="2" xlink:href="http://shop.example/api/categories/2"/>
<category id="12" xlink:href="http://shop.example/api/categories/12"/>
</categories>"#,
            ),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));
    assert_eq!(categories.get_ids().await.unwrap(), vec![1, 2, 12]);
}

#[tokio::test]
async fn test_filter_scenario() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .and(query_param("display", "full"))
        .and(query_param("filter[name]", "Apple"))
        .and(query_param("sort", "name_ASC"))
        .and(query_param("limit", "0,5"))
        .and(query_param("date", "1"))
        .and(query_param("ws_key", WS_KEY))
        .respond_with(xml(
            200,
            document(&format!("<categories>{}</categories>", category_xml(12, "Apple"))),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));
    let filter = Filter::new()
        .field("name", "Apple")
        .sort_by("name", SortOrder::Asc)
        .page(0, 5);

    let found = categories.get_by_filter(&filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name.as_ref().and_then(|n| n.get(1)), Some("Apple"));
}

#[tokio::test]
async fn test_get_all_sends_full_display() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .and(query_param("display", "full"))
        .and(query_param("date", "1"))
        .respond_with(xml(
            200,
            document(&format!(
                "<categories>{}{}</categories>",
                category_xml(1, "Root"),
                category_xml(2, "Home")
            )),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));
    assert_eq!(
        categories.request_for_all(),
        categories.request_for_filter(&Filter::default())
    );

    let all = categories.get_all().await.unwrap();
    assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![Some(1), Some(2)]);
}

#[tokio::test]
async fn test_empty_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(xml(200, document("<categories/>")))
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));
    let found = categories
        .get_by_filter(&Filter::new().field("name", "Nothing"))
        .await
        .unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_display_projection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .and(query_param("display", "[id,active]"))
        .respond_with(xml(
            200,
            document("<categories><category><id>4</id><active>0</active></category></categories>"),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));
    let sparse = categories
        .get_by_filter(&Filter::new().display(["id", "active"]))
        .await
        .unwrap();

    assert_eq!(sparse.len(), 1);
    assert_eq!(sparse[0].id, Some(4));
    assert_eq!(sparse[0].active, Some(0));
    assert_eq!(sparse[0].name, None);
}

#[tokio::test]
async fn test_get_ids_by_filter_skips_blank_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .and(query_param("display", "[id]"))
        .and(query_param("filter[active]", "1"))
        .respond_with(xml(
            200,
            document(
                "<categories>\
                 <category><id><![CDATA[9]]></id></category>\
                 <category><id></id></category>\
                 <category><id><![CDATA[3]]></id></category>\
                 </categories>",
            ),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));
    let ids = categories
        .get_ids_by_filter(&Filter::new().field("active", "1").display(["name"]))
        .await
        .unwrap();
    assert_eq!(ids, vec![9, 3]);
}

// ============================================================================
// Update / Delete
// ============================================================================

#[tokio::test]
async fn test_update_puts_full_state() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/categories/12"))
        .and(body_string_contains("<id>12</id>"))
        .and(body_string_contains("Green Apple"))
        .respond_with(xml(200, document(&category_xml(12, "Green Apple"))))
        .expect(1)
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));
    let mut category = apple();
    category.id = Some(12);
    category.name = Some(Translated::single(1, "Green Apple"));

    categories.update(&category).await.unwrap();
}

#[tokio::test]
async fn test_update_list() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/categories"))
        .and(body_string_contains("<id>20</id>"))
        .and(body_string_contains("<id>21</id>"))
        .respond_with(xml(
            200,
            document(&format!(
                "<categories>{}{}</categories>",
                category_xml(20, "Apple"),
                category_xml(21, "Pear")
            )),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));
    let mut first = apple();
    first.id = Some(20);
    let mut second = apple();
    second.id = Some(21);

    let updated = categories.update_list(&[first, second]).await.unwrap();
    assert_eq!(updated.len(), 2);
    assert_eq!(updated[1].name.as_ref().and_then(|n| n.get(1)), Some("Pear"));
}

#[tokio::test]
async fn test_missing_id_makes_no_call() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(xml(200, document("")))
        .expect(0)
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));

    let err = categories.update(&apple()).await.unwrap_err();
    assert!(err.is_missing_identifier());

    let err = categories.delete_entity(&apple()).await.unwrap_err();
    assert!(err.is_missing_identifier());
}

#[tokio::test]
async fn test_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/categories/12"))
        .respond_with(xml(200, ""))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/categories/13"))
        .respond_with(xml(404, error_document(90, "Id(s) not exists: 13")))
        .expect(1)
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));
    let mut category = apple();
    category.id = Some(12);

    categories.delete_entity(&category).await.unwrap();
    assert!(categories.delete(13).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_unauthorized_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/categories/1"))
        .respond_with(xml(401, error_document(17, "Authentication key is empty")))
        .mount(&server)
        .await;

    let categories = Factory::<Category>::categories(client_for(&server));
    let err = categories.get(1).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.is_remote());
    assert!(!err.is_not_found());
    assert!(!format!("{err:?}").contains(WS_KEY));
}
