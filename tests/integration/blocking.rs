//! Blocking mirror against the mocked shop.
//!
//! The mock server lives on its own runtime; the blocking calls run on the
//! plain test thread like they would in a synchronous program.

use super::common::{category_xml, client_for, document, xml};
use prestashop_ws::blocking;
use prestashop_ws::{Category, Filter, Translated};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer};

#[test]
fn test_blocking_crud_cycle() {
    let server_rt = tokio::runtime::Runtime::new().unwrap();
    let server = server_rt.block_on(MockServer::start());

    server_rt.block_on(async {
        Mock::given(method("POST"))
            .and(path("/api/categories"))
            .respond_with(xml(201, document(&category_xml(30, "Plum"))))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/categories/30"))
            .respond_with(xml(200, document(&category_xml(30, "Plum"))))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .and(query_param("display", "[id]"))
            .and(query_param("filter[name]", "Plum"))
            .respond_with(xml(
                200,
                document("<categories><category><id>30</id></category></categories>"),
            ))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/categories/30"))
            .respond_with(xml(200, ""))
            .expect(1)
            .mount(&server)
            .await;
    });

    let categories = blocking::Factory::categories(client_for(&server)).unwrap();

    let created = categories
        .add(&Category {
            id_parent: Some(2),
            name: Some(Translated::single(1, "Plum")),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(created.id, Some(30));

    let ids = categories
        .get_ids_by_filter(&Filter::new().field("name", "Plum"))
        .unwrap();
    assert_eq!(ids, vec![30]);

    categories.delete_entity(&created).unwrap();
}
