use std::net::TcpListener;
use std::time::Duration;

use mockito::Matcher;
use serde::Deserialize;

use metro_site::catalog::{Catalogs, ResourceKind};
use metro_site::domain::blog::Blog;
use metro_site::domain::page::ListPage;
use metro_site::domain::types::ResourceKey;
use metro_site::repository::endpoint::ApiBase;
use metro_site::repository::errors::{FailureKind, FetchError};
use metro_site::repository::http::HttpContentSource;
use metro_site::repository::outcome::FetchOutcome;
use metro_site::repository::{ContentRepository, ListQuery};

mod common;

#[derive(Debug, Deserialize, PartialEq)]
struct Card {
    id: u64,
}

fn page_query(page: &str, size: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("page".into(), page.into()),
        Matcher::UrlEncoded("size".into(), size.into()),
    ])
}

#[actix_web::test]
async fn first_page_of_three_is_decoded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/public/blogs/division/Electrical")
        .match_query(page_query("0", "12"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::blog_page(1, 12, 0, 30))
        .expect(1)
        .create_async()
        .await;

    let repo = common::site_repository(&server.url());
    let catalogs = Catalogs::default();
    let query = ListQuery::new().filter("division", "Electrical").paginate(0, 12);
    let page: ListPage<Blog> = repo
        .fetch_list(catalogs.get(ResourceKind::Blogs), &query)
        .await
        .into_page(12);

    mock.assert_async().await;
    assert_eq!(page.items.len(), 12);
    assert_eq!(page.total_elements, 30);
    assert_eq!(page.total_pages, 3);
    assert!(page.is_first);
    assert!(!page.is_last);
}

#[actix_web::test]
async fn server_error_becomes_empty_page() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/public/products")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let repo = common::site_repository(&server.url());
    let catalogs = Catalogs::default();
    let outcome = repo
        .fetch_list::<Card>(
            catalogs.get(ResourceKind::Products),
            &ListQuery::new().paginate(1, 12),
        )
        .await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::NonSuccessStatus));
    assert_eq!(outcome.into_page(12), ListPage::empty(12));
}

#[actix_web::test]
async fn refused_connection_is_a_network_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let repo = common::site_repository(&format!("http://{addr}"));
    let catalogs = Catalogs::default();
    let outcome = repo
        .fetch_list::<Card>(catalogs.get(ResourceKind::News), &ListQuery::new())
        .await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::NetworkError));
    assert!(outcome.into_page(12).items.is_empty());
}

#[actix_web::test]
async fn silent_backend_times_out_as_network_error() {
    // Connections complete through the listen backlog but nothing ever answers.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let source = HttpContentSource::new(Duration::from_millis(200)).unwrap();
    let repo = ContentRepository::new(source, ApiBase::new(&format!("http://{addr}")).unwrap());
    let catalogs = Catalogs::default();
    let outcome = repo
        .fetch_list::<Card>(
            catalogs.get(ResourceKind::Products),
            &ListQuery::new().paginate(0, 12),
        )
        .await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::NetworkError));
    assert_eq!(outcome.into_page(12), ListPage::empty(12));
    drop(listener);
}

#[actix_web::test]
async fn malformed_body_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/public/gallery")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let repo = common::site_repository(&server.url());
    let catalogs = Catalogs::default();
    let outcome = repo
        .fetch_list::<Card>(catalogs.get(ResourceKind::Gallery), &ListQuery::new())
        .await;

    assert_eq!(outcome.failure_kind(), Some(FailureKind::DecodeError));
}

#[actix_web::test]
async fn division_and_search_use_one_combined_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let combined = server
        .mock("GET", "/api/public/blogs/division/Electrical/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("keyword".into(), "motor".into()),
            Matcher::UrlEncoded("page".into(), "0".into()),
            Matcher::UrlEncoded("size".into(), "12".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::blog_page(1, 2, 0, 2))
        .expect(1)
        .create_async()
        .await;

    let repo = common::site_repository(&server.url());
    let catalogs = Catalogs::default();
    let query = ListQuery::new()
        .filter("division", "Electrical")
        .filter("search", "motor")
        .paginate(0, 12);
    let outcome = repo
        .fetch_list::<Blog>(catalogs.get(ResourceKind::Blogs), &query)
        .await;

    combined.assert_async().await;
    assert!(outcome.is_success());
    assert_eq!(outcome.into_page(12).items.len(), 2);
}

#[actix_web::test]
async fn missing_resource_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/public/products/404")
        .with_status(404)
        .create_async()
        .await;
    server
        .mock("GET", "/api/public/news/5")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("null")
        .create_async()
        .await;

    let repo = common::site_repository(&server.url());
    let catalogs = Catalogs::default();

    let product = repo
        .fetch_one::<Card>(catalogs.get(ResourceKind::Products), &ResourceKey::Id(404))
        .await;
    assert_eq!(product, FetchOutcome::Failure(FetchError::NotFound));

    let news = repo
        .fetch_one::<Card>(catalogs.get(ResourceKind::News), &ResourceKey::Id(5))
        .await;
    assert_eq!(news.ok(), None);
}

#[actix_web::test]
async fn bare_array_lists_are_paged_locally() {
    let mut server = mockito::Server::new_async().await;
    let body = serde_json::to_string(
        &(1..=14)
            .map(|id| serde_json::json!({ "id": id }))
            .collect::<Vec<_>>(),
    )
    .unwrap();
    server
        .mock("GET", "/api/public/divisions")
        .match_query(page_query("1", "12"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let repo = common::site_repository(&server.url());
    let catalogs = Catalogs::default();
    let page = repo
        .fetch_list::<Card>(
            catalogs.get(ResourceKind::Divisions),
            &ListQuery::new().paginate(1, 12),
        )
        .await
        .into_page(12);

    assert_eq!(page.items, vec![Card { id: 13 }, Card { id: 14 }]);
    assert_eq!(page.total_elements, 14);
    assert_eq!(page.total_pages, 2);
    assert!(page.is_last && !page.is_first);
}
