//! Integration tests: fixture parsing and full exports against a mock server.

use amz_wishlist_exporter::amazon::{LocaleTable, Parser, WishlistClient, WishlistCrawler};
use amz_wishlist_exporter::commands::ExportCommand;
use amz_wishlist_exporter::{Config, ExportError, StopReason};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WISHLIST_FIXTURE: &str = include_str!("fixtures/wishlist_page.html");

fn us_parser() -> Parser {
    let table = LocaleTable::standard();
    Parser::new(table.resolve("US").unwrap(), &table)
}

fn mock_config(server: &MockServer) -> Config {
    let mut config = Config { timeout_secs: 5, connect_timeout_secs: 2, ..Config::default() };
    config.base_urls.insert("US".to_string(), server.uri());
    config
}

async fn mount_page(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path("/registry/wishlist/ABC123"))
        .and(query_param("layout", "standard"))
        .and(query_param("page", page))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn read_rows(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).from_path(path).unwrap();
    reader.records().map(|r| r.unwrap().iter().map(String::from).collect()).collect()
}

#[test]
fn test_parse_fixture_items() {
    let page = us_parser().parse_page(WISHLIST_FIXTURE);
    assert_eq!(page.len(), 2);

    let kettle = &page.items[0];
    assert_eq!(kettle.name, "Pour-over Kettle, 1.0 L");
    assert_eq!(kettle.price, 42.5);
    assert_eq!(kettle.url, "http://www.amazon.com/dp/B00TEST001/?coliid=I1XJ2KTC0Z1");
    assert_eq!(kettle.image, "https://images.example.com/I/kettle.jpg");

    // No href on the title: fallback link is kept as-is, price degrades to zero
    let notes = &page.items[1];
    assert_eq!(notes.name, "\"Field Notes\", 3-pack");
    assert_eq!(notes.price, 0.0);
    assert_eq!(notes.url, "https://www.amazon.com/gp/offer-listing/B00TEST002");
    assert_eq!(notes.image, "https://images.example.com/I/book.jpg");
}

#[test]
fn test_parse_fixture_summary() {
    let summary = us_parser().parse_summary(WISHLIST_FIXTURE);
    assert_eq!(summary.title, "Birthday");
    assert_eq!(summary.owner, "Morgan Example");
}

#[tokio::test]
async fn test_export_against_mock_server() {
    let server = MockServer::start().await;
    mount_page(&server, "1", WISHLIST_FIXTURE).await;
    mount_page(&server, "2", WISHLIST_FIXTURE).await;

    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("wishlist.csv");

    let outcome =
        ExportCommand::new(mock_config(&server)).execute("us", "ABC123", &out).await.unwrap();

    assert_eq!(outcome.item_count, 2);
    assert_eq!(outcome.stop_reason, StopReason::RepeatedPage);

    let rows = read_rows(&out);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["Name", "Price", "Url", "Image"]);
    assert_eq!(
        rows[1],
        vec![
            "Pour-over Kettle, 1.0 L".to_string(),
            "42.5".to_string(),
            format!("{}/dp/B00TEST001/?coliid=I1XJ2KTC0Z1", server.uri()),
            "https://images.example.com/I/kettle.jpg".to_string(),
        ]
    );
    assert_eq!(rows[2][0], "\"Field Notes\", 3-pack");
    assert_eq!(rows[2][1], "0");

    let raw = std::fs::read_to_string(&out).unwrap();
    assert!(raw.contains("\"\"\"Field Notes\"\", 3-pack\""));
}

#[tokio::test]
async fn test_export_private_list_writes_header_only() {
    // Nothing mounted: the mock server answers 404
    let server = MockServer::start().await;

    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("private.csv");

    let outcome =
        ExportCommand::new(mock_config(&server)).execute("US", "ABC123", &out).await.unwrap();

    assert_eq!(outcome.item_count, 0);
    assert_eq!(outcome.stop_reason, StopReason::HttpStatus(404));
    assert_eq!(read_rows(&out), vec![vec!["Name", "Price", "Url", "Image"]]);
}

#[tokio::test]
async fn test_crawl_with_real_client_stops_on_empty_page() {
    let server = MockServer::start().await;
    mount_page(&server, "1", WISHLIST_FIXTURE).await;
    mount_page(&server, "2", "<html><body><p>End of list</p></body></html>").await;

    let config = mock_config(&server);
    let table = config.locale_table();
    let client = WishlistClient::new(&config).unwrap();

    let report =
        WishlistCrawler::new(&client, &table).crawl_report("ABC123", "US").await.unwrap();

    assert_eq!(report.count(), 2);
    assert_eq!(report.pages_fetched, 2);
    assert_eq!(report.stop_reason, StopReason::EmptyPage);
}

#[tokio::test]
async fn test_unsupported_locale_is_reported() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("never.csv");

    let err = ExportCommand::new(Config::default())
        .execute("ZZ", "ABC123", &out)
        .await
        .unwrap_err();

    let export_err = err.downcast_ref::<ExportError>().unwrap();
    assert!(export_err.is_unsupported_locale());
    assert!(!out.exists());
}
