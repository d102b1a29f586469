//! Integration tests for the scan pipeline
//!
//! These tests use wiremock to create mock HTTP servers and drive the real
//! HTTP fetcher through discovery, resolution and scraping end-to-end.

use sitemap_seo::config::Config;
use sitemap_seo::crawler::{scrape, Coordinator, HttpFetcher, ScanOutcome, SeoRecord};
use sitemap_seo::output::write_json;
use sitemap_seo::sitemap::SitemapResolver;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn urlset(locs: &[String]) -> String {
    let entries: String = locs
        .iter()
        .map(|loc| format!("<url><loc>{}</loc></url>", loc))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{}</urlset>"#,
        entries
    )
}

fn sitemap_index(locs: &[String]) -> String {
    let entries: String = locs
        .iter()
        .map(|loc| format!("<sitemap><loc>{}</loc></sitemap>", loc))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{}</sitemapindex>"#,
        entries
    )
}

fn page_html(title: &str, h1: &str, description: &str) -> String {
    format!(
        r#"<html><head><title>{}</title><meta name="description" content="{}"></head><body><h1>{}</h1></body></html>"#,
        title, description, h1
    )
}

/// Mounts a GET mock serving `body` at `route`, expected to be hit `times` times
async fn mount_get(server: &MockServer, route: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(times)
        .mount(server)
        .await;
}

fn test_fetcher(timeout: Duration) -> HttpFetcher {
    HttpFetcher::new(timeout, vec!["TestBot/1.0".to_string()]).expect("client")
}

#[tokio::test]
async fn test_full_scan_via_robots_txt() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_get(
        &server,
        "/robots.txt",
        "User-agent: *\nSitemap: /sitemap_main.xml\n".to_string(),
        1,
    )
    .await;
    mount_get(
        &server,
        "/sitemap_main.xml",
        sitemap_index(&[format!("{}/posts.xml", base)]),
        1,
    )
    .await;
    mount_get(
        &server,
        "/posts.xml",
        urlset(&[format!("{}/first", base), format!("{}/second", base)]),
        1,
    )
    .await;
    mount_get(&server, "/first", page_html("First", "One", "Desc one"), 1).await;
    mount_get(&server, "/second", page_html("Second", "Two", "Desc two"), 1).await;

    let coordinator = Coordinator::new(&Config::default(), &base).expect("coordinator");
    let outcome = coordinator.run().await.expect("scan failed");

    let ScanOutcome::Completed {
        sitemaps, records, ..
    } = outcome
    else {
        panic!("expected sitemaps to be found");
    };

    assert_eq!(sitemaps, vec![format!("{}/sitemap_main.xml", base)]);
    assert_eq!(
        records,
        vec![
            SeoRecord {
                url: format!("{}/first", base),
                title: "First".to_string(),
                h1: "One".to_string(),
                meta_description: "Desc one".to_string(),
                status_code: 200,
            },
            SeoRecord {
                url: format!("{}/second", base),
                title: "Second".to_string(),
                h1: "Two".to_string(),
                meta_description: "Desc two".to_string(),
                status_code: 200,
            },
        ]
    );
}

#[tokio::test]
async fn test_scan_without_sitemaps() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(5)
        .mount(&server)
        .await;

    let coordinator = Coordinator::new(&Config::default(), &server.uri()).expect("coordinator");
    let outcome = coordinator.run().await.expect("scan failed");

    assert_eq!(outcome, ScanOutcome::NoSitemaps);
}

#[tokio::test]
async fn test_cyclic_sitemaps_fetched_once() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_get(
        &server,
        "/a.xml",
        sitemap_index(&[format!("{}/b.xml", base)]),
        1,
    )
    .await;
    mount_get(
        &server,
        "/b.xml",
        urlset(&[format!("{}/a.xml", base), format!("{}/leaf", base)]),
        1,
    )
    .await;

    let fetcher = test_fetcher(Duration::from_secs(5));
    let pages = SitemapResolver::new(&fetcher)
        .resolve(&format!("{}/a.xml", base))
        .await;

    assert_eq!(pages, vec![format!("{}/leaf", base)]);
}

#[tokio::test]
async fn test_timeout_drops_only_the_slow_page() {
    let server = MockServer::start().await;
    let base = server.uri();

    let urls: Vec<String> = (0..15).map(|i| format!("{}/page{}", base, i)).collect();

    Mock::given(method("GET"))
        .and(path("/page4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page_html("Slow", "", ""))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    for i in (0..15).filter(|i| *i != 4) {
        mount_get(
            &server,
            &format!("/page{}", i),
            page_html(&format!("Page {}", i), "", ""),
            1,
        )
        .await;
    }

    let fetcher = test_fetcher(Duration::from_secs(1));
    let records = scrape(&fetcher, &urls, 10).await;

    assert_eq!(records.len(), 14);
    assert!(records.iter().all(|r| r.url != urls[4]));

    let first_batch = records.iter().filter(|r| urls[..10].contains(&r.url)).count();
    assert_eq!(first_batch, 9);

    let expected: Vec<&String> = urls.iter().filter(|u| *u != &urls[4]).collect();
    let actual: Vec<&String> = records.iter().map(|r| &r.url).collect();
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn test_http_errors_are_skipped() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_get(&server, "/ok", page_html("Fine", "Ok", ""), 1).await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = test_fetcher(Duration::from_secs(5));
    let urls = vec![format!("{}/broken", base), format!("{}/ok", base)];
    let records = scrape(&fetcher, &urls, 10).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Fine");
    assert_eq!(records[0].meta_description, "");
}

#[tokio::test]
async fn test_results_written_as_json() {
    let server = MockServer::start().await;
    let base = server.uri();

    // Discovery and resolution each fetch the sitemap once.
    mount_get(&server, "/sitemap.xml", urlset(&[format!("{}/home", base)]), 2).await;
    mount_get(&server, "/home", page_html("A", "B", "C"), 1).await;

    let coordinator = Coordinator::new(&Config::default(), &base).expect("coordinator");
    let outcome = coordinator.run().await.expect("scan failed");

    let dir = tempfile::TempDir::new().expect("tempdir");
    let output = dir.path().join("output.json");
    write_json(outcome.records(), &output).expect("write failed");

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).expect("read")).expect("json");
    assert_eq!(
        json,
        serde_json::json!([{
            "url": format!("{}/home", base),
            "title": "A",
            "h1": "B",
            "metaDescription": "C",
            "statusCode": 200
        }])
    );
}
