//! HttpSource against a loopback server with canned responses.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use storefront_data::{
    BackoffStrategy, ByteSource, FetchError, FetchPolicy, HttpSource, RetryPolicy,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve `responses` in order, one per connection, then repeat the last one.
async fn serve(responses: Vec<(u16, &'static str)>) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let n = counter.fetch_add(1, Ordering::SeqCst);
            let (status, body) = responses[n.min(responses.len() - 1)];

            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(read) => buf.extend_from_slice(&chunk[..read]),
                }
            }

            let response = format!(
                "HTTP/1.1 {status} X\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}/data/product_catalog_v2.csv"), hits)
}

fn quick_policy(retries: u32) -> FetchPolicy {
    FetchPolicy::new(
        Duration::from_secs(5),
        RetryPolicy::new(retries).with_backoff(BackoffStrategy::Fixed(Duration::from_millis(5))),
    )
}

#[tokio::test]
async fn test_fetches_body() {
    let (url, hits) = serve(vec![(200, "article_id\n1\n")]).await;
    let source = HttpSource::with_policy(url, quick_policy(2)).unwrap();

    let bytes = source.fetch().await.unwrap();
    assert_eq!(bytes, b"article_id\n1\n");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let (url, hits) = serve(vec![(404, "")]).await;
    let source = HttpSource::with_policy(url, quick_policy(3)).unwrap();

    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound(_)));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_server_errors_are_retried() {
    let (url, hits) = serve(vec![(503, ""), (500, ""), (200, "article_id\n")]).await;
    let source = HttpSource::with_policy(url, quick_policy(2)).unwrap();

    let bytes = source.fetch().await.unwrap();
    assert_eq!(bytes, b"article_id\n");
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_gives_up_after_max_retries() {
    let (url, hits) = serve(vec![(502, "")]).await;
    let source = HttpSource::with_policy(url, quick_policy(1)).unwrap();

    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Http { status: 502, .. }));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}
