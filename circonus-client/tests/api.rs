use circonus_client::{CirconusApi, CirconusClient, ClientError};
use circonus_types::{Axis, Datapoint, GraphDefinition, Metric, MetricStatus, MetricType};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

#[derive(Debug)]
struct Recorded {
    method: String,
    target: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Recorded {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Answer one connection per scripted response, in order, recording each request.
async fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<Recorded>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            seen.push(read_request(&mut socket).await);
            let reply = format!(
                "HTTP/1.1 {status} Scripted\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
        seen
    });

    (format!("http://{addr}/v2"), handle)
}

async fn read_request(socket: &mut TcpStream) -> Recorded {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed the connection before sending a request");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap().split(' ');
    let method = request_line.next().unwrap().to_string();
    let target = request_line.next().unwrap().to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed the connection mid-body");
        buf.extend_from_slice(&chunk[..n]);
    }

    Recorded {
        method,
        target,
        headers,
        body: String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string(),
    }
}

fn client(api_url: &str) -> CirconusClient {
    CirconusClient::builder()
        .api_url(api_url)
        .token("test-token")
        .build()
        .unwrap()
}

const FULL_BUNDLE: &str = r#"{
    "_cid": "/check_bundle/55",
    "_checks": ["/check/777"],
    "display_name": "goes-rx",
    "metrics": [{"name": "statsd`gain", "status": "available", "type": "numeric"}]
}"#;

fn sample_graph() -> GraphDefinition {
    GraphDefinition::builder("rx gain")
        .tag("goestools:gain")
        .datapoint(Datapoint::new(777, "statsd`gain", MetricType::Numeric, Axis::Left, "#00ff00"))
        .build()
}

#[tokio::test]
async fn test_get_check_bundle_searches_then_expands() {
    let (url, server) = serve(vec![
        (200, r#"[{"_cid": "/check_bundle/55"}]"#),
        (200, FULL_BUNDLE),
    ])
    .await;

    let bundle = client(&url).get_check_bundle_for_host("goes-rx").await.unwrap();
    assert_eq!(bundle.id(), "55");
    assert_eq!(bundle.first_check_id(), Some("777"));
    assert_eq!(bundle.metrics.len(), 1);

    let seen = server.await.unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].method, "GET");
    assert!(seen[0].target.starts_with("/v2/check_bundle?search="));
    assert!(seen[0].target.contains("goes-rx"));
    assert_eq!(seen[1].target, "/v2/check_bundle/55?query_broker=1");

    for request in &seen {
        assert_eq!(request.header("x-circonus-auth-token"), Some("test-token"));
        assert_eq!(request.header("x-circonus-app-name"), Some("goestools"));
        assert_eq!(request.header("accept"), Some("application/json"));
    }
}

#[tokio::test]
async fn test_get_check_bundle_requires_exactly_one_match() {
    let (url, server) = serve(vec![(200, "[]")]).await;
    let err = client(&url).get_check_bundle_for_host("nowhere").await.unwrap_err();
    assert!(matches!(err, ClientError::BundleNotFound(ref host) if host == "nowhere"));
    assert_eq!(server.await.unwrap().len(), 1);

    let (url, _server) = serve(vec![(
        200,
        r#"[{"_cid": "/check_bundle/1"}, {"_cid": "/check_bundle/2"}]"#,
    )])
    .await;
    let err = client(&url).get_check_bundle_for_host("twice").await.unwrap_err();
    assert!(matches!(err, ClientError::AmbiguousBundle { count: 2, .. }));
}

#[tokio::test]
async fn test_put_check_bundle_metrics_body() {
    let (url, server) = serve(vec![(
        200,
        r#"{"_cid": "/check_bundle_metrics/55", "metrics": []}"#,
    )])
    .await;

    let bundle: circonus_types::CheckBundle = serde_json::from_str(FULL_BUNDLE).unwrap();
    let metrics = vec![Metric::new("statsd`gain", MetricType::Numeric, MetricStatus::Active)];
    client(&url)
        .put_check_bundle_metrics(&bundle, &metrics)
        .await
        .unwrap();

    let seen = server.await.unwrap();
    assert_eq!(seen[0].method, "PUT");
    assert_eq!(seen[0].target, "/v2/check_bundle_metrics/55");

    let body: serde_json::Value = serde_json::from_str(&seen[0].body).unwrap();
    assert_eq!(body["metrics"][0]["name"], "statsd`gain");
    assert_eq!(body["metrics"][0]["status"], "active");
}

#[tokio::test]
async fn test_graph_lifecycle_requests() {
    let (url, server) = serve(vec![
        (200, r#"[{"_cid": "/graph/a1", "tags": ["goestools:gain"]}]"#),
        (200, r#"{"_cid": "/graph/b2", "tags": ["goestools:gain"]}"#),
        (200, r#"{"_cid": "/graph/a1", "tags": ["goestools:gain"]}"#),
        (204, ""),
    ])
    .await;
    let client = client(&url);

    let graphs = client.get_graphs_for_check(777, "goestools").await.unwrap();
    assert_eq!(graphs.len(), 1);
    assert_eq!(graphs[0].tag_value("goestools").as_deref(), Some("gain"));

    let created = client.create_graph(&sample_graph()).await.unwrap();
    assert_eq!(created.cid, "/graph/b2");
    client.update_graph("/graph/a1", &sample_graph()).await.unwrap();
    client.delete_graph("/graph/a1").await.unwrap();

    let seen = server.await.unwrap();
    assert!(seen[0].target.starts_with("/v2/graph?search="));
    assert_eq!(seen[1].method, "POST");
    assert_eq!(seen[1].target, "/v2/graph");
    let posted: GraphDefinition = serde_json::from_str(&seen[1].body).unwrap();
    assert_eq!(posted, sample_graph());
    assert_eq!(seen[2].method, "PUT");
    assert_eq!(seen[2].target, "/v2/graph/a1");
    assert_eq!(seen[3].method, "DELETE");
    assert_eq!(seen[3].target, "/v2/graph/a1");
}

#[tokio::test]
async fn test_non_success_status_fails_fast() {
    let (url, _server) = serve(vec![(500, r#"{"error": "boom"}"#)]).await;
    let err = client(&url).create_graph(&sample_graph()).await.unwrap_err();
    match err {
        ClientError::Http { status, path, body } => {
            assert_eq!(status, 500);
            assert_eq!(path, "/graph");
            assert!(body.contains("boom"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let (url, _server) = serve(vec![(404, "{}")]).await;
    let err = client(&url)
        .update_graph("/graph/gone", &sample_graph())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http { status: 404, .. }));
}

#[tokio::test]
async fn test_rejected_token_is_auth_error() {
    let (url, _server) = serve(vec![(401, "{}")]).await;
    let err = client(&url).get_graphs_for_check(1, "goestools").await.unwrap_err();
    assert!(matches!(err, ClientError::Auth(_)));
}

#[tokio::test]
async fn test_unparseable_body_is_parse_error() {
    let (url, _server) = serve(vec![(200, "not json")]).await;
    let err = client(&url).get_graphs_for_check(1, "goestools").await.unwrap_err();
    assert!(matches!(err, ClientError::Parse { .. }));
}
