use reddit_reaper::config::{parse_config, HttpConfig, UserAgentConfig};
use reddit_reaper::data::Parsed;
use reddit_reaper::transport::build_http_client;
use reddit_reaper::{
    Comment, HttpTransport, Message, ParseError, Parser, Post, ReapError, Reaper, ReaperOptions,
    TransportError, Values,
};
use std::time::{Duration, Instant};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Parses one record per line: `c:` comments, `p:` posts, `m:` messages
struct LineParser;

impl Parser for LineParser {
    fn parse(&self, blob: &[u8]) -> Result<Parsed, ParseError> {
        let text = std::str::from_utf8(blob).map_err(|e| ParseError::Malformed(e.to_string()))?;

        let mut parsed: Parsed = (Vec::new(), Vec::new(), Vec::new());
        for line in text.lines().filter(|l| !l.is_empty()) {
            match line.split_once(':') {
                Some(("c", body)) => parsed.0.push(Comment {
                    body: body.to_string(),
                    ..Default::default()
                }),
                Some(("p", self_text)) => parsed.1.push(Post {
                    self_text: self_text.to_string(),
                    ..Default::default()
                }),
                Some(("m", body)) => parsed.2.push(Message {
                    body: body.to_string(),
                    ..Default::default()
                }),
                _ => return Err(ParseError::Malformed(format!("bad line: {line}"))),
            }
        }

        Ok(parsed)
    }
}

fn host_of(server: &MockServer) -> String {
    server.uri().trim_start_matches("http://").to_string()
}

fn create_test_reaper(server: &MockServer, minimum_interval: Duration) -> Reaper<HttpTransport, LineParser> {
    let user_agent = UserAgentConfig {
        bot_name: "TestBot".to_string(),
        bot_version: "1.0.0".to_string(),
        contact: "https://example.com/contact".to_string(),
    };
    let client = build_http_client(&user_agent, &HttpConfig::default())
        .expect("Failed to build HTTP client");

    Reaper::new(ReaperOptions {
        transport: HttpTransport::new(client),
        parser: LineParser,
        hostname: host_of(server),
        tls: false,
        path_suffix: ".json".to_string(),
        minimum_interval,
    })
}

fn values(pairs: &[(&str, &str)]) -> Values {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_reap_sends_query_and_parses_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/r/rust.json"))
        .and(query_param("limit", "100"))
        .and(query_param("raw_json", "1"))
        .and(header("user-agent", "TestBot/1.0.0 (+https://example.com/contact)"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("c:first\np:second\nm:third\nc:fourth"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let reaper = create_test_reaper(&mock_server, Duration::ZERO);
    let harvest = reaper
        .reap("/r/rust.json", &values(&[("limit", "100"), ("raw_json", "1")]))
        .await
        .expect("reap failed");

    let comment_bodies: Vec<&str> = harvest.comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(comment_bodies, vec!["first", "fourth"]);
    assert_eq!(harvest.posts.len(), 1);
    assert_eq!(harvest.posts[0].self_text, "second");
    assert_eq!(harvest.messages.len(), 1);
    assert_eq!(harvest.messages[0].body, "third");
}

#[tokio::test]
async fn test_reap_host_root_with_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reaper = create_test_reaper(&mock_server, Duration::ZERO);
    let harvest = reaper.reap("", &Values::new()).await.expect("reap failed");

    assert!(harvest.is_empty());
}

#[tokio::test]
async fn test_sow_posts_form_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/comment"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("text=hello+world&thing_id=t1_abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not parsed"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reaper = create_test_reaper(&mock_server, Duration::ZERO);
    reaper
        .sow(
            "/api/comment",
            &values(&[("thing_id", "t1_abc"), ("text", "hello world")]),
        )
        .await
        .expect("sow failed");
}

#[tokio::test]
async fn test_sow_empty_values_sends_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/read_all_messages"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reaper = create_test_reaper(&mock_server, Duration::ZERO);
    reaper
        .sow("/api/read_all_messages", &Values::new())
        .await
        .expect("sow failed");
}

#[tokio::test]
async fn test_reap_status_error_passes_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/r/private.json"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let reaper = create_test_reaper(&mock_server, Duration::ZERO);
    let err = reaper
        .reap("/r/private.json", &Values::new())
        .await
        .unwrap_err();

    match err {
        ReapError::Transport(TransportError::Status { status, url }) => {
            assert_eq!(status, 403);
            assert!(url.ends_with("/r/private.json"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_sow_status_error_passes_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let reaper = create_test_reaper(&mock_server, Duration::ZERO);
    let err = reaper.sow("/api/submit", &Values::new()).await.unwrap_err();

    assert!(matches!(err, TransportError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_reap_parse_error_passes_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("c:fine\nnonsense"))
        .mount(&mock_server)
        .await;

    let reaper = create_test_reaper(&mock_server, Duration::ZERO);
    let err = reaper.reap("/inbox", &Values::new()).await.unwrap_err();

    assert!(matches!(err, ReapError::Parse(ParseError::Malformed(_))));
    assert_eq!(err.to_string(), "Malformed response: bad line: nonsense");
}

#[tokio::test]
async fn test_requests_are_spaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let interval = Duration::from_millis(50);
    let reaper = create_test_reaper(&mock_server, interval);

    let start = Instant::now();
    reaper.reap("/a", &Values::new()).await.expect("reap failed");
    reaper.sow("/b", &Values::new()).await.expect("sow failed");
    reaper.reap("/c", &Values::new()).await.expect("reap failed");

    // Three requests span at least two intervals
    assert!(start.elapsed() >= interval * 2);

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 3);
}

#[tokio::test]
async fn test_reaper_from_config() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/someone/about.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("p:profile"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = parse_config(&format!(
        r#"
[reaper]
hostname = "{}"
tls = false
path-suffix = ".json"
minimum-interval = 10

[user-agent]
bot-name = "TestBot"
bot-version = "1.0.0"
contact = "/u/operator"
"#,
        host_of(&mock_server)
    ))
    .expect("config should be valid");

    let reaper = Reaper::from_config(&config, LineParser).expect("Failed to build reaper");
    assert_eq!(reaper.minimum_interval(), Duration::from_millis(10));

    let path = format!("/user/someone/about{}", reaper.path_suffix());
    let harvest = reaper.reap(&path, &Values::new()).await.expect("reap failed");

    assert_eq!(harvest.posts.len(), 1);
    assert_eq!(harvest.posts[0].self_text, "profile");
}
