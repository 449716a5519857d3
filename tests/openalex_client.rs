// tests/openalex_client.rs
//
// The real client against a throwaway HTTP/1.1 server on localhost.

use std::io::{ Read, Write };
use std::net::{ TcpListener, TcpStream };
use std::sync::{ Arc, Mutex };
use std::thread;

use grant_finder::collect::{ collect_grant_ids, NoDelay, WorksSource };
use grant_finder::config::options::ApiOptions;
use grant_finder::lookup::search_funders;
use grant_finder::openalex::{ FetchError, OpenAlexClient };

type Handler = fn(&str) -> (u16, String);

/// Serve `n` connections, one request each, answering with `handler(request_line)`.
/// Returns the base URL and the request lines seen so far.
fn serve(n: usize, handler: Handler) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();

    thread::spawn(move || {
        for stream in listener.incoming().take(n) {
            let Ok(mut stream) = stream else { continue };
            let line = read_request_line(&mut stream);
            log.lock().unwrap().push(line.clone());

            let (status, body) = handler(&line);
            let resp = format!(
                "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(resp.as_bytes());
            let _ = stream.flush();
        }
    });

    (base, seen)
}

fn read_request_line(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(k) => buf.extend_from_slice(&chunk[..k]),
        }
    }
    let text = String::from_utf8_lossy(&buf);
    text.split("\r\n").next().unwrap_or_default().to_string()
}

fn client(base: &str) -> OpenAlexClient {
    OpenAlexClient::new(&ApiOptions { base_url: base.to_string(), timeout_secs: 5, env_proxy: false, ..ApiOptions::default() })
}

#[test]
fn autocomplete_decodes_candidates() {
    let (base, seen) = serve(1, |_| {
        (200, r#"{"meta":{"count":2},"results":[
            {"id":"https://openalex.org/F1","display_name":"Wellcome Trust","hint":"United Kingdom"},
            {"id":"https://openalex.org/F2","display_name":"Wellcome Leap"}]}"#.to_string())
    });

    let found = search_funders(&mut client(&base), "Wellcome").unwrap();

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].identifier, "https://openalex.org/F1");
    assert_eq!(found[0].display_name, "Wellcome Trust");
    let line = seen.lock().unwrap()[0].clone();
    assert!(line.starts_with("GET /autocomplete/funders?q=Wellcome"), "{line}");
}

#[test]
fn autocomplete_error_status_is_fetch_error() {
    let (base, _) = serve(1, |_| (503, "{}".to_string()));
    let err = search_funders(&mut client(&base), "Wellcome").unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 503, .. }), "{err}");
}

#[test]
fn works_pages_follow_next_cursor() {
    let (base, seen) = serve(2, |line| {
        if line.contains("cursor=c2") {
            (200, r#"{"meta":{"count":3,"next_cursor":null},"results":[
                {"grants":[{"award_id":"A1","funder_display_name":"Wellcome Trust"},
                           {"award_id":"A3","funder_display_name":"Wellcome Trust"}]}]}"#.to_string())
        } else {
            (200, r#"{"meta":{"count":3,"next_cursor":"c2"},"results":[
                {"grants":[{"award_id":"A1","funder_display_name":"Wellcome Trust"}]},
                {"grants":[{"award_id":"A2","funder_display_name":"Wellcome Trust"},
                           {"award_id":"A9","funder_display_name":"Other Org"}]}]}"#.to_string())
        }
    });

    let ids = collect_grant_ids(&mut client(&base), &mut NoDelay, "F1", "Wellcome Trust", None).unwrap();
    assert_eq!(ids.into_vec(), vec!["A1", "A2", "A3"]);

    let lines = seen.lock().unwrap().clone();
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert!(line.starts_with("GET /works?"), "{line}");
        assert!(line.contains("grants.funder"), "{line}");
        assert!(line.contains("per-page=100"), "{line}");
        assert!(line.contains("select=grants"), "{line}");
    }
    assert!(lines[1].contains("cursor=c2"));
}

#[test]
fn page_larger_than_ten_mib_is_read_whole() {
    let (base, _) = serve(1, |_| {
        let pad = "x".repeat(11 * 1024 * 1024);
        let body = format!(
            r#"{{"meta":{{"count":1,"next_cursor":null}},"results":[
                {{"grants":[{{"award_id":"A1","funder_display_name":"Wellcome Trust"}}],"abstract":"{pad}"}}]}}"#
        );
        (200, body)
    });

    let ids = collect_grant_ids(&mut client(&base), &mut NoDelay, "F1", "Wellcome Trust", None).unwrap();
    assert_eq!(ids.into_vec(), vec!["A1"]);
}

#[test]
fn server_error_aborts_collection() {
    let (base, _) = serve(1, |_| (500, r#"{"error":"boom"}"#.to_string()));
    let res = collect_grant_ids(&mut client(&base), &mut NoDelay, "F1", "Wellcome Trust", None);
    assert!(matches!(res, Err(FetchError::Status { status: 500, .. })));
}

#[test]
fn garbage_body_is_decode_error() {
    let (base, _) = serve(1, |_| (200, "<html>not json</html>".to_string()));
    let err = client(&base).works_page("F1", "*").unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }), "{err}");
    assert!(err.endpoint().ends_with("/works"));
}

#[test]
fn mailto_is_sent_when_configured() {
    let (base, seen) = serve(1, |_| (200, r#"{"results":[]}"#.to_string()));
    let mut c = OpenAlexClient::new(&ApiOptions {
        base_url: base,
        mailto: Some("me@example.org".into()),
        timeout_secs: 5,
        env_proxy: false,
        ..ApiOptions::default()
    });

    assert!(search_funders(&mut c, "x").unwrap().is_empty());
    let line = seen.lock().unwrap()[0].clone();
    assert!(line.contains("mailto=me%40example.org") || line.contains("mailto=me@example.org"), "{line}");
}
