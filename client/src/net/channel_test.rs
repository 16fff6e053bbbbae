use super::*;

#[test]
fn channel_url_uses_ws_for_plain_http() {
    assert_eq!(channel_url("http:", "localhost:3000"), "ws://localhost:3000/api/ws");
}

#[test]
fn channel_url_uses_wss_for_https() {
    assert_eq!(channel_url("https:", "pulseboard.example.com"), "wss://pulseboard.example.com/api/ws");
}
