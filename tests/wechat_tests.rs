//! Contract tests for the token exchange and template push.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wxdaily::config::Credentials;
use wxdaily::error::Error;
use wxdaily::wechat::{message, WechatClient};

fn credentials() -> Credentials {
    Credentials {
        app_id: "test-app".into(),
        secret: "test-secret".into(),
    }
}

async fn mount_token(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/cgi-bin/token"))
        .and(query_param("grant_type", "client_credential"))
        .and(query_param("appid", "test-app"))
        .and(query_param("secret", "test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "expires_in": 7200
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn dispatch_returns_the_receipt_id() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-1").await;

    Mock::given(method("POST"))
        .and(path("/cgi-bin/message/template/send"))
        .and(query_param("access_token", "tok-1"))
        .and(body_partial_json(json!({
            "touser": "openid-a",
            "template_id": "tmpl-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errcode": 0,
            "errmsg": "ok",
            "msgid": 200228
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = WechatClient::new(server.uri(), credentials());
    let msg = message::simple("openid-a", "tmpl-1", 42, "短句");
    let receipt = client.send_template(&msg).await.expect("dispatch");

    assert_eq!(receipt, "200228");
}

#[tokio::test]
async fn every_dispatch_exchanges_a_fresh_token() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-1").await;

    Mock::given(method("POST"))
        .and(path("/cgi-bin/message/template/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errcode": 0,
            "errmsg": "ok",
            "msgid": 1
        })))
        .mount(&server)
        .await;

    let client = WechatClient::new(server.uri(), credentials());
    let msg = message::simple("openid-a", "tmpl-1", 1, "短句");
    client.send_template(&msg).await.expect("first dispatch");
    client.send_template(&msg).await.expect("second dispatch");

    let token_requests = server
        .received_requests()
        .await
        .expect("recorded requests")
        .into_iter()
        .filter(|r| r.url.path() == "/cgi-bin/token")
        .count();
    assert_eq!(token_requests, 2);
}

#[tokio::test]
async fn token_exchange_failure_is_a_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cgi-bin/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errcode": 40013,
            "errmsg": "invalid appid"
        })))
        .mount(&server)
        .await;

    let client = WechatClient::new(server.uri(), credentials());
    let msg = message::simple("openid-a", "tmpl-1", 1, "短句");

    match client.send_template(&msg).await {
        Err(Error::Token(detail)) => {
            assert!(detail.contains("40013"), "detail was: {detail}");
            assert!(detail.contains("invalid appid"), "detail was: {detail}");
        }
        other => panic!("expected token error, got {other:?}"),
    }
}

#[tokio::test]
async fn token_transport_failure_is_an_error_not_a_panic() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cgi-bin/token"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = WechatClient::new(server.uri(), credentials());
    let msg = message::simple("openid-a", "tmpl-1", 1, "短句");

    assert!(client.send_template(&msg).await.is_err());
}

#[tokio::test]
async fn provider_rejection_maps_to_push_error() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-1").await;

    Mock::given(method("POST"))
        .and(path("/cgi-bin/message/template/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errcode": 40003,
            "errmsg": "invalid openid"
        })))
        .mount(&server)
        .await;

    let client = WechatClient::new(server.uri(), credentials());
    let msg = message::simple("bad-openid", "tmpl-1", 1, "短句");

    match client.send_template(&msg).await {
        Err(Error::Push { code: 40003, message }) => assert_eq!(message, "invalid openid"),
        other => panic!("expected push rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn non_ascii_text_reaches_the_wire_unescaped() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-1").await;

    Mock::given(method("POST"))
        .and(path("/cgi-bin/message/template/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errcode": 0,
            "errmsg": "ok",
            "msgid": 7
        })))
        .mount(&server)
        .await;

    let client = WechatClient::new(server.uri(), credentials());
    let msg = message::simple("openid-a", "tmpl-1", 1, "今天也想你");
    client.send_template(&msg).await.expect("dispatch");

    let requests = server.received_requests().await.expect("recorded requests");
    let push = requests
        .iter()
        .find(|r| r.url.path() == "/cgi-bin/message/template/send")
        .expect("push request recorded");
    let body = String::from_utf8(push.body.clone()).expect("utf-8 body");

    assert!(body.contains("今天也想你"), "body was: {body}");
    assert!(!body.contains("\\u"), "body was escaped: {body}");
}
