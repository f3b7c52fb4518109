//! Integration tests against a mock VoiceBase API server.

use mockito::Matcher;
use serde_json::json;
use voicebase::{Client, MediaOptions, MediaSource};

fn test_client(base_url: &str) -> Client {
    Client::builder("test-token")
        .base_url(base_url)
        .build()
        .expect("build client")
}

#[tokio::test]
async fn list_sends_auth_headers_and_external_id_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2-beta/media")
        .match_header("authorization", "Bearer test-token")
        .match_header("user-agent", Matcher::Regex("^voicebase-rust/".to_string()))
        .match_query(Matcher::UrlEncoded(
            "externalId".to_string(),
            "crm-42".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"media": []}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let body = client.media().list(Some("crm-42")).await.expect("list");

    assert_eq!(body, json!({"media": []}));
    mock.assert_async().await;
}

#[tokio::test]
async fn list_without_external_id_sends_no_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2-beta/media")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"media": []}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    client.media().list(None).await.expect("list");
    mock.assert_async().await;
}

#[tokio::test]
async fn errors_field_under_success_status_is_a_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2-beta/media/m1")
        .with_status(200)
        .with_body(r#"{"errors": "bad request"}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client.media().get("m1").await.unwrap_err();

    assert!(err.is_api_error());
    assert!(err.to_string().contains("bad request"));
}

#[tokio::test]
async fn http_error_status_is_an_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2-beta/media/missing")
        .with_status(404)
        .with_body(r#"{"message": "media not found"}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client.media().get("missing").await.unwrap_err();

    match err {
        voicebase::Error::Api { http_status, .. } => assert_eq!(http_status, 404),
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_returns_status_alongside_empty_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v2-beta/media/m1")
        .with_status(204)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let outcome = client.media().delete("m1").await.expect("delete");

    assert_eq!(outcome.status, 204);
    assert!(outcome.body.is_null());
    mock.assert_async().await;
}

#[tokio::test]
async fn transcript_requests_alternate_formats_as_repeated_pairs() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2-beta/media/m1/transcript")
        .match_query(Matcher::Exact(
            "includeAlternateFormat=txt&includeAlternateFormat=json".to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"transcript": {}}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    client
        .media()
        .transcript("m1", Some(&["txt", "json"]))
        .await
        .expect("transcript");
    mock.assert_async().await;
}

#[tokio::test]
async fn upload_from_url_sends_media_url_form_field() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v2-beta/media")
        .match_body(Matcher::Regex(
            r#"(?s)name="mediaUrl".*?https://example\.com/call\.mp3"#.to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"mediaId": "m1"}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let body = client
        .media()
        .upload(
            MediaSource::Url("https://example.com/call.mp3".to_string()),
            &MediaOptions::default(),
        )
        .await
        .expect("upload");

    assert_eq!(body["mediaId"], "m1");
    mock.assert_async().await;
}

#[tokio::test]
async fn upload_from_file_sends_media_attachment() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v2-beta/media")
        .match_body(Matcher::Regex(
            r#"name="media"; filename="call\.mp3""#.to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"mediaId": "m2"}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    client
        .media()
        .upload(
            MediaSource::File {
                filename: "call.mp3".to_string(),
                data: vec![0u8; 64],
            },
            &MediaOptions::default(),
        )
        .await
        .expect("upload");
    mock.assert_async().await;
}

#[tokio::test]
async fn upload_serializes_configuration_to_a_json_string() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v2-beta/media")
        .match_body(Matcher::Regex(
            r#"(?s)name="configuration".*?\{"language":"en-US"\}"#.to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"mediaId": "m3"}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    client
        .media()
        .upload(
            MediaSource::Url("https://example.com/call.mp3".to_string()),
            &MediaOptions {
                configuration: Some(json!({"language": "en-US"})),
                ..Default::default()
            },
        )
        .await
        .expect("upload");
    mock.assert_async().await;
}

#[tokio::test]
async fn update_omits_absent_and_empty_option_fields() {
    let mut server = mockito::Server::new_async().await;
    // Catch-all first; the stricter mock below shadows it only when the body
    // wrongly carries an optional field.
    let fallthrough = server
        .mock("POST", "/v2-beta/media/m1")
        .with_status(200)
        .with_body(r#"{"mediaId": "m1"}"#)
        .create_async()
        .await;
    let leaked_field = server
        .mock("POST", "/v2-beta/media/m1")
        .match_body(Matcher::Regex(
            "configuration|metadata|transcript".to_string(),
        ))
        .expect(0)
        .with_status(200)
        .with_body(r#"{"mediaId": "m1"}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    client
        .media()
        .update(
            "m1",
            &MediaOptions {
                configuration: Some(json!({})),
                metadata: None,
                transcript: Some(json!({})),
            },
        )
        .await
        .expect("update");

    leaked_field.assert_async().await;
    fallthrough.assert_async().await;
}

#[tokio::test]
async fn empty_identifiers_fail_before_any_request() {
    // No mocks registered: any request reaching the server would surface as an
    // API error, not an invalid-argument error.
    let server = mockito::Server::new_async().await;
    let client = test_client(&server.url());

    assert!(client.media().get("").await.unwrap_err().is_invalid_argument());
    assert!(client.media().delete(" ").await.unwrap_err().is_invalid_argument());
    assert!(client
        .media()
        .transcript("", None)
        .await
        .unwrap_err()
        .is_invalid_argument());
    assert!(client
        .definitions()
        .keyword_group("")
        .await
        .unwrap_err()
        .is_invalid_argument());
    assert!(client
        .definitions()
        .vocabulary("")
        .await
        .unwrap_err()
        .is_invalid_argument());
    assert!(client.profile().key("").await.unwrap_err().is_invalid_argument());
}

#[tokio::test]
async fn update_metadata_puts_a_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/v2-beta/media/m1/metadata")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"externalId": "crm-42"})))
        .with_status(200)
        .with_body(r#"{"metadata": {"externalId": "crm-42"}}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    client
        .media()
        .update_metadata("m1", &json!({"externalId": "crm-42"}))
        .await
        .expect("update metadata");
    mock.assert_async().await;
}

#[tokio::test]
async fn keyword_group_round_trip_uses_versioned_paths() {
    let mut server = mockito::Server::new_async().await;
    let put = server
        .mock("PUT", "/v3/definitions/keywords/groups/g1")
        .match_body(Matcher::Json(json!({"name": "g1", "keywords": ["refund"]})))
        .with_status(200)
        .with_body(r#"{"name": "g1"}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/v3/definitions/keywords/groups/g1")
        .with_status(204)
        .create_async()
        .await;

    let client = Client::builder("test-token")
        .base_url(server.url())
        .api_version("v3")
        .build()
        .expect("build client");

    client
        .definitions()
        .create_or_update_keyword_group("g1", &json!({"name": "g1", "keywords": ["refund"]}))
        .await
        .expect("create group");
    let outcome = client
        .definitions()
        .delete_keyword_group("g1")
        .await
        .expect("delete group");

    assert_eq!(outcome.status, 204);
    put.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn profile_key_lifecycle() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/v2-beta/profile/keys")
        .match_body(Matcher::Json(json!({"key": {"name": "ingest"}})))
        .with_status(200)
        .with_body(r#"{"key": {"keyId": "k1", "name": "ingest"}}"#)
        .create_async()
        .await;
    let get = server
        .mock("GET", "/v2-beta/profile/keys/k1")
        .with_status(200)
        .with_body(r#"{"key": {"keyId": "k1"}}"#)
        .create_async()
        .await;
    let revoke = server
        .mock("DELETE", "/v2-beta/profile/keys/k1")
        .with_status(204)
        .create_async()
        .await;

    let client = test_client(&server.url());

    let created = client
        .profile()
        .create_key(&json!({"key": {"name": "ingest"}}))
        .await
        .expect("create key");
    assert_eq!(created["key"]["keyId"], "k1");

    client.profile().key("k1").await.expect("get key");
    let outcome = client.profile().delete_key("k1").await.expect("delete key");
    assert_eq!(outcome.status, 204);

    create.assert_async().await;
    get.assert_async().await;
    revoke.assert_async().await;
}

#[tokio::test]
async fn definitions_read_only_listings() {
    let mut server = mockito::Server::new_async().await;
    let vocabularies = server
        .mock("GET", "/v2-beta/definitions/transcripts/vocabularies")
        .with_status(200)
        .with_body(r#"{"vocabularies": []}"#)
        .create_async()
        .await;
    let models = server
        .mock("GET", "/v2-beta/definitions/predictions/models")
        .with_status(200)
        .with_body(r#"{"models": []}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    client.definitions().vocabularies().await.expect("vocabularies");
    client.definitions().predictive_models().await.expect("models");

    vocabularies.assert_async().await;
    models.assert_async().await;
}
