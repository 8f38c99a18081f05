mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn login_with_valid_credentials_returns_decodable_token() -> Result<()> {
    let server = common::ensure_server().await?;

    let token = common::login(&server.base_url, "hervaldantas", "123456789").await?;

    // The token must decode (same secret) to the same identity
    let decoded = jsonwebtoken::decode::<serde_json::Value>(
        &token,
        &jsonwebtoken::DecodingKey::from_secret(common::JWT_SECRET.as_bytes()),
        &jsonwebtoken::Validation::default(),
    )?;

    assert_eq!(decoded.claims["username"], "hervaldantas");
    assert_eq!(decoded.claims["role"], "admin");
    assert!(decoded.claims["id"].as_i64().unwrap() > 0);
    Ok(())
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "username": "hervaldantas", "password": "wrong" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Invalid credentials");
    Ok(())
}

#[tokio::test]
async fn login_with_unknown_username_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "username": "nobody", "password": "123456789" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn login_with_missing_fields_is_bad_request() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for payload in [json!({}), json!({ "username": "hervaldantas" }), json!({ "password": "x" })] {
        let res = client
            .post(format!("{}/api/auth/login", server.base_url))
            .json(&payload)
            .send()
            .await?;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["message"], "Username and password are required");
    }
    Ok(())
}

#[tokio::test]
async fn me_returns_claims_for_the_caller() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let token = common::login(&server.base_url, "antoniodantas", "123456").await?;

    let res = client
        .get(format!("{}/api/auth/me", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["username"], "antoniodantas");
    assert_eq!(body["data"]["role"], "user");
    Ok(())
}

#[tokio::test]
async fn me_without_token_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/auth/me", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "No token provided");
    Ok(())
}

#[tokio::test]
async fn me_with_garbage_token_is_forbidden() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/auth/me", server.base_url))
        .bearer_auth("not.a.token")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Invalid token");
    Ok(())
}
