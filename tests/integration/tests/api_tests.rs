//! API Integration Tests
//!
//! Each test spawns the full Axum application against a fresh in-memory
//! SQLite database, so no external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Identity Gate Tests
// ============================================================================

#[tokio::test]
async fn test_requests_without_identity_are_rejected() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/pools").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_outside_domain_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let eve = TestUser::outsider("Eve");

    let response = server.get_as("/api/v1/pools", &eve).await.unwrap();
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body.error.code, "DOMAIN_NOT_ALLOWED");
}

// ============================================================================
// Pool Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_pool() {
    let server = TestServer::start().await.unwrap();
    let host = TestUser::campus("Asha Rao");

    let response = server
        .post_as("/api/v1/pools", &host, &pool_body("Gachibowli", 4, 3))
        .await
        .unwrap();
    let pool: PoolBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(pool.destination.name, "Gachibowli");
    assert_eq!(pool.seats, 3);
    assert_eq!(pool.seats_taken, 1);
    assert_eq!(pool.host_email, host.email);
    assert_eq!(pool.members.len(), 1);
}

#[tokio::test]
async fn test_create_pool_rejects_past_departure() {
    let server = TestServer::start().await.unwrap();
    let host = TestUser::campus("Asha Rao");

    let response = server
        .post_as("/api/v1/pools", &host, &pool_body("Gachibowli", -2, 3))
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error.code, "DEPARTURE_IN_PAST");
}

#[tokio::test]
async fn test_create_pool_rejects_bad_seats() {
    let server = TestServer::start().await.unwrap();
    let host = TestUser::campus("Asha Rao");

    let response = server
        .post_as("/api/v1/pools", &host, &pool_body("Gachibowli", 4, 0))
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error.code, "SEATS_OUT_OF_RANGE");
}

#[tokio::test]
async fn test_airport_pool_requires_pickup() {
    let server = TestServer::start().await.unwrap();
    let host = TestUser::campus("Asha Rao");

    let response = server
        .post_as("/api/v1/pools", &host, &pool_body("RGIA Airport", 6, 3))
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error.code, "PICKUP_REQUIRED");

    let response = server
        .post_as(
            "/api/v1/pools",
            &host,
            &pool_body_with_pickup("RGIA Airport", "BPHC Main Gate", 6, 3),
        )
        .await
        .unwrap();
    let pool: PoolBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(pool.pickup.as_deref(), Some("BPHC Main Gate"));
}

#[tokio::test]
async fn test_cooldown_returns_conflict() {
    let server = TestServer::start().await.unwrap();
    let host = TestUser::campus("Asha Rao");

    let response = server
        .post_as("/api/v1/pools", &host, &pool_body("Gachibowli", 4, 3))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_as("/api/v1/pools", &host, &pool_body("Kondapur", 5, 2))
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.error.code, "COOLDOWN_ACTIVE");
}

// ============================================================================
// Membership Tests
// ============================================================================

#[tokio::test]
async fn test_join_leave_round_trip() {
    let server = TestServer::start().await.unwrap();
    let host = TestUser::campus("Asha Rao");
    let rider = TestUser::campus("Ravi Kumar");

    let response = server
        .post_as("/api/v1/pools", &host, &pool_body("Gachibowli", 4, 3))
        .await
        .unwrap();
    let pool: PoolBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Join claims a seat
    let response = server
        .put_as(&format!("/api/v1/pools/{}/members/@me", pool.id), &rider)
        .await
        .unwrap();
    let join: JoinBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(join.joined);

    // A second join is a no-op
    let response = server
        .put_as(&format!("/api/v1/pools/{}/members/@me", pool.id), &rider)
        .await
        .unwrap();
    let join: JoinBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(join.already_member);

    // Members are visible to the rider
    let response = server
        .get_as(&format!("/api/v1/pools/{}/members", pool.id), &rider)
        .await
        .unwrap();
    let members: Vec<MemberBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 2);

    // Leaving frees the seat
    let response = server
        .delete_as(&format!("/api/v1/pools/{}/members/@me", pool.id), &rider)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_as(&format!("/api/v1/pools/{}", pool.id), &rider)
        .await
        .unwrap();
    let detail: PoolBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.seats_taken, 1);
}

#[tokio::test]
async fn test_join_full_pool_conflicts() {
    let server = TestServer::start().await.unwrap();
    let host = TestUser::campus("Asha Rao");
    let rider = TestUser::campus("Ravi Kumar");

    // One seat, taken by the host
    let response = server
        .post_as("/api/v1/pools", &host, &pool_body("Kondapur", 3, 1))
        .await
        .unwrap();
    let pool: PoolBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_as(&format!("/api/v1/pools/{}/members/@me", pool.id), &rider)
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.error.code, "POOL_FULL");
}

#[tokio::test]
async fn test_member_list_is_hidden_from_outsiders() {
    let server = TestServer::start().await.unwrap();
    let host = TestUser::campus("Asha Rao");
    let outsider = TestUser::campus("Meera Iyer");

    let response = server
        .post_as("/api/v1/pools", &host, &pool_body("Gachibowli", 4, 3))
        .await
        .unwrap();
    let pool: PoolBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_as(&format!("/api/v1/pools/{}/members", pool.id), &outsider)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Deletion Tests
// ============================================================================

#[tokio::test]
async fn test_only_host_can_delete_pool() {
    let server = TestServer::start().await.unwrap();
    let host = TestUser::campus("Asha Rao");
    let rider = TestUser::campus("Ravi Kumar");

    let response = server
        .post_as("/api/v1/pools", &host, &pool_body("Gachibowli", 4, 3))
        .await
        .unwrap();
    let pool: PoolBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_as(&format!("/api/v1/pools/{}", pool.id), &rider)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_as(&format!("/api/v1/pools/{}", pool.id), &host)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_as(&format!("/api/v1/pools/{}", pool.id), &host)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Discovery Tests
// ============================================================================

#[tokio::test]
async fn test_list_pools_and_deep_link_pinning() {
    let server = TestServer::start().await.unwrap();
    let first_host = TestUser::campus("Asha Rao");
    let second_host = TestUser::campus("Ravi Kumar");
    let viewer = TestUser::campus("Meera Iyer");

    let response = server
        .post_as("/api/v1/pools", &first_host, &pool_body("Gachibowli", 2, 3))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_as("/api/v1/pools", &second_host, &pool_body("Kondapur", 6, 3))
        .await
        .unwrap();
    let later: PoolBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Chronological by default
    let response = server.get_as("/api/v1/pools", &viewer).await.unwrap();
    let listed: Vec<PoolBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].destination.name, "Gachibowli");

    // Destination filter
    let response = server
        .get_as("/api/v1/pools?destination=kondapur", &viewer)
        .await
        .unwrap();
    let listed: Vec<PoolBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].destination.name, "Kondapur");

    // Deep link pins its pool to the front
    let response = server
        .get_as(&format!("/api/v1/pools?pool={}", later.id), &viewer)
        .await
        .unwrap();
    let listed: Vec<PoolBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed[0].id, later.id);
    assert!(listed[0].pinned);
}

#[tokio::test]
async fn test_place_search() {
    let server = TestServer::start().await.unwrap();
    let viewer = TestUser::campus("Asha Rao");

    let response = server
        .get_as("/api/v1/places?q=gachi", &viewer)
        .await
        .unwrap();
    let places: Vec<PlaceBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].name, "Gachibowli");
    assert_eq!(places[0].id.as_deref(), Some("gachibowli"));
}

// ============================================================================
// Chat Tests
// ============================================================================

#[tokio::test]
async fn test_chat_round_trip() {
    let server = TestServer::start().await.unwrap();
    let host = TestUser::campus("Asha Rao");
    let rider = TestUser::campus("Ravi Kumar");
    let outsider = TestUser::campus("Meera Iyer");

    let response = server
        .post_as("/api/v1/pools", &host, &pool_body("Gachibowli", 4, 3))
        .await
        .unwrap();
    let pool: PoolBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_as(&format!("/api/v1/pools/{}/members/@me", pool.id), &rider)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Outsiders can neither post nor read
    let response = server
        .post_as(
            &format!("/api/v1/pools/{}/messages", pool.id),
            &outsider,
            &message_body("hello"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .get_as(&format!("/api/v1/pools/{}/messages", pool.id), &outsider)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Members chat
    let response = server
        .post_as(
            &format!("/api/v1/pools/{}/messages", pool.id),
            &host,
            &message_body("Leaving from the main gate"),
        )
        .await
        .unwrap();
    let posted: MessageBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(posted.sender_email, host.email);

    let response = server
        .post_as(
            &format!("/api/v1/pools/{}/messages", pool.id),
            &rider,
            &message_body("on my way"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_as(&format!("/api/v1/pools/{}/messages", pool.id), &rider)
        .await
        .unwrap();
    let messages: Vec<MessageBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "Leaving from the main gate");
    assert_eq!(messages[1].content, "on my way");
}

#[tokio::test]
async fn test_blank_message_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let host = TestUser::campus("Asha Rao");

    let response = server
        .post_as("/api/v1/pools", &host, &pool_body("Gachibowli", 4, 3))
        .await
        .unwrap();
    let pool: PoolBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_as(
            &format!("/api/v1/pools/{}/messages", pool.id),
            &host,
            &message_body("   "),
        )
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error.code, "EMPTY_MESSAGE");
}
