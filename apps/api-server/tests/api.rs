use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::App;
use chrono::{TimeDelta, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use api_server::observability::RequestIdMiddleware;
use api_server::{AppState, Settings, configure_app};
use pixgram_core::domain::{Account, ImageRef, Story};
use pixgram_infra::{DatabaseConfig, connect};

const PASSWORD: &str = "correct-horse";

async fn test_state() -> AppState {
    let db = connect(&DatabaseConfig::in_memory()).await.unwrap();
    AppState::new(
        db,
        Settings {
            page_size: 2,
            ..Settings::default()
        },
    )
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(App::new().configure(configure_app($state.clone()))).await
    };
}

macro_rules! call {
    ($app:expr, $req:expr) => {
        test::call_service(&$app, $req.to_request()).await
    };
}

macro_rules! json_of {
    ($resp:expr) => {{
        let body: Value = test::read_body_json($resp).await;
        body
    }};
}

/// Register `$name` and log in, yielding the account id and session cookie.
macro_rules! signup {
    ($app:expr, $name:expr) => {{
        let resp = call!(
            $app,
            TestRequest::post().uri("/register").set_json(json!({
                "username": $name,
                "email": format!("{}@example.com", $name),
                "password": PASSWORD,
                "password_confirm": PASSWORD,
            }))
        );
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = json_of!(resp);
        let id: Uuid = body["user_id"].as_str().unwrap().parse().unwrap();

        let resp = call!(
            $app,
            TestRequest::post()
                .uri("/login")
                .set_json(json!({"username": $name, "password": PASSWORD}))
        );
        assert_eq!(resp.status(), StatusCode::OK);
        let cookie: Cookie<'static> = resp
            .response()
            .cookies()
            .find(|c| c.name() == "sessionid")
            .unwrap()
            .into_owned();
        (id, cookie)
    }};
}

macro_rules! create_post {
    ($app:expr, $cookie:expr, $description:expr) => {{
        let resp = call!(
            $app,
            TestRequest::post()
                .uri("/posts")
                .cookie($cookie.clone())
                .set_json(json!({"image": "posts/photo.jpg", "description": $description}))
        );
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = json_of!(resp);
        body["id"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn test_health_and_request_id() {
    let state = test_state().await;
    let app = test::init_service(
        App::new()
            .wrap(RequestIdMiddleware)
            .configure(configure_app(state.clone())),
    )
    .await;

    let resp = call!(app, TestRequest::get().uri("/health"));
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let resp = call!(
        app,
        TestRequest::get()
            .uri("/health")
            .insert_header(("X-Request-ID", "trace-me"))
    );
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-me");
    let body = json_of!(resp);
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_duplicate_registration_fails() {
    let state = test_state().await;
    let app = app!(state);
    let (alice_id, _) = signup!(app, "alice");

    let resp = call!(
        app,
        TestRequest::post().uri("/register").set_json(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "other",
            "password_confirm": "other",
        }))
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_of!(resp);
    assert_eq!(body["error"], "Registration failed");
    assert!(body["details"]["username"].is_array());
    assert!(body["details"]["email"].is_array());

    let account: Option<Account> = state.accounts.find_by_username("alice").await.unwrap();
    assert_eq!(account.unwrap().id, alice_id);
}

#[actix_web::test]
async fn test_registration_collects_every_problem() {
    let state = test_state().await;
    let app = app!(state);

    let resp = call!(
        app,
        TestRequest::post().uri("/register").set_json(json!({
            "username": "carol",
            "email": "not-an-email",
            "password": "one",
            "password_confirm": "two",
        }))
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_of!(resp);
    assert_eq!(body["details"]["password_confirm"][0], "Passwords do not match.");
    assert!(body["details"]["email"].is_array());

    // Nothing was written, so the name is still free.
    assert!(state.accounts.find_by_username("carol").await.unwrap().is_none());
    signup!(app, "carol");
}

#[actix_web::test]
async fn test_login_failures_look_alike() {
    let state = test_state().await;
    let app = app!(state);
    signup!(app, "alice");

    let wrong_password = call!(
        app,
        TestRequest::post()
            .uri("/login")
            .set_json(json!({"username": "alice", "password": "nope"}))
    );
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = json_of!(wrong_password);

    let unknown_user = call!(
        app,
        TestRequest::post()
            .uri("/login")
            .set_json(json!({"username": "mallory", "password": "nope"}))
    );
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    let unknown_user = json_of!(unknown_user);

    assert_eq!(wrong_password, unknown_user);
    assert_eq!(wrong_password["error"], "Login failed");
    assert_eq!(
        wrong_password["details"]["non_field_errors"][0],
        "Invalid credentials"
    );

    let missing = call!(
        app,
        TestRequest::post()
            .uri("/login")
            .set_json(json!({"username": "alice"}))
    );
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    let missing = json_of!(missing);
    assert!(missing["details"]["password"].is_array());
}

#[actix_web::test]
async fn test_disabled_account() {
    let state = test_state().await;
    let app = app!(state);
    let (alice_id, cookie) = signup!(app, "alice");

    let mut alice: Account = state.accounts.find_by_id(alice_id).await.unwrap().unwrap();
    alice.is_active = false;
    state.accounts.update(alice).await.unwrap();

    let resp = call!(app, TestRequest::get().uri("/accounts/me").cookie(cookie));
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = call!(
        app,
        TestRequest::post()
            .uri("/login")
            .set_json(json!({"username": "alice", "password": PASSWORD}))
    );
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = json_of!(resp);
    assert_eq!(body["details"]["non_field_errors"][0], "Account is disabled");

    let resp = call!(
        app,
        TestRequest::post()
            .uri("/login")
            .set_json(json!({"username": "alice", "password": "wrong"}))
    );
    let body = json_of!(resp);
    assert_eq!(body["details"]["non_field_errors"][0], "Invalid credentials");
}

#[actix_web::test]
async fn test_unauthenticated_access_is_forbidden() {
    let state = test_state().await;
    let app = app!(state);

    let resp = call!(app, TestRequest::get().uri("/posts"));
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = json_of!(resp);
    assert_eq!(body["detail"], "Authentication credentials were not provided.");

    let bogus = Cookie::new("sessionid", "deadbeef");
    let resp = call!(app, TestRequest::get().uri("/stories").cookie(bogus));
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_follow_and_feed() {
    let state = test_state().await;
    let app = app!(state);
    let (alice_id, alice) = signup!(app, "alice");
    let (_, bob) = signup!(app, "bob");
    let (_, carol) = signup!(app, "carol");

    let post_id = create_post!(app, alice, "Hello from alice");
    create_post!(app, carol, "Carol was here");

    let resp = call!(
        app,
        TestRequest::post()
            .uri(&format!("/accounts/{}/follow", alice_id))
            .cookie(bob.clone())
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_of!(resp);
    assert_eq!(body["follower"]["username"], "bob");
    assert_eq!(body["following"]["username"], "alice");

    let again = call!(
        app,
        TestRequest::post()
            .uri(&format!("/accounts/{}/follow", alice_id))
            .cookie(bob.clone())
    );
    assert_eq!(again.status(), StatusCode::OK);

    for uri in ["/posts/feed", "/posts/my_feed"] {
        let resp = call!(app, TestRequest::get().uri(uri).cookie(bob.clone()));
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_of!(resp);
        assert_eq!(body["count"], 1, "{uri}");
        assert_eq!(body["results"][0]["id"], post_id.as_str());
        assert_eq!(body["results"][0]["owner"]["username"], "alice");
    }

    let resp = call!(
        app,
        TestRequest::post()
            .uri(&format!("/posts/{}/like", Uuid::new_v4()))
            .cookie(bob.clone())
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = call!(
        app,
        TestRequest::get().uri("/posts/not-a-uuid").cookie(bob.clone())
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_like_toggles() {
    let state = test_state().await;
    let app = app!(state);
    let (_, alice) = signup!(app, "alice");
    let (_, bob) = signup!(app, "bob");
    let post_id = create_post!(app, alice, "Like me");
    let like_uri = format!("/posts/{}/like", post_id);

    for _ in 0..3 {
        let resp = call!(app, TestRequest::post().uri(&like_uri).cookie(bob.clone()));
        assert_eq!(resp.status(), StatusCode::OK);
    }
    let resp = call!(app, TestRequest::post().uri(&like_uri).cookie(alice.clone()));
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = call!(
        app,
        TestRequest::get()
            .uri(&format!("/posts/{}", post_id))
            .cookie(bob.clone())
    );
    let body = json_of!(resp);
    assert_eq!(body["likes_count"], 2);
    assert_eq!(body["is_liked"], true);

    call!(app, TestRequest::post().uri(&like_uri).cookie(bob.clone()));
    let resp = call!(app, TestRequest::get().uri("/posts/my_likes").cookie(bob.clone()));
    let body = json_of!(resp);
    assert_eq!(body["count"], 0);

    let resp = call!(
        app,
        TestRequest::get()
            .uri(&format!("/posts/{}", post_id))
            .cookie(bob)
    );
    let body = json_of!(resp);
    assert_eq!(body["likes_count"], 1);
    assert_eq!(body["is_liked"], false);
}

#[actix_web::test]
async fn test_seen_is_recorded_once() {
    let state = test_state().await;
    let app = app!(state);
    let (_, alice) = signup!(app, "alice");
    let post_id = create_post!(app, alice, "Look");
    let seen_uri = format!("/posts/{}/seen", post_id);

    for _ in 0..2 {
        let resp = call!(app, TestRequest::get().uri(&seen_uri).cookie(alice.clone()));
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = call!(
        app,
        TestRequest::get()
            .uri(&format!("/posts/{}", post_id))
            .cookie(alice)
    );
    let body = json_of!(resp);
    assert_eq!(body["seen_count"], 1);
}

#[actix_web::test]
async fn test_comment_length_limit() {
    let state = test_state().await;
    let app = app!(state);
    let (_, alice) = signup!(app, "alice");
    let post_id = create_post!(app, alice, "Talk to me");
    let comment_uri = format!("/posts/{}/comment", post_id);

    let resp = call!(
        app,
        TestRequest::post()
            .uri(&comment_uri)
            .cookie(alice.clone())
            .set_json(json!({"text": "x".repeat(256)}))
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_of!(resp);
    assert!(body["errors"]["text"].is_array());

    let resp = call!(
        app,
        TestRequest::post()
            .uri(&comment_uri)
            .cookie(alice.clone())
            .set_json(json!({"text": "   "}))
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_of!(resp);
    assert_eq!(body["errors"]["text"][0], "This field may not be blank.");

    let resp = call!(
        app,
        TestRequest::post()
            .uri(&comment_uri)
            .cookie(alice.clone())
            .set_json(json!({}))
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_of!(resp);
    assert_eq!(body["errors"]["text"][0], "This field is required.");

    let resp = call!(
        app,
        TestRequest::post()
            .uri(&comment_uri)
            .cookie(alice.clone())
            .set_json(json!({"text": "y".repeat(255)}))
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_of!(resp);
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["post"], post_id.as_str());

    let resp = call!(
        app,
        TestRequest::get()
            .uri(&format!("/posts/{}", post_id))
            .cookie(alice.clone())
    );
    let body = json_of!(resp);
    assert_eq!(body["comments_count"], 1);
    assert_eq!(body["comments"].as_array().unwrap().len(), 1);

    let resp = call!(app, TestRequest::get().uri("/posts/my_comments").cookie(alice));
    let body = json_of!(resp);
    assert_eq!(body["count"], 1);
}

#[actix_web::test]
async fn test_post_validation_and_preview() {
    let state = test_state().await;
    let app = app!(state);
    let (_, alice) = signup!(app, "alice");

    let resp = call!(
        app,
        TestRequest::post()
            .uri("/posts")
            .cookie(alice.clone())
            .set_json(json!({"image": "clip.gif", "description": "animated"}))
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_of!(resp);
    assert!(body["errors"]["image"].is_array());

    let long = "a".repeat(60);
    let resp = call!(
        app,
        TestRequest::post()
            .uri("/posts")
            .cookie(alice)
            .set_json(json!({"image": "https://cdn.example.com/p.PNG?v=2", "description": long}))
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_of!(resp);
    assert_eq!(body["description_preview"], format!("{}...", "a".repeat(50)));
    assert_eq!(body["is_liked"], false);
}

#[actix_web::test]
async fn test_only_owner_edits_posts() {
    let state = test_state().await;
    let app = app!(state);
    let (_, alice) = signup!(app, "alice");
    let (_, bob) = signup!(app, "bob");
    let post_id = create_post!(app, alice, "Mine");
    let uri = format!("/posts/{}", post_id);

    let resp = call!(
        app,
        TestRequest::patch()
            .uri(&uri)
            .cookie(bob.clone())
            .set_json(json!({"description": "Hijacked"}))
    );
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = call!(app, TestRequest::delete().uri(&uri).cookie(bob));
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = call!(
        app,
        TestRequest::patch()
            .uri(&uri)
            .cookie(alice.clone())
            .set_json(json!({"description": "Still mine"}))
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_of!(resp);
    assert_eq!(body["description"], "Still mine");
    assert_eq!(body["image"], "posts/photo.jpg");

    let resp = call!(
        app,
        TestRequest::put()
            .uri(&uri)
            .cookie(alice.clone())
            .set_json(json!({"description": "No image"}))
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = call!(app, TestRequest::delete().uri(&uri).cookie(alice.clone()));
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = call!(app, TestRequest::get().uri(&uri).cookie(alice));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_pagination() {
    let state = test_state().await;
    let app = app!(state);
    let (_, alice) = signup!(app, "alice");

    let resp = call!(app, TestRequest::get().uri("/posts").cookie(alice.clone()));
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_of!(resp);
    assert_eq!(body["count"], 0);
    assert!(body["next"].is_null());

    for n in 0..3 {
        create_post!(app, alice, format!("post {n}"));
    }

    let resp = call!(app, TestRequest::get().uri("/posts").cookie(alice.clone()));
    let body = json_of!(resp);
    assert_eq!(body["count"], 3);
    assert_eq!(body["next"], 2);
    assert!(body["previous"].is_null());
    assert_eq!(body["results"].as_array().unwrap().len(), 2);

    let resp = call!(
        app,
        TestRequest::get()
            .uri("/posts/my_posts?page=2")
            .cookie(alice.clone())
    );
    let body = json_of!(resp);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["previous"], 1);
    assert!(body["next"].is_null());

    for page in ["3", "0", "abc", "9223372036854775809", "18446744073709551615"] {
        let resp = call!(
            app,
            TestRequest::get()
                .uri(&format!("/posts?page={page}"))
                .cookie(alice.clone())
        );
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "page={page}");
        let body = json_of!(resp);
        assert_eq!(body["detail"], "Invalid page.");
    }
}

#[actix_web::test]
async fn test_story_freshness() {
    let state = test_state().await;
    let app = app!(state);
    let (alice_id, alice) = signup!(app, "alice");
    let (_, bob) = signup!(app, "bob");

    let resp = call!(
        app,
        TestRequest::post()
            .uri("/stories")
            .cookie(alice.clone())
            .set_json(json!({"image": "stories/today.png"}))
    );
    assert_eq!(resp.status(), StatusCode::CREATED);

    let mut old = Story::new(alice_id, ImageRef::parse("stories/old.png").unwrap());
    old.created_at = Utc::now() - TimeDelta::hours(30);
    state.stories.insert(old).await.unwrap();

    let resp = call!(
        app,
        TestRequest::get().uri("/stories/my_stories").cookie(alice.clone())
    );
    let body = json_of!(resp);
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["image"], "stories/today.png");

    let resp = call!(
        app,
        TestRequest::get()
            .uri(&format!("/stories/user_stories?user_id={}", alice_id))
            .cookie(bob.clone())
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_of!(resp);
    assert_eq!(body["count"], 1);

    let resp = call!(app, TestRequest::get().uri("/stories").cookie(alice.clone()));
    let body = json_of!(resp);
    assert_eq!(body["count"], 2);

    // Bob follows nobody, so only his own (none) are listed.
    let resp = call!(app, TestRequest::get().uri("/stories").cookie(bob.clone()));
    let body = json_of!(resp);
    assert_eq!(body["count"], 0);

    let resp = call!(
        app,
        TestRequest::get().uri("/stories/user_stories").cookie(bob.clone())
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = call!(
        app,
        TestRequest::get()
            .uri("/stories/user_stories?user_id=nope")
            .cookie(bob.clone())
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = call!(
        app,
        TestRequest::get()
            .uri(&format!("/stories/user_stories?user_id={}", Uuid::new_v4()))
            .cookie(bob)
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_story_owner_edits() {
    let state = test_state().await;
    let app = app!(state);
    let (_, alice) = signup!(app, "alice");
    let (_, bob) = signup!(app, "bob");

    let resp = call!(
        app,
        TestRequest::post()
            .uri("/stories")
            .cookie(alice.clone())
            .set_json(json!({"image": "stories/a.png"}))
    );
    let body = json_of!(resp);
    let uri = format!("/stories/{}", body["id"].as_str().unwrap());

    let resp = call!(
        app,
        TestRequest::put()
            .uri(&uri)
            .cookie(bob.clone())
            .set_json(json!({"image": "stories/b.png"}))
    );
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = call!(
        app,
        TestRequest::put()
            .uri(&uri)
            .cookie(alice.clone())
            .set_json(json!({"image": "stories/b.mov"}))
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = call!(
        app,
        TestRequest::put()
            .uri(&uri)
            .cookie(alice.clone())
            .set_json(json!({"image": "stories/b.jpeg"}))
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_of!(resp);
    assert_eq!(body["image"], "stories/b.jpeg");

    let resp = call!(app, TestRequest::delete().uri(&uri).cookie(alice.clone()));
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let resp = call!(app, TestRequest::get().uri(&uri).cookie(alice));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_logout() {
    let state = test_state().await;
    let app = app!(state);

    let resp = call!(app, TestRequest::post().uri("/logout"));
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_of!(resp);
    assert_eq!(body["message"], "Logout successful");

    let (_, alice) = signup!(app, "alice");
    let resp = call!(app, TestRequest::get().uri("/accounts/me").cookie(alice.clone()));
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = call!(app, TestRequest::post().uri("/logout").cookie(alice.clone()));
    assert_eq!(resp.status(), StatusCode::OK);
    let removal = resp
        .response()
        .cookies()
        .find(|c| c.name() == "sessionid")
        .unwrap()
        .into_owned();
    assert_eq!(removal.value(), "");

    let resp = call!(app, TestRequest::get().uri("/accounts/me").cookie(alice));
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_account_profiles_and_follow_lists() {
    let state = test_state().await;
    let app = app!(state);
    let (alice_id, alice) = signup!(app, "alice");
    let (bob_id, bob) = signup!(app, "bob");
    create_post!(app, alice, "first");

    let resp = call!(
        app,
        TestRequest::post()
            .uri(&format!("/accounts/{}/follow", alice_id))
            .cookie(alice.clone())
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    call!(
        app,
        TestRequest::post()
            .uri(&format!("/accounts/{}/follow", alice_id))
            .cookie(bob.clone())
    );

    let resp = call!(
        app,
        TestRequest::get()
            .uri(&format!("/accounts/{}", alice_id))
            .cookie(bob.clone())
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_of!(resp);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["posts_count"], 1);
    assert_eq!(body["followers_count"], 1);
    assert_eq!(body["following_count"], 0);
    assert!(body.get("password_hash").is_none());

    let resp = call!(
        app,
        TestRequest::get()
            .uri(&format!("/accounts/{}/followers", alice_id))
            .cookie(bob.clone())
    );
    let body = json_of!(resp);
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["account"]["id"], bob_id.to_string());

    let resp = call!(
        app,
        TestRequest::get()
            .uri(&format!("/accounts/{}/following", bob_id))
            .cookie(bob.clone())
    );
    let body = json_of!(resp);
    assert_eq!(body["results"][0]["account"]["username"], "alice");

    let resp = call!(
        app,
        TestRequest::post()
            .uri(&format!("/accounts/{}/unfollow", alice_id))
            .cookie(bob.clone())
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = call!(app, TestRequest::get().uri("/accounts/me").cookie(bob.clone()));
    let body = json_of!(resp);
    assert_eq!(body["following_count"], 0);

    let resp = call!(
        app,
        TestRequest::get()
            .uri(&format!("/accounts/{}", Uuid::new_v4()))
            .cookie(bob)
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
