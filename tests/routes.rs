use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};
use tempfile::TempDir;

use criminal_registry::domain::DEFAULT_ACTOR;
use criminal_registry::images::ImageStore;
use criminal_registry::models::config::JwtSettings;
use criminal_registry::repository::DieselRepository;
use criminal_registry::routes::configure;
use criminal_registry::services::auth::register_admin;
use criminal_registry::training_engine::TrainingEngine;

mod common;

const EMAIL: &str = "root@example.com";
const PASSWORD: &str = "s3cret-pass";
/// Nothing listens on the discard port, so every notification fails.
const UNREACHABLE_TRAIN_URL: &str = "http://127.0.0.1:9/train";

fn jwt_settings() -> JwtSettings {
    JwtSettings {
        key: "integration-test-secret-key-long-enough".to_string(),
        issuer: "CriminalAI".to_string(),
        audience: "CriminalAIUsers".to_string(),
        expire_minutes: 60,
    }
}

struct Fixture {
    _db: common::TestDb,
    _web_root: TempDir,
    repo: DieselRepository,
    images: ImageStore,
    trainer: TrainingEngine,
}

impl Fixture {
    fn new(name: &str) -> Self {
        let db = common::TestDb::new(name);
        let repo = DieselRepository::new(db.pool());
        register_admin(&repo, "root", EMAIL, PASSWORD, DEFAULT_ACTOR).unwrap();
        let web_root = tempfile::tempdir().unwrap();
        let images = ImageStore::new(web_root.path());
        Self {
            _db: db,
            _web_root: web_root,
            repo,
            images,
            trainer: TrainingEngine::disabled(),
        }
    }
}

macro_rules! init_app {
    ($fixture:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($fixture.repo.clone()))
                .app_data(web::Data::new(jwt_settings()))
                .app_data(web::Data::new($fixture.images.clone()))
                .app_data(web::Data::new($fixture.trainer.clone()))
                .configure(configure),
        )
        .await
    };
}

macro_rules! login {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/criminals/login")
            .set_json(json!({"email": EMAIL, "password": PASSWORD}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body["token"].as_str().unwrap().to_string()
    }};
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

#[actix_web::test]
async fn admin_routes_require_a_token() {
    let fixture = Fixture::new("admin_routes_require_a_token.db");
    let app = init_app!(fixture);

    let req = test::TestRequest::get().uri("/api/criminals").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 401);
    assert_eq!(body["message"], "Unauthorized");

    let req = test::TestRequest::get()
        .uri("/api/criminals/dashboard")
        .insert_header(bearer("not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn login_rejects_bad_credentials() {
    let fixture = Fixture::new("login_rejects_bad_credentials.db");
    let app = init_app!(fixture);

    let req = test::TestRequest::post()
        .uri("/api/criminals/login")
        .set_json(json!({"email": EMAIL, "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid credentials.");

    let req = test::TestRequest::post()
        .uri("/api/criminals/login")
        .set_json(json!({"email": EMAIL}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email and Password are required.");
}

#[actix_web::test]
async fn criminal_lifecycle_over_http() {
    let fixture = Fixture::new("criminal_lifecycle_over_http.db");
    let app = init_app!(fixture);
    let token = login!(app);

    let req = test::TestRequest::post()
        .uri("/api/criminals")
        .insert_header(bearer(&token))
        .set_json(json!({
            "criminalName": "John Doe",
            "crime": "Theft",
            "location": "NY",
            "dateOfCrime": "2024-01-05T10:00:00Z",
            "imageBase64": "data:image/png;base64,iVBORw0KGgo=",
            "crimes": [{"crimeType": "Burglary", "crimeDescription": "Night entry"}]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let guid = created["guid"].as_str().unwrap().to_string();
    assert_eq!(created["crimes"].as_array().unwrap().len(), 1);
    let image_url = created["imageUrl"].as_str().unwrap();
    assert_eq!(image_url, format!("/images/criminals/{guid}.png"));
    assert!(fixture.images.images_dir().join(format!("criminals/{guid}.png")).exists());

    let req = test::TestRequest::get()
        .uri("/api/criminals?filters=crime==Theft&page=1&pageSize=5")
        .insert_header(bearer(&token))
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["totalCount"], 1);
    assert_eq!(page["pageSize"], 5);
    assert_eq!(page["items"][0]["criminalName"], "John Doe");

    let req = test::TestRequest::put()
        .uri(&format!("/api/criminals/{guid}"))
        .insert_header(bearer(&token))
        .set_json(json!({"guid": uuid::Uuid::new_v4().to_string(), "location": "LA"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "GUID mismatch");

    let req = test::TestRequest::put()
        .uri(&format!("/api/criminals/{guid}"))
        .insert_header(bearer(&token))
        .set_json(json!({"guid": guid, "location": "LA", "crimes": []}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["location"], "LA");
    assert_eq!(updated["crime"], "Theft");
    assert!(updated["crimes"].as_array().unwrap().is_empty());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/criminals/{guid}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(!fixture.images.images_dir().join(format!("criminals/{guid}.png")).exists());

    let req = test::TestRequest::get()
        .uri(&format!("/api/criminals/{guid}"))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Criminal not found");
}

#[actix_web::test]
async fn create_rejects_blank_name() {
    let fixture = Fixture::new("create_rejects_blank_name.db");
    let app = init_app!(fixture);
    let token = login!(app);

    let req = test::TestRequest::post()
        .uri("/api/criminals")
        .insert_header(bearer(&token))
        .set_json(json!({"criminalName": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn pipeline_endpoints_are_anonymous() {
    let fixture = Fixture::new("pipeline_endpoints_are_anonymous.db");
    let app = init_app!(fixture);
    let criminal_guid = uuid::Uuid::new_v4().to_string();

    let req = test::TestRequest::post()
        .uri("/api/criminals/training")
        .set_json(json!({"numberOfImagesTrained": 42}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/criminals/events")
        .set_json(json!({"criminalGuid": criminal_guid, "location": "Gate 7"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let token = login!(app);

    let req = test::TestRequest::get()
        .uri("/api/criminals/training")
        .insert_header(bearer(&token))
        .to_request();
    let trainings: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(trainings["totalCount"], 1);
    assert_eq!(trainings["items"][0]["numberOfImagesTrained"], 42);

    let req = test::TestRequest::get()
        .uri(&format!("/api/criminals/{criminal_guid}/events"))
        .insert_header(bearer(&token))
        .to_request();
    let events: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(events["totalCount"], 1);
    assert_eq!(events["items"][0]["location"], "Gate 7");

    let req = test::TestRequest::get()
        .uri("/api/criminals/dashboard")
        .insert_header(bearer(&token))
        .to_request();
    let dashboard: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(dashboard["totalDataTrained"], 42);
    assert_eq!(dashboard["totalAdmins"], 1);
}

#[actix_web::test]
async fn detected_listing_reports_missing_folder() {
    let fixture = Fixture::new("detected_listing_reports_missing_folder.db");
    let app = init_app!(fixture);

    let req = test::TestRequest::get()
        .uri("/api/criminals/detected")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No detected images folder found.");
}

#[actix_web::test]
async fn create_succeeds_when_training_engine_is_unreachable() {
    let mut fixture = Fixture::new("create_succeeds_when_training_engine_is_unreachable.db");
    fixture.trainer = TrainingEngine::new(Some(UNREACHABLE_TRAIN_URL.to_string()));
    let app = init_app!(fixture);
    let token = login!(app);

    let req = test::TestRequest::post()
        .uri("/api/criminals")
        .insert_header(bearer(&token))
        .set_json(json!({"criminalName": "Jane Roe"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let guid = created["guid"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/criminals/{guid}"))
        .insert_header(bearer(&token))
        .to_request();
    let loaded: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(loaded["criminalName"], "Jane Roe");
}

#[actix_web::test]
async fn console_paths_reach_login_and_listing() {
    let fixture = Fixture::new("console_paths_reach_login_and_listing.db");
    let app = init_app!(fixture);

    let req = test::TestRequest::post()
        .uri("/api/Criminals/AdminLogin")
        .set_json(json!({"email": EMAIL, "password": PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/Criminals")
        .insert_header(bearer(&token))
        .set_json(json!({"criminalName": "John Doe"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    for uri in [
        "/api/Criminals/GetCriminals",
        "/api/criminals/GetCriminals",
        "/api/Criminals",
    ] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer(&token))
            .to_request();
        let page: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page["totalCount"], 1, "{uri}");
        assert_eq!(page["items"][0]["criminalName"], "John Doe", "{uri}");
    }

    let req = test::TestRequest::get()
        .uri("/api/Criminals/GetCriminals")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/criminals/AdminLogin")
        .set_json(json!({"email": EMAIL, "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
