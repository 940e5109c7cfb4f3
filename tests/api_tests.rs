use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use planetary::config::Config;
use tower::ServiceExt;

const SEED_EMAIL: &str = "john.doe@example.com";
const SEED_PASSWORD: &str = "123456";

fn test_config() -> Config {
    let db_path = std::env::temp_dir().join(format!(
        "planetary-api-test-{}.db",
        uuid::Uuid::new_v4()
    ));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());
    config.security.jwt_secret = "test-secret".to_string();
    config.security.argon2_memory_cost_kib = 1024;
    config.security.argon2_time_cost = 1;
    config
}

async fn spawn_app_with_config(config: Config) -> Router {
    let security = config.security.clone();
    let state = planetary::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");

    state
        .store()
        .seed(&security)
        .await
        .expect("Failed to seed database");

    planetary::api::router(state)
}

async fn spawn_app() -> Router {
    spawn_app_with_config(test_config()).await
}

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn form_request(method: &str, uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(form_request(
            "POST",
            "/login",
            None,
            &format!("email={SEED_EMAIL}&password={SEED_PASSWORD}"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Login successful");
    json["access_token"].as_str().unwrap().to_string()
}

const JUPITER_FORM: &str = "planet_name=Jupiter&planet_type=Class%20J&home_star=Sol&mass=1.898e27&radius=43441&distance=483.8e6";

#[tokio::test]
async fn test_home() {
    let app = spawn_app().await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Hello from Planetary!");
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "ok");
}

#[tokio::test]
async fn test_list_seeded_planets() {
    let app = spawn_app().await;

    let response = app.oneshot(get("/planets")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let planets = json.as_array().unwrap();
    assert_eq!(planets.len(), 3);

    let earth = planets
        .iter()
        .find(|p| p["planet_name"] == "Earth")
        .expect("Earth is seeded");
    assert_eq!(earth["planet_type"], "Class K");
    assert_eq!(earth["home_star"], "Sol");
    assert_eq!(earth["mass"].as_f64().unwrap(), 5.972e24);
    assert_eq!(earth["radius"].as_f64().unwrap(), 3959.0);
    assert_eq!(earth["distance"].as_f64().unwrap(), 92.96e6);

    let mut names: Vec<&str> = planets
        .iter()
        .map(|p| p["planet_name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(names, ["Earth", "Mercury", "Venus"]);
}

#[tokio::test]
async fn test_planet_details() {
    let app = spawn_app().await;

    let response = app.clone().oneshot(get("/planets")).await.unwrap();
    let json = body_json(response).await;
    let id = json[0]["planet_id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(get(&format!("/planet_details/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "planet found!");
    assert_eq!(json["planet_details"]["planet_id"], id);
}

#[tokio::test]
async fn test_missing_planet_keeps_ok_status_by_default() {
    let app = spawn_app().await;

    let response = app.oneshot(get("/planet_details/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Planet does not exist");
    assert!(json.get("planet_details").is_none());
}

#[tokio::test]
async fn test_non_numeric_planet_id_is_validation_error() {
    let app = spawn_app().await;

    let response = app.clone().oneshot(get("/planet_details/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].is_string());

    let token = login(&app).await;
    let response = app
        .oneshot(form_request("DELETE", "/delete_planet/abc", Some(&token), ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn test_missing_planet_strict_status() {
    let mut config = test_config();
    config.server.strict_not_found_status = true;
    let app = spawn_app_with_config(config).await;

    let response = app.clone().oneshot(get("/planet_details/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Planet does not exist");

    let token = login(&app).await;
    let response = app
        .oneshot(form_request("DELETE", "/planet_details/9999", Some(&token), ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = spawn_app().await;
    let form = "email=jane%40example.com&first_name=Jane&last_name=Roe&password=hunter22";

    let response = app
        .clone()
        .oneshot(form_request("POST", "/register", None, form))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "User added to database");

    let response = app
        .clone()
        .oneshot(form_request("POST", "/register", None, form))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["message"], "Email already exists");

    let response = app
        .oneshot(form_request(
            "POST",
            "/login",
            None,
            "email=jane%40example.com&password=hunter22",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_missing_field() {
    let app = spawn_app().await;

    let response = app
        .oneshot(form_request(
            "POST",
            "/register",
            None,
            "email=jane%40example.com&first_name=Jane&last_name=Roe",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Missing required field: password");
}

#[tokio::test]
async fn test_login() {
    let app = spawn_app().await;

    let token = login(&app).await;
    assert_eq!(token.matches('.').count(), 2);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::json!({"email": SEED_EMAIL, "password": SEED_PASSWORD})
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["access_token"].is_string());

    let response = app
        .clone()
        .oneshot(form_request(
            "POST",
            "/login",
            None,
            &format!("email={SEED_EMAIL}&password=wrong"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["message"],
        "Incorrect email or password"
    );

    let response = app
        .oneshot(form_request(
            "POST",
            "/login",
            None,
            "email=nobody%40example.com&password=123456",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(form_request("POST", "/add_planet", None, JUPITER_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(form_request(
            "POST",
            "/add_planet",
            Some("not.a.token"),
            JUPITER_FORM,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(form_request("PUT", "/update_planet", None, JUPITER_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(form_request("DELETE", "/planet_details/1", None, ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.oneshot(get("/planets")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_token_from_other_secret_is_rejected() {
    let app = spawn_app().await;

    let mut foreign = test_config();
    foreign.security.jwt_secret = "someone-elses-secret".to_string();
    let token = planetary::services::TokenIssuer::from_config(&foreign.security)
        .issue(SEED_EMAIL)
        .unwrap();

    let response = app
        .oneshot(form_request("POST", "/add_planet", Some(&token), JUPITER_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_add_planet_and_duplicate_name() {
    let app = spawn_app().await;
    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(form_request("POST", "/add_planet", Some(&token), JUPITER_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Planet added successfully"
    );

    let response = app
        .clone()
        .oneshot(form_request(
            "POST",
            "/add_planet",
            Some(&token),
            "planet_name=Earth&planet_type=Class%20K&home_star=Sol&mass=1&radius=1&distance=1",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["message"],
        "Planet name already exists"
    );

    let response = app.oneshot(get("/planets")).await.unwrap();
    let json = body_json(response).await;
    let planets = json.as_array().unwrap();
    assert_eq!(planets.len(), 4);

    let jupiter = planets
        .iter()
        .find(|p| p["planet_name"] == "Jupiter")
        .unwrap();
    assert_eq!(jupiter["planet_type"], "Class J");
    assert_eq!(jupiter["mass"].as_f64().unwrap(), 1.898e27);
}

#[tokio::test]
async fn test_add_planet_json_body() {
    let app = spawn_app().await;
    let token = login(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add_planet")
                .header("Content-Type", "application/json")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::from(
                    serde_json::json!({
                        "planet_name": "Mars",
                        "planet_type": "Class M",
                        "home_star": "Sol",
                        "mass": 6.39e23,
                        "radius": "2106",
                        "distance": 141.6e6
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_add_planet_rejects_non_numeric_mass() {
    let app = spawn_app().await;
    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(form_request(
            "POST",
            "/add_planet",
            Some(&token),
            "planet_name=Pluto&planet_type=Dwarf&home_star=Sol&mass=heavy&radius=738&distance=3.7e9",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Invalid mass: expected a number"
    );

    let response = app.oneshot(get("/planets")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_planet() {
    let app = spawn_app().await;
    let token = login(&app).await;

    let response = app.clone().oneshot(get("/planets")).await.unwrap();
    let json = body_json(response).await;
    let venus_id = json
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["planet_name"] == "Venus")
        .unwrap()["planet_id"]
        .as_i64()
        .unwrap();

    let response = app
        .clone()
        .oneshot(form_request(
            "PUT",
            "/update_planet",
            Some(&token),
            &format!(
                "planet_id={venus_id}&planet_name=Venus&planet_type=Class%20V&home_star=Sol&mass=4.9e24&radius=3761&distance=67.3e6"
            ),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Planet updated successfully"
    );

    let response = app
        .clone()
        .oneshot(get(&format!("/planet_details/{venus_id}")))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["planet_details"]["planet_type"], "Class V");
    assert_eq!(json["planet_details"]["radius"].as_f64().unwrap(), 3761.0);

    let response = app
        .oneshot(form_request(
            "PUT",
            "/update_planet",
            Some(&token),
            "planet_id=9999&planet_name=Nowhere&planet_type=X&home_star=Y&mass=1&radius=1&distance=1",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Could not find planet");
}

#[tokio::test]
async fn test_delete_planet() {
    let app = spawn_app().await;
    let token = login(&app).await;

    let response = app.clone().oneshot(get("/planets")).await.unwrap();
    let json = body_json(response).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["planet_id"].as_i64().unwrap())
        .collect();

    let response = app
        .clone()
        .oneshot(form_request(
            "DELETE",
            &format!("/planet_details/{}", ids[0]),
            Some(&token),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Planet removed successfully"
    );

    let response = app
        .clone()
        .oneshot(form_request(
            "DELETE",
            &format!("/delete_planet/{}", ids[1]),
            Some(&token),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(form_request(
            "DELETE",
            &format!("/planet_details/{}", ids[0]),
            Some(&token),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Could not find planet");

    let response = app
        .clone()
        .oneshot(get(&format!("/planet_details/{}", ids[0])))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["message"], "Planet does not exist");

    let response = app.oneshot(get("/planets")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}
