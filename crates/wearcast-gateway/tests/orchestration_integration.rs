//! Chain-level tests: dependency order, short-circuiting, and value
//! passthrough across mocked downstream services. Call counts on the
//! mocks prove that aborted chains never issue downstream calls.

use wearcast_clients::{ClientError, ConnectionPool};
use wearcast_core::ErrorCode;
use wearcast_gateway::{map_error, GetCity, GetDressAdviceForUserCity, GetForecastForUserCity};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn moscow_city() -> serde_json::Value {
    serde_json::json!({
        "id": 10,
        "user_id": 1,
        "name": "Moscow",
        "lat": 55.75,
        "lon": 37.62
    })
}

fn moscow_reading() -> serde_json::Value {
    serde_json::json!({
        "temperature": 5.2,
        "humidity": 80.0,
        "wind_speed": 3.4,
        "precipitation": 0.0,
        "time": "12:00"
    })
}

fn city_not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(serde_json::json!({
        "code": "CITY_NOT_FOUND",
        "message": "City not found"
    }))
}

/// Three servers, one per downstream service, so call counts are
/// attributable per hop.
async fn servers() -> (MockServer, MockServer, MockServer) {
    (
        MockServer::start().await,
        MockServer::start().await,
        MockServer::start().await,
    )
}

#[tokio::test]
async fn test_forecast_chain_returns_reading_unchanged() {
    let (users, weather, _advice) = servers().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/1/city"))
        .and(query_param("name", "Moscow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(moscow_city()))
        .expect(1)
        .mount(&users)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/forecast"))
        .and(query_param("lat", "55.75"))
        .and(query_param("lon", "37.62"))
        .and(query_param("date", "2024-01-15"))
        .and(query_param("time", "12:00"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": moscow_reading() })),
        )
        .expect(1)
        .mount(&weather)
        .await;

    let uc = GetForecastForUserCity::new(ConnectionPool::new(), users.uri(), weather.uri());
    let reading = uc.run(1, "Moscow", "2024-01-15", "12:00").await.unwrap();

    assert_eq!(reading.temperature, 5.2);
    assert_eq!(reading.time, "12:00");
    assert_eq!(reading.humidity, 80.0);
}

#[tokio::test]
async fn test_forecast_chain_aborts_on_unknown_city() {
    let (users, weather, _advice) = servers().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/1/city"))
        .respond_with(city_not_found())
        .expect(1)
        .mount(&users)
        .await;

    // The dependent hop must never run.
    Mock::given(method("GET"))
        .and(path("/api/v1/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&weather)
        .await;

    let uc = GetForecastForUserCity::new(ConnectionPool::new(), users.uri(), weather.uri());
    let err = uc.run(1, "Atlantis", "", "").await.unwrap_err();

    assert_eq!(err.domain_code(), Some(ErrorCode::CityNotFound));
}

#[tokio::test]
async fn test_advice_chain_composes_all_three_hops() {
    let (users, weather, advice) = servers().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/1/city"))
        .and(query_param("name", "Moscow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(moscow_city()))
        .expect(1)
        .mount(&users)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": moscow_reading() })),
        )
        .expect(1)
        .mount(&weather)
        .await;

    // The advice hop must receive the reading exactly as the weather
    // service produced it.
    Mock::given(method("POST"))
        .and(path("/api/v1/advice"))
        .and(body_json(serde_json::json!({
            "weather_data": moscow_reading(),
            "locale": "ru"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "advice_text": "Наденьте тёплую куртку."
        })))
        .expect(1)
        .mount(&advice)
        .await;

    let uc = GetDressAdviceForUserCity::new(
        ConnectionPool::new(),
        users.uri(),
        weather.uri(),
        advice.uri(),
    );
    let text = uc
        .run(1, "Moscow", "2024-01-15", "12:00", "ru")
        .await
        .unwrap();

    assert_eq!(text, "Наденьте тёплую куртку.");
}

#[tokio::test]
async fn test_advice_chain_aborts_before_weather_and_advice() {
    let (users, weather, advice) = servers().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/1/city"))
        .respond_with(city_not_found())
        .expect(1)
        .mount(&users)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&weather)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/advice"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&advice)
        .await;

    let uc = GetDressAdviceForUserCity::new(
        ConnectionPool::new(),
        users.uri(),
        weather.uri(),
        advice.uri(),
    );
    let err = uc.run(1, "Atlantis", "", "", "en").await.unwrap_err();

    assert_eq!(err.domain_code(), Some(ErrorCode::CityNotFound));
}

#[tokio::test]
async fn test_advice_chain_stops_when_weather_is_down() {
    let (users, weather, advice) = servers().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/1/city"))
        .respond_with(ResponseTemplate::new(200).set_body_json(moscow_city()))
        .expect(1)
        .mount(&users)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&weather)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/advice"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&advice)
        .await;

    let uc = GetDressAdviceForUserCity::new(
        ConnectionPool::new(),
        users.uri(),
        weather.uri(),
        advice.uri(),
    );
    let err = uc.run(1, "Moscow", "", "", "en").await.unwrap_err();

    // No inline retry in interactive chains; the failure maps to 503.
    assert!(matches!(err, ClientError::Unavailable(_)));
    let mapped = map_error(&err, "en");
    assert_eq!(mapped.code, ErrorCode::ServiceUnavailable);
    assert_eq!(mapped.http.as_u16(), 503);
}

#[tokio::test]
async fn test_get_city_use_case_maps_absence_to_not_found() {
    let (users, _weather, _advice) = servers().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/1/city"))
        .respond_with(city_not_found())
        .mount(&users)
        .await;

    let uc = GetCity::new(ConnectionPool::new(), users.uri());
    let err = uc.run(1, "Atlantis").await.unwrap_err();

    let mapped = map_error(&err, "en");
    assert_eq!(mapped.code, ErrorCode::CityNotFound);
    assert_eq!(mapped.http.as_u16(), 404);
    assert_eq!(mapped.message, "City not found");
}
