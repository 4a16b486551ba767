use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nutrition_tracker_rs::api::FoodApiClient;
use nutrition_tracker_rs::error::TrackerError;
use nutrition_tracker_rs::models::{FoodDraft, FoodId, FoodItem, MealType};
use nutrition_tracker_rs::state::{MealPlanner, SnapshotSlot};

fn client_for(server: &MockServer) -> FoodApiClient {
    FoodApiClient::new(server.uri(), Duration::from_secs(5)).unwrap()
}

fn food_json(id: i64, name: &str, calories: f64, price: f64) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "brand": null,
        "serving_size": 100.0,
        "calories": calories,
        "protein": 10.0,
        "carbohydrates": 20.0,
        "fats": 5.0,
        "fiber": 2.0,
        "sugar": null,
        "price": price,
        "store": null,
        "price_per_unit": price,
        "calories_per_dollar": calories / price,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": null
    })
}

fn oats_draft() -> FoodDraft {
    FoodDraft {
        name: "Oats".to_string(),
        calories: 389.0,
        protein: 16.9,
        carbohydrates: 66.3,
        fats: 6.9,
        fiber: Some(10.6),
        price: 0.4,
        ..FoodDraft::default()
    }
}

#[tokio::test]
async fn test_list_foods() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/food-items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            food_json(1, "Oats", 389.0, 0.4),
            food_json(2, "Lentils", 116.0, 0.3),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let foods = client_for(&server).list_foods().await.unwrap();
    assert_eq!(foods.len(), 2);
    assert_eq!(foods[0].id, FoodId(1));
    assert_eq!(foods[1].name, "Lentils");
    assert_eq!(foods[1].sugar, None);
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_trimmed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/food-items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = FoodApiClient::new(format!("{}/", server.uri()), Duration::from_secs(5)).unwrap();
    assert!(!client.base_url().ends_with('/'));
    assert!(client.list_foods().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_food_not_found_surfaces_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/food-items/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "Food item not found"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_food(FoodId(42)).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Food item not found");
}

#[tokio::test]
async fn test_create_food_posts_draft() {
    let server = MockServer::start().await;
    let draft = oats_draft();

    Mock::given(method("POST"))
        .and(path("/food-items"))
        .and(body_json(serde_json::to_value(&draft).unwrap()))
        .respond_with(ResponseTemplate::new(201).set_body_json(food_json(9, "Oats", 389.0, 0.4)))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server).create_food(&draft).await.unwrap();
    assert_eq!(created.id, FoodId(9));
}

#[tokio::test]
async fn test_create_food_validation_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/food-items"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{"loc": ["body", "price"], "msg": "ensure this value is greater than 0"}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).create_food(&oats_draft()).await.unwrap_err();
    match &err {
        TrackerError::Api { status, .. } => assert_eq!(*status, 422),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.user_message(), "ensure this value is greater than 0");
}

#[tokio::test]
async fn test_update_and_delete_food() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/food-items/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(food_json(3, "Oats", 380.0, 0.5)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/food-items/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let updated = client.update_food(FoodId(3), &oats_draft()).await.unwrap();
    assert_eq!(updated.calories, 380.0);

    client.delete_food(FoodId(3)).await.unwrap();
}

#[tokio::test]
async fn test_server_error_without_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/food-items"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_foods().await.unwrap_err();
    assert_eq!(err.user_message(), "HTTP 500");
}

#[tokio::test]
async fn test_snapshot_refresh_failure_keeps_previous_foods() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/food-items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([food_json(1, "Oats", 389.0, 0.4)])))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/food-items"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut slot = SnapshotSlot::new();

    assert_eq!(slot.refresh(&client).await.unwrap().len(), 1);
    assert!(slot.refresh(&client).await.is_err());
    assert_eq!(slot.foods().len(), 1);
    assert_eq!(slot.foods()[0].name, "Oats");
}

#[tokio::test]
async fn test_meal_plan_save_sends_only_triples() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/meal-plans"))
        .and(body_json(json!({
            "name": "Monday",
            "foods": [
                {"food_id": 1, "quantity": 1.5, "meal_type": "Breakfast"},
                {"food_id": 2, "quantity": 0.5, "meal_type": "Dinner"}
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 77, "name": "Monday"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let foods: Vec<FoodItem> = serde_json::from_value(json!([
        food_json(1, "Oats", 389.0, 0.4),
        food_json(2, "Lentils", 116.0, 0.3),
    ]))
    .unwrap();

    let mut planner = MealPlanner::default();
    planner.add(&foods[0], MealType::Breakfast, 150.0).unwrap();
    planner.add(&foods[1], MealType::Dinner, 50.0).unwrap();
    planner.set_plan_name("  Monday ");

    let saved = planner.save(&client).await.unwrap();
    assert_eq!(saved.foods.len(), 2);
    assert!(planner.is_empty());
    assert_eq!(planner.plan_name(), "");
}

#[tokio::test]
async fn test_meal_plan_rejected_keeps_entries() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/meal-plans"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Unknown food id 1"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let food: FoodItem = serde_json::from_value(food_json(1, "Oats", 389.0, 0.4)).unwrap();

    let mut planner = MealPlanner::default();
    planner.add(&food, MealType::Lunch, 100.0).unwrap();
    planner.set_plan_name("Tuesday");

    let err = planner.save(&client).await.unwrap_err();
    assert_eq!(err.user_message(), "Unknown food id 1");
    assert_eq!(planner.len(), 1);
    assert_eq!(planner.plan_name(), "Tuesday");
}
