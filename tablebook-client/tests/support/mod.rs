//! In-process fake of the reservation backend
//!
//! Speaks the same `{data}`/`{error}` envelope, keeps state in memory and
//! exposes a few routes with unusual status/envelope combinations.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tablebook_client::{ClientConfig, Gateway};

#[derive(Default)]
struct Store {
    reservations: Vec<Value>,
    tables: Vec<Value>,
    next_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn reservation_mut(&mut self, id: i64) -> Option<&mut Value> {
        self.reservations
            .iter_mut()
            .find(|r| r["reservation_id"] == json!(id))
    }

    fn table_mut(&mut self, id: i64) -> Option<&mut Value> {
        self.tables.iter_mut().find(|t| t["table_id"] == json!(id))
    }
}

type Shared = Arc<Mutex<Store>>;

/// Handle on a running fake backend
#[derive(Clone)]
pub struct FakeBackend {
    store: Shared,
    pub base_url: String,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let store: Shared = Arc::new(Mutex::new(Store {
            next_id: 100,
            ..Store::default()
        }));

        let app = Router::new()
            .route("/reservations", get(list_reservations).post(create_reservation))
            .route(
                "/reservations/{id}",
                get(read_reservation).put(edit_reservation),
            )
            .route(
                "/reservations/{id}/status",
                axum::routing::put(update_status),
            )
            .route("/tables", get(list_tables).post(create_table))
            .route("/tables/{id}/seat", axum::routing::put(seat).delete(finish))
            .route("/quirks/bad-request-with-data", get(bad_request_with_data))
            .route("/quirks/ok-with-error", get(ok_with_error))
            .route("/quirks/no-content", get(no_content))
            .route("/quirks/html", get(html))
            .route("/quirks/slow", get(slow))
            .with_state(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            store,
            base_url: format!("http://{addr}"),
        }
    }

    pub fn gateway(&self) -> Gateway {
        Gateway::new(&ClientConfig::new(&self.base_url)).unwrap()
    }

    /// Store a reservation the way the backend returns it (timestamp date,
    /// time with seconds)
    pub fn seed_reservation(&self, date: &str, time: &str, people: u32, mobile: &str) -> i64 {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.reservations.push(json!({
            "reservation_id": id,
            "first_name": "Guest",
            "last_name": format!("No{id}"),
            "mobile_number": mobile,
            "reservation_date": format!("{date}T00:00:00.000Z"),
            "reservation_time": format!("{time}:00"),
            "people": people,
            "status": "booked",
            "created_at": "2029-12-01T10:00:00.000Z",
        }));
        id
    }

    pub fn seed_table(&self, name: &str, capacity: u32) -> i64 {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.tables.push(json!({
            "table_id": id,
            "table_name": name,
            "capacity": capacity,
            "reservation_id": null,
        }));
        id
    }

    pub fn reservation(&self, id: i64) -> Value {
        let mut store = self.store.lock().unwrap();
        store.reservation_mut(id).cloned().unwrap_or(Value::Null)
    }

    pub fn table(&self, id: i64) -> Value {
        let mut store = self.store.lock().unwrap();
        store.table_mut(id).cloned().unwrap_or(Value::Null)
    }
}

fn data(status: StatusCode, data: Value) -> Response {
    (status, Json(json!({ "data": data }))).into_response()
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn list_reservations(
    State(store): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let store = store.lock().unwrap();
    let found: Vec<Value> = store
        .reservations
        .iter()
        .filter(|r| match params.get("date") {
            Some(date) => r["reservation_date"]
                .as_str()
                .is_some_and(|d| d.starts_with(date.as_str())),
            None => true,
        })
        .filter(|r| match params.get("mobile_number") {
            Some(mobile) => {
                let wanted: String = mobile.chars().filter(char::is_ascii_digit).collect();
                r["mobile_number"].as_str().is_some_and(|m| {
                    m.chars()
                        .filter(char::is_ascii_digit)
                        .collect::<String>()
                        .contains(&wanted)
                })
            }
            None => true,
        })
        .cloned()
        .collect();
    data(StatusCode::OK, Value::Array(found))
}

async fn create_reservation(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut reservation = body["data"].clone();
    if !reservation["people"].is_u64() {
        return error(StatusCode::BAD_REQUEST, "people must be a number");
    }
    let mut store = store.lock().unwrap();
    let id = store.next_id();
    let date = reservation["reservation_date"].as_str().unwrap_or_default().to_string();
    let time = reservation["reservation_time"].as_str().unwrap_or_default().to_string();
    reservation["reservation_id"] = json!(id);
    reservation["status"] = json!("booked");
    reservation["reservation_date"] = json!(format!("{date}T00:00:00.000Z"));
    reservation["reservation_time"] = json!(format!("{time}:00"));
    store.reservations.push(reservation.clone());
    data(StatusCode::CREATED, reservation)
}

async fn read_reservation(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut store = store.lock().unwrap();
    match store.reservation_mut(id) {
        Some(r) => data(StatusCode::OK, r.clone()),
        None => error(StatusCode::NOT_FOUND, &format!("Reservation {id} cannot be found.")),
    }
}

async fn edit_reservation(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut store = store.lock().unwrap();
    let Some(r) = store.reservation_mut(id) else {
        return error(StatusCode::NOT_FOUND, &format!("Reservation {id} cannot be found."));
    };
    if let Value::Object(fields) = &body["data"] {
        for (k, v) in fields {
            r[k] = v.clone();
        }
    }
    data(StatusCode::OK, r.clone())
}

async fn update_status(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let status = body["data"]["status"].clone();
    let mut store = store.lock().unwrap();
    let Some(r) = store.reservation_mut(id) else {
        return error(StatusCode::NOT_FOUND, &format!("Reservation {id} cannot be found."));
    };
    if r["status"] == json!("finished") {
        return error(StatusCode::BAD_REQUEST, "a finished reservation cannot be updated");
    }
    r["status"] = status.clone();
    data(StatusCode::OK, json!({ "status": status }))
}

async fn list_tables(State(store): State<Shared>) -> Response {
    let store = store.lock().unwrap();
    data(StatusCode::OK, Value::Array(store.tables.clone()))
}

async fn create_table(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut table = body["data"].clone();
    if !table["capacity"].is_u64() {
        return error(StatusCode::BAD_REQUEST, "capacity must be a number");
    }
    let mut store = store.lock().unwrap();
    let id = store.next_id();
    table["table_id"] = json!(id);
    table["reservation_id"] = Value::Null;
    store.tables.push(table.clone());
    data(StatusCode::CREATED, table)
}

async fn seat(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let reservation_id = body["data"]["reservation_id"].clone();
    let mut store = store.lock().unwrap();
    let Some(people) = reservation_id
        .as_i64()
        .and_then(|rid| store.reservation_mut(rid))
        .map(|r| r["people"].as_u64().unwrap_or_default())
    else {
        return error(StatusCode::NOT_FOUND, "reservation_id does not exist");
    };
    let Some(table) = store.table_mut(id) else {
        return error(StatusCode::NOT_FOUND, &format!("Table {id} cannot be found."));
    };
    if !table["reservation_id"].is_null() {
        return error(StatusCode::BAD_REQUEST, "table is occupied");
    }
    if table["capacity"].as_u64().unwrap_or_default() < people {
        return error(StatusCode::BAD_REQUEST, "table does not have sufficient capacity");
    }
    table["reservation_id"] = reservation_id.clone();
    let table = table.clone();
    if let Some(r) = reservation_id.as_i64().and_then(|rid| store.reservation_mut(rid)) {
        r["status"] = json!("seated");
    }
    data(StatusCode::OK, table)
}

async fn finish(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut store = store.lock().unwrap();
    let Some(table) = store.table_mut(id) else {
        return error(StatusCode::NOT_FOUND, &format!("Table {id} cannot be found."));
    };
    if table["reservation_id"].is_null() {
        return error(StatusCode::BAD_REQUEST, "table is not occupied");
    }
    let reservation_id = table["reservation_id"].take();
    if let Some(r) = reservation_id.as_i64().and_then(|rid| store.reservation_mut(rid)) {
        r["status"] = json!("finished");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn bad_request_with_data() -> Response {
    data(StatusCode::BAD_REQUEST, json!({ "table_id": 1, "table_name": "#1", "capacity": 2 }))
}

async fn ok_with_error() -> Response {
    error(StatusCode::OK, "something went wrong")
}

async fn no_content() -> Response {
    (StatusCode::NO_CONTENT, "this is not json").into_response()
}

async fn html() -> Response {
    (StatusCode::OK, "<html>oops</html>").into_response()
}

async fn slow() -> Response {
    tokio::time::sleep(Duration::from_secs(5)).await;
    data(StatusCode::OK, json!([{ "late": true }]))
}
