//! Behavioural tests for the location REST API.
//!
//! Requests flow through the real service and the in-memory repository. The
//! clock advances one minute per reading so creation order and update times
//! are strictly increasing.

use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use actix_web::http::StatusCode;
use actix_web::rt::{System, SystemRunner};
use actix_web::web::Bytes;
use actix_web::{App, test as actix_test, web};
use backend::Trace;
use backend::domain::{LocationService, TRACE_ID_HEADER};
use backend::inbound::http::error::ErrorBody;
use backend::inbound::http::location_dto::LocationResponse;
use backend::inbound::http::locations::configure;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryLocationRepository;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    fn new() -> Self {
        Self {
            start: Utc
                .with_ymd_and_hms(2024, 7, 1, 10, 0, 0)
                .single()
                .expect("valid fixture timestamp"),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::minutes(tick)
    }
}

struct Captured {
    status: StatusCode,
    has_trace_id: bool,
    body: Bytes,
}

struct LocationsWorld {
    system: SystemRunner,
    state: web::Data<HttpState>,
    last: Option<Captured>,
    created: Option<LocationResponse>,
}

impl LocationsWorld {
    fn perform(&mut self, request: actix_test::TestRequest) {
        let state = self.state.clone();
        let captured = self.system.block_on(async move {
            let app = actix_test::init_service(
                App::new().app_data(state).wrap(Trace).configure(configure),
            )
            .await;
            let response = actix_test::call_service(&app, request.to_request()).await;
            let status = response.status();
            let has_trace_id = response.headers().contains_key(TRACE_ID_HEADER);
            let body = actix_test::read_body(response).await;
            Captured {
                status,
                has_trace_id,
                body,
            }
        });
        self.last = Some(captured);
    }

    fn last(&self) -> &Captured {
        self.last.as_ref().expect("a request was performed")
    }

    fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.last().body).expect("json body")
    }

    fn create(&mut self, payload: Value) {
        self.perform(
            actix_test::TestRequest::post()
                .uri("/api/locations")
                .set_json(payload),
        );
        if self.last().status == StatusCode::CREATED && self.created.is_none() {
            self.created = Some(self.json());
        }
    }

    fn list(&mut self, query: &str) {
        self.perform(actix_test::TestRequest::get().uri(&format!("/api/locations?{query}")));
    }
}

struct WorldFixture {
    world: RefCell<LocationsWorld>,
}

impl WorldFixture {
    fn world(&self) -> std::cell::RefMut<'_, LocationsWorld> {
        self.world.borrow_mut()
    }
}

#[fixture]
fn world() -> WorldFixture {
    let service = Arc::new(LocationService::new(
        Arc::new(InMemoryLocationRepository::new()),
        Arc::new(SteppingClock::new()),
    ));
    WorldFixture {
        world: RefCell::new(LocationsWorld {
            system: System::new(),
            state: web::Data::new(HttpState::new(service.clone(), service)),
            last: None,
            created: None,
        }),
    }
}

fn location_body(name: &str, city: &str) -> Value {
    json!({
        "name": name,
        "neighborhood": "Centre",
        "city": city,
        "state": "CA",
    })
}

#[given("a location named \"{name}\" exists")]
fn a_location_named_exists(world: &WorldFixture, name: String) {
    let mut world = world.world();
    world.create(location_body(&name, "San Francisco"));
    assert_eq!(world.last().status, StatusCode::CREATED);
}

#[when("the client creates a location named \"{name}\"")]
fn the_client_creates_a_location_named(world: &WorldFixture, name: String) {
    world.world().create(location_body(&name, "San Francisco"));
}

#[when("the client creates a location with a blank city")]
fn the_client_creates_a_location_with_a_blank_city(world: &WorldFixture) {
    world.world().create(location_body("Golden Gate Park", ""));
}

#[when("the client fetches location {id}")]
fn the_client_fetches_location(world: &WorldFixture, id: i64) {
    world
        .world()
        .perform(actix_test::TestRequest::get().uri(&format!("/api/locations/{id}")));
}

#[when("the client lists locations")]
fn the_client_lists_locations(world: &WorldFixture) {
    world.world().list("");
}

#[when("the client lists locations with \"{query}\"")]
fn the_client_lists_locations_with(world: &WorldFixture, query: String) {
    world.world().list(&query);
}

#[when("the client updates location {id} to \"{name}\" with a foreign id and creation time")]
fn the_client_updates_location_with_foreign_fields(world: &WorldFixture, id: i64, name: String) {
    world.world().perform(
        actix_test::TestRequest::put()
            .uri(&format!("/api/locations/{id}"))
            .set_json(json!({
                "id": 77,
                "name": name,
                "neighborhood": "Marina",
                "city": "San Francisco",
                "state": "California",
                "createdAt": "2000-01-01T00:00:00Z",
            })),
    );
}

#[when("the client updates location {id} to \"{name}\"")]
fn the_client_updates_location(world: &WorldFixture, id: i64, name: String) {
    world.world().perform(
        actix_test::TestRequest::put()
            .uri(&format!("/api/locations/{id}"))
            .set_json(location_body(&name, "San Francisco")),
    );
}

#[when("the client deletes location {id}")]
fn the_client_deletes_location(world: &WorldFixture, id: i64) {
    world
        .world()
        .perform(actix_test::TestRequest::delete().uri(&format!("/api/locations/{id}")));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &WorldFixture, status: u16) {
    assert_eq!(world.world().last().status.as_u16(), status);
}

#[then("the response carries a trace id header")]
fn the_response_carries_a_trace_id_header(world: &WorldFixture) {
    assert!(world.world().last().has_trace_id);
}

#[then("the created location was stamped once")]
fn the_created_location_was_stamped_once(world: &WorldFixture) {
    let world = world.world();
    let created = world.created.as_ref().expect("created location");
    assert_eq!(created.id, 1);
    assert_eq!(created.created_at, created.updated_at);
}

#[then("the fetched location equals the created one")]
fn the_fetched_location_equals_the_created_one(world: &WorldFixture) {
    let world = world.world();
    let fetched: LocationResponse = world.json();
    assert_eq!(Some(&fetched), world.created.as_ref());
}

#[then("the error message is \"{message}\"")]
fn the_error_message_is(world: &WorldFixture, message: String) {
    let error: ErrorBody = world.world().json();
    assert_eq!(error.message, message);
}

#[then("the error path is \"{path}\"")]
fn the_error_path_is(world: &WorldFixture, path: String) {
    let error: ErrorBody = world.world().json();
    assert_eq!(error.path, path);
}

#[then("the listing names are \"{names}\"")]
fn the_listing_names_are(world: &WorldFixture, names: String) {
    let page: Value = world.world().json();
    let actual: Vec<&str> = page["content"]
        .as_array()
        .expect("content array")
        .iter()
        .filter_map(|location| location["name"].as_str())
        .collect();
    let expected: Vec<&str> = names.split(", ").collect();
    assert_eq!(actual, expected);
}

#[then("the listing reports {total} elements over {pages} pages")]
fn the_listing_reports_elements_over_pages(world: &WorldFixture, total: u64, pages: u64) {
    let page: Value = world.world().json();
    assert_eq!(page["totalElements"], json!(total));
    assert_eq!(page["totalPages"], json!(pages));
    assert_eq!(page["empty"], json!(total == 0));
}

#[then("the listing page size is {size}")]
fn the_listing_page_size_is(world: &WorldFixture, size: u32) {
    let page: Value = world.world().json();
    assert_eq!(page["size"], json!(size));
}

#[then("the listing is sorted by \"{property}\" \"{direction}\"")]
fn the_listing_is_sorted_by(world: &WorldFixture, property: String, direction: String) {
    let page: Value = world.world().json();
    assert_eq!(
        page["sort"],
        json!([{ "property": property, "direction": direction }])
    );
}

#[then("the listing is the last page")]
fn the_listing_is_the_last_page(world: &WorldFixture) {
    let page: Value = world.world().json();
    assert_eq!(page["last"], json!(true));
}

#[then("the updated location kept its id and creation time")]
fn the_updated_location_kept_its_id_and_creation_time(world: &WorldFixture) {
    let world = world.world();
    let updated: LocationResponse = world.json();
    let created = world.created.as_ref().expect("created location");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[then("the updated location is named \"{name}\"")]
fn the_updated_location_is_named(world: &WorldFixture, name: String) {
    let updated: LocationResponse = world.world().json();
    assert_eq!(updated.name, name);
    assert_eq!(updated.neighborhood, "Marina");
    assert_eq!(updated.state, "California");
}

#[then("the response text is \"{text}\"")]
fn the_response_text_is(world: &WorldFixture, text: String) {
    assert_eq!(world.world().last().body.as_ref(), text.as_bytes());
}

#[scenario(
    path = "tests/features/locations_api.feature",
    name = "A created location can be fetched by id"
)]
fn a_created_location_can_be_fetched_by_id(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/locations_api.feature",
    name = "Blank fields are rejected and nothing is stored"
)]
fn blank_fields_are_rejected_and_nothing_is_stored(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/locations_api.feature",
    name = "Fetching a missing location reports not found"
)]
fn fetching_a_missing_location_reports_not_found(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/locations_api.feature",
    name = "Listing defaults to creation order"
)]
fn listing_defaults_to_creation_order(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/locations_api.feature",
    name = "Listing honours sort and paging"
)]
fn listing_honours_sort_and_paging(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/locations_api.feature",
    name = "Oversized pages are clamped"
)]
fn oversized_pages_are_clamped(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/locations_api.feature",
    name = "Invalid listing requests are rejected"
)]
fn invalid_listing_requests_are_rejected(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/locations_api.feature",
    name = "Updating preserves identity and creation time"
)]
fn updating_preserves_identity_and_creation_time(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/locations_api.feature",
    name = "Updating a missing location changes nothing"
)]
fn updating_a_missing_location_changes_nothing(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/locations_api.feature",
    name = "Deleting removes the location"
)]
fn deleting_removes_the_location(world: WorldFixture) {
    drop(world);
}
