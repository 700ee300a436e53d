use uuid::Uuid;
use crate::error::CreatorError;
use crate::server::creator::{ handlers, Creator, CreatorService };
use crate::server::responses::ApiResponse;
use super::common;
use super::common::mocks::RecordingRepository;

fn service() -> CreatorService<RecordingRepository> {
    CreatorService::new(RecordingRepository::default())
}

fn service_calls(service: &CreatorService<RecordingRepository>, call: &str) -> usize {
    service.repository().times(call)
}

/// Serializes an envelope and reads it back the way the client does.
fn over_the_wire<T>(response: &ApiResponse<T>) -> ApiResponse<T>
    where T: serde::Serialize + serde::de::DeserializeOwned
{
    let value = serde_json::to_value(response).unwrap();
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_get_all_reads_repository_once() {
    common::setup();
    let service = service();

    assert!(service.get_all().is_empty());
    assert_eq!(service_calls(&service, "find_all"), 1);
}

#[test]
fn test_delete_missing_never_deletes() {
    common::setup();
    let mut service = service();
    let id = Uuid::new_v4();

    assert_eq!(service.delete_creator(id), Err(CreatorError::NotFound(id)));
    assert_eq!(service_calls(&service, "find_by_id"), 1);
    assert_eq!(service_calls(&service, "delete"), 0);
}

#[test]
fn test_update_missing_never_saves() {
    common::setup();
    let mut service = service();

    assert!(service.update_creator(Uuid::new_v4(), "Reaper").is_err());
    assert_eq!(service_calls(&service, "save"), 0);
}

#[test]
fn test_add_responds_created() {
    common::setup();
    let mut service = service();

    let response = handlers::add(&mut service, "Test Creator Name 01");
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(value["data"]["name"], "Test Creator Name 01");
    assert!(value.get("error").is_none());
    assert_eq!(service_calls(&service, "save"), 1);
}

#[test]
fn test_creator_envelope_survives_the_wire() {
    common::setup();
    let mut service = service();

    let added = handlers::add(&mut service, "Reaper");
    let decoded: ApiResponse<Creator> = over_the_wire(&added);
    assert_eq!(decoded, added);

    let creator = decoded.into_result().unwrap().unwrap();
    assert_eq!(creator.name, "Reaper");

    let listed: ApiResponse<Vec<Creator>> = over_the_wire(&handlers::list(&service));
    assert_eq!(listed.status, 200);
    assert_eq!(listed.data, Some(vec![creator]));
}

#[test]
fn test_failure_envelope_survives_the_wire() {
    common::setup();
    let service = service();
    let id = Uuid::new_v4();

    let decoded: ApiResponse<Creator> = over_the_wire(&handlers::get(&service, id));

    assert_eq!(decoded.status, 404);
    assert!(decoded.data.is_none());
    let error = decoded.into_result().unwrap_err();
    assert_eq!(error.message, "Resource not found");
    assert_eq!(error.details, format!("Resource with the id '{}' could not be found", id));
}

#[test]
fn test_rejected_names_become_failure_envelopes() {
    common::setup();
    let mut service = service();
    let existing = handlers::add(&mut service, "Reaper").data.unwrap();

    assert_eq!(handlers::add(&mut service, "   ").status, 400);
    assert_eq!(handlers::add(&mut service, "Reaper").status, 409);
    assert_eq!(handlers::update(&mut service, Uuid::new_v4(), "Wyrd").status, 404);

    let renamed = handlers::update(&mut service, existing.id, "Reaper Miniatures");
    assert_eq!(renamed.status, 200);
    assert_eq!(renamed.data.map(|c| c.name).as_deref(), Some("Reaper Miniatures"));
}

#[test]
fn test_delete_responds_without_data() {
    common::setup();
    let mut service = service();
    let creator = handlers::add(&mut service, "Reaper").data.unwrap();

    let deleted = handlers::delete(&mut service, creator.id);
    assert_eq!(serde_json::to_value(&deleted).unwrap(), serde_json::json!({ "status": 200 }));
    assert_eq!(over_the_wire(&deleted), ApiResponse::<()>::empty(200));

    let again = handlers::delete(&mut service, creator.id);
    assert_eq!(again.status, 404);
    assert!(again.error.is_some());
}
