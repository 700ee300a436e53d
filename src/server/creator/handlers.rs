use uuid::Uuid;
use crate::server::responses::{ ApiResponse, STATUS_CREATED, STATUS_OK };
use super::repository::CreatorRepository;
use super::service::CreatorService;
use super::types::Creator;

// Catalogue results mapped onto response envelopes. Domain failures become
// failure envelopes; only transport problems surface as `ServerFnError`.

pub fn list<R: CreatorRepository>(service: &CreatorService<R>) -> ApiResponse<Vec<Creator>> {
    ApiResponse::success(STATUS_OK, service.get_all())
}

pub fn get<R: CreatorRepository>(service: &CreatorService<R>, id: Uuid) -> ApiResponse<Creator> {
    service.get_one(id).into()
}

pub fn add<R: CreatorRepository>(service: &mut CreatorService<R>, name: &str) -> ApiResponse<Creator> {
    match service.add_creator(name) {
        Ok(creator) => ApiResponse::success(STATUS_CREATED, creator),
        Err(e) => ApiResponse::failure(&e),
    }
}

pub fn update<R: CreatorRepository>(
    service: &mut CreatorService<R>,
    id: Uuid,
    name: &str
) -> ApiResponse<Creator> {
    service.update_creator(id, name).into()
}

pub fn delete<R: CreatorRepository>(service: &mut CreatorService<R>, id: Uuid) -> ApiResponse<()> {
    match service.delete_creator(id) {
        Ok(()) => ApiResponse::empty(STATUS_OK),
        Err(e) => ApiResponse::failure(&e),
    }
}
