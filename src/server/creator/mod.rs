pub mod handlers;
mod repository;
mod service;
mod types;

use dioxus::prelude::*;
use uuid::Uuid;
use crate::server::responses::ApiResponse;

pub use repository::{ CreatorRepository, InMemoryCreatorRepository };
pub use service::CreatorService;
pub use types::Creator;

#[cfg(feature = "server")]
use std::sync::{ Mutex, MutexGuard };
#[cfg(feature = "server")]
use crate::configs::AppConfig;
#[cfg(feature = "server")]
use crate::error::CreatorError;

#[cfg(feature = "server")]
lazy_static::lazy_static! {
    static ref CATALOGUE: Mutex<CreatorService<InMemoryCreatorRepository>> = Mutex::new(
        CreatorService::with_seed(InMemoryCreatorRepository::default(), &AppConfig::from_env().creator_seed)
    );
}

#[cfg(feature = "server")]
fn catalogue() -> Result<MutexGuard<'static, CreatorService<InMemoryCreatorRepository>>, CreatorError> {
    Ok(CATALOGUE.lock()?)
}

#[server(ListCreators)]
pub async fn list_creators() -> Result<ApiResponse<Vec<Creator>>, ServerFnError> {
    let service = catalogue()?;
    Ok(handlers::list(&*service))
}

#[server(GetCreator)]
pub async fn get_creator(id: Uuid) -> Result<ApiResponse<Creator>, ServerFnError> {
    let service = catalogue()?;
    Ok(handlers::get(&*service, id))
}

#[server(AddCreator)]
pub async fn add_creator(name: String) -> Result<ApiResponse<Creator>, ServerFnError> {
    let mut service = catalogue()?;
    Ok(handlers::add(&mut *service, &name))
}

#[server(UpdateCreator)]
pub async fn update_creator(id: Uuid, name: String) -> Result<ApiResponse<Creator>, ServerFnError> {
    let mut service = catalogue()?;
    Ok(handlers::update(&mut *service, id, &name))
}

#[server(DeleteCreator)]
pub async fn delete_creator(id: Uuid) -> Result<ApiResponse<()>, ServerFnError> {
    let mut service = catalogue()?;
    Ok(handlers::delete(&mut *service, id))
}
