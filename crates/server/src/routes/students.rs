use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use service::errors::ServiceError;
use service::student::StudentView;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

const NAME_MAX: usize = 200;
const EMAIL_MAX: usize = 320;
const ADDRESS_MAX: usize = 320;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateStudentInput {
    pub name: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateStudentInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

fn check_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() { return Err("name must not be empty".into()); }
    if name.len() > NAME_MAX { return Err(format!("name must be at most {} characters", NAME_MAX)); }
    Ok(())
}

fn check_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() { return Err("email must not be empty".into()); }
    if email.len() > EMAIL_MAX { return Err(format!("email must be at most {} characters", EMAIL_MAX)); }
    if !email.contains('@') { return Err("email must be a valid address".into()); }
    Ok(())
}

fn check_address(address: &str) -> Result<(), String> {
    if address.trim().is_empty() { return Err("address must not be empty".into()); }
    if address.len() > ADDRESS_MAX { return Err(format!("address must be at most {} characters", ADDRESS_MAX)); }
    Ok(())
}

impl CreateStudentInput {
    fn validate(&self) -> Result<(), String> {
        check_name(&self.name)?;
        check_email(&self.email)?;
        check_address(&self.address)?;
        Ok(())
    }
}

impl UpdateStudentInput {
    fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name { check_name(name)?; }
        if let Some(email) = &self.email { check_email(email)?; }
        if let Some(address) = &self.address { check_address(address)?; }
        Ok(())
    }
}

fn map_service_error(e: ServiceError) -> JsonApiError {
    match &e {
        ServiceError::Validation(msg) => {
            JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg.clone()))
        }
        ServiceError::Model(models::errors::ModelError::Validation(msg)) => {
            JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg.clone()))
        }
        ServiceError::NotFound(_) => {
            JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string()))
        }
        ServiceError::Upstream(_) => {
            JsonApiError::new(StatusCode::BAD_GATEWAY, "Upstream Error", Some(e.to_string()))
        }
        _ => JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string())),
    }
}

#[utoipa::path(
    get, path = "/students", tag = "students",
    responses(
        (status = 200, description = "All students with addresses"),
        (status = 502, description = "Address service failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<StudentView>>, JsonApiError> {
    state.students.list().await.map(Json).map_err(map_service_error)
}

#[utoipa::path(
    post, path = "/students", tag = "students",
    request_body = crate::openapi::CreateStudentInputDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 502, description = "Address service failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateStudentInput>,
) -> Result<Json<StudentView>, JsonApiError> {
    input
        .validate()
        .map_err(|msg| JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg)))?;
    state
        .students
        .create(&input.name, &input.email, &input.address)
        .await
        .map(Json)
        .map_err(map_service_error)
}

#[utoipa::path(
    put, path = "/students/{id}", tag = "students",
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = crate::openapi::UpdateStudentInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 502, description = "Address service failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateStudentInput>,
) -> Result<Json<StudentView>, JsonApiError> {
    input
        .validate()
        .map_err(|msg| JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg)))?;
    state
        .students
        .update(id, input.name.as_deref(), input.email.as_deref(), input.address.as_deref())
        .await
        .map(Json)
        .map_err(map_service_error)
}

#[utoipa::path(
    delete, path = "/students/{id}", tag = "students",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 502, description = "Address service failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    state
        .students
        .remove(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(map_service_error)
}
