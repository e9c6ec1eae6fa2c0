use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct StudentViewDoc {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub address: String,
}

#[derive(ToSchema)]
pub struct CreateStudentInputDoc {
    pub name: String,
    pub email: String,
    pub address: String,
}

#[derive(ToSchema)]
pub struct UpdateStudentInputDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::list,
        crate::routes::students::create,
        crate::routes::students::update,
        crate::routes::students::delete,
    ),
    components(
        schemas(
            HealthResponse,
            StudentViewDoc,
            CreateStudentInputDoc,
            UpdateStudentInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "students")
    )
)]
pub struct ApiDoc;
