use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::ApiError;
use crate::application::ports::instructor_repository::InstructorRow;
use crate::application::use_cases::instructors::delete_instructor::DeleteInstructor;
use crate::application::use_cases::instructors::get_instructor::GetInstructor;
use crate::application::use_cases::instructors::list_instructors::ListInstructors;
use crate::application::use_cases::instructors::register_instructor::{
    RegisterInstructor, RegisterInstructorRequest as RegisterDto,
};
use crate::application::use_cases::instructors::update_instructor::{
    UpdateInstructor, UpdateInstructorRequest as UpdateDto,
};
use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterInstructorRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateInstructorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<InstructorRow> for InstructorResponse {
    fn from(row: InstructorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/all", get(list))
        .route("/:id", get(get_by_id))
        .route("/update/:id", put(update))
        .route("/delete/:id", delete(remove))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/instructor/register", tag = "Instructors", request_body = RegisterInstructorRequest, responses(
    (status = 200, body = InstructorResponse)
))]
pub async fn register(
    State(ctx): State<AppContext>,
    Json(req): Json<RegisterInstructorRequest>,
) -> Result<Json<InstructorResponse>, ApiError> {
    let instructors = ctx.instructor_repo();
    let uc = RegisterInstructor {
        instructors: instructors.as_ref(),
    };
    let row = uc
        .execute(&RegisterDto {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;
    Ok(Json(row.into()))
}

#[utoipa::path(get, path = "/api/instructor/{id}", tag = "Instructors", responses(
    (status = 200, body = InstructorResponse),
    (status = 404)
))]
pub async fn get_by_id(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<InstructorResponse>, ApiError> {
    let instructors = ctx.instructor_repo();
    let uc = GetInstructor {
        instructors: instructors.as_ref(),
    };
    let row = uc.execute(id).await?;
    Ok(Json(row.into()))
}

#[utoipa::path(get, path = "/api/instructor/all", tag = "Instructors", responses(
    (status = 200, body = [InstructorResponse])
))]
pub async fn list(State(ctx): State<AppContext>) -> Result<Json<Vec<InstructorResponse>>, ApiError> {
    let instructors = ctx.instructor_repo();
    let uc = ListInstructors {
        instructors: instructors.as_ref(),
    };
    let rows = uc.execute().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(put, path = "/api/instructor/update/{id}", tag = "Instructors", request_body = UpdateInstructorRequest, responses(
    (status = 200, body = InstructorResponse),
    (status = 404)
))]
pub async fn update(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateInstructorRequest>,
) -> Result<Json<InstructorResponse>, ApiError> {
    let instructors = ctx.instructor_repo();
    let uc = UpdateInstructor {
        instructors: instructors.as_ref(),
    };
    let row = uc
        .execute(
            id,
            &UpdateDto {
                name: req.name,
                email: req.email,
                password: req.password,
            },
        )
        .await?;
    Ok(Json(row.into()))
}

#[utoipa::path(delete, path = "/api/instructor/delete/{id}", tag = "Instructors", responses(
    (status = 204),
    (status = 404)
))]
pub async fn remove(State(ctx): State<AppContext>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let instructors = ctx.instructor_repo();
    let uc = DeleteInstructor {
        instructors: instructors.as_ref(),
    };
    uc.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
