use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::ApiError;
use crate::application::ports::student_repository::StudentRow;
use crate::application::use_cases::students::delete_student::DeleteStudent;
use crate::application::use_cases::students::get_student::GetStudent;
use crate::application::use_cases::students::list_students::ListStudents;
use crate::application::use_cases::students::register_student::{
    RegisterStudent, RegisterStudentRequest as RegisterDto,
};
use crate::application::use_cases::students::update_student::{
    UpdateStudent, UpdateStudentRequest as UpdateDto,
};
use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterStudentRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_ids: Option<Vec<i64>>,
}

impl StudentResponse {
    fn from_row(row: StudentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            course_ids: None,
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

#[utoipa::path(post, path = "/api/student/register", tag = "Students", request_body = RegisterStudentRequest, responses(
    (status = 200, body = StudentResponse)
))]
pub async fn register(
    State(ctx): State<AppContext>,
    Json(req): Json<RegisterStudentRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    let students = ctx.student_repo();
    let uc = RegisterStudent {
        students: students.as_ref(),
    };
    let row = uc
        .execute(&RegisterDto {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;
    Ok(Json(StudentResponse::from_row(row)))
}

#[utoipa::path(get, path = "/api/student/{id}", tag = "Students", responses(
    (status = 200, body = StudentResponse),
    (status = 404)
))]
pub async fn get_by_id(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<StudentResponse>, ApiError> {
    let students = ctx.student_repo();
    let enrollments = ctx.enrollment_repo();
    let uc = GetStudent {
        students: students.as_ref(),
        enrollments: enrollments.as_ref(),
    };
    let (row, course_ids) = uc.execute(id).await?;
    let mut resp = StudentResponse::from_row(row);
    resp.course_ids = Some(course_ids);
    Ok(Json(resp))
}

#[utoipa::path(get, path = "/api/student/all", tag = "Students", responses(
    (status = 200, body = [StudentResponse])
))]
pub async fn list(State(ctx): State<AppContext>) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = ctx.student_repo();
    let uc = ListStudents {
        students: students.as_ref(),
    };
    let rows = uc.execute().await?;
    Ok(Json(rows.into_iter().map(StudentResponse::from_row).collect()))
}

#[utoipa::path(put, path = "/api/student/update/{id}", tag = "Students", request_body = UpdateStudentRequest, responses(
    (status = 200, body = StudentResponse),
    (status = 404)
))]
pub async fn update(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStudentRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    let students = ctx.student_repo();
    let uc = UpdateStudent {
        students: students.as_ref(),
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
    Ok(Json(StudentResponse::from_row(row)))
}

#[utoipa::path(delete, path = "/api/student/delete/{id}", tag = "Students", responses(
    (status = 204),
    (status = 404)
))]
pub async fn remove(State(ctx): State<AppContext>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let students = ctx.student_repo();
    let uc = DeleteStudent {
        students: students.as_ref(),
    };
    uc.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
