use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::error::ApiError;
use crate::application::ports::course_repository::CourseRow;
use crate::application::use_cases::courses::add_course::{AddCourse, AddCourseRequest as AddDto};
use crate::application::use_cases::courses::delete_course::DeleteCourse;
use crate::application::use_cases::courses::get_course::GetCourse;
use crate::application::use_cases::courses::list_courses::ListCourses;
use crate::application::use_cases::courses::update_course::{
    UpdateCourse, UpdateCourseRequest as UpdateDto,
};
use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCourseRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AddCourseParams {
    pub instructor_id: i64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor_id: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub instructor_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_ids: Option<Vec<i64>>,
}

impl CourseResponse {
    fn from_row(row: CourseRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            instructor_id: row.instructor_id,
            student_ids: None,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/add", post(add))
        .route("/all", get(list))
        .route("/:id", get(get_by_id))
        .route("/update/:id", put(update))
        .route("/delete/:id", delete(remove))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/course/add", tag = "Courses", params(AddCourseParams), request_body = AddCourseRequest, responses(
    (status = 200, body = CourseResponse),
    (status = 404)
))]
pub async fn add(
    State(ctx): State<AppContext>,
    Query(params): Query<AddCourseParams>,
    Json(req): Json<AddCourseRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let courses = ctx.course_repo();
    let instructors = ctx.instructor_repo();
    let uc = AddCourse {
        courses: courses.as_ref(),
        instructors: instructors.as_ref(),
    };
    let row = uc
        .execute(
            &AddDto {
                title: req.title,
                description: req.description,
            },
            params.instructor_id,
        )
        .await?;
    Ok(Json(CourseResponse::from_row(row)))
}

#[utoipa::path(get, path = "/api/course/{id}", tag = "Courses", responses(
    (status = 200, body = CourseResponse),
    (status = 404)
))]
pub async fn get_by_id(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<CourseResponse>, ApiError> {
    let courses = ctx.course_repo();
    let enrollments = ctx.enrollment_repo();
    let uc = GetCourse {
        courses: courses.as_ref(),
        enrollments: enrollments.as_ref(),
    };
    let (row, student_ids) = uc.execute(id).await?;
    let mut resp = CourseResponse::from_row(row);
    resp.student_ids = Some(student_ids);
    Ok(Json(resp))
}

#[utoipa::path(get, path = "/api/course/all", tag = "Courses", responses(
    (status = 200, body = [CourseResponse])
))]
pub async fn list(State(ctx): State<AppContext>) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = ctx.course_repo();
    let uc = ListCourses {
        courses: courses.as_ref(),
    };
    let rows = uc.execute().await?;
    Ok(Json(rows.into_iter().map(CourseResponse::from_row).collect()))
}

#[utoipa::path(put, path = "/api/course/update/{id}", tag = "Courses", request_body = UpdateCourseRequest, responses(
    (status = 200, body = CourseResponse),
    (status = 404)
))]
pub async fn update(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCourseRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let courses = ctx.course_repo();
    let instructors = ctx.instructor_repo();
    let uc = UpdateCourse {
        courses: courses.as_ref(),
        instructors: instructors.as_ref(),
    };
    let row = uc
        .execute(
            id,
            &UpdateDto {
                title: req.title,
                description: req.description,
                instructor_id: req.instructor_id,
            },
        )
        .await?;
    Ok(Json(CourseResponse::from_row(row)))
}

#[utoipa::path(delete, path = "/api/course/delete/{id}", tag = "Courses", responses(
    (status = 204),
    (status = 404)
))]
pub async fn remove(State(ctx): State<AppContext>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let courses = ctx.course_repo();
    let uc = DeleteCourse {
        courses: courses.as_ref(),
    };
    uc.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
