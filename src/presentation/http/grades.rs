use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::ApiError;
use crate::application::ports::grade_repository::GradeRow;
use crate::application::use_cases::grades::assign_grade::{
    AssignGrade, AssignGradeRequest as AssignDto,
};
use crate::application::use_cases::grades::list_by_course::ListGradesByCourse;
use crate::application::use_cases::grades::list_by_student::ListGradesByStudent;
use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignGradeRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub exam_id: i64,
    pub grade: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GradeResponse {
    pub id: i64,
    pub grade: String,
    pub student_id: i64,
    pub course_id: i64,
    pub exam_id: i64,
}

impl From<GradeRow> for GradeResponse {
    fn from(row: GradeRow) -> Self {
        Self {
            id: row.id,
            grade: row.grade,
            student_id: row.student_id,
            course_id: row.course_id,
            exam_id: row.exam_id,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/assign", post(assign))
        .route("/student/:id", get(list_by_student))
        .route("/course/:id", get(list_by_course))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/grade/assign", tag = "Grades", request_body = AssignGradeRequest, responses(
    (status = 200, body = GradeResponse),
    (status = 400),
    (status = 404)
))]
pub async fn assign(
    State(ctx): State<AppContext>,
    Json(req): Json<AssignGradeRequest>,
) -> Result<Json<GradeResponse>, ApiError> {
    let students = ctx.student_repo();
    let courses = ctx.course_repo();
    let exams = ctx.exam_repo();
    let grades = ctx.grade_repo();
    let uc = AssignGrade {
        students: students.as_ref(),
        courses: courses.as_ref(),
        exams: exams.as_ref(),
        grades: grades.as_ref(),
    };
    let row = uc
        .execute(&AssignDto {
            student_id: req.student_id,
            course_id: req.course_id,
            exam_id: req.exam_id,
            grade: req.grade,
        })
        .await?;
    Ok(Json(row.into()))
}

/// 204 with no body when the student has no grades yet.
#[utoipa::path(get, path = "/api/grade/student/{id}", tag = "Grades", responses(
    (status = 200, body = [GradeResponse]),
    (status = 204)
))]
pub async fn list_by_student(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let grades = ctx.grade_repo();
    let uc = ListGradesByStudent {
        grades: grades.as_ref(),
    };
    let rows = uc.execute(id).await?;
    if rows.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    let body: Vec<GradeResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(body).into_response())
}

#[utoipa::path(get, path = "/api/grade/course/{id}", tag = "Grades", responses(
    (status = 200, body = [GradeResponse])
))]
pub async fn list_by_course(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<GradeResponse>>, ApiError> {
    let grades = ctx.grade_repo();
    let uc = ListGradesByCourse {
        grades: grades.as_ref(),
    };
    let rows = uc.execute(id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
