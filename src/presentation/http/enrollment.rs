use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{delete, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa::IntoParams;

use crate::application::error::ApiError;
use crate::application::use_cases::enrollment::drop_student::DropStudent;
use crate::application::use_cases::enrollment::enroll_student::EnrollStudent;
use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentParams {
    pub student_id: i64,
    pub course_id: i64,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/enroll", post(enroll))
        .route("/unenroll", delete(unenroll))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/course/enrollment/enroll", tag = "Enrollment", params(EnrollmentParams), responses(
    (status = 200),
    (status = 400),
    (status = 404)
))]
pub async fn enroll(
    State(ctx): State<AppContext>,
    Query(params): Query<EnrollmentParams>,
) -> Result<Json<Value>, ApiError> {
    let students = ctx.student_repo();
    let courses = ctx.course_repo();
    let enrollments = ctx.enrollment_repo();
    let uc = EnrollStudent {
        students: students.as_ref(),
        courses: courses.as_ref(),
        enrollments: enrollments.as_ref(),
    };
    if !uc.execute(params.student_id, params.course_id).await? {
        return Err(ApiError::InvalidState("Student is already enrolled.".into()));
    }
    Ok(Json(json!({ "message": "Student enrolled successfully." })))
}

#[utoipa::path(delete, path = "/api/course/enrollment/unenroll", tag = "Enrollment", params(EnrollmentParams), responses(
    (status = 200),
    (status = 400),
    (status = 404)
))]
pub async fn unenroll(
    State(ctx): State<AppContext>,
    Query(params): Query<EnrollmentParams>,
) -> Result<Json<Value>, ApiError> {
    let students = ctx.student_repo();
    let courses = ctx.course_repo();
    let enrollments = ctx.enrollment_repo();
    let uc = DropStudent {
        students: students.as_ref(),
        courses: courses.as_ref(),
        enrollments: enrollments.as_ref(),
    };
    if !uc.execute(params.student_id, params.course_id).await? {
        return Err(ApiError::InvalidState(
            "Student was not enrolled in this course.".into(),
        ));
    }
    Ok(Json(json!({ "message": "Student unenrolled successfully." })))
}
