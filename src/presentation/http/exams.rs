use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::ApiError;
use crate::application::ports::exam_repository::ExamRow;
use crate::application::use_cases::exams::assign_students::AssignStudentsToExam;
use crate::application::use_cases::exams::create_exam::{CreateExam, CreateExamRequest as CreateDto};
use crate::application::use_cases::exams::delete_exam::DeleteExam;
use crate::application::use_cases::exams::list_by_instructor::ListExamsByInstructor;
use crate::application::use_cases::exams::list_by_student::ListExamsByStudent;
use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateExamRequest {
    pub name: String,
    pub instructor_id: i64,
    pub course_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExamResponse {
    pub id: i64,
    pub name: String,
    pub instructor_id: i64,
    pub course_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_ids: Option<Vec<i64>>,
}

impl ExamResponse {
    fn from_row(row: ExamRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            instructor_id: row.instructor_id,
            course_id: row.course_id,
            student_ids: None,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/create", post(create))
        .route("/assign/:exam_id", post(assign_students))
        .route("/instructor/:id", get(list_by_instructor))
        .route("/student/:id", get(list_by_student))
        .route("/delete/:id", delete(remove))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/exam/create", tag = "Exams", request_body = CreateExamRequest, responses(
    (status = 200, body = ExamResponse),
    (status = 404)
))]
pub async fn create(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateExamRequest>,
) -> Result<Json<ExamResponse>, ApiError> {
    let exams = ctx.exam_repo();
    let instructors = ctx.instructor_repo();
    let courses = ctx.course_repo();
    let uc = CreateExam {
        exams: exams.as_ref(),
        instructors: instructors.as_ref(),
        courses: courses.as_ref(),
    };
    let row = uc
        .execute(&CreateDto {
            name: req.name,
            instructor_id: req.instructor_id,
            course_id: req.course_id,
        })
        .await?;
    Ok(Json(ExamResponse::from_row(row)))
}

// The body is a bare JSON array of student ids, e.g. [1, 2, 3].
#[utoipa::path(post, path = "/api/exam/assign/{exam_id}", tag = "Exams", request_body = Vec<i64>, responses(
    (status = 200, body = ExamResponse),
    (status = 404)
))]
pub async fn assign_students(
    State(ctx): State<AppContext>,
    Path(exam_id): Path<i64>,
    Json(student_ids): Json<Vec<i64>>,
) -> Result<Json<ExamResponse>, ApiError> {
    let exams = ctx.exam_repo();
    let uc = AssignStudentsToExam {
        exams: exams.as_ref(),
    };
    let (row, student_ids) = uc.execute(exam_id, &student_ids).await?;
    let mut resp = ExamResponse::from_row(row);
    resp.student_ids = Some(student_ids);
    Ok(Json(resp))
}

#[utoipa::path(get, path = "/api/exam/instructor/{id}", tag = "Exams", responses(
    (status = 200, body = [ExamResponse])
))]
pub async fn list_by_instructor(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ExamResponse>>, ApiError> {
    let exams = ctx.exam_repo();
    let uc = ListExamsByInstructor {
        exams: exams.as_ref(),
    };
    let rows = uc.execute(id).await?;
    Ok(Json(rows.into_iter().map(ExamResponse::from_row).collect()))
}

#[utoipa::path(get, path = "/api/exam/student/{id}", tag = "Exams", responses(
    (status = 200, body = [ExamResponse])
))]
pub async fn list_by_student(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ExamResponse>>, ApiError> {
    let exams = ctx.exam_repo();
    let uc = ListExamsByStudent {
        exams: exams.as_ref(),
    };
    let rows = uc.execute(id).await?;
    Ok(Json(rows.into_iter().map(ExamResponse::from_row).collect()))
}

#[utoipa::path(delete, path = "/api/exam/delete/{id}", tag = "Exams", responses(
    (status = 204),
    (status = 404)
))]
pub async fn remove(State(ctx): State<AppContext>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let exams = ctx.exam_repo();
    let uc = DeleteExam {
        exams: exams.as_ref(),
    };
    uc.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::ServiceExt;

    use super::*;
    use crate::application::ports::exam_repository::ExamRepository;
    use crate::application::use_cases::testsupport::{
        MemCourses, MemEnrollments, MemExams, MemGrades, MemInstructors, MemRoles, MemStudents,
        MemUsers,
    };
    use crate::bootstrap::app_context::AppServices;
    use crate::bootstrap::config::Config;

    fn test_ctx() -> (AppContext, Arc<MemExams>) {
        let cfg = Config {
            api_port: 0,
            frontend_url: None,
            database_url: String::new(),
            jwt_secret: "test-secret".into(),
            jwt_expires_secs: 3600,
            is_production: false,
        };
        let enrollments = MemEnrollments::default();
        let grades = MemGrades::sharing(enrollments.links());
        let exams = Arc::new(MemExams::with(&[(100, 1, 10)]));
        let services = AppServices::new(
            Arc::new(MemUsers::default()),
            Arc::new(MemRoles::standard()),
            Arc::new(MemStudents::with_ids(&[1, 2, 3])),
            Arc::new(MemInstructors::with_ids(&[1])),
            Arc::new(MemCourses::with(&[(10, 1)])),
            Arc::new(enrollments),
            exams.clone(),
            Arc::new(grades),
        );
        (AppContext::new(cfg, services), exams)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn exam_creation_is_mounted_at_create() {
        let (ctx, _) = test_ctx();
        let body = r#"{"name":"Midterm","instructor_id":1,"course_id":10}"#;

        let resp = routes(ctx.clone())
            .oneshot(post_json("/create", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = routes(ctx).oneshot(post_json("/add", body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn assign_accepts_a_bare_array_of_student_ids() {
        let (ctx, exams) = test_ctx();

        let resp = routes(ctx)
            .oneshot(post_json("/assign/100", "[1, 2]"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(exams.students_for_exam(100).await.unwrap(), vec![1, 2]);
    }
}
