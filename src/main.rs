use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use lms_api::bootstrap::app_context::{AppContext, AppServices};
use lms_api::bootstrap::config::Config;
use lms_api::infrastructure::db::repositories::course_repository_sqlx::SqlxCourseRepository;
use lms_api::infrastructure::db::repositories::enrollment_repository_sqlx::SqlxEnrollmentRepository;
use lms_api::infrastructure::db::repositories::exam_repository_sqlx::SqlxExamRepository;
use lms_api::infrastructure::db::repositories::grade_repository_sqlx::SqlxGradeRepository;
use lms_api::infrastructure::db::repositories::instructor_repository_sqlx::SqlxInstructorRepository;
use lms_api::infrastructure::db::repositories::role_repository_sqlx::SqlxRoleRepository;
use lms_api::infrastructure::db::repositories::student_repository_sqlx::SqlxStudentRepository;
use lms_api::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        lms_api::presentation::http::auth::register,
        lms_api::presentation::http::auth::login,
        lms_api::presentation::http::auth::logout,
        lms_api::presentation::http::auth::me,
        lms_api::presentation::http::students::register,
        lms_api::presentation::http::students::get_by_id,
        lms_api::presentation::http::students::list,
        lms_api::presentation::http::students::update,
        lms_api::presentation::http::students::remove,
        lms_api::presentation::http::instructors::register,
        lms_api::presentation::http::instructors::get_by_id,
        lms_api::presentation::http::instructors::list,
        lms_api::presentation::http::instructors::update,
        lms_api::presentation::http::instructors::remove,
        lms_api::presentation::http::courses::add,
        lms_api::presentation::http::courses::get_by_id,
        lms_api::presentation::http::courses::list,
        lms_api::presentation::http::courses::update,
        lms_api::presentation::http::courses::remove,
        lms_api::presentation::http::enrollment::enroll,
        lms_api::presentation::http::enrollment::unenroll,
        lms_api::presentation::http::exams::create,
        lms_api::presentation::http::exams::assign_students,
        lms_api::presentation::http::exams::list_by_instructor,
        lms_api::presentation::http::exams::list_by_student,
        lms_api::presentation::http::exams::remove,
        lms_api::presentation::http::grades::assign,
        lms_api::presentation::http::grades::list_by_student,
        lms_api::presentation::http::grades::list_by_course,
        lms_api::presentation::http::health::health,
    ),
    components(schemas(
        lms_api::presentation::http::auth::RegisterRequest,
        lms_api::presentation::http::auth::LoginRequest,
        lms_api::presentation::http::auth::LoginResponse,
        lms_api::presentation::http::auth::UserResponse,
        lms_api::presentation::http::students::RegisterStudentRequest,
        lms_api::presentation::http::students::UpdateStudentRequest,
        lms_api::presentation::http::students::StudentResponse,
        lms_api::presentation::http::instructors::RegisterInstructorRequest,
        lms_api::presentation::http::instructors::UpdateInstructorRequest,
        lms_api::presentation::http::instructors::InstructorResponse,
        lms_api::presentation::http::courses::AddCourseRequest,
        lms_api::presentation::http::courses::UpdateCourseRequest,
        lms_api::presentation::http::courses::CourseResponse,
        lms_api::presentation::http::exams::CreateExamRequest,
        lms_api::presentation::http::exams::ExamResponse,
        lms_api::presentation::http::grades::AssignGradeRequest,
        lms_api::presentation::http::grades::GradeResponse,
        lms_api::presentation::http::health::HealthResp,
    )),
    tags(
        (name = "Auth", description = "Authentication"),
        (name = "Students", description = "Student accounts"),
        (name = "Instructors", description = "Instructor accounts"),
        (name = "Courses", description = "Course catalog"),
        (name = "Enrollment", description = "Course enrollment"),
        (name = "Exams", description = "Exams and assignments"),
        (name = "Grades", description = "Grade records"),
        (name = "Health", description = "System health checks")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "lms_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting LMS backend");

    // Database
    let pool = lms_api::infrastructure::db::connect_pool(&cfg.database_url).await?;
    lms_api::infrastructure::db::migrate(&pool).await?;

    let services = AppServices::new(
        Arc::new(SqlxUserRepository::new(pool.clone())),
        Arc::new(SqlxRoleRepository::new(pool.clone())),
        Arc::new(SqlxStudentRepository::new(pool.clone())),
        Arc::new(SqlxInstructorRepository::new(pool.clone())),
        Arc::new(SqlxCourseRepository::new(pool.clone())),
        Arc::new(SqlxEnrollmentRepository::new(pool.clone())),
        Arc::new(SqlxExamRepository::new(pool.clone())),
        Arc::new(SqlxGradeRepository::new(pool.clone())),
    );
    let ctx = AppContext::new(cfg.clone(), services);

    // Build CORS
    let cors = build_cors(&cfg);

    let api_router = Router::new()
        .nest("/api", lms_api::presentation::http::health::routes(pool.clone()))
        .nest(
            "/api/auth",
            lms_api::presentation::http::auth::routes(ctx.clone()),
        )
        .nest(
            "/api/student",
            lms_api::presentation::http::students::routes(ctx.clone()),
        )
        .nest(
            "/api/instructor",
            lms_api::presentation::http::instructors::routes(ctx.clone()),
        )
        .nest(
            "/api/course/enrollment",
            lms_api::presentation::http::enrollment::routes(ctx.clone()),
        )
        .nest(
            "/api/course",
            lms_api::presentation::http::courses::routes(ctx.clone()),
        )
        .nest(
            "/api/exam",
            lms_api::presentation::http::exams::routes(ctx.clone()),
        )
        .nest(
            "/api/grade",
            lms_api::presentation::http::grades::routes(ctx.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(axum::middleware::from_fn_with_state(
            ctx.clone(),
            lms_api::presentation::http::guard::require_access,
        ))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, api_router).await?;
    Ok(())
}

fn build_cors(cfg: &Config) -> CorsLayer {
    let methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::PATCH,
        http::Method::OPTIONS,
    ];
    let headers = [http::header::CONTENT_TYPE, http::header::AUTHORIZATION];
    if let Some(origin) = cfg.frontend_url.clone() {
        match HeaderValue::from_str(&origin) {
            Ok(v) => CorsLayer::new()
                .allow_origin(v)
                .allow_methods(methods)
                .allow_headers(headers)
                .allow_credentials(true),
            Err(_) => CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods(methods)
                .allow_headers(headers)
                .allow_credentials(true),
        }
    } else if cfg.is_production {
        // FRONTEND_URL is mandatory in production (enforced earlier); deny all as a fallback
        CorsLayer::new()
            .allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
            .allow_methods(methods)
            .allow_headers(headers)
    } else {
        // Development convenience
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(true)
    }
}
