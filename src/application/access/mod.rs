use crate::domain::roles::Role;

/// Authenticated identity resolved from the request. Always passed
/// explicitly; there is no ambient auth context.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: i64,
    pub roles: Vec<Role>,
}

impl Identity {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Requirement {
    /// No identity needed.
    Public,
    /// Any authenticated identity.
    Authenticated,
    /// One of the listed roles.
    AnyOf(&'static [Role]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RequireLogin,
    Forbid,
}

// Longest prefix first: /course/enrollment must win over /course.
// Exam and grade routes fall through to the Authenticated default.
const RULES: &[(&str, Requirement)] = &[
    ("/api/auth", Requirement::Public),
    ("/api/health", Requirement::Public),
    ("/api/docs", Requirement::Public),
    ("/api/openapi.json", Requirement::Public),
    (
        "/api/course/enrollment",
        Requirement::AnyOf(&[Role::Student, Role::Admin]),
    ),
    (
        "/api/student",
        Requirement::AnyOf(&[Role::Student, Role::Admin]),
    ),
    (
        "/api/instructor",
        Requirement::AnyOf(&[Role::Instructor, Role::Admin]),
    ),
    (
        "/api/course",
        Requirement::AnyOf(&[Role::Instructor, Role::Admin]),
    ),
];

pub fn requirement_for(path: &str) -> Requirement {
    for (prefix, req) in RULES {
        let matches = path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'));
        if matches {
            return *req;
        }
    }
    Requirement::Authenticated
}

pub fn authorize(identity: Option<&Identity>, path: &str) -> Decision {
    match requirement_for(path) {
        Requirement::Public => Decision::Allow,
        Requirement::Authenticated => match identity {
            Some(_) => Decision::Allow,
            None => Decision::RequireLogin,
        },
        Requirement::AnyOf(allowed) => match identity {
            None => Decision::RequireLogin,
            Some(id) => {
                if allowed.iter().any(|r| id.has_role(*r)) {
                    Decision::Allow
                } else {
                    Decision::Forbid
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(roles: &[Role]) -> Identity {
        Identity {
            user_id: 1,
            roles: roles.to_vec(),
        }
    }

    #[test]
    fn auth_routes_are_public() {
        assert_eq!(authorize(None, "/api/auth/login"), Decision::Allow);
        assert_eq!(authorize(None, "/api/auth/register"), Decision::Allow);
        assert_eq!(authorize(None, "/api/health"), Decision::Allow);
    }

    #[test]
    fn unauthenticated_non_public_is_rejected() {
        assert_eq!(authorize(None, "/api/student/1"), Decision::RequireLogin);
        assert_eq!(authorize(None, "/api/grade/assign"), Decision::RequireLogin);
        assert_eq!(authorize(None, "/api/exam/create"), Decision::RequireLogin);
    }

    #[test]
    fn student_routes_require_student_or_admin() {
        let path = "/api/student/update/3";
        assert_eq!(authorize(Some(&ident(&[Role::Student])), path), Decision::Allow);
        assert_eq!(authorize(Some(&ident(&[Role::Admin])), path), Decision::Allow);
        assert_eq!(
            authorize(Some(&ident(&[Role::Instructor])), path),
            Decision::Forbid
        );
    }

    #[test]
    fn course_routes_allow_instructors() {
        let path = "/api/course/add";
        assert_eq!(
            authorize(Some(&ident(&[Role::Instructor])), path),
            Decision::Allow
        );
        assert_eq!(authorize(Some(&ident(&[Role::Admin])), path), Decision::Allow);
        assert_eq!(
            authorize(Some(&ident(&[Role::Student])), path),
            Decision::Forbid
        );
    }

    #[test]
    fn enrollment_prefix_wins_over_course() {
        let path = "/api/course/enrollment/enroll";
        assert_eq!(
            authorize(Some(&ident(&[Role::Student])), path),
            Decision::Allow
        );
        assert_eq!(
            authorize(Some(&ident(&[Role::Instructor])), path),
            Decision::Forbid
        );
    }

    #[test]
    fn exam_and_grade_routes_accept_any_authenticated_role() {
        for path in ["/api/exam/instructor/1", "/api/grade/student/1"] {
            assert_eq!(
                authorize(Some(&ident(&[Role::Student])), path),
                Decision::Allow
            );
            assert_eq!(
                authorize(Some(&ident(&[Role::Instructor])), path),
                Decision::Allow
            );
        }
    }

    #[test]
    fn prefix_match_requires_segment_boundary() {
        // /api/students is not /api/student
        assert_eq!(authorize(None, "/api/students"), Decision::RequireLogin);
    }
}
