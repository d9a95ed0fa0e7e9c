/// A role is a plain permission tag granted to an authenticated identity.
/// It is compared against the static table in `application::access`; there is
/// no authority hierarchy between roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Instructor,
    Student,
}

impl Role {
    pub fn from_name(name: &str) -> Option<Role> {
        match name {
            "ADMIN" => Some(Role::Admin),
            "INSTRUCTOR" => Some(Role::Instructor),
            "STUDENT" => Some(Role::Student),
            _ => None,
        }
    }

    pub fn as_name(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Instructor => "INSTRUCTOR",
            Role::Student => "STUDENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip() {
        for role in [Role::Admin, Role::Instructor, Role::Student] {
            assert_eq!(Role::from_name(role.as_name()), Some(role));
        }
        assert_eq!(Role::from_name("TEACHER"), None);
        assert_eq!(Role::from_name("admin"), None);
    }
}
