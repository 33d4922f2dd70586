use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization tier attached to a Cinescope principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[Role::User, Role::Admin, Role::SuperAdmin]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
            Role::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Postgres array literal as stored in `users.roles`
    pub fn as_db_literal(roles: &[Role]) -> String {
        let joined: Vec<&str> = roles.iter().map(Role::as_str).collect();
        format!("{{{}}}", joined.join(","))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            "SUPER_ADMIN" => Ok(Role::SuperAdmin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}
