use serde::{Deserialize, Serialize};

/// Access tier carried by a role. Ordering matters: gating is done by
/// comparison (`access >= Manager`), never by string matching.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLevel {
    #[default]
    User,
    Manager,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: i64,
    pub name: String,
}

/// A role as seen by the session probe: enough to build navigation
/// (`name` + `path`) and to derive the access tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleInfo {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub access: AccessLevel,
}

/// Session context returned by the login probe. `businesses` and `roles`
/// are only ever non-empty alongside a `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user_id: i64,
    #[serde(default)]
    pub businesses: Vec<Business>,
    #[serde(default)]
    pub roles: Vec<RoleInfo>,
}

impl SessionInfo {
    /// ADMIN/MANAGER vs USER gating: elevated when any role carries an
    /// elevated access value.
    pub fn is_elevated(&self) -> bool {
        self.roles.iter().any(|r| r.access >= AccessLevel::Manager)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Self-service signup payload. A successful registration signs the new
/// member in, so the response mirrors `login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_level_deserializes_from_wire_names() {
        let role: RoleInfo =
            serde_json::from_str(r#"{"name":"hr","path":"hr","access":"MANAGER"}"#).unwrap();
        assert_eq!(role.access, AccessLevel::Manager);
        assert_eq!(role.id, 0);
    }

    #[test]
    fn access_defaults_to_user() {
        // The probe may omit access entirely (scenario: roles [{name, path}]).
        let role: RoleInfo = serde_json::from_str(r#"{"name":"test","path":"test"}"#).unwrap();
        assert_eq!(role.access, AccessLevel::User);
    }

    #[test]
    fn register_payload_carries_all_credentials() {
        let value = serde_json::to_value(RegisterRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
        })
        .unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["password"], "secret");
    }

    #[test]
    fn elevation_requires_manager_or_above() {
        let mut info: SessionInfo = serde_json::from_str(
            r#"{"user_id":7,"roles":[{"name":"a","path":"a","access":"USER"}]}"#,
        )
        .unwrap();
        assert!(!info.is_elevated());
        info.roles.push(RoleInfo {
            id: 2,
            name: "ops".into(),
            path: "ops".into(),
            access: AccessLevel::Admin,
        });
        assert!(info.is_elevated());
    }
}
