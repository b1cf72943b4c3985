// ============================================================================
// Console Core - Session & Authorization Context
// File: crates/console-core/src/domain/session.rs
// Description: Persisted sign-in record and the codes derived from it
// ============================================================================

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use console_shared::constants::OWNER_ROLE_CODE;
use console_shared::EntityId;

/// Role attached to the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: EntityId,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleRef>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Signed-in state persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, user: SessionUser) -> Self {
        Self { token, user, created_at: Utc::now() }
    }

    pub fn auth_context(&self) -> AuthContext {
        AuthContext::from_user(&self.user)
    }
}

/// Codes the navigation filter checks against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub permission_codes: BTreeSet<String>,
    pub role_codes: BTreeSet<String>,
    pub is_owner_role: bool,
}

impl AuthContext {
    pub fn new<P, R>(permissions: P, roles: R) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let role_codes: BTreeSet<String> = roles.into_iter().map(Into::into).collect();
        Self {
            permission_codes: permissions.into_iter().map(Into::into).collect(),
            is_owner_role: role_codes.contains(OWNER_ROLE_CODE),
            role_codes,
        }
    }

    pub fn from_user(user: &SessionUser) -> Self {
        let mut permissions: Vec<String> = user.permissions.clone();
        let mut roles = Vec::new();
        if let Some(role) = &user.role {
            permissions.extend(role.permissions.iter().cloned());
            roles.push(role.code.clone());
        }
        Self::new(permissions, roles)
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn holds_role(&self, role: &str) -> bool {
        self.role_codes.contains(role) || (role == OWNER_ROLE_CODE && self.is_owner_role)
    }

    /// True when any of `codes` is a held permission or role code.
    pub fn grants_any(&self, codes: &[String]) -> bool {
        codes
            .iter()
            .any(|c| self.permission_codes.contains(c) || self.role_codes.contains(c))
    }

    pub fn with_permission(mut self, code: &str) -> Self {
        self.permission_codes.insert(code.to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Creates a client together with its owner account.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OnboardRequest {
    #[validate(length(min = 2, max = 100, message = "Company name must be between 2 and 100 characters"))]
    pub company_name: String,

    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(code: &str, role_perms: &[&str], perms: &[&str]) -> SessionUser {
        SessionUser {
            id: "u1".into(),
            email: "owner@example.com".into(),
            name: "Owner".into(),
            client_id: Some("c1".into()),
            role: Some(RoleRef {
                code: code.into(),
                name: code.into(),
                permissions: role_perms.iter().map(|p| p.to_string()).collect(),
            }),
            permissions: perms.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_context_merges_role_and_user_permissions() {
        let ctx = AuthContext::from_user(&user_with_role("OWNER", &["assets.read"], &["roles.read"]));
        assert!(ctx.is_owner_role);
        assert!(ctx.holds_role("OWNER"));
        assert!(ctx.permission_codes.contains("assets.read"));
        assert!(ctx.permission_codes.contains("roles.read"));
        assert!(ctx.grants_any(&["OWNER".to_string()]));
        assert!(!ctx.grants_any(&["SUPERADMIN".to_string()]));
    }

    #[test]
    fn test_session_deserializes_without_optional_fields() {
        let raw = r#"{
            "token": "t",
            "user": { "id": "u1", "email": "a@b.co" },
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.auth_context(), AuthContext::anonymous());
    }

    #[test]
    fn test_login_request_validation() {
        let bad = LoginRequest { email: "nope".into(), password: String::new() };
        assert!(bad.validate().is_err());
        let good = LoginRequest { email: "a@b.co".into(), password: "x".into() };
        assert!(good.validate().is_ok());
    }
}
