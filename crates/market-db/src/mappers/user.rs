//! User entity <-> model mapper

use market_core::entities::{User, UserRole};

use crate::models::UserModel;

/// Convert a stored role string to the role enum. The column carries a CHECK
/// constraint, so anything unexpected is treated as a plain user.
pub fn parse_user_role(role: &str) -> UserRole {
    match role {
        "admin" => UserRole::Admin,
        _ => UserRole::User,
    }
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            role: parse_user_role(&model.role),
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_role() {
        assert_eq!(parse_user_role("admin"), UserRole::Admin);
        assert_eq!(parse_user_role("user"), UserRole::User);
        assert_eq!(parse_user_role("garbage"), UserRole::User);
    }
}
