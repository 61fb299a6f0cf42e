use std::collections::HashMap;

use async_trait::async_trait;
use learnhub_models::{Permission, Role, RoleWithPermissions};
use sqlx::{FromRow, PgPool};

use crate::error::DbError;

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DbError>;

    async fn list_with_permissions(&self) -> Result<Vec<RoleWithPermissions>, DbError>;
}

#[derive(FromRow)]
struct RolePermissionRow {
    role_id: i32,
    id: i32,
    permission: String,
}

#[derive(Clone)]
pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DbError> {
        let role = sqlx::query_as::<_, Role>("SELECT id, role FROM roles WHERE role = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(role)
    }

    async fn list_with_permissions(&self) -> Result<Vec<RoleWithPermissions>, DbError> {
        let roles = sqlx::query_as::<_, Role>("SELECT id, role FROM roles ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, RolePermissionRow>(
            r#"SELECT rp.role_id, p.id, p.permission
               FROM role_permissions rp
               JOIN permissions p ON p.id = rp.permission_id
               ORDER BY p.id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_role: HashMap<i32, Vec<Permission>> = HashMap::new();
        for row in rows {
            by_role.entry(row.role_id).or_default().push(Permission {
                id: row.id,
                permission: row.permission,
            });
        }

        Ok(roles
            .into_iter()
            .map(|role| RoleWithPermissions {
                permissions: by_role.remove(&role.id).unwrap_or_default(),
                role,
            })
            .collect())
    }
}
