//! Administrator accounts. Admins cannot sign up through the API.

use anyhow::{Context, bail};
use learnhub_core::hash_password_with_cost;
use learnhub_db::{PgRoleRepository, PgUserRepository, RoleRepository, UserRepository};
use learnhub_models::{NewUser, RoleName, UserRecord};
use sqlx::PgPool;

pub struct AdminInput {
    pub login: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub async fn create_admin(
    pool: &PgPool,
    input: AdminInput,
    bcrypt_cost: u32,
) -> anyhow::Result<UserRecord> {
    let roles = PgRoleRepository::new(pool.clone());
    let users = PgUserRepository::new(pool.clone());

    let role = roles
        .find_by_name(RoleName::Admin.as_str())
        .await?
        .context("admin role is missing, run `migrate` first")?;

    if users
        .find_by_login_or_email(&input.login, &input.email)
        .await?
        .is_some()
    {
        bail!("User with this login or email already exists");
    }

    let password = hash_password_with_cost(&input.password, bcrypt_cost)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e.error))?;

    let created = users
        .create(NewUser {
            login: input.login,
            email: input.email,
            password,
            role: role.id,
            first_name: input.first_name,
            last_name: input.last_name,
        })
        .await?;

    Ok(created)
}
