use anyhow::anyhow;
use tracing::{info, instrument, warn};

use learnhub_auth::{TokenError, create_access_token, verify_token};
use learnhub_core::messages::{common, login, user};
use learnhub_core::{AppError, hash_password_with_cost, verify_password};
use learnhub_models::{AccessTokenResponse, NewUser, RoleName, SigninRequest, SignupRequest, User};

use crate::state::AppState;

pub struct AuthService;

impl AuthService {
    #[instrument(skip(state, dto), fields(user.login = %dto.login, user.role = %dto.role))]
    pub async fn signup(state: &AppState, dto: SignupRequest) -> Result<User, AppError> {
        let allowed = RoleName::signup_names();
        if !allowed.contains(&dto.role.as_str()) {
            return Err(AppError::bad_request(login::wrong_role(&allowed)));
        }

        let role = state
            .roles
            .find_by_name(&dto.role)
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?
            .ok_or_else(|| AppError::internal(anyhow!(common::NO_SUCH_ROLE)))?;

        let existing = state
            .users
            .find_by_login_or_email(&dto.login, &dto.email)
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?;

        if existing.is_some() {
            return Err(AppError::bad_request(login::USER_EXIST));
        }

        let password = hash_password_with_cost(&dto.password, state.password_config.bcrypt_cost)?;

        let created = state
            .users
            .create(NewUser {
                login: dto.login,
                email: dto.email,
                password,
                role: role.id,
                first_name: dto.first_name,
                last_name: dto.last_name,
            })
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    return AppError::bad_request(login::USER_EXIST);
                }
                AppError::unexpected(login::UNABLE_TO_CREATE_USER, e)
            })?;

        info!(user.id = created.id, "User signed up");
        Ok(User::from(created))
    }

    /// Reuses the stored token while it is still valid; otherwise issues a
    /// new one and stores it in place of the old row.
    #[instrument(skip(state, dto), fields(user.username = %dto.username))]
    pub async fn signin(
        state: &AppState,
        dto: SigninRequest,
    ) -> Result<AccessTokenResponse, AppError> {
        let found = state
            .users
            .find_by_login_or_email(&dto.username, &dto.username)
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?
            .ok_or_else(|| AppError::not_found(user::NO_USER))?;

        if !verify_password(&dto.password, &found.password)? {
            return Err(AppError::bad_request(login::WRONG_CREDENTIALS));
        }

        let stored = state
            .tokens
            .find_by_user(found.id)
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?;

        if let Some(stored) = stored {
            match verify_token(&stored.jwt, &state.jwt_config) {
                Ok(_) => {
                    return Ok(AccessTokenResponse {
                        access_token: stored.jwt,
                    });
                }
                Err(TokenError::Expired) => {
                    state
                        .tokens
                        .delete(stored.id)
                        .await
                        .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?;
                }
                Err(e) => {
                    warn!(user.id = found.id, error = %e, "Stored token is unusable, issuing a new one");
                }
            }
        }

        let jwt = create_access_token(found.id, &found.login, &found.role_name, &state.jwt_config)?;

        state
            .tokens
            .upsert(found.id, &jwt)
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?;

        info!(user.id = found.id, "Issued access token");
        Ok(AccessTokenResponse { access_token: jwt })
    }
}
