//! Registration, login and logout.

use actix_web::{HttpRequest, HttpResponse, web};
use chrono::Utc;

use pixgram_core::domain::{Account, Registration, Session};
use pixgram_core::error::RepoError;
use pixgram_core::ports::AuthError;
use pixgram_core::validation::{FieldErrors, require_non_blank};
use pixgram_shared::dto::{AuthSuccess, LoginRequest, MessageResponse, RegisterRequest};

use crate::middleware::auth::{SESSION_COOKIE, removal_cookie, session_cookie};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let registration = Registration {
        username: req.username.trim().to_string(),
        email: req.email.trim().to_string(),
        password: req.password,
        password_confirm: req.password_confirm,
        first_name: req.first_name.trim().to_string(),
        last_name: req.last_name.trim().to_string(),
    };

    let mut errors = registration.validate();
    if !errors.contains("username")
        && state
            .accounts
            .find_by_username(&registration.username)
            .await?
            .is_some()
    {
        errors.add("username", "A user with that username already exists.");
    }
    if !errors.contains("email")
        && state
            .accounts
            .find_by_email(&registration.email)
            .await?
            .is_some()
    {
        errors.add("email", "A user with that email already exists.");
    }
    if !errors.is_empty() {
        return Err(AppError::RegistrationFailed(errors));
    }

    let password_hash = state.passwords.hash(&registration.password)?;
    let account = Account::new(registration.username, registration.email, password_hash)
        .with_names(registration.first_name, registration.last_name);

    // Lost a race with a concurrent registration of the same name or email.
    let account = match state.accounts.insert(account).await {
        Ok(account) => account,
        Err(RepoError::Constraint(_)) => {
            return Err(AppError::RegistrationFailed(FieldErrors::general(
                "A user with that username or email already exists.",
            )));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(account_id = %account.id, "Account registered");

    Ok(HttpResponse::Created().json(AuthSuccess {
        message: "User registered successfully".to_string(),
        user_id: account.id,
        username: account.username,
    }))
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut errors = FieldErrors::new();
    require_non_blank(&mut errors, "username", &req.username);
    require_non_blank(&mut errors, "password", &req.password);
    if !errors.is_empty() {
        return Err(AppError::LoginFailed(errors));
    }

    // Unknown usernames and wrong passwords are indistinguishable.
    let account = state
        .accounts
        .find_by_username(req.username.trim())
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !state.passwords.verify(&req.password, &account.password_hash)? {
        tracing::debug!(account_id = %account.id, "Password mismatch");
        return Err(AuthError::InvalidCredentials.into());
    }
    if !account.is_active {
        return Err(AuthError::Inactive.into());
    }

    state.accounts.touch_last_login(account.id, Utc::now()).await?;
    let session = state
        .sessions
        .create(Session::start(account.id, state.settings.session_ttl))
        .await?;

    tracing::info!(account_id = %account.id, "Login successful");

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&session, &state.settings))
        .json(AuthSuccess {
            message: "Login successful".to_string(),
            user_id: account.id,
            username: account.username,
        }))
}

/// POST /logout. Always succeeds and always clears the cookie.
pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if let Err(e) = state.sessions.delete(cookie.value()).await {
            tracing::warn!(error = %e, "Failed to delete session on logout");
        }
    }

    HttpResponse::Ok()
        .cookie(removal_cookie())
        .json(MessageResponse::new("Logout successful"))
}
