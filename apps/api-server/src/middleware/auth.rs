//! Session authentication extractor and cookie helpers.

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;
use uuid::Uuid;

use pixgram_core::domain::{Account, Session};
use pixgram_core::ports::AuthError;

use crate::middleware::error::AppError;
use crate::state::{AppState, Settings};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "sessionid";

/// The account behind the request's session cookie.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(user: CurrentUser) -> impl Responder {
///     format!("Hello, {}!", user.account.username)
/// }
/// ```
/// Missing, unknown and expired sessions, as well as disabled accounts, are
/// rejected with 403.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub account: Account,
    pub session_id: String,
}

impl CurrentUser {
    pub fn id(&self) -> Uuid {
        self.account.id
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                AppError::Internal("AppState not found in app data".to_string())
            })?;
            let token = token.ok_or(AuthError::MissingSession)?;

            let user = resolve(&state, &token).await?;
            user.ok_or(AppError::from(AuthError::MissingSession))
        })
    }
}

async fn resolve(state: &AppState, token: &str) -> Result<Option<CurrentUser>, AppError> {
    let Some(session) = state.sessions.load(token).await? else {
        tracing::debug!("Session cookie did not match a live session");
        return Ok(None);
    };

    let account: Option<Account> = state.accounts.find_by_id(session.account_id).await?;
    Ok(account
        .filter(|account| account.is_active)
        .map(|account| CurrentUser {
            account,
            session_id: session.id,
        }))
}

/// Cookie handed out on login.
pub fn session_cookie(session: &Session, settings: &Settings) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, session.id.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(settings.cookie_secure)
        .max_age(Duration::seconds(settings.session_ttl.num_seconds()))
        .finish()
}

/// Cookie that makes the client forget its session.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}
