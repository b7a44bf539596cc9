//! Auth endpoints.
//!
//! Demo-grade by contract: plaintext credential compare against the
//! in-memory directory, and a session route that falls back to a fixed
//! mock user when no issued token is presented.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::directory::{self, NewAccount, SessionUser};
use crate::models::{AccountKind, BloodType, PublicUser};

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

// ═══════════════════════════════════════════════════════════
// Login
// ═══════════════════════════════════════════════════════════

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "userType")]
    pub user_type: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: PublicUser,
    pub token: String,
}

/// `POST /api/auth/login` — authenticate and issue a bearer token.
pub async fn login(
    State(ctx): State<ApiContext>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = req.email.as_deref().map(str::trim).unwrap_or("");
    let password = req.password.as_deref().unwrap_or("");
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest("Email and password are required".into()));
    }
    let user_type = req.user_type.unwrap_or_default();

    let (user, token) = ctx
        .core
        .write_directory()?
        .login(email, password, &user_type)?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful",
        user,
        token,
    }))
}

// ═══════════════════════════════════════════════════════════
// Register
// ═══════════════════════════════════════════════════════════

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "bloodType")]
    pub blood_type: Option<String>,
    pub location: Option<String>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: PublicUser,
}

/// `POST /api/auth/register` — create a donor or hospital account.
pub async fn register(
    State(ctx): State<ApiContext>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let email = req.email.as_deref().map(str::trim).unwrap_or("");
    let password = req.password.as_deref().unwrap_or("");
    let name = req.name.as_deref().map(str::trim).unwrap_or("");
    let kind_raw = req.kind.as_deref().unwrap_or("");
    if email.is_empty() || password.is_empty() || name.is_empty() || kind_raw.is_empty() {
        return Err(ApiError::BadRequest("Missing required fields".into()));
    }

    let kind: AccountKind = kind_raw
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid user type".into()))?;

    let blood_type: Option<BloodType> = match req.blood_type.as_deref() {
        Some(raw) => Some(
            raw.parse()
                .map_err(|_| ApiError::BadRequest(format!("Invalid blood type: {raw}")))?,
        ),
        None => None,
    };

    let user = ctx.core.write_directory()?.register(NewAccount {
        email: email.to_string(),
        password: password.to_string(),
        name: name.to_string(),
        kind,
        blood_type,
        location: req.location,
    })?;

    tracing::info!(kind = %user.kind, "account registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "Registration successful",
            user,
        }),
    ))
}

// ═══════════════════════════════════════════════════════════
// Session / logout
// ═══════════════════════════════════════════════════════════

#[derive(Serialize)]
pub struct SessionResponse {
    pub user: SessionUser,
}

/// `GET /api/auth/session` — the user behind the presented token, or
/// the fixed demo user when none matches.
pub async fn session(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, ApiError> {
    let user = bearer_token(&headers)
        .and_then(|token| {
            ctx.core
                .read_directory()
                .ok()
                .and_then(|dir| dir.session_user(token))
        })
        .map(SessionUser::from_public)
        .unwrap_or_else(directory::demo_session_user);

    Ok(Json(SessionResponse { user }))
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// `POST /api/auth/logout` — forget the presented token. Succeeds
/// whether or not the token was known.
pub async fn logout(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, ApiError> {
    if let Some(token) = bearer_token(&headers) {
        ctx.core.write_directory()?.logout(token);
    }
    Ok(Json(LogoutResponse { success: true }))
}
