//! Route handlers.
//!
//! Each handler resolves its inputs through the service, lets the core
//! compute, and serializes the result. Missing users become 404s here.

use axum::{
    extract::{Path, State},
    Json,
};
use fundraise_core::{
    leaderboard, LeaderboardEntry, LeaderboardSummary, TierId, UnlockedReward, User, UserId,
};
use tracing::{debug, warn};

use super::dto::{
    HealthResponse, LoginRequest, LoginResponse, ProgressView, RewardSummaryResponse,
    StatsResponse,
};
use super::error::{ApiError, ApiResult};
use super::AppState;

fn user_not_found(id: UserId) -> ApiError {
    ApiError::NotFound(format!("user {id}"))
}

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/auth/login
///
/// Mock login: the email alone selects the user.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(ApiError::BadRequest("email is required".to_string()));
    }

    let user = state
        .service
        .login(email)
        .ok_or_else(|| ApiError::NotFound(format!("no user with email {email}")))?;
    debug!(user = %user.id, "login");

    Ok(Json(LoginResponse {
        success: true,
        user: user.clone(),
    }))
}

/// GET /api/user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<User>> {
    let id = UserId(id);
    let user = state.service.user(id).ok_or_else(|| user_not_found(id))?;
    Ok(Json(user.clone()))
}

/// GET /api/leaderboard
pub async fn get_leaderboard(State(state): State<AppState>) -> Json<Vec<LeaderboardEntry>> {
    let entries = state.service.leaderboard();
    for entry in leaderboard::diverged(&entries) {
        warn!(
            user = %entry.user.id,
            stored_rank = entry.stored_rank,
            computed_rank = entry.rank,
            "stored rank disagrees with donation order"
        );
    }
    Json(entries)
}

/// GET /api/leaderboard/summary
pub async fn get_leaderboard_summary(State(state): State<AppState>) -> Json<LeaderboardSummary> {
    Json(state.service.leaderboard_summary())
}

/// GET /api/rewards/{user_id}
pub async fn get_rewards(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Vec<UnlockedReward>>> {
    let id = UserId(id);
    state
        .service
        .rewards(id)
        .map(Json)
        .ok_or_else(|| user_not_found(id))
}

/// GET /api/rewards/{user_id}/summary
pub async fn get_reward_summary(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<RewardSummaryResponse>> {
    let id = UserId(id);
    state
        .service
        .reward_summary(id)
        .map(|summary| Json(summary.into()))
        .ok_or_else(|| user_not_found(id))
}

/// GET /api/rewards/{user_id}/progress/{tier_id}
pub async fn get_tier_progress(
    State(state): State<AppState>,
    Path((user_id, tier_id)): Path<(u64, u64)>,
) -> ApiResult<Json<ProgressView>> {
    let (user_id, tier_id) = (UserId(user_id), TierId(tier_id));
    if state.service.user(user_id).is_none() {
        return Err(user_not_found(user_id));
    }
    state
        .service
        .tier_progress(user_id, tier_id)
        .map(|progress| Json(progress.into()))
        .ok_or_else(|| ApiError::NotFound(format!("reward tier {tier_id}")))
}

/// GET /api/stats/{user_id}
pub async fn get_stats(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<StatsResponse>> {
    let id = UserId(id);
    state
        .service
        .stats(id)
        .map(|stats| Json(stats.into()))
        .ok_or_else(|| user_not_found(id))
}
