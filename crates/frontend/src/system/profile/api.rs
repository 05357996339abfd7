use contracts::system::users::UserProfile;

use crate::shared::api_utils::{get_json, ApiError};

pub const PROFILE: &str = "/api/profile";

/// Профиль текущего пользователя со статистикой
pub async fn fetch_profile() -> Result<UserProfile, ApiError> {
    get_json(PROFILE).await
}
