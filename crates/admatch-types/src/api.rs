use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// -- JWT Claims --

/// JWT claims shared between the auth endpoints (token issuance) and the
/// request middleware (token validation). Canonical definition lives here
/// in admatch-types to eliminate duplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: usize,
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: Uuid,
    pub email: String,
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// -- Users --

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

// -- Tags --

#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: Uuid,
    pub name: String,
}

// -- Businesses --

#[derive(Debug, Serialize)]
pub struct BusinessResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub address: String,
    pub nip: String,
    pub pkd: String,
    pub website: Option<String>,
    pub image_url: Option<String>,
    pub logo_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub tags: Vec<TagResponse>,
    pub adspaces: Vec<AdspaceResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateBusinessRequest {
    pub name: String,
    pub description: String,
    pub address: String,
    pub nip: String,
    pub pkd: String,
    pub tags: Vec<Uuid>,
    pub latitude: f64,
    pub longitude: f64,
    pub website: Option<String>,
}

// -- Adspaces --

#[derive(Debug, Clone, Serialize)]
pub struct AdspaceTypeResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdspaceResponse {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: AdspaceTypeResponse,
    pub max_width: f64,
    pub max_height: f64,
    pub image_url: String,
    pub is_barter_available: bool,
    pub price_per_week: Option<f64>,
    pub in_use: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateAdspaceRequest {
    pub name: String,
    pub description: Option<String>,
    pub type_id: Uuid,
    pub max_width: f64,
    pub max_height: f64,
    pub is_barter_available: bool,
    pub price_per_week: Option<f64>,
}

// -- Matching --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwipeRequest {
    pub target_business_id: Uuid,
    pub direction: SwipeDirection,
}

#[derive(Debug, Serialize)]
pub struct SwipeResponse {
    pub matched: bool,
    pub chat_id: Option<Uuid>,
    pub matched_business_name: Option<String>,
}

// -- Chats --

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub id: Uuid,
    pub participants: Vec<UserResponse>,
    pub connected_adspaces: Vec<AdspaceResponse>,
}

#[derive(Debug, Serialize)]
pub struct ChatDetailResponse {
    pub id: Uuid,
    pub participants: Vec<UserResponse>,
    pub connected_adspaces: Vec<AdspaceResponse>,
    pub messages: Vec<MessageResponse>,
}

// -- Messages --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
