/// Database row types — these map directly to SQLite rows.
/// Distinct from admatch-types API models to keep the DB layer independent.

pub struct UserRow {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub created_at: String,
}

pub struct TagRow {
    pub id: String,
    pub name: String,
}

pub struct BusinessRow {
    pub id: String,
    pub owner_id: String,
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
    pub created_at: String,
}

pub struct AdspaceTypeRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

pub struct AdspaceRow {
    pub id: String,
    pub business_id: String,
    pub type_id: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: String,
    pub max_width: f64,
    pub max_height: f64,
    pub is_barter_available: bool,
    pub price_per_week: Option<f64>,
    pub in_use: bool,
    pub created_at: String,
}

pub struct ChatRow {
    pub id: String,
    pub created_at: String,
}

pub struct MessageRow {
    pub id: String,
    pub chat_id: String,
    pub sender_id: String,
    pub content: String,
    pub is_read: bool,
    pub created_at: String,
}

/// Result of a right-swipe that found its target: the chat that was
/// created and the name of the matched business.
pub struct MatchRow {
    pub chat_id: String,
    pub business_name: String,
}
