use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use tracing::{error, warn};
use uuid::Uuid;

use admatch_db::Database;
use admatch_db::models::{AdspaceRow, AdspaceTypeRow, BusinessRow, MessageRow, TagRow, UserRow};
use admatch_types::api::{
    AdspaceResponse, AdspaceTypeResponse, BusinessResponse, ChatResponse, MessageResponse,
    TagResponse, UserResponse,
};

/// Row ids are uuids stored as TEXT; a row that fails to parse is corrupt,
/// not a caller error — log and degrade instead of failing the request.
pub fn parse_id(raw: &str, context: &str) -> Uuid {
    raw.parse().unwrap_or_else(|e| {
        warn!("Corrupt {} id '{}': {}", context, raw, e);
        Uuid::default()
    })
}

pub fn parse_timestamp(raw: &str, context: &str) -> DateTime<Utc> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            // SQLite stores timestamps as "YYYY-MM-DD HH:MM:SS" without timezone.
            // Parse as naive UTC and convert.
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt {} timestamp '{}': {}", context, raw, e);
            DateTime::default()
        })
}

pub fn user_response(row: UserRow) -> UserResponse {
    UserResponse {
        id: parse_id(&row.id, "user"),
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
    }
}

pub fn tag_response(row: TagRow) -> TagResponse {
    TagResponse {
        id: parse_id(&row.id, "tag"),
        name: row.name,
    }
}

pub fn adspace_type_response(row: AdspaceTypeRow) -> AdspaceTypeResponse {
    AdspaceTypeResponse {
        id: parse_id(&row.id, "adspace type"),
        name: row.name,
        description: row.description,
    }
}

pub fn message_response(row: MessageRow) -> MessageResponse {
    let created_at = parse_timestamp(&row.created_at, "message");
    MessageResponse {
        id: parse_id(&row.id, "message"),
        chat_id: parse_id(&row.chat_id, "chat"),
        sender_id: parse_id(&row.sender_id, "sender"),
        content: row.content,
        is_read: row.is_read,
        created_at,
    }
}

/// Resolve the adspace's type row; a dangling type id means corrupt data.
pub fn adspace_with_type(db: &Database, row: AdspaceRow) -> Result<AdspaceResponse, StatusCode> {
    let kind = db
        .get_adspace_type(&row.type_id)
        .map_err(|e| {
            error!("Adspace type lookup failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or_else(|| {
            error!("Adspace {} references missing type {}", row.id, row.type_id);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let created_at = parse_timestamp(&row.created_at, "adspace");
    Ok(AdspaceResponse {
        id: parse_id(&row.id, "adspace"),
        business_id: parse_id(&row.business_id, "business"),
        name: row.name,
        description: row.description,
        kind: adspace_type_response(kind),
        max_width: row.max_width,
        max_height: row.max_height,
        image_url: row.image_url,
        is_barter_available: row.is_barter_available,
        price_per_week: row.price_per_week,
        in_use: row.in_use,
        created_at,
    })
}

/// Business together with its tags and adspaces, as shown on a swipe card
/// or in the public listing.
pub fn business_with_relations(
    db: &Database,
    row: BusinessRow,
) -> Result<BusinessResponse, StatusCode> {
    let tags = db
        .tags_for_business(&row.id)
        .map_err(|e| {
            error!("Tag lookup failed for business {}: {}", row.id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .into_iter()
        .map(tag_response)
        .collect();

    let adspaces = db
        .adspaces_for_business(&row.id)
        .map_err(|e| {
            error!("Adspace lookup failed for business {}: {}", row.id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .into_iter()
        .map(|adspace| adspace_with_type(db, adspace))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BusinessResponse {
        id: parse_id(&row.id, "business"),
        name: row.name,
        description: row.description,
        address: row.address,
        nip: row.nip,
        pkd: row.pkd,
        website: row.website,
        image_url: row.image_url,
        logo_url: row.logo_url,
        latitude: row.latitude,
        longitude: row.longitude,
        tags,
        adspaces,
    })
}

/// Chat with participants and connected adspaces. A chat always has exactly
/// two participants; anything else is corrupt data and fails the request.
pub fn chat_with_relations(db: &Database, chat_id: &str) -> Result<ChatResponse, StatusCode> {
    let participants = db.chat_participants(chat_id).map_err(|e| {
        error!("Participant lookup failed for chat {}: {}", chat_id, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    if participants.len() != 2 {
        error!(
            "Chat {} has {} participants, expected exactly two",
            chat_id,
            participants.len()
        );
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let connected_adspaces = db
        .chat_adspaces(chat_id)
        .map_err(|e| {
            error!("Adspace lookup failed for chat {}: {}", chat_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .into_iter()
        .map(|adspace| adspace_with_type(db, adspace))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ChatResponse {
        id: parse_id(chat_id, "chat"),
        participants: participants.into_iter().map(user_response).collect(),
        connected_adspaces,
    })
}
