use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          TEXT PRIMARY KEY,
            email       TEXT NOT NULL UNIQUE,
            first_name  TEXT NOT NULL,
            last_name   TEXT NOT NULL,
            password    TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS tags (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS businesses (
            id          TEXT PRIMARY KEY,
            owner_id    TEXT NOT NULL REFERENCES users(id),
            name        TEXT NOT NULL,
            description TEXT NOT NULL,
            address     TEXT NOT NULL,
            nip         TEXT NOT NULL,
            pkd         TEXT NOT NULL,
            website     TEXT,
            image_url   TEXT,
            logo_url    TEXT,
            latitude    REAL NOT NULL,
            longitude   REAL NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_businesses_owner
            ON businesses(owner_id);

        CREATE TABLE IF NOT EXISTS business_tags (
            business_id TEXT NOT NULL REFERENCES businesses(id),
            tag_id      TEXT NOT NULL REFERENCES tags(id),
            PRIMARY KEY (business_id, tag_id)
        );

        CREATE TABLE IF NOT EXISTS adspace_types (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL UNIQUE,
            description TEXT
        );

        CREATE TABLE IF NOT EXISTS adspaces (
            id                  TEXT PRIMARY KEY,
            business_id         TEXT NOT NULL REFERENCES businesses(id),
            type_id             TEXT NOT NULL REFERENCES adspace_types(id),
            name                TEXT NOT NULL,
            description         TEXT,
            image_url           TEXT NOT NULL,
            max_width           REAL NOT NULL,
            max_height          REAL NOT NULL,
            is_barter_available INTEGER NOT NULL DEFAULT 0,
            price_per_week      REAL,
            in_use              INTEGER NOT NULL DEFAULT 0,
            created_at          TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_adspaces_business
            ON adspaces(business_id);

        -- Append-only swipe log. Deliberately no uniqueness constraint on
        -- (swiper_id, target_business_id): repeated swipes are recorded as-is.
        CREATE TABLE IF NOT EXISTS swipes (
            id                  TEXT PRIMARY KEY,
            swiper_id           TEXT NOT NULL REFERENCES users(id),
            target_business_id  TEXT NOT NULL REFERENCES businesses(id),
            direction           TEXT NOT NULL CHECK (direction IN ('left', 'right')),
            created_at          TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_swipes_swiper
            ON swipes(swiper_id);

        CREATE TABLE IF NOT EXISTS chats (
            id          TEXT PRIMARY KEY,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS chat_participants (
            chat_id     TEXT NOT NULL REFERENCES chats(id),
            user_id     TEXT NOT NULL REFERENCES users(id),
            PRIMARY KEY (chat_id, user_id)
        );

        CREATE TABLE IF NOT EXISTS chat_adspaces (
            chat_id     TEXT NOT NULL REFERENCES chats(id),
            adspace_id  TEXT NOT NULL REFERENCES adspaces(id),
            PRIMARY KEY (chat_id, adspace_id)
        );

        CREATE TABLE IF NOT EXISTS messages (
            id          TEXT PRIMARY KEY,
            chat_id     TEXT NOT NULL REFERENCES chats(id),
            sender_id   TEXT NOT NULL REFERENCES users(id),
            content     TEXT NOT NULL,
            is_read     INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_messages_chat
            ON messages(chat_id, created_at);

        -- Seed the canonical adspace types
        INSERT OR IGNORE INTO adspace_types (id, name, description) VALUES
            ('00000000-0000-0000-0000-000000000001', 'Billboard', 'Large outdoor billboard'),
            ('00000000-0000-0000-0000-000000000002', 'Witryna', 'Shop window display'),
            ('00000000-0000-0000-0000-000000000003', 'Baner', 'Banner advertisement'),
            ('00000000-0000-0000-0000-000000000004', 'Plakat', 'Poster space'),
            ('00000000-0000-0000-0000-000000000005', 'Ekran LED', 'Digital LED screen');

        -- Seed the default business tags
        INSERT OR IGNORE INTO tags (id, name) VALUES
            ('00000000-0000-0000-0000-000000000101', 'Kawiarnia'),
            ('00000000-0000-0000-0000-000000000102', 'Restauracja'),
            ('00000000-0000-0000-0000-000000000103', 'Outdoor'),
            ('00000000-0000-0000-0000-000000000104', 'Reklama'),
            ('00000000-0000-0000-0000-000000000105', 'Marketing'),
            ('00000000-0000-0000-0000-000000000106', 'Sztuka'),
            ('00000000-0000-0000-0000-000000000107', 'Handel');
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
