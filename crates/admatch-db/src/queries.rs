use crate::Database;
use crate::models::{
    AdspaceRow, AdspaceTypeRow, BusinessRow, ChatRow, MatchRow, MessageRow, TagRow, UserRow,
};
use anyhow::Result;
use rusqlite::Row;

const BUSINESS_COLS: &str =
    "id, owner_id, name, description, address, nip, pkd, website, image_url, logo_url, \
     latitude, longitude, created_at";

const ADSPACE_COLS: &str =
    "id, business_id, type_id, name, description, image_url, max_width, max_height, \
     is_barter_available, price_per_week, in_use, created_at";

const USER_COLS: &str = "id, email, first_name, last_name, password, created_at";

impl Database {
    // -- Users --

    pub fn create_user(
        &self,
        id: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        password_hash: &str,
    ) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (id, email, first_name, last_name, password) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                (id, email, first_name, last_name, password_hash),
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("SELECT {USER_COLS} FROM users WHERE email = ?1"),
                [email],
                read_user,
            )
            .optional()
        })
    }

    pub fn get_user_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("SELECT {USER_COLS} FROM users WHERE id = ?1"),
                [id],
                read_user,
            )
            .optional()
        })
    }

    pub fn update_user_password(&self, id: &str, password_hash: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE users SET password = ?2 WHERE id = ?1",
                (id, password_hash),
            )?;
            Ok(())
        })
    }

    // -- Tags --

    pub fn list_tags(&self) -> Result<Vec<TagRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, name FROM tags ORDER BY name")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(TagRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn tags_for_business(&self, business_id: &str) -> Result<Vec<TagRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT t.id, t.name FROM tags t \
                 JOIN business_tags bt ON bt.tag_id = t.id \
                 WHERE bt.business_id = ?1 ORDER BY t.name",
            )?;
            let rows = stmt
                .query_map([business_id], |row| {
                    Ok(TagRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Businesses --

    #[allow(clippy::too_many_arguments)]
    pub fn create_business(
        &self,
        id: &str,
        owner_id: &str,
        name: &str,
        description: &str,
        address: &str,
        nip: &str,
        pkd: &str,
        website: Option<&str>,
        latitude: f64,
        longitude: f64,
        tag_ids: &[String],
    ) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO businesses \
                 (id, owner_id, name, description, address, nip, pkd, website, latitude, longitude) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                rusqlite::params![
                    id, owner_id, name, description, address, nip, pkd, website, latitude,
                    longitude
                ],
            )?;
            for tag_id in tag_ids {
                conn.execute(
                    "INSERT INTO business_tags (business_id, tag_id) VALUES (?1, ?2)",
                    (id, tag_id),
                )?;
            }
            Ok(())
        })
    }

    pub fn get_business_by_id(&self, id: &str) -> Result<Option<BusinessRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("SELECT {BUSINESS_COLS} FROM businesses WHERE id = ?1"),
                [id],
                read_business,
            )
            .optional()
        })
    }

    pub fn get_business_by_owner(&self, owner_id: &str) -> Result<Option<BusinessRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("SELECT {BUSINESS_COLS} FROM businesses WHERE owner_id = ?1 LIMIT 1"),
                [owner_id],
                read_business,
            )
            .optional()
        })
    }

    pub fn list_businesses(&self) -> Result<Vec<BusinessRow>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {BUSINESS_COLS} FROM businesses ORDER BY name"))?;
            let rows = stmt
                .query_map([], read_business)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Adspaces --

    #[allow(clippy::too_many_arguments)]
    pub fn create_adspace(
        &self,
        id: &str,
        business_id: &str,
        type_id: &str,
        name: &str,
        description: Option<&str>,
        image_url: &str,
        max_width: f64,
        max_height: f64,
        is_barter_available: bool,
        price_per_week: Option<f64>,
    ) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO adspaces \
                 (id, business_id, type_id, name, description, image_url, max_width, max_height, \
                  is_barter_available, price_per_week) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                rusqlite::params![
                    id,
                    business_id,
                    type_id,
                    name,
                    description,
                    image_url,
                    max_width,
                    max_height,
                    is_barter_available,
                    price_per_week
                ],
            )?;
            Ok(())
        })
    }

    pub fn get_adspace_by_id(&self, id: &str) -> Result<Option<AdspaceRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("SELECT {ADSPACE_COLS} FROM adspaces WHERE id = ?1"),
                [id],
                read_adspace,
            )
            .optional()
        })
    }

    pub fn list_adspaces(&self) -> Result<Vec<AdspaceRow>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {ADSPACE_COLS} FROM adspaces ORDER BY created_at"))?;
            let rows = stmt
                .query_map([], read_adspace)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn adspaces_for_business(&self, business_id: &str) -> Result<Vec<AdspaceRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ADSPACE_COLS} FROM adspaces WHERE business_id = ?1 \
                 ORDER BY created_at, rowid"
            ))?;
            let rows = stmt
                .query_map([business_id], read_adspace)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn adspaces_for_owner(&self, owner_id: &str) -> Result<Vec<AdspaceRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM adspaces a \
                 JOIN businesses b ON b.id = a.business_id \
                 WHERE b.owner_id = ?1 ORDER BY a.created_at",
                ADSPACE_COLS
                    .split(", ")
                    .map(|c| format!("a.{c}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))?;
            let rows = stmt
                .query_map([owner_id], read_adspace)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn list_adspace_types(&self) -> Result<Vec<AdspaceTypeRow>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, name, description FROM adspace_types ORDER BY name")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(AdspaceTypeRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn get_adspace_type(&self, id: &str) -> Result<Option<AdspaceTypeRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, name, description FROM adspace_types WHERE id = ?1",
                [id],
                |row| {
                    Ok(AdspaceTypeRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                    })
                },
            )
            .optional()
        })
    }

    // -- Matching --

    pub fn swiped_business_ids(&self, swiper_id: &str) -> Result<Vec<String>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT target_business_id FROM swipes WHERE swiper_id = ?1")?;
            let ids = stmt
                .query_map([swiper_id], |row| row.get(0))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(ids)
        })
    }

    pub fn owned_business_ids(&self, owner_id: &str) -> Result<Vec<String>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id FROM businesses WHERE owner_id = ?1")?;
            let ids = stmt
                .query_map([owner_id], |row| row.get(0))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(ids)
        })
    }

    /// Bounded sample of businesses that are not in `exclude` and have at
    /// least one adspace. The caller picks one of these at random; the
    /// sample bound means the pick is not uniform over large pools.
    pub fn candidate_businesses(&self, exclude: &[String], limit: u32) -> Result<Vec<BusinessRow>> {
        self.with_conn(|conn| {
            let mut sql = format!(
                "SELECT {BUSINESS_COLS} FROM businesses b \
                 WHERE EXISTS (SELECT 1 FROM adspaces a WHERE a.business_id = b.id)"
            );
            if !exclude.is_empty() {
                let placeholders: Vec<String> =
                    (1..=exclude.len()).map(|i| format!("?{}", i)).collect();
                sql.push_str(&format!(" AND b.id NOT IN ({})", placeholders.join(", ")));
            }
            sql.push_str(&format!(" LIMIT ?{}", exclude.len() + 1));

            let mut stmt = conn.prepare(&sql)?;
            let mut params: Vec<&dyn rusqlite::types::ToSql> = exclude
                .iter()
                .map(|id| id as &dyn rusqlite::types::ToSql)
                .collect();
            params.push(&limit);

            let rows = stmt
                .query_map(params.as_slice(), read_business)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Append the swipe, then on a right-swipe create the match chat.
    /// Both writes live behind this single call so the atomicity policy can
    /// be tightened later without touching the handler contract.
    ///
    /// `chat_id` is only consumed when a chat is actually created. A right
    /// swipe whose target has vanished returns `Ok(None)` — the swipe is
    /// still recorded.
    pub fn record_swipe(
        &self,
        swipe_id: &str,
        swiper_id: &str,
        target_business_id: &str,
        direction: &str,
        chat_id: &str,
    ) -> Result<Option<MatchRow>> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO swipes (id, swiper_id, target_business_id, direction) \
                 VALUES (?1, ?2, ?3, ?4)",
                (swipe_id, swiper_id, target_business_id, direction),
            )?;

            if direction != "right" {
                return Ok(None);
            }

            let target: Option<(String, String)> = conn
                .query_row(
                    "SELECT owner_id, name FROM businesses WHERE id = ?1",
                    [target_business_id],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            let Some((owner_id, business_name)) = target else {
                return Ok(None);
            };

            // The first listing motivated the match; a business without
            // listings still matches, just with no adspace attached.
            let first_adspace: Option<String> = conn
                .query_row(
                    "SELECT id FROM adspaces WHERE business_id = ?1 \
                     ORDER BY created_at, rowid LIMIT 1",
                    [target_business_id],
                    |row| row.get(0),
                )
                .optional()?;

            conn.execute("INSERT INTO chats (id) VALUES (?1)", [chat_id])?;
            conn.execute(
                "INSERT INTO chat_participants (chat_id, user_id) VALUES (?1, ?2), (?1, ?3)",
                (chat_id, swiper_id, &owner_id),
            )?;
            if let Some(adspace_id) = first_adspace {
                conn.execute(
                    "INSERT INTO chat_adspaces (chat_id, adspace_id) VALUES (?1, ?2)",
                    (chat_id, &adspace_id),
                )?;
            }

            Ok(Some(MatchRow {
                chat_id: chat_id.to_string(),
                business_name,
            }))
        })
    }

    // -- Chats --

    pub fn chats_for_user(&self, user_id: &str) -> Result<Vec<ChatRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT c.id, c.created_at FROM chats c \
                 JOIN chat_participants p ON p.chat_id = c.id \
                 WHERE p.user_id = ?1 ORDER BY c.created_at DESC",
            )?;
            let rows = stmt
                .query_map([user_id], |row| {
                    Ok(ChatRow {
                        id: row.get(0)?,
                        created_at: row.get(1)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn get_chat(&self, id: &str) -> Result<Option<ChatRow>> {
        self.with_conn(|conn| {
            conn.query_row("SELECT id, created_at FROM chats WHERE id = ?1", [id], |row| {
                Ok(ChatRow {
                    id: row.get(0)?,
                    created_at: row.get(1)?,
                })
            })
            .optional()
        })
    }

    pub fn chat_participants(&self, chat_id: &str) -> Result<Vec<UserRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM users u \
                 JOIN chat_participants p ON p.user_id = u.id \
                 WHERE p.chat_id = ?1",
                USER_COLS
                    .split(", ")
                    .map(|c| format!("u.{c}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))?;
            let rows = stmt
                .query_map([chat_id], read_user)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn chat_adspaces(&self, chat_id: &str) -> Result<Vec<AdspaceRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM adspaces a \
                 JOIN chat_adspaces ca ON ca.adspace_id = a.id \
                 WHERE ca.chat_id = ?1 ORDER BY a.created_at, a.rowid",
                ADSPACE_COLS
                    .split(", ")
                    .map(|c| format!("a.{c}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))?;
            let rows = stmt
                .query_map([chat_id], read_adspace)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Messages --

    pub fn insert_message(&self, id: &str, chat_id: &str, sender_id: &str, content: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (id, chat_id, sender_id, content) VALUES (?1, ?2, ?3, ?4)",
                (id, chat_id, sender_id, content),
            )?;
            Ok(())
        })
    }

    pub fn messages_for_chat(&self, chat_id: &str) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, chat_id, sender_id, content, is_read, created_at FROM messages \
                 WHERE chat_id = ?1 ORDER BY created_at, rowid",
            )?;
            let rows = stmt
                .query_map([chat_id], |row| {
                    Ok(MessageRow {
                        id: row.get(0)?,
                        chat_id: row.get(1)?,
                        sender_id: row.get(2)?,
                        content: row.get(3)?,
                        is_read: row.get(4)?,
                        created_at: row.get(5)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }
}

fn read_user(row: &Row) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        email: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        password: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn read_business(row: &Row) -> rusqlite::Result<BusinessRow> {
    Ok(BusinessRow {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        address: row.get(4)?,
        nip: row.get(5)?,
        pkd: row.get(6)?,
        website: row.get(7)?,
        image_url: row.get(8)?,
        logo_url: row.get(9)?,
        latitude: row.get(10)?,
        longitude: row.get(11)?,
        created_at: row.get(12)?,
    })
}

fn read_adspace(row: &Row) -> rusqlite::Result<AdspaceRow> {
    Ok(AdspaceRow {
        id: row.get(0)?,
        business_id: row.get(1)?,
        type_id: row.get(2)?,
        name: row.get(3)?,
        description: row.get(4)?,
        image_url: row.get(5)?,
        max_width: row.get(6)?,
        max_height: row.get(7)?,
        is_barter_available: row.get(8)?,
        price_per_week: row.get(9)?,
        in_use: row.get(10)?,
        created_at: row.get(11)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPE_BILLBOARD: &str = "00000000-0000-0000-0000-000000000001";

    fn test_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    fn add_user(db: &Database, id: &str) {
        db.create_user(id, &format!("{id}@example.com"), "Jan", "Kowalski", "hash")
            .unwrap();
    }

    fn add_business(db: &Database, id: &str, owner_id: &str) {
        db.create_business(
            id,
            owner_id,
            &format!("Firma {id}"),
            "Opis",
            "ul. Testowa 1",
            "1234567890",
            "73.11.Z",
            None,
            50.06,
            19.94,
            &[],
        )
        .unwrap();
    }

    fn add_adspace(db: &Database, id: &str, business_id: &str, price: Option<f64>) {
        db.create_adspace(
            id,
            business_id,
            TYPE_BILLBOARD,
            &format!("Powierzchnia {id}"),
            None,
            "https://example.com/img.jpg",
            2.0,
            3.0,
            price.is_none(),
            price,
        )
        .unwrap();
    }

    /// Exclusion set for a user's candidate query: already swiped plus owned.
    fn exclusions(db: &Database, user_id: &str) -> Vec<String> {
        let mut exclude = db.swiped_business_ids(user_id).unwrap();
        exclude.extend(db.owned_business_ids(user_id).unwrap());
        exclude
    }

    #[test]
    fn candidates_exclude_swiped_and_owned() {
        let db = test_db();
        add_user(&db, "u1");
        add_user(&db, "u2");
        add_user(&db, "u3");
        add_business(&db, "b1", "u1");
        add_business(&db, "b2", "u2");
        add_business(&db, "b3", "u3");
        add_adspace(&db, "a1", "b1", Some(100.0));
        add_adspace(&db, "a2", "b2", Some(100.0));
        add_adspace(&db, "a3", "b3", Some(100.0));

        db.record_swipe("s1", "u1", "b2", "left", "unused").unwrap();

        let sample = db.candidate_businesses(&exclusions(&db, "u1"), 10).unwrap();
        let ids: Vec<&str> = sample.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b3"]);
    }

    #[test]
    fn candidates_require_at_least_one_listing() {
        let db = test_db();
        add_user(&db, "u1");
        add_user(&db, "u2");
        add_business(&db, "b2", "u2");

        let sample = db.candidate_businesses(&exclusions(&db, "u1"), 10).unwrap();
        assert!(sample.is_empty());

        add_adspace(&db, "a1", "b2", None);
        let sample = db.candidate_businesses(&exclusions(&db, "u1"), 10).unwrap();
        assert_eq!(sample.len(), 1);
    }

    #[test]
    fn candidates_empty_once_pool_is_exhausted() {
        let db = test_db();
        add_user(&db, "u1");
        add_user(&db, "u2");
        add_user(&db, "u3");
        add_business(&db, "b2", "u2");
        add_business(&db, "b3", "u3");
        add_adspace(&db, "a2", "b2", Some(50.0));
        add_adspace(&db, "a3", "b3", Some(50.0));

        db.record_swipe("s1", "u1", "b2", "right", "c1").unwrap();
        db.record_swipe("s2", "u1", "b3", "left", "unused").unwrap();

        let sample = db.candidate_businesses(&exclusions(&db, "u1"), 10).unwrap();
        assert!(sample.is_empty());
    }

    #[test]
    fn right_swipe_creates_chat_with_both_participants() {
        let db = test_db();
        add_user(&db, "u1");
        add_user(&db, "u2");
        add_business(&db, "b2", "u2");
        add_adspace(&db, "a1", "b2", Some(80.0));
        add_adspace(&db, "a2", "b2", Some(120.0));

        let matched = db
            .record_swipe("s1", "u1", "b2", "right", "c1")
            .unwrap()
            .expect("right swipe on existing business must match");

        assert_eq!(matched.chat_id, "c1");
        assert_eq!(matched.business_name, "Firma b2");

        let mut participant_ids: Vec<String> = db
            .chat_participants("c1")
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        participant_ids.sort();
        assert_eq!(participant_ids, vec!["u1", "u2"]);

        // The first listing is the one connected to the chat
        let connected = db.chat_adspaces("c1").unwrap();
        assert_eq!(connected.len(), 1);
        assert_eq!(connected[0].id, "a1");
    }

    #[test]
    fn left_swipe_is_recorded_but_creates_no_chat() {
        let db = test_db();
        add_user(&db, "u1");
        add_user(&db, "u2");
        add_business(&db, "b2", "u2");
        add_adspace(&db, "a1", "b2", None);

        let matched = db.record_swipe("s1", "u1", "b2", "left", "unused").unwrap();
        assert!(matched.is_none());

        assert_eq!(db.swiped_business_ids("u1").unwrap(), vec!["b2"]);
        assert!(db.chats_for_user("u1").unwrap().is_empty());
        assert!(db.chats_for_user("u2").unwrap().is_empty());
    }

    #[test]
    fn repeated_right_swipes_create_separate_chats() {
        // Observed design: no duplicate-swipe guard, each right swipe matches again.
        let db = test_db();
        add_user(&db, "u1");
        add_user(&db, "u2");
        add_business(&db, "b2", "u2");
        add_adspace(&db, "a1", "b2", Some(60.0));

        assert!(db.record_swipe("s1", "u1", "b2", "right", "c1").unwrap().is_some());
        assert!(db.record_swipe("s2", "u1", "b2", "right", "c2").unwrap().is_some());

        assert_eq!(db.chats_for_user("u1").unwrap().len(), 2);
    }

    #[test]
    fn right_swipe_on_vanished_target_is_a_soft_non_match() {
        let db = test_db();
        add_user(&db, "u1");

        // Simulate the target disappearing between candidate selection and
        // the swipe: with foreign keys relaxed the swipe row lands, but the
        // business lookup comes up empty.
        db.with_conn(|conn| {
            conn.pragma_update(None, "foreign_keys", "OFF")?;
            Ok(())
        })
        .unwrap();

        let matched = db.record_swipe("s1", "u1", "ghost", "right", "c1").unwrap();
        assert!(matched.is_none());
        assert_eq!(db.swiped_business_ids("u1").unwrap(), vec!["ghost"]);
    }

    #[test]
    fn matching_a_business_without_listings_attaches_none() {
        let db = test_db();
        add_user(&db, "u1");
        add_user(&db, "u2");
        add_business(&db, "b2", "u2");

        let matched = db
            .record_swipe("s1", "u1", "b2", "right", "c1")
            .unwrap()
            .expect("match must still happen without listings");
        assert_eq!(matched.chat_id, "c1");
        assert!(db.chat_adspaces("c1").unwrap().is_empty());
    }

    #[test]
    fn messages_round_trip_verbatim_in_order() {
        let db = test_db();
        add_user(&db, "u1");
        add_user(&db, "u2");
        add_business(&db, "b2", "u2");
        add_adspace(&db, "a1", "b2", Some(80.0));
        db.record_swipe("s1", "u1", "b2", "right", "c1").unwrap();

        db.insert_message("m1", "c1", "u1", "Dzień dobry, ile to kosztuje?").unwrap();
        db.insert_message("m2", "c1", "u2", "80 zł tygodniowo").unwrap();

        let messages = db.messages_for_chat("c1").unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender_id, "u1");
        assert_eq!(messages[0].content, "Dzień dobry, ile to kosztuje?");
        assert!(!messages[0].is_read);
        assert_eq!(messages[1].sender_id, "u2");
    }
}
