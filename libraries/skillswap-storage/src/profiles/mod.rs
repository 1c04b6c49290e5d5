//! User profile queries

use crate::error::{Result, StorageError};
use chrono::{DateTime, Utc};
use skillswap_core::{
    fold_case, DiscoveryPredicate, ProfileField, PublicProfile, TextClause, UserId, UserProfile,
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const PUBLIC_COLUMNS: &str =
    "id, name, location, skills_offered, skills_wanted, availability, rating, total_ratings";

const ALL_COLUMNS: &str = "id, name, email, location, skills_offered, skills_wanted, availability, \
     is_public, is_banned, is_admin, rating, total_ratings, created_at";

/// Row shape of the public projection
#[derive(Debug, sqlx::FromRow)]
struct PublicRow {
    id: UserId,
    name: String,
    location: Option<String>,
    skills_offered: String,
    skills_wanted: String,
    availability: Option<String>,
    rating: f64,
    total_ratings: i64,
}

impl TryFrom<PublicRow> for PublicProfile {
    type Error = StorageError;

    fn try_from(row: PublicRow) -> Result<Self> {
        Ok(PublicProfile {
            id: row.id,
            name: row.name,
            location: row.location,
            skills_offered: serde_json::from_str(&row.skills_offered)?,
            skills_wanted: serde_json::from_str(&row.skills_wanted)?,
            availability: row.availability,
            rating: row.rating,
            total_ratings: count_from_db(row.total_ratings)?,
        })
    }
}

/// Full stored row
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: UserId,
    name: String,
    email: Option<String>,
    location: Option<String>,
    skills_offered: String,
    skills_wanted: String,
    availability: Option<String>,
    is_public: bool,
    is_banned: bool,
    is_admin: Option<bool>,
    rating: f64,
    total_ratings: i64,
    created_at: String,
}

impl TryFrom<ProfileRow> for UserProfile {
    type Error = StorageError;

    fn try_from(row: ProfileRow) -> Result<Self> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| StorageError::SerializationError(format!("created_at: {e}")))?
            .with_timezone(&Utc);

        Ok(UserProfile {
            id: row.id,
            name: row.name,
            email: row.email,
            location: row.location,
            skills_offered: serde_json::from_str(&row.skills_offered)?,
            skills_wanted: serde_json::from_str(&row.skills_wanted)?,
            availability: row.availability,
            is_public: row.is_public,
            is_banned: row.is_banned,
            is_admin: row.is_admin,
            rating: row.rating,
            total_ratings: count_from_db(row.total_ratings)?,
            created_at,
        })
    }
}

fn count_from_db(value: i64) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| StorageError::SerializationError(format!("total_ratings out of range: {value}")))
}

fn folded_json(values: &[String]) -> Result<String> {
    let folded: Vec<String> = values.iter().map(|v| fold_case(v)).collect();
    Ok(serde_json::to_string(&folded)?)
}

async fn insert<'e, E>(executor: E, profile: &UserProfile) -> Result<()>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        "INSERT INTO user_profiles (
            id, name, name_folded, email, location,
            skills_offered, skills_offered_folded, skills_wanted, skills_wanted_folded,
            availability, is_public, is_banned, is_admin, rating, total_ratings, created_at
         ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&profile.id)
    .bind(&profile.name)
    .bind(fold_case(&profile.name))
    .bind(&profile.email)
    .bind(&profile.location)
    .bind(serde_json::to_string(&profile.skills_offered)?)
    .bind(folded_json(&profile.skills_offered)?)
    .bind(serde_json::to_string(&profile.skills_wanted)?)
    .bind(folded_json(&profile.skills_wanted)?)
    .bind(&profile.availability)
    .bind(profile.is_public)
    .bind(profile.is_banned)
    .bind(profile.is_admin)
    .bind(profile.rating)
    .bind(i64::from(profile.total_ratings))
    .bind(profile.created_at.to_rfc3339())
    .execute(executor)
    .await?;

    Ok(())
}

/// Store a single profile
pub async fn create(pool: &SqlitePool, profile: &UserProfile) -> Result<()> {
    insert(pool, profile).await
}

/// Store several profiles atomically
pub async fn create_many(pool: &SqlitePool, profiles: &[UserProfile]) -> Result<()> {
    let mut tx = pool.begin().await?;

    for profile in profiles {
        insert(&mut *tx, profile).await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Get a profile by ID, including private fields
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<UserProfile>> {
    let row: Option<ProfileRow> =
        sqlx::query_as(&format!("SELECT {ALL_COLUMNS} FROM user_profiles WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;

    row.map(UserProfile::try_from).transpose()
}

/// Get every stored profile, ordered by name
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<UserProfile>> {
    let rows: Vec<ProfileRow> =
        sqlx::query_as(&format!("SELECT {ALL_COLUMNS} FROM user_profiles ORDER BY name"))
            .fetch_all(pool)
            .await?;

    rows.into_iter().map(UserProfile::try_from).collect()
}

/// Find discoverable profiles matching `predicate`, at most `limit` rows
///
/// Order follows `SQLite`'s default scan and is not guaranteed.
pub async fn find_public(
    pool: &SqlitePool,
    predicate: &DiscoveryPredicate,
    limit: usize,
) -> Result<Vec<PublicProfile>> {
    let mut query = build_find_public(predicate, limit);

    let rows = query.build_query_as::<PublicRow>().fetch_all(pool).await?;

    rows.into_iter().map(PublicProfile::try_from).collect()
}

fn build_find_public(predicate: &DiscoveryPredicate, limit: usize) -> QueryBuilder<'static, Sqlite> {
    let mut query = QueryBuilder::new(format!(
        "SELECT {PUBLIC_COLUMNS} FROM user_profiles \
         WHERE is_public = 1 AND is_banned = 0 AND (is_admin IS NULL OR is_admin = 0)"
    ));

    for clause in predicate.clauses() {
        push_clause(&mut query, clause);
    }

    query.push(" LIMIT ");
    query.push_bind(i64::try_from(limit).unwrap_or(i64::MAX));

    query
}

fn push_clause(query: &mut QueryBuilder<'static, Sqlite>, clause: &TextClause) {
    query.push(" AND (");

    for (i, field) in clause.fields().iter().enumerate() {
        if i > 0 {
            query.push(" OR ");
        }

        match field {
            ProfileField::Name => {
                query.push("instr(name_folded, ");
                query.push_bind(clause.needle().to_string());
                query.push(") > 0");
            }
            ProfileField::SkillsOffered => push_skill_match(query, "skills_offered_folded", clause),
            ProfileField::SkillsWanted => push_skill_match(query, "skills_wanted_folded", clause),
        }
    }

    query.push(")");
}

fn push_skill_match(query: &mut QueryBuilder<'static, Sqlite>, column: &str, clause: &TextClause) {
    query.push(format!(
        "EXISTS (SELECT 1 FROM json_each(user_profiles.{column}) AS skill WHERE instr(skill.value, "
    ));
    query.push_bind(clause.needle().to_string());
    query.push(") > 0)");
}
