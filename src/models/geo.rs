// src/models/geo.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Swiss canton, e.g. VD / Vaud.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Canton {
    pub id: String,
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Commune {
    pub id: String,
    pub canton_id: String,
    pub name: String,
    pub postal_code: Option<String>,
    pub bfs_number: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// NOGA economic sector. `level` is the hierarchy depth:
/// 1=Section, 2=Division, 3=Groupe, 4=Classe.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sector {
    pub id: String,
    pub parent_id: Option<String>,
    pub noga_code: Option<String>,
    pub name: String,
    pub level: i64,
    pub created_at: DateTime<Utc>,
}
