//! Movies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{FieldValue, Resource};

/// A movie stored in the `filmes` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    pub id: i32,
    pub titulo: String,
    pub genero: String,
    /// Running time in minutes
    pub duracao: i32,
    pub ano_lancamento: i32,
    /// Age rating, e.g. "L" or "14"
    pub classificacao: String,
    pub criado_em: DateTime<Utc>,
}

/// Writable movie fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MovieFields {
    #[validate(required)]
    pub titulo: Option<String>,
    #[validate(required)]
    pub genero: Option<String>,
    #[validate(required)]
    pub duracao: Option<i32>,
    #[validate(required)]
    pub ano_lancamento: Option<i32>,
    #[validate(required)]
    pub classificacao: Option<String>,
    #[validate(required)]
    pub criado_em: Option<DateTime<Utc>>,
}

impl Resource for Movie {
    type Fields = MovieFields;

    const TABLE: &'static str = "filmes";
    const DATABASE: &'static str = "filme";
    const LABEL: &'static str = "movie";

    fn into_values(fields: MovieFields) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("titulo", FieldValue::Text(fields.titulo)),
            ("genero", FieldValue::Text(fields.genero)),
            ("duracao", FieldValue::Integer(fields.duracao)),
            ("ano_lancamento", FieldValue::Integer(fields.ano_lancamento)),
            ("classificacao", FieldValue::Text(fields.classificacao)),
            ("criado_em", FieldValue::Timestamp(fields.criado_em)),
        ]
    }
}
