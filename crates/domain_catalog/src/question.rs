//! Quiz questions

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{FieldValue, Resource};

/// A quiz question stored in the `questoes` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    /// Statement text
    pub enunciado: String,
    /// Subject, e.g. "Math"
    pub disciplina: String,
    /// Topic within the subject
    pub tema: String,
    /// Difficulty level
    pub nivel: String,
}

/// Writable question fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuestionFields {
    #[validate(required)]
    pub enunciado: Option<String>,
    #[validate(required)]
    pub disciplina: Option<String>,
    #[validate(required)]
    pub tema: Option<String>,
    #[validate(required)]
    pub nivel: Option<String>,
}

impl Resource for Question {
    type Fields = QuestionFields;

    const TABLE: &'static str = "questoes";
    const DATABASE: &'static str = "principal";
    const LABEL: &'static str = "question";

    fn into_values(fields: QuestionFields) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("enunciado", FieldValue::Text(fields.enunciado)),
            ("disciplina", FieldValue::Text(fields.disciplina)),
            ("tema", FieldValue::Text(fields.tema)),
            ("nivel", FieldValue::Text(fields.nivel)),
        ]
    }
}
