//! Tests for the catalog resources

use core_kernel::{require_fields, CoreError, FieldValue, Resource};
use domain_catalog::{Movie, MovieFields, Question, QuestionFields};
use proptest::prelude::*;
use serde_json::json;

fn complete_question() -> QuestionFields {
    QuestionFields {
        enunciado: Some("Q1".to_string()),
        disciplina: Some("Math".to_string()),
        tema: Some("Algebra".to_string()),
        nivel: Some("easy".to_string()),
    }
}

mod question_tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        assert_eq!(Question::TABLE, "questoes");
        assert_eq!(Question::DATABASE, "principal");
    }

    #[test]
    fn test_complete_fields_validate() {
        assert!(require_fields(&complete_question()).is_ok());
    }

    #[test]
    fn test_partial_body_deserializes() {
        let fields: QuestionFields = serde_json::from_value(json!({ "tema": "Geometria" })).unwrap();

        assert_eq!(fields.tema.as_deref(), Some("Geometria"));
        assert!(fields.enunciado.is_none());
        assert!(matches!(
            require_fields(&fields),
            Err(CoreError::MissingFields(missing)) if missing == ["disciplina", "enunciado", "nivel"]
        ));
    }

    #[test]
    fn test_values_follow_column_order() {
        let values = Question::into_values(complete_question());
        let columns: Vec<_> = values.iter().map(|(column, _)| *column).collect();

        assert_eq!(columns, ["enunciado", "disciplina", "tema", "nivel"]);
        assert_eq!(values[0].1, FieldValue::Text(Some("Q1".to_string())));
    }

    #[test]
    fn test_serializes_with_column_names() {
        let question = Question {
            id: 7,
            enunciado: "Q1".to_string(),
            disciplina: "Math".to_string(),
            tema: "Algebra".to_string(),
            nivel: "easy".to_string(),
        };

        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["disciplina"], "Math");
    }

    proptest! {
        #[test]
        fn prop_missing_fields_are_reported(mask in 0u8..16) {
            let mut fields = complete_question();
            let mut expected = Vec::new();
            if mask & 1 != 0 { fields.enunciado = None; expected.push("enunciado"); }
            if mask & 2 != 0 { fields.disciplina = None; expected.push("disciplina"); }
            if mask & 4 != 0 { fields.tema = None; expected.push("tema"); }
            if mask & 8 != 0 { fields.nivel = None; expected.push("nivel"); }
            expected.sort();

            match require_fields(&fields) {
                Ok(()) => prop_assert!(expected.is_empty()),
                Err(err) => prop_assert_eq!(err.fields().to_vec(), expected),
            }
        }
    }
}

mod movie_tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        assert_eq!(Movie::TABLE, "filmes");
        assert_eq!(Movie::DATABASE, "filme");
    }

    #[test]
    fn test_create_body_deserializes() {
        let fields: MovieFields = serde_json::from_value(json!({
            "titulo": "Central do Brasil",
            "genero": "Drama",
            "duracao": 113,
            "ano_lancamento": 1998,
            "classificacao": "14",
            "criado_em": "2024-03-01T12:00:00Z"
        }))
        .unwrap();

        assert!(require_fields(&fields).is_ok());
        assert_eq!(fields.duracao, Some(113));
    }

    #[test]
    fn test_missing_timestamp_is_reported() {
        let fields = MovieFields {
            titulo: Some("Cidade de Deus".to_string()),
            genero: Some("Crime".to_string()),
            duracao: Some(130),
            ano_lancamento: Some(2002),
            classificacao: Some("18".to_string()),
            criado_em: None,
        };

        let err = require_fields(&fields).unwrap_err();
        assert_eq!(err.fields(), ["criado_em".to_string()]);
    }

    #[test]
    fn test_values_carry_column_types() {
        let values = Movie::into_values(MovieFields {
            duracao: Some(90),
            ..Default::default()
        });

        assert_eq!(values.len(), 6);
        assert_eq!(values[2], ("duracao", FieldValue::Integer(Some(90))));
        assert_eq!(values[5], ("criado_em", FieldValue::Timestamp(None)));
    }
}
