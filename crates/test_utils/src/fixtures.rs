//! Pre-built Test Fixtures
//!
//! Complete create payloads for both resources, either fixed (for assertions
//! on exact values) or randomized with `fake`.

use chrono::{TimeZone, Utc};
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;

use domain_catalog::{MovieFields, QuestionFields};

/// The question used by the end-to-end scenario
pub fn sample_question() -> QuestionFields {
    QuestionFields {
        enunciado: Some("Q1".to_string()),
        disciplina: Some("Math".to_string()),
        tema: Some("Algebra".to_string()),
        nivel: Some("easy".to_string()),
    }
}

/// A question with random text in every field
pub fn random_question() -> QuestionFields {
    QuestionFields {
        enunciado: Some(Sentence(4..10).fake()),
        disciplina: Some(Word().fake()),
        tema: Some(Word().fake()),
        nivel: Some(["easy", "medium", "hard"][(0..3).fake::<usize>()].to_string()),
    }
}

pub fn sample_movie() -> MovieFields {
    MovieFields {
        titulo: Some("Central do Brasil".to_string()),
        genero: Some("Drama".to_string()),
        duracao: Some(113),
        ano_lancamento: Some(1998),
        classificacao: Some("14".to_string()),
        criado_em: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single(),
    }
}

pub fn random_movie() -> MovieFields {
    MovieFields {
        titulo: Some(Sentence(1..4).fake()),
        genero: Some(Word().fake()),
        duracao: Some((60..200).fake::<i32>()),
        ano_lancamento: Some((1950..2025).fake::<i32>()),
        classificacao: Some(["L", "10", "12", "14", "16", "18"][(0..6).fake::<usize>()].to_string()),
        criado_em: Some(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_fixtures_are_complete() {
        let question = random_question();
        assert!(question.enunciado.is_some() && question.nivel.is_some());

        let movie = random_movie();
        let duracao = movie.duracao.unwrap();
        assert!((60..200).contains(&duracao));
        assert!(movie.criado_em.is_some());
    }
}
