//! Quick quiz shown under each lesson

use serde::Serialize;

use super::Lesson;
use crate::error::Result;
use crate::notice::Notice;
use crate::store::Repository;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
}

/// Questions of the lesson quiz. Answers are not scored.
pub fn quiz() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            prompt: "Qual é a principal característica da renda fixa?",
            options: ["Rentabilidade variável", "Rentabilidade previsível", "Alto risco", "Liquidez diária"],
        },
        QuizQuestion {
            prompt: "Qual investimento é considerado mais seguro?",
            options: ["Ações", "Tesouro Direto", "Criptomoedas", "Fundos imobiliários"],
        },
        QuizQuestion {
            prompt: "O que significa diversificação?",
            options: ["Investir tudo em um produto", "Distribuir investimentos", "Vender rapidamente", "Comprar apenas ações"],
        },
    ]
}

/// Mark the lesson quiz as completed
pub fn submit_quiz<R: Repository<Lesson>>(repo: &mut R, lesson_id: u32) -> Result<Notice> {
    let mut lesson = repo.get(lesson_id)?;
    lesson.quiz_completed = true;
    repo.update(lesson)?;

    log::info!("Quiz completed for lesson {}", lesson_id);
    Ok(Notice::success(
        "Parabéns! Você concluiu o quiz (mock).",
        "Continue aprendendo com nossas próximas aulas!",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_lessons;
    use crate::store::InMemoryRepository;

    #[test]
    fn test_quiz_questions() {
        let questions = quiz();
        assert_eq!(questions.len(), 3);
        assert!(questions[1].options.contains(&"Tesouro Direto"));
    }

    #[test]
    fn test_submit_quiz() {
        let mut lessons = InMemoryRepository::with_records(mock_lessons());
        assert!(!lessons.get(1).expect("seeded").quiz_completed);

        submit_quiz(&mut lessons, 1).expect("known lesson");
        assert!(lessons.get(1).expect("seeded").quiz_completed);
        assert!(submit_quiz(&mut lessons, 99).is_err());
    }
}
