//! Lessons and the commands behind the lesson list and viewer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::ymd;
use crate::error::{PlatformError, Result};
use crate::notice::Notice;
use crate::store::{Record, Repository};
use crate::validation::require;

/// Lesson shown when the requested id does not exist
const FALLBACK_LESSON_ID: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    /// Short text for the lesson card
    pub summary: String,
    /// Full text for the lesson page
    pub description: String,
    /// Average rating out of 5
    pub rating: f64,
    pub review_count: u32,
    pub date_added: NaiveDate,
    pub video_url: Option<String>,
    /// Supplementary material link or notes
    pub material: Option<String>,
    /// Stars given by the signed-in student
    pub user_rating: Option<u8>,
    pub quiz_completed: bool,
}

impl Record for Lesson {
    const ENTITY: &'static str = "lesson";

    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonSort {
    /// Best rated first
    #[default]
    Rating,
    /// Most recently added first
    Recent,
}

pub fn sorted_lessons(mut lessons: Vec<Lesson>, sort: LessonSort) -> Vec<Lesson> {
    match sort {
        LessonSort::Rating => lessons.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        LessonSort::Recent => lessons.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
    }
    lessons
}

/// The requested lesson, or the first lesson when `id` is unknown
pub fn lesson_or_default<R: Repository<Lesson>>(repo: &R, id: u32) -> Result<Lesson> {
    match repo.find(id) {
        Some(lesson) => Ok(lesson),
        None => {
            log::debug!("Lesson {} not found, showing lesson {}", id, FALLBACK_LESSON_ID);
            repo.get(FALLBACK_LESSON_ID)
        }
    }
}

/// "4.6 (128 avaliações)"
pub fn rating_text(rating: f64, review_count: u32) -> String {
    if review_count == 0 {
        format!("{:.1}", rating)
    } else {
        format!("{:.1} ({} avaliações)", rating, review_count)
    }
}

/// Record the student's star rating (1 to 5)
pub fn rate_lesson<R: Repository<Lesson>>(repo: &mut R, id: u32, stars: u8) -> Result<Notice> {
    if !(1..=5).contains(&stars) {
        return Err(PlatformError::unavailable(
            "Avaliação inválida",
            "Escolha de 1 a 5 estrelas.",
        ));
    }
    let mut lesson = repo.get(id)?;
    lesson.user_rating = Some(stars);
    repo.update(lesson)?;

    log::info!("Lesson {} rated {} stars", id, stars);
    let plural = if stars != 1 { "s" } else { "" };
    Ok(Notice::success(
        "Obrigado pela avaliação (mock)",
        format!("Você avaliou esta aula com {} estrela{}.", stars, plural),
    ))
}

/// New lesson form on the admin screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonDraft {
    pub title: String,
    pub description: String,
    pub video_url: String,
    #[serde(default)]
    pub material: Option<String>,
}

/// Publish a draft as a new, unrated lesson
pub fn publish_lesson<R: Repository<Lesson>>(
    repo: &mut R,
    draft: &LessonDraft,
    today: NaiveDate,
) -> Result<(Lesson, Notice)> {
    let title = require("title", &draft.title, "Título é obrigatório")?;
    let description = require("description", &draft.description, "Descrição é obrigatória")?;
    let video_url = require("video_url", &draft.video_url, "URL do vídeo é obrigatória")?;
    let material = draft
        .material
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string);

    let lesson = Lesson {
        id: repo.next_id(),
        title: title.to_string(),
        summary: description.to_string(),
        description: description.to_string(),
        rating: 0.0,
        review_count: 0,
        date_added: today,
        video_url: Some(video_url.to_string()),
        material,
        user_rating: None,
        quiz_completed: false,
    };
    repo.insert(lesson.clone());

    log::info!("Lesson {} published: {}", lesson.id, lesson.title);
    Ok((lesson, Notice::success("Sucesso!", "Aula publicada com sucesso")))
}

/// Discard the draft being edited
pub fn cancel_draft(draft: &mut LessonDraft) -> Notice {
    *draft = LessonDraft::default();
    Notice::success("Cancelado", "Cadastro cancelado")
}

pub fn mock_lessons() -> Vec<Lesson> {
    let rows: &[(u32, &str, &str, Option<&str>, f64, u32, NaiveDate)] = &[
        (
            1,
            "Introdução a Renda Fixa",
            "Aprenda os conceitos básicos de investimentos em renda fixa e suas vantagens.",
            Some("Nesta aula você aprenderá os conceitos fundamentais de renda fixa, conhecerá os principais tipos de investimentos desta categoria e entenderá como eles podem fazer parte da sua estratégia de investimentos."),
            4.6,
            128,
            ymd(2024, 1, 15),
        ),
        (
            2,
            "Fundos de Investimento",
            "Entenda como funcionam os fundos e como escolher o melhor para seu perfil.",
            Some("Descubra como funcionam os fundos de investimento, suas vantagens e como escolher o fundo ideal para seu perfil de investidor e objetivos financeiros."),
            4.8,
            95,
            ymd(2024, 1, 20),
        ),
        (
            3,
            "Ações para Iniciantes",
            "Primeiros passos no mercado de ações de forma segura e consciente.",
            Some("Aprenda os primeiros passos para investir em ações de forma segura, entenda os conceitos básicos do mercado acionário e como analisar empresas."),
            4.5,
            203,
            ymd(2024, 1, 25),
        ),
        (
            4,
            "Tesouro Direto",
            "Conheça os títulos públicos e como investir no Tesouro Direto.",
            None,
            4.7,
            156,
            ymd(2024, 2, 1),
        ),
        (
            5,
            "Planejamento Financeiro",
            "Organize suas finanças e crie metas de investimento realistas.",
            None,
            4.4,
            89,
            ymd(2024, 2, 5),
        ),
        (
            6,
            "Diversificação de Carteira",
            "Aprenda a distribuir seus investimentos para reduzir riscos.",
            None,
            4.9,
            67,
            ymd(2024, 2, 10),
        ),
    ];

    rows.iter()
        .map(|&(id, title, summary, description, rating, review_count, date_added)| Lesson {
            id,
            title: title.to_string(),
            summary: summary.to_string(),
            description: description.unwrap_or(summary).to_string(),
            rating,
            review_count,
            date_added,
            video_url: None,
            material: None,
            user_rating: None,
            quiz_completed: false,
        })
        .collect()
}
