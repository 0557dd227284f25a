//! The student's lesson history and its filters

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::{self, ymd};
use crate::error::{PlatformError, Result};
use crate::store::{Record, Repository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonStatus {
    Completed,
    InProgress,
}

impl LessonStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LessonStatus::Completed => "Concluída",
            LessonStatus::InProgress => "Em andamento",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u32,
    pub lesson_id: u32,
    pub title: String,
    pub status: LessonStatus,
    pub date: NaiveDate,
    /// Quiz score in percent, `None` when the quiz was not taken
    pub quiz_score: Option<u8>,
    /// Rating given to the lesson, `None` when not rated
    pub rating: Option<f64>,
}

impl Record for HistoryEntry {
    const ENTITY: &'static str = "history entry";

    fn id(&self) -> u32 {
        self.id
    }
}

impl HistoryEntry {
    /// "85%" or "Não realizado"
    pub fn quiz_label(&self) -> String {
        match self.quiz_score {
            Some(score) => format!("{}%", score),
            None => "Não realizado".to_string(),
        }
    }
}

/// Status and inclusive date bounds. `None` status means all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryFilter {
    pub status: Option<LessonStatus>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl HistoryFilter {
    pub fn matches(&self, entry: &HistoryEntry) -> bool {
        self.status.map_or(true, |s| entry.status == s)
            && dates::within(entry.date, self.start, self.end)
    }

    pub fn apply(&self, entries: &[HistoryEntry]) -> Vec<HistoryEntry> {
        entries.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

/// The entry whose certificate the student wants to see. Only completed
/// lessons have one.
pub fn certificate_for_entry<R: Repository<HistoryEntry>>(repo: &R, id: u32) -> Result<HistoryEntry> {
    let entry = repo.get(id)?;
    if entry.status != LessonStatus::Completed {
        return Err(PlatformError::unavailable(
            "Certificado não disponível",
            "Complete a aula para ter acesso ao certificado.",
        ));
    }
    Ok(entry)
}

pub fn mock_history() -> Vec<HistoryEntry> {
    use LessonStatus::{Completed, InProgress};

    let rows: &[(u32, &str, LessonStatus, NaiveDate, Option<u8>, Option<f64>)] = &[
        (1, "Introdução à Renda Fixa", Completed, ymd(2024, 1, 15), Some(85), Some(4.6)),
        (2, "Fundos de Investimento", Completed, ymd(2024, 1, 20), Some(92), Some(4.8)),
        (3, "Ações para Iniciantes", InProgress, ymd(2024, 1, 25), None, None),
        (4, "Tesouro Direto", Completed, ymd(2024, 2, 1), Some(78), Some(4.7)),
        (5, "Planejamento Financeiro", Completed, ymd(2024, 2, 5), Some(88), Some(4.4)),
        (6, "Diversificação de Carteira", InProgress, ymd(2024, 2, 10), None, None),
        (7, "Análise Fundamentalista", Completed, ymd(2024, 2, 15), Some(95), Some(4.9)),
        (8, "Mercado de Capitais", Completed, ymd(2024, 2, 20), Some(82), Some(4.5)),
        (9, "Previdência Privada", InProgress, ymd(2024, 2, 25), None, None),
        (10, "Tributação de Investimentos", Completed, ymd(2024, 3, 1), Some(87), Some(4.3)),
    ];

    rows.iter()
        .map(|&(id, title, status, date, quiz_score, rating)| HistoryEntry {
            id,
            lesson_id: id,
            title: title.to_string(),
            status,
            date,
            quiz_score,
            rating,
        })
        .collect()
}
