//! Lesson comments

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Lesson;
use crate::dates::ymd;
use crate::error::Result;
use crate::notice::Notice;
use crate::store::{Record, Repository};
use crate::validation::require;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub lesson_id: u32,
    pub author: String,
    pub posted_on: NaiveDate,
    pub text: String,
}

impl Record for Comment {
    const ENTITY: &'static str = "comment";

    fn id(&self) -> u32 {
        self.id
    }
}

/// Comments on a lesson, newest first
pub fn comments_for<R: Repository<Comment>>(repo: &R, lesson_id: u32) -> Vec<Comment> {
    let mut comments: Vec<Comment> = repo
        .list()
        .into_iter()
        .filter(|c| c.lesson_id == lesson_id)
        .collect();
    comments.sort_by(|a, b| b.posted_on.cmp(&a.posted_on).then(b.id.cmp(&a.id)));
    comments
}

pub fn post_comment<L, C>(
    lessons: &L,
    comments: &mut C,
    lesson_id: u32,
    author: &str,
    text: &str,
    today: NaiveDate,
) -> Result<(Comment, Notice)>
where
    L: Repository<Lesson>,
    C: Repository<Comment>,
{
    let text = require("text", text, "Escreva um comentário")?;
    let author = require("author", author, "Nome é obrigatório")?;
    lessons.get(lesson_id)?;

    let comment = Comment {
        id: comments.next_id(),
        lesson_id,
        author: author.to_string(),
        posted_on: today,
        text: text.to_string(),
    };
    comments.insert(comment.clone());

    log::info!("Comment {} posted on lesson {}", comment.id, lesson_id);
    Ok((
        comment,
        Notice::success("Comentário publicado (mock)", "Seu comentário foi publicado."),
    ))
}

pub fn mock_comments() -> Vec<Comment> {
    let rows: &[(u32, &str, NaiveDate, &str)] = &[
        (1, "Maria Silva", ymd(2024, 3, 8), "Excelente aula! Muito didática e fácil de entender."),
        (2, "João Santos", ymd(2024, 3, 3), "Conteúdo muito bem explicado, estava com dúvidas sobre renda fixa."),
        (3, "Ana Costa", ymd(2024, 2, 25), "Perfeito para quem está começando a investir!"),
    ];

    rows.iter()
        .map(|&(id, author, posted_on, text)| Comment {
            id,
            lesson_id: 1,
            author: author.to_string(),
            posted_on,
            text: text.to_string(),
        })
        .collect()
}
