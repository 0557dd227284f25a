//! Lesson catalog: listing, the lesson viewer (rating, quiz, comments),
//! publishing new lessons and the student's lesson history

mod lesson;
pub mod quiz;
pub mod comments;
pub mod history;

pub use lesson::{
    Lesson, LessonDraft, LessonSort, cancel_draft, lesson_or_default, mock_lessons,
    publish_lesson, rate_lesson, rating_text, sorted_lessons,
};
pub use quiz::{QuizQuestion, quiz, submit_quiz};
pub use comments::{Comment, comments_for, mock_comments, post_comment};
pub use history::{HistoryEntry, HistoryFilter, LessonStatus, certificate_for_entry, mock_history};
