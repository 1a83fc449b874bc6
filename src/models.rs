//! The five persisted record kinds and their table mappings.
//!
//! JSON field names follow the public wire format (`ID`, `Gname`, `GenreID`, ...).
//! Every field also carries its folded spelling (lowercase, no `_`) as an alias, which is
//! what request bodies are matched against. Missing fields decode to zero values.

use crate::store::{Column, Record};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteArguments, Sqlite};
use sqlx::query::Query;
use utoipa::ToSchema;

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

const TEXT: &str = "TEXT NOT NULL DEFAULT ''";
const INTEGER: &str = "INTEGER NOT NULL DEFAULT 0";
const BOOLEAN: &str = "BOOLEAN NOT NULL DEFAULT 0";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(default)]
pub struct User {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Email", alias = "email")]
    pub email: String,
    /// Stored verbatim; never checked.
    #[serde(rename = "Password", alias = "password")]
    pub password: String,
    #[serde(rename = "Admin", alias = "admin")]
    pub admin: bool,
}

impl Record for User {
    const KIND: &'static str = "user";
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [Column] = &[
        Column::new("name", TEXT),
        Column::new("email", TEXT),
        Column::new("password", TEXT),
        Column::new("admin", BOOLEAN),
    ];

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.email.clone())
            .bind(self.password.clone())
            .bind(self.admin)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(default)]
pub struct Genre {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(rename = "Gname", alias = "gname")]
    pub gname: String,
    /// Filled only when genres are listed; `null` otherwise.
    #[serde(rename = "Quizzes", skip_deserializing)]
    #[sqlx(skip)]
    pub quizzes: Option<Vec<Quiz>>,
}

impl Record for Genre {
    const KIND: &'static str = "genre";
    const TABLE: &'static str = "genres";
    const COLUMNS: &'static [Column] = &[Column::new("gname", TEXT)];

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.gname.clone())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(default)]
pub struct Quiz {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(rename = "GenreID", alias = "genreid")]
    pub genre_id: i64,
    #[serde(rename = "Quizname", alias = "quizname")]
    pub quizname: String,
    #[serde(rename = "Questions", skip_deserializing)]
    #[sqlx(skip)]
    pub questions: Option<Vec<Question>>,
}

impl Quiz {
    pub const GENRE_ID: &'static str = "genre_id";
}

impl Record for Quiz {
    const KIND: &'static str = "quiz";
    const TABLE: &'static str = "quizzes";
    const COLUMNS: &'static [Column] = &[
        Column::new(Quiz::GENRE_ID, INTEGER),
        Column::new("quizname", TEXT),
    ];

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.genre_id).bind(self.quizname.clone())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(default)]
pub struct Question {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(rename = "QuizID", alias = "quizid")]
    pub quiz_id: i64,
    #[serde(rename = "Qtype", alias = "qtype")]
    pub qtype: String,
    #[serde(rename = "Question", alias = "question")]
    pub question: String,
    /// Opaque client-serialized list of choices.
    #[serde(rename = "Options", alias = "options")]
    pub options: String,
    #[serde(rename = "Answer", alias = "answer")]
    pub answer: String,
}

impl Question {
    pub const QUIZ_ID: &'static str = "quiz_id";
}

impl Record for Question {
    const KIND: &'static str = "question";
    const TABLE: &'static str = "questions";
    const COLUMNS: &'static [Column] = &[
        Column::new(Question::QUIZ_ID, INTEGER),
        Column::new("qtype", TEXT),
        Column::new("question", TEXT),
        Column::new("options", TEXT),
        Column::new("answer", TEXT),
    ];

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.quiz_id)
            .bind(self.qtype.clone())
            .bind(self.question.clone())
            .bind(self.options.clone())
            .bind(self.answer.clone())
    }
}

/// Per-user result for one quiz. `best_score` is stored as sent, never derived from attempts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(default)]
pub struct Score {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(rename = "UserID", alias = "userid")]
    pub user_id: i64,
    #[serde(rename = "QuizID", alias = "quizid")]
    pub quiz_id: i64,
    #[serde(rename = "Attempts", alias = "attempts")]
    pub attempts: i64,
    #[serde(rename = "BestScore", alias = "bestscore")]
    pub best_score: i64,
}

impl Score {
    pub const USER_ID: &'static str = "user_id";
}

impl Record for Score {
    const KIND: &'static str = "score";
    const TABLE: &'static str = "scores";
    const COLUMNS: &'static [Column] = &[
        Column::new(Score::USER_ID, INTEGER),
        Column::new("quiz_id", INTEGER),
        Column::new("attempts", INTEGER),
        Column::new("best_score", INTEGER),
    ];

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.user_id)
            .bind(self.quiz_id)
            .bind(self.attempts)
            .bind(self.best_score)
    }
}
