//! Wire data model for the SkillBridge REST API
//!
//! Field names follow the server's JSON (camelCase); enum values use the
//! server's SCREAMING_SNAKE identifiers. The client never invents state:
//! learning status is derived server-side from the presence of outcomes.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Learning item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Technical,
    ProfessionalSkills,
    NewLearnings,
    Economics,
    WorldTrade,
    Upsc,
    BankExam,
    Other,
}

impl Category {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Category::Technical => "Technical",
            Category::ProfessionalSkills => "Professional Skills",
            Category::NewLearnings => "New Learnings",
            Category::Economics => "Economics",
            Category::WorldTrade => "World Trade",
            Category::Upsc => "UPSC",
            Category::BankExam => "Bank Exam",
            Category::Other => "Other",
        }
    }
}

/// Learning item status, inferred server-side from outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LearningStatus {
    Pending,
    Applied,
}

impl LearningStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LearningStatus::Pending => "Pending",
            LearningStatus::Applied => "Applied",
        }
    }
}

/// Kind of real-world action recorded against a learning item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeType {
    Project,
    Task,
    Blog,
    Work,
}

impl OutcomeType {
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeType::Project => "Project",
            OutcomeType::Task => "Task",
            OutcomeType::Blog => "Blog",
            OutcomeType::Work => "Work",
        }
    }
}

/// Authentication mode for the unified /auth/login endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthMode {
    Login,
    Signup,
}

/// A topic or skill the user has started studying
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningItem {
    pub id: i64,
    pub title: String,
    pub category: Option<Category>,
    pub status: LearningStatus,
    pub created_at: DateTime<Utc>,
}

/// A concrete action taken to practice a learning item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedOutcome {
    pub id: i64,
    pub learning_id: i64,
    pub description: String,
    #[serde(rename = "type")]
    pub outcome_type: OutcomeType,
    pub created_at: DateTime<Utc>,
}

/// Aggregate counts returned by GET /dashboard; derived, never cached
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_learning: i64,
    pub applied_count: i64,
    pub pending_count: i64,
}

/// Body for POST /auth/login
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
    pub mode: AuthMode,
}

/// Success payload of POST /auth/login
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Body for creating or updating a learning item
#[derive(Debug, Clone, Serialize)]
pub struct LearningPayload {
    pub title: String,
    pub category: Category,
}

/// Body for creating an applied outcome
#[derive(Debug, Clone, Serialize)]
pub struct OutcomePayload {
    pub description: String,
    #[serde(rename = "type")]
    pub outcome_type: OutcomeType,
}
