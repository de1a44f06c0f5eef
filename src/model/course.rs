use crate::model::block::Block;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Marketplace lifecycle of a course.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Draft,
    Pending,
    Live,
}

/// Publication state of a single lesson, independent of its course.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    Draft,
    Live,
}

/// Who can open a lesson once its course is live.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Enrolled,
    Hidden,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDescriptions {
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub full: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseSettings {
    #[serde(default)]
    pub enrollment_limit: Option<u32>,
    #[serde(default)]
    pub certificate_enabled: bool,
    #[serde(default)]
    pub drip_content: bool,
}

/// Top-level sellable unit of instruction. Owns its `structure` tree
/// exclusively; `version` doubles as the optimistic-concurrency token
/// checked by `update_course`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub descriptions: CourseDescriptions,
    pub language: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
    pub status: CourseStatus,
    pub price: BigDecimal,
    pub currency: String,
    pub sales: i64,
    pub rating: f64,
    #[serde(default)]
    pub structure: Vec<Arc<Node>>,
    #[serde(default)]
    pub settings: CourseSettings,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A node of the course structure tree. Serialized with a `type`
/// discriminant (`"subcategory"` / `"lesson"`), matching the shape the
/// portal clients exchange. Children are shared via `Arc` so tree updates
/// can reuse untouched subtrees.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Subcategory(Subcategory),
    Lesson(Lesson),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Subcategory(sub) => &sub.id,
            Node::Lesson(lesson) => &lesson.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Node::Subcategory(sub) => &sub.title,
            Node::Lesson(lesson) => &lesson.title,
        }
    }

    /// Lessons are leaves; only subcategories may hold children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Lesson(_))
    }
}

/// Named grouping node; children may themselves be subcategories, so the
/// structure forms a tree rather than a fixed two-level hierarchy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subcategory {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub children: Vec<Arc<Node>>,
}

/// Leaf wrapper around a [`LessonDetail`]. The wrapper title mirrors the
/// detail title so tree listings never need to descend into the detail.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub lesson: LessonDetail,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LessonDetail {
    pub id: String,
    pub title: String,
    pub status: LessonStatus,
    #[serde(default)]
    pub blocks: Vec<Block>,
    pub visibility: Visibility,
    pub version: i64,
    pub last_modified: DateTime<Utc>,
}

/// Course payload as accepted by `add_course`; id, status, sales, rating
/// and the timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub descriptions: CourseDescriptions,
    pub language: String,
    pub level: String,
    pub tags: Vec<String>,
    pub category: String,
    pub price: BigDecimal,
    pub currency: String,
    pub settings: CourseSettings,
    pub structure: Vec<Arc<Node>>,
}

/// Shallow changeset for `update_course`. A supplied `structure` replaces
/// the tree wholesale; nested edits go through the tree operations instead.
#[derive(Debug, Default, Clone)]
pub struct CourseChangeset {
    pub title: Option<String>,
    pub descriptions: Option<CourseDescriptions>,
    pub language: Option<String>,
    pub level: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub status: Option<CourseStatus>,
    pub price: Option<BigDecimal>,
    pub currency: Option<String>,
    pub settings: Option<CourseSettings>,
    pub structure: Option<Vec<Arc<Node>>>,
}

/// Changeset merged into a lesson's [`LessonDetail`] by `update_lesson`.
#[derive(Debug, Default, Clone)]
pub struct LessonChangeset {
    pub title: Option<String>,
    pub status: Option<LessonStatus>,
    pub visibility: Option<Visibility>,
    pub blocks: Option<Vec<Block>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SubcategoryCreatedResponse {
    pub node_id: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LessonCreatedResponse {
    pub node_id: String,
    pub lesson_id: String,
}
