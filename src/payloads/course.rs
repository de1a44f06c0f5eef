use crate::model::block::Block;
use crate::model::course::{
    CourseDescriptions, CourseSettings, CourseStatus, LessonStatus, Node, Visibility,
};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateCoursePayload {
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
    #[serde(default)]
    pub price: BigDecimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub settings: CourseSettings,
    #[serde(default)]
    pub structure: Vec<Arc<Node>>,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateCoursePayload {
    pub course_id: String,
    /// When set, the update only applies if the stored course version
    /// matches; a stale value yields 409 Conflict.
    pub expected_version: Option<i64>,

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

#[derive(Serialize, Deserialize, Debug)]
pub struct ListCoursesParams {
    pub status: Option<CourseStatus>,
    pub language: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AddSubcategoryPayload {
    pub course_id: String,
    /// `None` appends the subcategory at the root of the structure tree.
    pub parent_id: Option<String>,
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AddLessonPayload {
    pub course_id: String,
    /// `None` appends the lesson at the root of the structure tree.
    pub parent_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateLessonPayload {
    pub course_id: String,
    pub lesson_id: String,

    pub title: Option<String>,
    pub status: Option<LessonStatus>,
    pub visibility: Option<Visibility>,
    pub blocks: Option<Vec<Block>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GetNodeParams {
    pub course_id: String,
    pub node_id: String,
}
