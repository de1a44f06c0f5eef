//! In-memory content store: the single owner of all courses and library
//! assets. Every mutation goes through the typed operations here; there is
//! no hidden global state and no persistence layer.

use crate::errors::StoreError;
use crate::model::block::Block;
use crate::model::course::{
    Course, CourseChangeset, CourseStatus, Lesson, LessonChangeset, LessonDetail, LessonStatus,
    NewCourse, Node, Subcategory, Visibility,
};
use crate::model::library::{LibraryItem, NewLibraryItem};
use crate::tree;
use anyhow::Context;
use chrono::Utc;
use serde::Deserialize;
use std::path::Path;
use uuid::Uuid;

/// Fixture file layout accepted by [`ContentStore::from_fixture_file`].
#[derive(Deserialize, Debug, Default)]
pub struct Fixtures {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub library: Vec<LibraryItem>,
}

#[derive(Debug, Default)]
pub struct ContentStore {
    courses: Vec<Course>,
    library: Vec<LibraryItem>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        ContentStore {
            courses: fixtures.courses,
            library: fixtures.library,
        }
    }

    pub fn from_fixture_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture file {}", path.display()))?;
        let fixtures: Fixtures = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse fixture file {}", path.display()))?;
        Ok(Self::from_fixtures(fixtures))
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn library(&self) -> &[LibraryItem] {
        &self.library
    }

    pub fn get_course(&self, course_id: &str) -> Result<&Course, StoreError> {
        self.courses
            .iter()
            .find(|course| course.id == course_id)
            .ok_or_else(|| StoreError::NotFound(format!("Course with id {} not found.", course_id)))
    }

    pub fn get_library_item(&self, item_id: i64) -> Result<&LibraryItem, StoreError> {
        self.library
            .iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| {
                StoreError::NotFound(format!("Library item with id {} not found.", item_id))
            })
    }

    /// Creates a draft course with a fresh id, zeroed marketplace stats and
    /// freshly stamped timestamps.
    pub fn add_course(&mut self, new_course: NewCourse) -> Result<Course, StoreError> {
        require_title(&new_course.title, "course")?;

        let now = Utc::now();
        let course = Course {
            id: Uuid::new_v4().to_string(),
            title: new_course.title,
            descriptions: new_course.descriptions,
            language: new_course.language,
            level: new_course.level,
            tags: new_course.tags,
            category: new_course.category,
            status: CourseStatus::Draft,
            price: new_course.price,
            currency: new_course.currency,
            sales: 0,
            rating: 0.0,
            structure: new_course.structure,
            settings: new_course.settings,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        self.courses.push(course.clone());
        Ok(course)
    }

    /// Shallow-merges `changes` into the course and refreshes `updated_at`.
    /// When `expected_version` is supplied it must match the stored version,
    /// otherwise the update fails with [`StoreError::Conflict`].
    pub fn update_course(
        &mut self,
        course_id: &str,
        expected_version: Option<i64>,
        changes: CourseChangeset,
    ) -> Result<Course, StoreError> {
        let course = self.course_mut(course_id)?;

        if let Some(expected) = expected_version {
            if expected != course.version {
                return Err(StoreError::Conflict(format!(
                    "Course {} is at version {} but the update expected version {}.",
                    course_id, course.version, expected
                )));
            }
        }

        if let Some(title) = changes.title {
            require_title(&title, "course")?;
            course.title = title;
        }
        if let Some(descriptions) = changes.descriptions {
            course.descriptions = descriptions;
        }
        if let Some(language) = changes.language {
            course.language = language;
        }
        if let Some(level) = changes.level {
            course.level = level;
        }
        if let Some(tags) = changes.tags {
            course.tags = tags;
        }
        if let Some(category) = changes.category {
            course.category = category;
        }
        if let Some(status) = changes.status {
            course.status = status;
        }
        if let Some(price) = changes.price {
            course.price = price;
        }
        if let Some(currency) = changes.currency {
            course.currency = currency;
        }
        if let Some(settings) = changes.settings {
            course.settings = settings;
        }
        // The tree is replaced wholesale; nested edits go through
        // add_subcategory / add_lesson / update_lesson instead.
        if let Some(structure) = changes.structure {
            course.structure = structure;
        }

        touch(course);
        Ok(course.clone())
    }

    /// Inserts a fresh subcategory under `parent_id` within the course tree,
    /// or at the root of the tree when `parent_id` is `None`.
    pub fn add_subcategory(
        &mut self,
        course_id: &str,
        parent_id: Option<&str>,
        title: &str,
    ) -> Result<Subcategory, StoreError> {
        require_title(title, "subcategory")?;

        let subcategory = Subcategory {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            children: Vec::new(),
        };

        let course = self.course_mut(course_id)?;
        course.structure = tree::insert_child(
            &course.structure,
            parent_id,
            Node::Subcategory(subcategory.clone()),
        )?;
        touch(course);
        Ok(subcategory)
    }

    /// Inserts a fresh draft lesson under `parent_id`, or at the root of the
    /// tree when `parent_id` is `None`.
    pub fn add_lesson(
        &mut self,
        course_id: &str,
        parent_id: Option<&str>,
        title: &str,
        visibility: Visibility,
        blocks: Vec<Block>,
    ) -> Result<Lesson, StoreError> {
        require_title(title, "lesson")?;

        let now = Utc::now();
        let lesson = Lesson {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            lesson: LessonDetail {
                id: Uuid::new_v4().to_string(),
                title: title.to_string(),
                status: LessonStatus::Draft,
                blocks,
                visibility,
                version: 1,
                last_modified: now,
            },
        };

        let course = self.course_mut(course_id)?;
        course.structure =
            tree::insert_child(&course.structure, parent_id, Node::Lesson(lesson.clone()))?;
        touch(course);
        Ok(lesson)
    }

    /// Locates the lesson anywhere in the course tree and merges `changes`
    /// into its detail. Bumps the detail version, stamps `last_modified` and
    /// refreshes the owning course.
    pub fn update_lesson(
        &mut self,
        course_id: &str,
        lesson_id: &str,
        changes: LessonChangeset,
    ) -> Result<LessonDetail, StoreError> {
        let course = self.course_mut(course_id)?;

        let updated = match tree::find_node(&course.structure, lesson_id).map(|node| node.as_ref())
        {
            Some(Node::Lesson(lesson)) => {
                let mut updated = lesson.clone();
                if let Some(title) = changes.title {
                    require_title(&title, "lesson")?;
                    // Wrapper title mirrors the detail title.
                    updated.title = title.clone();
                    updated.lesson.title = title;
                }
                if let Some(status) = changes.status {
                    updated.lesson.status = status;
                }
                if let Some(visibility) = changes.visibility {
                    updated.lesson.visibility = visibility;
                }
                if let Some(blocks) = changes.blocks {
                    updated.lesson.blocks = blocks;
                }
                updated.lesson.version += 1;
                updated.lesson.last_modified = Utc::now();
                updated
            }
            // A subcategory by that id is just as much a miss as no node.
            _ => {
                return Err(StoreError::NotFound(format!(
                    "Lesson with id {} not found in course {}.",
                    lesson_id, course_id
                )));
            }
        };

        course.structure = tree::update_node(&course.structure, lesson_id, |_| {
            Node::Lesson(updated.clone())
        })?;
        touch(course);
        Ok(updated.lesson)
    }

    /// Appends an asset with the next integer id (`max(existing ids) + 1`),
    /// a fresh upload date and an empty `used_in` list.
    pub fn add_library_item(&mut self, new_item: NewLibraryItem) -> Result<LibraryItem, StoreError> {
        if new_item.name.trim().is_empty() {
            return Err(StoreError::Validation(
                "Library item name must not be empty.".to_string(),
            ));
        }

        let next_id = self.library.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let item = LibraryItem {
            id: next_id,
            name: new_item.name,
            kind: new_item.kind,
            size: new_item.size,
            upload_date: Utc::now(),
            category: new_item.category,
            used_in: Vec::new(),
        };
        self.library.push(item.clone());
        Ok(item)
    }

    fn course_mut(&mut self, course_id: &str) -> Result<&mut Course, StoreError> {
        self.courses
            .iter_mut()
            .find(|course| course.id == course_id)
            .ok_or_else(|| StoreError::NotFound(format!("Course with id {} not found.", course_id)))
    }
}

/// Every mutation to a course or its descendants refreshes `updated_at`
/// and advances the concurrency token.
fn touch(course: &mut Course) {
    course.version += 1;
    course.updated_at = Utc::now();
}

fn require_title(title: &str, entity: &str) -> Result<(), StoreError> {
    if title.trim().is_empty() {
        return Err(StoreError::Validation(format!(
            "A {} title must not be empty.",
            entity
        )));
    }
    Ok(())
}
