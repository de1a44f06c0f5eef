use axum::Router;
pub(crate) use axum_test::TestServer;
use bigdecimal::BigDecimal;
use chrono::{TimeZone, Utc};
use lingomarket_content_server::model::block::{
    Block, BlockConfig, BlockContent, McqOption, SpeakingConfig,
};
use lingomarket_content_server::model::course::{
    Course, CourseDescriptions, CourseSettings, CourseStatus, Lesson, LessonDetail, LessonStatus,
    Node, Subcategory, Visibility,
};
use lingomarket_content_server::model::library::{AssetKind, LibraryItem};
use lingomarket_content_server::store::{ContentStore, Fixtures};
use lingomarket_content_server::{SharedStore, init_test_router};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const IELTS_COURSE_ID: &str = "course-ielts";

// test infra setup

pub fn setup_test_environment() -> (TestServer, SharedStore) {
    setup_seeded_environment(Vec::new(), Vec::new())
}

pub fn setup_seeded_environment(
    courses: Vec<Course>,
    library: Vec<LibraryItem>,
) -> (TestServer, SharedStore) {
    let store: SharedStore = Arc::new(RwLock::new(ContentStore::from_fixtures(Fixtures {
        courses,
        library,
    })));
    let app: Router = init_test_router(store.clone());
    let server = TestServer::new(app).expect("Failed to create TestServer");
    (server, store)
}

// fixtures

/// The IELTS course fixture used across tests:
///
/// sub-1 "Task 1: Charts and Graphs"
///   ├─ sub-1a "Describing Trends" (empty)
///   └─ lesson-1 "Line Graph Essentials" (live)
/// sub-2 "Task 2: Essays"
///   └─ lesson-2 "Opinion Essay Structure" (draft)
pub fn ielts_course() -> Course {
    let created = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
    Course {
        id: IELTS_COURSE_ID.to_string(),
        title: "IELTS Academic Writing".to_string(),
        descriptions: CourseDescriptions {
            short: "Band 7+ writing preparation".to_string(),
            full: "A complete preparation course for the IELTS academic writing paper."
                .to_string(),
        },
        language: "en".to_string(),
        level: "B2".to_string(),
        tags: vec!["ielts".to_string(), "writing".to_string()],
        category: "exam-prep".to_string(),
        status: CourseStatus::Live,
        price: BigDecimal::from(49),
        currency: "USD".to_string(),
        sales: 128,
        rating: 4.5,
        structure: vec![
            Arc::new(Node::Subcategory(Subcategory {
                id: "sub-1".to_string(),
                title: "Task 1: Charts and Graphs".to_string(),
                children: vec![
                    Arc::new(Node::Subcategory(Subcategory {
                        id: "sub-1a".to_string(),
                        title: "Describing Trends".to_string(),
                        children: Vec::new(),
                    })),
                    Arc::new(lesson_node(
                        "lesson-1",
                        "Line Graph Essentials",
                        LessonStatus::Live,
                        vec![text_block("block-1", "A line graph shows change over time.")],
                    )),
                ],
            })),
            Arc::new(Node::Subcategory(Subcategory {
                id: "sub-2".to_string(),
                title: "Task 2: Essays".to_string(),
                children: vec![Arc::new(lesson_node(
                    "lesson-2",
                    "Opinion Essay Structure",
                    LessonStatus::Draft,
                    vec![
                        text_block("block-2", "State your opinion in the introduction."),
                        mcq_block("block-3", "Which paragraph states the writer's opinion?"),
                    ],
                ))],
            })),
        ],
        settings: CourseSettings::default(),
        version: 3,
        created_at: created,
        updated_at: created,
    }
}

pub fn draft_course(id: &str, title: &str, language: &str) -> Course {
    let created = Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap();
    Course {
        id: id.to_string(),
        title: title.to_string(),
        descriptions: CourseDescriptions::default(),
        language: language.to_string(),
        level: "A1".to_string(),
        tags: Vec::new(),
        category: "general".to_string(),
        status: CourseStatus::Draft,
        price: BigDecimal::from(0),
        currency: "USD".to_string(),
        sales: 0,
        rating: 0.0,
        structure: Vec::new(),
        settings: CourseSettings::default(),
        version: 1,
        created_at: created,
        updated_at: created,
    }
}

pub fn lesson_node(node_id: &str, title: &str, status: LessonStatus, blocks: Vec<Block>) -> Node {
    Node::Lesson(Lesson {
        id: node_id.to_string(),
        title: title.to_string(),
        lesson: LessonDetail {
            id: format!("{node_id}-detail"),
            title: title.to_string(),
            status,
            blocks,
            visibility: Visibility::Enrolled,
            version: 1,
            last_modified: Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap(),
        },
    })
}

pub fn text_block(id: &str, body: &str) -> Block {
    Block {
        id: id.to_string(),
        content: BlockContent::Text {
            body: body.to_string(),
        },
        config: BlockConfig::default(),
    }
}

pub fn mcq_block(id: &str, prompt: &str) -> Block {
    Block {
        id: id.to_string(),
        content: BlockContent::McqSingle {
            prompt: prompt.to_string(),
            options: vec![
                McqOption {
                    text: "The first one".to_string(),
                    correct: true,
                },
                McqOption {
                    text: "The last one".to_string(),
                    correct: false,
                },
            ],
        },
        config: BlockConfig {
            timer_seconds: Some(60),
            max_attempts: Some(2),
            points: Some(10),
            ai_enabled: false,
            speaking: None,
        },
    }
}

pub fn speaking_block(id: &str, prompt: &str) -> Block {
    Block {
        id: id.to_string(),
        content: BlockContent::CueCardSpeaking {
            prompt: prompt.to_string(),
            cue_points: vec![
                "what it is".to_string(),
                "why it matters".to_string(),
            ],
            sample_answer: None,
        },
        config: BlockConfig {
            timer_seconds: Some(120),
            max_attempts: None,
            points: None,
            ai_enabled: true,
            speaking: Some(SpeakingConfig {
                min_seconds: 60,
                max_seconds: 120,
                auto_advance: true,
            }),
        },
    }
}

pub fn library_item(id: i64, name: &str, kind: AssetKind, category: &str) -> LibraryItem {
    LibraryItem {
        id,
        name: name.to_string(),
        kind,
        size: 1024,
        upload_date: Utc.with_ymd_and_hms(2025, 1, 5, 8, 0, 0).unwrap(),
        category: category.to_string(),
        used_in: Vec::new(),
    }
}
