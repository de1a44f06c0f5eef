use crate::SharedStore;
use crate::errors::AppError;
use crate::model::course::{
    Course, CourseChangeset, LessonChangeset, LessonCreatedResponse, LessonDetail, NewCourse, Node,
    SubcategoryCreatedResponse,
};
use crate::payloads::course::{
    AddLessonPayload, AddSubcategoryPayload, CreateCoursePayload, GetNodeParams, ListCoursesParams,
    UpdateCoursePayload, UpdateLessonPayload,
};
use crate::response::ApiResponse;
use crate::tree;
use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;
use tracing::log::{debug, info};

/// Creates a new draft course.
///
/// Request Body: `CreateCoursePayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `Course`: the newly created course with its generated id (201 Created).
/// * `400 Bad Request`: If the title is empty.
#[instrument(skip(store, payload))]
pub async fn create_course(
    State(store): State<SharedStore>,
    Json(payload): Json<CreateCoursePayload>,
) -> Result<ApiResponse<Course>, AppError> {
    info!("Creating course titled '{}'", payload.title);
    debug!("Create course payload: {:?}", payload);

    let new_course = NewCourse {
        title: payload.title,
        descriptions: payload.descriptions,
        language: payload.language,
        level: payload.level,
        tags: payload.tags,
        category: payload.category,
        price: payload.price,
        currency: payload.currency,
        settings: payload.settings,
        structure: payload.structure,
    };

    let course = store.write().await.add_course(new_course)?;

    info!("Successfully created course with id: {}", course.id);
    Ok(ApiResponse::created(course))
}

/// Lists courses, optionally filtered by status and/or language.
///
/// Query Parameters:
/// * `status`: Optional course status (`draft`, `pending`, `live`).
/// * `language`: Optional taught-language filter.
///
/// Returns (wrapped in `ApiResponse`)
/// * `Vec<Course>`: Courses matching the filters (200 OK).
#[instrument(skip(store, params))]
pub async fn list_courses(
    State(store): State<SharedStore>,
    Query(params): Query<ListCoursesParams>,
) -> Result<ApiResponse<Vec<Course>>, AppError> {
    info!(
        "Listing courses. Filters: status={:?}, language={:?}",
        params.status, params.language
    );

    let store = store.read().await;
    let courses: Vec<Course> = store
        .courses()
        .iter()
        .filter(|course| params.status.is_none_or(|status| course.status == status))
        .filter(|course| {
            params
                .language
                .as_deref()
                .is_none_or(|language| course.language == language)
        })
        .cloned()
        .collect();

    info!("Successfully listed {} courses", courses.len());
    Ok(ApiResponse::ok(courses))
}

/// Retrieves a single course by id, including its full structure tree.
///
/// Returns (wrapped in `ApiResponse`)
/// * `Course`: The course (200 OK).
/// * `404 Not Found`: If the course id does not exist.
#[instrument(skip(store))]
pub async fn get_course(
    State(store): State<SharedStore>,
    Path(course_id): Path<String>,
) -> Result<ApiResponse<Course>, AppError> {
    info!("Fetching course with id: {}", course_id);

    let store = store.read().await;
    let course = store.get_course(&course_id)?.clone();

    info!("Successfully fetched course with id: {}", course_id);
    Ok(ApiResponse::ok(course))
}

/// Shallow-merges the supplied fields into a course and refreshes its
/// `updated_at`. A supplied `structure` replaces the tree wholesale.
///
/// Request Body: `UpdateCoursePayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `Course`: The updated course (200 OK).
/// * `400 Bad Request`: If a supplied title is empty.
/// * `404 Not Found`: If the course id does not exist.
/// * `409 Conflict`: If `expected_version` does not match the stored version.
#[instrument(skip(store, payload))]
pub async fn update_course(
    State(store): State<SharedStore>,
    Json(payload): Json<UpdateCoursePayload>,
) -> Result<ApiResponse<Course>, AppError> {
    let course_id = payload.course_id;
    info!("Updating course with id: {}", course_id);

    let changes = CourseChangeset {
        title: payload.title,
        descriptions: payload.descriptions,
        language: payload.language,
        level: payload.level,
        tags: payload.tags,
        category: payload.category,
        status: payload.status,
        price: payload.price,
        currency: payload.currency,
        settings: payload.settings,
        structure: payload.structure,
    };

    let course = store
        .write()
        .await
        .update_course(&course_id, payload.expected_version, changes)?;

    info!(
        "Successfully updated course {} to version {}",
        course_id, course.version
    );
    Ok(ApiResponse::ok(course))
}

/// Inserts a new subcategory into a course's structure tree.
///
/// Request Body: `AddSubcategoryPayload`. A `null`/absent `parent_id`
/// appends the subcategory at the root of the tree.
///
/// Returns (wrapped in `ApiResponse`)
/// * `SubcategoryCreatedResponse`: The generated node id (201 Created).
/// * `400 Bad Request`: If the title is empty.
/// * `404 Not Found`: If the course or the parent node does not exist.
/// * `422 Unprocessable Entity`: If the parent node is a lesson.
#[instrument(skip(store, payload))]
pub async fn add_subcategory(
    State(store): State<SharedStore>,
    Json(payload): Json<AddSubcategoryPayload>,
) -> Result<ApiResponse<SubcategoryCreatedResponse>, AppError> {
    info!(
        "Adding subcategory '{}' to course {} under parent {:?}",
        payload.title, payload.course_id, payload.parent_id
    );

    let subcategory = store.write().await.add_subcategory(
        &payload.course_id,
        payload.parent_id.as_deref(),
        &payload.title,
    )?;

    info!(
        "Successfully added subcategory {} to course {}",
        subcategory.id, payload.course_id
    );
    Ok(ApiResponse::created(SubcategoryCreatedResponse {
        node_id: subcategory.id,
    }))
}

/// Inserts a new draft lesson into a course's structure tree.
///
/// Request Body: `AddLessonPayload`. A `null`/absent `parent_id` appends
/// the lesson at the root of the tree.
///
/// Returns (wrapped in `ApiResponse`)
/// * `LessonCreatedResponse`: The generated node and lesson ids (201 Created).
/// * `400 Bad Request`: If the title is empty.
/// * `404 Not Found`: If the course or the parent node does not exist.
/// * `422 Unprocessable Entity`: If the parent node is a lesson.
#[instrument(skip(store, payload))]
pub async fn add_lesson(
    State(store): State<SharedStore>,
    Json(payload): Json<AddLessonPayload>,
) -> Result<ApiResponse<LessonCreatedResponse>, AppError> {
    info!(
        "Adding lesson '{}' to course {} under parent {:?}",
        payload.title, payload.course_id, payload.parent_id
    );
    debug!("Add lesson payload: {:?}", payload);

    let lesson = store.write().await.add_lesson(
        &payload.course_id,
        payload.parent_id.as_deref(),
        &payload.title,
        payload.visibility,
        payload.blocks,
    )?;

    info!(
        "Successfully added lesson node {} to course {}",
        lesson.id, payload.course_id
    );
    Ok(ApiResponse::created(LessonCreatedResponse {
        node_id: lesson.id,
        lesson_id: lesson.lesson.id,
    }))
}

/// Locates a lesson anywhere in the course tree and merges the supplied
/// fields into its detail, bumping the lesson version and `last_modified`.
///
/// Request Body: `UpdateLessonPayload`
///
/// Returns (wrapped in `ApiResponse`)
/// * `LessonDetail`: The updated lesson detail (200 OK).
/// * `400 Bad Request`: If a supplied title is empty.
/// * `404 Not Found`: If the course or the lesson does not exist.
#[instrument(skip(store, payload))]
pub async fn update_lesson(
    State(store): State<SharedStore>,
    Json(payload): Json<UpdateLessonPayload>,
) -> Result<ApiResponse<LessonDetail>, AppError> {
    info!(
        "Updating lesson {} in course {}",
        payload.lesson_id, payload.course_id
    );
    debug!("Update lesson payload: {:?}", payload);

    let changes = LessonChangeset {
        title: payload.title,
        status: payload.status,
        visibility: payload.visibility,
        blocks: payload.blocks,
    };

    let detail =
        store
            .write()
            .await
            .update_lesson(&payload.course_id, &payload.lesson_id, changes)?;

    info!(
        "Successfully updated lesson {} to version {}",
        payload.lesson_id, detail.version
    );
    Ok(ApiResponse::ok(detail))
}

/// Retrieves a single node (subcategory or lesson) from a course tree by id.
///
/// Query Parameters:
/// * `course_id`: The owning course.
/// * `node_id`: The node to locate (pre-order, first match).
///
/// Returns (wrapped in `ApiResponse`)
/// * `Node`: The matching node with its subtree (200 OK).
/// * `404 Not Found`: If the course or the node does not exist.
#[instrument(skip(store, params))]
pub async fn get_node(
    State(store): State<SharedStore>,
    Query(params): Query<GetNodeParams>,
) -> Result<ApiResponse<Node>, AppError> {
    info!(
        "Fetching node {} from course {}",
        params.node_id, params.course_id
    );

    let store = store.read().await;
    let course = store.get_course(&params.course_id)?;
    let node = tree::find_node(&course.structure, &params.node_id).ok_or_else(|| {
        AppError::NotFound(format!(
            "Node with id {} not found in course {}.",
            params.node_id, params.course_id
        ))
    })?;

    info!(
        "Successfully fetched node {} from course {}",
        params.node_id, params.course_id
    );
    Ok(ApiResponse::ok(node.as_ref().clone()))
}
