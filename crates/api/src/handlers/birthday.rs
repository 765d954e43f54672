//! Handlers for the `/birthdays` resource.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use birthday_core::birthday::ensure_author;
use birthday_core::countdown::{days_until_next_birthday, next_birthday};
use birthday_core::error::CoreError;
use birthday_core::pagination::{resolve_page, PER_PAGE};
use birthday_core::types::DbId;
use birthday_db::models::birthday::{Birthday, CreateBirthday, UpdateBirthday};
use birthday_db::models::congratulation::Congratulation;
use birthday_db::models::tag::Tag;
use birthday_db::repositories::{BirthdayRepo, CongratulationRepo, TagRepo};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::media::remove_media_file;
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// An entry together with its tags.
#[derive(Debug, Serialize)]
pub struct BirthdayWithTags {
    #[serde(flatten)]
    pub birthday: Birthday,
    pub tags: Vec<Tag>,
}

/// Detail view of an entry.
#[derive(Debug, Serialize)]
pub struct BirthdayDetail {
    #[serde(flatten)]
    pub birthday: Birthday,
    pub tags: Vec<Tag>,
    pub congratulations: Vec<Congratulation>,
    pub next_birthday: NaiveDate,
    /// Days until the next occurrence; `0` means the birthday is today.
    pub birthday_countdown: i64,
}

/// Load an entry or fail with 404.
pub(crate) async fn load_birthday(pool: &PgPool, id: DbId) -> AppResult<Birthday> {
    BirthdayRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Birthday",
            id,
        }))
}

/// GET /api/v1/birthdays?page=N
///
/// Entries ordered by ID, [`PER_PAGE`] per page. Pages past the end are 404.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let total = BirthdayRepo::count(&state.pool).await?;
    let window = resolve_page(params.page, total, PER_PAGE)?;

    let birthdays = BirthdayRepo::list_page(&state.pool, window.per_page, window.offset()).await?;
    let ids: Vec<DbId> = birthdays.iter().map(|b| b.id).collect();

    let mut tags_by_birthday: HashMap<DbId, Vec<Tag>> = HashMap::new();
    for row in TagRepo::list_for_birthdays(&state.pool, &ids).await? {
        tags_by_birthday
            .entry(row.birthday_id)
            .or_default()
            .push(row.into());
    }

    let data: Vec<BirthdayWithTags> = birthdays
        .into_iter()
        .map(|birthday| BirthdayWithTags {
            tags: tags_by_birthday.remove(&birthday.id).unwrap_or_default(),
            birthday,
        })
        .collect();

    Ok(Json(PageResponse::new(data, window)))
}

/// POST /api/v1/birthdays
///
/// The requesting user becomes the author.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateBirthday>,
) -> AppResult<impl IntoResponse> {
    let input = input.trimmed();
    input.validate()?;

    let birthday = BirthdayRepo::create(&state.pool, Some(auth.user_id), &input).await?;
    let tags = TagRepo::list_for_birthday(&state.pool, birthday.id).await?;

    tracing::info!(
        birthday_id = birthday.id,
        user_id = auth.user_id,
        "Birthday created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: BirthdayWithTags { birthday, tags },
        }),
    ))
}

/// GET /api/v1/birthdays/{id}
///
/// Entry with tags, congratulations, and the countdown to its next occurrence.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let birthday = load_birthday(&state.pool, id).await?;
    let tags = TagRepo::list_for_birthday(&state.pool, id).await?;
    let congratulations = CongratulationRepo::list_for_birthday(&state.pool, id).await?;

    let today = Utc::now().date_naive();
    let detail = BirthdayDetail {
        next_birthday: next_birthday(birthday.birthday, today),
        birthday_countdown: days_until_next_birthday(birthday.birthday, today),
        birthday,
        tags,
        congratulations,
    };

    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/birthdays/{id}
///
/// Author only.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBirthday>,
) -> AppResult<impl IntoResponse> {
    let existing = load_birthday(&state.pool, id).await?;
    ensure_author(existing.author_id, auth.user_id)?;
    let input = input.trimmed();
    input.validate()?;

    let birthday = BirthdayRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Birthday",
            id,
        }))?;
    let tags = TagRepo::list_for_birthday(&state.pool, id).await?;

    tracing::info!(birthday_id = id, user_id = auth.user_id, "Birthday updated");

    Ok(Json(DataResponse {
        data: BirthdayWithTags { birthday, tags },
    }))
}

/// DELETE /api/v1/birthdays/{id}
///
/// Author only. Congratulations and tag links cascade; the stored photo
/// file is removed.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = load_birthday(&state.pool, id).await?;
    ensure_author(existing.author_id, auth.user_id)?;

    let congratulations = CongratulationRepo::count_for_birthday(&state.pool, id).await?;
    if !BirthdayRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Birthday",
            id,
        }));
    }

    if let Some(photo) = existing.photo.as_deref() {
        remove_media_file(&state.config.media_root, photo).await;
    }

    tracing::info!(
        birthday_id = id,
        user_id = auth.user_id,
        congratulations,
        "Birthday deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
