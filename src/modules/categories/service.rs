use tracing::{info, instrument};

use learnhub_core::AppError;
use learnhub_core::messages::{category, common};
use learnhub_models::{Category, CategoryListItem, CreateCategoryDto, UpdateCategoryDto};

use crate::state::AppState;

pub struct CategoryService;

impl CategoryService {
    #[instrument(skip(state))]
    pub async fn list(state: &AppState) -> Result<Vec<CategoryListItem>, AppError> {
        let categories = state
            .categories
            .list()
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?;

        Ok(categories.into_iter().map(CategoryListItem::from).collect())
    }

    #[instrument(skip(state))]
    pub async fn get(state: &AppState, id: i32) -> Result<Category, AppError> {
        state
            .categories
            .find_by_id(id)
            .await
            .map_err(|e| AppError::unexpected(common::UNEXPECTED_ERROR_PREFIX, e))?
            .ok_or_else(|| AppError::not_found(category::NO_CATEGORY))
    }

    #[instrument(skip(state))]
    pub async fn create(state: &AppState, dto: CreateCategoryDto) -> Result<Category, AppError> {
        let created = state.categories.create(&dto.title).await.map_err(|e| {
            if e.is_unique_violation() {
                return AppError::bad_request(category::UNIQUE_FIELDS);
            }
            AppError::unexpected(category::UNABLE_CREATE_CATEGORY, e)
        })?;

        info!(category.id = created.id, "Category created");
        Ok(created)
    }

    #[instrument(skip(state))]
    pub async fn update(state: &AppState, dto: UpdateCategoryDto) -> Result<Category, AppError> {
        state
            .categories
            .update(dto.id, &dto.title)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    return AppError::bad_request(category::UNIQUE_FIELDS);
                }
                AppError::unexpected(category::UNABLE_CHANGE_CATEGORY, e)
            })?
            .ok_or_else(|| AppError::not_found(category::NO_CATEGORY))
    }

    /// Succeeds whether or not the row existed.
    #[instrument(skip(state))]
    pub async fn delete(state: &AppState, id: i32) -> Result<(), AppError> {
        let removed = state
            .categories
            .delete(id)
            .await
            .map_err(|e| AppError::unexpected(category::UNABLE_REMOVE_CATEGORY, e))?;

        info!(category.id = id, removed, "Category delete processed");
        Ok(())
    }
}
