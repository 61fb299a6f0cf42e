use async_trait::async_trait;
use learnhub_models::{Course, CourseChanges, NewCourse};
use sqlx::PgPool;
use tracing::instrument;

use crate::error::DbError;

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Course>, DbError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DbError>;

    async fn create(&self, course: NewCourse) -> Result<Course, DbError>;

    async fn update(&self, id: i32, changes: CourseChanges) -> Result<Option<Course>, DbError>;

    async fn delete(&self, id: i32) -> Result<u64, DbError>;

    /// `false` when the student was already enrolled.
    async fn enroll(&self, course_id: i32, user_id: i32) -> Result<bool, DbError>;

    /// `false` when the student was not enrolled.
    async fn leave(&self, course_id: i32, user_id: i32) -> Result<bool, DbError>;

    async fn is_enrolled(&self, course_id: i32, user_id: i32) -> Result<bool, DbError>;
}

const COURSE_COLUMNS: &str =
    "id, title, description, category_id, teacher_id, created_at, updated_at";

#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn list(&self) -> Result<Vec<Course>, DbError> {
        let sql = format!("SELECT {COURSE_COLUMNS} FROM courses ORDER BY id");
        let courses = sqlx::query_as::<_, Course>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(courses)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DbError> {
        let sql = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1");
        let course = sqlx::query_as::<_, Course>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(course)
    }

    #[instrument(skip(self, course), fields(db.table = "courses"))]
    async fn create(&self, course: NewCourse) -> Result<Course, DbError> {
        let sql = format!(
            "INSERT INTO courses (title, description, category_id, teacher_id) \
             VALUES ($1, $2, $3, $4) RETURNING {COURSE_COLUMNS}"
        );

        let created = sqlx::query_as::<_, Course>(&sql)
            .bind(&course.title)
            .bind(&course.description)
            .bind(course.category_id)
            .bind(course.teacher_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    #[instrument(skip(self, changes), fields(db.table = "courses"))]
    async fn update(&self, id: i32, changes: CourseChanges) -> Result<Option<Course>, DbError> {
        let sql = format!(
            "UPDATE courses SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                category_id = COALESCE($4, category_id), \
                teacher_id = COALESCE($5, teacher_id), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING {COURSE_COLUMNS}"
        );

        let updated = sqlx::query_as::<_, Course>(&sql)
            .bind(id)
            .bind(changes.title)
            .bind(changes.description)
            .bind(changes.category_id)
            .bind(changes.teacher_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    #[instrument(skip(self), fields(db.table = "courses"))]
    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self), fields(db.table = "course_students"))]
    async fn enroll(&self, course_id: i32, user_id: i32) -> Result<bool, DbError> {
        let result = sqlx::query(
            r#"INSERT INTO course_students (course_id, user_id) VALUES ($1, $2)
               ON CONFLICT (course_id, user_id) DO NOTHING"#,
        )
        .bind(course_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self), fields(db.table = "course_students"))]
    async fn leave(&self, course_id: i32, user_id: i32) -> Result<bool, DbError> {
        let result =
            sqlx::query("DELETE FROM course_students WHERE course_id = $1 AND user_id = $2")
                .bind(course_id)
                .bind(user_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn is_enrolled(&self, course_id: i32, user_id: i32) -> Result<bool, DbError> {
        let enrolled = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(
                   SELECT 1 FROM course_students WHERE course_id = $1 AND user_id = $2
               )"#,
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(enrolled)
    }
}
