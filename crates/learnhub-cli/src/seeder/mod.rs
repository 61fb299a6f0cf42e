//! Fake data for development databases.
//!
//! Rows are generated in parallel with `rayon`, then inserted through the
//! repositories. Titles that collide with existing rows are skipped.

mod generate;

use std::time::Instant;

use anyhow::Context;
use learnhub_core::hash_password_with_cost;
use learnhub_db::{
    CategoryRepository, CourseRepository, PgCategoryRepository, PgCourseRepository,
    PgRoleRepository, PgUserRepository, RoleRepository, UserRepository,
};
use learnhub_models::{NewCourse, NewUser, RoleName};
use sqlx::PgPool;

pub use generate::{TeacherSeed, generate_course_titles, generate_teachers, generate_titles};

/// Seeded teachers share this password.
pub const SEED_PASSWORD: &str = "password123";

#[derive(Debug, Clone, Copy)]
pub struct SeedConfig {
    pub categories: usize,
    pub teachers: usize,
    pub courses: usize,
}

#[derive(Debug, Default)]
pub struct SeedReport {
    pub categories: usize,
    pub teachers: usize,
    pub courses: usize,
    pub skipped: usize,
}

pub async fn seed_all(
    pool: &PgPool,
    config: SeedConfig,
    bcrypt_cost: u32,
) -> anyhow::Result<SeedReport> {
    let start_time = Instant::now();
    let mut report = SeedReport::default();

    let categories = PgCategoryRepository::new(pool.clone());
    let courses = PgCourseRepository::new(pool.clone());
    let users = PgUserRepository::new(pool.clone());
    let roles = PgRoleRepository::new(pool.clone());

    println!("🗂  Seeding {} categories...", config.categories);
    let mut category_ids = Vec::with_capacity(config.categories);
    for title in generate_titles(config.categories) {
        match categories.create(&title).await {
            Ok(category) => category_ids.push(category.id),
            Err(e) if e.is_unique_violation() => report.skipped += 1,
            Err(e) => return Err(e.into()),
        }
    }
    report.categories = category_ids.len();

    println!("👩‍🏫 Seeding {} teachers...", config.teachers);
    let teacher_role = roles
        .find_by_name(RoleName::Teacher.as_str())
        .await?
        .context("teacher role is missing, run `migrate` first")?;

    let password_hash = hash_password_with_cost(SEED_PASSWORD, bcrypt_cost)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e.error))?;

    let mut teacher_ids = Vec::with_capacity(config.teachers);
    for seed in generate_teachers(config.teachers) {
        let created = users
            .create(NewUser {
                login: seed.login,
                email: seed.email,
                password: password_hash.clone(),
                role: teacher_role.id,
                first_name: Some(seed.first_name),
                last_name: Some(seed.last_name),
            })
            .await;

        match created {
            Ok(user) => teacher_ids.push(user.id),
            Err(e) if e.is_unique_violation() => report.skipped += 1,
            Err(e) => return Err(e.into()),
        }
    }
    report.teachers = teacher_ids.len();

    if category_ids.is_empty() || teacher_ids.is_empty() {
        println!("   ⚠ No categories or teachers available, skipping courses");
        return Ok(report);
    }

    println!("📚 Seeding {} courses...", config.courses);
    for (idx, title) in generate_course_titles(config.courses).into_iter().enumerate() {
        let course = NewCourse {
            title,
            description: None,
            category_id: category_ids[idx % category_ids.len()],
            teacher_id: teacher_ids[idx % teacher_ids.len()],
        };

        match courses.create(course).await {
            Ok(_) => report.courses += 1,
            Err(e) if e.is_unique_violation() => report.skipped += 1,
            Err(e) => return Err(e.into()),
        }
    }

    println!(
        "   ✓ Seeded {} categories, {} teachers, {} courses in {:?} ({} skipped)",
        report.categories,
        report.teachers,
        report.courses,
        start_time.elapsed(),
        report.skipped
    );

    Ok(report)
}
