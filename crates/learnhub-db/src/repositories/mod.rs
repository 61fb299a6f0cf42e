//! Repository traits and their PostgreSQL implementations.

mod categories;
mod courses;
mod materials;
mod roles;
mod tokens;
mod users;

pub use categories::{CategoryRepository, PgCategoryRepository};
pub use courses::{CourseRepository, PgCourseRepository};
pub use materials::{MaterialRepository, PgMaterialRepository};
pub use roles::{PgRoleRepository, RoleRepository};
pub use tokens::{PgTokenRepository, TokenRepository};
pub use users::{PgUserRepository, UserRepository};
