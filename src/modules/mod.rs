pub mod auth;
pub mod categories;
pub mod courses;
pub mod materials;
pub mod roles;
pub mod users;
