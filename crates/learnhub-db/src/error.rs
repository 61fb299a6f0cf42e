use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("duplicate key value violates unique constraint \"{constraint}\"")]
    UniqueViolation { constraint: String },

    #[error("insert or update violates foreign key constraint \"{constraint}\"")]
    ForeignKeyViolation { constraint: String },

    #[error("migration failed: {0}")]
    Migration(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl DbError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, DbError::UniqueViolation { .. })
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, DbError::ForeignKeyViolation { .. })
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or_default().to_string();

            if db_err.is_unique_violation() {
                return DbError::UniqueViolation { constraint };
            }
            if db_err.is_foreign_key_violation() {
                return DbError::ForeignKeyViolation { constraint };
            }
        }

        DbError::Sqlx(err)
    }
}
