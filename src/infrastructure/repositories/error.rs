use crate::domain::errors::DomainError;

const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";
const SQLITE_CONSTRAINT_CHECK: &str = "275";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                return DomainError::Conflict(format!(
                    "unique constraint violated: {}",
                    db_err.message()
                ));
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    SQLITE_CONSTRAINT_UNIQUE => {
                        return DomainError::Conflict("slug already exists".into());
                    }
                    SQLITE_CONSTRAINT_CHECK => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("post not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
