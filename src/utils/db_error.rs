//! Helpers for classifying database errors.

/// Returns true if the error is a uniqueness violation on the link slug.
pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some("valentine_links_slug_key"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_violation() {
        assert!(!is_unique_violation_on_slug(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation_on_slug(&sqlx::Error::PoolTimedOut));
    }
}
