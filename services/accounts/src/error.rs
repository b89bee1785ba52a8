use sea_orm::{DbErr, SqlErr, TransactionError};

/// Accounts service error variants.
///
/// A missing row is never an error here; lookups, updates, and deletes report
/// absence through `Option` so callers can translate it at their own boundary.
#[derive(Debug, thiserror::Error)]
pub enum AccountsError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccountsError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UniqueViolation(_) => "UNIQUE_VIOLATION",
            Self::ForeignKeyViolation(_) => "FOREIGN_KEY_VIOLATION",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Classify a store error from a write path. Constraint rejections keep
    /// their own variants; everything else is wrapped as `Internal` with
    /// `context` attached.
    pub(crate) fn from_db(err: DbErr, context: &'static str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ForeignKeyViolation(msg),
            _ => Self::Internal(anyhow::Error::new(err).context(context)),
        }
    }

    /// Unwrap a rolled-back transaction so the original failure reaches the
    /// caller instead of being swallowed by the transaction wrapper.
    pub(crate) fn from_txn(err: TransactionError<AccountsError>, context: &'static str) -> Self {
        match err {
            TransactionError::Connection(db) => Self::from_db(db, context),
            TransactionError::Transaction(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_machine_readable_kinds() {
        assert_eq!(
            AccountsError::UniqueViolation("users.email".into()).kind(),
            "UNIQUE_VIOLATION"
        );
        assert_eq!(
            AccountsError::ForeignKeyViolation("vehicles.driver_id".into()).kind(),
            "FOREIGN_KEY_VIOLATION"
        );
        assert_eq!(
            AccountsError::Internal(anyhow::anyhow!("db error")).kind(),
            "INTERNAL"
        );
    }

    #[test]
    fn should_keep_transaction_error_variant() {
        let inner = AccountsError::UniqueViolation("driver_profiles.user_id".into());
        let err = AccountsError::from_txn(
            TransactionError::Transaction(inner),
            "attach driver profile",
        );
        assert!(matches!(err, AccountsError::UniqueViolation(_)));
    }

    #[test]
    fn should_wrap_unclassified_db_error_as_internal() {
        let err = AccountsError::from_db(DbErr::Custom("boom".into()), "create passenger");
        assert!(matches!(err, AccountsError::Internal(_)));
    }
}
