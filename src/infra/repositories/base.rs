//! Connection abstraction shared by every store.
//!
//! A store runs its statements either on the pool or on an open
//! transaction. Both are reached through [`Executor`], so one store
//! implementation serves the plain repositories and the transactional ones
//! handed out by the unit of work.

use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction};

/// Something statements can be executed on.
pub trait Executor: Send + Sync {
    type Conn: ConnectionTrait + Send + Sync;

    fn conn(&self) -> &Self::Conn;
}

impl Executor for DatabaseConnection {
    type Conn = DatabaseConnection;

    fn conn(&self) -> &DatabaseConnection {
        self
    }
}

impl<'a> Executor for &'a DatabaseTransaction {
    type Conn = DatabaseTransaction;

    fn conn(&self) -> &DatabaseTransaction {
        self
    }
}

/// Rows affected by a delete, as "did anything go".
pub(crate) fn deleted(result: sea_orm::DeleteResult) -> bool {
    result.rows_affected > 0
}
