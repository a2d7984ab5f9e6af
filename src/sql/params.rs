//! Typed values bound to positional parameters.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;
use uuid::Uuid;

/// A value that can be bound to a PostgreSQL query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    Uuid(Uuid),
    Text(String),
    Int(i32),
}

impl BindValue {
    pub fn bind_as<'q, O>(
        self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            BindValue::Uuid(u) => query.bind(u),
            BindValue::Text(s) => query.bind(s),
            BindValue::Int(n) => query.bind(n),
        }
    }
}
