//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the bookmarks table.

use crate::model::{Bookmark, BookmarkPatch};
use crate::sql::BindValue;
use uuid::Uuid;

/// Columns in wire order. Every SELECT and RETURNING uses this list.
pub const COLUMNS: &[&str] = &["id", "title", "site_url", "site_description", "rating"];

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list() -> String {
    COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// A schema-qualified table.
#[derive(Clone, Debug)]
pub struct Table {
    pub schema: String,
    pub name: String,
}

impl Table {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Table {
            schema: schema.into(),
            name: name.into(),
        }
    }

    pub fn qualified(&self) -> String {
        format!("{}.{}", quoted(&self.schema), quoted(&self.name))
    }
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

pub fn create_schema(table: &Table) -> String {
    format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(&table.schema))
}

pub fn create_table(table: &Table) -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id UUID PRIMARY KEY,
            title TEXT NOT NULL,
            site_url TEXT NOT NULL,
            site_description TEXT NOT NULL DEFAULT '',
            rating INTEGER NOT NULL DEFAULT 1 CHECK (rating BETWEEN 1 AND 5)
        )
        "#,
        table.qualified()
    )
}

/// SELECT every row, ordered by primary key so listings are stable.
pub fn select_all(table: &Table) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(),
        table.qualified(),
        quoted("id")
    )
}

/// SELECT by primary key. Caller binds the id as $1.
pub fn select_by_id(table: &Table) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(),
        table.qualified(),
        quoted("id")
    )
}

pub fn insert(table: &Table, bookmark: &Bookmark) -> QueryBuf {
    let mut q = QueryBuf::new();
    let values = [
        BindValue::Uuid(bookmark.id),
        BindValue::Text(bookmark.title.clone()),
        BindValue::Text(bookmark.site_url.clone()),
        BindValue::Text(bookmark.site_description.clone()),
        BindValue::Int(bookmark.rating),
    ];
    let placeholders: Vec<String> = values
        .into_iter()
        .map(|v| format!("${}", q.push_param(v)))
        .collect();
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        table.qualified(),
        column_list(),
        placeholders.join(", "),
        column_list()
    );
    q
}

/// UPDATE by id: SET only the columns present in the patch.
/// An empty patch degrades to a SELECT so the caller still learns whether the row exists.
pub fn update(table: &Table, id: Uuid, patch: &BookmarkPatch) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    let present = [
        ("title", patch.title.clone().map(BindValue::Text)),
        ("site_url", patch.site_url.clone().map(BindValue::Text)),
        ("site_description", patch.site_description.clone().map(BindValue::Text)),
        ("rating", patch.rating.map(BindValue::Int)),
    ];
    for (col, value) in present {
        let Some(value) = value else { continue };
        let n = q.push_param(value);
        sets.push(format!("{} = ${}", quoted(col), n));
    }
    if sets.is_empty() {
        q.sql = select_by_id(table);
        q.params.push(BindValue::Uuid(id));
        return q;
    }
    let id_param = q.push_param(BindValue::Uuid(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        table.qualified(),
        sets.join(", "),
        quoted("id"),
        id_param,
        column_list()
    );
    q
}

/// DELETE by id. Caller binds the id as $1.
pub fn delete(table: &Table) -> String {
    format!("DELETE FROM {} WHERE {} = $1", table.qualified(), quoted("id"))
}
