//! Generic resource repository
//!
//! This module provides CRUD access to any table described by a
//! [`Resource`]. Each operation issues exactly one statement.

use std::marker::PhantomData;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres, QueryBuilder};
use tracing::debug;

use core_kernel::{FieldValue, Resource};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// A resource whose rows can be decoded from PostgreSQL
pub trait TableResource: Resource + for<'r> FromRow<'r, PgRow> {}

impl<T> TableResource for T where T: Resource + for<'r> FromRow<'r, PgRow> {}

/// Repository for the rows of one resource table
#[derive(Debug)]
pub struct ResourceRepository<R> {
    pool: DatabasePool,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceRepository<R> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<R> ResourceRepository<R> {
    /// Creates a new repository with the given connection pool
    ///
    /// # Arguments
    ///
    /// * `pool` - The pool of the resource's logical database
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            pool,
            _resource: PhantomData,
        }
    }
}

impl<R: TableResource> ResourceRepository<R> {
    /// Lists every row ordered by id
    pub async fn list(&self) -> Result<Vec<R>, DatabaseError> {
        let sql = format!("SELECT * FROM {} ORDER BY id", R::TABLE);
        let rows = sqlx::query_as::<_, R>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Retrieves a row by id
    ///
    /// # Returns
    ///
    /// `None` if no row has this id
    pub async fn find(&self, id: i32) -> Result<Option<R>, DatabaseError> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", R::TABLE);
        let row = sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Inserts a row and returns it as stored
    ///
    /// Callers are expected to have checked that every required field is
    /// present; a missing one surfaces as a constraint violation.
    pub async fn create(&self, fields: R::Fields) -> Result<R, DatabaseError> {
        let values = R::into_values(fields);
        let columns: Vec<&str> = values.iter().map(|(column, _)| *column).collect();

        let mut builder: QueryBuilder<'static, Postgres> = QueryBuilder::new(format!(
            "INSERT INTO {} ({}) VALUES (",
            R::TABLE,
            columns.join(", ")
        ));
        for (i, (_, value)) in values.into_iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            push_value(&mut builder, value);
        }
        builder.push(") RETURNING *");

        let row = builder.build_query_as::<R>().fetch_one(&self.pool).await?;
        debug!(table = R::TABLE, "Inserted row");
        Ok(row)
    }

    /// Applies a partial update; absent fields keep their stored value
    ///
    /// An update without any field leaves the row as it is and returns it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has this id
    pub async fn update(&self, id: i32, fields: R::Fields) -> Result<R, DatabaseError> {
        self.update_values(id, R::into_values(fields)).await
    }

    /// Same as [`ResourceRepository::update`] for already extracted values
    pub async fn update_values(
        &self,
        id: i32,
        values: Vec<(&'static str, FieldValue)>,
    ) -> Result<R, DatabaseError> {
        let provided = values.iter().filter(|(_, value)| !value.is_null()).count();
        debug!(table = R::TABLE, id, provided, "Updating row");

        let mut builder: QueryBuilder<'static, Postgres> =
            QueryBuilder::new(format!("UPDATE {} SET ", R::TABLE));
        for (i, (column, value)) in values.into_iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            builder.push(column).push(" = COALESCE(");
            push_value(&mut builder, value);
            builder.push(", ").push(column).push(")");
        }
        builder.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        builder
            .build_query_as::<R>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found(R::LABEL, id))
    }

    /// Deletes a row by id
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has this id
    pub async fn delete(&self, id: i32) -> Result<(), DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", R::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found(R::LABEL, id));
        }
        Ok(())
    }
}

fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: FieldValue) {
    match value {
        FieldValue::Text(v) => builder.push_bind(v),
        FieldValue::Integer(v) => builder.push_bind(v),
        FieldValue::Timestamp(v) => builder.push_bind(v),
    };
}
