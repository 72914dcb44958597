//! Repository for the `service_set` table and its inheritance edges.

use sqlx::PgPool;

use setforge_core::types::{DbId, OBJECT_TYPE_TEMPLATE};

use crate::models::service_set::{CreateServiceSet, ServiceSet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, host_id, object_name, object_type, description, assign_filter, vars";

/// Provides query and mutation operations for service sets.
///
/// Import and inheritance relationships both live in the
/// `service_set_inheritance` edge table: a child row imports its parents
/// ordered by `weight`, and a template's dependents are the children
/// pointing at it.
pub struct ServiceSetRepo;

impl ServiceSetRepo {
    /// Find a service set by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ServiceSet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_set WHERE id = $1");
        sqlx::query_as::<_, ServiceSet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a free-standing template by its unique object name.
    pub async fn find_template_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<ServiceSet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM service_set
             WHERE object_name = $1 AND object_type = $2"
        );
        sqlx::query_as::<_, ServiceSet>(&query)
            .bind(name)
            .bind(OBJECT_TYPE_TEMPLATE)
            .fetch_optional(pool)
            .await
    }

    /// Find a host-bound set by host name and set name.
    pub async fn find_on_host(
        pool: &PgPool,
        host_name: &str,
        set_name: &str,
    ) -> Result<Option<ServiceSet>, sqlx::Error> {
        let query = format!(
            "SELECT s.{} FROM service_set s
             JOIN host h ON h.id = s.host_id
             WHERE h.object_name = $1 AND s.object_name = $2",
            COLUMNS.replace(", ", ", s.")
        );
        sqlx::query_as::<_, ServiceSet>(&query)
            .bind(host_name)
            .bind(set_name)
            .fetch_optional(pool)
            .await
    }

    /// Whether a template with this object name is already persisted.
    pub async fn template_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                 SELECT 1 FROM service_set WHERE object_name = $1 AND object_type = $2
             )",
        )
        .bind(name)
        .bind(OBJECT_TYPE_TEMPLATE)
        .fetch_one(pool)
        .await
    }

    /// List every persisted service set, templates first, then by name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ServiceSet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM service_set ORDER BY object_type DESC, object_name, id"
        );
        sqlx::query_as::<_, ServiceSet>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a new service set. Validation happens in the compiler's
    /// lifecycle layer before this is called.
    pub async fn create(
        pool: &PgPool,
        input: &CreateServiceSet,
    ) -> Result<ServiceSet, sqlx::Error> {
        let query = format!(
            "INSERT INTO service_set (host_id, object_name, object_type, description, assign_filter, vars)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceSet>(&query)
            .bind(input.host_id)
            .bind(&input.object_name)
            .bind(&input.object_type)
            .bind(&input.description)
            .bind(&input.assign_filter)
            .bind(&input.vars)
            .fetch_one(pool)
            .await
    }

    /// Delete a service set row. Returns `true` if a row was deleted.
    /// Blacklist cleanup must already have happened.
    pub async fn delete_row(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM service_set WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The templates a set imports, in import order.
    pub async fn imports_of(pool: &PgPool, set_id: DbId) -> Result<Vec<ServiceSet>, sqlx::Error> {
        let query = format!(
            "SELECT o.{} FROM service_set o
             JOIN service_set_inheritance ssi ON ssi.parent_service_set_id = o.id
             WHERE ssi.service_set_id = $1
             ORDER BY ssi.weight",
            COLUMNS.replace(", ", ", o.")
        );
        sqlx::query_as::<_, ServiceSet>(&query)
            .bind(set_id)
            .fetch_all(pool)
            .await
    }

    /// Sets based on the given template and added to hosts directly.
    pub async fn dependent_sets(
        pool: &PgPool,
        parent_id: DbId,
    ) -> Result<Vec<ServiceSet>, sqlx::Error> {
        let query = format!(
            "SELECT o.{} FROM service_set o
             JOIN service_set_inheritance ssi ON ssi.service_set_id = o.id
             WHERE ssi.parent_service_set_id = $1
             ORDER BY o.object_name, o.id",
            COLUMNS.replace(", ", ", o.")
        );
        sqlx::query_as::<_, ServiceSet>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// Record that `set_id` imports `parent_id` with the given weight.
    pub async fn add_import(
        pool: &PgPool,
        set_id: DbId,
        parent_id: DbId,
        weight: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO service_set_inheritance (service_set_id, parent_service_set_id, weight)
             VALUES ($1, $2, $3)",
        )
        .bind(set_id)
        .bind(parent_id)
        .bind(weight)
        .execute(pool)
        .await?;
        Ok(())
    }
}
