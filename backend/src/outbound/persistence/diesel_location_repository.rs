//! PostgreSQL-backed `LocationRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Direction, Page};

use crate::domain::ports::{LocationRepository, LocationRepositoryError};
use crate::domain::{
    Location, LocationId, LocationListQuery, LocationOrder, LocationSortKey, NewLocation,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{LocationChanges, LocationRow, NewLocationRow};
use super::pool::DbPool;
use super::schema::locations;

type BoxedLocations = locations::BoxedQuery<'static, Pg>;

/// Diesel-backed implementation of the `LocationRepository` port.
#[derive(Clone)]
pub struct DieselLocationRepository {
    pool: DbPool,
}

impl DieselLocationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn apply_order(statement: BoxedLocations, order: &LocationOrder) -> BoxedLocations {
    macro_rules! by {
        ($column:expr) => {
            match order.direction {
                Direction::Asc => statement.then_order_by($column.asc()),
                Direction::Desc => statement.then_order_by($column.desc()),
            }
        };
    }

    match order.key {
        LocationSortKey::Id => by!(locations::id),
        LocationSortKey::Name => by!(locations::name),
        LocationSortKey::Neighborhood => by!(locations::neighborhood),
        LocationSortKey::City => by!(locations::city),
        LocationSortKey::State => by!(locations::state),
        LocationSortKey::CreatedAt => by!(locations::created_at),
        LocationSortKey::UpdatedAt => by!(locations::updated_at),
    }
}

/// Ordered, unpaged listing statement: requested orders, then `id ASC`.
fn ordered(orders: &[LocationOrder]) -> BoxedLocations {
    orders
        .iter()
        .fold(locations::table.into_boxed(), apply_order)
        .then_order_by(locations::id.asc())
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl LocationRepository for DieselLocationRepository {
    async fn insert(&self, location: &NewLocation) -> Result<Location, LocationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: LocationRow = diesel::insert_into(locations::table)
            .values(NewLocationRow::from(location))
            .returning(LocationRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        id: LocationId,
    ) -> Result<Option<Location>, LocationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<LocationRow> = locations::table
            .find(id.get())
            .select(LocationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Location::from))
    }

    async fn update(
        &self,
        location: &Location,
    ) -> Result<Option<Location>, LocationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<LocationRow> = diesel::update(locations::table.find(location.id.get()))
            .set(LocationChanges::from(location))
            .returning(LocationRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Location::from))
    }

    async fn delete(&self, id: LocationId) -> Result<bool, LocationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(locations::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }

    async fn list(
        &self,
        query: &LocationListQuery,
    ) -> Result<Page<Location>, LocationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let request = query.request();

        let total: i64 = locations::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<LocationRow> = ordered(query.orders())
            .limit(i64::from(request.size()))
            .offset(to_i64(request.offset()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let content = rows.into_iter().map(Location::from).collect();
        Ok(Page::new(content, request, u64::try_from(total).unwrap_or_default()))
    }
}
