//! SeaORM implementation of TravelRepository
//!
//! Listings select each travel together with a correlated count of its
//! confirmed reservations, so one round trip yields every row's availability.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use sea_orm::sea_query::{Expr, Func, Query, SimpleExpr, SubQueryStatement};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QueryResult, QuerySelect,
};

use crate::domain::travel::TravelRepository;
use crate::domain::{
    AnnotatedTravel, DomainError, DomainResult, Travel, TravelDestination, TravelImage,
    TravelWindow,
};
use crate::infrastructure::database::entities::{
    reservation, travel, travel_destination, travel_image,
};

pub struct SeaOrmTravelRepository {
    db: DatabaseConnection,
}

impl SeaOrmTravelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// A travel row plus its `confirmed_count` column.
struct TravelWithCount {
    travel: travel::Model,
    confirmed_count: i64,
}

impl FromQueryResult for TravelWithCount {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            travel: travel::Model::from_query_result(res, pre)?,
            confirmed_count: res.try_get(pre, "confirmed_count")?,
        })
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn decode_list(raw: &str, field: &str, uuid: &str) -> DomainResult<Vec<String>> {
    serde_json::from_str(raw).map_err(|e| {
        DomainError::Storage(format!("Invalid {} JSON for travel {}: {}", field, uuid, e))
    })
}

fn model_to_domain(m: travel::Model) -> DomainResult<Travel> {
    let inclusions = decode_list(&m.inclusions, "inclusions", &m.uuid)?;
    let restrictions = decode_list(&m.restrictions, "restrictions", &m.uuid)?;
    let max_passengers = u32::try_from(m.max_passengers).map_err(|_| {
        DomainError::Storage(format!(
            "Invalid max_passengers {} for travel {}",
            m.max_passengers, m.uuid
        ))
    })?;
    Ok(Travel {
        id: m.id,
        uuid: m.uuid,
        name: m.name,
        highlight_feature: m.highlight_feature,
        start_date: m.start_date,
        end_date: m.end_date,
        is_active: m.is_active,
        all_inclusive: m.all_inclusive,
        is_capacity_full: m.is_capacity_full,
        cancelled: m.cancelled,
        max_passengers,
        description: m.description,
        cover_image: m.cover_image,
        inclusions,
        restrictions,
        url: m.url,
        created_at: m.created_at,
        updated_at: m.updated_at,
        deleted_at: m.deleted_at,
    })
}

fn annotated(row: TravelWithCount) -> DomainResult<AnnotatedTravel> {
    Ok(AnnotatedTravel::new(
        model_to_domain(row.travel)?,
        row.confirmed_count,
    ))
}

fn image_to_domain(m: travel_image::Model) -> TravelImage {
    TravelImage {
        id: m.id,
        travel_id: m.travel_id,
        image: m.image,
        is_gallery_image: m.is_gallery_image,
    }
}

fn destination_to_domain(m: travel_destination::Model) -> TravelDestination {
    TravelDestination {
        id: m.id,
        travel_id: m.travel_id,
        name: m.name,
        start_date: m.start_date,
        end_date: m.end_date,
        image: m.image,
        description: m.description,
    }
}

fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── Query helpers ───────────────────────────────────────────────

/// `(SELECT COUNT(id) FROM reservations WHERE travel_id = travels.id AND booking_confirmed)`
fn confirmed_count_expr() -> SimpleExpr {
    SimpleExpr::SubQuery(
        None,
        Box::new(SubQueryStatement::SelectStatement(
            Query::select()
                .expr(Func::count(Expr::col((
                    reservation::Entity,
                    reservation::Column::Id,
                ))))
                .from(reservation::Entity)
                .and_where(
                    Expr::col((reservation::Entity, reservation::Column::TravelId))
                        .equals((travel::Entity, travel::Column::Id)),
                )
                .and_where(
                    Expr::col((reservation::Entity, reservation::Column::BookingConfirmed))
                        .eq(true),
                )
                .to_owned(),
        )),
    )
}

fn window_condition(window: TravelWindow, today: NaiveDate) -> Condition {
    match window {
        TravelWindow::Upcoming => Condition::all()
            .add(travel::Column::Cancelled.eq(false))
            .add(travel::Column::IsActive.eq(true))
            .add(travel::Column::StartDate.gt(today)),
        TravelWindow::Past => Condition::all()
            .add(travel::Column::Cancelled.eq(false))
            .add(travel::Column::EndDate.lt(today)),
    }
}

// ── TravelRepository impl ───────────────────────────────────────

#[async_trait]
impl TravelRepository for SeaOrmTravelRepository {
    async fn find_in_window(
        &self,
        window: TravelWindow,
        today: NaiveDate,
        limit: Option<u64>,
    ) -> DomainResult<Vec<AnnotatedTravel>> {
        debug!("Listing {:?} travels as of {}", window, today);

        let mut query = travel::Entity::find()
            .filter(window_condition(window, today))
            .column_as(confirmed_count_expr(), "confirmed_count")
            .order_by_desc(travel::Column::StartDate)
            .order_by_desc(travel::Column::Id);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let rows = query
            .into_model::<TravelWithCount>()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        rows.into_iter().map(annotated).collect()
    }

    async fn find_in_window_by_uuid(
        &self,
        window: TravelWindow,
        uuid: &str,
        today: NaiveDate,
    ) -> DomainResult<Option<AnnotatedTravel>> {
        let row = travel::Entity::find()
            .filter(travel::Column::Uuid.eq(uuid))
            .filter(window_condition(window, today))
            .column_as(confirmed_count_expr(), "confirmed_count")
            .into_model::<TravelWithCount>()
            .one(&self.db)
            .await
            .map_err(db_err)?;
        row.map(annotated).transpose()
    }

    async fn find_by_uuid(&self, uuid: &str) -> DomainResult<Option<Travel>> {
        let model = travel::Entity::find()
            .filter(travel::Column::Uuid.eq(uuid))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn images(&self, travel_id: i64, gallery_only: bool) -> DomainResult<Vec<TravelImage>> {
        let mut query = travel_image::Entity::find()
            .filter(travel_image::Column::TravelId.eq(travel_id));
        if gallery_only {
            query = query.filter(travel_image::Column::IsGalleryImage.eq(true));
        }
        let models = query
            .order_by_desc(travel_image::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(image_to_domain).collect())
    }

    async fn destinations(&self, travel_id: i64) -> DomainResult<Vec<TravelDestination>> {
        let models = travel_destination::Entity::find()
            .filter(travel_destination::Column::TravelId.eq(travel_id))
            .order_by_asc(travel_destination::Column::StartDate)
            .order_by_asc(travel_destination::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(destination_to_domain).collect())
    }
}
