//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::reservation::ReservationRepository;
use crate::domain::{DomainError, DomainResult, Rating, Reservation, TravelerReview};
use crate::infrastructure::database::entities::{passenger, reservation};

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> DomainResult<Reservation> {
    Ok(Reservation {
        id: m.id,
        uuid: m.uuid,
        travel_id: m.travel_id,
        passenger_id: m.passenger_id,
        review: m.review,
        booking_confirmed: m.booking_confirmed,
        rating: Rating::new(m.rating)?,
        created_at: m.created_at,
        deleted_at: m.deleted_at,
    })
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn published_reviews(&self) -> DomainResult<Vec<TravelerReview>> {
        let rows = reservation::Entity::find()
            .find_also_related(passenger::Entity)
            .filter(reservation::Column::BookingConfirmed.eq(true))
            .filter(reservation::Column::Review.ne(""))
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut reviews = Vec::with_capacity(rows.len());
        for (model, passenger) in rows {
            let Some(passenger) = passenger else {
                continue;
            };
            let reservation = model_to_domain(model)?;
            if !reservation.has_review() {
                continue;
            }
            reviews.push(TravelerReview {
                full_name: format!("{} {}", passenger.first_name, passenger.last_name),
                review: reservation.review,
                photo: passenger.photo,
                rating: reservation.rating,
            });
        }
        debug!("Loaded {} published reviews", reviews.len());
        Ok(reviews)
    }
}
