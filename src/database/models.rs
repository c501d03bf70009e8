// Database Models
//
// Tokio-postgres compatible models for the services catalogue and the
// bookings collection.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;
use uuid::Uuid;

/// Trait for converting from tokio-postgres Row
pub trait FromRow {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error>
    where
        Self: Sized;
}

/// A service offered by the garage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub service_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<String>,
    pub img: Option<String>,
    pub facility: Option<serde_json::Value>,
}

impl FromRow for Service {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            service_id: row.try_get("service_id").ok(),
            title: row.try_get("title")?,
            description: row.try_get("description").ok(),
            price: row.try_get("price").ok(),
            img: row.try_get("img").ok(),
            facility: row.try_get("facility").ok(),
        })
    }
}

/// Projection of a service used on the checkout page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub service_id: Option<String>,
    pub title: String,
    pub price: Option<String>,
    pub img: Option<String>,
}

impl FromRow for ServiceSummary {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            service_id: row.try_get("service_id").ok(),
            title: row.try_get("title")?,
            price: row.try_get("price").ok(),
            img: row.try_get("img").ok(),
        })
    }
}

/// A customer booking for a service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub email: String,
    pub service_id: Option<String>,
    pub service_title: Option<String>,
    pub price: Option<String>,
    pub date: Option<String>,
    pub img: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl FromRow for Booking {
    fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            service_id: row.try_get("service_id").ok(),
            service_title: row.try_get("service_title").ok(),
            price: row.try_get("price").ok(),
            date: row.try_get("date").ok(),
            img: row.try_get("img").ok(),
            status: row.try_get("status").ok(),
            created_at: row.try_get("created_at").ok(),
        })
    }
}

/// Payload for creating a booking
#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub email: String,
    pub service_id: Option<String>,
    pub service_title: Option<String>,
    pub price: Option<String>,
    pub date: Option<String>,
    pub img: Option<String>,
}
