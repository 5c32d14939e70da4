//! Reservation domain entity

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::availability::SlotKey;

/// Reservation status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Booked and holding a table
    Confirmed,
    /// Cancelled by the guest
    Cancelled,
    /// Any other value written to the store by staff tooling
    Other(String),
}

impl ReservationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Other(s) => s,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "confirmed" => Self::Confirmed,
            "cancelled" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Guest details and slot for a reservation that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub confirmation_code: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub party_size: i32,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub special_requests: Option<String>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub occasion: Option<String>,
    pub session_id: Option<String>,
}

/// Table reservation
#[derive(Debug, Clone)]
pub struct Reservation {
    pub id: i32,
    /// `RES` + 6 alphanumerics, read back to the guest
    pub confirmation_code: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub party_size: i32,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub special_requests: Option<String>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub occasion: Option<String>,
    pub status: ReservationStatus,
    /// Voice session that created the booking, if any
    pub session_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn slot(&self) -> SlotKey {
        SlotKey {
            date: self.reservation_date,
            time: self.reservation_time,
        }
    }

    /// Cancel this reservation
    pub fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
    }

    /// Only a cancelled booking has given its table back.
    pub fn is_active(&self) -> bool {
        self.status != ReservationStatus::Cancelled
    }

    /// Phone numbers are compared on digits only, so "+356 9999 1234"
    /// matches "+35699991234".
    pub fn phone_matches(&self, phone: &str) -> bool {
        fn digits(s: &str) -> String {
            s.chars().filter(|c| c.is_ascii_digit()).collect()
        }
        let stored = digits(&self.customer_phone);
        !stored.is_empty() && stored == digits(phone)
    }
}

// ── Tests ──────────────────────────────────────────────────────
