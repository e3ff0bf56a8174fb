// Error types for the reservation ledger
use chrono::NaiveDate;
use thiserror::Error;

/// Everything that can go wrong when managing rooms, users and bookings.
/// All variants are expected domain errors surfaced to the caller; the
/// ledger never commits partial state on failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("check-in date ({}) must be before check-out date ({})",
        .check_in.format("%d/%m/%Y"), .check_out.format("%d/%m/%Y"))]
    InvalidBookingDate {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("user with id {0} not found")]
    UserNotFound(i32),

    #[error("room with number {0} not found")]
    RoomNotFound(i32),

    #[error("room {} is not available from {} to {}",
        .room_number, .check_in.format("%d/%m/%Y"), .check_out.format("%d/%m/%Y"))]
    RoomNotAvailable {
        room_number: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("user {user_id} has insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        user_id: i32,
        required: i64,
        available: i64,
    },
}
