// Booking entity: an immutable reservation record with a point-in-time
// snapshot of the room and user it was made against
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::room::{Room, RoomType};
use crate::user::User;

/// A committed reservation. Every field, including the snapshot of the
/// room's type/price and the user's balance, is captured at creation and
/// never changes afterwards; later edits to the underlying `Room` or `User`
/// do not reach back into existing bookings.
///
/// The stay covers the half-open interval `[check_in, check_out)`, so a
/// checkout and a new check-in on the same calendar day do not collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    booking_id: i64,
    user_id: i32,
    room_number: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    total_amount: i64,
    booking_date_time: DateTime<Utc>,

    // Snapshot of user and room state at the moment of booking. The balance
    // is the value before the booking cost was deducted.
    user_balance_at_booking: i64,
    room_type_at_booking: RoomType,
    room_price_per_night_at_booking: i64,
}

impl Booking {
    pub(crate) fn new(
        booking_id: i64,
        user: &User,
        room: &Room,
        check_in: NaiveDate,
        check_out: NaiveDate,
        booking_date_time: DateTime<Utc>,
    ) -> Self {
        debug_assert!(check_in < check_out, "ledger validates dates before minting");
        let nights = (check_out - check_in).num_days();
        Self {
            booking_id,
            user_id: user.user_id(),
            room_number: room.room_number(),
            check_in,
            check_out,
            total_amount: nights * room.price_per_night(),
            booking_date_time,
            user_balance_at_booking: user.balance(),
            room_type_at_booking: room.room_type(),
            room_price_per_night_at_booking: room.price_per_night(),
        }
    }

    /// True if this booking's stay shares at least one night with
    /// `[start, end)`. Touching at a boundary date is not an overlap.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.check_in < end && start < self.check_out
    }

    /// Number of nights between check-in and check-out, always >= 1.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn booking_id(&self) -> i64 {
        self.booking_id
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn room_number(&self) -> i32 {
        self.room_number
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn total_amount(&self) -> i64 {
        self.total_amount
    }

    pub fn booking_date_time(&self) -> DateTime<Utc> {
        self.booking_date_time
    }

    pub fn user_balance_at_booking(&self) -> i64 {
        self.user_balance_at_booking
    }

    pub fn room_type_at_booking(&self) -> RoomType {
        self.room_type_at_booking
    }

    pub fn room_price_per_night_at_booking(&self) -> i64 {
        self.room_price_per_night_at_booking
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking ID: {} | User: {} | Room: {} | {} to {} ({} nights) | \
             Type at booking: {} | Price/Night at booking: {} | Total: {} | \
             Balance at booking: {} | Booked: {}",
            self.booking_id,
            self.user_id,
            self.room_number,
            self.check_in.format("%d/%m/%Y"),
            self.check_out.format("%d/%m/%Y"),
            self.nights(),
            self.room_type_at_booking,
            self.room_price_per_night_at_booking,
            self.total_amount,
            self.user_balance_at_booking,
            self.booking_date_time.format("%d/%m/%Y %H:%M:%S")
        )
    }
}
