// The reservation ledger: owns the room/user/booking collections and
// enforces the booking rules (date ordering, existence, availability,
// balance) before anything is committed
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};

use crate::booking::Booking;
use crate::error::ReservationError;
use crate::room::{Room, RoomType};
use crate::user::User;

/// Source of creation timestamps. The ledger takes the clock as a seam so
/// tests can drive time deterministically; production code uses
/// [`SystemClock`].
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// In-memory reservation ledger. Logically single-threaded: every operation
/// takes `&mut self` and runs to completion, so a multi-caller environment
/// wraps the whole ledger in one lock.
///
/// Rooms and users are upserted in place and never deleted; bookings are
/// append-only and immutable. Each collection keeps stable insertion order,
/// and the listing operations return copies so callers never hold live
/// handles into the ledger.
pub struct ReservationLedger {
    rooms: Vec<Room>,
    users: Vec<User>,
    bookings: Vec<Booking>,
    next_booking_id: i64,
    clock: Box<dyn Clock>,
}

impl Default for ReservationLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock) -> Self {
        Self {
            rooms: Vec::new(),
            users: Vec::new(),
            bookings: Vec::new(),
            next_booking_id: 1,
            clock: Box::new(clock),
        }
    }

    /// Creates the room if it does not exist, otherwise overwrites its type
    /// and price in place. `created_at` is assigned once at first creation
    /// and survives updates. Validation happens before any mutation, and
    /// existing bookings are never touched.
    pub fn set_room(
        &mut self,
        room_number: i32,
        room_type: RoomType,
        price_per_night: i64,
    ) -> Result<(), ReservationError> {
        match self
            .rooms
            .iter()
            .position(|r| r.room_number() == room_number)
        {
            Some(idx) => {
                self.rooms[idx].update(room_type, price_per_night)?;
                info!(room_number, room_type = %room_type, price_per_night, "updated room");
            }
            None => {
                let room = Room::new(room_number, room_type, price_per_night, self.clock.now())?;
                self.rooms.push(room);
                info!(room_number, room_type = %room_type, price_per_night, "created room");
            }
        }
        Ok(())
    }

    /// Creates the user if it does not exist, otherwise overwrites the
    /// balance. Same upsert contract as [`set_room`](Self::set_room).
    pub fn set_user(&mut self, user_id: i32, balance: i64) -> Result<(), ReservationError> {
        match self.users.iter().position(|u| u.user_id() == user_id) {
            Some(idx) => {
                self.users[idx].set_balance(balance)?;
                info!(user_id, balance, "updated user");
            }
            None => {
                let user = User::new(user_id, balance, self.clock.now())?;
                self.users.push(user);
                info!(user_id, balance, "created user");
            }
        }
        Ok(())
    }

    /// Books a room for a user over `[check_in, check_out)`.
    ///
    /// Checks run in a fixed order and each failure is terminal: date
    /// ordering, user existence, room existence, availability, balance. On
    /// success the booking is minted with the next id, the snapshot is
    /// captured (balance before deduction, current room type and price), the
    /// cost is deducted and the booking appended — all within this one call,
    /// so no intermediate state is ever observable. On failure the ledger is
    /// left exactly as it was.
    pub fn book_room(
        &mut self,
        user_id: i32,
        room_number: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Booking, ReservationError> {
        match self.try_book_room(user_id, room_number, check_in, check_out) {
            Ok(booking) => {
                info!(
                    booking_id = booking.booking_id(),
                    user_id,
                    room_number,
                    nights = booking.nights(),
                    total = booking.total_amount(),
                    "booked room"
                );
                Ok(booking)
            }
            Err(err) => {
                warn!(user_id, room_number, error = %err, "booking failed");
                Err(err)
            }
        }
    }

    fn try_book_room(
        &mut self,
        user_id: i32,
        room_number: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Booking, ReservationError> {
        if check_in >= check_out {
            return Err(ReservationError::InvalidBookingDate {
                check_in,
                check_out,
            });
        }

        let user = self
            .users
            .iter_mut()
            .find(|u| u.user_id() == user_id)
            .ok_or(ReservationError::UserNotFound(user_id))?;

        let room = self
            .rooms
            .iter()
            .find(|r| r.room_number() == room_number)
            .ok_or(ReservationError::RoomNotFound(room_number))?;

        let conflict = self
            .bookings
            .iter()
            .filter(|b| b.room_number() == room_number)
            .any(|b| b.overlaps(check_in, check_out));
        if conflict {
            return Err(ReservationError::RoomNotAvailable {
                room_number,
                check_in,
                check_out,
            });
        }

        let nights = (check_out - check_in).num_days();
        let cost = nights * room.price_per_night();
        if !user.has_sufficient_balance(cost) {
            return Err(ReservationError::InsufficientBalance {
                user_id,
                required: cost,
                available: user.balance(),
            });
        }

        // Snapshot is taken before the deduction so the booking records the
        // balance the user walked in with.
        let booking = Booking::new(
            self.next_booking_id,
            user,
            room,
            check_in,
            check_out,
            self.clock.now(),
        );
        user.deduct_balance(cost)?;
        self.next_booking_id += 1;
        self.bookings.push(booking.clone());

        Ok(booking)
    }

    /// All rooms, insertion order, as copies.
    pub fn rooms(&self) -> Vec<Room> {
        self.rooms.clone()
    }

    /// All users, insertion order, as copies.
    pub fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    /// All bookings, insertion order, as copies.
    pub fn bookings(&self) -> Vec<Booking> {
        self.bookings.clone()
    }
}
