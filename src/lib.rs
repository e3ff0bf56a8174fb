// In-memory hotel reservation ledger: rooms, users and bookings with
// validated upserts, interval-overlap availability checking and
// snapshot-at-booking semantics

pub mod booking;
pub mod error;
pub mod room;
pub mod service;
pub mod user;

// Re-export key types for convenience
pub use booking::Booking;
pub use error::ReservationError;
pub use room::{Room, RoomType};
pub use service::{Clock, ReservationLedger, SystemClock};
pub use user::User;
