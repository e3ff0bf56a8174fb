// Room entities: the closed set of room types and the room record itself
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ReservationError;

/// The room categories on offer. Display names are the canonical lowercase
/// forms used everywhere (parsing, serialization, reports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Standard,
    Junior,
    Suite,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Junior => "junior",
            RoomType::Suite => "suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = ReservationError;

    // Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RoomType::Standard),
            "junior" => Ok(RoomType::Junior),
            "suite" => Ok(RoomType::Suite),
            _ => Err(ReservationError::InvalidInput(format!(
                "invalid room type: {}. valid types are: standard, junior, suite",
                s
            ))),
        }
    }
}

/// A hotel room. Constructed and mutated only through the ledger, which
/// re-validates type and price on every update; `created_at` is fixed at
/// first creation and survives updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    room_number: i32,
    room_type: RoomType,
    price_per_night: i64,
    created_at: DateTime<Utc>,
}

impl Room {
    pub(crate) fn new(
        room_number: i32,
        room_type: RoomType,
        price_per_night: i64,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ReservationError> {
        validate(room_number, price_per_night)?;
        Ok(Self {
            room_number,
            room_type,
            price_per_night,
            created_at,
        })
    }

    pub(crate) fn update(
        &mut self,
        room_type: RoomType,
        price_per_night: i64,
    ) -> Result<(), ReservationError> {
        validate(self.room_number, price_per_night)?;
        self.room_type = room_type;
        self.price_per_night = price_per_night;
        Ok(())
    }

    pub fn room_number(&self) -> i32 {
        self.room_number
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn price_per_night(&self) -> i64 {
        self.price_per_night
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} | Type: {} | Price/Night: {} | Created: {}",
            self.room_number,
            self.room_type,
            self.price_per_night,
            self.created_at.format("%d/%m/%Y %H:%M:%S")
        )
    }
}

fn validate(room_number: i32, price_per_night: i64) -> Result<(), ReservationError> {
    if room_number <= 0 {
        return Err(ReservationError::InvalidInput(
            "room number must be positive".to_string(),
        ));
    }
    if price_per_night <= 0 {
        return Err(ReservationError::InvalidInput(
            "room price per night must be positive".to_string(),
        ));
    }
    Ok(())
}
