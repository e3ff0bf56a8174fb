// User entity: a customer account with a balance spent on bookings
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ReservationError;

/// A customer with a spendable balance. The balance never goes negative:
/// deductions are rejected if the amount is negative or exceeds the current
/// balance. `created_at` is fixed at first creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    user_id: i32,
    balance: i64,
    created_at: DateTime<Utc>,
}

impl User {
    pub(crate) fn new(
        user_id: i32,
        balance: i64,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ReservationError> {
        validate(user_id, balance)?;
        Ok(Self {
            user_id,
            balance,
            created_at,
        })
    }

    pub(crate) fn set_balance(&mut self, balance: i64) -> Result<(), ReservationError> {
        validate(self.user_id, balance)?;
        self.balance = balance;
        Ok(())
    }

    pub(crate) fn deduct_balance(&mut self, amount: i64) -> Result<(), ReservationError> {
        if amount < 0 {
            return Err(ReservationError::InvalidInput(
                "amount to deduct cannot be negative".to_string(),
            ));
        }
        if self.balance < amount {
            return Err(ReservationError::InsufficientBalance {
                user_id: self.user_id,
                required: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    pub fn has_sufficient_balance(&self, amount: i64) -> bool {
        self.balance >= amount
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User ID: {} | Balance: {} | Created: {}",
            self.user_id,
            self.balance,
            self.created_at.format("%d/%m/%Y %H:%M:%S")
        )
    }
}

fn validate(user_id: i32, balance: i64) -> Result<(), ReservationError> {
    if user_id <= 0 {
        return Err(ReservationError::InvalidInput(
            "user id must be positive".to_string(),
        ));
    }
    if balance < 0 {
        return Err(ReservationError::InvalidInput(
            "user balance cannot be negative".to_string(),
        ));
    }
    Ok(())
}
