// ABOUTME: Participant registration: id generation and experiment arm assignment
// ABOUTME: Ids are epoch milliseconds plus a random base-36 suffix; the arm follows from the id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::ExperimentLogger;
use chrono::{DateTime, Utc};
use ecoplate_core::models::User;
use ecoplate_core::{AppError, AppResult};
use ecoplate_intelligence::assign_group;
use rand::{Rng, RngCore};

/// Length of the random id suffix
const ID_SUFFIX_LEN: usize = 9;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a participant id for `now`
#[must_use]
pub fn generate_user_id(rng: &mut dyn RngCore, now: DateTime<Utc>) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| char::from(BASE36_DIGITS[rng.gen_range(0..BASE36_DIGITS.len())]))
        .collect();
    format!("{}{suffix}", now.timestamp_millis())
}

/// Register a participant
///
/// # Errors
///
/// Returns `InvalidInput` when the e-mail is blank
pub fn register_user(email: &str, rng: &mut dyn RngCore, now: DateTime<Utc>) -> AppResult<User> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::invalid_input("E-mail address is required"));
    }

    let id = generate_user_id(rng, now);
    let test_group = assign_group(&id);
    ExperimentLogger::log_registration(&id, test_group);

    Ok(User {
        id,
        email: email.to_owned(),
        test_group,
        registered_at: now,
    })
}
