// ABOUTME: Deterministic experiment group assignment from a user id
// ABOUTME: 32-bit rolling hash over UTF-16 code units, bucketed modulo the three arms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Experiment group assignment
//!
//! A returning participant is recognized only by the id persisted on their
//! device, so the arm must be a pure function of that id. The hash is the
//! classic `h * 31 + c` string hash with two's-complement wrap-around; it is
//! not cryptographic and only approximately uniform.

use ecoplate_core::models::TestGroup;

/// Rolling 32-bit signed hash over the UTF-16 code units of `input`
#[must_use]
pub fn rolling_hash(input: &str) -> i32 {
    input.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Assign the experiment arm for a user id
#[must_use]
pub fn assign_group(user_id: &str) -> TestGroup {
    let bucket = rolling_hash(user_id).unsigned_abs() % 3;
    TestGroup::ALL[bucket as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_matches_reference_values() {
        assert_eq!(rolling_hash(""), 0);
        assert_eq!(rolling_hash("a"), 97);
        assert_eq!(rolling_hash("abc"), 96_354);
    }

    #[test]
    fn test_hash_wraps_to_32_bits() {
        // "abcdefg" overflows: 31^6 * 97 alone exceeds i32::MAX
        let expected = "abcdefg"
            .encode_utf16()
            .fold(0_i64, |hash, unit| (hash * 31 + i64::from(unit)) & 0xFFFF_FFFF);
        assert_eq!(rolling_hash("abcdefg"), expected as u32 as i32);
    }

    #[test]
    fn test_known_assignments() {
        assert_eq!(assign_group("abc"), TestGroup::A);
        assert_eq!(assign_group("a"), TestGroup::B);
        assert_eq!(assign_group(""), TestGroup::A);
    }

    #[test]
    fn test_utf16_code_units_are_hashed() {
        // 'á' is U+00E1 (225), a single UTF-16 unit
        assert_eq!(rolling_hash("á"), 225);
        // '🍲' is a surrogate pair: 0xD83C, 0xDF72
        assert_eq!(rolling_hash("🍲"), 0xD83C * 31 + 0xDF72);
    }

    #[test]
    fn test_minimum_hash_does_not_overflow_abs() {
        assert_eq!(i32::MIN.unsigned_abs() % 3, 2);
    }
}
