// ABOUTME: Core types and constants for the Ecoplate recipe experiment harness
// ABOUTME: Foundation crate with error handling, recipe and experiment models, and score bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ecoplate Core
//!
//! Foundation crate providing shared types and constants for the Ecoplate
//! recipe experiment harness. The engine crate and the application crate both
//! build on these types, so this crate is kept free of I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Score band boundaries, storage keys, and engine defaults
//! - **models**: Recipes, categories, experiment groups, users, and choice records
//! - **bands**: Thermometer-style score classification shared with presentation

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, Category, TestGroup, User, ChoiceRecord)
pub mod models;

/// Score band classification for sustainability, environment, and nutrition
pub mod bands;

pub use errors::{AppError, AppResult, ErrorCode};
