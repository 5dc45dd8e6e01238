//! flip-scout: used-car flip analyzer for marketplace listings
//!
//! This library provides the core components for:
//! - Listing page extraction (price, spec sheet, description)
//! - VIN decoding via the NHTSA vPIC API
//! - Make/model reconciliation against a static reference catalog
//! - Layered fuzzy style resolution with deterministic fallbacks
//! - KBB style catalogs and trade-in/private-party price bands
//! - Profit delta comparison between wholesale and retail values
//! - Concurrent per-run orchestration of all of the above
//! - Structured logging and metrics

pub mod analyzer;
pub mod catalog;
pub mod cli;
pub mod compare;
pub mod config;
pub mod decoder;
pub mod listing;
pub mod report;
pub mod resolve;
pub mod telemetry;
pub mod text;
pub mod valuation;
