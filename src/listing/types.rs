//! Listing types

use serde::Serialize;

/// Structured spec sheet scraped from a listing page.
///
/// Real listings are sparse: everything except VIN and year is optional and
/// routinely absent. The parser refuses to construct a spec sheet without
/// VIN and year, since nothing downstream can run without them.
#[derive(Debug, Clone, Serialize)]
pub struct ListingSpecs {
    /// Vehicle identification number (required)
    pub vin: String,
    /// Model year as listed (required)
    pub year: String,
    /// Manufacturer trim label, e.g. "EX-L"
    pub trim: Option<String>,
    /// Odometer reading in whole miles
    pub mileage: Option<i64>,
    /// Coarse body category as the seller wrote it
    pub body_type: Option<String>,
}
