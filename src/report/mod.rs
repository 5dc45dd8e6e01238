//! Briefing renderer
//!
//! Turns a finished [`Analysis`](crate::analyzer::Analysis) into the
//! plain-text briefing the CLI prints. Pure formatting; no I/O.

use crate::analyzer::Analysis;
use crate::compare::MileageBand;
use crate::text::thousands;

/// Render the full briefing text.
pub fn render_briefing(analysis: &Analysis) -> String {
    let vehicle = &analysis.vehicle;
    let valuation = &analysis.valuation;
    let deltas = &valuation.deltas;

    let mut lines: Vec<String> = Vec::new();

    lines.push("##### Briefing #####".to_string());
    lines.push(String::new());
    lines.push(format!(
        "This car is a {} {} {} {} with {} ({}). It's listed at ${}.",
        vehicle.year,
        vehicle.make,
        vehicle.style,
        vehicle.model,
        MileageBand::from_miles(vehicle.mileage),
        thousands(vehicle.mileage),
        thousands(valuation.listing_price),
    ));
    lines.push(format!(
        "The best case profit at the listing price is ${}.",
        thousands(deltas.listing_best_case)
    ));

    lines.push(String::new());
    lines.push("Listing Description:".to_string());
    lines.push(analysis.description.clone());

    lines.push(String::new());
    lines.push(format!(
        "Trade-in prices range from ${} to ${}",
        thousands(valuation.trade_in.low),
        thousands(valuation.trade_in.high),
    ));
    lines.push(format!(
        "Private party prices range from ${} to ${}",
        thousands(valuation.private_party.low),
        thousands(valuation.private_party.high),
    ));
    lines.push(format!(
        "The potential profit ranges from ${} to ${} and averages around ${}",
        thousands(deltas.worst_case),
        thousands(deltas.best_case),
        thousands(deltas.average),
    ));
    lines.push(format!(
        "The profit at listing price ranges from ${} to ${} and averages around ${}",
        thousands(deltas.listing_worst_case),
        thousands(deltas.listing_best_case),
        thousands(deltas.listing_average),
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{compare, ValuationResult};
    use crate::resolve::{ResolvedVehicle, StyleStrategy};
    use crate::valuation::{Condition, PriceBand};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn sample_analysis() -> Analysis {
        let trade_in = PriceBand {
            low: dec!(8000),
            high: dec!(9500),
            value: dec!(8700),
        };
        let private_party = PriceBand {
            low: dec!(10500),
            high: dec!(12500),
            value: dec!(11400),
        };
        let deltas = compare(&trade_in, &private_party, dec!(9800));

        Analysis {
            run_id: Uuid::new_v4(),
            vehicle: ResolvedVehicle {
                make: "Honda".to_string(),
                model: "Civic".to_string(),
                style: "EX-L".to_string(),
                year: "2015".to_string(),
                mileage: 60_000,
                condition: Condition::Fair,
            },
            style_strategy: StyleStrategy::TrimMatch,
            description: "One owner, garage kept.".to_string(),
            valuation: ValuationResult {
                trade_in,
                private_party,
                listing_price: dec!(9800),
                deltas,
            },
            generated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_briefing_header_line() {
        let text = render_briefing(&sample_analysis());
        assert!(text.contains(
            "This car is a 2015 Honda EX-L Civic with mid mileage (60,000). It's listed at $9,800."
        ));
    }

    #[test]
    fn test_briefing_ranges() {
        let text = render_briefing(&sample_analysis());
        assert!(text.contains("Trade-in prices range from $8,000 to $9,500"));
        assert!(text.contains("Private party prices range from $10,500 to $12,500"));
        assert!(text.contains(
            "The potential profit ranges from $1,000 to $4,500 and averages around $2,700"
        ));
        assert!(text.contains(
            "The profit at listing price ranges from $700 to $2,700 and averages around $1,600"
        ));
    }

    #[test]
    fn test_briefing_includes_description() {
        let text = render_briefing(&sample_analysis());
        assert!(text.contains("One owner, garage kept."));
    }
}
