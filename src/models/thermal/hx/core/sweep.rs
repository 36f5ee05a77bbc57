//! Share sweeps for analysis tooling.

use crate::support::{
    constraint::ConstraintResult,
    mixture::{Component, Mixture},
    units::EntropyRate,
};
use uom::{ConstZero, si::f64::Power};

use super::{ExchangerInput, SolveConfig, numeric::round_to, solve_with};

/// One evaluation of a share sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Share assigned to the first component of each mixture.
    pub share: f64,

    /// Inferred heat duty, else the input's hint, else zero.
    pub heat_duty: Power,

    /// Entropy production of this variant.
    pub entropy_production: EntropyRate,
}

/// Varies the first component's share in both mixtures from zero to one.
///
/// Shares advance by `step` and are rounded to ten decimals. At each share
/// the remaining components split `1 - share` evenly; a single-component
/// mixture keeps its share at one. Every variant is solved independently.
/// At most `limit` points are returned, and none if either mixture is empty
/// or `step` is not positive.
///
/// # Errors
///
/// Returns `Err` if a split share falls outside `[0, 1]`, which only happens
/// through floating-point overshoot at the end of the range.
pub fn vary_first_share(
    input: &ExchangerInput,
    step: f64,
    limit: usize,
) -> ConstraintResult<Vec<SweepPoint>> {
    if !(step.is_finite() && step > 0.0)
        || input.cold_mixture.is_empty()
        || input.hot_mixture.is_empty()
    {
        return Ok(Vec::new());
    }

    let config = SolveConfig::default();
    let hint = input.heat_duty.unwrap_or(Power::ZERO);

    std::iter::successors(Some(0.0), |share| Some(share + step))
        .take_while(|share| *share <= 1.0 + 1e-12)
        .map(|share| round_to(share, 10).min(1.0))
        .take(limit)
        .map(|share| -> ConstraintResult<SweepPoint> {
            let variant = ExchangerInput {
                cold_mixture: with_first_share(&input.cold_mixture, share)?,
                hot_mixture: with_first_share(&input.hot_mixture, share)?,
                ..input.clone()
            };
            let solution = solve_with(&variant, &config);
            Ok(SweepPoint {
                share,
                heat_duty: solution.heat_duty.unwrap_or(hint),
                entropy_production: solution.entropy_production,
            })
        })
        .collect()
}

fn with_first_share(mixture: &Mixture, share: f64) -> ConstraintResult<Mixture> {
    let Some((first, rest)) = mixture.components().split_first() else {
        return Ok(Mixture::empty());
    };
    if rest.is_empty() {
        return Ok(Mixture::new(vec![first.with_share(1.0)?]));
    }

    #[allow(clippy::cast_precision_loss)]
    let remainder = (1.0 - share) / rest.len() as f64;
    std::iter::once(first.with_share(share))
        .chain(rest.iter().map(|c| c.with_share(remainder)))
        .collect::<ConstraintResult<Vec<Component>>>()
        .map(Mixture::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::kilowatt;

    use crate::models::thermal::hx::core::{
        Schema, Stream,
        test_support::{water_ethanol, water_like_input},
    };

    #[test]
    fn shares_run_from_zero_to_one() {
        let points = vary_first_share(&water_like_input(Schema::Mixing), 0.1, 200).unwrap();

        assert_eq!(points.len(), 11);
        assert_relative_eq!(points[0].share, 0.0);
        assert_relative_eq!(points[3].share, 0.3);
        assert_relative_eq!(points[10].share, 1.0);

        // Single-component mixtures are unaffected by the sweep.
        for point in &points {
            assert_relative_eq!(point.heat_duty.get::<kilowatt>(), 84.0);
        }
    }

    #[test]
    fn limit_caps_the_point_count() {
        let points = vary_first_share(&water_like_input(Schema::Mixing), 0.1, 4).unwrap();
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn degenerate_requests_yield_nothing() {
        let input = water_like_input(Schema::Mixing);
        assert!(vary_first_share(&input, 0.0, 10).unwrap().is_empty());
        assert!(vary_first_share(&input, -0.5, 10).unwrap().is_empty());

        let empty = ExchangerInput {
            hot_mixture: Mixture::empty(),
            ..input
        };
        assert!(vary_first_share(&empty, 0.1, 10).unwrap().is_empty());
    }

    #[test]
    fn remainder_is_split_over_other_components() {
        let mixture = with_first_share(&water_ethanol(), 0.2).unwrap();
        let shares: Vec<f64> = mixture.components().iter().map(Component::share).collect();

        assert_relative_eq!(shares[0], 0.2);
        assert_relative_eq!(shares[1], 0.8);
    }

    #[test]
    fn duty_follows_cold_mixture_composition() {
        let input = ExchangerInput::new(
            Stream::from_working_units(290.0, 300.0, 1.0).unwrap(),
            Stream::from_working_units(350.0, 330.0, 1.0).unwrap(),
            water_ethanol(),
            water_ethanol(),
            Schema::Mixing,
        );

        let points = vary_first_share(&input, 0.5, 10).unwrap();

        // W_c = water share * 4.2 + ethanol share * 2.44, times 20 K.
        let expected = [2.44 * 20.0, 3.32 * 20.0, 4.2 * 20.0];
        assert_eq!(points.len(), 3);
        for (point, q) in points.iter().zip(expected) {
            assert_relative_eq!(point.heat_duty.get::<kilowatt>(), q, epsilon = 1e-6);
        }
    }
}
