use crate::generators::core::*;
use crate::generators::numbers::*;
use crate::types::Natural;

/// Generates any natural number.
pub fn naturals() -> impl Generator<Item = Natural> + Clone {
    u64s().map(Natural::new)
}

/// Generates natural numbers uniformly from `min` to `max`, inclusive of
/// both, shrinking toward `min`. Panics if `min > max`.
///
/// The full range behaves exactly like [`naturals`](fn.naturals.html).
pub fn naturals_in_range(min: Natural, max: Natural) -> impl Generator<Item = Natural> + Clone {
    u64s().between(min.get(), max.get()).map(Natural::new)
}

#[cfg(test)]
mod tests {
    use crate::data::*;
    use crate::generators::core::tests::*;
    use crate::generators::*;
    use crate::property;
    use crate::types::Natural;

    fn nat(n: u64) -> Natural {
        Natural::new(n)
    }

    #[test]
    fn naturals_should_generate_same_output_given_same_input() {
        should_generate_same_output_given_same_input(naturals())
    }

    #[test]
    fn naturals_in_range_usually_generates_different_output_for_different_inputs() {
        usually_generates_different_output_for_different_inputs(naturals_in_range(nat(0), nat(5)))
    }

    #[test]
    fn naturals_in_range_minimize_to_lower_bound() {
        should_minimize_to(naturals_in_range(nat(3), nat(10)), nat(3))
    }

    #[test]
    fn naturals_in_range_reach_the_upper_bound() {
        let pool = InfoPool::of_vec(vec![0xff; 8]);
        assert_eq!(naturals_in_range(nat(0), nat(5)).generate_from(&pool), Ok(nat(5)));
    }

    #[test]
    fn degenerate_range_always_yields_its_bound() {
        property(naturals_in_range(nat(3), nat(3))).check(|n| n == nat(3));
    }

    #[test]
    fn full_range_matches_naturals() {
        let full = naturals_in_range(Natural::ZERO, Natural::MAX);
        property(info_pools(8)).check(|pool| full.generate_from(&pool) == naturals().generate_from(&pool));
    }
}
