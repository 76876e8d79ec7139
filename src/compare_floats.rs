pub fn min_of_2<T: PartialOrd + Copy>(first: T, second: T) -> T {
    if first < second {
        first
    } else {
        second
    }
}

pub fn max_of_2<T: PartialOrd + Copy>(first: T, second: T) -> T {
    if first > second {
        first
    } else {
        second
    }
}

/// Round to the given number of decimal places, ties to even.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    pub fn should_calc_2_as_min_of_2_and_4_ints() {
        assert_eq!(min_of_2(2, 4), 2);
    }

    #[rstest]
    pub fn should_calc_2_as_min_of_4_and_2_floats() {
        assert_eq!(min_of_2(4., 2.), 2.);
    }

    #[rstest]
    pub fn should_calc_4_as_max_of_2_and_4_ints() {
        assert_eq!(max_of_2(2, 4), 4);
    }

    #[rstest]
    pub fn should_calc_0_as_max_of_0_and_negative_float() {
        assert_eq!(max_of_2(0., -0.25), 0.);
    }

    #[rstest]
    #[case(0.1489, 3, 0.149)]
    #[case(1336.4, 0, 1336.)]
    #[case(0.125, 2, 0.12)]
    #[case(0.375, 2, 0.38)]
    #[case(2.5, 0, 2.)]
    #[case(-98.4, 0, -98.)]
    fn should_round_to_places(#[case] value: f64, #[case] places: u32, #[case] expected: f64) {
        assert_relative_eq!(round_to(value, places), expected);
    }
}
