//! Distance classification.
//!
//! Buckets are half-open and belong to the upper band at each boundary:
//!
//! | distance            | letter |
//! |---------------------|--------|
//! | `0`                 | `A`    |
//! | `1 ..= 39999`       | `B`    |
//! | `40000 ..= 99999999`| `C`    |
//! | `>= 100000000`      | `D`    |
//!
//! Digit strings too large for `u64` are beyond every boundary and map to
//! `D`.

use avm_model::{DistanceValue, Letter, is_magellanic_cloud};

/// Lower bound of the `B` band.
pub const NEAR_LIMIT: u64 = 1;

/// Lower bound of the `C` band.
pub const GALACTIC_LIMIT: u64 = 40_000;

/// Lower bound of the `D` band.
pub const EXTRAGALACTIC_LIMIT: u64 = 100_000_000;

/// Letter for a category label and distance. Total and deterministic.
///
/// The Magellanic Cloud labels always classify as `C`, whatever the
/// distance says.
pub fn classify(category: &str, distance: &DistanceValue) -> Letter {
    if is_magellanic_cloud(category) {
        return Letter::C;
    }
    classify_distance(distance)
}

/// Letter derived from the distance alone.
pub fn classify_distance(distance: &DistanceValue) -> Letter {
    match distance {
        DistanceValue::Marker | DistanceValue::Redshift(_) => Letter::D,
        DistanceValue::Empty => Letter::None,
        DistanceValue::Digits(_) => distance.integer().map_or(Letter::D, bucket),
        DistanceValue::Other(_) => Letter::E,
    }
}

fn bucket(value: u64) -> Letter {
    if value < NEAR_LIMIT {
        Letter::A
    } else if value < GALACTIC_LIMIT {
        Letter::B
    } else if value < EXTRAGALACTIC_LIMIT {
        Letter::C
    } else {
        Letter::D
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(category: &str, distance: &str) -> Letter {
        classify(category, &DistanceValue::parse(distance))
    }

    #[test]
    fn magellanic_clouds_override_distance() {
        assert_eq!(letter("Galaxy > Magellanic Clouds", ""), Letter::C);
        assert_eq!(letter("Galaxy > Magellanic Cloud", "D"), Letter::C);
        assert_eq!(letter("Galaxy > Magellanic Cloud", "5"), Letter::C);
    }

    #[test]
    fn marker_and_redshift_are_d() {
        assert_eq!(letter("Galaxy > Spiral", "D"), Letter::D);
        assert_eq!(letter("Galaxy > Spiral", "-;z=1.2"), Letter::D);
        assert_eq!(letter("Galaxy > Spiral", "-;"), Letter::D);
    }

    #[test]
    fn empty_distance_has_no_letter() {
        assert_eq!(letter("Galaxy > Spiral", ""), Letter::None);
    }

    #[test]
    fn digit_bands() {
        assert_eq!(letter("Star > Nova", "0"), Letter::A);
        assert_eq!(letter("Star > Nova", "2"), Letter::B);
        assert_eq!(letter("Star > Nova", "39999"), Letter::B);
        assert_eq!(letter("Star > Nova", "50000"), Letter::C);
        assert_eq!(letter("Star > Nova", "99999999"), Letter::C);
        assert_eq!(letter("Star > Nova", "100000000"), Letter::D);
        assert_eq!(letter("Star > Nova", "13000000000"), Letter::D);
    }

    #[test]
    fn boundaries_belong_to_upper_band() {
        assert_eq!(letter("Star > Nova", "1"), Letter::B);
        assert_eq!(letter("Star > Nova", "40000"), Letter::C);
        assert_eq!(letter("Star > Nova", "100000000"), Letter::D);
    }

    #[test]
    fn leading_zeros_are_numeric() {
        assert_eq!(letter("Star > Nova", "000"), Letter::A);
        assert_eq!(letter("Star > Nova", "0040000"), Letter::C);
    }

    #[test]
    fn overflowing_digits_are_d() {
        assert_eq!(letter("Star > Nova", "99999999999999999999999"), Letter::D);
    }

    #[test]
    fn non_numeric_is_e() {
        assert_eq!(letter("Star > Nova", "unknown"), Letter::E);
        assert_eq!(letter("Star > Nova", "1.5"), Letter::E);
        assert_eq!(letter("Star > Nova", "-3"), Letter::E);
        assert_eq!(letter("Star > Nova", " 12"), Letter::E);
    }
}
