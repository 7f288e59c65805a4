/// The 16 compass points, clockwise from north in 22.5° steps.
pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Map a wind direction in degrees to its compass label.
///
/// Sectors are centred on each point, so 11.24° is still "N" while 11.25° is "NNE".
/// Negative and >360° inputs wrap around.
pub fn compass_label(degrees: f64) -> &'static str {
    let sector = (degrees / 22.5 + 0.5).floor() as i64;
    COMPASS_POINTS[sector.rem_euclid(16) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "N")]
    #[case(11.24, "N")]
    #[case(11.25, "NNE")]
    #[case(45.0, "NE")]
    #[case(90.0, "E")]
    #[case(180.0, "S")]
    #[case(270.0, "W")]
    #[case(348.74, "NNW")]
    #[case(348.75, "N")]
    #[case(360.0, "N")]
    #[case(-90.0, "W")]
    fn labels(#[case] degrees: f64, #[case] expected: &str) {
        assert_eq!(compass_label(degrees), expected);
    }

    #[test]
    fn periodic_over_full_turn() {
        for deg in -720..=720 {
            let deg = f64::from(deg);
            assert_eq!(compass_label(deg), compass_label(deg + 360.0), "deg = {deg}");
        }
    }
}
