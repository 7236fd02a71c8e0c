/// Meters gained (+) or lost (-) per m/s of tailwind (-) / headwind (+).
const HEADWIND_FACTOR: f64 = 2.5;
/// Meters lost per m/s of crosswind, from either side.
const CROSSWIND_FACTOR: f64 = 0.8;

/// Estimate how much the wind changes a shot's carry, in whole meters.
///
/// `wind_direction_degrees` uses the meteorological convention (direction the
/// wind blows from, relative to the target line): 0 is straight into the
/// player's face, 180 is straight behind. A positive result means the shot
/// flies further, a negative one means it comes up short.
///
/// `distance_meters` is accepted so callers can pass the whole shot; the
/// estimate does not scale with it.
pub fn wind_impact(_distance_meters: u32, wind_speed_ms: f64, wind_direction_degrees: f64) -> i32 {
    if wind_speed_ms.is_nan() || wind_speed_ms <= 0.0 {
        return 0;
    }

    let radians = wind_direction_degrees.to_radians();
    let headwind = radians.cos() * wind_speed_ms;
    let crosswind = radians.sin() * wind_speed_ms;

    let impact = -headwind * HEADWIND_FACTOR - crosswind.abs() * CROSSWIND_FACTOR;
    impact.round() as i32
}

/// Distance the shot effectively plays after wind.
pub fn plays_like_distance(distance_meters: u32, wind_speed_ms: f64, wind_direction_degrees: f64) -> i64 {
    let impact = wind_impact(distance_meters, wind_speed_ms, wind_direction_degrees);
    i64::from(distance_meters) - i64::from(impact)
}
