use std::f64::consts::{PI, TAU};

// Into (-π, π]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = PI - (PI - angle).rem_euclid(TAU);
    // rem_euclid can round up to TAU for inputs just below a multiple of it
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
