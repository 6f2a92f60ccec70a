use flight_dynamics::utils::angles::{deg_to_rad, lerp};
use flight_dynamics::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("flight dynamics core v{}", version());

    let mut dynamics = match std::env::args().nth(1) {
        Some(path) => FlightDynamics::with_properties(AircraftProperties::from_json_file(path)?)?,
        None => FlightDynamics::new(),
    };
    info!("aircraft: {}", dynamics.properties().name);

    dynamics.initialize(Vector3D::new(0.0, 1_000.0, 0.0), deg_to_rad(30.0));
    dynamics.set_throttle(0.8);

    // Seeded so that repeated runs fly the same path
    let mut rng = StdRng::seed_from_u64(42);
    let (mut aileron, mut elevator, mut rudder) = (0.0, 0.0, 0.0);

    let mut telemetry = Telemetry::new();
    let mut elapsed_time = 0.0;
    while elapsed_time < MAX_SIMULATION_TIME {
        aileron = lerp(aileron, rng.gen_range(-0.3..=0.3), 0.05);
        elevator = lerp(elevator, rng.gen_range(-0.2..=0.4), 0.05);
        rudder = lerp(rudder, rng.gen_range(-0.1..=0.1), 0.05);
        dynamics.set_control_surfaces(aileron, elevator, rudder);

        dynamics.update(TIME_STEP);
        telemetry.collect_data(&dynamics, TIME_STEP);
        elapsed_time += TIME_STEP;
    }

    telemetry.display_data((1.0 / TIME_STEP) as usize);

    Ok(())
}
