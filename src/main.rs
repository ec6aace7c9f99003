use group_draw::{AppError, LaunchConfig};

fn main() -> Result<(), AppError> {
    // Set up logging; level via RUST_LOG
    env_logger::init();

    // Run the group draw application
    group_draw::run_app(LaunchConfig::from_env())
}
