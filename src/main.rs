use country_net::{config::DEFAULT_N_COUNTRIES, make_plot, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    make_plot(DEFAULT_N_COUNTRIES)?;
    Ok(())
}
