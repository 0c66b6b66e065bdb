use mesh_sandbox::{app, config::Config};

fn main() -> anyhow::Result<()> {
    let config = Config::from_args(std::env::args().skip(1))?;
    app::run(config)
}
