use clap::Parser;
use ec2_model::utils::{logger, validation::Validate};
use ec2_model::{CliConfig, Inspector, Shape};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.list_shapes {
        for name in Shape::names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let shape = config.shape()?;
    let Some(input) = config.input.as_deref() else {
        anyhow::bail!("--input is required");
    };

    match Inspector::new(shape, config.format).inspect_file(input) {
        Ok(inspection) => {
            println!("{}", inspection.rendered);
            if config.verbose {
                println!("hash code: {}", inspection.hash_code);
            }
        }
        Err(e) => {
            tracing::error!("Failed to inspect {}: {}", input, e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
