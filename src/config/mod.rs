pub mod document;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::core::inspect::{OutputFormat, Shape};
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "ec2-model")]
    #[command(about = "Decode and inspect EC2 request and result documents")]
    pub struct CliConfig {
        #[arg(long, help = "Shape to decode the document as")]
        pub shape: Option<String>,

        #[arg(long, help = "JSON or TOML document to decode")]
        pub input: Option<String>,

        #[arg(long, default_value = "display", help = "Output format: display or json")]
        pub format: OutputFormat,

        #[arg(long, help = "List every shape that can be decoded and exit")]
        pub list_shapes: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn shape(&self) -> Result<Shape> {
            let name = validation::validate_required_field("shape", &self.shape)?;
            Shape::from_name(name)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if self.list_shapes {
                return Ok(());
            }

            let name = validation::validate_required_field("shape", &self.shape)?;
            validation::validate_non_empty_string("shape", name)?;
            Shape::from_name(name)?;

            let input = validation::validate_required_field("input", &self.input)?;
            validation::validate_path("input", input)?;
            validation::validate_extension("input", input, &["json", "toml"])
        }
    }

}
