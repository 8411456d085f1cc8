use clap::Parser;
use package_sorter::utils::{logger, validation::Validate};
use package_sorter::{
    assess, validate_package, Assessment, CliConfig, OutputFormat, PackageInput, Result,
    SorterConfig,
};

fn main() {
    let cli = CliConfig::parse();

    // 載入設定檔（未指定時使用預設值）
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(cli.verbose, &config.logging.level, config.logging.json);
    tracing::debug!("CLI config: {:?}", cli);

    let json_output = match cli.format {
        Some(format) => format == OutputFormat::Json,
        None => config.json_output(),
    };

    match run(&cli) {
        Ok(assessment) => {
            tracing::debug!(
                heavy = assessment.heavy,
                bulky = assessment.bulky,
                "sorted as {}",
                assessment.category
            );
            if json_output {
                match serde_json::to_string(&assessment) {
                    Ok(line) => println!("{}", line),
                    Err(e) => {
                        eprintln!("❌ {}", e);
                        std::process::exit(3);
                    }
                }
            } else {
                println!("{}", assessment.category);
            }
        }
        Err(e) => {
            tracing::error!("❌ Sorting failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn load_config(cli: &CliConfig) -> Result<SorterConfig> {
    let config = match &cli.config {
        Some(path) => SorterConfig::from_file(path)?,
        None => SorterConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: &CliConfig) -> Result<Assessment> {
    let package = match cli.package_input()? {
        PackageInput::Measurements(package) => {
            package.validate()?;
            package
        }
        PackageInput::Record(value) => validate_package(&value)?,
    };
    Ok(assess(&package))
}
