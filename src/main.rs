use clap::Parser;
use customer_fmt::config::{Command, OutputFormat, ResolvedOptions};
use customer_fmt::core::batch::{self, RenderedCustomer};
use customer_fmt::utils::logger;
use customer_fmt::utils::validation::validate_path;
use customer_fmt::{CliConfig, Customer, CustomerError, Result, TomlConfig};
use rust_decimal::Decimal;
use std::str::FromStr;

fn main() {
    let cli = CliConfig::parse();

    let loaded = cli.load_options();

    // 日誌格式跟隨輸出格式（設定檔或 --output）；設定載入失敗時只看旗標
    let json_logs = match &loaded {
        Ok((_, options)) => options.output == OutputFormat::Json,
        Err(_) => cli.output.as_deref() == Some("json"),
    };
    if json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let result = loaded.and_then(|(file_config, options)| run(&cli, file_config, options));
    if let Err(e) = result {
        tracing::error!("❌ customer-fmt failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &CliConfig, file_config: Option<TomlConfig>, options: ResolvedOptions) -> Result<()> {
    if let Some(path) = &cli.config {
        tracing::info!("📁 Loaded configuration from: {}", path);
    }

    let customers = match &cli.command {
        Command::Render {
            name,
            phone,
            revenue,
        } => {
            let revenue = Decimal::from_str(revenue.trim()).map_err(|_| {
                CustomerError::InvalidNumber {
                    field: "revenue".to_string(),
                    value: revenue.clone(),
                }
            })?;
            vec![Customer::new(name.as_str(), phone.as_str(), revenue)?]
        }
        Command::Batch { input } => {
            validate_path("--input", input)?;
            tracing::info!("📥 Reading customers from: {}", input);
            batch::read_customers_from_file(input)?
        }
        Command::List => match file_config {
            Some(config) => config.customers,
            None => {
                return Err(CustomerError::ConfigError {
                    message: "'list' needs --config with [[customers]] entries".to_string(),
                })
            }
        },
        Command::Sample => vec![Customer::default()],
    };

    let provider = options.provider();
    let rendered = batch::render_all(&customers, options.specifier.code(), provider.as_ref())?;
    tracing::debug!("Rendered {} customer(s)", rendered.len());

    print_rendered(&rendered, options.output)
}

fn print_rendered(rendered: &[RenderedCustomer], output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => {
            for customer in rendered {
                println!("{}", customer.rendered);
            }
        }
        OutputFormat::Json => println!("{}", batch::to_json(rendered)?),
    }
    Ok(())
}
