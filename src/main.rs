use anyhow::Context;
use clap::Parser;
use std::io::Write;
use rental_form_kit::config::LogFormat;
use rental_form_kit::utils::{logger, validation::Validate};
use rental_form_kit::{replay_page, AppConfig, CliConfig, Command, Formatter, PageFixture, RentalError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            logger::init_logger(cli.verbose, LogFormat::Compact);
            report_and_exit(&e);
        }
    };

    logger::init_logger(cli.verbose, config.logging.format);
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli, &config) {
        Ok(output) => {
            writeln!(std::io::stdout().lock(), "{}", output).context("writing result to stdout")?;
            Ok(())
        }
        Err(e) => report_and_exit(&e),
    }
}

fn load_config(cli: &CliConfig) -> rental_form_kit::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(today) = &cli.today {
        config.clock.today = Some(today.clone());
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &CliConfig, config: &AppConfig) -> rental_form_kit::Result<String> {
    let formatter = Formatter::new(config.locale_formatter());

    let output = match &cli.command {
        Command::Currency { amount } => formatter.format_currency(*amount),
        Command::Date { date } => formatter.format_date(date),
        Command::Days { start, end } => formatter.calculate_rental_days(start, end)?.to_string(),
        Command::Quote {
            start,
            end,
            daily_rate,
        } => {
            let quote = formatter.quote(start, end, *daily_rate)?;
            format!(
                "{} - {}: {} day(s) x {} = {}",
                quote.start, quote.end, quote.days, quote.formatted_rate, quote.formatted_total
            )
        }
        Command::Simulate { page } => {
            tracing::info!("Loading page fixture from {}", page.display());
            let content = std::fs::read_to_string(page)?;
            let fixture: PageFixture = toml::from_str(&content)?;
            let report = replay_page(&fixture, &config.clock()?)?;
            serde_json::to_string_pretty(&report)?
        }
    };

    Ok(output)
}

fn report_and_exit(e: &RentalError) -> ! {
    tracing::error!("{}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
