use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use salarystats::config::parse_languages;
use salarystats::models::Report;
use salarystats::{
    report, Config, HeadHunterClient, OutputFormat, PipelineConfig, SalaryPipeline,
    SuperJobClient,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceArg {
    /// hh.ru
    Hh,
    /// superjob.ru
    Sj,
    All,
}

#[derive(Parser, Debug)]
#[command(name = "salarystats")]
#[command(version = "0.1.0")]
#[command(about = "Rank programming languages by average advertised salary")]
struct Args {
    /// Job boards to query
    #[arg(short, long, value_enum, default_value = "all")]
    source: SourceArg,

    /// Comma-separated languages (defaults to LANGUAGES or the built-in list)
    #[arg(short, long)]
    languages: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("salarystats=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let languages = match args.languages.as_deref() {
        Some(list) => parse_languages(list),
        None => config.languages.clone(),
    };
    if languages.is_empty() {
        anyhow::bail!("no languages to query");
    }

    // Missing credentials must fail before any source is queried
    let superjob_token = match args.source {
        SourceArg::Sj | SourceArg::All => Some(config.require_superjob_token()?),
        SourceArg::Hh => None,
    };

    let mut pipeline_config = PipelineConfig::from(&config);
    pipeline_config.show_progress = !args.no_progress;

    let mut reports = Vec::new();

    if matches!(args.source, SourceArg::Hh | SourceArg::All) {
        let client = HeadHunterClient::new(config.headhunter.clone(), config.http_timeout)?;
        let pipeline = SalaryPipeline::new(client, pipeline_config.clone());
        tracing::info!("Collecting headhunter statistics for {} languages", languages.len());
        reports.push(pipeline.run(&languages).await?);
    }

    if let Some(token) = superjob_token {
        let client = SuperJobClient::new(token, config.superjob.clone(), config.http_timeout)?;
        let pipeline = SalaryPipeline::new(client, pipeline_config.clone());
        tracing::info!("Collecting superjob statistics for {} languages", languages.len());
        reports.push(pipeline.run(&languages).await?);
    }

    output_reports(&reports, &args)?;

    Ok(())
}

fn output_reports(reports: &[Report], args: &Args) -> anyhow::Result<()> {
    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(reports)?,
        format => reports
            .iter()
            .map(|r| report::render(r, format))
            .collect::<Result<Vec<_>, _>>()?
            .join("\n"),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
