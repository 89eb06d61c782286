mod cli;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use cf_core::config::Config;
use cf_split::report::format_hms;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "clipforge=trace,cf_split=trace,cf_av=trace,cf_core=debug".to_string()
        } else {
            "clipforge=info,cf_split=info,cf_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Split {
            input,
            max,
            output_dir,
            overwrite,
            dry_run,
            json,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(split_file(
                &input,
                &max,
                output_dir,
                overwrite,
                dry_run,
                json,
                cli.config.as_deref(),
            ))
        }
        Commands::Probe { file, json } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(probe_file(&file, json, cli.config.as_deref()))
        }
        Commands::CheckTools => check_tools(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("clipforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn split_file(
    input: &Path,
    max_expr: &str,
    output_dir: Option<PathBuf>,
    overwrite: bool,
    dry_run: bool,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = Config::load_or_default(config_path);

    // Verify input file exists
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", input);
    }

    let max_part_seconds = cf_core::parse_duration(max_expr)?;
    if max_part_seconds == 0 {
        anyhow::bail!("Max segment length must be a positive number of seconds");
    }

    let tools = cf_av::ToolRegistry::discover(&config.tools);

    tracing::info!("Probing duration of {:?}", input);
    let ffprobe = tools.require("ffprobe")?;
    let total_seconds = cf_av::probe_duration(ffprobe, input).await?;

    let plan = cf_split::plan(total_seconds, max_part_seconds)?;
    tracing::info!(
        "Planned {} segments of at most {}s over {}",
        plan.len(),
        max_part_seconds,
        format_hms(plan.total_seconds())
    );

    let output_root =
        output_dir.unwrap_or_else(|| default_output_root(input, &config.split.output_suffix));

    let ffmpeg = tools.require("ffmpeg")?;
    let extractor = Arc::new(
        cf_av::FfmpegExtractor::new(ffmpeg.path.clone())
            .timeout(Duration::from_secs(config.split.tool_timeout_secs)),
    );

    let materializer = cf_split::Materializer::new(input, &output_root, extractor)?
        .overwrite(overwrite)
        .dry_run(dry_run);
    let artifacts = materializer.run(&plan).await?;

    let report = cf_split::summarize(input, &plan, &artifacts, &output_root, dry_run);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_human();
    }

    Ok(())
}

/// Default output root: a sibling directory named after the source file.
fn default_output_root(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".into());
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{stem}{suffix}"))
}

async fn probe_file(file: &Path, json: bool, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(config_path);

    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let tools = cf_av::ToolRegistry::discover(&config.tools);
    let ffprobe = tools.require("ffprobe")?;
    let duration_seconds = cf_av::probe_duration(ffprobe, file).await?;

    if json {
        let value = serde_json::json!({
            "source_file": file,
            "duration_seconds": duration_seconds,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("File: {}", file.display());
        println!(
            "Duration: {} ({duration_seconds:.3} seconds)",
            format_hms(duration_seconds.floor() as u64)
        );
    }

    Ok(())
}

fn check_tools(config_path: Option<&Path>) -> Result<()> {
    println!("Checking external tools...\n");

    let config = Config::load_or_default(config_path);
    let registry = cf_av::ToolRegistry::discover(&config.tools);
    let mut all_ok = true;

    for tool in registry.check_all() {
        let status = if tool.available {
            "ok"
        } else {
            all_ok = false;
            "MISSING"
        };

        print!("{:8} {}", tool.name, status);

        if let Some(ref version) = tool.version {
            print!(" ({version})");
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available.");
    } else {
        println!("Some tools are missing. Install ffmpeg to enable splitting.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let contents = std::fs::read_to_string(p)?;
            let config = Config::from_json(&contents)?;
            println!("Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            Config::default()
        }
    };

    println!("  Output suffix: {}", config.split.output_suffix);
    println!("  Tool timeout: {}s", config.split.tool_timeout_secs);
    if let Some(ref p) = config.tools.ffmpeg_path {
        println!("  ffmpeg override: {}", p.display());
    }
    if let Some(ref p) = config.tools.ffprobe_path {
        println!("  ffprobe override: {}", p.display());
    }

    for warning in config.validate() {
        println!("  warning: {warning}");
    }

    Ok(())
}
