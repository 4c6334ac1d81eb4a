use std::env;
use std::path::Path;
use toklex::config::runtime::RuntimeConfig;
use toklex::{logging, pipeline};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <source-file> [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    let options = parse_options(&args[2..]);

    // Assemble runtime configuration before the logging system starts
    let mut config = match &options.config_path {
        Some(path) => RuntimeConfig::from_file(Path::new(path))?,
        None => RuntimeConfig::default(),
    };
    if options.structured_logs {
        config.logging.use_structured_logging = true;
    }
    if options.quiet {
        config.logging.min_log_level = toklex::config::runtime::LogLevel::Error;
    }

    // Initialize global logging system
    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()?;

    // Validate pipeline configuration
    pipeline::validate_pipeline()?;

    process_single_file(&args[1], &config)?;

    Ok(())
}

#[derive(Debug, Default)]
struct CliOptions {
    config_path: Option<String>,
    structured_logs: bool,
    quiet: bool,
}

fn parse_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 < args.len() {
                    options.config_path = Some(args[i + 1].clone());
                    i += 1; // Skip the path argument
                } else {
                    eprintln!("Warning: --config requires a file path");
                }
            }
            "--structured-logs" => {
                options.structured_logs = true;
            }
            "--quiet" => {
                options.quiet = true;
            }
            _ => {
                eprintln!("Warning: Unknown option '{}'", args[i]);
            }
        }
        i += 1;
    }

    options
}

fn print_help(program_name: &str) {
    println!("toklex v{}", env!("CARGO_PKG_VERSION"));
    println!("Line-oriented lexical token classifier");
    println!();
    println!("USAGE:");
    println!("    {} <source-file> [options]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <source-file>    Path to the source file to analyze");
    println!();
    println!("OPTIONS:");
    println!("    --help                 Show this help message");
    println!("    --config <file.toml>   Load runtime preferences from a TOML file");
    println!("    --structured-logs      Emit log events as JSON");
    println!("    --quiet                Suppress all logging below error level");
    println!();
    println!("OUTPUT:");
    println!("    One line per token ('text -> category') followed by a");
    println!("    per-category summary block with the total token count.");
    println!();
    println!("EXAMPLES:");
    println!("    {} program.c                       # Analyze one file", program_name);
    println!("    {} program.c --quiet               # Report only", program_name);
    println!("    {} program.c --config lex.toml     # Custom preferences", program_name);
    println!();

    // Print pipeline capabilities
    let pipeline_info = pipeline::get_pipeline_info();
    println!("PIPELINE CAPABILITIES:");
    for line in pipeline_info.report().lines() {
        println!("    {}", line);
    }
}

fn process_single_file(
    file_path: &str,
    config: &RuntimeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match pipeline::process_file_with_preferences(file_path, &config.lexical) {
        Ok(result) => {
            if config.lexical.include_positions_in_output {
                print!("{}", result.report_with_positions());
            } else {
                print!("{}", result.report());
            }
        }
        Err(error) => {
            eprintln!("FAILED: {}", error);
            print_detailed_error(&error);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_detailed_error(error: &pipeline::PipelineError) {
    match error {
        pipeline::PipelineError::FileProcessing(ref file_err) => {
            let code = file_err.error_code();
            eprintln!("File processing stage failed:");
            eprintln!("  {}", file_err);
            eprintln!("  code: {}", code);
            let action = logging::codes::get_action(code.as_str());
            if action != "No specific action available" {
                eprintln!("  action: {}", action);
            }
        }
        pipeline::PipelineError::Pipeline { message } => {
            eprintln!("Pipeline error: {}", message);
        }
    }
}
