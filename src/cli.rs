use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Markdown from Java - Generate API documentation from the public surface of Java sources
#[derive(Parser, Debug)]
#[command(name = "markdown-from-java")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Root directory to scan recursively for Java sources
    #[arg(short = 'd', long = "dir", value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "markdown")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Skip files that fail to parse instead of aborting
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown document
    Markdown,
    /// JSON dump of the documentation model
    Json,
    /// YAML dump of the documentation model
    Yaml,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.dir.exists() {
        anyhow::bail!("Source directory does not exist: {}", args.dir.display());
    }

    if !args.dir.is_dir() {
        anyhow::bail!("Source path is not a directory: {}", args.dir.display());
    }

    info!("Source directory: {}", args.dir.display());
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }

    Ok(args)
}

/// Scan, parse and fold every source file into a model, then render it.
///
/// All files are parsed before the first unit is added to the model. A parse
/// failure aborts the run unless `keep_going` is set, in which case the file
/// is skipped.
pub fn generate(args: &CliArgs) -> Result<String> {
    use crate::model::Model;
    use crate::parser::{AstParser, ParsedFile};
    use crate::scanner::FileScanner;
    use crate::serializer::{serialize_json, serialize_markdown, serialize_yaml};

    // Step 1: Scan directory for Java files
    info!("Scanning source directory...");
    let scanner = FileScanner::new(args.dir.clone());
    let scan_result = scanner.scan()?;

    info!("Found {} Java files", scan_result.java_files.len());
    if scan_result.java_files.is_empty() {
        warn!("No Java files found in {}", args.dir.display());
    }

    // Step 2: Parse every file
    info!("Parsing Java files...");
    let mut parsed_files: Vec<ParsedFile> = Vec::with_capacity(scan_result.java_files.len());
    for result in AstParser::parse_files(&scan_result.java_files) {
        match result {
            Ok(parsed) => parsed_files.push(parsed),
            Err(e) if args.keep_going => warn!("Skipping file: {:#}", e),
            Err(e) => return Err(e),
        }
    }
    info!("Successfully parsed {} files", parsed_files.len());

    // Step 3: Fold units into the model
    let mut model = Model::new();
    for parsed in &parsed_files {
        debug!("Adding {}", parsed.path.display());
        model.add_unit(&parsed.unit);
    }
    info!("Documented {} packages", model.namespaces().len());

    // Step 4: Serialize to requested format
    info!("Serializing to {:?} format...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Markdown => serialize_markdown(&model),
        OutputFormat::Json => serialize_json(&model)?,
        OutputFormat::Yaml => serialize_yaml(&model)?,
    };

    Ok(content)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::serializer::write_to_file;

    info!("Starting documentation generation...");
    let content = generate(&args)?;

    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, output_path)?;
        info!("Successfully wrote documentation to {}", output_path.display());
    } else {
        println!("{}", content);
    }

    info!("Generation complete!");
    Ok(())
}
