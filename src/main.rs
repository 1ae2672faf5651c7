use clap::Parser;
use pdfdocs::{Cli, OutputFormatter, OutputMode, PdfDocs, PdfDocsError, UserFriendlyError};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();
    setup_logging(cli.verbosity_level());

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Resolves the backend too: nothing below runs without one.
    let pdfdocs = match PdfDocs::from_cli(&cli) {
        Ok(pdfdocs) => pdfdocs,
        Err(e) => {
            print_startup_error(&cli, &e);
            return exit_code_for(&e);
        }
    };

    let directory = cli.target_directory();

    if cli.dry_run {
        return handle_dry_run(&pdfdocs, &directory);
    }

    match pdfdocs.run(&directory) {
        Ok(report) => {
            pdfdocs.output_formatter().print_run_summary(&report);
            0
        }
        Err(e) => {
            pdfdocs.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &PdfDocsError) -> i32 {
    match error {
        PdfDocsError::InvalidPath { .. } | PdfDocsError::Config { .. } => 2,
        PdfDocsError::BackendUnavailable { .. } => 3,
        PdfDocsError::OutputWrite { .. } => 4,
        _ => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "pdfdocs.toml".to_string());

    match PdfDocs::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  pdfdocs <directory> --config {}", config_path);
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(pdfdocs: &PdfDocs, directory: &std::path::Path) -> i32 {
    let formatter = pdfdocs.output_formatter();

    formatter.start_operation("DRY RUN MODE - no PDF will be read and no file will be written");
    formatter.print_separator();

    let documents = match pdfdocs.discover(directory) {
        Ok(documents) => documents,
        Err(e) => {
            pdfdocs.handle_error(&e);
            return exit_code_for(&e);
        }
    };

    let config = pdfdocs.config();
    println!("  Directory:  {}", directory.display());
    println!("  Backend:    {}", pdfdocs.backend_name());
    println!("  Extensions: {}", config.scan.extensions.join(", "));
    if !config.scan.exclude_patterns.is_empty() {
        println!("  Excluding:  {}", config.scan.exclude_patterns.join(", "));
    }

    formatter.print_separator();

    if documents.is_empty() {
        formatter.print_no_documents(directory);
        return 0;
    }

    let writer = pdfdocs::OutputWriter::new(&config.output);
    for document in &documents {
        println!(
            "  {} ({}) -> {}",
            document.filename,
            document.format_size(),
            writer.output_path_for(document).display()
        );
    }

    formatter.print_separator();
    formatter.success(&format!("{} PDF files would be processed", documents.len()));
    0
}

fn print_startup_error(cli: &Cli, error: &PdfDocsError) {
    let mode = match cli.output_format {
        pdfdocs::OutputFormat::Json => OutputMode::Json,
        _ => OutputMode::Human,
    };
    let formatter = OutputFormatter::new(mode, 0, false);
    formatter.print_user_friendly_error(error);
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG takes precedence over -v.
    let env = env_logger::Env::default().default_filter_or(format!("pdfdocs={}", level));
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfdocs::Config;
    use std::fs;
    use tempfile::TempDir;

    fn base_cli() -> Cli {
        Cli {
            directory: None,
            config: None,
            backend: None,
            suffix: None,
            exclude: None,
            no_echo: false,
            output_format: pdfdocs::OutputFormat::Plain,
            verbose: 0,
            quiet: true,
            dry_run: false,
            generate_config: false,
        }
    }

    #[test]
    fn test_generate_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let cli = Cli {
            config: Some(config_path.clone()),
            generate_config: true,
            ..base_cli()
        };

        assert_eq!(handle_generate_config(&cli), 0);

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[scan]"));
        assert!(Config::load_from_file(&config_path).is_ok());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            exit_code_for(&PdfDocsError::BackendUnavailable { name: "x".to_string() }),
            3
        );
        assert_eq!(
            exit_code_for(&PdfDocsError::InvalidPath { path: "x".to_string() }),
            2
        );
        assert_eq!(
            exit_code_for(&PdfDocsError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"))),
            1
        );
    }

    #[cfg(feature = "lopdf")]
    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.pdf"), b"%PDF-1.4").unwrap();

        let cli = Cli {
            directory: Some(dir.path().to_path_buf()),
            ..base_cli()
        };
        let pdfdocs = PdfDocs::from_cli(&cli).unwrap();
        assert_eq!(handle_dry_run(&pdfdocs, dir.path()), 0);
        assert!(!dir.path().join("a_extracted.txt").exists());
    }

    #[test]
    fn test_unknown_backend_fails_startup() {
        let cli = Cli {
            backend: Some("mupdf".to_string()),
            ..base_cli()
        };

        let err = PdfDocs::from_cli(&cli).err().unwrap();
        assert_eq!(exit_code_for(&err), 3);
    }
}
