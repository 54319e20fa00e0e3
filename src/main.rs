//! fsform - render admin forms from fieldset schemas
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use flextype_forms::core::logging;
use flextype_forms::{render_job, RenderJob};

/// fsform - render admin forms from fieldset schemas
#[derive(Parser, Debug)]
#[command(name = "fsform")]
#[command(about = "Render admin panel forms from fieldset schemas", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a fieldset to HTML
    Render {
        /// Fieldset schema file (.yaml, .yml, .json)
        #[arg(value_name = "FIELDSET")]
        fieldset: PathBuf,

        /// Entry file with current values (.yaml, .json, .md)
        #[arg(long, value_name = "FILE")]
        entry: Option<PathBuf>,

        /// Entry id used to list the entry's media
        #[arg(long)]
        id: Option<String>,

        /// Project root (defaults to the current directory)
        #[arg(long, value_name = "PATH")]
        project: Option<PathBuf>,

        /// Write the HTML to a file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Create a default .fsform/config.toml
    Init {
        /// Project root (defaults to the current directory)
        #[arg(long, value_name = "PATH")]
        project: Option<PathBuf>,
    },
}

fn project_or_cwd(project: Option<PathBuf>) -> PathBuf {
    project.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init().wrap_err("Failed to initialize logging")?;

    match args.command {
        Command::Render {
            fieldset,
            entry,
            id,
            project,
            output,
        } => {
            let job = RenderJob {
                fieldset,
                entry,
                entry_id: id,
                project: project_or_cwd(project),
            };

            let html = render_job(&job).wrap_err_with(|| {
                format!(
                    "Failed to render {} (log: {})",
                    job.fieldset.display(),
                    logging::get_current_log_file().display()
                )
            })?;

            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                    eprintln!("✅ Wrote {}", path.display());
                }
                None => println!("{}", html),
            }
        }
        Command::Init { project } => {
            let project = project_or_cwd(project);
            let path = flextype_forms::app::init_config_dir(&project)
                .wrap_err("Failed to create config")?;
            eprintln!("✅ Config at {}", path.display());
        }
    }

    Ok(())
}
