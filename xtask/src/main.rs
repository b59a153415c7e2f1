//! Developer tasks for the stylecheck workspace.
//!
//! ```text
//! cargo run -p xtask -- man [--out-dir target/man]
//! cargo run -p xtask -- completions [--out-dir target/completions]
//! ```

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "stylecheck developer tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the stylecheck(1) man page
    Man {
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completion scripts for every supported shell
    Completions {
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man(out_dir),
        Task::Completions { out_dir } => generate_completions(out_dir),
    }
}

fn generate_man(out_dir: PathBuf) -> io::Result<()> {
    fs::create_dir_all(&out_dir)?;
    let mut page = Vec::new();
    clap_mangen::Man::new(stylecheck::command()).render(&mut page)?;
    let path = out_dir.join("stylecheck.1");
    fs::write(&path, page)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn generate_completions(out_dir: PathBuf) -> io::Result<()> {
    fs::create_dir_all(&out_dir)?;
    let mut cmd = stylecheck::command();
    for shell in Shell::value_variants() {
        let path = clap_complete::generate_to(*shell, &mut cmd, "stylecheck", &out_dir)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
