use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(name = "manifest-icons")]
#[command(about = "Generate the PNG icons referenced by the web app manifest")]
struct Cli {
    /// Directory the icon files are written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match manifest_icons::commands::generate::run(&cli.out_dir) {
        Ok(_) => {
            println!();
            println!("Icons generated successfully!");
            println!("Note: For better-looking icons, consider using a design tool like Figma or Canva.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}
