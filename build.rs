use clap::CommandFactory;
use clap_complete::{Generator, Shell};
use clap_mangen::Man;
use std::error::Error;
use std::path::{Path, PathBuf};

// Include the CLI definition from the library crate
include!("src/cli/app.rs");

const BIN_NAME: &str = "pddl";

// Shells whose completion scripts are packaged with the release.
const PACKAGED_SHELLS: [Shell; 3] = [Shell::Bash, Shell::Zsh, Shell::Fish];

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=src/cli/app.rs");

    if std::env::var("CARGO_CFG_TARGET_ARCH").is_ok_and(|arch| arch == "wasm32") {
        return Ok(());
    }

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    write_man_pages(&out_dir.join("man"))?;
    write_completions(&out_dir.join("completions"))?;
    Ok(())
}

/// `pddl.1` plus one page per user-facing subcommand.
fn write_man_pages(dir: &Path) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(dir)?;
    let cmd = Cli::command();
    render_man(Man::new(cmd.clone()), &dir.join(format!("{}.1", BIN_NAME)))?;

    // `completions` only matters to packagers, who get the scripts directly.
    for sub in cmd.get_subcommands().filter(|s| s.get_name() != "completions") {
        let name = format!("{}-{}", BIN_NAME, sub.get_name());
        let page = Man::new(sub.clone()).title(name.to_uppercase());
        render_man(page, &dir.join(format!("{}.1", name)))?;
    }
    Ok(())
}

fn render_man(page: Man, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut buf = Vec::new();
    page.render(&mut buf)?;
    std::fs::write(path, buf)?;
    Ok(())
}

fn write_completions(dir: &Path) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(dir)?;
    for shell in PACKAGED_SHELLS {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
        std::fs::write(dir.join(shell.file_name(BIN_NAME)), buf)?;
    }
    Ok(())
}
