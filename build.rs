use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use vergen::{BuildBuilder, CargoBuilder, Emitter, RustcBuilder};
use vergen_gitcl::{Emitter as GitEmitter, GitclBuilder};

/// Config profiles that ship next to the demo binaries
///
/// Only these are copied; any other file under config/ stays a local
/// override loaded through CONFIG_DIR or the working directory.
const SHIPPED_PROFILES: &[&str] = &["debug", "release"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    emit_build_info()?;

    let profile = env::var("PROFILE")?;
    let dest = config_dir(Path::new(&env::var("OUT_DIR")?))?;
    fs::create_dir_all(&dest)?;
    for name in profiles_for(&profile) {
        ship_profile(name, &dest)?;
    }

    Ok(())
}

/// Build and git metadata read by `build_info`
fn emit_build_info() -> Result<(), Box<dyn std::error::Error>> {
    let build = BuildBuilder::default().build_timestamp(true).build()?;
    let cargo = CargoBuilder::default().opt_level(true).target_triple(true).build()?;
    let rustc = RustcBuilder::default().semver(true).channel(true).build()?;
    let git = GitclBuilder::default()
        .sha(true)
        .branch(true)
        .commit_timestamp(true)
        .dirty(true)
        .build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&rustc)?
        .emit()?;
    GitEmitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}

/// `target/<profile>/config`, three levels above OUT_DIR
fn config_dir(out_dir: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let target = out_dir
        .ancestors()
        .nth(3)
        .ok_or("OUT_DIR is not inside a target directory")?;
    Ok(target.join("config"))
}

/// Release builds carry only release.toml; dev builds carry every shipped profile
fn profiles_for(cargo_profile: &str) -> Vec<&'static str> {
    SHIPPED_PROFILES
        .iter()
        .copied()
        .filter(|name| cargo_profile != "release" || *name == "release")
        .collect()
}

fn ship_profile(name: &str, dest: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source = PathBuf::from(format!("config/{name}.toml"));
    println!("cargo:rerun-if-changed={}", source.display());
    if source.exists() {
        fs::copy(&source, dest.join(format!("{name}.toml")))?;
    } else {
        println!("cargo:warning=shipped profile {} is missing", source.display());
    }
    Ok(())
}
