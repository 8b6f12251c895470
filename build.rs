#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_native_radix(&outdir_path, "native_radix.rs")?;
    Ok(())
}

/// Create native_radix.rs, containing the definition of type NativeRadix
fn write_native_radix(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let bits_per_digit = env::var("BIGDIGITS_BITS_PER_DIGIT")
        .map(|s| s.parse::<u8>().expect("$BIGDIGITS_BITS_PER_DIGIT must be an integer"))
        .unwrap_or(30);

    let radix_type = match bits_per_digit {
        15 => "RADIX_2p15_u16",
        30 => "RADIX_2p30_u32",
        n => panic!("$BIGDIGITS_BITS_PER_DIGIT must be 15 or 30 (got {n})"),
    };

    let native_radix_rs_path = outdir_path.join(filename);

    let native_radix = format!("pub type NativeRadix = {radix_type};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&native_radix_rs_path) {
        Ok(existing_contents) if existing_contents == native_radix => {},
        _ => {
            let mut native_radix_rs = File::create(&native_radix_rs_path)
                .expect("Could not create native_radix.rs");
            write!(native_radix_rs, "{native_radix}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", native_radix_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "BIGDIGITS_BITS_PER_DIGIT");

    Ok(())
}
