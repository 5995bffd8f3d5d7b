//! Hashes a literal string and prints the digest as lowercase hex.

use sha256_core::sha256;

fn main() -> sha256_core::Result<()> {
    let digest = sha256("hello world")?;

    println!("{digest}");

    Ok(())
}
