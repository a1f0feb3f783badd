//! Build script for agro-dashboard.
//!
//! Copies the emissions CSV to OUT_DIR so it can be embedded via
//! `include_str!`. Without the fixture a small built-in sample is written
//! instead so the app still builds and renders.

use std::env;
use std::fs;
use std::io;
use std::path::Path;

const SOURCE: &str = "../fixtures/Agrofood_co2_emission.csv";

const SAMPLE: &str = "\
Area,Year,Savanna fires,Forest fires,Fires in organic soils,Fires in humid tropical forests,Forestland,Net Forest conversion,Manure left on Pasture,Fertilizers Manufacturing,Pesticides Manufacturing,Rural population,Urban population,total_emission
Sample,2000,10,5,0,1,-100,20,300,50,10,1000,500,2000
Sample,2001,12,4,0,1,-90,25,310,55,11,990,520,2100
";

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;
    let dest = Path::new(&out_dir).join("emissions.csv");
    let src = Path::new(SOURCE);

    if src.exists() {
        fs::copy(src, &dest)?;
    } else {
        fs::write(&dest, SAMPLE)?;
        println!("cargo:warning=Fixture file {} not found, using built-in sample", SOURCE);
    }

    println!("cargo:rerun-if-changed={}", SOURCE);
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
