use schema::ReferenceTables;
use std::env;
use std::fs;
use std::path::Path;

const DEX_SOURCE: &str = "data/dex.ron";

fn main() {
    println!("cargo:rerun-if-changed={}", DEX_SOURCE);

    let source = fs::read_to_string(DEX_SOURCE)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", DEX_SOURCE, e));
    let tables: ReferenceTables = ron::from_str(&source)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", DEX_SOURCE, e));

    // Embedded by `Dex::bundled`.
    let bytes = tables
        .to_postcard()
        .unwrap_or_else(|e| panic!("Failed to encode reference tables: {}", e));

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("dex.postcard");
    fs::write(&dest, bytes).unwrap_or_else(|e| panic!("Failed to write {}: {}", dest.display(), e));
}
