use std::path::Path;

fn main() {
    let downloaded = [
        "assets/scripts/vis.js",
        "assets/scripts/canvas2svg.js",
        "assets/styles/vis-network.min.css",
    ];

    for asset in downloaded {
        if !Path::new(asset).exists() {
            println!("cargo:warning=Bundled asset not found at {asset}");
            println!("cargo:warning=Run `./scripts/fetch-assets.sh` to download the visualization scripts");
        }
        println!("cargo:rerun-if-changed={asset}");
    }

    println!("cargo:rerun-if-changed=assets/templates/template.html");
    println!("cargo:rerun-if-changed=assets/styles/slider.css");
    println!("cargo:rerun-if-changed=build.rs");
}
