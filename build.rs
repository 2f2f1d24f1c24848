fn main() {
    // Footer copyright year comes from the build timestamp
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    // Embedded site content
    println!("cargo:rerun-if-changed=data");
}
