fn main() {
    // Stamp the binary with its build time for `stringplot --version`
    let build_date = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string();
    println!("cargo:rustc-env=STRINGPLOT_BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-changed=build.rs");
}
