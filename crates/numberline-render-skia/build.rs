// File: crates/numberline-render-skia/build.rs
// Summary: Build script; links the Windows system libraries Skia/ICU need for the raster backend.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
