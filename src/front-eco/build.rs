fn main() {
    // The page is static: the backend URL is fixed when the wasm module is built.
    println!("cargo::rerun-if-env-changed=API_URL");

    // Only forward a non-empty value so the page can tell "unset" apart.
    if let Ok(api_url) = std::env::var("API_URL")
        && !api_url.trim().is_empty()
    {
        println!("cargo::rustc-env=ECO_API_URL={}", api_url.trim());
    }
}
