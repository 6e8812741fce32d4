// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
             _
  ___  __ _ | |  ___  ___   ___  _ __ __   __ ___
 / __|/ _` || | / __|/ __| / _ \| '__|\ \ / // _ \
| (__| (_| || || (__ \__ \|  __/| |    \ V /|  __/
 \___|\__,_||_| \___||___/ \___||_|     \_/  \___|

    Four-function calculator over HTTP
"#;
    println!("{}", banner);
}
