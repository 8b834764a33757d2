// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "Water is H~2~O and glucose is C~6~H~12~O~6~.\n\nThis is ~~struck~~ and ~so is this~, but `H~2~O` is code.\n\nSpaced C~6 ~H~ 12~O~ 6~ tildes and a lone ~ stay literal.\n\n";
    base.repeat(size)
}

/// A single long line full of tildes that never close as subscripts.
#[allow(dead_code)]
pub fn generate_tilde_heavy_line(size: usize) -> String {
    "a~b c~ ".repeat(size)
}
