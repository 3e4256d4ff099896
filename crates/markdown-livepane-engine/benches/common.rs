// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n### Detail\n\nA *longer* line with an unmatched * and ```inline fence``` text.\n\n```rust\nfn example() {\n    println!(\"**not bold**\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(tokens: usize) -> String {
    let mut line = String::new();
    for i in 0..tokens {
        match i % 4 {
            0 => line.push_str("plain words "),
            1 => line.push_str("**bold** "),
            2 => line.push_str("*italic* "),
            _ => line.push_str("`code` "),
        }
    }
    line.push('\n');
    line
}
