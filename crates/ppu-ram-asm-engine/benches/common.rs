// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_source(sprites: usize, backgrounds: usize) -> String {
    let mut content = String::new();

    for sprite in 0..sprites {
        for row in 0..16 {
            let line: String = (0..16)
                .map(|col| char::from(b'0' + ((sprite + row + col) % 4) as u8))
                .collect();
            content.push_str(&line);
            content.push('\n');
        }
    }

    content.push_str("nametables\n");

    for background in 0..backgrounds {
        for row in 0..15 {
            let indices: Vec<String> = (0..20)
                .map(|col| (background * 300 + row * 20 + col) % sprites.clamp(1, 256))
                .map(|index| index.to_string())
                .collect();
            content.push_str(&indices.join(" "));
            content.push('\n');
        }
    }

    content
}
