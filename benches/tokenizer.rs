use criterion::{black_box, criterion_group, criterion_main, Criterion};

use css3_tokenizer::{tokenize, TokenizerConfig};

const SAMPLE: &str = r#"
/* Navbar */
#header .nav {
    font-size: 1.1rem;
    margin: -1.5e2px 50%;
    background: url(images/header.png) no-repeat;
}

@media screen and (max-width: 200px) {
    .nav > li[href^='https']:hover {
        content: "me \26  you";
        width: calc(100% - 2em);
    }
}

@font-face {
    unicode-range: U+26?, u+0-7f, U+1F4A9;
}
"#;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tokenizer");
    group.significance_level(0.1).sample_size(500);

    let stylesheet = SAMPLE.repeat(50);

    group.bench_function("stylesheet", |b| {
        b.iter(|| tokenize(black_box(&stylesheet), TokenizerConfig::default()))
    });

    group.bench_function("stylesheet with comments", |b| {
        let config = TokenizerConfig {
            preserve_comments: true,
            ..Default::default()
        };
        b.iter(|| tokenize(black_box(&stylesheet), config))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
