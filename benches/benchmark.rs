use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kairei_scanner::{
    config::{MatcherKind, NetworkConfig},
    network::Network,
    scanner::{CharsMatcher, KeywordMatcher, Matcher},
    source::SourceFile,
    Token, TokenType,
};

fn sample_source() -> Arc<SourceFile> {
    let line = "select name, age from users where age >= 42 # adults\n";
    Arc::new(SourceFile::from_text(&line.repeat(200)))
}

fn bench_matchers(c: &mut Criterion) {
    let file = sample_source();
    let ident = CharsMatcher::configure("[a-zA-Z_]", TokenType::from("IDENT"));
    let literal = CharsMatcher::configure("abcdefghijklmnopqrstuvwxyz_", TokenType::from("IDENT"));
    let keyword = KeywordMatcher::configure("select", TokenType::from("KW_SELECT"));

    c.bench_function("chars class every position", |b| {
        b.iter(|| {
            (0..file.len())
                .filter(|pos| ident.scan(Token::new(file.clone(), *pos)).is_hit())
                .count()
        })
    });
    c.bench_function("chars literal every position", |b| {
        b.iter(|| {
            (0..file.len())
                .filter(|pos| literal.scan(Token::new(file.clone(), *pos)).is_hit())
                .count()
        })
    });
    c.bench_function("keyword every position", |b| {
        b.iter(|| {
            (0..file.len())
                .filter(|pos| keyword.scan(Token::new(file.clone(), *pos)).is_hit())
                .count()
        })
    });
}

fn bench_network(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let config = NetworkConfig::default()
        .with_matcher(MatcherKind::Comment, "#", "COMMENT")
        .with_matcher(MatcherKind::Keyword, "select", "KW_SELECT")
        .with_matcher(MatcherKind::Keyword, "from", "KW_FROM")
        .with_matcher(MatcherKind::Keyword, ">=", "OP_GE")
        .with_matcher(MatcherKind::Chars, r" \t\n", "SPACE")
        .with_matcher(MatcherKind::Chars, "[0-9]", "NUMBER")
        .with_matcher(MatcherKind::Chars, "[a-zA-Z_]", "IDENT");
    let file = sample_source();

    c.bench_function("network tokenize", |b| {
        b.iter(|| {
            runtime.block_on(async {
                let mut network = Network::build(&config).await.unwrap();
                let tokens = network.tokenize(black_box(file.clone())).await.unwrap();
                network.shutdown().await.unwrap();
                tokens.len()
            })
        })
    });
}

criterion_group!(benches, bench_matchers, bench_network);
criterion_main!(benches);
