//! Components wired by hand, the way an external supervisor would.

use std::sync::Arc;

use kairei_scanner::{
    scanner::{Component, ScanChars, ScanComment, ScanInvalid, ScanKeyword, ScannerPorts},
    source::SourceFile,
    Token, TokenType,
};
use pretty_assertions::assert_eq;
use tokio::sync::mpsc;

async fn configure(io: &kairei_scanner::scanner::ScannerIo, pattern: &str, label: &str) {
    io.set.send(pattern.to_string()).await.unwrap();
    io.token_type.send(label.to_string()).await.unwrap();
}

#[tokio::test]
async fn test_keyword_scenarios() {
    let (ports, mut io) = ScannerPorts::pair(4);
    let handle = tokio::spawn(async move { ScanKeyword::new(ports).run().await });
    configure(&io, "SELECT", "KW_SELECT").await;

    let hit_file = Arc::new(SourceFile::from_text("SELECT  FROM"));
    let miss_file = Arc::new(SourceFile::from_text("SELECTOR x"));
    io.input.send(Token::new(hit_file, 0)).await.unwrap();
    io.input.send(Token::new(miss_file, 0)).await.unwrap();

    let hit = io.hit.recv().await.unwrap();
    assert_eq!(hit.value, "SELECT");
    assert_eq!(hit.token_type, Some(TokenType::from("KW_SELECT")));

    let miss = io.miss.recv().await.unwrap();
    assert_eq!(miss.value, "");
    assert_eq!(miss.token_type, None);

    drop(io.input);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_comment_scenario() {
    let (ports, mut io) = ScannerPorts::pair(4);
    let handle = tokio::spawn(async move { ScanComment::new(ports).run().await });
    configure(&io, "#", "COMMENT").await;

    io.input
        .send(Token::new(Arc::new(SourceFile::from_text("# hello\nworld")), 0))
        .await
        .unwrap();
    let hit = io.hit.recv().await.unwrap();
    assert_eq!(hit.value, "# hello");

    drop(io.input);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_whitespace_scenario() {
    let (ports, mut io) = ScannerPorts::pair(4);
    let handle = tokio::spawn(async move { ScanChars::new(ports).run().await });
    configure(&io, r" \t", "SPACE").await;

    io.input
        .send(Token::new(Arc::new(SourceFile::from_text("a  x")), 1))
        .await
        .unwrap();
    let hit = io.hit.recv().await.unwrap();
    assert_eq!(hit.value, "  ");
    assert_eq!(hit.token_type, Some(TokenType::from("SPACE")));

    drop(io.input);
    handle.await.unwrap();
}

/// keyword ─miss▶ space ─miss▶ comment ─miss▶ invalid, every hit into one sink.
#[tokio::test]
async fn test_hand_wired_cascade_classifies_every_token() {
    let (sink_tx, mut sink) = mpsc::channel::<Token>(32);
    let (input, first_in) = mpsc::channel::<Token>(2);

    let mut components: Vec<Box<dyn Component>> = Vec::new();
    let mut upstream = first_in;
    for (pattern, label) in [("let", "KW_LET"), (r" \n", "SPACE"), ("#", "COMMENT")] {
        let (set_tx, set_rx) = mpsc::channel(1);
        let (type_tx, type_rx) = mpsc::channel(1);
        let (miss_tx, miss_rx) = mpsc::channel(2);
        let ports = ScannerPorts {
            set: set_rx,
            token_type: type_rx,
            input: upstream,
            hit: sink_tx.clone(),
            miss: miss_tx,
        };
        let component: Box<dyn Component> = match label {
            "KW_LET" => Box::new(ScanKeyword::new(ports)),
            "SPACE" => Box::new(ScanChars::new(ports)),
            _ => Box::new(ScanComment::new(ports)),
        };
        components.push(component);
        set_tx.send(pattern.to_string()).await.unwrap();
        type_tx.send(label.to_string()).await.unwrap();
        upstream = miss_rx;
    }
    components.push(Box::new(ScanInvalid::new(upstream, sink_tx)));

    let handles: Vec<_> = components
        .into_iter()
        .map(|mut c| tokio::spawn(async move { c.process().await }))
        .collect();

    let file = Arc::new(SourceFile::from_text("let"));
    let others = Arc::new(SourceFile::from_text("!"));
    for i in 0..20 {
        let file = if i % 2 == 0 { &file } else { &others };
        input.send(Token::new(file.clone(), 0)).await.unwrap();
    }
    drop(input);

    let mut labels = Vec::new();
    while let Some(token) = sink.recv().await {
        labels.push(token.token_type.map(|t| t.to_string()).unwrap_or_default());
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(labels.len(), 20);
    assert_eq!(labels.iter().filter(|l| *l == "KW_LET").count(), 10);
    assert_eq!(labels.iter().filter(|l| *l == TokenType::INVALID).count(), 10);
}
