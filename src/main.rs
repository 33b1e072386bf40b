use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use pytest_lexer::category::Category;
use pytest_lexer::config::Config;
use pytest_lexer::error::Result as LexResult;
use pytest_lexer::location::LocationBuilder;
use pytest_lexer::style::{stylesheet, ColorOverrides};
use pytest_lexer::{Span, Tokenizer};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Action, Cli};

fn read_source(source: Option<&Path>) -> anyhow::Result<String> {
    match source {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display())),
        None => io::read_to_string(io::stdin()).context("cannot read standard input"),
    }
}

fn lex(source: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let text = read_source(source)?;
    let tokenizer = Tokenizer::new()?;
    let spans: Vec<Span> = tokenizer
        .tokenize(&text)
        .collect::<LexResult<Vec<_>>>()?
        .into_iter()
        .coalesce(|left, right| left.merge(right, &text))
        .collect();
    info!(spans = spans.len(), "tokenized input");
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &spans)?;
        writeln!(out)?;
    } else {
        let locations = LocationBuilder::new(&text);
        for span in &spans {
            let (line, column) = locations.at(span.offset());
            writeln!(
                out,
                "{}:{} {} {:?}",
                line + 1,
                column + 1,
                span.category(),
                span.text()
            )?;
        }
    }
    Ok(())
}

fn print_stylesheet(config: Option<&Path>) -> anyhow::Result<()> {
    let overrides = match config {
        Some(path) => Config::from_path(path)?.colors().clone(),
        None => ColorOverrides::new(),
    };
    print!("{}", stylesheet(&overrides));
    Ok(())
}

fn categories() {
    for category in Category::ALL {
        println!(
            "{:<12}{}",
            category.name(),
            category.css_class().as_deref().unwrap_or("-")
        );
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.action {
        Action::Lex { json, source } => lex(source.as_deref(), json)?,
        Action::Stylesheet { config } => print_stylesheet(config.as_deref())?,
        Action::Categories => categories(),
    }
    Ok(())
}
