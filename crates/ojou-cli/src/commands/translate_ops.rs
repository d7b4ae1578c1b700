use std::io::{self, BufRead, Read};
use std::process;

use serde::Serialize;

use ojou_core::tokenizer::parse_mecab;
use ojou_core::translator::seeded_rng;
use ojou_core::{rewrite, Token, Translator};

use super::Common;

/// Translate `text`, or every non-empty stdin line when omitted.
pub fn translate(common: &Common, text: Option<&str>) {
    let settings = common.settings();
    let mut translator = die!(
        Translator::from_settings(&settings, common.dictionary()),
        "Error starting analyzer: {}"
    );
    match text {
        Some(text) => println!("{}", translator.translate(text)),
        None => {
            for line in io::stdin().lock().lines() {
                let line = die!(line, "Error reading stdin: {}");
                if line.trim().is_empty() {
                    continue;
                }
                println!("{}", translator.translate(&line));
            }
        }
    }
}

#[derive(Serialize)]
struct RewriteReport<'a> {
    tokens: &'a [Token],
    output: &'a str,
}

/// Rewrite MeCab output read from stdin, bypassing the analyzer.
pub fn rewrite_analyzed(common: &Common, json: bool) {
    let settings = common.settings();
    let dict = common.dictionary();
    let mut rng = seeded_rng(&settings.random);

    let mut input = String::new();
    die!(io::stdin().read_to_string(&mut input), "Error reading stdin: {}");
    let tokens = die!(parse_mecab(&input), "Error parsing analyzer output: {}");
    let output = die!(rewrite(&tokens, &dict, &mut rng), "Error: {}");

    if json {
        let report = RewriteReport {
            tokens: &tokens,
            output: &output,
        };
        let text = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{text}");
    } else {
        println!("{output}");
    }
}
