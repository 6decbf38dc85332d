//! Implementation of the `wordform rules` command.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use wordform::{CaseMode, Inflector, IrregularMap, RuleCategory, RuleTable};

use super::{load_inflector, print_json};
use crate::output::table::format_rule_table;

/// Arguments for the rules command.
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Category to list: transliteration, uninflected, singular or plural
    pub category: String,

    /// JSON rule file merged into the default rules
    #[arg(long, env = "WORDFORM_RULES")]
    pub rules: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PairJson<'a> {
    pattern: &'a str,
    replacement: &'a str,
}

#[derive(Serialize)]
struct RuleJson<'a> {
    pattern: &'a str,
    replacement: &'a str,
    case_sensitive: bool,
}

#[derive(Serialize)]
struct IrregularJson<'a> {
    word: &'a str,
    inflected: &'a str,
}

#[derive(Serialize)]
struct TableJson<'a> {
    rules: Vec<RuleJson<'a>>,
    irregular: Vec<IrregularJson<'a>>,
    uninflected: &'a [String],
}

fn case_label(case: CaseMode) -> &'static str {
    match case {
        CaseMode::Insensitive => "insensitive",
        CaseMode::Sensitive => "sensitive",
    }
}

fn print_word_list(words: &[String], json: bool) {
    if json {
        print_json(&words);
    } else {
        let rows: Vec<Vec<String>> = words.iter().map(|word| vec![word.clone()]).collect();
        println!("{}", format_rule_table(vec!["Pattern"], &rows));
    }
}

fn print_transliteration(inflector: &Inflector, json: bool) {
    let map = inflector.transliteration();
    if json {
        let pairs: Vec<PairJson<'_>> = map
            .iter()
            .map(|rule| PairJson {
                pattern: rule.pattern(),
                replacement: rule.replacement(),
            })
            .collect();
        print_json(&pairs);
    } else {
        let rows: Vec<Vec<String>> = map
            .iter()
            .map(|rule| vec![rule.pattern().to_string(), rule.replacement().to_string()])
            .collect();
        println!("{}", format_rule_table(vec!["Pattern", "Replacement"], &rows));
    }
}

fn print_table(table: &RuleTable, irregular: &IrregularMap, json: bool) {
    if json {
        let output = TableJson {
            rules: table
                .rules()
                .iter()
                .map(|rule| RuleJson {
                    pattern: rule.pattern(),
                    replacement: rule.replacement(),
                    case_sensitive: rule.case() == CaseMode::Sensitive,
                })
                .collect(),
            irregular: irregular
                .iter()
                .map(|(word, inflected)| IrregularJson { word, inflected })
                .collect(),
            uninflected: table.uninflected(),
        };
        print_json(&output);
        return;
    }

    let rules: Vec<Vec<String>> = table
        .rules()
        .iter()
        .map(|rule| {
            vec![
                rule.pattern().to_string(),
                rule.replacement().to_string(),
                case_label(rule.case()).to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        format_rule_table(vec!["Pattern", "Replacement", "Case"], &rules)
    );

    if !irregular.is_empty() {
        let pairs: Vec<Vec<String>> = irregular
            .iter()
            .map(|(word, inflected)| vec![word.to_string(), inflected.to_string()])
            .collect();
        println!("{}", format_rule_table(vec!["Word", "Inflected"], &pairs));
    }

    if !table.uninflected().is_empty() {
        let words: Vec<Vec<String>> = table
            .uninflected()
            .iter()
            .map(|word| vec![word.clone()])
            .collect();
        println!("{}", format_rule_table(vec!["Uninflected"], &words));
    }
}

/// Run the rules command.
pub fn run_rules(args: RulesArgs) -> miette::Result<i32> {
    let category: RuleCategory = match args.category.parse() {
        Ok(category) => category,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(exitcode::DATAERR);
        }
    };

    let inflector = match load_inflector(args.rules.as_deref()) {
        Ok(inflector) => inflector,
        Err(report) => {
            eprintln!("{:?}", report);
            return Ok(exitcode::DATAERR);
        }
    };

    match category {
        RuleCategory::Transliteration => print_transliteration(&inflector, args.json),
        RuleCategory::Uninflected => print_word_list(inflector.uninflected(), args.json),
        RuleCategory::Singular => print_table(
            inflector.singular_table(),
            inflector.singular_irregular(),
            args.json,
        ),
        RuleCategory::Plural => print_table(
            inflector.plural_table(),
            inflector.plural_table().irregular(),
            args.json,
        ),
    }
    Ok(exitcode::OK)
}
