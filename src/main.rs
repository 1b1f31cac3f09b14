//! Shiftbreak CLI
//!
//! Usage:
//!   shiftbreak --input cipher.txt                  # Ranked analysis
//!   shiftbreak --text "Wkh txlfn eurzq ira"        # Inline ciphertext
//!   shiftbreak -i cipher.txt --top 10              # Top 10 solutions
//!   shiftbreak -i cipher.txt --json -o out.json    # JSON export
//!   shiftbreak -i cipher.txt --find-flag           # Search FLAG{...}
//!   shiftbreak -i cipher.txt --complexity -v       # Complexity + breakdown
//!   shiftbreak -i cipher.txt --compare             # Heuristics side by side
//!   shiftbreak -i cipher.txt --report --json       # Decision report

use std::path::PathBuf;
use clap::{ArgGroup, Parser};
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shiftbreak::core::{
    CaesarAnalyzer, explain_confidence, export_results, find_flag, read_ciphertext,
    save_flag, to_json,
};
use shiftbreak::types::{
    DecisionReport, Heuristic, MethodComparison, RankedResult, ScoringWeights, TextComplexity,
};
use shiftbreak::{AnalyzerResult, DEFAULT_DATA_DIR, DEFAULT_TOP_N, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "shiftbreak",
    version = VERSION,
    about = "Break Caesar ciphers by brute force and linguistic scoring",
    long_about = "Shiftbreak tries all 25 shifts of a Caesar ciphertext and ranks\n\
                  the candidate plaintexts by how much they look like English.\n\n\
                  Heuristics (default weight):\n  \
                  stopwords   0.30  stopword density vs. 25%\n  \
                  dictionary  0.25  share of dictionary words\n  \
                  frequency   0.20  chi-square vs. English letters\n  \
                  bigrams     0.15  common bigram density vs. 12.5%\n  \
                  entropy     0.10  Shannon entropy vs. 4.07 bits\n\n\
                  Set RUST_LOG=debug for diagnostics on stderr."
)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "text"])))]
struct Args {
    /// File containing the ciphertext
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Ciphertext given inline
    #[arg(long)]
    text: Option<String>,

    /// Write JSON results to this file (with --json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of ranked solutions to show
    #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Search the top solutions for FLAG{...}
    #[arg(short, long)]
    find_flag: bool,

    /// File the flag is saved to
    #[arg(long, default_value = "flag.txt")]
    flag_file: PathBuf,

    /// Show length/reliability assessment of the ciphertext
    #[arg(short, long)]
    complexity: bool,

    /// Compare the heuristics across the best hypotheses
    #[arg(long)]
    compare: bool,

    /// Print the full decision report
    #[arg(long)]
    report: bool,

    /// Directory with stopwords_en.txt and words_en.txt
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// JSON file with custom heuristic weights
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Show frequency analysis and per-heuristic scores
    #[arg(short, long)]
    verbose: bool,

    /// Only print the best key and plaintext
    #[arg(short, long)]
    quiet: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> AnalyzerResult<()> {
    // clap guarantees one of --input / --text
    let ciphertext = match &args.input {
        Some(path) => read_ciphertext(path)?,
        None => args.text.as_deref().unwrap_or_default().trim().to_string(),
    };

    let mut analyzer = CaesarAnalyzer::new(&args.data_dir);
    if let Some(path) = &args.weights {
        analyzer = analyzer.with_weights(ScoringWeights::load(path)?);
    }

    let chatty = !args.quiet && !args.json;

    if chatty {
        print_header(args, &ciphertext);
    }

    if args.complexity && chatty {
        print_complexity(&analyzer.text_complexity(&ciphertext));
    }

    let result = analyzer.rank(&ciphertext, args.top, None);

    if args.json {
        match &args.output {
            Some(path) => export_results(&result, path)?,
            None => println!("{}", to_json(&result)?),
        }
    } else if args.quiet {
        if let Some(best) = &result.best_solution {
            println!("{}\t{}", best.key, best.plaintext);
        }
    } else {
        print_results(&result, args.verbose);
        if args.verbose {
            print_breakdown(&analyzer, &result);
        }
    }

    if args.find_flag {
        let flag = save_flag(&result, &args.flag_file)?;
        if chatty {
            print_flag(flag.as_deref(), args);
        } else if args.quiet {
            if let Some(flag) = find_flag(&result) {
                println!("{}", flag);
            }
        }
    }

    if args.compare {
        let comparison = analyzer.compare_methods(&ciphertext, args.top);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        } else if !args.quiet {
            print_comparison(&comparison);
        }
    }

    if args.report {
        let report = analyzer.decision_report(&ciphertext);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else if !args.quiet {
            print_decision_report(&report);
        }
    }

    if chatty {
        print_statistics(&result);
        println!();
        println!("{}", "=".repeat(60));
    }

    Ok(())
}

/// Print header
fn print_header(args: &Args, ciphertext: &str) {
    println!("{}", format!("Shiftbreak v{} - Caesar cryptanalysis", VERSION).bold());
    println!("{}", "=".repeat(60));
    if let Some(path) = &args.input {
        println!("Input file:   {}", path.display());
    }
    println!("Length:       {} characters", ciphertext.chars().count());
    println!(
        "Letters:      {}",
        ciphertext.chars().filter(|c| c.is_alphabetic()).count()
    );
    println!("{}", "-".repeat(60));
}

/// Print complexity assessment
fn print_complexity(c: &TextComplexity) {
    println!();
    println!("{}", "TEXT COMPLEXITY".bold());
    println!("   Words:          {}", c.word_count);
    println!("   Letters:        {}", c.letter_count);
    println!("   Length class:   {:?}", c.length_class);
    println!("   Reliability:    {}", c.reliability);
    println!("   Recommendation: {}", c.recommendation);
    println!("   Text type:      {}", c.probable_text_type);
    println!("   Focus:          {}", c.analysis_focus);
    println!("   Vocabulary:     {}", c.vocabulary_assessment);
    println!("   Letters/word:   {:.2}", c.info_density);
    if c.is_analyzable {
        println!("   Analyzable:     {}", "yes".green());
    } else {
        println!("   Analyzable:     {}", "no".red());
        println!("   {}", "Warning: text too short for a reliable analysis".yellow());
    }
}

/// Print best solution and ranking table
fn print_results(result: &RankedResult, verbose: bool) {
    let best = match &result.best_solution {
        Some(b) => b,
        None => {
            println!();
            println!("{}", "No solution: ciphertext is empty".yellow());
            return;
        }
    };

    println!();
    println!("{}", "BEST SOLUTION".bold());
    println!("   Key:          {}", best.key);
    println!("   Score:        {:.2}/100", best.score);
    println!(
        "   Confidence:   {}",
        best.confidence.label().color(best.confidence.color())
    );
    println!("   Why:          {}", explain_confidence(result));
    println!();
    println!("{}", "PLAINTEXT".bold());
    println!("{}", "-".repeat(40));
    println!("{}", best.plaintext);
    println!("{}", "-".repeat(40));

    let top = &result.top_solutions;
    if !top.is_empty() && (verbose || top.len() > 1) {
        println!();
        println!("{}", format!("TOP {} SOLUTIONS", top.len()).bold());
        println!("{}", "-".repeat(70));
        println!("{:<5} {:<4} {:<8} {:<12} Preview", "Rank", "Key", "Score", "Confidence");
        println!("{}", "-".repeat(70));
        for (i, c) in top.iter().enumerate() {
            let preview: String = if c.preview.chars().count() > 40 {
                format!("{}...", c.preview.chars().take(37).collect::<String>())
            } else {
                c.preview.clone()
            };
            let label = format!("{:<12}", c.confidence.label());
            println!(
                "{:<5} {:<4} {:<8.1} {} {}",
                i + 1,
                c.key,
                c.score,
                label.color(c.confidence.color()),
                preview
            );
        }
        println!("{}", "-".repeat(70));
    }

    if verbose {
        let fa = &result.frequency_analysis;
        if let Some(letter) = fa.most_common_letter {
            println!();
            println!("{}", "FREQUENCY ANALYSIS".bold());
            println!("   Most common letter: '{}'", letter);
            match fa.estimated_key {
                Some(k) => println!("   Estimated key:      {}", k),
                None => println!("   Estimated key:      n/a"),
            }
            let top3: Vec<String> = fa
                .top_frequencies
                .iter()
                .take(3)
                .map(|(c, n)| format!("'{}'({})", c, n))
                .collect();
            println!("   Top letters:        {}", top3.join(", "));
        }
    }
}

/// Print per-heuristic scores of the best solution
fn print_breakdown(analyzer: &CaesarAnalyzer, result: &RankedResult) {
    let best = match &result.best_solution {
        Some(b) => b,
        None => return,
    };
    let breakdown = analyzer.scorer().analyze(&best.plaintext);

    println!();
    println!("{}", "HEURISTIC BREAKDOWN (best solution)".bold());
    for h in Heuristic::ALL {
        println!(
            "   {:<11} {:>6.2}  (w={:.2})",
            h.name(),
            breakdown.get(h),
            analyzer.weights().get(h)
        );
    }
    println!("   strongest:  {}", breakdown.strongest());
}

/// Print flag search outcome
fn print_flag(flag: Option<&str>, args: &Args) {
    println!();
    match flag {
        Some(f) => {
            println!("{} {}", "FLAG FOUND:".green().bold(), f);
            println!("   Saved to: {}", args.flag_file.display());
        }
        None => println!("{}", "No FLAG{...} pattern in the top solutions".yellow()),
    }
}

/// Print heuristic comparison table
fn print_comparison(cmp: &MethodComparison) {
    println!();
    println!("{}", "METHOD COMPARISON".bold());
    println!("{}", "-".repeat(70));
    println!(
        "{:<4} {:>6} {:>6} {:>6} {:>6} {:>6} {:>8}  Preview",
        "Key", "stop", "dict", "freq", "bigr", "entr", "combined"
    );
    println!("{}", "-".repeat(70));
    for m in &cmp.method_comparison {
        let s = &m.scores;
        println!(
            "{:<4} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>8.1}  {}",
            m.key, s.stopwords, s.dictionary, s.frequency, s.bigrams, s.entropy, s.combined,
            m.plaintext_preview
        );
    }
    println!("{}", "-".repeat(70));
    println!("   {}", cmp.recommendation.cyan());
}

/// Print decision report
fn print_decision_report(report: &DecisionReport) {
    let complexity = &report.text_complexity_decision;
    let confidence = &report.confidence_assessment;
    let validation = &report.validation_decisions;

    println!();
    println!("{}", "DECISION REPORT".bold());
    println!("   Length class:       {:?}", complexity.length_class);
    println!("   Reliability:        {}", complexity.reliability_warning);
    println!("   Recommended action: {}", complexity.recommended_action);
    println!("   Focus area:         {}", report.scoring_strategy.focus_area);
    match confidence.level {
        Some(level) => println!(
            "   Confidence:         {:.2} ({})",
            confidence.score,
            level.label().color(level.color())
        ),
        None => println!("   Confidence:         {}", "undetermined".yellow()),
    }
    println!("   Justification:      {}", confidence.justification);
    println!("   Analyzable:         {}", validation.is_text_analyzable);
    println!("   Needs calibration:  {}", validation.needs_calibration);
    println!("   Vocabulary:         {}", validation.vocabulary_quality);
}

/// Print ranking statistics
fn print_statistics(result: &RankedResult) {
    let s = &result.statistics;
    println!();
    println!("{}", "STATISTICS".bold());
    println!("   Analysis time:     {:.3}s", s.analysis_time_seconds);
    println!("   Hypotheses tested: {}", s.total_hypotheses);
    println!("   Score range:       {:.1} - {:.1}", s.min_score, s.max_score);
    println!("   Mean score:        {:.1}", s.mean_score);
    println!("   Std deviation:     {:.1}", s.std_deviation);
    println!("   Confidence gap:    {:.1}", s.confidence_gap);
}
