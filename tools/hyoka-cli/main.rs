use clap::Parser;
use hyoka::prelude::*;
use std::time::Instant;

mod telemetry;

/// Compile an application form and evaluate a candidate submission against it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the application form JSON file
    form_path: Option<String>,
    /// Optional path to the submission JSON file to evaluate
    submission_path: Option<String>,

    /// Fail on the first configuration error instead of ignoring the broken rule
    #[arg(long)]
    strict: bool,

    /// Treat tagging rules without their own `caseSensitive` flag as case-sensitive
    #[arg(long)]
    case_sensitive_tags: bool,

    /// Write the compiled form to this artifact file
    #[arg(long, value_name = "PATH")]
    save: Option<String>,

    /// Load a compiled form artifact instead of compiling a form JSON
    #[arg(long, value_name = "PATH", conflicts_with = "form_path")]
    load: Option<String>,

    /// Print results as JSON instead of one line per question
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init(&cli.log_level) {
        exit_with_error(&e.to_string());
    }

    let total_start = Instant::now();

    // --- 1. Obtain a compiled form ---
    let compile_start = Instant::now();
    let compiled = match (&cli.load, &cli.form_path) {
        (Some(artifact_path), _) => FormArtifact::from_file(artifact_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load artifact: {}", e)))
            .into_form(),
        (None, Some(form_path)) => compile_form(form_path, cli.strict, cli.case_sensitive_tags),
        (None, None) => exit_with_error("A form path or --load <artifact> is required."),
    };
    let compile_duration = compile_start.elapsed();

    eprintln!(
        "Compiled {} questions ({} diagnostics) in {:?}",
        compiled.questions.len(),
        compiled.diagnostics.len(),
        compile_duration
    );
    for diagnostic in &compiled.diagnostics {
        eprintln!("  -> {}", diagnostic);
    }

    if let Some(save_path) = &cli.save {
        FormArtifact::new(compiled.clone())
            .save(save_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save artifact: {}", e)));
        eprintln!("  -> Wrote compiled form to '{}'", save_path);
    }

    // --- 2. Evaluate the submission, if any ---
    let Some(submission_path) = &cli.submission_path else {
        return;
    };
    let submission = Submission::from_file(submission_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load submission: {}", e)));

    let evaluator = Evaluator::new(compiled);
    let eval_start = Instant::now();
    let outcomes = evaluator.evaluate_submission(&submission);
    let eval_duration = eval_start.elapsed();

    if cli.json {
        let json = serde_json::to_string_pretty(&outcomes)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize results: {}", e)));
        println!("{}", json);
    } else {
        for outcome in &outcomes {
            println!(
                "{}: {}",
                outcome.question_id,
                ResultFormatter::format_result(&outcome.result)
            );
        }
    }

    eprintln!("\n--- Performance Summary ---");
    eprintln!("Compilation:      {:?}", compile_duration);
    eprintln!("Evaluation:       {:?}", eval_duration);
    eprintln!("Total Execution:  {:?}", total_start.elapsed());
}

fn compile_form(form_path: &str, strict: bool, case_sensitive_tags: bool) -> CompiledForm {
    let form = ApplicationForm::from_file(form_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load form: {}", e)));

    Compiler::builder(form)
        .strict(strict)
        .tagging_case_sensitive(case_sensitive_tags)
        .build()
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
