//! Create command

use anyhow::{anyhow, Context, Result};
use camino::Utf8PathBuf;

use ampere_scaffold::{CreateRequest, ScaffoldOptions, ScaffoldReport, Scaffolder, TemplateStore};
use tracing::debug;

use crate::cli::{CreateArgs, FrontendArg};
use crate::output;
use crate::progress::SpinnerObserver;

pub async fn run(args: CreateArgs, debug: bool) -> Result<()> {
    output::header("Create Ampere Project");

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow!("Current directory is not valid UTF-8: {}", p.display()))?;

    let templates = match &args.template_dir {
        Some(dir) => {
            debug!("Using templates from {}", dir);
            TemplateStore::from_dir(dir.clone())
        }
        None => TemplateStore::bundled(),
    };

    let options = ScaffoldOptions {
        frontend_strategy: args.frontend.into(),
        ..ScaffoldOptions::default()
    };
    let retry_hint = format!(
        "{} {}",
        options.generator.program,
        options.generator.args.join(" ")
    );

    output::kv("Project name", &args.name);
    output::kv(
        "Frontend",
        match args.frontend {
            FrontendArg::Generator => "interactive generator",
            FrontendArg::Template => "bundled template",
        },
    );
    if let Some(dir) = &args.template_dir {
        output::kv("Templates", dir.as_str());
    }
    output::kv("Location", cwd.join(&args.name).as_str());
    println!();

    let request = CreateRequest {
        name: args.name.clone(),
        skip_deps: args.skip_deps,
    };

    // The spinner would fight the timestamped log lines in debug mode
    let outcome = if debug {
        Scaffolder::new(&templates, options)
            .run(&request, &cwd)
            .await
    } else {
        let observer = SpinnerObserver::new();
        let result = Scaffolder::new(&templates, options)
            .with_observer(&observer)
            .run(&request, &cwd)
            .await;
        observer.finish();
        result
    };

    let report = match outcome {
        Ok(report) => report,
        Err(e) => {
            output::error(&format!("Failed to create project: {}", e));
            return Err(anyhow!("Project creation aborted"));
        }
    };

    print_summary(&args.name, &report, &retry_hint);
    Ok(())
}

/// Success line, accumulated warnings, then the next-steps block
fn print_summary(name: &str, report: &ScaffoldReport, retry_hint: &str) {
    println!();
    output::success(&format!("Project '{}' created successfully", name));

    if !report.warnings.is_empty() {
        println!();
        for warning in &report.warnings {
            output::warning(warning);
        }
    }

    println!();
    output::kv("Location", report.layout.root.as_str());
    println!();
    output::info("Next steps:");

    let mut steps = vec![format!("cd {}", name)];
    if !report.has_frontend() {
        steps.push(format!("{}   # retry frontend creation", retry_hint));
    }
    if !report.dependencies_installed() {
        steps.push("npm run install:all".to_string());
    }
    steps.push("npm run dev".to_string());
    for (i, step) in steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
}
