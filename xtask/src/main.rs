use clap::{Parser, Subcommand};
use colored::*;
use std::process::{Child, Command as ProcessCommand, ExitCode};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format, fix, lint and test the workspace
    Tidy,
    /// Build overtoast and show one stacked toast per category
    Demo {
        /// Seconds each toast stays on screen
        #[arg(long, default_value_t = 5.0)]
        dismiss: f64,
        /// Image shown in every toast
        #[arg(long)]
        icon: Option<String>,
    },
}

const DEMO_TOASTS: [(&str, &str); 4] = [
    ("Build failed: 3 errors", "red"),
    ("Waiting for permission", "yellow"),
    ("All tests passed", "green"),
    ("Agent finished its turn", "blue"),
];

fn cargo(args: &[&str]) -> bool {
    ProcessCommand::new("cargo")
        .args(args)
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

fn tidy() -> ExitCode {
    let steps: [(&str, &[&str]); 4] = [
        ("Formatting", &["fmt", "--all"]),
        ("Cargo fix", &["fix", "--allow-dirty", "--workspace"]),
        (
            "Clippy",
            &[
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ],
        ),
        ("Tests", &["test", "--workspace"]),
    ];

    for (name, args) in steps {
        println!("{} {}", "→".cyan(), name.bold());
        if !cargo(args) {
            return print_result(&format!("× {} failed", name), false);
        }
    }

    print_result("✓ Success!", true)
}

fn demo(dismiss: f64, icon: Option<String>) -> ExitCode {
    if !cargo(&["build", "--package", "overtoast"]) {
        return print_result("× Build failed", false);
    }

    let binary = format!("target/debug/overtoast{}", std::env::consts::EXE_SUFFIX);
    let icon = icon.unwrap_or_default();

    let children: Vec<(usize, std::io::Result<Child>)> = DEMO_TOASTS
        .iter()
        .enumerate()
        .map(|(slot, (message, color))| {
            let child = ProcessCommand::new(&binary)
                .args([
                    message.to_string(),
                    color.to_string(),
                    icon.clone(),
                    slot.to_string(),
                    dismiss.to_string(),
                ])
                .spawn();
            (slot, child)
        })
        .collect();

    let mut success = true;
    for (slot, child) in children {
        let finished = child.and_then(|mut c| c.wait()).map(|s| s.success());
        if !matches!(finished, Ok(true)) {
            println!("{} slot {} did not exit cleanly", "×".red(), slot);
            success = false;
        }
    }

    if success {
        print_result("✓ Demo finished", true)
    } else {
        print_result("× Demo failed", false)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match args.command {
        Command::Tidy => tidy(),
        Command::Demo { dismiss, icon } => demo(dismiss, icon),
    }
}

fn print_result(message: &str, success: bool) -> ExitCode {
    let separator = "=".repeat(50);
    println!("\n{}", separator.cyan());

    let box_width = 24;
    let border = "─".repeat(box_width);
    let text_width = message.chars().count().min(box_width);
    let left = (box_width - text_width) / 2;
    let right = box_width - text_width - left;
    let indent = " ".repeat((50 - box_width) / 2);

    let box_text = [
        format!("{}┌{}┐", indent, border),
        format!(
            "{}│{}{}{}│",
            indent,
            " ".repeat(left),
            message,
            " ".repeat(right)
        ),
        format!("{}└{}┘", indent, border),
    ]
    .join("\n");

    if success {
        println!("\n{}\n", box_text.bold().green());
        ExitCode::SUCCESS
    } else {
        println!("\n{}\n", box_text.bold().red());
        ExitCode::FAILURE
    }
}
