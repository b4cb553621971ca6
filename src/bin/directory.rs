use anyhow::Context;
use clap::Parser;
use pattern_catalog::utils::logger;
use pattern_catalog::utils::validation::parse_hire_spec;
use pattern_catalog::Directory;

#[derive(Parser)]
#[command(name = "directory")]
#[command(about = "Builds a department directory through the employee factory")]
struct Args {
    /// Departments to add before hiring (repeatable)
    #[arg(long = "add-department")]
    add_departments: Vec<String>,

    /// Employee to hire as NAME:AGE:DEPARTMENT (repeatable, hired in order)
    #[arg(long = "hire")]
    hires: Vec<String>,

    /// Department to look up after hiring
    #[arg(long)]
    find: Option<String>,

    /// Print the directory as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    // 先解析全部參數，避免只聘僱到一半
    let hires = args
        .hires
        .iter()
        .map(|raw| parse_hire_spec("--hire", raw))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid --hire value")?;

    let mut directory = Directory::new();

    for name in &args.add_departments {
        directory.add_department(name.as_str());
    }

    for hire in hires {
        directory.hire_employee(hire.name, hire.age, &hire.department);
    }

    tracing::info!(
        "🏢 Directory ready: {} departments, {} employees",
        directory.len(),
        directory.employee_count()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let find = args.find.as_deref();

    if args.json {
        directory.write_json(&mut out, find)?;
    } else {
        directory.write_text(&mut out, find)?;
    }

    Ok(())
}
