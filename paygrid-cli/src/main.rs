mod cli;
mod config;
mod report;

use anyhow::{bail, Context, Result};
use clap::Parser;
use paygrid::{
    domain::models::{
        parse_skills, EmployeeDraft, EmployeeFilter, EmployeeId, HistoryEntry, PositionDraft,
        PositionId,
    },
    seed::{demo_service, DemoService},
    CompensationService,
};
use time::{Date, OffsetDateTime};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::OutputFormat;
use report::Report;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = config::read_config()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        settings.output
    };
    let report = Report::new(format, cli.currency.unwrap_or(settings.display_currency));
    tracing::debug!(currency = %report.currency, %format, "starting session");

    let service = demo_service();
    let today = OffsetDateTime::now_utc().date();
    let mutates = cli.command.mutates();
    run(cli.command, &service, &report, today)?;
    if mutates {
        report.emit(&service.derive_views(report.currency), Report::views)?;
    }
    Ok(())
}

fn run(command: Commands, service: &DemoService, report: &Report, today: Date) -> Result<()> {
    let currency = report.currency;
    match command {
        Commands::Employees {
            employment_type,
            position,
            department,
        } => {
            let filter = EmployeeFilter {
                employment_type,
                position,
                department,
            };
            report.emit(&service.list_employees(&filter), |r, e| r.employees(e))
        }
        Commands::Employee { id } => {
            let detail = service
                .employee_detail(EmployeeId::new(id), currency, today)
                .with_context(|| format!("No employee with id {id}"))?;
            report.emit(&detail, Report::employee_detail)
        }
        Commands::Positions => report.emit(&service.list_positions(), |r, p| r.positions(p)),
        Commands::Position { id } => {
            let summary = service
                .position_summary(PositionId::new(id), currency)
                .with_context(|| format!("No position with id {id}"))?;
            report.emit(&summary, Report::position_summary)
        }
        Commands::Departments => report.emit(&service.departments(), |r, d| r.departments(d)),
        Commands::Analysis => report.emit(&service.aggregated_stats(currency), Report::analysis),
        Commands::Alerts => report.emit(&service.range_alerts(currency), |r, a| r.alerts(a)),
        Commands::Benchmark => {
            report.emit(&service.benchmark_comparison(currency), Report::benchmark)
        }
        Commands::Convert { amount, from, to } => {
            let converted = service.convert_currency(amount, from, to);
            match report.format {
                OutputFormat::Json => println!("{converted}"),
                OutputFormat::Table => println!("{amount} {from} = {converted} {to}"),
            }
            Ok(())
        }
        Commands::AddEmployee {
            first_name,
            last_name,
            position,
            level,
            salary,
            bonus,
            employment_type,
            start_date,
            department,
            paid_in,
        } => {
            let draft = EmployeeDraft {
                first_name,
                last_name,
                position,
                level,
                salary,
                bonus,
                employment_type,
                start_date,
                department,
                currency: paid_in,
            };
            let id = service.add_employee(draft)?;
            eprintln!("Added employee #{id}");
            Ok(())
        }
        Commands::Raise {
            id,
            salary,
            bonus,
            reason,
            date,
        } => {
            let id = EmployeeId::new(id);
            let Some(employee) = service.get_employee(id) else {
                bail!("No employee with id {id}");
            };
            let mut draft = EmployeeDraft::from(&employee);
            draft.salary = salary;
            if let Some(bonus) = bonus {
                draft.bonus = bonus;
            }
            let bonus = draft.bonus;
            service.update_employee(id, draft)?;
            service.record_history_entry(
                id,
                HistoryEntry::new(date.unwrap_or(today), salary, bonus, reason),
            );
            Ok(())
        }
        Commands::DeleteEmployee { id } => {
            service.delete_employee(EmployeeId::new(id));
            Ok(())
        }
        Commands::AddPosition {
            name,
            department,
            description,
            skills,
            objectives,
        } => {
            let draft = PositionDraft::new(name, department)
                .with_description(description)
                .with_skills(parse_skills(&skills))
                .with_objectives(objectives);
            let id = service.add_position(draft)?;
            eprintln!("Added position #{id}");
            Ok(())
        }
        Commands::SetRange {
            position_id,
            level,
            bound,
            value,
        } => {
            service.update_salary_range_cell_in(
                PositionId::new(position_id),
                level,
                bound,
                value,
                currency,
            );
            Ok(())
        }
        Commands::DeletePosition { id } => {
            service.delete_position(PositionId::new(id));
            Ok(())
        }
    }
}
