use clap::{Parser, Subcommand};
use paygrid::domain::models::{Currency, EmploymentType, Level, RangeBound};
use time::{macros::format_description, Date};

#[derive(Debug, Parser)]
#[command(name = "paygrid")]
#[command(about = "Salary grids, pay equity and market benchmarks for a small team")]
pub struct Cli {
    /// Currency every figure is shown in (EUR, USD, GBP, BRL)
    #[arg(long, global = true)]
    pub currency: Option<Currency>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List employees
    Employees {
        #[arg(long = "type")]
        employment_type: Option<EmploymentType>,
        #[arg(long)]
        position: Option<String>,
        /// Department of the employee's position
        #[arg(long)]
        department: Option<String>,
    },
    /// Show one employee with seniority and band placement
    Employee { id: i64 },
    /// List positions
    Positions,
    /// Show headcount and bands for one position
    Position { id: i64 },
    /// List distinct departments
    Departments,
    /// Salary statistics per position and level
    Analysis,
    /// Employees paid outside their band
    Alerts,
    /// Group averages against market references
    Benchmark,
    /// Convert an amount between currencies
    Convert {
        amount: u64,
        from: Currency,
        to: Currency,
    },
    /// Hire an employee, then print the recomputed analysis
    AddEmployee {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        position: String,
        #[arg(long, default_value = "Junior")]
        level: Level,
        #[arg(long)]
        salary: u64,
        #[arg(long, default_value_t = 0)]
        bonus: u64,
        #[arg(long = "type", default_value = "Permanent")]
        employment_type: EmploymentType,
        /// YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        start_date: Option<Date>,
        /// Defaults to the position's department
        #[arg(long)]
        department: Option<String>,
        /// Currency the salary and bonus are given in
        #[arg(long = "paid-in", default_value = "EUR")]
        paid_in: Currency,
    },
    /// Change an employee's pay and record it in their history
    Raise {
        id: i64,
        salary: u64,
        #[arg(long)]
        bonus: Option<u64>,
        #[arg(long)]
        reason: String,
        /// Defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    /// Remove an employee
    DeleteEmployee { id: i64 },
    /// Create a position
    AddPosition {
        name: String,
        department: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Comma separated
        #[arg(long, default_value = "")]
        skills: String,
        #[arg(long, default_value = "")]
        objectives: String,
    },
    /// Edit one bound of a salary band, in the display currency
    SetRange {
        position_id: i64,
        level: Level,
        bound: RangeBound,
        value: u64,
    },
    /// Remove a position; its employees keep the name
    DeletePosition { id: i64 },
}

impl Commands {
    /// Whether the command changes the session. The recomputed views are
    /// printed after every such command.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Commands::AddEmployee { .. }
                | Commands::Raise { .. }
                | Commands::DeleteEmployee { .. }
                | Commands::AddPosition { .. }
                | Commands::SetRange { .. }
                | Commands::DeletePosition { .. }
        )
    }
}

fn parse_date(input: &str) -> Result<Date, time::error::Parse> {
    Date::parse(input, format_description!("[year]-[month]-[day]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use time::macros::date;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["paygrid", "benchmark", "--currency", "usd", "--json"]).unwrap();
        assert_eq!(cli.currency, Some(Currency::Usd));
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Benchmark));
    }

    #[test]
    fn every_mutation_reprints_views() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().command;
        assert!(parse(&["paygrid", "add-position", "QA Engineer", "Tech", "--skills", "Rust, SQL"]).mutates());
        assert!(parse(&["paygrid", "delete-position", "2"]).mutates());
        assert!(parse(&["paygrid", "delete-employee", "2"]).mutates());
        assert!(parse(&["paygrid", "raise", "2", "55000", "--reason", "Annual raise"]).mutates());
        assert!(parse(&["paygrid", "set-range", "1", "junior", "min", "36000"]).mutates());
        assert!(!parse(&["paygrid", "analysis"]).mutates());
        assert!(!parse(&["paygrid", "convert", "100", "usd", "gbp"]).mutates());
    }

    #[test]
    fn parses_range_edit() {
        let cli = Cli::try_parse_from(["paygrid", "set-range", "1", "senior", "max", "82000"]).unwrap();
        match cli.command {
            Commands::SetRange { position_id, level, bound, value } => {
                assert_eq!(position_id, 1);
                assert_eq!(level, Level::Senior);
                assert_eq!(bound, RangeBound::Max);
                assert_eq!(value, 82000);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_hire_dates() {
        let cli = Cli::try_parse_from([
            "paygrid",
            "add-employee",
            "--first-name",
            "Camille",
            "--last-name",
            "Petit",
            "--position",
            "Frontend Developer",
            "--salary",
            "38000",
            "--start-date",
            "2024-02-01",
        ])
        .unwrap();
        match cli.command {
            Commands::AddEmployee { start_date, level, employment_type, .. } => {
                assert_eq!(start_date, Some(date!(2024 - 02 - 01)));
                assert_eq!(level, Level::Junior);
                assert_eq!(employment_type, EmploymentType::Permanent);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(parse_date("01/02/2024").is_err());
    }
}
