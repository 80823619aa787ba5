//! Demo records for a fresh session: five positions with their salary grids,
//! five employees with their pay history, and static market references.

use std::sync::Arc;

use time::macros::date;

use crate::{
    adapters::outbound::memory::{InMemoryEmployeeRepository, InMemoryPositionRepository},
    domain::{
        benchmark::{BenchmarkTable, LevelSalaries, ReferenceSalaries},
        models::{
            Currency, Employee, EmployeeId, EmploymentType, HistoryEntry, Level, Position,
            PositionDraft, PositionId,
        },
        services::CompensationServiceImpl,
    },
};

pub type DemoService = CompensationServiceImpl<InMemoryEmployeeRepository, InMemoryPositionRepository>;

fn position(id: i64, draft: PositionDraft) -> Position {
    draft.into_position(PositionId::new(id))
}

pub fn demo_positions() -> Vec<Position> {
    vec![
        position(
            1,
            PositionDraft::new("Frontend Developer", "Tech")
                .with_description("Builds modern, responsive user interfaces")
                .with_skills(vec![
                    "React".into(),
                    "TypeScript".into(),
                    "CSS".into(),
                    "JavaScript".into(),
                    "HTML".into(),
                ])
                .with_objectives("Deliver outstanding user experiences")
                .with_range(Level::Junior, 35000, 45000)
                .with_range(Level::Intermediate, 45000, 60000)
                .with_range(Level::Senior, 60000, 80000),
        ),
        position(
            2,
            PositionDraft::new("Backend Developer", "Tech")
                .with_description("Designs APIs and server architecture")
                .with_skills(vec![
                    "Node.js".into(),
                    "Python".into(),
                    "PostgreSQL".into(),
                    "Docker".into(),
                    "AWS".into(),
                ])
                .with_objectives("Keep systems robust and scalable")
                .with_range(Level::Junior, 38000, 48000)
                .with_range(Level::Intermediate, 48000, 65000)
                .with_range(Level::Senior, 65000, 85000),
        ),
        position(
            3,
            PositionDraft::new("Product Manager", "Product")
                .with_description("Owns the product roadmap and strategy")
                .with_skills(vec![
                    "Product Strategy".into(),
                    "Analytics".into(),
                    "Agile".into(),
                    "User Research".into(),
                ])
                .with_objectives("Maximise product value and user satisfaction")
                .with_range(Level::Junior, 45000, 55000)
                .with_range(Level::Intermediate, 55000, 75000)
                .with_range(Level::Senior, 75000, 95000),
        ),
        position(
            4,
            PositionDraft::new("UX/UI Designer", "Design")
                .with_description("Designs user experiences and interfaces")
                .with_skills(vec![
                    "Figma".into(),
                    "Sketch".into(),
                    "User Research".into(),
                    "Prototyping".into(),
                ])
                .with_objectives("Create user-centred designs")
                .with_range(Level::Junior, 35000, 45000)
                .with_range(Level::Intermediate, 45000, 60000)
                .with_range(Level::Senior, 60000, 75000),
        ),
        position(
            5,
            PositionDraft::new("Data Scientist", "Data")
                .with_description("Data analysis and machine learning")
                .with_skills(vec![
                    "Python".into(),
                    "SQL".into(),
                    "Machine Learning".into(),
                    "Statistics".into(),
                ])
                .with_objectives("Turn data into business insight")
                .with_range(Level::Junior, 40000, 50000)
                .with_range(Level::Intermediate, 50000, 70000)
                .with_range(Level::Senior, 70000, 90000),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: i64,
    (first_name, last_name): (&str, &str),
    position: &str,
    level: Level,
    (salary, bonus): (u64, u64),
    employment_type: EmploymentType,
    start_date: time::Date,
    department: &str,
    history: Vec<HistoryEntry>,
) -> Employee {
    Employee {
        id: EmployeeId::new(id),
        first_name: first_name.into(),
        last_name: last_name.into(),
        position: position.into(),
        level,
        salary,
        bonus,
        employment_type,
        start_date,
        department: department.into(),
        currency: Currency::Eur,
        history,
    }
}

pub fn demo_employees() -> Vec<Employee> {
    vec![
        employee(
            1,
            ("Marie", "Dupont"),
            "Frontend Developer",
            Level::Senior,
            (65000, 5000),
            EmploymentType::Permanent,
            date!(2021 - 03 - 15),
            "Tech",
            vec![
                HistoryEntry::hire(date!(2021 - 03 - 15), 55000, 3000),
                HistoryEntry::new(date!(2022 - 03 - 15), 60000, 4000, "Annual raise"),
                HistoryEntry::new(date!(2023 - 03 - 15), 65000, 5000, "Promotion to Senior"),
            ],
        ),
        employee(
            2,
            ("Pierre", "Martin"),
            "Backend Developer",
            Level::Intermediate,
            (52000, 3000),
            EmploymentType::Permanent,
            date!(2022 - 01 - 10),
            "Tech",
            vec![
                HistoryEntry::hire(date!(2022 - 01 - 10), 48000, 2000),
                HistoryEntry::new(date!(2023 - 01 - 10), 52000, 3000, "Annual raise"),
            ],
        ),
        employee(
            3,
            ("Sophie", "Bernard"),
            "Product Manager",
            Level::Senior,
            (75000, 8000),
            EmploymentType::Permanent,
            date!(2020 - 06 - 01),
            "Product",
            vec![
                HistoryEntry::hire(date!(2020 - 06 - 01), 65000, 5000),
                HistoryEntry::new(date!(2021 - 06 - 01), 70000, 6000, "Annual raise"),
                HistoryEntry::new(date!(2022 - 06 - 01), 75000, 8000, "Promotion to Senior"),
            ],
        ),
        employee(
            4,
            ("Thomas", "Leroy"),
            "UX/UI Designer",
            Level::Junior,
            (42000, 2000),
            EmploymentType::Contractor,
            date!(2023 - 09 - 01),
            "Design",
            vec![HistoryEntry::hire(date!(2023 - 09 - 01), 42000, 2000)],
        ),
        employee(
            5,
            ("Laura", "Rousseau"),
            "Data Scientist",
            Level::Intermediate,
            (58000, 4000),
            EmploymentType::Permanent,
            date!(2021 - 11 - 15),
            "Data",
            vec![
                HistoryEntry::hire(date!(2021 - 11 - 15), 50000, 3000),
                HistoryEntry::new(date!(2022 - 11 - 15), 58000, 4000, "Annual raise"),
            ],
        ),
    ]
}

/// Reference salaries (market, domestic, international) per position, in EUR.
pub fn market_benchmarks() -> BenchmarkTable {
    let references = |market: [u64; 3], domestic: [u64; 3], international: [u64; 3]| {
        let levels = |[junior, intermediate, senior]: [u64; 3]| {
            LevelSalaries::new(junior, intermediate, senior)
        };
        ReferenceSalaries::new(levels(market), levels(domestic), levels(international))
    };

    BenchmarkTable::new()
        .with_position(
            "Frontend Developer",
            references([40000, 55000, 75000], [42000, 58000, 78000], [45000, 65000, 85000]),
        )
        .with_position(
            "Backend Developer",
            references([43000, 60000, 80000], [45000, 62000, 82000], [48000, 68000, 88000]),
        )
        .with_position(
            "Product Manager",
            references([50000, 70000, 90000], [52000, 72000, 95000], [55000, 78000, 105000]),
        )
        .with_position(
            "UX/UI Designer",
            references([38000, 52000, 68000], [40000, 55000, 72000], [42000, 58000, 78000]),
        )
        .with_position(
            "Data Scientist",
            references([45000, 65000, 85000], [48000, 68000, 88000], [52000, 75000, 98000]),
        )
}

/// A session pre-loaded with the demo records and benchmark table.
pub fn demo_service() -> DemoService {
    CompensationServiceImpl::new(
        Arc::new(InMemoryEmployeeRepository::with_employees(demo_employees())),
        Arc::new(InMemoryPositionRepository::with_positions(demo_positions())),
    )
    .with_benchmarks(market_benchmarks())
}

/// An empty session that still carries the benchmark table.
pub fn empty_service() -> DemoService {
    CompensationServiceImpl::new(
        Arc::new(InMemoryEmployeeRepository::new()),
        Arc::new(InMemoryPositionRepository::new()),
    )
    .with_benchmarks(market_benchmarks())
}
