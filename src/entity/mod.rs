//! Entity kinds and the typed records generated for them.
//!
//! Every kind maps to one table, one output file and one record struct.
//! Records carry their own generation rules ([`Record::fake`]) and turn
//! into an [`InsertStatement`] through [`Record::to_statement`].
//!
//! Reference-like columns (`customer_id`, `prof_id`, ...) are independent
//! random values; nothing guarantees the referenced row exists.

pub mod ecommerce;
pub mod university;

use crate::fake::FakeData;
use crate::statement::InsertStatement;
use crate::value::{Dialect, SqlValue};
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use ecommerce::{Customer, Order, OrderItem, Product};
pub use university::{Course, CourseAssignment, Enrollment, Professor, Student};

/// Inputs shared by every record of a run
#[derive(Debug, Clone, Copy)]
pub struct GenContext {
    /// "Today" for date rules (order dates, birth dates, join dates)
    pub reference_date: NaiveDate,
}

impl GenContext {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

/// A synthetic row with fixed table, columns and generation rules
pub trait Record: Sized {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn fake<R: Rng>(fake: &mut FakeData<R>, ctx: &GenContext) -> Self;

    /// Column values, in `COLUMNS` order
    fn values(&self) -> Vec<SqlValue>;

    fn to_statement(&self) -> InsertStatement<'static> {
        InsertStatement::new(Self::TABLE, Self::COLUMNS, self.values())
    }
}

/// Schema a kind belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Ecommerce,
    University,
}

impl Domain {
    pub fn kinds(&self) -> Vec<EntityKind> {
        EntityKind::ALL
            .iter()
            .copied()
            .filter(|k| k.domain() == *self)
            .collect()
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ecommerce" | "e-commerce" | "shop" => Ok(Domain::Ecommerce),
            "university" | "uni" => Ok(Domain::University),
            _ => Err(format!(
                "Unknown domain: {}. Use ecommerce or university",
                s
            )),
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::Ecommerce => write!(f, "ecommerce"),
            Domain::University => write!(f, "university"),
        }
    }
}

/// The nine fixed entity kinds, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Customers,
    Products,
    Orders,
    OrderItems,
    Students,
    Courses,
    Enrollments,
    Professors,
    CourseAssignments,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Customers,
        EntityKind::Products,
        EntityKind::Orders,
        EntityKind::OrderItems,
        EntityKind::Students,
        EntityKind::Courses,
        EntityKind::Enrollments,
        EntityKind::Professors,
        EntityKind::CourseAssignments,
    ];

    /// Snake-case name, also the output file stem
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Customers => "customers",
            EntityKind::Products => "products",
            EntityKind::Orders => "orders",
            EntityKind::OrderItems => "order_items",
            EntityKind::Students => "students",
            EntityKind::Courses => "courses",
            EntityKind::Enrollments => "enrollments",
            EntityKind::Professors => "professors",
            EntityKind::CourseAssignments => "course_assignments",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.sql", self.name())
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::Customers => Customer::TABLE,
            EntityKind::Products => Product::TABLE,
            EntityKind::Orders => Order::TABLE,
            EntityKind::OrderItems => OrderItem::TABLE,
            EntityKind::Students => Student::TABLE,
            EntityKind::Courses => Course::TABLE,
            EntityKind::Enrollments => Enrollment::TABLE,
            EntityKind::Professors => Professor::TABLE,
            EntityKind::CourseAssignments => CourseAssignment::TABLE,
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            EntityKind::Customers => Customer::COLUMNS,
            EntityKind::Products => Product::COLUMNS,
            EntityKind::Orders => Order::COLUMNS,
            EntityKind::OrderItems => OrderItem::COLUMNS,
            EntityKind::Students => Student::COLUMNS,
            EntityKind::Courses => Course::COLUMNS,
            EntityKind::Enrollments => Enrollment::COLUMNS,
            EntityKind::Professors => Professor::COLUMNS,
            EntityKind::CourseAssignments => CourseAssignment::COLUMNS,
        }
    }

    pub fn domain(&self) -> Domain {
        match self {
            EntityKind::Customers
            | EntityKind::Products
            | EntityKind::Orders
            | EntityKind::OrderItems => Domain::Ecommerce,
            EntityKind::Students
            | EntityKind::Courses
            | EntityKind::Enrollments
            | EntityKind::Professors
            | EntityKind::CourseAssignments => Domain::University,
        }
    }

    /// Generate `count` records and render each as an unterminated statement
    pub fn render_statements<R: Rng>(
        &self,
        fake: &mut FakeData<R>,
        ctx: &GenContext,
        count: usize,
        dialect: Dialect,
    ) -> Vec<String> {
        match self {
            EntityKind::Customers => render_all::<Customer, R>(fake, ctx, count, dialect),
            EntityKind::Products => render_all::<Product, R>(fake, ctx, count, dialect),
            EntityKind::Orders => render_all::<Order, R>(fake, ctx, count, dialect),
            EntityKind::OrderItems => render_all::<OrderItem, R>(fake, ctx, count, dialect),
            EntityKind::Students => render_all::<Student, R>(fake, ctx, count, dialect),
            EntityKind::Courses => render_all::<Course, R>(fake, ctx, count, dialect),
            EntityKind::Enrollments => render_all::<Enrollment, R>(fake, ctx, count, dialect),
            EntityKind::Professors => render_all::<Professor, R>(fake, ctx, count, dialect),
            EntityKind::CourseAssignments => {
                render_all::<CourseAssignment, R>(fake, ctx, count, dialect)
            }
        }
    }
}

fn render_all<T: Record, R: Rng>(
    fake: &mut FakeData<R>,
    ctx: &GenContext,
    count: usize,
    dialect: Dialect,
) -> Vec<String> {
    (0..count)
        .map(|_| T::fake(fake, ctx).to_statement().render(dialect))
        .collect()
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    /// Accepts the kind name (`order_items`), its file name or its table
    /// name (`OrderItems`), ignoring case, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s.trim_end_matches(".sql"));
        EntityKind::ALL
            .iter()
            .copied()
            .find(|k| normalize(k.name()) == wanted || normalize(k.table_name()) == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = EntityKind::ALL.iter().map(|k| k.name()).collect();
                format!("Unknown entity kind: {}. Valid kinds: {}", s, names.join(", "))
            })
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parse a comma-separated kind list (`customers,OrderItems`)
pub fn parse_kind_list(list: &str) -> Result<Vec<EntityKind>, String> {
    let mut kinds = Vec::new();
    for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let kind: EntityKind = part.parse()?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    Ok(kinds)
}
