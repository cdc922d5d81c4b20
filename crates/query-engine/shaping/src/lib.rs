//! Turn result rows into something to show, according to a visualization configuration.

pub mod export;
pub mod presentation;
pub mod shape;

pub use export::{export, ExportError, ExportFormat, Exporter};
pub use presentation::{Chart, ChartKind, ChartOptions, Point, Presentation, Table};
pub use shape::{shape, tabulate};
