//! Input collection and result presentation.
//!
//! This module sits on either side of the calculator: [`GratuityForm`]
//! sanitizes raw user input into a [`GratuityInput`](crate::models::GratuityInput),
//! and [`ResultView`] plus the [`ResultConsumer`] implementations turn a
//! result into text. [`ResultPipeline`] ties the two together.

mod form;
mod format;
mod pipeline;
mod view;

pub use form::{GratuityForm, MAX_FORM_MONTHS, parse_amount, parse_months};
pub use format::{format_amount, format_currency, format_years};
pub use pipeline::{ReportWriter, ResultConsumer, ResultPipeline, SummaryWriter};
pub use view::{BreakdownRow, ResultView, RowStyle};
