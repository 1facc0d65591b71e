//! Result consumers and the pipeline that drives them.
//!
//! A [`ResultPipeline`] computes a gratuity and then hands the same result
//! to each registered [`ResultConsumer`] in the order they were added.
//! Consumers own whatever sink they write to.

use std::io::Write;

use crate::calculation::compute_with_rules;
use crate::config::GratuityRules;
use crate::error::EngineResult;
use crate::models::{GratuityInput, GratuityResult};

use super::view::ResultView;

/// Something that acts on a computed result.
pub trait ResultConsumer {
    /// Handles one result.
    fn consume(&mut self, result: &GratuityResult) -> EngineResult<()>;
}

impl<F> ResultConsumer for F
where
    F: FnMut(&GratuityResult) -> EngineResult<()>,
{
    fn consume(&mut self, result: &GratuityResult) -> EngineResult<()> {
        self(result)
    }
}

/// Writes the full text report for each result.
pub struct ReportWriter<W: Write> {
    out: W,
    currency: String,
}

impl<W: Write> ReportWriter<W> {
    /// Creates a writer rendering amounts in `currency`.
    pub fn new(out: W, currency: impl Into<String>) -> Self {
        Self {
            out,
            currency: currency.into(),
        }
    }
}

impl<W: Write> ResultConsumer for ReportWriter<W> {
    fn consume(&mut self, result: &GratuityResult) -> EngineResult<()> {
        let view = ResultView::from_result(result, &self.currency);
        self.out.write_all(view.to_report().as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes the copyable summary for each result.
pub struct SummaryWriter<W: Write> {
    out: W,
    currency: String,
}

impl<W: Write> SummaryWriter<W> {
    /// Creates a writer rendering amounts in `currency`.
    pub fn new(out: W, currency: impl Into<String>) -> Self {
        Self {
            out,
            currency: currency.into(),
        }
    }
}

impl<W: Write> ResultConsumer for SummaryWriter<W> {
    fn consume(&mut self, result: &GratuityResult) -> EngineResult<()> {
        let view = ResultView::from_result(result, &self.currency);
        writeln!(self.out, "{}", view.to_copy_summary())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Computes a result and feeds it to an ordered list of consumers.
///
/// # Example
///
/// ```
/// use gratuity_engine::config::GratuityRules;
/// use gratuity_engine::models::GratuityInput;
/// use gratuity_engine::presentation::{ReportWriter, ResultPipeline, SummaryWriter};
/// use rust_decimal::Decimal;
///
/// let mut report = Vec::new();
/// let mut summary = Vec::new();
/// let input = GratuityInput::new(Decimal::from(10000), Decimal::from(3), 0);
///
/// let result = ResultPipeline::new(GratuityRules::uae())
///     .with_consumer(ReportWriter::new(&mut report, "AED"))
///     .with_consumer(SummaryWriter::new(&mut summary, "AED"))
///     .run(&input)
///     .unwrap();
///
/// assert_eq!(result.total_gratuity, Decimal::from(21000));
/// assert!(String::from_utf8(report).unwrap().contains("AED 21,000.00"));
/// assert!(String::from_utf8(summary).unwrap().starts_with("UAE Gratuity"));
/// ```
pub struct ResultPipeline<'a> {
    rules: GratuityRules,
    consumers: Vec<Box<dyn ResultConsumer + 'a>>,
}

impl<'a> ResultPipeline<'a> {
    /// Creates a pipeline with no consumers.
    pub fn new(rules: GratuityRules) -> Self {
        Self {
            rules,
            consumers: Vec::new(),
        }
    }

    /// Appends a consumer, returning the pipeline.
    pub fn with_consumer<C: ResultConsumer + 'a>(mut self, consumer: C) -> Self {
        self.push(consumer);
        self
    }

    /// Appends a consumer.
    pub fn push<C: ResultConsumer + 'a>(&mut self, consumer: C) {
        self.consumers.push(Box::new(consumer));
    }

    /// Number of registered consumers.
    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    /// Returns true if no consumers are registered.
    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }

    /// The rules results are computed under.
    pub fn rules(&self) -> &GratuityRules {
        &self.rules
    }

    /// Computes the gratuity for `input` and passes it to every consumer.
    ///
    /// Stops at the first failing consumer; consumers after it do not run.
    /// Invalid input fails before any consumer runs.
    pub fn run(&mut self, input: &GratuityInput) -> EngineResult<GratuityResult> {
        let result = compute_with_rules(input, &self.rules)?;
        for consumer in &mut self.consumers {
            consumer.consume(&result)?;
        }
        Ok(result)
    }
}
