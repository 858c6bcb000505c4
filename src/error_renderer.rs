//! Error rendering using ariadne
//!
//! Transform errors point at an element of the input sequence. The renderer
//! prints the sequence's `Debug` listing as the report source and labels the
//! element that caused the failure.

use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use seqxform_core::{SequenceError, SequenceView, TransformError};
use std::fmt::{Debug, Display};
use std::io::Write;
use std::ops::Range;

const LISTING_PREALLOC_LIMIT: usize = 1 << 12;

/// Box-drawing characters used around the sequence listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Unicode box-drawing lines and arrows.
    #[default]
    Unicode,
    /// Plain `|`, `-` and `'` for terminals without Unicode.
    Ascii,
}

/// How [`render_error_to`] draws a report over a sequence listing.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Colour the label under the offending element.
    pub color: bool,
    /// Name printed in the report header in place of a file path.
    /// Falls back to `<sequence>`.
    pub filename: Option<&'a str>,
    /// Characters used for the frame around the listing.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// What a report needs to know about an error.
pub trait Reportable {
    /// Stable diagnostic code, e.g. `seqxform::invalid_input`.
    fn code(&self) -> &'static str;

    /// Headline of the report.
    fn message(&self) -> String;

    /// Element the report should point at.
    fn index(&self) -> Option<usize>;

    /// Optional advice printed under the source.
    fn help(&self) -> Option<String> {
        None
    }
}

impl Reportable for SequenceError {
    fn code(&self) -> &'static str {
        SequenceError::code(self)
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn index(&self) -> Option<usize> {
        SequenceError::index(self)
    }

    fn help(&self) -> Option<String> {
        miette::Diagnostic::help(self).map(|help| help.to_string())
    }
}

impl<E: Display> Reportable for TransformError<E> {
    fn code(&self) -> &'static str {
        TransformError::code(self)
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn index(&self) -> Option<usize> {
        TransformError::index(self)
    }

    fn help(&self) -> Option<String> {
        self.as_sequence_error().and_then(Reportable::help)
    }
}

/// Render an error against its input sequence to stderr using default config.
///
/// # Example
/// ```no_run
/// use seqxform::{render_error, try_map};
///
/// let items = [4, 5, 6];
/// if let Err(e) = try_map(&items, |x, _| if *x == 5 { Err("five") } else { Ok(*x) }) {
///     render_error(&e, &items);
/// }
/// ```
pub fn render_error<R, S>(error: &R, sequence: &S)
where
    R: Reportable + ?Sized,
    S: SequenceView + ?Sized,
    S::Item: Debug,
{
    render_error_to(error, sequence, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use seqxform::{RenderConfig, render_error_to, try_filter};
///
/// let items = [4, 5, 6];
/// let err = try_filter(&items, |x, _| if *x == 6 { Err("six") } else { Ok(true) })
///     .unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, &items, &mut buf, &config).unwrap();
///
/// let output = String::from_utf8_lossy(&buf);
/// assert!(output.contains("callback failed at index 2: six"));
/// assert!(output.contains("[4, 5, 6]"));
/// ```
pub fn render_error_to<R, S>(
    error: &R,
    sequence: &S,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()>
where
    R: Reportable + ?Sized,
    S: SequenceView + ?Sized,
    S::Item: Debug,
{
    let filename = config.filename.unwrap_or("<sequence>");
    let (listing, spans) = list_elements(sequence);

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset);

    let message = error.message();
    let target = error.index().and_then(|index| spans.get(index).map(|span| (index, span.clone())));
    let report_span = target.as_ref().map(|(_, span)| span.clone()).unwrap_or(0..0);

    let mut report = Report::build(ReportKind::Error, (filename, report_span))
        .with_message(&message)
        .with_code(error.code())
        .with_config(ariadne_config);

    if let Some((index, span)) = target {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.
        report = report.with_label(
            Label::new((filename, span))
                .with_message(format!("element {index}"))
                .with_color(colors.next()),
        );
    }

    if let Some(help) = error.help() {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((filename, Source::from(listing.as_str())), &mut *writer)
}

/// Builds `[a, b, c]` from the sequence, returning the char range of each element.
///
/// The first slot the view cannot produce is listed as `<missing>` so that
/// invalid input still has something to point at. Nothing after it is listed,
/// since no transform reads past a hole.
fn list_elements<S>(sequence: &S) -> (String, Vec<Range<usize>>)
where
    S: SequenceView + ?Sized,
    S::Item: Debug,
{
    let len = sequence.len();
    let mut listing = String::from("[");
    let mut spans = Vec::with_capacity(len.min(LISTING_PREALLOC_LIMIT));
    let mut chars = 1;

    for index in 0..len {
        if index > 0 {
            listing.push_str(", ");
            chars += 2;
        }
        let (text, missing) = match sequence.get(index) {
            Some(element) => (format!("{element:?}"), false),
            None => ("<missing>".to_string(), true),
        };
        let width = text.chars().count();
        spans.push(chars..chars + width);
        listing.push_str(&text);
        chars += width;
        if missing {
            break;
        }
    }

    listing.push(']');
    (listing, spans)
}
