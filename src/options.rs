//! Configuration options for protosearch.
//!
//! [`SearchOptions`] is shared by the library, through its builder, and by the
//! command line, through `clap` when the `cli` feature is enabled.

use std::path::PathBuf;

use derive_builder::Builder;

#[cfg(feature = "cli")]
use clap::ValueEnum;
#[cfg(feature = "cli")]
use clap::builder::PossibleValue;

use crate::item::RankCriteria;
use crate::search::SEARCH_RENDER_COUNT;

/// protosearch - fuzzy search over protocol schemas
///
/// Lists the commands, events and types of one or more protocol JSON
/// documents that match a fuzzy query, best match first.
#[derive(Builder, Debug, Clone)]
#[builder(build_fn(name = "final_build"))]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "protosearch", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct SearchOptions {
    //  --- Search ---
    /// Query to search for
    ///
    /// Leading and trailing whitespace is ignored. An empty query lists every
    /// entry in schema order.
    #[cfg_attr(feature = "cli", arg(short, long, default_value = "", help_heading = "Search"))]
    #[builder(setter(into))]
    pub query: String,

    /// Comma-separated list of sort criteria to apply when the scores are tied.
    ///
    /// * **score**: Score of the fuzzy match algorithm
    /// * **begin**: Prefers entries whose match starts earlier
    /// * **end**: Prefers entries whose match ends earlier
    /// * **length**: Prefers shorter titles
    /// * **index**: Prefers entries that come first in the schemas
    ///
    ///     - Each criterion could be negated, e.g. (-index)
    ///     - Each criterion should appear only once in the list
    #[cfg_attr(
        feature = "cli",
        arg(
            short,
            long,
            default_value = "score,begin,length",
            value_enum,
            value_delimiter = ',',
            help_heading = "Search",
            allow_hyphen_values = true,
            verbatim_doc_comment
        )
    )]
    pub tiebreak: Vec<RankCriteria>,

    /// Strip diacritics before matching
    ///
    /// `emul` then matches `Émulation` and `café` matches `cafe`.
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Search"))]
    pub normalize: bool,

    //  --- Output ---
    /// Maximum number of results to print, 0 for all of them
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value_t = SEARCH_RENDER_COUNT, help_heading = "Output")
    )]
    pub limit: usize,

    /// When to highlight matched characters
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value = "auto", value_enum, help_heading = "Output")
    )]
    pub color: ColorChoice,

    /// Print the route (`#Domain.entry`) of each result
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print_route: bool,

    /// Print the score of each result
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print_score: bool,

    //  --- Input ---
    /// Protocol JSON documents, later documents override domains of earlier ones
    #[cfg_attr(feature = "cli", arg(value_name = "SCHEMA", required = true, num_args = 1..))]
    #[builder(setter(into))]
    pub schemas: Vec<PathBuf>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            tiebreak: RankCriteria::default_tiebreak(),
            normalize: false,
            limit: SEARCH_RENDER_COUNT,
            color: ColorChoice::default(),
            print_route: false,
            print_score: false,
            schemas: Vec::new(),
        }
    }
}

impl SearchOptionsBuilder {
    /// Builds the SearchOptions from the builder
    pub fn build(&mut self) -> Result<SearchOptions, SearchOptionsBuilderError> {
        self.final_build().map(|opts| opts.build())
    }
}

impl SearchOptions {
    /// Finalizes the options
    pub fn build(mut self) -> Self {
        let trimmed = self.query.trim();
        if trimmed.len() != self.query.len() {
            self.query = trimmed.to_string();
        }
        if self.tiebreak.is_empty() {
            self.tiebreak = RankCriteria::default_tiebreak();
        }
        self
    }
}

/// When to use colors in the output
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ColorChoice {
    /// Colors when writing to a terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Resolves the choice, `is_terminal` tells whether the output is a terminal
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

#[cfg(feature = "cli")]
impl ValueEnum for ColorChoice {
    fn value_variants<'a>() -> &'a [Self] {
        &[ColorChoice::Auto, ColorChoice::Always, ColorChoice::Never]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            ColorChoice::Auto => PossibleValue::new("auto"),
            ColorChoice::Always => PossibleValue::new("always"),
            ColorChoice::Never => PossibleValue::new("never"),
        })
    }
}
