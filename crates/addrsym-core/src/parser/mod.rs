//! # Parsers
//!
//! Parsers turn textual crash data into an ordered [`FrameSequence`].
//!
//! Every input shape gets its own strategy type implementing [`Parser`]:
//!
//! - [`FragmentParser`]: bare addresses, one caller-supplied module
//! - [`ModuleOffsetParser`]: `module+offset` tokens over a set of known modules
//!
//! Callers that pick the strategy at runtime hold a [`ParserKind`], which
//! dispatches with a `match` rather than through a trait object.
//!
//! ## Example
//!
//! ```rust
//! use addrsym_core::parser::{FragmentParser, Parser, ParserKind};
//!
//! let parser = ParserKind::from(FragmentParser::new("libfoo.so", "ABCD1234", 0x1000));
//! let frames = parser.parse("0x1500 garbage 0x0500").unwrap();
//! for emitted in &frames {
//!     println!("{}", emitted.frame);
//! }
//! ```

pub mod fragment;
pub mod module_offset;
pub mod sink;
pub mod tokenizer;

pub use fragment::FragmentParser;
pub use module_offset::ModuleOffsetParser;
pub use sink::{FrameSequence, RequiredModules};
pub use tokenizer::tokenize;

use crate::error::AddrsymResult;

/// Text → frame sequence.
///
/// A strategy is configured once at construction and may then be invoked any
/// number of times; each call returns a fresh sequence. Strategies for flat
/// address lists never return `Err`: input they cannot decode becomes
/// placeholder frames.
pub trait Parser
{
    /// Parse `input` into an ordered sequence of frames.
    ///
    /// ## Errors
    ///
    /// Only strategies whose input has structure beyond a token list can fail.
    fn parse(&self, input: &str) -> AddrsymResult<FrameSequence>;
}

/// A parser strategy selected by the caller.
#[derive(Debug, Clone)]
pub enum ParserKind
{
    /// Bare addresses for one module.
    Fragment(FragmentParser),
    /// `module+offset` tokens.
    ModuleOffset(ModuleOffsetParser),
}

impl ParserKind
{
    /// Short name of the selected strategy, for logs and diagnostics.
    pub const fn name(&self) -> &'static str
    {
        match self {
            ParserKind::Fragment(_) => "fragment",
            ParserKind::ModuleOffset(_) => "module-offset",
        }
    }
}

impl Parser for ParserKind
{
    fn parse(&self, input: &str) -> AddrsymResult<FrameSequence>
    {
        match self {
            ParserKind::Fragment(parser) => parser.parse(input),
            ParserKind::ModuleOffset(parser) => parser.parse(input),
        }
    }
}

impl From<FragmentParser> for ParserKind
{
    fn from(parser: FragmentParser) -> Self
    {
        ParserKind::Fragment(parser)
    }
}

impl From<ModuleOffsetParser> for ParserKind
{
    fn from(parser: ModuleOffsetParser) -> Self
    {
        ParserKind::ModuleOffset(parser)
    }
}

