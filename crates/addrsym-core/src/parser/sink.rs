//! Ordered frame sink shared by all parsers.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::types::{EmittedFrame, FrameDepth, FrameDescriptor, ModuleDescriptor};

/// Modules referenced by a parse. Almost always one or two.
pub type RequiredModules = SmallVec<[Arc<ModuleDescriptor>; 4]>;

/// Append-only, ordered sequence of emitted frames.
///
/// Parsers push into it through [`FrameSequence::emit`]; callers read it
/// back in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSequence
{
    frames: Vec<EmittedFrame>,
}

impl FrameSequence
{
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self
    {
        Self { frames: Vec::new() }
    }

    /// Append a frame at the given depth.
    pub fn emit(&mut self, depth: FrameDepth, frame: FrameDescriptor)
    {
        self.frames.push(EmittedFrame { depth, frame });
    }

    /// Number of frames emitted so far.
    pub fn len(&self) -> usize
    {
        self.frames.len()
    }

    /// `true` if nothing was emitted.
    pub fn is_empty(&self) -> bool
    {
        self.frames.is_empty()
    }

    /// All emitted frames, in emission order.
    pub fn frames(&self) -> &[EmittedFrame]
    {
        &self.frames
    }

    /// Iterate over the emitted frames.
    pub fn iter(&self) -> std::slice::Iter<'_, EmittedFrame>
    {
        self.frames.iter()
    }

    /// Iterate over the frame descriptors, dropping depth information.
    pub fn descriptors(&self) -> impl Iterator<Item = &FrameDescriptor>
    {
        self.frames.iter().map(|emitted| &emitted.frame)
    }

    /// Number of frames that resolved to a module offset.
    pub fn resolved_count(&self) -> usize
    {
        self.descriptors().filter(|frame| !frame.is_placeholder()).count()
    }

    /// Number of placeholder frames.
    pub fn placeholder_count(&self) -> usize
    {
        self.descriptors().filter(|frame| frame.is_placeholder()).count()
    }

    /// Distinct modules referenced by resolved frames, in first-seen order.
    ///
    /// This is the list of symbol tables a symbolizer would need to fetch.
    pub fn required_modules(&self) -> RequiredModules
    {
        let mut modules = RequiredModules::new();
        for resolved in self.descriptors().filter_map(FrameDescriptor::as_resolved) {
            if !modules.iter().any(|seen| **seen == *resolved.module) {
                modules.push(Arc::clone(&resolved.module));
            }
        }
        modules
    }
}

impl IntoIterator for FrameSequence
{
    type Item = EmittedFrame;
    type IntoIter = std::vec::IntoIter<EmittedFrame>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.frames.into_iter()
    }
}

impl<'a> IntoIterator for &'a FrameSequence
{
    type Item = &'a EmittedFrame;
    type IntoIter = std::slice::Iter<'a, EmittedFrame>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.frames.iter()
    }
}

