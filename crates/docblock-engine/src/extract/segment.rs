use crate::models::{ChannelValues, Record};

use super::channels::{COMMENT_MARKER, ChannelKey, ChannelRegistry};

/// Per-channel line stacks for one block scan, emptied after every flush.
#[derive(Debug)]
pub struct CommentStacks<'r> {
    registry: &'r ChannelRegistry,
    stacks: Vec<(ChannelKey, Vec<String>)>,
}

impl<'r> CommentStacks<'r> {
    pub fn new(registry: &'r ChannelRegistry) -> Self {
        let stacks = registry
            .channels()
            .iter()
            .map(|def| (def.key, Vec::new()))
            .collect();
        Self { registry, stacks }
    }

    pub fn push(&mut self, key: ChannelKey, content: &str) {
        if let Some((_, stack)) = self.stacks.iter_mut().find(|(k, _)| *k == key) {
            stack.push(content.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.iter().all(|(_, stack)| stack.is_empty())
    }

    /// Render every channel into a record for `declaration` and reset the stacks.
    pub fn flush(&mut self, declaration: &str) -> Record {
        let mut channels = ChannelValues::default();
        for (def, (_, stack)) in self.registry.channels().iter().zip(self.stacks.iter_mut()) {
            channels.set(def.key, def.renderer.render(stack));
            stack.clear();
        }
        Record::new(declaration, channels)
    }
}

/// Split block interior lines into one record per declaration line.
///
/// Every trimmed line is either pushed onto the stack of the channel whose
/// prefix it matches, dropped as a plain comment, or taken as a declaration
/// that closes the current record. Annotations left over after the last
/// declaration come back as a final record with an empty declaration.
pub fn segment_lines<S: AsRef<str>>(lines: &[S], registry: &ChannelRegistry) -> Vec<Record> {
    let mut stacks = CommentStacks::new(registry);
    let mut records = Vec::new();

    for line in lines {
        let line = line.as_ref().trim();
        if let Some((key, content)) = registry.classify(line) {
            stacks.push(key, content);
            continue;
        }
        if line.starts_with(COMMENT_MARKER) {
            continue;
        }
        records.push(stacks.flush(line));
    }

    if !stacks.is_empty() {
        records.push(stacks.flush(""));
    }

    records
}
