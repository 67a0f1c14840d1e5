use serde::Serialize;

use crate::extract::ChannelKey;

/// Rendered value of every registered channel. `None` means the channel had no lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChannelValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl ChannelValues {
    pub fn get(&self, key: ChannelKey) -> Option<&str> {
        self.slot(key).as_deref()
    }

    pub fn set(&mut self, key: ChannelKey, value: Option<String>) {
        *self.slot_mut(key) = value;
    }

    /// Append `content` to the channel, newline separated.
    pub fn append(&mut self, key: ChannelKey, content: &str) {
        let slot = self.slot_mut(key);
        let merged = match slot.take() {
            Some(existing) => format!("{existing}\n{content}"),
            None => content.to_string(),
        };
        *slot = Some(merged);
    }

    pub fn is_empty(&self) -> bool {
        self.wiki.is_none() && self.demo.is_none() && self.extra.is_none()
    }

    fn slot(&self, key: ChannelKey) -> &Option<String> {
        match key {
            ChannelKey::Wiki => &self.wiki,
            ChannelKey::Demo => &self.demo,
            ChannelKey::Extra => &self.extra,
        }
    }

    fn slot_mut(&mut self, key: ChannelKey) -> &mut Option<String> {
        match key {
            ChannelKey::Wiki => &mut self.wiki,
            ChannelKey::Demo => &mut self.demo,
            ChannelKey::Extra => &mut self.extra,
        }
    }
}

/// One declaration line paired with the channel content that preceded it.
///
/// A record with an empty `declaration` carries annotations that trailed the
/// last declaration of a block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub declaration: String,
    #[serde(flatten)]
    pub channels: ChannelValues,
}

impl Record {
    pub fn new(declaration: impl Into<String>, channels: ChannelValues) -> Self {
        Self {
            declaration: declaration.into(),
            channels,
        }
    }

    pub fn wiki(&self) -> Option<&str> {
        self.channels.wiki.as_deref()
    }

    pub fn demo(&self) -> Option<&str> {
        self.channels.demo.as_deref()
    }

    pub fn extra(&self) -> Option<&str> {
        self.channels.extra.as_deref()
    }
}
