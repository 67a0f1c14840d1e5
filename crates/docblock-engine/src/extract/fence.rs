#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionSig {
    /// A triple-backtick code fence.
    Fence,
    /// A triple-colon directive block (`:::tip` ... `:::`).
    Directive,
}

/// Markers that open or close a region whose lines must stay tight when joined.
pub struct PreservedRegion;

impl PreservedRegion {
    pub const BACKTICKS: &'static str = "```";
    pub const COLONS: &'static str = ":::";

    pub fn sig(line: &str) -> Option<RegionSig> {
        if line.starts_with(Self::BACKTICKS) {
            Some(RegionSig::Fence)
        } else if line.starts_with(Self::COLONS) {
            Some(RegionSig::Directive)
        } else {
            None
        }
    }

    pub fn is_fence(line: &str) -> bool {
        matches!(Self::sig(line), Some(RegionSig::Fence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(PreservedRegion::sig("```rust"), Some(RegionSig::Fence));
    }

    #[test]
    fn detect_directive() {
        assert_eq!(PreservedRegion::sig(":::tip"), Some(RegionSig::Directive));
        assert_eq!(PreservedRegion::sig(":::"), Some(RegionSig::Directive));
    }

    #[test]
    fn no_marker() {
        assert_eq!(PreservedRegion::sig("hello ```"), None);
        assert_eq!(PreservedRegion::sig("~~~"), None);
    }

    #[test]
    fn is_fence_ignores_directives() {
        assert!(PreservedRegion::is_fence("```"));
        assert!(!PreservedRegion::is_fence(":::"));
    }
}
