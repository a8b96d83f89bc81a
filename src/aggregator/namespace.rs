//! Namespaces of interest inside a stack.
//!
//! Each namespace is identified by one or more fixed substrings. For every
//! stack we attribute samples to the deepest frame that belongs to the
//! namespace, which is usually the most specific method worth looking at.

use crate::utils::config::{CORE_MARKERS, SERVICE_MARKERS, TINK_MARKERS};
use std::fmt;

/// Code areas tracked separately in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Pseudo service layer (controllers, request handling)
    Service,
    /// Pseudo core library (pseudonymization functions)
    Core,
    /// Tink crypto library, upstream or the in-house fork
    Tink,
}

impl Namespace {
    /// All namespaces in report order
    pub const ALL: [Namespace; 3] = [Namespace::Service, Namespace::Core, Namespace::Tink];

    /// Substrings that place a frame in this namespace
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            Namespace::Service => SERVICE_MARKERS,
            Namespace::Core => CORE_MARKERS,
            Namespace::Tink => TINK_MARKERS,
        }
    }

    /// Check whether a frame belongs to this namespace
    pub fn matches(self, frame: &str) -> bool {
        self.markers().iter().any(|marker| frame.contains(marker))
    }

    /// Find the deepest (closest to leaf) frame in this namespace
    ///
    /// `frames` is ordered caller first, as in collapsed-stack lines.
    pub fn deepest_frame<'a>(self, frames: &[&'a str]) -> Option<&'a str> {
        frames.iter().rev().copied().find(|frame| self.matches(frame))
    }

    /// Short lowercase label used in section titles
    pub fn label(self) -> &'static str {
        match self {
            Namespace::Service => "service",
            Namespace::Core => "core",
            Namespace::Tink => "tink",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
