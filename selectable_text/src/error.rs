// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Errors reported when the crate is configured incorrectly.
///
/// None of these are produced while tokenizing, styling or laying out: those passes are
/// total. They surface at the point where a caller hands over bad configuration, and are
/// never retried internally.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A validator with the same identity has already been registered.
    #[error("validator with identity `{identity}` has already been registered")]
    DuplicateValidator {
        /// The identity shared by both validators.
        identity: String,
    },

    /// A regular expression validator was built from a pattern that does not compile.
    #[error("invalid regex pattern `{pattern}`")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying compilation error.
        #[source]
        source: regex::Error,
    },

    /// An expansion control was configured with a collapsed line count of zero.
    #[error("collapsed line count of an expansion control must be non-zero")]
    ZeroCollapsedLines,

    /// An expansion control was configured with a non-zero expanded line count that does
    /// not exceed the collapsed line count.
    #[error(
        "expanded line count {expanded} must be 0 (unlimited) or greater than the collapsed line count {collapsed}"
    )]
    InvalidExpansionLines {
        /// The collapsed line count.
        collapsed: usize,
        /// The expanded line count.
        expanded: usize,
    },

    /// An expansion operation was requested while no expansion control is configured.
    #[error("no expansion control is configured")]
    NoExpansionControl,

    /// A style range had `start > end`.
    #[error("invalid range {start}..{end}: start > end")]
    InvalidRange {
        /// The start byte index of the range.
        start: usize,
        /// The end byte index of the range.
        end: usize,
    },

    /// A style range was out of bounds for the text.
    #[error("range {start}..{end} out of bounds for len {len}")]
    InvalidBounds {
        /// The start byte index of the range.
        start: usize,
        /// The end byte index of the range.
        end: usize,
        /// The length of the text in bytes.
        len: usize,
    },

    /// A style range endpoint did not fall on a UTF-8 character boundary.
    #[error("range {start}..{end}: index {index} not on UTF-8 boundary")]
    NotOnCharBoundary {
        /// The start byte index of the range.
        start: usize,
        /// The end byte index of the range.
        end: usize,
        /// The offending endpoint.
        index: usize,
    },
}
