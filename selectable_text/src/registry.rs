// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validator registration and conflict resolution.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::validator::Validator;
use crate::Error;

/// The callback invoked when a token resolved to a validator is selected.
///
/// Receives the token text and the validator that claimed it.
pub type SelectionAction = Box<dyn Fn(&str, &Validator) + Send + Sync>;

/// Chooses one validator when several match the same word.
pub trait ConflictResolver {
    /// Returns the index into `candidates` of the winning validator.
    ///
    /// `candidates` is never empty and is in registration order.
    fn resolve(&self, candidates: &[&Validator]) -> usize;
}

impl<F> ConflictResolver for F
where
    F: Fn(&[&Validator]) -> usize,
{
    fn resolve(&self, candidates: &[&Validator]) -> usize {
        self(candidates)
    }
}

/// The earliest registered candidate wins.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FirstRegistered;

impl ConflictResolver for FirstRegistered {
    fn resolve(&self, _candidates: &[&Validator]) -> usize {
        0
    }
}

/// The candidate requiring the longest prefix wins.
///
/// Candidates without a required prefix rank below any that have one. Ties go to the
/// earliest registered candidate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LongestPrefixWins;

impl ConflictResolver for LongestPrefixWins {
    fn resolve(&self, candidates: &[&Validator]) -> usize {
        let mut best = 0;
        let mut best_len = None;
        for (index, candidate) in candidates.iter().enumerate() {
            let len = candidate.required_prefix().map(str::len);
            if len > best_len {
                best = index;
                best_len = len;
            }
        }
        best
    }
}

/// A registered validator and its selection action.
pub struct Registration {
    validator: Validator,
    action: SelectionAction,
}

impl Registration {
    /// The registered validator.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Runs the selection action for `text`.
    pub fn perform(&self, text: &str) {
        (self.action)(text, &self.validator);
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

/// The set of validators consulted for every word token.
///
/// Validators are kept in registration order and deduplicated by
/// [identity](Validator::identity).
pub struct ValidatorRegistry {
    registrations: Vec<Registration>,
    identities: HashSet<String>,
    resolver: Box<dyn ConflictResolver + Send + Sync>,
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("registrations", &self.registrations)
            .finish_non_exhaustive()
    }
}

impl ValidatorRegistry {
    /// Creates an empty registry that resolves conflicts with [`FirstRegistered`].
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
            identities: HashSet::new(),
            resolver: Box::new(FirstRegistered),
        }
    }

    /// Replaces the conflict resolver.
    pub fn set_conflict_resolver(
        &mut self,
        resolver: impl ConflictResolver + Send + Sync + 'static,
    ) {
        self.resolver = Box::new(resolver);
    }

    /// Registers `validator` with an action run when a token it claims is selected.
    ///
    /// Registering a validator whose identity is already present fails and leaves the
    /// registry untouched.
    pub fn register(
        &mut self,
        validator: Validator,
        on_select: impl Fn(&str, &Validator) + Send + Sync + 'static,
    ) -> Result<(), Error> {
        let identity = validator.identity();
        if self.identities.contains(&identity) {
            return Err(Error::DuplicateValidator { identity });
        }
        tracing::debug!(%identity, "registered validator");
        self.identities.insert(identity);
        self.registrations.push(Registration {
            validator,
            action: Box::new(on_select),
        });
        Ok(())
    }

    /// Registers `validator` without a selection action.
    pub fn register_silent(&mut self, validator: Validator) -> Result<(), Error> {
        self.register(validator, |_, _| {})
    }

    /// Removes the validator sharing `validator`'s identity.
    ///
    /// Returns `false` if no such validator was registered.
    pub fn unregister(&mut self, validator: &Validator) -> bool {
        let identity = validator.identity();
        if !self.identities.remove(&identity) {
            return false;
        }
        self.registrations
            .retain(|registration| registration.validator.identity() != identity);
        tracing::debug!(%identity, "unregistered validator");
        true
    }

    /// Returns `true` if a validator with `validator`'s identity is registered.
    pub fn contains(&self, validator: &Validator) -> bool {
        self.identities.contains(&validator.identity())
    }

    /// The registrations, in registration order.
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// The number of registered validators.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Finds the registration that claims `text`, if any.
    pub fn resolve(&self, text: &str) -> Option<&Registration> {
        let matching: SmallVec<[&Registration; 4]> = self
            .registrations
            .iter()
            .filter(|registration| registration.validator.matches(text))
            .collect();
        match matching.as_slice() {
            [] => None,
            [only] => Some(*only),
            candidates => {
                let validators: SmallVec<[&Validator; 4]> = candidates
                    .iter()
                    .map(|registration| &registration.validator)
                    .collect();
                debug_assert!(!validators.is_empty(), "conflict with no candidates");
                let chosen = self.resolver.resolve(&validators);
                match candidates.get(chosen) {
                    Some(registration) => Some(*registration),
                    None => {
                        tracing::warn!(
                            chosen,
                            candidates = candidates.len(),
                            "conflict resolver returned an out of range index, using the first candidate"
                        );
                        Some(candidates[0])
                    }
                }
            }
        }
    }

    /// Runs the action of the registration that claims `text`.
    ///
    /// Returns `false` if no validator claims it.
    pub fn perform_action(&self, text: &str) -> bool {
        match self.resolve(text) {
            Some(registration) => {
                registration.perform(text);
                true
            }
            None => false,
        }
    }
}
