//! Deprecated accessor names
//!
//! Older releases exposed `m`/`n`, `absolute`/`relative`, `classes` and
//! `css`. They remain available through [`Legacy`], which reports every call
//! to a [`Diagnostics`] sink before forwarding to the current API.

use bigdecimal::BigDecimal;
use tracing::warn;

use crate::comparator::{Change, Comparator};
use crate::i18n::Translation;

use super::Presenter;

/// A use of a deprecated name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deprecation {
    pub old: &'static str,
    pub replacement: &'static str,
}

/// Receives deprecation reports
pub trait Diagnostics {
    fn deprecated(&self, deprecation: Deprecation);
}

/// Reports deprecations as `tracing` warnings on `comparison::deprecated`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn deprecated(&self, deprecation: Deprecation) {
        warn!(
            target: "comparison::deprecated",
            old = deprecation.old,
            replacement = deprecation.replacement,
            "DEPRECATION WARNING: use #{} instead of #{}",
            deprecation.replacement,
            deprecation.old
        );
    }
}

/// Deprecated names over a comparator or presenter
pub struct Legacy<'p, T> {
    target: &'p T,
    diagnostics: &'p dyn Diagnostics,
}

impl<'p, T> Legacy<'p, T> {
    pub fn new(target: &'p T, diagnostics: &'p dyn Diagnostics) -> Self {
        Self {
            target,
            diagnostics,
        }
    }

    fn report(&self, old: &'static str, replacement: &'static str) {
        self.diagnostics.deprecated(Deprecation { old, replacement });
    }
}

impl<T: AsRef<Comparator>> Legacy<'_, T> {
    pub fn m(&self) -> &BigDecimal {
        self.report("m", "value");
        self.target.as_ref().value()
    }

    pub fn n(&self) -> &BigDecimal {
        self.report("n", "other");
        self.target.as_ref().other()
    }

    pub fn absolute(&self) -> &BigDecimal {
        self.report("absolute", "difference");
        self.target.as_ref().difference()
    }

    /// The raw percentage change
    pub fn relative(&self) -> &Change {
        self.report("relative", "percentage");
        self.target.as_ref().percentage()
    }
}

impl Legacy<'_, Presenter<'_>> {
    pub fn classes(&self) -> Translation {
        self.report("classes", "dom_classes");
        self.target.dom_classes()
    }

    pub fn css(&self) -> String {
        self.report("css", "inline_style");
        self.target.inline_style()
    }
}

impl Comparator {
    /// Deprecated names reporting through `tracing`
    pub fn legacy(&self) -> Legacy<'_, Comparator> {
        Legacy::new(self, &TracingDiagnostics)
    }
}

impl<'a> Presenter<'a> {
    /// Deprecated names reporting through `tracing`
    pub fn legacy(&self) -> Legacy<'_, Presenter<'a>> {
        Legacy::new(self, &TracingDiagnostics)
    }
}
