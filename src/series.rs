//! Series variable: one aligned pair of sequences with optional
//! preprocessing and weighting.

use std::borrow::Cow;

use crate::error::{DtwError, PreprocessError};
use crate::preprocess::Preprocessor;

/// One variable of a (possibly multivariate) alignment problem: the
/// variable's values in series A and series B, an optional display name, an
/// optional [`Preprocessor`], and a multiplicative weight.
///
/// Sequences are validated at construction: non-empty, all values finite.
/// Cross-variable length agreement is checked by the engine, which owns the
/// full variable collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesVariable {
    a: Vec<f64>,
    b: Vec<f64>,
    name: Option<String>,
    preprocessor: Option<Preprocessor>,
    weight: f64,
}

impl SeriesVariable {
    /// Create a new variable from its two raw sequences.
    ///
    /// Defaults: no name, no preprocessor, weight `1.0`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptySeries`] | Either sequence is empty |
    /// | [`DtwError::NonFiniteValue`] | Either sequence contains NaN or ±infinity |
    ///
    /// The `variable` field of these errors is `0`; variables are constructed
    /// one at a time, before the engine sees the collection.
    pub fn new(a: Vec<f64>, b: Vec<f64>) -> Result<Self, DtwError> {
        validate_sequence(&a)?;
        validate_sequence(&b)?;
        Ok(Self {
            a,
            b,
            name: None,
            preprocessor: None,
            weight: 1.0,
        })
    }

    /// Set a display name for the variable.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the preprocessor applied to both sequences before distance
    /// computation.
    #[must_use]
    pub fn with_preprocessor(mut self, preprocessor: Preprocessor) -> Self {
        self.preprocessor = Some(preprocessor);
        self
    }

    /// Set the multiplicative weight of this variable's contribution to the
    /// local distance.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Return the display name, if one was set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Return the variable's weight.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Return the raw (unpreprocessed) series A values.
    #[must_use]
    pub fn raw_a(&self) -> &[f64] {
        &self.a
    }

    /// Return the raw (unpreprocessed) series B values.
    #[must_use]
    pub fn raw_b(&self) -> &[f64] {
        &self.b
    }

    /// Return the effective series A: the preprocessed sequence when a
    /// preprocessor is set, otherwise a borrow of the raw values. Computed on
    /// demand and not cached; the engine calls this exactly once per series.
    ///
    /// # Errors
    ///
    /// Propagates the preprocessor's failure (zero range, zero variance,
    /// too-short sequence).
    pub fn effective_a(&self) -> Result<Cow<'_, [f64]>, PreprocessError> {
        self.effective(&self.a)
    }

    /// Return the effective series B. See [`SeriesVariable::effective_a`].
    ///
    /// # Errors
    ///
    /// Propagates the preprocessor's failure.
    pub fn effective_b(&self) -> Result<Cow<'_, [f64]>, PreprocessError> {
        self.effective(&self.b)
    }

    fn effective<'s>(&self, raw: &'s [f64]) -> Result<Cow<'s, [f64]>, PreprocessError> {
        match &self.preprocessor {
            None => Ok(Cow::Borrowed(raw)),
            Some(p) => Ok(Cow::Owned(p.apply(raw)?)),
        }
    }
}

fn validate_sequence(values: &[f64]) -> Result<(), DtwError> {
    if values.is_empty() {
        return Err(DtwError::EmptySeries { variable: 0 });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(DtwError::NonFiniteValue { variable: 0, index });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_a() {
        let result = SeriesVariable::new(vec![], vec![1.0]);
        assert!(matches!(result, Err(DtwError::EmptySeries { .. })));
    }

    #[test]
    fn rejects_empty_b() {
        let result = SeriesVariable::new(vec![1.0], vec![]);
        assert!(matches!(result, Err(DtwError::EmptySeries { .. })));
    }

    #[test]
    fn rejects_nan() {
        let result = SeriesVariable::new(vec![1.0, f64::NAN], vec![1.0]);
        assert!(matches!(
            result,
            Err(DtwError::NonFiniteValue { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_infinity_in_b() {
        let result = SeriesVariable::new(vec![1.0], vec![f64::INFINITY, 2.0]);
        assert!(matches!(
            result,
            Err(DtwError::NonFiniteValue { index: 0, .. })
        ));
    }

    #[test]
    fn defaults() {
        let v = SeriesVariable::new(vec![1.0, 2.0], vec![3.0]).unwrap();
        assert_eq!(v.name(), None);
        assert_eq!(v.weight(), 1.0);
        assert_eq!(v.raw_a(), &[1.0, 2.0]);
        assert_eq!(v.raw_b(), &[3.0]);
    }

    #[test]
    fn builder_chaining() {
        let v = SeriesVariable::new(vec![1.0], vec![2.0])
            .unwrap()
            .with_name("temperature")
            .with_weight(0.5);
        assert_eq!(v.name(), Some("temperature"));
        assert_eq!(v.weight(), 0.5);
    }

    #[test]
    fn effective_borrows_without_preprocessor() {
        let v = SeriesVariable::new(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
        let eff = v.effective_a().unwrap();
        assert!(matches!(eff, Cow::Borrowed(_)));
        assert_eq!(eff.as_ref(), &[1.0, 2.0]);
    }

    #[test]
    fn effective_applies_preprocessor() {
        let v = SeriesVariable::new(vec![1.0, 3.0], vec![2.0, 4.0])
            .unwrap()
            .with_preprocessor(Preprocessor::Centralization);
        let eff_a = v.effective_a().unwrap();
        assert_eq!(eff_a.as_ref(), &[-1.0, 1.0]);
        let eff_b = v.effective_b().unwrap();
        assert_eq!(eff_b.as_ref(), &[-1.0, 1.0]);
    }

    #[test]
    fn effective_propagates_failure() {
        let v = SeriesVariable::new(vec![5.0, 5.0], vec![1.0, 2.0])
            .unwrap()
            .with_preprocessor(Preprocessor::unit_normalization());
        assert!(matches!(
            v.effective_a(),
            Err(PreprocessError::ConstantSequence { .. })
        ));
        // Series B has a proper range and still succeeds.
        assert!(v.effective_b().is_ok());
    }

    #[test]
    fn raw_views_unchanged_by_preprocessor() {
        let v = SeriesVariable::new(vec![1.0, 3.0], vec![2.0, 4.0])
            .unwrap()
            .with_preprocessor(Preprocessor::Standardization);
        assert_eq!(v.raw_a(), &[1.0, 3.0]);
        assert_eq!(v.raw_b(), &[2.0, 4.0]);
    }
}
