//! First-order Trotter product-formula decomposition.
//!
//! Approximates `exp(-i Σ_j c_j H_j)` for generators `H_j = Σ_k a_jk P_jk`
//! by Pauli rotations of angle `c_j · a_jk / n`, repeated `n` times.
//!
//! # Sequential mode
//!
//!   exp(-i c_0 H_0) · exp(-i c_1 H_1) · … ≈ T_n(c_0 H_0) · T_n(c_1 H_1) · …
//!
//! where `T_n(H) = [∏_k exp(-i a_k P_k / n)]^n` trotterizes each generator
//! on its own.
//!
//! # Joint mode
//!
//!   exp(-i Σ_j c_j H_j) ≈ [∏_j T_1(c_j H_j / n)]^n
//!
//! interleaving one slice of every generator per step. Error: O(t² / n).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, trace};

use qtrot_ir::{Circuit, Coefficient, RotationGate};

use crate::config::TrotterConfig;
use crate::decomposition::Decomposition;
use crate::error::{SimError, SimResult};
use crate::hamiltonian::{Generator, PauliTerm};

/// Per-call overrides for [`FirstOrderTrotter::expand`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandOptions {
    /// Trotter steps; `None` uses the configured value.
    pub steps: Option<usize>,
    /// Scale applied to the whole generator.
    pub factor: Coefficient,
    /// Term shuffling; `None` uses the configured value.
    pub randomize: Option<bool>,
}

impl ExpandOptions {
    /// Configured steps and randomization, factor `1.0`.
    pub fn new() -> Self {
        Self {
            steps: None,
            factor: Coefficient::one(),
            randomize: None,
        }
    }

    /// Override the number of steps.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Set the generator scale.
    #[must_use]
    pub fn with_factor(mut self, factor: impl Into<Coefficient>) -> Self {
        self.factor = factor.into();
        self
    }

    /// Override term shuffling.
    #[must_use]
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = Some(randomize);
        self
    }
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// First-order Trotter decomposer.
#[derive(Debug, Clone)]
pub struct FirstOrderTrotter {
    config: TrotterConfig,
}

impl FirstOrderTrotter {
    /// Construct a decomposer, validating the configuration.
    pub fn new(config: TrotterConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this decomposer was built with.
    pub fn config(&self) -> &TrotterConfig {
        &self.config
    }

    /// Expand a single generator using the decomposer's own RNG.
    pub fn expand<G: Generator>(&self, generator: &G, options: &ExpandOptions) -> SimResult<Circuit> {
        self.expand_with_rng(generator, options, &mut self.default_rng())
    }

    /// Expand a single generator into `steps` slices of Pauli rotations.
    ///
    /// Each slice visits the generator's terms in stored order, or in a
    /// fresh random order when randomizing. Weight-zero terms are skipped,
    /// as are angles with `|angle| <= threshold`. A symbolic angle such as
    /// `(t / n) * a` is compared through its numeric part `a / n`; if the
    /// factor is not a plain product, `coefficient / steps` is used.
    pub fn expand_with_rng<G, R>(
        &self,
        generator: &G,
        options: &ExpandOptions,
        rng: &mut R,
    ) -> SimResult<Circuit>
    where
        G: Generator,
        R: Rng + ?Sized,
    {
        let steps = options.steps.unwrap_or(self.config.steps);
        if steps == 0 {
            return Err(SimError::InvalidSteps(0));
        }
        if !generator.is_hermitian() {
            return Err(SimError::NonHermitian {
                n_terms: generator.pauli_terms().len(),
            });
        }
        let randomize = options.randomize.unwrap_or(self.config.randomize);
        let scaled = &options.factor / steps as f64;

        let stored = generator.pauli_terms();
        let mut circuit = Circuit::new("trotter1");
        let mut terms: Vec<&G::Term> = Vec::with_capacity(stored.len());

        for _ in 0..steps {
            terms.clear();
            terms.extend(stored);
            if randomize {
                terms.shuffle(rng);
            }
            for term in &terms {
                if term.weight() == 0 {
                    continue;
                }
                let angle = &scaled * term.coefficient();
                if self.is_negligible(&angle, term.coefficient() / steps as f64) {
                    trace!(pauli = %term.pauli(), %angle, "dropping negligible rotation");
                    continue;
                }
                circuit.push(RotationGate::new(term.pauli().clone(), angle));
            }
        }

        Ok(circuit)
    }

    /// Symbolic angles are judged by their numeric multiplier; `fallback`
    /// is used when that multiplier cannot be separated out.
    fn is_negligible(&self, angle: &Coefficient, fallback: f64) -> bool {
        let magnitude = angle
            .as_f64()
            .or_else(|| angle.constant_factor())
            .unwrap_or(fallback);
        magnitude.abs() <= self.config.threshold
    }

    fn default_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Decomposition for FirstOrderTrotter {
    fn name(&self) -> &str {
        "first_order_trotter"
    }

    #[instrument(
        skip_all,
        fields(
            n_generators = generators.len(),
            steps = self.config.steps,
            join = self.config.join_components
        )
    )]
    fn decompose_with_rng<G, R>(
        &self,
        generators: &[G],
        coeffs: Option<&[Coefficient]>,
        rng: &mut R,
    ) -> SimResult<Circuit>
    where
        G: Generator,
        R: Rng + ?Sized,
    {
        let factors: Vec<Coefficient> = match coeffs {
            Some(c) if c.len() != generators.len() => {
                return Err(SimError::CoefficientCountMismatch {
                    generators: generators.len(),
                    coeffs: c.len(),
                });
            }
            Some(c) => c.to_vec(),
            None => vec![Coefficient::one(); generators.len()],
        };

        debug!(
            randomize = self.config.randomize,
            randomize_component_order = self.config.randomize_component_order,
            threshold = self.config.threshold,
            "decomposing generators with first-order Trotter"
        );

        // Generators are visited through a permutation of indices so each
        // coefficient stays paired with its generator.
        let mut order: Vec<usize> = (0..generators.len()).collect();
        let mut result = Circuit::new("trotter1");

        if self.config.join_components {
            let steps = self.config.steps as f64;
            let slice_factors: Vec<Coefficient> = factors.iter().map(|c| c / steps).collect();
            for _ in 0..self.config.steps {
                if self.config.randomize_component_order {
                    order.shuffle(rng);
                }
                for &i in &order {
                    let options = ExpandOptions {
                        steps: Some(1),
                        factor: slice_factors[i].clone(),
                        randomize: Some(self.config.randomize),
                    };
                    result += self.expand_with_rng(&generators[i], &options, rng)?;
                }
            }
        } else {
            if self.config.randomize_component_order {
                order.shuffle(rng);
            }
            for &i in &order {
                let options = ExpandOptions {
                    steps: Some(self.config.steps),
                    factor: factors[i].clone(),
                    randomize: Some(self.config.randomize),
                };
                result += self.expand_with_rng(&generators[i], &options, rng)?;
            }
        }

        debug!(n_gates = result.len(), "decomposition finished");
        Ok(result)
    }

    fn decompose<G: Generator>(
        &self,
        generators: &[G],
        coeffs: Option<&[Coefficient]>,
    ) -> SimResult<Circuit> {
        self.decompose_with_rng(generators, coeffs, &mut self.default_rng())
    }
}
