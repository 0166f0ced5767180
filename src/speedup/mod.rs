//! Step timings and derived speedup series

use crate::error::ArgumentError;

/// Node counts each step was timed at, in input order
pub const NODE_COUNTS: [u32; 4] = [1, 2, 4, 8];

/// Number of steps in a report
pub const STEP_COUNT: usize = 3;

/// Number of timing values in a report
pub const TIMING_COUNT: usize = STEP_COUNT * NODE_COUNTS.len();

/// Positional arguments a report is built from: step names, then timings
pub const REQUIRED_ARGS: usize = STEP_COUNT + TIMING_COUNT;

/// Timings of one named step at every node count
#[derive(Debug, Clone, PartialEq)]
pub struct StepMeasurement {
    /// Step name, used as the line label and table row header
    pub name: String,
    /// Timing at 1, 2, 4 and 8 nodes
    pub timings: [f64; 4],
}

impl StepMeasurement {
    pub fn new(name: impl Into<String>, timings: [f64; 4]) -> Self {
        Self {
            name: name.into(),
            timings,
        }
    }

    /// Timing at the single-node baseline
    pub fn baseline(&self) -> f64 {
        self.timings[0]
    }

    /// Speedup of every node count relative to the single-node baseline
    ///
    /// Division is not guarded: a zero timing yields a non-finite ratio.
    pub fn speedups(&self) -> SpeedupSeries {
        let baseline = self.baseline();
        let mut values = [1.0; 4];
        for (value, timing) in values.iter_mut().zip(self.timings.iter()).skip(1) {
            *value = baseline / timing;
        }
        SpeedupSeries(values)
    }
}

/// Speedup ratios at 1, 2, 4 and 8 nodes; the first is always 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedupSeries([f64; 4]);

impl SpeedupSeries {
    pub fn values(&self) -> &[f64; 4] {
        &self.0
    }

    /// Whether every ratio is a finite number
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

/// The three measured steps of one scaling run
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingReport {
    steps: [StepMeasurement; STEP_COUNT],
}

impl ScalingReport {
    /// Build a report from step names and step-major timings
    ///
    /// Timings `4k..4k+4` belong to step `k`.
    pub fn new(names: [String; STEP_COUNT], timings: [f64; TIMING_COUNT]) -> Self {
        let per_step = NODE_COUNTS.len();
        let steps = std::array::from_fn(|k| {
            StepMeasurement::new(
                names[k].clone(),
                std::array::from_fn(|i| timings[k * per_step + i]),
            )
        });
        Self { steps }
    }

    /// Parse positional arguments: three step names followed by twelve timings
    ///
    /// Arguments past the first fifteen are ignored.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ArgumentError> {
        if args.len() < REQUIRED_ARGS {
            return Err(ArgumentError::MissingArguments {
                expected: REQUIRED_ARGS,
                got: args.len(),
            });
        }

        let names: [String; STEP_COUNT] = std::array::from_fn(|k| args[k].as_ref().to_string());

        let mut timings = [0.0; TIMING_COUNT];
        for (i, slot) in timings.iter_mut().enumerate() {
            let index = STEP_COUNT + i;
            let raw = args[index].as_ref();
            *slot = raw
                .trim()
                .parse::<f64>()
                .map_err(|source| ArgumentError::InvalidTiming {
                    position: index + 1,
                    value: raw.to_string(),
                    source,
                })?;
        }

        Ok(Self::new(names, timings))
    }

    pub fn steps(&self) -> &[StepMeasurement] {
        &self.steps
    }

    /// Speedup series of every step, in step order
    pub fn speedups(&self) -> Vec<SpeedupSeries> {
        self.steps.iter().map(StepMeasurement::speedups).collect()
    }

    /// Smallest and largest finite speedup across all steps
    pub fn finite_speedup_range(&self) -> (f64, f64) {
        self.speedups()
            .iter()
            .flat_map(|s| s.values().iter().copied())
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }
}
