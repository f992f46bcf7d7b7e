use itertools::Itertools;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Where in FramScript the members of a type are reachable.
///
/// The set is closed: any other `context` attribute value is rejected by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum Context {
  #[strum(serialize = "Command line interface")]
  CommandLineInterface,
  #[strum(serialize = "Experiment definition")]
  ExperimentDefinition,
  #[strum(serialize = "Fitness formula")]
  FitnessFormula,
  #[strum(serialize = "Framsticks Theater")]
  FramsticksTheater,
  #[strum(serialize = "Global context")]
  Global,
  #[strum(serialize = "Neuron definitions")]
  NeuronDefinitions,
  #[strum(serialize = "Signal label formula")]
  SignalLabelFormula,
  #[strum(serialize = "Visual style definition")]
  VisualStyleDefinition,
  #[strum(serialize = "expdef file")]
  ExpdefFile,
  #[strum(serialize = "neuro file")]
  NeuroFile,
  #[strum(serialize = "properties file")]
  PropertiesFile,
  #[strum(serialize = "script file")]
  ScriptFile,
  #[strum(serialize = "show file")]
  ShowFile,
  #[strum(serialize = "sim file")]
  SimFile,
  #[strum(serialize = "state file")]
  StateFile,
  #[strum(serialize = "style file")]
  StyleFile,
}

impl Context {
  #[must_use]
  pub fn as_str(self) -> &'static str {
    self.into()
  }

  /// Only global-context types are reachable from the top-level namespace that gets stubbed.
  #[must_use]
  pub const fn is_global(self) -> bool {
    matches!(self, Self::Global)
  }

  /// Comma separated list of every accepted spelling, for diagnostics.
  #[must_use]
  pub fn expected_values() -> String {
    Self::iter().map(|context| format!("\"{context}\"")).join(", ")
  }
}
