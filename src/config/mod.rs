/*!
Configuration of a context.

All configuration for a context is contained within the context, set before the first clause
is added. Each option is bounded, and the bounds are available to external interfaces (e.g.
the cli) for validation.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The upper bound on resolvents admitted during a proof attempt.
    ///
    /// The bound is checked after every admission, so a saturation loop always terminates,
    /// at the cost of reporting a proof attempt inconclusive.
    pub max_steps: ConfigOption<usize>,
}

impl Default for Config {
    /// The default configuration gives quick, deterministic results on small problems.
    fn default() -> Self {
        Config {
            max_steps: ConfigOption {
                name: "max_steps",
                min: 0,
                max: usize::MAX,
                value: 500,
            },
        }
    }
}
